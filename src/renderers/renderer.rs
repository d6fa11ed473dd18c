// Copyright @yucwang 2026

use crate::core::scene::Scene;
use crate::core::sensor::Sensor;
use crate::io::ppm::PageSink;
use crate::renderers::double_buffer::BufferError;
use std::fmt;

/// Fatal rendering failures. Transient buffer conditions are absorbed by
/// the retry guard and only surface here once escalated.
#[derive(Debug)]
pub enum RenderError {
    RetriesExhausted { attempts: u32, source: BufferError },
    Buffer(BufferError),
    Io(std::io::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::RetriesExhausted { attempts, source } =>
                write!(f, "pixel write failed after {} attempts: {}", attempts, source),
            RenderError::Buffer(err) => write!(f, "buffer fault: {}", err),
            RenderError::Io(err) => write!(f, "output stream error: {}", err),
        }
    }
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::Io(err)
    }
}

impl From<BufferError> for RenderError {
    fn from(err: BufferError) -> Self {
        RenderError::Buffer(err)
    }
}

pub trait Renderer {
    /// Render `extent = (width, height)` pixels of the scene through the
    /// sensor, streaming finished rows to the sink top to bottom.
    fn render(&self, scene: &Scene, sensor: &dyn Sensor,
              extent: (usize, usize), sink: &dyn PageSink) -> Result<(), RenderError>;
}
