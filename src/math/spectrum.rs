// Copyright @yucwang 2026

use super::constants::{Float, Vector3f};

/// One quantized pixel as it appears on the output stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Collapse an accumulated radiance sum into a displayable color: average
/// over the sample count, square-root gamma, truncate into [0, 255].
pub fn tone_map(accumulated: &Vector3f, samples: u32) -> Rgb8 {
    let scale = 1.0 / samples.max(1) as Float;
    let quantize = |channel: Float| -> u8 {
        let mapped = (channel * scale).max(0.0).sqrt();
        (256.0 * mapped.min(0.999)) as u8
    };

    Rgb8::new(quantize(accumulated.x),
              quantize(accumulated.y),
              quantize(accumulated.z))
}
