// Copyright @yucwang 2026

use crate::renderers::double_buffer::BufferError;
use crate::renderers::renderer::RenderError;
use std::thread;
use std::time::Duration;

/// Bounded retry for buffer submissions. A write never legitimately lands
/// on a sealed page under correct job partitioning, so repeated failure
/// is escalated instead of masked.
#[derive(Clone, Copy, Debug)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            backoff: Duration::from_millis(1),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, backoff: Duration) -> Self {
        Self { max_attempts, backoff }
    }

    /// Run `op` until it succeeds or `max_attempts` attempts are spent.
    pub fn run<T, F>(&self, mut op: F) -> Result<T, RenderError>
    where
        F: FnMut() -> Result<T, BufferError>,
    {
        let mut attempts = 0;
        loop {
            match op() {
                Ok(value) => return Ok(value),
                Err(source) => {
                    attempts += 1;
                    if attempts >= self.max_attempts {
                        return Err(RenderError::RetriesExhausted { attempts, source });
                    }
                    log::warn!("buffer write failed ({}), attempt {}/{}",
                               source, attempts, self.max_attempts);
                    thread::sleep(self.backoff);
                }
            }
        }
    }
}
