// Copyright @yucwang 2026

use crate::core::integrator::Integrator;
use crate::core::rng::LcgRng;
use crate::core::scene::Scene;
use crate::core::sensor::Sensor;
use crate::io::ppm::PageSink;
use crate::math::constants::{Float, Vector2f};
use crate::math::spectrum::{tone_map, Rgb8};
use crate::renderers::double_buffer::DoubleBuffer;
use crate::renderers::renderer::{RenderError, Renderer};
use crate::renderers::retry::RetryPolicy;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::thread;

/// Tracks which of a pair's pages already went out, so emission stays top
/// to bottom even when the lower row fills first.
#[derive(Default)]
struct FlushGate {
    upper_flushed: bool,
    lower_sealed: bool,
}

/// Renders the image as row pairs, top down. Both rows of a pair are
/// fanned out across one worker pool region; finished rows stream out
/// through the double buffer before the next pair starts.
pub struct ScanlineRenderer {
    integrator: Box<dyn Integrator>,
    workers: usize,
    seed: u64,
    retry: RetryPolicy,
}

impl ScanlineRenderer {
    pub fn new(integrator: Box<dyn Integrator>, workers: usize, seed: u64) -> Self {
        Self {
            integrator,
            workers: workers.max(1),
            seed,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    fn consume_page(buffer: &DoubleBuffer<Rgb8>, sink: &dyn PageSink,
                    page: usize) -> Result<(), RenderError> {
        let cells = buffer.page(page)?;
        sink.flush(page, &cells)?;
        buffer.clear(page)?;
        Ok(())
    }

    /// Called by the job whose write sealed `page`. Page 0 always reaches
    /// the sink first; an early page-1 seal parks itself in the gate and
    /// the page-0 sealer drains it in the same critical section.
    fn on_sealed(buffer: &DoubleBuffer<Rgb8>, sink: &dyn PageSink,
                 gate: &Mutex<FlushGate>, page: usize) -> Result<(), RenderError> {
        let mut gate = gate.lock().unwrap();
        if page == 0 {
            Self::consume_page(buffer, sink, 0)?;
            gate.upper_flushed = true;
            if gate.lower_sealed {
                Self::consume_page(buffer, sink, 1)?;
                gate.lower_sealed = false;
            }
        } else if gate.upper_flushed {
            Self::consume_page(buffer, sink, 1)?;
        } else {
            gate.lower_sealed = true;
        }
        Ok(())
    }
}

impl Renderer for ScanlineRenderer {
    fn render(&self, scene: &Scene, sensor: &dyn Sensor,
              extent: (usize, usize), sink: &dyn PageSink) -> Result<(), RenderError> {
        let (width, height) = extent;
        if width == 0 || height == 0 {
            return Ok(());
        }

        let spp = self.integrator.samples_per_pixel();
        let resolution = Vector2f::new(width as Float, height as Float);
        let buffer = DoubleBuffer::<Rgb8>::new(width);
        let integrator = self.integrator.as_ref();

        let progress = ProgressBar::new(height as u64);
        progress.set_style(
            ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} scanlines")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        let mut anchor = height as i64 - 1;
        while anchor >= 0 {
            // The last pair of an odd-height image is a single row; page 1
            // stays idle for that cycle instead of underflowing the image.
            let rows_in_pair = if anchor >= 1 { 2 } else { 1 };
            let total_jobs = rows_in_pair * width;
            let next_job = AtomicUsize::new(0);
            let abort = AtomicBool::new(false);
            let failure: Mutex<Option<RenderError>> = Mutex::new(None);
            let gate = Mutex::new(FlushGate::default());

            thread::scope(|scope| {
                for _ in 0..self.workers {
                    scope.spawn(|| loop {
                        if abort.load(Ordering::Relaxed) {
                            break;
                        }
                        let job = next_job.fetch_add(1, Ordering::Relaxed);
                        if job >= total_jobs {
                            break;
                        }

                        // Bijective (page, column) assignment: concurrent
                        // jobs of one pair never share a cell.
                        let page = job / width;
                        let column = job % width;
                        let row = anchor as usize - page;

                        let mut rng = LcgRng::new(LcgRng::pixel_seed(self.seed, column, row));
                        let pixel = Vector2f::new(column as Float, row as Float);
                        let sum = integrator.sample_pixel(scene, sensor, pixel, resolution, &mut rng);
                        let value = tone_map(&sum, spp);

                        let submitted = self
                            .retry
                            .run(|| buffer.set(page, column, value))
                            .and_then(|sealed| {
                                if sealed {
                                    Self::on_sealed(&buffer, sink, &gate, page)
                                } else {
                                    Ok(())
                                }
                            });

                        if let Err(err) = submitted {
                            abort.store(true, Ordering::Relaxed);
                            let mut failure = failure.lock().unwrap();
                            if failure.is_none() {
                                *failure = Some(err);
                            }
                            break;
                        }
                    });
                }
            });

            // The scope join is the pair barrier: flushes and clears are
            // finished before the next pair's first write.
            if let Some(err) = failure.into_inner().unwrap() {
                progress.finish_and_clear();
                return Err(err);
            }

            progress.inc(rows_in_pair as u64);
            anchor -= 2;
        }

        progress.finish_and_clear();
        log::info!("render complete: {}x{} pixels, {} samples per pixel",
                   width, height, spp);
        Ok(())
    }
}
