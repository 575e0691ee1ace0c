//! Band-parallel rendering.
//!
//! Every sample depends only on its own coordinate and the read-only
//! palette, and block writes are disjoint because the traversal step
//! equals the block size. Workers therefore need no locking at all: the
//! buffer is split into horizontal bands of block-aligned rows, one scoped
//! thread per band, each owning a disjoint `chunks_mut` slice of the
//! single backing allocation.

use crate::cancellation::{Cancellation, NeverCancel};
use crate::mandelbrot::MandelbrotComputer;
use crate::palette::Palette;
use crate::pixel_buffer::PixelBuffer;
use crate::renderer::{block_sample, RenderParams};
use crate::sample_axes::sample_axes;
use mandelscope_core::{Argb, RenderError, Result};
use std::time::Instant;

/// Multi-threaded block renderer, bit-identical to [`BlockRenderer`] for
/// identical parameters.
///
/// [`BlockRenderer`]: crate::renderer::BlockRenderer
#[derive(Clone, Copy, Debug)]
pub struct ParallelRenderer {
    computer: MandelbrotComputer,
    threads: usize,
}

impl Default for ParallelRenderer {
    fn default() -> Self {
        Self {
            computer: MandelbrotComputer::default(),
            threads: num_cpus::get().max(1),
        }
    }
}

impl ParallelRenderer {
    /// One worker per available CPU.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threads(threads: usize) -> Self {
        Self {
            threads: threads.max(1),
            ..Self::default()
        }
    }

    pub fn with_computer(computer: MandelbrotComputer, threads: usize) -> Self {
        Self {
            computer,
            threads: threads.max(1),
        }
    }

    pub fn render(&self, params: &RenderParams, palette: &Palette) -> Result<PixelBuffer> {
        self.render_cancellable(params, palette, &NeverCancel)
    }

    /// Render across worker threads, each polling `cancel` between its own
    /// block iterations. If any worker observes the flag the whole render
    /// reports `RenderError::Cancelled`.
    pub fn render_cancellable<C: Cancellation + Sync>(
        &self,
        params: &RenderParams,
        palette: &Palette,
        cancel: &C,
    ) -> Result<PixelBuffer> {
        params.validate()?;
        let started = Instant::now();

        let axes = sample_axes(&params.viewport, params.width, params.height)?;
        let width = params.width as usize;
        let height = params.height as usize;
        let block = params.block_size as usize;
        let max_iterations = params.max_iterations;
        let computer = self.computer;

        // Bands are whole runs of block rows, so every block anchor stays
        // band-local and the traversal matches the sequential renderer
        // anchor for anchor.
        let block_rows = (height + block - 1) / block;
        let bands = self.threads.min(block_rows);
        let band_rows = ((block_rows + bands - 1) / bands) * block;

        let mut pixels = vec![Argb::default(); width * height];

        let abandoned = crossbeam::thread::scope(|scope| {
            let axes = &axes;
            let handles: Vec<_> = pixels
                .chunks_mut(band_rows * width)
                .enumerate()
                .map(|(band_index, band)| {
                    scope.spawn(move |_| {
                        let band_top = band_index * band_rows;
                        let band_height = band.len() / width;

                        for y in (0..band_height).step_by(block) {
                            for x in (0..width).step_by(block) {
                                if cancel.is_cancelled() {
                                    return true;
                                }
                                let c = block_sample(
                                    &axes.reals,
                                    &axes.imaginaries,
                                    x as u32,
                                    (band_top + y) as u32,
                                );
                                let iterations = computer.divergence(c, max_iterations);
                                let colour = palette.colour(iterations);

                                let x_end = (x + block).min(width);
                                let y_end = (y + block).min(band_height);
                                for row in y..y_end {
                                    for col in x..x_end {
                                        band[row * width + col] = colour;
                                    }
                                }
                            }
                        }
                        false
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.join().expect("render worker panicked"))
                .fold(false, |acc, worker_abandoned| acc | worker_abandoned)
        })
        .expect("render worker panicked");

        if abandoned {
            return Err(RenderError::Cancelled);
        }

        log::info!(
            "rendered {}x{} block_size={} threads={} in {:.3}ms",
            params.width,
            params.height,
            params.block_size,
            bands,
            started.elapsed().as_secs_f64() * 1e3
        );
        Ok(PixelBuffer::from_pixels(params.width, params.height, pixels))
    }
}
