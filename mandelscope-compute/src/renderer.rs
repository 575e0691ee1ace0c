//! Block-based render pipeline: sample axes → divergence → palette →
//! pixel buffer.

use crate::cancellation::{Cancellation, NeverCancel};
use crate::mandelbrot::MandelbrotComputer;
use crate::palette::Palette;
use crate::pixel_buffer::PixelBuffer;
use crate::sample_axes::sample_axes;
use mandelscope_core::{ComplexPoint, RenderError, Result, Viewport};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Full-resolution quality: one computed sample per pixel.
pub const FINE_BLOCK_SIZE: u32 = 1;

/// Preview quality used during interactive pan/zoom: one computed sample
/// per 10×10 pixel block.
pub const ROUGH_BLOCK_SIZE: u32 = 10;

/// One complete render request.
///
/// Every input is explicit — the core holds no viewport, zoom, or quality
/// state between calls. Quality is controlled purely by `block_size`:
/// 1 renders every pixel, larger values subsample for fast previews.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderParams {
    pub viewport: Viewport,
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub block_size: u32,
}

impl RenderParams {
    /// Full-resolution request.
    pub fn fine(viewport: Viewport, width: u32, height: u32, max_iterations: u32) -> Self {
        Self {
            viewport,
            width,
            height,
            max_iterations,
            block_size: FINE_BLOCK_SIZE,
        }
    }

    /// Subsampled preview request.
    pub fn rough(viewport: Viewport, width: u32, height: u32, max_iterations: u32) -> Self {
        Self {
            viewport,
            width,
            height,
            max_iterations,
            block_size: ROUGH_BLOCK_SIZE,
        }
    }

    /// Reject structurally invalid requests before any computation.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(RenderError::InvalidViewport("width is zero".to_string()));
        }
        if self.height == 0 {
            return Err(RenderError::InvalidViewport("height is zero".to_string()));
        }
        if self.block_size == 0 {
            return Err(RenderError::InvalidViewport(
                "block size is zero".to_string(),
            ));
        }
        if !self.viewport.is_valid() {
            return Err(RenderError::InvalidViewport(format!(
                "corners must satisfy to > from on both axes, got {}",
                self.viewport.label()
            )));
        }
        Ok(())
    }
}

/// Sequential block renderer.
///
/// A pure function of its inputs aside from the fresh buffer allocation:
/// identical parameters and palette produce bit-identical buffers.
#[derive(Clone, Copy, Debug, Default)]
pub struct BlockRenderer {
    computer: MandelbrotComputer,
}

impl BlockRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_computer(computer: MandelbrotComputer) -> Self {
        Self { computer }
    }

    /// Render one complete buffer.
    ///
    /// The palette must cover `params.max_iterations`; a shorter palette is
    /// a caller contract violation and surfaces as the loud out-of-range
    /// panic in [`Palette::colour`].
    pub fn render(&self, params: &RenderParams, palette: &Palette) -> Result<PixelBuffer> {
        self.render_cancellable(params, palette, &NeverCancel)
    }

    /// Render, polling `cancel` between block iterations only — never
    /// mid-block — so abandonment latency is bounded by one block's
    /// compute time. A cancelled render returns `RenderError::Cancelled`
    /// and drops the partial buffer.
    pub fn render_cancellable<C: Cancellation>(
        &self,
        params: &RenderParams,
        palette: &Palette,
        cancel: &C,
    ) -> Result<PixelBuffer> {
        params.validate()?;
        let started = Instant::now();

        let axes = sample_axes(&params.viewport, params.width, params.height)?;
        let mut buffer = PixelBuffer::new(params.width, params.height);

        for y in (0..params.height).step_by(params.block_size as usize) {
            for x in (0..params.width).step_by(params.block_size as usize) {
                if cancel.is_cancelled() {
                    return Err(RenderError::Cancelled);
                }
                let c = block_sample(&axes.reals, &axes.imaginaries, x, y);
                let iterations = self.computer.divergence(c, params.max_iterations);
                buffer.set_block(x, y, palette.colour(iterations), params.block_size);
            }
        }

        log::info!(
            "rendered {}x{} block_size={} in {:.3}ms",
            params.width,
            params.height,
            params.block_size,
            started.elapsed().as_secs_f64() * 1e3
        );
        Ok(buffer)
    }
}

/// Sample coordinates for the block anchored at `(x, y)`, clamped to the
/// last valid axis index so edge blocks reuse the nearest sample instead of
/// reading past the axis.
pub(crate) fn block_sample(reals: &[f64], imaginaries: &[f64], x: u32, y: u32) -> ComplexPoint {
    let re_index = (x as usize).min(reals.len() - 1);
    let im_index = (y as usize).min(imaginaries.len() - 1);
    ComplexPoint::new(reals[re_index], imaginaries[im_index])
}
