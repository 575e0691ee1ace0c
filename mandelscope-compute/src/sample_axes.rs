//! Mapping from the pixel grid onto the complex plane.

use mandelscope_core::{RenderError, Result, Viewport};

/// Per-axis sample coordinates for one render.
///
/// `reals` has one entry per pixel column, `imaginaries` one per pixel row.
/// Axes are recomputed fresh for every render and never retained.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleAxes {
    pub reals: Vec<f64>,
    pub imaginaries: Vec<f64>,
}

/// Compute the sample coordinates for `viewport` at the given resolution.
///
/// Each axis is a half-open linear range: `value[i] = start + i * step` with
/// `step = (end - start) / count`, so the sample count equals the requested
/// pixel length and `end` itself is never sampled.
///
/// Fails with `InvalidViewport` before any computation when a dimension is
/// zero or the viewport corners are degenerate or inverted.
pub fn sample_axes(viewport: &Viewport, width: u32, height: u32) -> Result<SampleAxes> {
    if width == 0 {
        return Err(RenderError::InvalidViewport("width is zero".to_string()));
    }
    if height == 0 {
        return Err(RenderError::InvalidViewport("height is zero".to_string()));
    }
    if !viewport.is_valid() {
        return Err(RenderError::InvalidViewport(format!(
            "corners must satisfy to > from on both axes, got {}",
            viewport.label()
        )));
    }

    Ok(SampleAxes {
        reals: sample_range(viewport.from.re, viewport.to.re, width as usize),
        imaginaries: sample_range(viewport.from.im, viewport.to.im, height as usize),
    })
}

fn sample_range(start: f64, end: f64, count: usize) -> Vec<f64> {
    let step = (end - start) / count as f64;
    (0..count).map(|i| start + step * i as f64).collect()
}
