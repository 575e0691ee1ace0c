use crate::points::ComplexPoint;
use serde::{Deserialize, Serialize};

/// The rectangular region of the complex plane currently mapped onto the
/// pixel grid.
///
/// `from` is the corner with the smaller real and imaginary parts, `to` the
/// corner with the larger ones. A viewport is valid only when it is strictly
/// non-degenerate on both axes: `to.re > from.re` and `to.im > from.im`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub from: ComplexPoint,
    pub to: ComplexPoint,
}

impl Viewport {
    pub fn new(from: ComplexPoint, to: ComplexPoint) -> Self {
        Self { from, to }
    }

    /// The default home view of the Mandelbrot set.
    pub fn home() -> Self {
        Self::new(ComplexPoint::new(-2.0, -1.5), ComplexPoint::new(1.5, 1.5))
    }

    /// True when both axes satisfy the `to > from` invariant.
    pub fn is_valid(&self) -> bool {
        self.to.re > self.from.re && self.to.im > self.from.im
    }

    /// Visible extent along the real axis.
    pub fn width(&self) -> f64 {
        self.to.re - self.from.re
    }

    /// Visible extent along the imaginary axis.
    pub fn height(&self) -> f64 {
        self.to.im - self.from.im
    }

    /// Three-decimal bounds label for on-screen display, e.g.
    /// `(-2.000, -1.500) => (1.500, 1.500)`.
    pub fn label(&self) -> String {
        format!(
            "({:.3}, {:.3}) => ({:.3}, {:.3})",
            self.from.re, self.from.im, self.to.re, self.to.im
        )
    }
}
