pub mod cancellation;
pub mod mandelbrot;
pub mod palette;
pub mod parallel;
pub mod pixel_buffer;
pub mod renderer;
pub mod sample_axes;

pub use cancellation::{CancelFlag, Cancellation, NeverCancel};
pub use mandelbrot::{MandelbrotComputer, DEFAULT_ESCAPE_BOUND_SQ};
pub use palette::{Palette, PALETTE_ROTATION};
pub use parallel::ParallelRenderer;
pub use pixel_buffer::PixelBuffer;
pub use renderer::{BlockRenderer, RenderParams};
pub use sample_axes::{sample_axes, SampleAxes};

// Re-export core types for convenience
pub use mandelscope_core::*;
