pub mod color;
pub mod error;
pub mod points;
pub mod transforms;
pub mod viewport;

pub use color::{Argb, HslColor};
pub use error::{RenderError, Result};
pub use points::ComplexPoint;
pub use transforms::{fit_to_aspect, panned, resized, zoomed};
pub use viewport::Viewport;
