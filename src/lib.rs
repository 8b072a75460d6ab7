use vector2d::Vector2D;

mod canvas;
pub mod cli;
mod error;
pub mod image;
mod number;
mod page;
pub mod profile;
pub mod ring;
pub mod sketch;
pub mod utils;

pub use canvas::Canvas;
pub use error::{Error, Result};
pub use number::{IntoNumber, Number};
pub use page::{Page, PAGE_CANVAS_HEIGHT, PAGE_CANVAS_WIDTH};

/// Type alias for 2D floating point vectors (in the geometric sense, unlike [`Vec`])
pub type V2 = Vector2D<f32>;
