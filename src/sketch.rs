//! A square sketch with a pair of axes drawn on it, like a `+`.  The ring plan and bowl profile
//! are both drawn on top of one of these.

use crate::{
    image::{Image, LineSpec, Paint},
    Error, IntoNumber, Number, Result, V2,
};

pub const DEFAULT_SIZE: f32 = 500.0;
pub const DEFAULT_HORIZONTAL_DIVISION: f32 = 0.5;

/// A square drawing area, whose horizontal axis sits `horizontal_division` of the way down
#[derive(Debug, Clone, PartialEq)]
pub struct Sketch {
    size: Number,
    horizontal_division: f32,
}

impl Sketch {
    pub fn new(size: impl IntoNumber, horizontal_division: f32) -> Result<Self> {
        let size = size.into_number("size")?.non_negative("size")?;
        if !(0.0..=1.0).contains(&horizontal_division) {
            return Err(Error::InvalidDimension {
                name: "horizontal_division",
                value: horizontal_division.to_string(),
            });
        }
        Ok(Self {
            size,
            horizontal_division,
        })
    }

    pub fn size(&self) -> f32 {
        self.size.value()
    }

    /// Where the two axes cross
    pub fn origin(&self) -> V2 {
        let size = self.size();
        V2::new(size * 0.5, size * self.horizontal_division)
    }

    /// Creates the [`Image`], containing only the axes
    pub fn set_up(&self) -> Image {
        let size = self.size();
        let origin = self.origin();
        let mut image = Image::with_size(self.size.clone(), self.size.clone());
        image.add(axis(V2::new(origin.x, 0.0), V2::new(origin.x, size)));
        image.add(axis(V2::new(0.0, origin.y), V2::new(size, origin.y)));
        image
    }
}

impl Default for Sketch {
    fn default() -> Self {
        Self {
            size: Number::constant(DEFAULT_SIZE, "500"),
            horizontal_division: DEFAULT_HORIZONTAL_DIVISION,
        }
    }
}

/// Creates the empty axes for a sketch
pub fn set_up(size: impl IntoNumber, horizontal_division: f32) -> Result<Image> {
    Ok(Sketch::new(size, horizontal_division)?.set_up())
}

fn axis(from: V2, to: V2) -> LineSpec {
    // Every coordinate is derived from an already-validated size
    LineSpec {
        x1: Number::computed(from.x),
        y1: Number::computed(from.y),
        x2: Number::computed(to.x),
        y2: Number::computed(to.y),
        stroke: Paint::BLACK,
    }
}
