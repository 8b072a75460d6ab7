//! The canvas composer: a drawing surface with a vertical centreline and a fixed marker
//! rectangle.

use crate::{
    image::{Image, LineSpec, Paint, RectSpec},
    IntoNumber, Number, Result,
};

/// A drawing surface of a given size.  The centreline follows the surface's width, but the
/// rectangle does **not** scale: it always sits where the bowl base sits on the reference
/// 500x500 sketch (see [`Canvas::base_rect`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    pub(crate) width: Number,
    pub(crate) height: Number,
}

impl Canvas {
    pub fn new(width: impl IntoNumber, height: impl IntoNumber) -> Result<Self> {
        Ok(Self {
            width: width.into_number("width")?.non_negative("width")?,
            height: height.into_number("height")?.non_negative("height")?,
        })
    }

    pub fn width(&self) -> &Number {
        &self.width
    }

    pub fn height(&self) -> &Number {
        &self.height
    }

    /// The vertical line through the middle of the surface, from top to bottom
    pub fn centerline(&self) -> LineSpec {
        let mid_x = Number::computed(self.width.value() / 2.0);
        LineSpec {
            x1: mid_x.clone(),
            y1: Number::constant(0.0, "0"),
            x2: mid_x,
            y2: self.height.clone(),
            stroke: Paint::BLACK,
        }
    }

    /// The fixed rectangle.  This is independent of the canvas' size.
    pub fn base_rect() -> RectSpec {
        RectSpec {
            x: Number::constant(131.25, "131.25"),
            y: Number::constant(425.0, "425.0"),
            width: Number::constant(237.5, "237.5"),
            height: Number::constant(25.0, "25.0"),
            fill: Paint::None,
            stroke: Paint::GREEN,
        }
    }

    /// Build the drawing surface: centreline first, so the rectangle is painted over it
    pub fn compose(&self) -> Image {
        log::debug!("Composing {}x{} canvas", self.width, self.height);
        let mut image = Image::with_size(self.width.clone(), self.height.clone());
        image.add(self.centerline());
        image.add(Self::base_rect());
        image
    }
}
