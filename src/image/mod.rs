//! Image specification and rendering utilities.  This is an intermediate representation (IR) for
//! vector images: the composers ([`Canvas`](crate::Canvas), the sketches, etc.) only decide *what*
//! to draw by building an [`Image`], and [`svg`] separately decides how that is written out.

mod ir;
pub mod svg;

pub use ir::{CircleSpec, Elem, Image, LineSpec, Paint, PolygonSpec, RectSpec};
pub use svg::SvgOpts;
