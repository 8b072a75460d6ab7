//! An intermediate representation for vector images

use std::{
    borrow::Cow,
    fmt::{Display, Formatter},
    str::FromStr,
};

use rgb::RGB8;

use crate::{Error, IntoNumber, Number, Result, V2};

use super::{svg, SvgOpts};

/// A drawing surface of explicit dimensions, composed of many [`Elem`]ents.  Elements are painted
/// in the order they were added.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    width: Number,
    height: Number,
    elements: Vec<Elem>,
}

impl Image {
    /// Creates an empty `Image`, checking that both dimensions are finite and non-negative
    pub fn new(width: impl IntoNumber, height: impl IntoNumber) -> Result<Self> {
        Ok(Self::with_size(
            width.into_number("width")?.non_negative("width")?,
            height.into_number("height")?.non_negative("height")?,
        ))
    }

    /// Creates an empty `Image` from dimensions which have already been validated
    pub(crate) fn with_size(width: Number, height: Number) -> Self {
        Self {
            width,
            height,
            elements: vec![],
        }
    }

    /// Adds a new [`Elem`] on top of everything else in this `Image`
    pub fn add(&mut self, elem: impl Into<Elem>) {
        self.elements.push(elem.into())
    }

    pub fn width(&self) -> &Number {
        &self.width
    }

    pub fn height(&self) -> &Number {
        &self.height
    }

    pub fn elements(&self) -> &[Elem] {
        self.elements.as_slice()
    }

    /// Standalone documents keep the XML declaration, fragments don't
    pub fn svg_string(&self, opts: &SvgOpts) -> String {
        let root = svg::gen_svg(self, opts);
        if opts.standalone {
            root.to_string()
        } else {
            svg::fragment_string(&root)
        }
    }
}

/// A single drawing instruction.  None of these have children.
#[derive(Debug, Clone, PartialEq)]
pub enum Elem {
    Line(LineSpec),
    Rect(RectSpec),
    Circle(CircleSpec),
    Polygon(PolygonSpec),
}

impl From<LineSpec> for Elem {
    fn from(l: LineSpec) -> Self {
        Elem::Line(l)
    }
}

impl From<RectSpec> for Elem {
    fn from(r: RectSpec) -> Self {
        Elem::Rect(r)
    }
}

impl From<CircleSpec> for Elem {
    fn from(c: CircleSpec) -> Self {
        Elem::Circle(c)
    }
}

impl From<PolygonSpec> for Elem {
    fn from(p: PolygonSpec) -> Self {
        Elem::Polygon(p)
    }
}

////////////////
// PRIMITIVES //
////////////////

/// A straight line segment from `(x1, y1)` to `(x2, y2)`
#[derive(Debug, Clone, PartialEq)]
pub struct LineSpec {
    pub x1: Number,
    pub y1: Number,
    pub x2: Number,
    pub y2: Number,
    pub stroke: Paint,
}

impl LineSpec {
    pub fn new(
        x1: impl IntoNumber,
        y1: impl IntoNumber,
        x2: impl IntoNumber,
        y2: impl IntoNumber,
        stroke: Paint,
    ) -> Result<Self> {
        Ok(Self {
            x1: x1.into_number("x1")?,
            y1: y1.into_number("y1")?,
            x2: x2.into_number("x2")?,
            y2: y2.into_number("y2")?,
            stroke,
        })
    }
}

/// An axis-aligned rectangle, whose top-left corner is `(x, y)`
#[derive(Debug, Clone, PartialEq)]
pub struct RectSpec {
    pub x: Number,
    pub y: Number,
    pub width: Number,
    pub height: Number,
    pub fill: Paint,
    pub stroke: Paint,
}

impl RectSpec {
    pub fn new(
        x: impl IntoNumber,
        y: impl IntoNumber,
        width: impl IntoNumber,
        height: impl IntoNumber,
        fill: Paint,
        stroke: Paint,
    ) -> Result<Self> {
        Ok(Self {
            x: x.into_number("x")?,
            y: y.into_number("y")?,
            width: width.into_number("width")?.non_negative("width")?,
            height: height.into_number("height")?.non_negative("height")?,
            fill,
            stroke,
        })
    }
}

/// A circle of radius `r` centred on `(cx, cy)`
#[derive(Debug, Clone, PartialEq)]
pub struct CircleSpec {
    pub cx: Number,
    pub cy: Number,
    pub r: Number,
    pub fill: Paint,
    pub stroke: Paint,
}

impl CircleSpec {
    pub fn new(centre: V2, r: impl IntoNumber, fill: Paint, stroke: Paint) -> Result<Self> {
        Ok(Self {
            cx: centre.x.into_number("cx")?,
            cy: centre.y.into_number("cy")?,
            r: r.into_number("r")?.non_negative("r")?,
            fill,
            stroke,
        })
    }
}

/// A closed polygon, whose vertices are connected in order
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonSpec {
    points: Vec<V2>,
    pub fill: Paint,
    pub stroke: Paint,
}

impl PolygonSpec {
    pub fn new(points: impl IntoIterator<Item = V2>, fill: Paint, stroke: Paint) -> Result<Self> {
        let points: Vec<V2> = points.into_iter().collect();
        if let Some(bad) = points
            .iter()
            .find(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(Error::InvalidDimension {
                name: "points",
                value: format!("{},{}", bad.x, bad.y),
            });
        }
        Ok(Self {
            points,
            fill,
            stroke,
        })
    }

    pub fn points(&self) -> &[V2] {
        self.points.as_slice()
    }
}

///////////
// PAINT //
///////////

/// The fill or stroke of a primitive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Paint {
    /// Explicitly paint nothing (i.e. `fill="none"`)
    None,
    /// A color written by name, or any other CSS color string
    Named(Cow<'static, str>),
    Rgb(RGB8),
}

impl Paint {
    pub const BLACK: Self = Paint::Named(Cow::Borrowed("black"));
    pub const GREEN: Self = Paint::Named(Cow::Borrowed("green"));
    pub const BLUE: Self = Paint::Named(Cow::Borrowed("blue"));
}

impl Display for Paint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Paint::None => write!(f, "none"),
            Paint::Named(name) => write!(f, "{}", name),
            Paint::Rgb(c) => write!(f, "#{:02x}{:02x}{:02x}", c.r, c.g, c.b),
        }
    }
}

impl FromStr for Paint {
    type Err = Error;

    /// Parses `none`, `#rrggbb` or a color name
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = || Error::InvalidColor(s.to_owned());
        if s == "none" {
            return Ok(Paint::None);
        }
        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 {
                return Err(invalid());
            }
            let channel = |i: usize| {
                hex.get(i..i + 2)
                    .and_then(|c| u8::from_str_radix(c, 16).ok())
                    .ok_or_else(invalid)
            };
            return Ok(Paint::Rgb(RGB8::new(channel(0)?, channel(2)?, channel(4)?)));
        }
        if !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Paint::Named(Cow::Owned(s.to_owned())))
        } else {
            Err(invalid())
        }
    }
}
