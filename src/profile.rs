//! The cross-section profile of a segmented bowl: a solid base with rings stacked on top of it.
//! Each ring shows up as a pair of rectangles, mirrored across the vertical axis.
//!
//! Profiles are measured in inches and can be loaded from JSON:
//!
//! ```json
//! {
//!     "base": { "radius": 2.375, "height": 0.5 },
//!     "rings": [{ "radius": 2.75, "height": 1.125, "thickness": 1.375 }]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    image::{Image, Paint, RectSpec},
    sketch::{Sketch, DEFAULT_SIZE},
    Error, Result, V2,
};

/// How many drawing units make up an inch
pub const DEFAULT_PX_PER_INCH: f32 = 50.0;
/// The bowl sits near the bottom of the sketch
pub const DEFAULT_HORIZONTAL_DIVISION: f32 = 0.9;

const RECT_FILL: Paint = Paint::None;
const RECT_STROKE: Paint = Paint::GREEN;

/// A full bowl profile, plus how it should be laid out on the sketch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileConfig {
    /// Side length of the (square) sketch, in drawing units
    #[serde(default = "default_size")]
    pub size: f32,
    /// How far down the sketch the bowl's bottom sits, as a fraction of `size`
    #[serde(default = "default_horizontal_division")]
    pub horizontal_division: f32,
    #[serde(default = "default_px_per_inch")]
    pub px_per_inch: f32,
    pub base: Base,
    /// Rings from the bottom up
    #[serde(default)]
    pub rings: Vec<Ring>,
}

/// The solid disc at the bottom of the bowl
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Base {
    pub radius: f32,
    pub height: f32,
}

/// A ring, measured by its *outer* radius.  Subtract the thickness to get the inner radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Ring {
    pub radius: f32,
    pub height: f32,
    pub thickness: f32,
}

fn default_size() -> f32 {
    DEFAULT_SIZE
}

fn default_horizontal_division() -> f32 {
    DEFAULT_HORIZONTAL_DIVISION
}

fn default_px_per_inch() -> f32 {
    DEFAULT_PX_PER_INCH
}

impl Default for ProfileConfig {
    /// A small bowl: a 4¾" base under four rings
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            horizontal_division: DEFAULT_HORIZONTAL_DIVISION,
            px_per_inch: DEFAULT_PX_PER_INCH,
            base: Base {
                radius: (4.0 + 3.0 / 4.0) / 2.0,
                height: 1.0 / 2.0,
            },
            rings: vec![
                Ring {
                    radius: 5.5 / 2.0,
                    height: 1.0 + 1.0 / 8.0,
                    thickness: 1.0 + 3.0 / 8.0,
                },
                Ring {
                    radius: 6.5 / 2.0,
                    height: 1.0 + 1.0 / 8.0,
                    thickness: 1.0 + 3.0 / 8.0,
                },
                Ring {
                    radius: (6.0 + 5.0 / 8.0) / 2.0,
                    height: 1.0 + 1.0 / 4.0,
                    thickness: 3.0 / 4.0,
                },
                Ring {
                    radius: 6.5 / 2.0,
                    height: 1.0 + 1.0 / 8.0,
                    thickness: 1.0 + 3.0 / 8.0,
                },
            ],
        }
    }
}

impl ProfileConfig {
    pub fn from_json(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading profile from {}", path.display());
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    /// Converts a length in inches into drawing units
    pub fn px(&self, inches: f32) -> f32 {
        inches * self.px_per_inch
    }

    fn validate(&self) -> Result<()> {
        let checks = [
            ("px_per_inch", self.px_per_inch),
            ("base.radius", self.base.radius),
            ("base.height", self.base.height),
        ];
        for &(name, value) in &checks {
            non_negative(name, value)?;
        }
        if self.px_per_inch == 0.0 {
            return Err(Error::InvalidDimension {
                name: "px_per_inch",
                value: "0".to_owned(),
            });
        }
        for ring in &self.rings {
            non_negative("ring.height", ring.height)?;
            non_negative("ring.radius", ring.radius)?;
            if !(ring.thickness > 0.0 && ring.thickness <= ring.radius) {
                return Err(Error::InvalidRing {
                    radius: ring.radius,
                    thickness: ring.thickness,
                });
            }
        }
        Ok(())
    }

    /// Draws the profile: the axes, then the base, then every ring from the bottom up
    pub fn render(&self) -> Result<Image> {
        self.validate()?;
        let sketch = Sketch::new(self.size, self.horizontal_division)?;
        let origin = sketch.origin();
        let mut image = sketch.set_up();

        image.add(self.base_rect(origin)?);
        let mut altitude = self.px(self.base.height);
        for ring in &self.rings {
            let [left, right] = self.ring_rects(origin, altitude, ring)?;
            image.add(left);
            image.add(right);
            altitude += self.px(ring.height);
        }
        log::debug!(
            "Drew profile with {} rings, {} units tall",
            self.rings.len(),
            altitude
        );
        Ok(image)
    }

    fn base_rect(&self, origin: V2) -> Result<RectSpec> {
        let radius = self.px(self.base.radius);
        let height = self.px(self.base.height);
        RectSpec::new(
            origin.x - radius,
            origin.y - height,
            radius * 2.0,
            height,
            RECT_FILL,
            RECT_STROKE,
        )
    }

    /// The two walls of a ring whose bottom is `altitude` units above the horizontal axis
    fn ring_rects(&self, origin: V2, altitude: f32, ring: &Ring) -> Result<[RectSpec; 2]> {
        let radius = self.px(ring.radius);
        let height = self.px(ring.height);
        let thickness = self.px(ring.thickness);
        let top = origin.y - altitude - height;
        Ok([
            RectSpec::new(origin.x - radius, top, thickness, height, RECT_FILL, RECT_STROKE)?,
            RectSpec::new(
                origin.x + radius - thickness,
                top,
                thickness,
                height,
                RECT_FILL,
                RECT_STROKE,
            )?,
        ])
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidDimension {
            name,
            value: value.to_string(),
        })
    }
}
