//! Plans for a segmented ring.  A ring is glued up from `segments` identical trapezoidal wedges,
//! which are then turned down on a lathe to a circular ring.  The ring is therefore *inscribed*
//! in the segments: the inner edge of each segment is a chord of the ring's inner circle, and the
//! outer edge is a chord of a circle circumscribing the ring.

use crate::{
    image::{CircleSpec, Image, Paint, PolygonSpec},
    utils::{chord_dimensions, chord_length, circumscribed_radius, degrees_per_segment},
    Error, Result, V2,
};

/// A segmented ring with outer radius `radius`, centred on `origin`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingPlan {
    origin: V2,
    radius: f32,
    thickness: f32,
    segments: usize,
}

impl RingPlan {
    pub fn new(origin: V2, radius: f32, thickness: f32, segments: usize) -> Result<Self> {
        if !(origin.x.is_finite() && origin.y.is_finite()) {
            return Err(Error::InvalidDimension {
                name: "origin",
                value: format!("{},{}", origin.x, origin.y),
            });
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(Error::InvalidDimension {
                name: "radius",
                value: radius.to_string(),
            });
        }
        if !(thickness > 0.0 && thickness <= radius) {
            return Err(Error::InvalidRing { radius, thickness });
        }
        if segments < 3 {
            return Err(Error::InvalidSegmentCount(segments));
        }
        Ok(Self {
            origin,
            radius,
            thickness,
            segments,
        })
    }

    pub fn segments(&self) -> usize {
        self.segments
    }

    pub fn inner_radius(&self) -> f32 {
        self.radius - self.thickness
    }

    /// The radius of the circle through the segments' outer corners
    pub fn circumscribed_radius(&self) -> f32 {
        circumscribed_radius(self.radius, self.segments)
    }

    /// The `(begin, end)` angles of every segment, in degrees.  Each boundary is computed directly
    /// from its index, so the last segment always ends at exactly 360°.
    pub fn segment_arcs(&self) -> impl Iterator<Item = (f32, f32)> {
        let segments = self.segments;
        let step = degrees_per_segment(segments);
        (0..segments).map(move |i| {
            let end = if i + 1 == segments {
                360.0
            } else {
                (i + 1) as f32 * step
            };
            (i as f32 * step, end)
        })
    }

    /// The four corners of one segment, in the order they should be connected: the inner chord,
    /// then the outer chord backwards.
    pub fn segment_corners(&self, arc: (f32, f32)) -> [V2; 4] {
        let (inner_begin, inner_end) = chord_dimensions(arc, self.origin, self.inner_radius());
        let (outer_begin, outer_end) =
            chord_dimensions(arc, self.origin, self.circumscribed_radius());
        [inner_begin, inner_end, outer_end, outer_begin]
    }

    /// Draws the ring (as two concentric circles) and then every segment on top
    pub fn draw(&self, image: &mut Image) -> Result<()> {
        image.add(CircleSpec::new(self.origin, self.radius, Paint::None, Paint::BLACK)?);
        image.add(CircleSpec::new(
            self.origin,
            self.inner_radius(),
            Paint::None,
            Paint::BLACK,
        )?);
        let trapezoids: Vec<PolygonSpec> = self
            .segment_arcs()
            .map(|arc| PolygonSpec::new(self.segment_corners(arc), Paint::None, Paint::BLUE))
            .collect::<Result<_>>()?;
        for t in trapezoids {
            image.add(t);
        }
        log::debug!(
            "Drew {}-segment ring (r = {}, t = {})",
            self.segments,
            self.radius,
            self.thickness
        );
        Ok(())
    }

    /// Lengths needed to cut the segments, in drawing units
    pub fn metrics(&self) -> RingMetrics {
        let outer = chord_length(self.segments, self.circumscribed_radius());
        let inner = chord_length(self.segments, self.inner_radius());
        RingMetrics {
            segments: self.segments,
            outer_segment_length: outer,
            inner_segment_length: inner,
            all_segments_length: (outer + inner) / 2.0 * self.segments as f32,
        }
    }
}

/// The cutting lengths of a [`RingPlan`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingMetrics {
    pub segments: usize,
    /// Length of each segment's outer (long) edge
    pub outer_segment_length: f32,
    /// Length of each segment's inner (short) edge
    pub inner_segment_length: f32,
    /// Roughly how much stock is needed to cut every segment
    pub all_segments_length: f32,
}

impl RingMetrics {
    /// Converts these metrics from drawing units to inches
    pub fn in_inches(&self, px_per_inch: f32) -> Self {
        Self {
            segments: self.segments,
            outer_segment_length: self.outer_segment_length / px_per_inch,
            inner_segment_length: self.inner_segment_length / px_per_inch,
            all_segments_length: self.all_segments_length / px_per_inch,
        }
    }
}
