//! Miscellaneous geometry functions, mostly about chords of circles.  Angles follow the classic
//! trig convention (0° points along +x and angles grow anti-clockwise) even though SVG's y-axis
//! points down.

use angle::{Angle, Deg};

use crate::V2;

pub fn degree_sin(degrees: f32) -> f32 {
    Deg(degrees).sin()
}

pub fn degree_cos(degrees: f32) -> f32 {
    Deg(degrees).cos()
}

/// The angle (in degrees) swept by each segment of a ring of `segments` equal segments
pub fn degrees_per_segment(segments: usize) -> f32 {
    360.0 / segments as f32
}

/// Returns the point at `degrees` on the circle of radius `radius` around `origin`.  The y-axis
/// is flipped, so 90° is directly *above* the origin.
pub fn point_on_circle(origin: V2, radius: f32, degrees: f32) -> V2 {
    V2::new(
        origin.x + radius * degree_cos(degrees),
        origin.y - radius * degree_sin(degrees),
    )
}

/// Find the endpoints of the chord spanning the `(begin, end)` arc (in degrees) on the circle
/// with the given origin and radius.
pub fn chord_dimensions(arc_span: (f32, f32), origin: V2, radius: f32) -> (V2, V2) {
    let (begin, end) = arc_span;
    (
        point_on_circle(origin, radius, begin),
        point_on_circle(origin, radius, end),
    )
}

pub fn distance_between_points(p1: V2, p2: V2) -> f32 {
    (p2 - p1).length()
}

/// The length of the chord spanned by one segment of a `segments`-segment ring on a circle of
/// the given radius
pub fn chord_length(segments: usize, radius: f32) -> f32 {
    let arc = (0.0, degrees_per_segment(segments));
    let (p1, p2) = chord_dimensions(arc, V2::new(0.0, 0.0), radius);
    distance_between_points(p1, p2)
}

/// The radius of the circle passing through the outer corners of a ring's segments, given that
/// the ring (of radius `ring_radius`) is inscribed in those segments.
///
/// Each segment, together with the origin, forms an isosceles triangle.  Halving it gives a right
/// triangle whose angle at the origin is half a segment; the ring radius is the adjacent side and
/// the circumscribed radius is the hypotenuse, so `hypotenuse = adjacent / cos(theta)`.
pub fn circumscribed_radius(ring_radius: f32, segments: usize) -> f32 {
    let degrees_per_right_triangle = degrees_per_segment(segments) / 2.0;
    ring_radius / degree_cos(degrees_per_right_triangle)
}
