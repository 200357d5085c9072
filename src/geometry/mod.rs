//! Plane geometry primitives and the angle math shared by every shape.
//!
//! All angles are carried as radians in `[0, 2π)` once they pass through
//! [`Angle`]. Degenerate input (coincident points) is not rejected: it turns
//! into NaN and callers decide what that means.


mod angle;
mod line_segment;
mod point;

use std::f64::consts::{PI, TAU};

pub use angle::Angle;
pub use line_segment::LineSegment;
pub use point::Point;

/// Angle at `b` between the rays `b→a` and `b→c`, by the law of cosines.
///
/// The result lies in `[0, π]`. If `a` or `c` coincides with `b` one of the
/// sides has zero length and the result is NaN; it is propagated, not clamped.
pub fn get_angle_between(a: Point, b: Point, c: Point) -> Angle {
	let ab = LineSegment::from(a, b);
	let bc = LineSegment::from(b, c);
	let ac = LineSegment::from(a, c);

	Angle::from_rad(
		((ab.square_length() + bc.square_length() - ac.square_length())
			/ (2.0 * ab.length() * bc.length()))
		.acos(),
	)
}

/// Wraps any radian value into `[0, 2π)`. NaN and infinities yield NaN.
pub fn normalize_rad(rad: f64) -> f64 {
	wrap(rad, TAU)
}

/// Wraps any degree value into `[0, 360)`.
pub fn normalize_deg(deg: f64) -> f64 {
	wrap(deg, 360.0)
}

/// Converts radians to degrees.
pub fn rad_to_deg(rad: f64) -> f64 {
	rad * 180.0 / PI
}

/// Converts degrees to radians.
pub fn deg_to_rad(deg: f64) -> f64 {
	deg * PI / 180.0
}

fn wrap(value: f64, period: f64) -> f64 {
	let wrapped = value.rem_euclid(period);
	// rem_euclid rounds tiny negatives up to exactly `period`
	if wrapped >= period { 0.0 } else { wrapped }
}
