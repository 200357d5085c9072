use super::{Angle, Point};

/// A read-only view over two points owned elsewhere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
	/// Where the segment starts.
	pub start: Point,
	/// Where the segment ends.
	pub end: Point,
}

impl LineSegment {
	/// Creates the segment `start → end`.
	pub const fn from(start: Point, end: Point) -> Self {
		Self { start, end }
	}

	/// Direction from `start` to `end`.
	pub fn angle(&self) -> Angle {
		Angle::from_rad((self.end.y - self.start.y).atan2(self.end.x - self.start.x))
	}

	/// Euclidean length.
	pub fn length(&self) -> f64 {
		self.square_length().sqrt()
	}

	/// Squared length.
	pub fn square_length(&self) -> f64 {
		(self.end.x - self.start.x).powi(2) + (self.end.y - self.start.y).powi(2)
	}
}
