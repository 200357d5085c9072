/// A position on the drawing surface, in surface-local pixels.
///
/// Equality is exact; use [`Point::square_distance_to`] against a threshold
/// when a tolerance is needed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal coordinate, growing to the right.
	pub x: f64,
	/// Vertical coordinate, growing downwards.
	pub y: f64,
}

impl Point {
	/// Creates a point at `(x, y)`.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Euclidean distance to `other`.
	pub fn distance_to(&self, other: Point) -> f64 {
		self.square_distance_to(other).sqrt()
	}

	/// Squared distance to `other`; cheaper than [`Point::distance_to`] for
	/// radius comparisons.
	pub fn square_distance_to(&self, other: Point) -> f64 {
		(other.x - self.x).powi(2) + (other.y - self.y).powi(2)
	}

	/// Exact coordinate equality.
	pub fn equals(&self, other: Point) -> bool {
		self == &other
	}

	/// Moves the point in place by `(dx, dy)`.
	pub fn translate(&mut self, dx: f64, dy: f64) {
		self.x += dx;
		self.y += dy;
	}
}

impl From<(f64, f64)> for Point {
	fn from((x, y): (f64, f64)) -> Self {
		Self { x, y }
	}
}
