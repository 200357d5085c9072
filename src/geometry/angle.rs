use super::{deg_to_rad, normalize_rad, rad_to_deg};

/// A planar angle. Whatever it was built from, [`Angle::rad`] reports it in
/// `[0, 2π)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Angle {
	rad: f64,
}

impl Angle {
	/// Builds an angle from radians; any real value is accepted.
	pub const fn from_rad(rad: f64) -> Self {
		Self { rad }
	}

	/// Builds an angle from degrees.
	pub fn from_deg(deg: f64) -> Self {
		Self {
			rad: deg_to_rad(deg),
		}
	}

	/// Normalized radians in `[0, 2π)`.
	pub fn rad(&self) -> f64 {
		normalize_rad(self.rad)
	}

	/// Normalized degrees, derived from [`Angle::rad`].
	pub fn deg(&self) -> f64 {
		rad_to_deg(self.rad())
	}
}
