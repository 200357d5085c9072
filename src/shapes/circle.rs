use std::f64::consts::TAU;

use super::style::{ShapeStyle, ShapeStyleOverride};
use super::surface::DrawingSurface;
use crate::geometry::Point;

/// Opacity of a circle's fill; the stroke stays opaque.
pub const CIRCLE_FILL_ALPHA: f64 = 0.3;

/// A circle; radius is expected to be non-negative but is not checked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
	/// Center.
	pub position: Point,
	/// Radius in pixels.
	pub radius: f64,
}

impl Circle {
	/// Creates a circle around `position`.
	pub const fn from(position: Point, radius: f64) -> Self {
		Self { position, radius }
	}

	/// Draws the circle. A fill is painted translucent under an opaque stroke.
	pub fn draw(&self, surface: &mut impl DrawingSurface, style: &ShapeStyleOverride) {
		let style = ShapeStyle::new(None, Some("black")).merge(style);

		surface.begin_path();
		surface.arc(self.position.x, self.position.y, self.radius, 0.0, TAU);
		if let Some(fill) = &style.fill {
			surface.set_global_alpha(CIRCLE_FILL_ALPHA);
			surface.set_fill_style(fill);
			surface.fill();
			surface.set_global_alpha(1.0);
		}
		if let Some(stroke) = &style.stroke {
			surface.set_stroke_style(stroke);
			surface.set_line_width(style.stroke_width);
			surface.stroke();
		}
	}
}
