#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use log::warn;
use web_sys::CanvasRenderingContext2d;

use super::state::DiagramState;
use crate::shapes::{Circle, DrawingSurface, ShapeStyleOverride, TextStyleOverride};

/// Outline width of the triangle under the pointer.
pub const HOVERED_STROKE_WIDTH: f64 = 3.0;

/// Fill of the touch circle around the hovered vertex.
pub const HOVER_FILL: &str = "skyblue";

/// Draws the whole diagram: every triangle with its angles and vertex labels,
/// then the touch circle of the hovered vertex on top.
pub fn render(state: &DiagramState, surface: &mut impl DrawingSurface) {
	surface.clear_rect(0.0, 0.0, state.width, state.height);

	let points = &state.scene.points;
	let hovered = state.controller.hovered_triangle();
	let plain = ShapeStyleOverride::new();
	let text = TextStyleOverride::new();

	for (id, triangle) in state.scene.triangles() {
		let outline = if hovered == Some(id) {
			ShapeStyleOverride::new().stroke_width(HOVERED_STROKE_WIDTH)
		} else {
			ShapeStyleOverride::new()
		};
		triangle.draw_shape(points, surface, &outline);
		triangle.draw_angles(points, surface, &plain, &text);
		triangle.draw_points(points, surface, &text);
	}

	if let Some(point) = state.controller.hovered_point().and_then(|id| points.get(id)) {
		Circle::from(*point, state.controller.touch_radius())
			.draw(surface, &ShapeStyleOverride::new().fill(HOVER_FILL));
	}
}

impl DrawingSurface for CanvasRenderingContext2d {
	fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
		CanvasRenderingContext2d::clear_rect(self, x, y, width, height);
	}

	fn begin_path(&mut self) {
		CanvasRenderingContext2d::begin_path(self);
	}

	fn move_to(&mut self, x: f64, y: f64) {
		CanvasRenderingContext2d::move_to(self, x, y);
	}

	fn line_to(&mut self, x: f64, y: f64) {
		CanvasRenderingContext2d::line_to(self, x, y);
	}

	fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
		// negative radii throw IndexSizeError
		if let Err(err) = CanvasRenderingContext2d::arc(self, x, y, radius, start, end) {
			warn!("arc at ({x}, {y}) r={radius} failed: {err:?}");
		}
	}

	fn close_path(&mut self) {
		CanvasRenderingContext2d::close_path(self);
	}

	fn set_fill_style(&mut self, color: &str) {
		self.set_fill_style_str(color);
	}

	fn set_stroke_style(&mut self, color: &str) {
		self.set_stroke_style_str(color);
	}

	fn set_line_width(&mut self, width: f64) {
		CanvasRenderingContext2d::set_line_width(self, width);
	}

	fn set_global_alpha(&mut self, alpha: f64) {
		CanvasRenderingContext2d::set_global_alpha(self, alpha);
	}

	fn fill(&mut self) {
		CanvasRenderingContext2d::fill(self);
	}

	fn stroke(&mut self) {
		CanvasRenderingContext2d::stroke(self);
	}

	fn set_font(&mut self, font: &str) {
		CanvasRenderingContext2d::set_font(self, font);
	}

	fn set_text_align(&mut self, align: &str) {
		CanvasRenderingContext2d::set_text_align(self, align);
	}

	fn set_text_baseline(&mut self, baseline: &str) {
		CanvasRenderingContext2d::set_text_baseline(self, baseline);
	}

	fn fill_text(&mut self, text: &str, x: f64, y: f64) {
		if let Err(err) = CanvasRenderingContext2d::fill_text(self, text, x, y) {
			warn!("fill_text {text:?} failed: {err:?}");
		}
	}
}
