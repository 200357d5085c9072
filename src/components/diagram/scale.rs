//! Canvas sizing for high-density displays and pointer coordinate mapping.
//!
//! The backing store is sized in device pixels while the element keeps its
//! CSS size, and the context is scaled so drawing code works in CSS pixels.
//! Pointer positions are mapped into the same CSS-pixel frame.

#[cfg(test)]
#[path = "scale_test.rs"]
mod scale_test;

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::error::DiagramError;
use crate::geometry::Point;

/// The window's device pixel ratio, falling back to 1 for nonsense values.
pub fn device_pixel_ratio(window: &Window) -> f64 {
	sanitize_ratio(window.device_pixel_ratio())
}

/// Clamps a reported pixel ratio to something usable.
pub fn sanitize_ratio(ratio: f64) -> f64 {
	if ratio.is_finite() && ratio > 0.0 {
		ratio
	} else {
		1.0
	}
}

/// Backing-store size in device pixels for a `width × height` CSS box.
pub fn backing_size(width: f64, height: f64, ratio: f64) -> (u32, u32) {
	let ratio = sanitize_ratio(ratio);
	(
		(width.max(0.0) * ratio).round() as u32,
		(height.max(0.0) * ratio).round() as u32,
	)
}

/// Maps viewport client coordinates onto the surface whose bounding rect
/// starts at `(left, top)`.
pub fn to_surface(client_x: f64, client_y: f64, left: f64, top: f64) -> Point {
	Point::new(client_x - left, client_y - top)
}

/// Sizes `canvas` for `ratio` and scales `ctx` so one unit is one CSS pixel.
pub fn scale_canvas(
	canvas: &HtmlCanvasElement,
	ctx: &CanvasRenderingContext2d,
	width: f64,
	height: f64,
	ratio: f64,
) -> Result<(), DiagramError> {
	let ratio = sanitize_ratio(ratio);
	let (backing_w, backing_h) = backing_size(width, height, ratio);
	canvas.set_width(backing_w);
	canvas.set_height(backing_h);

	let style = canvas.style();
	style.set_property("width", &format!("{width}px"))?;
	style.set_property("height", &format!("{height}px"))?;

	// resizing the backing store resets the transform
	ctx.scale(ratio, ratio)?;
	Ok(())
}
