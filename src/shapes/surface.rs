//! The paint operations shapes are drawn through.
//!
//! Shapes never talk to the browser directly. The canvas glue implements
//! [`DrawingSurface`] for `CanvasRenderingContext2d`; tests draw into a
//! [`Recorder`] and compare the captured [`PaintOp`]s.

use super::style::{ShapeStyle, TextStyle};

/// A raster surface with a top-left origin, addressed in CSS pixels.
pub trait DrawingSurface {
	/// Clears a rectangle to transparent.
	fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
	/// Starts a new path.
	fn begin_path(&mut self);
	/// Moves the pen without drawing.
	fn move_to(&mut self, x: f64, y: f64);
	/// Adds a straight line to the path.
	fn line_to(&mut self, x: f64, y: f64);
	/// Adds a clockwise arc around `(x, y)` to the path.
	fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64);
	/// Closes the current sub-path.
	fn close_path(&mut self);
	/// Sets the fill color.
	fn set_fill_style(&mut self, color: &str);
	/// Sets the stroke color.
	fn set_stroke_style(&mut self, color: &str);
	/// Sets the stroke width.
	fn set_line_width(&mut self, width: f64);
	/// Sets the opacity applied to subsequent paint.
	fn set_global_alpha(&mut self, alpha: f64);
	/// Fills the current path.
	fn fill(&mut self);
	/// Strokes the current path.
	fn stroke(&mut self);
	/// Sets the CSS font shorthand.
	fn set_font(&mut self, font: &str);
	/// Sets horizontal text alignment.
	fn set_text_align(&mut self, align: &str);
	/// Sets the text baseline.
	fn set_text_baseline(&mut self, baseline: &str);
	/// Fills `text` anchored at `(x, y)`.
	fn fill_text(&mut self, text: &str, x: f64, y: f64);
}

/// One captured call on a [`Recorder`].
#[derive(Clone, Debug, PartialEq)]
#[allow(missing_docs)]
pub enum PaintOp {
	ClearRect { x: f64, y: f64, width: f64, height: f64 },
	BeginPath,
	MoveTo { x: f64, y: f64 },
	LineTo { x: f64, y: f64 },
	Arc { x: f64, y: f64, radius: f64, start: f64, end: f64 },
	ClosePath,
	FillStyle(String),
	StrokeStyle(String),
	LineWidth(f64),
	GlobalAlpha(f64),
	Fill,
	Stroke,
	Font(String),
	TextAlign(String),
	TextBaseline(String),
	FillText { text: String, x: f64, y: f64 },
}

/// A surface that only remembers what it was asked to do.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Recorder {
	/// Every call, in order.
	pub ops: Vec<PaintOp>,
}

impl Recorder {
	/// An empty recorder.
	pub fn new() -> Self {
		Self::default()
	}

	/// Text passed to `fill_text`, in order.
	pub fn texts(&self) -> Vec<&str> {
		self.ops
			.iter()
			.filter_map(|op| match op {
				PaintOp::FillText { text, .. } => Some(text.as_str()),
				_ => None,
			})
			.collect()
	}

	/// Every `LineWidth` set, in order.
	pub fn line_widths(&self) -> Vec<f64> {
		self.ops
			.iter()
			.filter_map(|op| match op {
				PaintOp::LineWidth(w) => Some(*w),
				_ => None,
			})
			.collect()
	}
}

impl DrawingSurface for Recorder {
	fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
		self.ops.push(PaintOp::ClearRect {
			x,
			y,
			width,
			height,
		});
	}

	fn begin_path(&mut self) {
		self.ops.push(PaintOp::BeginPath);
	}

	fn move_to(&mut self, x: f64, y: f64) {
		self.ops.push(PaintOp::MoveTo { x, y });
	}

	fn line_to(&mut self, x: f64, y: f64) {
		self.ops.push(PaintOp::LineTo { x, y });
	}

	fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
		self.ops.push(PaintOp::Arc {
			x,
			y,
			radius,
			start,
			end,
		});
	}

	fn close_path(&mut self) {
		self.ops.push(PaintOp::ClosePath);
	}

	fn set_fill_style(&mut self, color: &str) {
		self.ops.push(PaintOp::FillStyle(color.to_owned()));
	}

	fn set_stroke_style(&mut self, color: &str) {
		self.ops.push(PaintOp::StrokeStyle(color.to_owned()));
	}

	fn set_line_width(&mut self, width: f64) {
		self.ops.push(PaintOp::LineWidth(width));
	}

	fn set_global_alpha(&mut self, alpha: f64) {
		self.ops.push(PaintOp::GlobalAlpha(alpha));
	}

	fn fill(&mut self) {
		self.ops.push(PaintOp::Fill);
	}

	fn stroke(&mut self) {
		self.ops.push(PaintOp::Stroke);
	}

	fn set_font(&mut self, font: &str) {
		self.ops.push(PaintOp::Font(font.to_owned()));
	}

	fn set_text_align(&mut self, align: &str) {
		self.ops.push(PaintOp::TextAlign(align.to_owned()));
	}

	fn set_text_baseline(&mut self, baseline: &str) {
		self.ops.push(PaintOp::TextBaseline(baseline.to_owned()));
	}

	fn fill_text(&mut self, text: &str, x: f64, y: f64) {
		self.ops.push(PaintOp::FillText {
			text: text.to_owned(),
			x,
			y,
		});
	}
}

/// Fills then strokes the current path, skipping whichever `style` disables.
pub(crate) fn paint_path(surface: &mut impl DrawingSurface, style: &ShapeStyle) {
	if let Some(fill) = &style.fill {
		surface.set_fill_style(fill);
		surface.fill();
	}
	if let Some(stroke) = &style.stroke {
		surface.set_stroke_style(stroke);
		surface.set_line_width(style.stroke_width);
		surface.stroke();
	}
}

/// Draws `text` centered on `(x, y)`.
pub(crate) fn paint_label(
	surface: &mut impl DrawingSurface,
	style: &TextStyle,
	text: &str,
	x: f64,
	y: f64,
) {
	if let Some(font) = style.font() {
		surface.set_font(&font);
	}
	if let Some(color) = &style.color {
		surface.set_fill_style(color);
		surface.set_text_align("center");
		surface.set_text_baseline("middle");
		surface.fill_text(text, x, y);
	}
}
