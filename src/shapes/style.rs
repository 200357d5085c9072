//! Paint configuration: fixed defaults with optional per-call overrides.
//!
//! Each draw operation owns a default [`ShapeStyle`] / [`TextStyle`] and merges
//! the caller's override over it. A field left unset in the override keeps the
//! default; only an explicit `no_*` setter disables that paint step.

/// Stroke width used when none (or a non-positive one) is given.
pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;

/// Font family used when a font size is set without a family.
pub const DEFAULT_FONT_FAMILY: &str = "Arial";

/// Fully resolved fill/stroke paint for a path.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeStyle {
	/// Fill color, or `None` to skip filling.
	pub fill: Option<String>,
	/// Stroke color, or `None` to skip stroking.
	pub stroke: Option<String>,
	/// Line width for the stroke.
	pub stroke_width: f64,
}

impl ShapeStyle {
	/// Builds a resolved style from literal colors.
	pub fn new(fill: Option<&str>, stroke: Option<&str>) -> Self {
		Self {
			fill: fill.map(str::to_owned),
			stroke: stroke.map(str::to_owned),
			stroke_width: DEFAULT_STROKE_WIDTH,
		}
	}

	/// Applies `over` on top of these defaults.
	pub fn merge(&self, over: &ShapeStyleOverride) -> Self {
		Self {
			fill: over.fill.clone().unwrap_or_else(|| self.fill.clone()),
			stroke: over.stroke.clone().unwrap_or_else(|| self.stroke.clone()),
			stroke_width: over
				.stroke_width
				.filter(|w| *w > 0.0)
				.unwrap_or(self.stroke_width),
		}
	}
}

/// Caller-supplied changes to a [`ShapeStyle`].
///
/// The outer `Option` is "was this field given"; the inner one is the color or
/// an explicit "don't paint".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShapeStyleOverride {
	/// Fill override.
	pub fill: Option<Option<String>>,
	/// Stroke override.
	pub stroke: Option<Option<String>>,
	/// Stroke width override.
	pub stroke_width: Option<f64>,
}

impl ShapeStyleOverride {
	/// An override that changes nothing.
	pub fn new() -> Self {
		Self::default()
	}

	/// Fill with `color`.
	pub fn fill(mut self, color: impl Into<String>) -> Self {
		self.fill = Some(Some(color.into()));
		self
	}

	/// Disable filling.
	pub fn no_fill(mut self) -> Self {
		self.fill = Some(None);
		self
	}

	/// Stroke with `color`.
	pub fn stroke(mut self, color: impl Into<String>) -> Self {
		self.stroke = Some(Some(color.into()));
		self
	}

	/// Disable stroking.
	pub fn no_stroke(mut self) -> Self {
		self.stroke = Some(None);
		self
	}

	/// Stroke `width` pixels wide.
	pub fn stroke_width(mut self, width: f64) -> Self {
		self.stroke_width = Some(width);
		self
	}
}

/// Fully resolved text paint.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
	/// CSS font size such as `"11px"`; `None` leaves the surface font alone.
	pub font_size: Option<String>,
	/// CSS font family.
	pub font_family: Option<String>,
	/// Text color; `None` skips the text entirely.
	pub color: Option<String>,
}

impl TextStyle {
	/// Builds a resolved text style from literals.
	pub fn new(font_size: &str, font_family: &str, color: &str) -> Self {
		Self {
			font_size: Some(font_size.to_owned()),
			font_family: Some(font_family.to_owned()),
			color: Some(color.to_owned()),
		}
	}

	/// Applies `over` on top of these defaults.
	pub fn merge(&self, over: &TextStyleOverride) -> Self {
		Self {
			font_size: over.font_size.clone().unwrap_or_else(|| self.font_size.clone()),
			font_family: over
				.font_family
				.clone()
				.unwrap_or_else(|| self.font_family.clone()),
			color: over.color.clone().unwrap_or_else(|| self.color.clone()),
		}
	}

	/// CSS font shorthand, if a size is set.
	pub fn font(&self) -> Option<String> {
		self.font_size.as_ref().map(|size| {
			format!(
				"{size} {}",
				self.font_family.as_deref().unwrap_or(DEFAULT_FONT_FAMILY)
			)
		})
	}
}

/// Caller-supplied changes to a [`TextStyle`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextStyleOverride {
	/// Font size override.
	pub font_size: Option<Option<String>>,
	/// Font family override.
	pub font_family: Option<Option<String>>,
	/// Color override.
	pub color: Option<Option<String>>,
}

impl TextStyleOverride {
	/// An override that changes nothing.
	pub fn new() -> Self {
		Self::default()
	}

	/// Use `size`, e.g. `"16px"`.
	pub fn font_size(mut self, size: impl Into<String>) -> Self {
		self.font_size = Some(Some(size.into()));
		self
	}

	/// Use `family`.
	pub fn font_family(mut self, family: impl Into<String>) -> Self {
		self.font_family = Some(Some(family.into()));
		self
	}

	/// Draw text in `color`.
	pub fn color(mut self, color: impl Into<String>) -> Self {
		self.color = Some(Some(color.into()));
		self
	}

	/// Suppress the text.
	pub fn no_color(mut self) -> Self {
		self.color = Some(None);
		self
	}
}
