//! Drawable shapes, their styles and the surface they paint on.


mod circle;
mod scene;
mod style;
mod surface;
mod triangle;

pub use circle::{CIRCLE_FILL_ALPHA, Circle};
pub use scene::{PointArena, PointId, Scene, TriangleId};
pub use style::{
	DEFAULT_FONT_FAMILY, DEFAULT_STROKE_WIDTH, ShapeStyle, ShapeStyleOverride, TextStyle,
	TextStyleOverride,
};
pub use surface::{DrawingSurface, PaintOp, Recorder};
pub use triangle::Triangle;
