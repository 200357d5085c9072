//! Interactive triangle diagram: canvas glue, hover/drag handling and rendering.

mod component;
mod error;
pub mod interaction;
mod render;
pub mod scale;
mod state;
mod types;

pub use component::DiagramCanvas;
pub use error::DiagramError;
pub use interaction::{
	HitTarget, InteractionController, InteractionState, Pointer, PointerKind, TOUCH_RADIUS,
};
pub use render::{HOVER_FILL, HOVERED_STROKE_WIDTH, render};
pub use state::{DEFAULT_HEIGHT, DEFAULT_WIDTH, DiagramState};
pub use types::{DiagramData, TriangleData};
