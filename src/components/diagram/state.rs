#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use super::interaction::{InteractionController, Pointer};
use super::types::DiagramData;
use crate::geometry::Point;
use crate::shapes::Scene;

/// Canvas width used when the host does not pick one.
pub const DEFAULT_WIDTH: f64 = 640.0;
/// Canvas height used when the host does not pick one.
pub const DEFAULT_HEIGHT: f64 = 320.0;

/// Everything one mounted diagram keeps between events.
#[derive(Clone, Debug)]
pub struct DiagramState {
	/// Geometry being shown and dragged.
	pub scene: Scene,
	/// Hover/drag state machine.
	pub controller: InteractionController,
	/// Logical surface width in CSS pixels.
	pub width: f64,
	/// Logical surface height in CSS pixels.
	pub height: f64,
}

impl DiagramState {
	/// Builds the scene from `data`, one set of fresh vertices per triangle.
	pub fn new(data: &DiagramData, width: f64, height: f64, touch_radius: f64) -> Self {
		let mut scene = Scene::new();
		for t in &data.triangles {
			scene.add_triangle(t.a.into(), t.b.into(), t.c.into());
		}

		Self {
			scene,
			controller: InteractionController::new(touch_radius),
			width,
			height,
		}
	}

	/// See [`InteractionController::pointer_down`].
	pub fn pointer_down(&mut self, pos: Point, pointer: Pointer) -> bool {
		self.controller.pointer_down(&self.scene, pos, pointer)
	}

	/// See [`InteractionController::pointer_move`].
	pub fn pointer_move(&mut self, pos: Point, pointer: Pointer) -> bool {
		self.controller.pointer_move(&mut self.scene, pos, pointer)
	}

	/// See [`InteractionController::pointer_up`].
	pub fn pointer_up(&mut self, pointer: Pointer) -> bool {
		self.controller.pointer_up(pointer)
	}

	/// See [`InteractionController::pointer_leave`].
	pub fn pointer_leave(&mut self) -> bool {
		self.controller.pointer_leave()
	}

	/// See [`InteractionController::release_mouse`].
	pub fn release_mouse(&mut self) {
		self.controller.release_mouse();
	}
}
