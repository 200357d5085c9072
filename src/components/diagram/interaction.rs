//! Pointer-driven hit-testing and the drag/hover state machine.
//!
//! The controller owns no geometry. The host hands it the [`Scene`] on every
//! event, already converted to surface-local pixels, and re-renders when an
//! event reports a visible change.

#[cfg(test)]
#[path = "interaction_test.rs"]
mod interaction_test;

use log::debug;

use crate::geometry::Point;
use crate::shapes::{PointId, Scene, TriangleId};

/// Default distance within which the pointer counts as "on" a vertex.
pub const TOUCH_RADIUS: f64 = 15.0;

/// What lies under the pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HitTarget {
	/// Empty canvas.
	#[default]
	None,
	/// A single vertex.
	Vertex(PointId),
	/// The body of a triangle.
	Shape(TriangleId),
}

/// The device behind a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
	/// A mouse or trackpad.
	Mouse,
	/// A finger.
	Touch,
	/// A stylus.
	Pen,
}

impl PointerKind {
	/// Maps a DOM `pointerType` string; unknown types are treated as touch.
	pub fn from_pointer_type(pointer_type: &str) -> Self {
		match pointer_type {
			"mouse" => Self::Mouse,
			"pen" => Self::Pen,
			_ => Self::Touch,
		}
	}
}

/// One pointer as the host reports it: the DOM `pointerId` plus its device.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pointer {
	/// Stable for the pointer's lifetime; distinguishes fingers.
	pub id: i32,
	/// Device behind the pointer.
	pub kind: PointerKind,
}

impl Pointer {
	/// A pointer with the given DOM id.
	pub const fn new(id: i32, kind: PointerKind) -> Self {
		Self { id, kind }
	}
}

/// Gesture state between pointer events.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum InteractionState {
	/// Nothing under the pointer, no button held.
	#[default]
	Idle,
	/// The pointer rests over a target.
	Hovering(HitTarget),
	/// A pointer is down and moving `target`.
	Dragging {
		/// What the drag moves; [`HitTarget::None`] tracks motion only.
		target: HitTarget,
		/// Pointer position at the previous event.
		last: Point,
		/// Id of the pointer that started the drag.
		pointer: i32,
	},
}

/// Turns pointer events into hover feedback and vertex/shape drags.
#[derive(Clone, Debug)]
pub struct InteractionController {
	touch_radius: f64,
	state: InteractionState,
	mouse_active: bool,
}

impl Default for InteractionController {
	fn default() -> Self {
		Self::new(TOUCH_RADIUS)
	}
}

impl InteractionController {
	/// A controller treating anything within `touch_radius` of a vertex as a
	/// vertex hit.
	pub fn new(touch_radius: f64) -> Self {
		Self {
			touch_radius,
			state: InteractionState::Idle,
			mouse_active: false,
		}
	}

	/// Current gesture state.
	pub fn state(&self) -> InteractionState {
		self.state
	}

	/// Vertex hit radius in pixels.
	pub fn touch_radius(&self) -> f64 {
		self.touch_radius
	}

	/// Whether a pointer is currently held down.
	pub fn is_dragging(&self) -> bool {
		matches!(self.state, InteractionState::Dragging { .. })
	}

	/// Whether a mouse gesture is still settling after its release.
	pub fn is_mouse_active(&self) -> bool {
		self.mouse_active
	}

	/// The vertex to highlight, if any.
	pub fn hovered_point(&self) -> Option<PointId> {
		match self.hover_target() {
			HitTarget::Vertex(id) => Some(id),
			_ => None,
		}
	}

	/// The triangle to outline, if any. Never set together with
	/// [`Self::hovered_point`].
	pub fn hovered_triangle(&self) -> Option<TriangleId> {
		match self.hover_target() {
			HitTarget::Shape(id) => Some(id),
			_ => None,
		}
	}

	fn hover_target(&self) -> HitTarget {
		match self.state {
			InteractionState::Idle => HitTarget::None,
			InteractionState::Hovering(target)
			| InteractionState::Dragging { target, .. } => target,
		}
	}

	/// Finds what lies under `pos`.
	///
	/// Triangles are scanned in order. The first vertex within the touch
	/// radius wins outright; otherwise the last triangle containing `pos`
	/// (the one drawn on top) is the hit.
	pub fn hit_test(&self, scene: &Scene, pos: Point) -> HitTarget {
		let radius_sq = self.touch_radius * self.touch_radius;
		let mut candidate = None;

		for (id, triangle) in scene.triangles() {
			if triangle.contains(&scene.points, pos) {
				candidate = Some(id);
			}
			for vertex in triangle.vertices() {
				if scene.points[vertex].square_distance_to(pos) < radius_sq {
					return HitTarget::Vertex(vertex);
				}
			}
		}

		candidate.map_or(HitTarget::None, HitTarget::Shape)
	}

	/// Starts a drag at `pos`. Returns whether anything visible changed.
	///
	/// A second pointer-down while a drag is in progress is ignored.
	pub fn pointer_down(&mut self, scene: &Scene, pos: Point, pointer: Pointer) -> bool {
		if self.is_dragging() {
			debug!(
				"pointer {} down at ({}, {}) ignored: drag in progress",
				pointer.id, pos.x, pos.y
			);
			return false;
		}
		if pointer.kind == PointerKind::Mouse {
			self.mouse_active = true;
		}

		let before = self.hover_target();
		let target = self.hit_test(scene, pos);
		debug!("drag start on {target:?} by {pointer:?}");
		self.state = InteractionState::Dragging {
			target,
			last: pos,
			pointer: pointer.id,
		};
		before != target
	}

	/// Follows `pointer` to `pos`: moves the drag target by the step since
	/// the previous event, or refreshes hover. Returns whether anything
	/// visible changed.
	///
	/// While dragging, only the pointer that started the drag is followed.
	pub fn pointer_move(&mut self, scene: &mut Scene, pos: Point, pointer: Pointer) -> bool {
		match self.state {
			InteractionState::Dragging { pointer: holder, .. } if holder != pointer.id => false,
			InteractionState::Dragging {
				target,
				last,
				pointer: holder,
			} => {
				let (dx, dy) = (pos.x - last.x, pos.y - last.y);
				self.state = InteractionState::Dragging {
					target,
					last: pos,
					pointer: holder,
				};
				if dx == 0.0 && dy == 0.0 {
					return false;
				}
				match target {
					HitTarget::Vertex(id) => scene.translate_point(id, dx, dy),
					HitTarget::Shape(id) => scene.translate_triangle(id, dx, dy),
					HitTarget::None => return false,
				}
				true
			}
			InteractionState::Idle | InteractionState::Hovering(_) => {
				let target = self.hit_test(scene, pos);
				let next = match target {
					HitTarget::None => InteractionState::Idle,
					_ => InteractionState::Hovering(target),
				};
				let changed = next != self.state;
				if changed {
					debug!("hover {target:?}");
				}
				self.state = next;
				changed
			}
		}
	}

	/// Ends the drag held by `pointer`. Returns whether anything visible
	/// changed.
	///
	/// Hover survives the release of a mouse drag; a touch or pen release
	/// clears it, since nothing is left under a lifted finger. Releases of
	/// other pointers are ignored.
	pub fn pointer_up(&mut self, pointer: Pointer) -> bool {
		let InteractionState::Dragging {
			target,
			pointer: holder,
			..
		} = self.state
		else {
			debug!("pointer up {pointer:?} without a drag, ignored");
			return false;
		};
		if holder != pointer.id {
			debug!("pointer up {pointer:?} ignored: not holding the drag");
			return false;
		}
		debug!("drag end on {target:?} by {pointer:?}");

		self.state = match target {
			HitTarget::None => InteractionState::Idle,
			_ if self.mouse_active => InteractionState::Hovering(target),
			_ => InteractionState::Idle,
		};
		self.hover_target() != target
	}

	/// Called by the host one animation frame after a mouse pointer-up.
	///
	/// A drag started within that frame keeps the flag, so its own release
	/// still leaves the hover in place.
	pub fn release_mouse(&mut self) {
		if self.is_dragging() {
			debug!("mouse release skipped: drag in progress");
			return;
		}
		self.mouse_active = false;
	}

	/// The pointer left the surface. Clears hover unless a drag holds it.
	pub fn pointer_leave(&mut self) -> bool {
		match self.state {
			InteractionState::Hovering(_) => {
				self.state = InteractionState::Idle;
				true
			}
			InteractionState::Idle | InteractionState::Dragging { .. } => false,
		}
	}
}
