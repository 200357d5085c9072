#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Helpers
// =============================================================

const MOUSE: Pointer = Pointer::new(1, PointerKind::Mouse);
const FINGER: Pointer = Pointer::new(2, PointerKind::Touch);
const OTHER_FINGER: Pointer = Pointer::new(3, PointerKind::Touch);
const PEN: Pointer = Pointer::new(4, PointerKind::Pen);

/// Right triangle (100,100) (200,100) (100,200) plus a far-away second one.
fn scene() -> (Scene, TriangleId, TriangleId) {
	let mut scene = Scene::new();
	let first = scene.add_triangle(
		Point::new(100.0, 100.0),
		Point::new(200.0, 100.0),
		Point::new(100.0, 200.0),
	);
	let second = scene.add_triangle(
		Point::new(400.0, 100.0),
		Point::new(500.0, 100.0),
		Point::new(400.0, 200.0),
	);
	(scene, first, second)
}

fn corners(scene: &Scene, id: TriangleId) -> [Point; 3] {
	scene
		.triangle(id)
		.map(|t| t.corners(&scene.points))
		.unwrap_or([Point::new(f64::NAN, f64::NAN); 3])
}

fn vertex(scene: &Scene, id: TriangleId, index: usize) -> PointId {
	scene
		.triangle(id)
		.map(|t| t.vertices()[index])
		.unwrap_or_else(|| panic!("missing triangle {id:?}"))
}

// =============================================================
// PointerKind
// =============================================================

#[test]
fn pointer_kind_from_dom_type() {
	assert_eq!(PointerKind::from_pointer_type("mouse"), PointerKind::Mouse);
	assert_eq!(PointerKind::from_pointer_type("pen"), PointerKind::Pen);
	assert_eq!(PointerKind::from_pointer_type("touch"), PointerKind::Touch);
	assert_eq!(PointerKind::from_pointer_type(""), PointerKind::Touch);
}

// =============================================================
// Hit-testing
// =============================================================

#[test]
fn hit_vertex_within_touch_radius() {
	let (scene, first, _) = scene();
	let ctl = InteractionController::default();
	assert_eq!(
		ctl.hit_test(&scene, Point::new(205.0, 104.0)),
		HitTarget::Vertex(vertex(&scene, first, 1))
	);
}

#[test]
fn touch_radius_is_exclusive() {
	let (scene, _, _) = scene();
	let ctl = InteractionController::new(10.0);
	assert_eq!(ctl.hit_test(&scene, Point::new(210.0, 100.0)), HitTarget::None);
}

#[test]
fn hit_triangle_body() {
	let (scene, first, second) = scene();
	let ctl = InteractionController::default();
	assert_eq!(ctl.hit_test(&scene, Point::new(130.0, 130.0)), HitTarget::Shape(first));
	assert_eq!(ctl.hit_test(&scene, Point::new(430.0, 130.0)), HitTarget::Shape(second));
}

#[test]
fn hit_nothing() {
	let (scene, _, _) = scene();
	let ctl = InteractionController::default();
	assert_eq!(ctl.hit_test(&scene, Point::new(300.0, 300.0)), HitTarget::None);
}

#[test]
fn vertex_beats_containing_triangle() {
	// point inside the triangle and within reach of vertex A
	let (scene, first, _) = scene();
	let ctl = InteractionController::default();
	assert_eq!(
		ctl.hit_test(&scene, Point::new(108.0, 108.0)),
		HitTarget::Vertex(vertex(&scene, first, 0))
	);
}

#[test]
fn topmost_containing_triangle_wins() {
	let mut scene = Scene::new();
	scene.add_triangle(
		Point::new(0.0, 0.0),
		Point::new(300.0, 0.0),
		Point::new(0.0, 300.0),
	);
	let top = scene.add_triangle(
		Point::new(50.0, 50.0),
		Point::new(150.0, 50.0),
		Point::new(50.0, 150.0),
	);
	let ctl = InteractionController::default();
	assert_eq!(ctl.hit_test(&scene, Point::new(80.0, 80.0)), HitTarget::Shape(top));
}

#[test]
fn first_vertex_in_scan_order_wins() {
	let mut scene = Scene::new();
	let first = scene.add_triangle(
		Point::new(0.0, 0.0),
		Point::new(100.0, 0.0),
		Point::new(0.0, 100.0),
	);
	scene.add_triangle(
		Point::new(4.0, 4.0),
		Point::new(200.0, 0.0),
		Point::new(0.0, 200.0),
	);
	let ctl = InteractionController::default();
	assert_eq!(
		ctl.hit_test(&scene, Point::new(2.0, 2.0)),
		HitTarget::Vertex(vertex(&scene, first, 0))
	);
}

// =============================================================
// Hover
// =============================================================

#[test]
fn hover_vertex_suppresses_triangle() {
	let (mut scene, first, _) = scene();
	let mut ctl = InteractionController::default();

	assert!(ctl.pointer_move(&mut scene, Point::new(108.0, 108.0), MOUSE));
	assert_eq!(ctl.hovered_point(), Some(vertex(&scene, first, 0)));
	assert_eq!(ctl.hovered_triangle(), None);
}

#[test]
fn hover_triangle_body() {
	let (mut scene, first, _) = scene();
	let mut ctl = InteractionController::default();

	assert!(ctl.pointer_move(&mut scene, Point::new(130.0, 130.0), MOUSE));
	assert_eq!(ctl.hovered_triangle(), Some(first));
	assert_eq!(ctl.hovered_point(), None);
	assert_eq!(ctl.state(), InteractionState::Hovering(HitTarget::Shape(first)));
}

#[test]
fn hover_change_is_reported_once() {
	let (mut scene, _, _) = scene();
	let mut ctl = InteractionController::default();

	assert!(ctl.pointer_move(&mut scene, Point::new(130.0, 130.0), MOUSE));
	assert!(!ctl.pointer_move(&mut scene, Point::new(131.0, 130.0), MOUSE));
	assert!(ctl.pointer_move(&mut scene, Point::new(300.0, 300.0), MOUSE));
	assert_eq!(ctl.state(), InteractionState::Idle);
	assert!(!ctl.pointer_move(&mut scene, Point::new(310.0, 300.0), MOUSE));
}

#[test]
fn hover_does_not_move_geometry() {
	let (mut scene, first, _) = scene();
	let before = corners(&scene, first);
	let mut ctl = InteractionController::default();
	ctl.pointer_move(&mut scene, Point::new(130.0, 130.0), MOUSE);
	ctl.pointer_move(&mut scene, Point::new(140.0, 150.0), MOUSE);
	assert_eq!(corners(&scene, first), before);
}

#[test]
fn pointer_leave_clears_hover() {
	let (mut scene, _, _) = scene();
	let mut ctl = InteractionController::default();
	ctl.pointer_move(&mut scene, Point::new(130.0, 130.0), MOUSE);
	assert!(ctl.pointer_leave());
	assert_eq!(ctl.state(), InteractionState::Idle);
	assert!(!ctl.pointer_leave());
}

// =============================================================
// Dragging
// =============================================================

#[test]
fn drag_vertex_moves_only_that_vertex() {
	let (mut scene, first, second) = scene();
	let other = corners(&scene, second);
	let mut ctl = InteractionController::default();

	ctl.pointer_down(&scene, Point::new(201.0, 99.0), FINGER);
	assert!(ctl.pointer_move(&mut scene, Point::new(213.0, 94.0), FINGER));

	assert_eq!(
		corners(&scene, first),
		[Point::new(100.0, 100.0), Point::new(212.0, 95.0), Point::new(100.0, 200.0)]
	);
	assert_eq!(corners(&scene, second), other);
}

#[test]
fn drag_inside_translates_whole_triangle() {
	let (mut scene, first, _) = scene();
	let before = corners(&scene, first);
	let mut ctl = InteractionController::default();

	ctl.pointer_down(&scene, Point::new(130.0, 130.0), MOUSE);
	assert!(ctl.pointer_move(&mut scene, Point::new(155.0, 120.0), MOUSE));

	let after = corners(&scene, first);
	for (b, a) in before.iter().zip(after.iter()) {
		assert_eq!(a.x - b.x, 25.0);
		assert_eq!(a.y - b.y, -10.0);
	}
	for (i, j) in [(0, 1), (1, 2), (2, 0)] {
		assert_eq!(before[i].distance_to(before[j]), after[i].distance_to(after[j]));
	}
}

#[test]
fn drag_uses_step_since_previous_move() {
	let (mut scene, first, _) = scene();
	let mut ctl = InteractionController::default();

	ctl.pointer_down(&scene, Point::new(100.0, 100.0), PEN);
	for step in 1..=20 {
		let s = f64::from(step);
		let pos = Point::new(100.0 + 3.0 * s, 100.0 - 2.0 * s);
		ctl.pointer_move(&mut scene, pos, PEN);
	}

	assert_eq!(corners(&scene, first)[0], Point::new(160.0, 60.0));
}

#[test]
fn drag_keeps_target_when_pointer_outruns_it() {
	let (mut scene, first, _) = scene();
	let mut ctl = InteractionController::default();

	ctl.pointer_down(&scene, Point::new(100.0, 200.0), MOUSE);
	ctl.pointer_move(&mut scene, Point::new(350.0, 350.0), MOUSE);
	ctl.pointer_move(&mut scene, Point::new(360.0, 345.0), MOUSE);

	assert_eq!(corners(&scene, first)[2], Point::new(360.0, 345.0));
}

#[test]
fn drag_on_empty_canvas_moves_nothing() {
	let (mut scene, first, second) = scene();
	let a = corners(&scene, first);
	let b = corners(&scene, second);
	let mut ctl = InteractionController::default();

	assert!(!ctl.pointer_down(&scene, Point::new(300.0, 300.0), FINGER));
	assert!(ctl.is_dragging());
	assert!(!ctl.pointer_move(&mut scene, Point::new(130.0, 130.0), FINGER));

	assert_eq!(corners(&scene, first), a);
	assert_eq!(corners(&scene, second), b);
	// no hover picked up mid-drag
	assert_eq!(ctl.hovered_triangle(), None);
}

#[test]
fn second_pointer_down_is_ignored() {
	let (mut scene, first, second) = scene();
	let mut ctl = InteractionController::default();

	ctl.pointer_down(&scene, Point::new(130.0, 130.0), FINGER);
	assert!(!ctl.pointer_down(&scene, Point::new(430.0, 130.0), OTHER_FINGER));
	ctl.pointer_move(&mut scene, Point::new(140.0, 130.0), FINGER);

	assert_eq!(corners(&scene, first)[0], Point::new(110.0, 100.0));
	assert_eq!(corners(&scene, second)[0], Point::new(400.0, 100.0));
}

#[test]
fn other_pointer_moves_do_not_steer_drag() {
	let (mut scene, first, _) = scene();
	let mut ctl = InteractionController::default();

	ctl.pointer_down(&scene, Point::new(200.0, 100.0), FINGER);
	ctl.pointer_down(&scene, Point::new(500.0, 300.0), OTHER_FINGER);
	assert!(!ctl.pointer_move(&mut scene, Point::new(501.0, 300.0), OTHER_FINGER));
	assert_eq!(corners(&scene, first)[1], Point::new(200.0, 100.0));

	// the holder's step is still measured from its own last position
	assert!(ctl.pointer_move(&mut scene, Point::new(205.0, 103.0), FINGER));
	assert_eq!(corners(&scene, first)[1], Point::new(205.0, 103.0));
}

#[test]
fn other_pointer_up_does_not_end_drag() {
	let (mut scene, first, _) = scene();
	let mut ctl = InteractionController::default();

	ctl.pointer_down(&scene, Point::new(200.0, 100.0), FINGER);
	ctl.pointer_down(&scene, Point::new(500.0, 300.0), OTHER_FINGER);
	assert!(!ctl.pointer_up(OTHER_FINGER));
	assert!(ctl.is_dragging());

	ctl.pointer_move(&mut scene, Point::new(210.0, 100.0), FINGER);
	assert_eq!(corners(&scene, first)[1], Point::new(210.0, 100.0));
	assert!(ctl.pointer_up(FINGER));
	assert!(!ctl.is_dragging());
}

#[test]
fn drag_target_is_highlighted() {
	let (scene, first, _) = scene();
	let mut ctl = InteractionController::default();

	assert!(ctl.pointer_down(&scene, Point::new(200.0, 100.0), FINGER));
	assert_eq!(ctl.hovered_point(), Some(vertex(&scene, first, 1)));
}

// =============================================================
// Release
// =============================================================

#[test]
fn pointer_up_without_drag_is_ignored() {
	let mut ctl = InteractionController::default();
	assert!(!ctl.pointer_up(MOUSE));
	assert_eq!(ctl.state(), InteractionState::Idle);
}

#[test]
fn touch_release_clears_hover() {
	let (scene, _, _) = scene();
	let mut ctl = InteractionController::default();

	ctl.pointer_down(&scene, Point::new(130.0, 130.0), FINGER);
	assert!(ctl.pointer_up(FINGER));
	assert_eq!(ctl.state(), InteractionState::Idle);
	assert!(!ctl.is_mouse_active());
}

#[test]
fn mouse_release_keeps_hover_until_next_frame() {
	let (mut scene, first, _) = scene();
	let mut ctl = InteractionController::default();

	ctl.pointer_down(&scene, Point::new(130.0, 130.0), MOUSE);
	assert!(ctl.is_mouse_active());
	ctl.pointer_move(&mut scene, Point::new(135.0, 130.0), MOUSE);
	assert!(!ctl.pointer_up(MOUSE));
	assert_eq!(ctl.hovered_triangle(), Some(first));

	ctl.release_mouse();
	assert!(!ctl.is_mouse_active());
	// the next move re-evaluates hover at the real position
	assert!(ctl.pointer_move(&mut scene, Point::new(300.0, 300.0), MOUSE));
	assert_eq!(ctl.state(), InteractionState::Idle);
}

#[test]
fn release_then_touch_clears_hover() {
	let (scene, _, _) = scene();
	let mut ctl = InteractionController::default();

	ctl.pointer_down(&scene, Point::new(130.0, 130.0), MOUSE);
	ctl.pointer_up(MOUSE);
	ctl.release_mouse();

	ctl.pointer_down(&scene, Point::new(130.0, 130.0), FINGER);
	ctl.pointer_up(FINGER);
	assert_eq!(ctl.state(), InteractionState::Idle);
}

#[test]
fn pointer_leave_during_drag_keeps_drag() {
	let (mut scene, first, _) = scene();
	let mut ctl = InteractionController::default();

	ctl.pointer_down(&scene, Point::new(130.0, 130.0), MOUSE);
	assert!(!ctl.pointer_leave());
	assert!(ctl.is_dragging());
	ctl.pointer_move(&mut scene, Point::new(131.0, 130.0), MOUSE);
	assert_eq!(corners(&scene, first)[0], Point::new(101.0, 100.0));
}

#[test]
fn stale_mouse_release_does_not_cut_next_drag() {
	let (scene, first, _) = scene();
	let mut ctl = InteractionController::default();

	ctl.pointer_down(&scene, Point::new(130.0, 130.0), MOUSE);
	ctl.pointer_up(MOUSE);
	// pressed again before the release frame ran
	ctl.pointer_down(&scene, Point::new(130.0, 130.0), MOUSE);
	ctl.release_mouse();
	assert!(ctl.is_mouse_active());

	ctl.pointer_up(MOUSE);
	assert_eq!(ctl.hovered_triangle(), Some(first));
	ctl.release_mouse();
	assert!(!ctl.is_mouse_active());
}
