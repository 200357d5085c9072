use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, PointerEvent};

use super::error::DiagramError;
use super::interaction::{Pointer, PointerKind, TOUCH_RADIUS};
use super::render;
use super::scale;
use super::state::{DEFAULT_HEIGHT, DEFAULT_WIDTH, DiagramState};
use super::types::DiagramData;
use crate::geometry::Point;

/// A diagram attached to its canvas.
struct Mounted {
	state: DiagramState,
	ctx: CanvasRenderingContext2d,
}

impl Mounted {
	fn redraw(&mut self) {
		render::render(&self.state, &mut self.ctx);
	}
}

type Shared = Rc<RefCell<Option<Mounted>>>;

fn mount(
	canvas: &HtmlCanvasElement,
	data: &DiagramData,
	width: f64,
	height: f64,
	touch_radius: f64,
) -> Result<Mounted, DiagramError> {
	let window = web_sys::window().ok_or(DiagramError::NoWindow)?;
	let ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")?
		.ok_or(DiagramError::NoContext)?
		.dyn_into()
		.map_err(|_| DiagramError::NoContext)?;
	scale::scale_canvas(canvas, &ctx, width, height, scale::device_pixel_ratio(&window))?;

	Ok(Mounted {
		state: DiagramState::new(data, width, height, touch_radius),
		ctx,
	})
}

fn surface_position(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<Point> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some(scale::to_surface(
		f64::from(ev.client_x()),
		f64::from(ev.client_y()),
		rect.left(),
		rect.top(),
	))
}

fn pointer_of(ev: &PointerEvent) -> Pointer {
	Pointer::new(
		ev.pointer_id(),
		PointerKind::from_pointer_type(&ev.pointer_type()),
	)
}

/// Ends the gesture of `pointer`; a mouse keeps its hover for one more frame.
fn finish_gesture(shared: &Shared, pointer: Pointer) {
	with_mounted(shared, |s| s.pointer_up(pointer));
	if pointer.kind == PointerKind::Mouse {
		release_mouse_next_frame(shared.clone());
	}
}

/// Runs `update` on the mounted diagram and redraws if it reports a change.
fn with_mounted(shared: &Shared, update: impl FnOnce(&mut DiagramState) -> bool) {
	if let Some(ref mut m) = *shared.borrow_mut() {
		if update(&mut m.state) {
			m.redraw();
		}
	}
}

/// Lets a finished mouse gesture settle for one frame before hover may clear.
fn release_mouse_next_frame(shared: Shared) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let cb = Closure::once_into_js(move || {
		if let Some(ref mut m) = *shared.borrow_mut() {
			m.state.release_mouse();
		}
	});
	if let Err(err) = window.request_animation_frame(cb.unchecked_ref()) {
		warn!("could not schedule mouse release: {err:?}");
	}
}

/// An interactive canvas: triangles whose vertices, or whole bodies, can be
/// dragged, with live angle readouts.
#[component]
pub fn DiagramCanvas(
	#[prop(into)] data: Signal<DiagramData>,
	#[prop(default = DEFAULT_WIDTH)] width: f64,
	#[prop(default = DEFAULT_HEIGHT)] height: f64,
	#[prop(default = TOUCH_RADIUS)] touch_radius: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let shared: Shared = Rc::new(RefCell::new(None));
	let shared_init = shared.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		match mount(&canvas, &data.get(), width, height, touch_radius) {
			Ok(mut mounted) => {
				mounted.redraw();
				info!(
					"diagram mounted: {} triangles on {width}x{height}",
					mounted.state.scene.triangles().count()
				);
				*shared_init.borrow_mut() = Some(mounted);
			}
			Err(err) => error!("diagram setup failed: {err}"),
		}
	});

	let shared_pd = shared.clone();
	let on_pointerdown = move |ev: PointerEvent| {
		let Some(pos) = surface_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(canvas) = canvas_ref.get() {
			if let Err(err) = canvas.set_pointer_capture(ev.pointer_id()) {
				warn!("pointer capture failed: {err:?}");
			}
		}
		let pointer = pointer_of(&ev);
		with_mounted(&shared_pd, |s| s.pointer_down(pos, pointer));
	};

	let shared_pm = shared.clone();
	let on_pointermove = move |ev: PointerEvent| {
		let Some(pos) = surface_position(canvas_ref, &ev) else {
			return;
		};
		let pointer = pointer_of(&ev);
		with_mounted(&shared_pm, |s| s.pointer_move(pos, pointer));
	};

	let shared_pu = shared.clone();
	let on_pointerup = move |ev: PointerEvent| {
		finish_gesture(&shared_pu, pointer_of(&ev));
	};

	let shared_pc = shared.clone();
	let on_pointercancel = move |ev: PointerEvent| {
		finish_gesture(&shared_pc, pointer_of(&ev));
	};

	let shared_pl = shared.clone();
	let on_pointerleave = move |_: PointerEvent| {
		with_mounted(&shared_pl, DiagramState::pointer_leave);
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="diagram-canvas"
			on:pointerdown=on_pointerdown
			on:pointermove=on_pointermove
			on:pointerup=on_pointerup
			on:pointercancel=on_pointercancel
			on:pointerleave=on_pointerleave
			style="display: block; touch-action: none;"
		/>
	}
}
