//! Interactive geometry notes: draggable triangles on a canvas with live
//! angle readouts, as a Leptos client-side app.
//!
//! The geometry and interaction core ([`geometry`], [`shapes`] and
//! [`components::diagram`]) is independent of the browser and draws through
//! [`shapes::DrawingSurface`]; the Leptos components only wire DOM events to it.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
pub mod components;
pub mod geometry;
mod pages;
pub mod shapes;

// Top-Level pages
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;
use crate::pages::triangle::TrianglePage;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	if let Err(err) = console_log::init_with_level(Level::Debug) {
		web_sys::console::warn_1(&format!("logger already set: {err}").into());
	}
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router which renders the table of contents, the notes pages and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />

		// sets the document title
		<Title text="Canvas Maths" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
				<Route path=path!("/notes/triangle") view=TrianglePage />
			</Routes>
		</Router>
	}
}
