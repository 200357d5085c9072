use leptos::prelude::*;

use crate::components::diagram::{DiagramCanvas, DiagramData, TriangleData};
use crate::components::layout::{Container, Layout};

/// Two triangles to start from: one acute, one obtuse.
fn initial_diagram() -> DiagramData {
	DiagramData {
		triangles: vec![
			TriangleData {
				a: (60.0, 60.0),
				b: (280.0, 110.0),
				c: (110.0, 270.0),
			},
			TriangleData {
				a: (360.0, 250.0),
				b: (600.0, 260.0),
				c: (420.0, 140.0),
			},
		],
	}
}

/// Notes page on triangle angles, built around the interactive diagram.
#[component]
pub fn TrianglePage() -> impl IntoView {
	let data = Signal::derive(initial_diagram);

	view! {
		<Layout>
			<Container>
				<h1>"Triangle"</h1>
				<p>"The interior angles of a triangle always add up to 180°."</p>
				<p>"Drag the corners and watch them change."</p>
				<DiagramCanvas data=data width=640.0 height=320.0 />
			</Container>
		</Layout>
	}
}
