use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::layout::{Container, Layout};

/// 404 - Not Found
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<Layout>
			<Container>
				<h1>"Page not found"</h1>
				<A href="/">"Back to the table of contents"</A>
			</Container>
		</Layout>
	}
}
