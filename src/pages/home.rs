use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::layout::{Container, Layout};

/// Table of contents.
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<Layout>
			<Container>
				<h1>"Table of contents"</h1>
				<ul class="toc">
					<li>
						<A href="/notes/triangle">"Triangle"</A>
					</li>
				</ul>
			</Container>
		</Layout>
	}
}
