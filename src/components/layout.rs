//! Page chrome: header, footer and the centered content column.

use leptos::prelude::*;
use leptos_router::components::A;

/// Centers its children in a readable column.
#[component]
pub fn Container(children: Children) -> impl IntoView {
	view! { <div class="container">{children()}</div> }
}

#[component]
fn Header() -> impl IntoView {
	view! {
		<header class="site-header">
			<Container>
				<A href="/">"Canvas Maths"</A>
			</Container>
		</header>
	}
}

#[component]
fn Footer() -> impl IntoView {
	view! {
		<footer class="site-footer">
			<Container>"Drag a corner to reshape, or the inside to move."</Container>
		</footer>
	}
}

/// Header, content, footer.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
	view! {
		<div class="layout">
			<Header />
			<main class="content">{children()}</main>
			<Footer />
		</div>
	}
}
