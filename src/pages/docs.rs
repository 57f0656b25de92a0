// Docs index page
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn DocsPage() -> impl IntoView {
    view! {
        <section class="page-header">
            <div class="container">
                <h1 class="page-title">"Documentation"</h1>
                <p class="page-description">
                    "Everything you need to know about Ludwig"
                </p>
                <A href="/docs/getting-started" attr:class="btn btn-primary">
                    "Getting Started"
                </A>
            </div>
        </section>
    }
}
