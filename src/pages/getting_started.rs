// Getting-started guide page
use crate::sections::QUICK_START_SNIPPET;
use leptos::prelude::*;

#[component]
pub fn GettingStartedPage() -> impl IntoView {
    view! {
        <section class="page-header">
            <div class="container">
                <h1 class="page-title">"Getting Started"</h1>
                <p class="page-description">
                    "Clone the repository and you are ready to build for Web, Desktop, and Embedded."
                </p>
                <pre class="page-code">
                    <code>{QUICK_START_SNIPPET}</code>
                </pre>
            </div>
        </section>
    }
}
