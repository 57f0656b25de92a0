// Ludwig Landing Page - Leptos 0.8 Edition

mod config;
mod pages;
mod sections;
mod state;
mod theme;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use pages::{DocsPage, GettingStartedPage, HomePage};
use sections::{Footer, Nav};
use theme::ThemeProvider;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}

#[component]
fn App() -> impl IntoView {
    view! {
        <ThemeProvider>
            <Router>
                <Nav />
                <main>
                    <Routes fallback=HomePage>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/docs") view=DocsPage />
                        <Route path=path!("/docs/getting-started") view=GettingStartedPage />
                    </Routes>
                </main>
                <Footer />
            </Router>
        </ThemeProvider>
    }
}
