use leptos::prelude::*;

use crate::config::NAV_CONFIG;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-brand">
                    <span class="footer-title">{NAV_CONFIG.brand.title}</span>
                </div>
                <div class="footer-links">
                    <a href=NAV_CONFIG.github_url target="_blank" class="footer-link">
                        "GitHub"
                    </a>
                    <a href="/docs" class="footer-link">
                        "Documentation"
                    </a>
                    <a
                        href="https://github.com/ludwig-framework/ludwig/blob/main/LICENSE"
                        target="_blank"
                        class="footer-link"
                    >
                        "MIT License"
                    </a>
                </div>
                <p class="footer-copyright">"Built with Ludwig (c)2026"</p>
            </div>
        </footer>
    }
}
