use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::VERSION;
use crate::config::NAV_CONFIG;
use crate::theme::{Theme, use_theme};

/// Page-shell navigation. Renders [`NAV_CONFIG`] as-is; the config never
/// changes after startup, only the theme toggle is interactive.
#[component]
pub fn Nav() -> impl IntoView {
    let theme = use_theme();
    let pathname = use_location().pathname;
    let brand = NAV_CONFIG.brand;

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="/" class="nav-brand">
                    <div class="nav-logo">
                        <img
                            src=move || match theme.get() {
                                Theme::Light => brand.logo_light,
                                Theme::Dark => brand.logo_dark,
                            }
                            alt=brand.title
                        />
                    </div>
                    <span class="nav-title">{brand.title}</span>
                    <span class="nav-version">{VERSION}</span>
                </a>
                <div class="nav-links">
                    {NAV_CONFIG
                        .links
                        .iter()
                        .map(|link| {
                            let link = *link;
                            view! {
                                <a
                                    href=link.href
                                    class=move || {
                                        if link.is_active(&pathname.get()) {
                                            "nav-link active"
                                        } else {
                                            "nav-link"
                                        }
                                    }
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a href=NAV_CONFIG.github_url target="_blank" class="nav-link">
                        "GitHub"
                    </a>
                    <button
                        class="nav-cta"
                        on:click=move |_| theme.update(|t| *t = t.toggled())
                    >
                        {move || match theme.get() {
                            Theme::Light => "Dark",
                            Theme::Dark => "Light",
                        }}
                    </button>
                </div>
            </div>
        </nav>
    }
}
