use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use super::VERSION;
use crate::state::CopyConfirmation;
use crate::theme::use_theme;

/// Quick-start snippet copied verbatim to the clipboard.
pub const QUICK_START_SNIPPET: &str = "git clone https://github.com/NanaBright/ludwig.git\ncd ludwig\npip install -r requirements.txt  # Optional dev dependencies only";

pub const GETTING_STARTED_PATH: &str = "/docs/getting-started";
pub const DOCS_PATH: &str = "/docs";

const DESCRIPTION: &str = "The modern, multi-platform development framework designed to let you \
build applications for Web, Desktop, and Embedded/IoT systems using an elegant, intuitive syntax \
inspired by Python, Laravel, and C#";

/// One entry in the "Why Choose Ludwig?" column. Fixed set, stable order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureDescriptor {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [FeatureDescriptor; 3] = [
    FeatureDescriptor {
        icon: "⚡",
        title: "Lightning Fast",
        description: "Optimized performance with zero-config setup",
    },
    FeatureDescriptor {
        icon: "🛡",
        title: "Secure by Default",
        description: "Built-in security features and best practices",
    },
    FeatureDescriptor {
        icon: "🌐",
        title: "Global Scale",
        description: "Deploy anywhere with edge computing support",
    },
];

/// Where a call to action sends the user. Internal paths go through the
/// client-side router, external URLs through the browser. Fire-and-forget
/// either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Internal(&'static str),
    External(&'static str),
}

fn badge_text(version: &str) -> String {
    format!("{version} - First Official Release")
}

/// `navigator.clipboard` is `undefined` outside secure contexts; calling
/// through it would throw synchronously instead of rejecting the promise.
fn clipboard_available(clipboard: &JsValue) -> bool {
    !clipboard.is_undefined() && !clipboard.is_null()
}

#[component]
pub fn Hero(
    #[prop(default = "Ludwig")] framework_name: &'static str,
    #[prop(default = VERSION)] version: &'static str,
    #[prop(default = "45.2k")] github_stars: &'static str,
    #[prop(default = "2.1M")] downloads: &'static str,
) -> impl IntoView {
    let navigate = use_navigate();
    let go = move |dest: Destination| match dest {
        Destination::Internal(path) => navigate(path, Default::default()),
        Destination::External(url) => {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(url);
            }
        }
    };
    let go_started = go.clone();
    let go_github = go.clone();
    let go_docs = go;

    let badge = badge_text(version);

    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-header">
                    <div class="hero-badge">
                        <span class="hero-badge-star">"★"</span>
                        {badge}
                    </div>
                    <h1 class="hero-title">
                        <span class="hero-title-accent">{framework_name}</span>
                        <br />
                        <span class="hero-subtitle">"Multi-platform Framework"</span>
                    </h1>
                    <p class="hero-description">{DESCRIPTION}</p>
                    <div class="hero-actions">
                        <button
                            class="btn btn-primary"
                            on:click=move |_| go_started(Destination::Internal(GETTING_STARTED_PATH))
                        >
                            "Get Started →"
                        </button>
                        <button
                            class="btn btn-secondary"
                            on:click=move |_| go_github(Destination::External(crate::config::NAV_CONFIG.github_url))
                        >
                            "View on GitHub"
                        </button>
                    </div>
                    <div class="hero-stats">
                        <span class="hero-stat">"★ " {github_stars} " GitHub stars"</span>
                        <span class="hero-stat">"↓ " {downloads} " monthly downloads"</span>
                    </div>
                </div>

                <div class="hero-grid">
                    <QuickStart />
                    <div class="hero-features">
                        <h3 class="hero-features-title">"Why Choose " {framework_name} "?"</h3>
                        {FEATURES
                            .into_iter()
                            .map(|feature| view! { <FeatureCard feature /> })
                            .collect_view()}
                    </div>
                </div>

                <div class="hero-bottom-cta">
                    <p class="hero-bottom-text">"Ready to build something amazing?"</p>
                    <button
                        class="btn btn-secondary"
                        on:click=move |_| go_docs(Destination::Internal(DOCS_PATH))
                    >
                        "Read the Documentation →"
                    </button>
                </div>
            </div>
        </section>
    }
}

/// Copyable quick-start card. Owns the confirmation flag and the pending
/// reset token; the snippet text itself never changes.
#[component]
fn QuickStart() -> impl IntoView {
    let theme = use_theme();
    let state = RwSignal::new(CopyConfirmation::default());

    let copy_snippet = move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let clipboard = window.navigator().clipboard();
        if !clipboard_available(clipboard.as_ref()) {
            web_sys::console::warn_1(&JsValue::from_str("clipboard unavailable"));
            return;
        }
        let promise = clipboard.write_text(QUICK_START_SNIPPET);
        spawn_local(async move {
            if JsFuture::from(promise).await.is_err() {
                // Clipboard denied or unavailable. The button stays
                // usable, the confirmation icon just never shows.
                web_sys::console::warn_1(&JsValue::from_str("clipboard write failed"));
                return;
            }
            let Some(token) = state.try_update(|s| s.confirm()) else {
                return;
            };
            set_timeout(
                move || {
                    let _ = state.try_update(|s| s.expire(token));
                },
                Duration::from_millis(2000),
            );
        });
    };

    // A reset firing after unmount must touch nothing.
    on_cleanup(move || {
        let _ = state.try_update(|s| s.cancel());
    });

    view! {
        <div class="quickstart-card">
            <div class="quickstart-header">
                <span class="quickstart-label">"Quick Start"</span>
                <span class="quickstart-lang">"Shell"</span>
                <button class="quickstart-copy-btn" on:click=copy_snippet>
                    {move || if state.with(|s| s.is_confirmed()) { "copied" } else { "copy" }}
                </button>
            </div>
            <pre class=move || {
                format!("quickstart-code {}", theme.get().code_block_variant())
            }>
                <code>{QUICK_START_SNIPPET}</code>
            </pre>
        </div>
    }
}

#[component]
fn FeatureCard(feature: FeatureDescriptor) -> impl IntoView {
    view! {
        <article class="feature-card">
            <div class="feature-icon">{feature.icon}</div>
            <div>
                <h4 class="feature-title">{feature.title}</h4>
                <p class="feature-description">{feature.description}</p>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn snippet_is_the_exact_clone_and_install_commands() {
        assert_eq!(
            QUICK_START_SNIPPET,
            "git clone https://github.com/NanaBright/ludwig.git\n\
             cd ludwig\n\
             pip install -r requirements.txt  # Optional dev dependencies only"
        );
    }

    #[test]
    fn feature_list_is_fixed_and_ordered() {
        let titles: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(
            titles,
            vec!["Lightning Fast", "Secure by Default", "Global Scale"]
        );
    }

    #[test]
    fn theme_only_selects_a_presentation_variant() {
        use crate::theme::Theme;

        // Switching themes swaps the class on the code block and nothing
        // else; the snippet constant is not theme-dependent.
        assert_ne!(
            Theme::Light.code_block_variant(),
            Theme::Dark.code_block_variant()
        );
        for variant in [Theme::Light, Theme::Dark] {
            assert!(!QUICK_START_SNIPPET.contains(variant.code_block_variant()));
        }
    }

    #[test]
    fn badge_defaults_to_the_crate_version() {
        assert_eq!(badge_text(VERSION), "v0.1.0 - First Official Release");
        assert_eq!(badge_text("v0.2.0"), "v0.2.0 - First Official Release");
    }

    #[test]
    fn missing_clipboard_is_detected_before_any_call() {
        use wasm_bindgen::JsValue;

        // Insecure contexts expose `navigator.clipboard` as undefined.
        assert!(!clipboard_available(&JsValue::UNDEFINED));
        assert!(!clipboard_available(&JsValue::NULL));
        assert!(clipboard_available(&JsValue::TRUE));
    }

    #[test]
    fn cta_destinations_point_at_the_docs() {
        assert_eq!(
            Destination::Internal(GETTING_STARTED_PATH),
            Destination::Internal("/docs/getting-started")
        );
        assert_eq!(Destination::Internal(DOCS_PATH), Destination::Internal("/docs"));
    }
}
