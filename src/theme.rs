//! Ambient light/dark theme, provided via context.
//!
//! The theme signal is owned by [`ThemeProvider`]; sections only read it
//! (the nav's toggle is the one place that writes).

use leptos::prelude::*;

/// Site-wide color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Presentation variant for the quick-start code block. Two fixed
    /// variants, nothing in between.
    pub fn code_block_variant(self) -> &'static str {
        match self {
            Theme::Light => "github-light",
            Theme::Dark => "github-dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Initial theme from the `prefers-color-scheme` media query.
    /// Falls back to dark when the query is unavailable.
    pub fn detect() -> Self {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(query)) = window.match_media("(prefers-color-scheme: light)") {
                if query.matches() {
                    return Theme::Light;
                }
            }
        }
        Theme::Dark
    }
}

/// Owns the theme signal and makes it available to the whole tree.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    provide_context(RwSignal::new(Theme::detect()));
    children()
}

/// Ambient theme signal provided by [`ThemeProvider`]. Falls back to a
/// detached dark-mode signal when rendered outside a provider.
pub fn use_theme() -> RwSignal<Theme> {
    use_context::<RwSignal<Theme>>().unwrap_or_else(|| RwSignal::new(Theme::Dark))
}
