//! Shared navigation configuration consumed by the page shell.
//!
//! Pure data: built once at startup, read by `Nav` on every render,
//! never mutated.

use std::sync::LazyLock;

/// How a nav link decides it is active for the current location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkMatch {
    /// Active only on the exact path.
    Exact,
    /// Active on the path itself and everything nested under it.
    NestedUrl,
}

/// Branding shown in the nav. The logo pair switches with the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brand {
    pub title: &'static str,
    pub logo_light: &'static str,
    pub logo_dark: &'static str,
}

/// One top-level navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub match_rule: LinkMatch,
}

impl NavLink {
    /// Whether this link renders as active for the given pathname.
    pub fn is_active(&self, pathname: &str) -> bool {
        match self.match_rule {
            LinkMatch::Exact => pathname == self.href,
            LinkMatch::NestedUrl => {
                pathname == self.href
                    || pathname
                        .strip_prefix(self.href)
                        .is_some_and(|rest| self.href == "/" || rest.starts_with('/'))
            }
        }
    }
}

/// Navigation metadata for the page shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationConfig {
    pub brand: Brand,
    pub links: Vec<NavLink>,
    pub github_url: &'static str,
}

/// The one navigation config for the whole site.
pub static NAV_CONFIG: LazyLock<NavigationConfig> = LazyLock::new(|| NavigationConfig {
    brand: Brand {
        title: "Ludwig",
        logo_light: "assets/logo-light.png",
        logo_dark: "assets/logo-dark.png",
    },
    links: vec![
        NavLink {
            label: "Home",
            href: "/",
            match_rule: LinkMatch::Exact,
        },
        NavLink {
            label: "Docs",
            href: "/docs",
            match_rule: LinkMatch::NestedUrl,
        },
    ],
    github_url: "https://github.com/ludwig-framework/ludwig",
});

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn links_keep_stable_order() {
        let labels: Vec<_> = NAV_CONFIG.links.iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["Home", "Docs"]);
    }

    #[test]
    fn github_url_points_at_the_framework_repo() {
        assert_eq!(
            NAV_CONFIG.github_url,
            "https://github.com/ludwig-framework/ludwig"
        );
    }

    #[test]
    fn brand_carries_a_logo_per_theme() {
        assert_ne!(NAV_CONFIG.brand.logo_light, NAV_CONFIG.brand.logo_dark);
    }

    #[test]
    fn exact_match_only_hits_its_own_path() {
        let home = NavLink {
            label: "Home",
            href: "/",
            match_rule: LinkMatch::Exact,
        };
        assert!(home.is_active("/"));
        assert!(!home.is_active("/docs"));
    }

    #[test]
    fn nested_match_covers_subpaths_but_not_prefixes() {
        let docs = NavLink {
            label: "Docs",
            href: "/docs",
            match_rule: LinkMatch::NestedUrl,
        };
        assert!(docs.is_active("/docs"));
        assert!(docs.is_active("/docs/getting-started"));
        assert!(!docs.is_active("/docsearch"));
        assert!(!docs.is_active("/"));
    }
}
