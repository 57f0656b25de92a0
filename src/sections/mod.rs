// Landing page sections

/// Version string used across the landing page (single source of truth)
pub const VERSION: &str = "v0.1.0";

mod footer;
mod hero;
mod nav;

pub use footer::Footer;
pub use hero::{Hero, QUICK_START_SNIPPET};
pub use nav::Nav;
