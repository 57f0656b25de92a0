// Landing page routes

mod docs;
mod getting_started;
mod home;

pub use docs::DocsPage;
pub use getting_started::GettingStartedPage;
pub use home::HomePage;
