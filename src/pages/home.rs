// Home page - landing hero
use crate::sections::Hero;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! { <Hero /> }
}
