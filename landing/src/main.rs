// Free Ventures High School Entrepreneurship Bootcamp - browser entry point
// Built by trunk with `--no-default-features --features csr` (see index.html)

use bootcamp_landing::styles::PAGE_CSS;
use bootcamp_landing::{LandingPage, PageConfig};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App /> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <style>{PAGE_CSS}</style>
        <LandingPage config=PageConfig::default() />
    }
}
