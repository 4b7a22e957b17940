use crate::content::{APPLY_URL, LOGO_URL};
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="site-header-inner">
                <img src=LOGO_URL alt="Free Ventures" width="200" height="56" class="site-header-logo" />
                <a href=APPLY_URL target="_blank" rel="noopener noreferrer" class="btn btn-primary btn-small">
                    "Apply Now"
                </a>
            </div>
        </header>
    }
}
