use crate::content::{COPYRIGHT, LOGO_URL};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer-inner">
                <img src=LOGO_URL alt="Free Ventures" width="200" height="56" class="site-footer-logo" />
                <p class="site-footer-copyright">{COPYRIGHT}</p>
            </div>
        </footer>
    }
}
