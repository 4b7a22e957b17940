//! # bootcamp-landing
//!
//! Landing page for the Free Ventures High School Entrepreneurship Bootcamp,
//! written with [Leptos](https://leptos.dev/).
//!
//! The same components are used two ways:
//!
//! - **CSR** (`--features csr`): the `bootcamp-landing` binary mounts
//!   [`LandingPage`] in the browser; trunk builds it from `index.html`.
//! - **SSR** (`--features ssr`, default): [`render_page`] produces a
//!   complete static HTML document, used by the export CLI and the tests.
//!
//! ## Architecture
//!
//! - [`content`] - static records (benefits, mentors, timeline, FAQs, partners)
//! - [`reveal`] - once-only scroll reveal state machine
//! - [`accordion`], [`carousel`] - widget state
//! - [`config`] - [`PageConfig`] switches passed into page assembly
//! - [`components`] - Leptos components over the state models
//! - [`sections`] - page sections
//! - [`styles`] - CSS
//!
//! ## Quick Start
//!
//! ```rust
//! use bootcamp_landing::{PageConfig, render_page};
//!
//! let html = render_page(&PageConfig::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains(r#"id="apply""#));
//! ```

pub mod accordion;
pub mod carousel;
pub mod components;
pub mod config;
pub mod content;
pub mod reveal;
pub mod sections;
pub mod styles;

pub use config::{ConfigError, PageConfig};
pub use content::ContentError;

use leptos::prelude::*;
use sections::*;

/// The whole page. `config` is provided as context to every section.
#[component]
pub fn LandingPage(config: PageConfig) -> impl IntoView {
    let show_mentors = config.show_mentors;
    provide_context(config);

    view! {
        <div class="page">
            <Header />
            <main>
                <Hero />
                <Benefits />
                {show_mentors.then(|| view! { <Mentors /> })}
                <Partners />
                <Timeline />
                <Faq />
                <Apply />
            </main>
            <Footer />
        </div>
    }
}

/// Render the complete page to an HTML document string.
///
/// Leptos does not emit a doctype, so one is prepended. Reveal blocks are
/// rendered at rest; the inline script hides and animates them only when
/// the browser supports intersection observation.
#[cfg(feature = "ssr")]
pub fn render_page(config: &PageConfig) -> String {
    use components::PageDocument;
    use leptos::tachys::view::RenderHtml;

    let owner = Owner::new();
    let html = owner.with(|| {
        let config = config.clone();
        view! { <PageDocument config=config /> }.to_html()
    });
    tracing::debug!(bytes = html.len(), show_mentors = config.show_mentors, "page rendered");

    format!("<!DOCTYPE html>\n{}", html)
}
