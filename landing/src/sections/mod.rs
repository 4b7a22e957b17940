// Landing page sections
// Each list item is wrapped in its own <Reveal> with an index-proportional delay.

mod apply;
mod benefits;
mod faq;
mod footer;
mod header;
mod hero;
mod mentors;
mod partners;
mod timeline;

pub use apply::Apply;
pub use benefits::Benefits;
pub use faq::Faq;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use mentors::Mentors;
pub use partners::Partners;
pub use timeline::Timeline;

use crate::components::Reveal;
use leptos::prelude::*;

/// Delay for blocks that follow a section header (carousel, accordion, ticker).
pub(crate) const FOLLOW_DELAY: f64 = 0.2;

/// Eyebrow, title and description shared by every content section.
#[component]
pub(crate) fn SectionHeader(
    eyebrow: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <Reveal>
            <p class="section-eyebrow">{eyebrow}</p>
            <h2 class="section-title">{title}</h2>
            <p class="section-description">{description}</p>
        </Reveal>
    }
}
