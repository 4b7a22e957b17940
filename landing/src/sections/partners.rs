use super::{FOLLOW_DELAY, SectionHeader};
use crate::components::Reveal;
use crate::content::{PARTNER_TICKER_SETS, PARTNERS};
use leptos::prelude::*;

/// Logo ticker. The partner set is repeated so the CSS scroll loops
/// without a visible seam.
#[component]
pub fn Partners() -> impl IntoView {
    view! {
        <section id="partners" class="section partners">
            <div class="container">
                <SectionHeader
                    eyebrow="INDUSTRY LEADERS"
                    title="Mentors From"
                    description="Learn from professionals at the world's most innovative companies"
                />
                <Reveal delay=FOLLOW_DELAY>
                    <div class="ticker">
                        <div class="ticker-fade left"></div>
                        <div class="ticker-fade right"></div>
                        <div class="ticker-track">
                            {(0..PARTNER_TICKER_SETS).map(|set| {
                                // Only the first copy is exposed to assistive tech.
                                let hidden = if set == 0 { "false" } else { "true" };
                                view! {
                                    <div class="ticker-set" aria-hidden=hidden>
                                        {PARTNERS.iter().map(|p| view! {
                                            <div class="ticker-logo">
                                                <img src=p.logo alt=p.name loading="lazy" decoding="async" />
                                            </div>
                                        }).collect::<Vec<_>>()}
                                    </div>
                                }
                            }).collect::<Vec<_>>()}
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
