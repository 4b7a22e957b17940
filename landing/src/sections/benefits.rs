use super::SectionHeader;
use crate::components::{Icon, Reveal};
use crate::config::PageConfig;
use crate::content::{BENEFITS, BenefitItem};
use leptos::prelude::*;

#[component]
pub fn Benefits() -> impl IntoView {
    let config = use_context::<PageConfig>().unwrap_or_default();

    view! {
        <section id="benefits" class="section benefits">
            <div class="container">
                <SectionHeader
                    eyebrow="PROGRAM BENEFITS"
                    title="What You'll Gain"
                    description="Everything you need to go from idea to launch in 8 weeks (March - April)"
                />
                <div class="benefits-grid">
                    {BENEFITS.iter().enumerate().map(|(index, benefit)| {
                        view! {
                            <Reveal delay=config.stagger(index)>
                                <BenefitCard benefit=*benefit />
                            </Reveal>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn BenefitCard(benefit: BenefitItem) -> impl IntoView {
    view! {
        <article class="benefit-card">
            <div class="benefit-icon">
                <Icon kind=benefit.icon />
            </div>
            <h3 class="card-title">{benefit.title}</h3>
            <p class="card-text">{benefit.description}</p>
        </article>
    }
}
