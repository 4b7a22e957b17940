use super::SectionHeader;
use crate::components::Reveal;
use crate::config::PageConfig;
use crate::content::{TIMELINE, TimelineStep};
use leptos::prelude::*;

#[component]
pub fn Timeline() -> impl IntoView {
    let config = use_context::<PageConfig>().unwrap_or_default();

    view! {
        <section id="timeline" class="section">
            <div class="container narrow">
                <SectionHeader
                    eyebrow="THE JOURNEY"
                    title="8-Week Timeline"
                    description="From first idea to final pitch"
                />
                <div class="timeline">
                    <div class="timeline-line"></div>
                    {TIMELINE.iter().enumerate().map(|(index, step)| {
                        view! {
                            <Reveal delay=config.stagger(index)>
                                <TimelineRow step=*step index=index />
                            </Reveal>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// Even rows sit left of the line on wide screens, odd rows right.
#[component]
fn TimelineRow(step: TimelineStep, index: usize) -> impl IntoView {
    let side = if index % 2 == 0 { "timeline-row left" } else { "timeline-row right" };

    view! {
        <div class=side>
            <div class="timeline-dot"></div>
            <div class="timeline-body">
                <span class="timeline-week">{format!("WEEK {}", step.week)}</span>
                <h3 class="timeline-title">{step.title}</h3>
                <p class="timeline-text">{step.description}</p>
            </div>
            <div class="timeline-spacer"></div>
        </div>
    }
}
