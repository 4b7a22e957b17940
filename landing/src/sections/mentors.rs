use super::{FOLLOW_DELAY, SectionHeader};
use crate::components::{Carousel, Reveal};
use crate::content::{MENTORS, MentorProfile};
use leptos::prelude::*;

/// "Meet Your Mentors" carousel. Only mounted when
/// [`crate::PageConfig::show_mentors`] is set.
#[component]
pub fn Mentors() -> impl IntoView {
    let slides = MENTORS
        .iter()
        .map(|mentor| view! { <MentorCard mentor=*mentor /> }.into_any())
        .collect::<Vec<_>>();

    view! {
        <section id="mentors" class="section mentors">
            <div class="container">
                <SectionHeader
                    eyebrow="YOUR GUIDES"
                    title="Meet Your Mentors"
                    description="Learn from founders and students who've walked the path"
                />
                <Reveal delay=FOLLOW_DELAY>
                    <Carousel slides=slides label="Mentors" />
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn MentorCard(mentor: MentorProfile) -> impl IntoView {
    view! {
        <article class="mentor-card">
            <div class="mentor-photo">
                <img src=mentor.image alt=mentor.name loading="lazy" decoding="async" />
            </div>
            <h3 class="mentor-name">{mentor.name}</h3>
            <p class="mentor-role">{mentor.role}</p>
            <p class="mentor-bio">{mentor.bio}</p>
        </article>
    }
}
