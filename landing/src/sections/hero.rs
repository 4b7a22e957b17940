use crate::components::{Icon, IconKind};
use crate::content::{APPLY_URL, CAMPUS_PHOTO_URL, LOGO_URL, ORG_URL, STUDENTS_LAUNCHED};
use leptos::prelude::*;

/// Above-the-fold banner. Animates in on mount with CSS keyframes rather
/// than a scroll reveal, since it is always in view.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-backdrop"></div>
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <img src=LOGO_URL alt="Free Ventures" width="200" height="50" class="hero-mobile-logo" />
                        <h1 class="hero-title">
                            "High School"
                            <br />
                            "Entrepreneurship"
                            <br />
                            <span class="hero-title-accent">"Bootcamp"</span>
                        </h1>
                        <p class="hero-description">
                            "Empowering young builders. Hosted by the leading startup accelerator at UC Berkeley, "
                            <a href=ORG_URL target="_blank" rel="noopener noreferrer">"Free Ventures"</a>
                            "."
                        </p>
                        <div class="cta-row">
                            <a href=APPLY_URL target="_blank" rel="noopener noreferrer" class="btn btn-primary">
                                "Apply Now"
                                <Icon kind=IconKind::ArrowRight size="20" />
                            </a>
                        </div>
                    </div>
                    <Photo />
                </div>
            </div>
        </section>
    }
}

#[component]
fn Photo() -> impl IntoView {
    view! {
        <div class="hero-media">
            <div class="hero-photo">
                <img src=CAMPUS_PHOTO_URL alt="UC Berkeley campus" loading="eager" decoding="async" />
                <div class="hero-photo-tint"></div>
            </div>
            <div class="hero-stat">
                <p class="hero-stat-value">{STUDENTS_LAUNCHED}</p>
                <p class="hero-stat-label">"Students Launched"</p>
            </div>
        </div>
    }
}
