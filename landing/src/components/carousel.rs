//! Looping multi-item carousel component.

use super::{Icon, IconKind};
use crate::carousel::{Breakpoints, CarouselState};
use leptos::prelude::*;

fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Carousel over pre-rendered `slides`.
///
/// Slide widths come from CSS media queries that mirror `breakpoints`; the
/// breakpoints here only drive navigation and which slides are announced
/// as visible.
#[component]
pub fn Carousel(
    slides: Vec<AnyView>,
    #[prop(optional)] breakpoints: Option<Breakpoints>,
    #[prop(default = true)] looping: bool,
    /// Accessible name for the region
    #[prop(default = "Carousel")]
    label: &'static str,
) -> impl IntoView {
    let breakpoints = breakpoints.unwrap_or_default();
    let len = slides.len();
    let state = RwSignal::new(CarouselState::new(len, breakpoints.per_view(0.0), looping));

    Effect::new(move || {
        let bp = breakpoints.clone();
        let resize = move || {
            if let Some(width) = viewport_width() {
                state.update(|s| s.set_per_view(bp.per_view(width)));
            }
        };
        resize();
        let handle = window_event_listener(leptos::ev::resize, move |_| resize());
        on_cleanup(move || handle.remove());
    });

    view! {
        <div class="carousel" role="region" aria-roledescription="carousel" aria-label=label data-carousel="">
            <div class="carousel-viewport">
                <div class="carousel-track">
                    {slides.into_iter().enumerate().map(|(i, slide)| {
                        let in_view = move || state.with(|s| s.visible().contains(&i));
                        view! {
                            <div
                                class="carousel-slide"
                                role="group"
                                aria-roledescription="slide"
                                aria-label=format!("{} of {}", i + 1, len)
                                aria-hidden=move || if in_view() { "false" } else { "true" }
                                style=move || format!("order:{}", state.with(|s| s.slot_of(i)))
                            >
                                {slide}
                            </div>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
            <button
                type="button"
                class="carousel-button carousel-prev"
                aria-label="Previous slide"
                data-carousel-prev=""
                disabled=move || !state.with(|s| s.can_prev())
                on:click=move |_| state.update(|s| s.prev())
            >
                <Icon kind=IconKind::ChevronLeft size="20" />
            </button>
            <button
                type="button"
                class="carousel-button carousel-next"
                aria-label="Next slide"
                data-carousel-next=""
                disabled=move || !state.with(|s| s.can_next())
                on:click=move |_| state.update(|s| s.next())
            >
                <Icon kind=IconKind::ChevronRight size="20" />
            </button>
        </div>
    }
}
