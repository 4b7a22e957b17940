//! `<Reveal>`: fades and slides its children in the first time they
//! scroll into view.

use crate::config::PageConfig;
use crate::reveal::{
    IntersectionSample, RevealController, RevealOptions, RevealState, Transition,
};
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Live observer plus the callback it points at. Dropping the closure
/// while the observer is connected would leave a dangling callback, so
/// both are released together.
struct Observation {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Observation {
    fn release(self) {
        self.observer.disconnect();
    }
}

fn state_label(state: RevealState) -> &'static str {
    match state {
        RevealState::Unobserved => "unobserved",
        RevealState::Hidden => "hidden",
        RevealState::Visible => "visible",
    }
}

/// Wraps `children` in a block that stays at rest until an observer is
/// attached, then hides and reveals once on first intersection.
///
/// The root margin comes from the [`PageConfig`] in context.
#[component]
pub fn Reveal(
    /// Stagger delay in seconds
    #[prop(optional)]
    delay: f64,
    /// Extra CSS classes for the wrapper
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let margin_px = use_context::<PageConfig>()
        .unwrap_or_default()
        .reveal_margin_px;
    let options = RevealOptions::default()
        .with_delay(delay)
        .with_margin(margin_px);

    let controller = RwSignal::new(RevealController::new(options));
    let node_ref = NodeRef::<html::Div>::new();
    let observation = StoredValue::new_local(None::<Observation>);

    Effect::new(move || {
        let Some(el) = node_ref.get() else {
            return;
        };
        let attached = observation.with_value(|o| o.is_some());
        if attached || controller.with_untracked(|c| c.is_visible()) {
            return;
        }

        match attach(&el, options, controller) {
            Ok(obs) => {
                controller.update(|c| c.observe());
                observation.set_value(Some(obs));
            }
            Err(_) => controller.update(|c| c.observation_unavailable()),
        }
    });

    on_cleanup(move || {
        observation.update_value(|o| {
            if let Some(obs) = o.take() {
                obs.release();
            }
        });
    });

    let class = if class.is_empty() {
        "reveal".to_string()
    } else {
        format!("reveal {class}")
    };

    view! {
        <div
            node_ref=node_ref
            class=class
            style=move || controller.with(|c| c.style())
            data-reveal=move || state_label(controller.with(|c| c.state()))
            data-reveal-delay=options.delay.to_string()
            data-reveal-margin=margin_px.to_string()
            data-reveal-threshold=options.threshold.to_string()
            data-reveal-hidden=options.hidden_style()
            data-reveal-shown=options.revealed_style()
        >
            {children()}
        </div>
    }
}

/// Start observing `el`. Fails when the browser has no
/// `IntersectionObserver`.
fn attach(
    el: &web_sys::HtmlDivElement,
    options: RevealOptions,
    controller: RwSignal<RevealController>,
) -> Result<Observation, JsValue> {
    let callback: ObserverCallback = Closure::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let sample = IntersectionSample {
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                };
                let mut transition = Transition::Ignored;
                controller.update(|c| transition = c.on_intersection(sample));
                if transition == Transition::Revealed {
                    observer.disconnect();
                    break;
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_root_margin(&options.root_margin());
    init.set_threshold(&JsValue::from_f64(options.threshold));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(el);

    Ok(Observation {
        observer,
        _callback: callback,
    })
}
