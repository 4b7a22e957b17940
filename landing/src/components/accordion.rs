//! Accordion component

use super::{Icon, IconKind};
use crate::accordion::{AccordionItem, AccordionState, focus_target};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn focus_trigger(id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(el) = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    {
        let _ = el.focus();
    }
}

/// Single-open, collapsible accordion over `items`.
#[component]
pub fn Accordion(
    items: Vec<AccordionItem>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let len = items.len();
    let state = RwSignal::new(AccordionState::new(len));
    let trigger_ids: Vec<String> = items.iter().map(|i| format!("{}-trigger", i.id)).collect();

    let class = if class.is_empty() {
        "accordion".to_string()
    } else {
        format!("accordion {class}")
    };

    view! {
        <div class=class data-accordion="single">
            {items.into_iter().enumerate().map(|(index, item)| {
                let trigger_id = trigger_ids[index].clone();
                let panel_id = format!("{}-panel", item.id);
                let ids = trigger_ids.clone();
                let is_open = move || state.with(|s| s.is_open(index));

                let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
                    if let Some(target) = focus_target(&ev.key(), index, len) {
                        ev.prevent_default();
                        focus_trigger(&ids[target]);
                    }
                };

                view! {
                    <div
                        class=move || if is_open() { "accordion-item open" } else { "accordion-item" }
                        data-value=item.id.clone()
                    >
                        <h3 class="accordion-heading">
                            <button
                                type="button"
                                id=trigger_id.clone()
                                class="accordion-trigger"
                                aria-expanded=move || if is_open() { "true" } else { "false" }
                                aria-controls=panel_id.clone()
                                on:click=move |_| state.update(|s| s.toggle(index))
                                on:keydown=on_keydown
                            >
                                <span>{item.trigger}</span>
                                <Icon kind=IconKind::ChevronDown size="20" class="accordion-chevron" />
                            </button>
                        </h3>
                        <div
                            id=panel_id
                            role="region"
                            class="accordion-panel"
                            aria-labelledby=trigger_id
                            aria-hidden=move || if is_open() { "false" } else { "true" }
                        >
                            <div class="accordion-body">{item.body}</div>
                        </div>
                    </div>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
