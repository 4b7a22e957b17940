use super::{FOLLOW_DELAY, SectionHeader};
use crate::accordion::AccordionItem;
use crate::components::{Accordion, Reveal};
use crate::content::FAQS;
use leptos::prelude::*;

#[component]
pub fn Faq() -> impl IntoView {
    let items = FAQS
        .iter()
        .enumerate()
        .map(|(index, faq)| AccordionItem::new(format!("faq-{index}"), faq.question, faq.answer))
        .collect::<Vec<_>>();

    view! {
        <section id="faq" class="section faq">
            <div class="container tight">
                <SectionHeader
                    eyebrow="QUESTIONS"
                    title="Frequently Asked"
                    description="Everything you need to know before applying"
                />
                <Reveal delay=FOLLOW_DELAY>
                    <Accordion items=items />
                </Reveal>
            </div>
        </section>
    }
}
