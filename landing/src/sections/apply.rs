use crate::components::{Icon, IconKind, Reveal};
use crate::content::{APPLY_URL, CONTACT_EMAIL};
use leptos::prelude::*;

/// Closing call to action. `#apply` is the in-page anchor target.
#[component]
pub fn Apply() -> impl IntoView {
    let mailto = format!("mailto:{CONTACT_EMAIL}");

    view! {
        <section id="apply" class="section apply">
            <div class="container narrow">
                <Reveal>
                    <h2 class="apply-title">
                        "Join the next generation"
                        <br />
                        "of entrepreneurs"
                    </h2>
                    <p class="apply-text">
                        "Applications are reviewed on a rolling basis. The sooner you apply, the sooner you can start building."
                    </p>
                    <div class="cta-row">
                        <a href=APPLY_URL target="_blank" rel="noopener noreferrer" class="btn btn-light">
                            "Apply Now"
                            <Icon kind=IconKind::ArrowRight size="20" />
                        </a>
                        <a href=mailto class="btn btn-ghost">
                            "Questions? Contact Us"
                        </a>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
