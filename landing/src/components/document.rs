//! Root document component for the pre-rendered page.
//!
//! The browser build mounts [`LandingPage`] straight into `<body>`; this
//! shell is only used by [`crate::render_page`].

use crate::LandingPage;
use crate::config::PageConfig;
use crate::content::LOGO_URL;
use crate::styles::PAGE_CSS;
use leptos::prelude::*;

pub const PAGE_TITLE: &str = "High School Entrepreneurship Bootcamp | Free Ventures";
pub const PAGE_DESCRIPTION: &str =
    "An 8-week startup bootcamp for high school students, hosted by Free Ventures at UC Berkeley.";

/// The complete HTML document for the static export
#[component]
pub fn PageDocument(config: PageConfig) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=PAGE_DESCRIPTION />
                <title>{PAGE_TITLE}</title>
                <link rel="icon" href=LOGO_URL />
                <style>{PAGE_CSS}</style>
            </head>
            <body>
                <LandingPage config=config />
                <script>{ENHANCE_SCRIPT}</script>
            </body>
        </html>
    }
}

/// Progressive enhancement for the exported file, which ships without the
/// wasm bundle: reveal, accordion and carousel behaviour over the
/// server-rendered markup. Reveal blocks are hidden only after an observer
/// exists, so a browser without IntersectionObserver shows everything.
const ENHANCE_SCRIPT: &str = r#"
(() => {
  // 1. Reveal once on first intersection. Styles, margin and threshold
  // are rendered per block by <Reveal>.
  if ('IntersectionObserver' in window) {
    document.querySelectorAll('[data-reveal="unobserved"]').forEach((el) => {
      const threshold = parseFloat(el.dataset.revealThreshold) || 0;
      const observer = new IntersectionObserver((entries) => {
        for (const entry of entries) {
          if (!entry.isIntersecting || entry.intersectionRatio < threshold) continue;
          el.setAttribute('style', el.dataset.revealShown);
          el.dataset.reveal = 'visible';
          observer.disconnect();
          break;
        }
      }, { rootMargin: el.dataset.revealMargin + 'px', threshold });
      el.setAttribute('style', el.dataset.revealHidden);
      el.dataset.reveal = 'hidden';
      observer.observe(el);
    });
  }

  // 2. Accordion: single open, collapsible, arrow-key focus
  document.querySelectorAll('[data-accordion="single"]').forEach((root) => {
    const items = Array.from(root.querySelectorAll('.accordion-item'));
    const triggers = items.map((item) => item.querySelector('.accordion-trigger'));
    const setOpen = (item, open) => {
      item.classList.toggle('open', open);
      item.querySelector('.accordion-trigger').setAttribute('aria-expanded', String(open));
      item.querySelector('.accordion-panel').setAttribute('aria-hidden', String(!open));
    };
    triggers.forEach((trigger, i) => {
      trigger.addEventListener('click', () => {
        const wasOpen = items[i].classList.contains('open');
        items.forEach((item) => setOpen(item, false));
        if (!wasOpen) setOpen(items[i], true);
      });
      trigger.addEventListener('keydown', (ev) => {
        const n = triggers.length;
        const next = { ArrowDown: (i + 1) % n, ArrowUp: (i + n - 1) % n, Home: 0, End: n - 1 }[ev.key];
        if (next === undefined) return;
        ev.preventDefault();
        triggers[next].focus();
      });
    });
  });

  // 3. Carousel: looping prev/next by reordering slides
  document.querySelectorAll('[data-carousel]').forEach((root) => {
    const slides = Array.from(root.querySelectorAll('.carousel-slide'));
    const n = slides.length;
    if (n === 0) return;
    let index = 0;
    const perView = () => (window.innerWidth >= 1024 ? 3 : window.innerWidth >= 640 ? 2 : 1);
    const render = () => {
      slides.forEach((slide, i) => {
        const slot = (i - index + n) % n;
        slide.style.order = String(slot);
        slide.setAttribute('aria-hidden', String(slot >= perView()));
      });
    };
    root.querySelector('[data-carousel-prev]').addEventListener('click', () => { index = (index + n - 1) % n; render(); });
    root.querySelector('[data-carousel-next]').addEventListener('click', () => { index = (index + 1) % n; render(); });
    window.addEventListener('resize', render);
    render();
  });
})();
"#;
