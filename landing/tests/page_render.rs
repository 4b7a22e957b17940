//! Server-side render tests for the full landing page.
//!
//! Renders the page to a string and checks the markup the browser receives.

use bootcamp_landing::content::{APPLY_URL, BENEFITS, FAQS, MENTORS, PARTNERS, TIMELINE};
use bootcamp_landing::reveal::RevealOptions;
use bootcamp_landing::{PageConfig, render_page};

fn default_page() -> String {
    render_page(&PageConfig::default())
}

fn page_with_mentors() -> String {
    render_page(&PageConfig {
        show_mentors: true,
        ..Default::default()
    })
}

fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("missing {needle:?} in rendered page"))
}

mod layout {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sections_render_in_page_order() {
        let html = default_page();
        let order: Vec<usize> = [
            r#"class="site-header""#,
            r#"class="hero""#,
            r#"id="benefits""#,
            r#"id="partners""#,
            r#"id="timeline""#,
            r#"id="faq""#,
            r#"id="apply""#,
            r#"class="site-footer""#,
        ]
        .iter()
        .map(|needle| position(&html, needle))
        .collect();

        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(order, sorted);
    }

    #[test]
    fn apply_anchor_present_once() {
        let html = default_page();
        assert_eq!(html.matches(r#"id="apply""#).count(), 1);
    }

    #[test]
    fn outbound_links_open_in_new_context() {
        let html = default_page();
        // Header, hero and closing call to action.
        assert_eq!(html.matches(APPLY_URL).count(), 3);
        assert_eq!(
            html.matches(r#"target="_blank" rel="noopener noreferrer""#).count(),
            4
        );
        assert!(html.contains(r#"href="mailto:aryan@freeventures.org""#));
    }

    #[test]
    fn stylesheet_is_inlined() {
        let html = default_page();
        assert!(html.contains(".accordion-panel"));
        assert!(html.contains("@keyframes ticker-scroll"));
    }
}

mod content {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn benefits_render_in_order_with_icons() {
        let page = default_page();
        let html = &page[position(&page, r#"id="benefits""#)..];
        let positions: Vec<usize> = BENEFITS.iter().map(|b| position(html, b.title)).collect();
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
        assert_eq!(html.matches(r#"class="benefit-card""#).count(), BENEFITS.len());
        assert!(html.contains(r#"data-icon="rocket""#));
        assert!(html.contains(r#"data-icon="trophy""#));
    }

    #[test]
    fn timeline_weeks_render_in_sequence() {
        let html = default_page();
        let weeks: Vec<usize> = (1..=TIMELINE.len())
            .map(|w| position(&html, &format!("WEEK {w}")))
            .collect();
        let mut sorted = weeks.clone();
        sorted.sort();
        assert_eq!(weeks, sorted);
        assert!(!html.contains(&format!("WEEK {}", TIMELINE.len() + 1)));
    }

    #[test]
    fn timeline_rows_alternate_sides() {
        let html = default_page();
        assert_eq!(html.matches(r#"class="timeline-row left""#).count(), 4);
        assert_eq!(html.matches(r#"class="timeline-row right""#).count(), 4);
    }

    #[test]
    fn partner_ticker_repeats_logo_set() {
        let html = default_page();
        assert_eq!(html.matches(r#"class="ticker-set""#).count(), 4);
        assert_eq!(html.matches(r#"class="ticker-logo""#).count(), 4 * PARTNERS.len());
    }
}

mod faq {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_question_gets_a_trigger() {
        let html = default_page();
        assert_eq!(html.matches(r#"class="accordion-trigger""#).count(), FAQS.len());
        for i in 0..FAQS.len() {
            assert!(html.contains(&format!(r#"id="faq-{i}-trigger""#)));
            assert!(html.contains(&format!(r#"aria-controls="faq-{i}-panel""#)));
        }
    }

    #[test]
    fn accordion_starts_fully_collapsed() {
        let html = default_page();
        assert_eq!(html.matches(r#"aria-expanded="false""#).count(), FAQS.len());
        assert_eq!(html.matches(r#"aria-expanded="true""#).count(), 0);
        assert_eq!(html.matches(r#"class="accordion-item open""#).count(), 0);
    }
}

mod mentors_flag {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn disabled_flag_renders_no_mentor_content() {
        let html = default_page();
        for mentor in MENTORS {
            assert!(!html.contains(mentor.name), "{} leaked", mentor.name);
        }
        assert_eq!(html.matches(r#"class="carousel-slide""#).count(), 0);
        assert!(!html.contains(r#"id="mentors""#));
    }

    #[test]
    fn enabled_flag_renders_one_slide_per_mentor() {
        let html = page_with_mentors();
        assert_eq!(html.matches(r#"class="carousel-slide""#).count(), MENTORS.len());
        assert_eq!(html.matches(r#"class="mentor-card""#).count(), MENTORS.len());
        for mentor in MENTORS {
            assert!(html.contains(mentor.name));
        }
    }

    #[test]
    fn mentors_sit_between_benefits_and_partners() {
        let html = page_with_mentors();
        let benefits = position(&html, r#"id="benefits""#);
        let mentors = position(&html, r#"id="mentors""#);
        let partners = position(&html, r#"id="partners""#);
        assert!(benefits < mentors && mentors < partners);
    }

    #[test]
    fn carousel_has_navigation() {
        let html = page_with_mentors();
        assert!(html.contains(r#"aria-label="Previous slide""#));
        assert!(html.contains(r#"aria-label="Next slide""#));
        assert!(html.contains(r#"aria-label="1 of 5""#));
    }
}

mod reveal {
    use super::*;
    use pretty_assertions::assert_eq;

    // Section headers: benefits, partners, timeline, faq. Items: 6 benefits,
    // 8 weeks. Follow blocks: ticker, accordion. Plus the apply block.
    const REVEALS_WITHOUT_MENTORS: usize = 4 + 6 + 8 + 2 + 1;

    #[test]
    fn every_block_is_wrapped() {
        let html = default_page();
        assert_eq!(
            html.matches("data-reveal-delay=").count(),
            REVEALS_WITHOUT_MENTORS
        );
        assert_eq!(
            page_with_mentors().matches("data-reveal-delay=").count(),
            REVEALS_WITHOUT_MENTORS + 2
        );
    }

    #[test]
    fn server_render_fails_open() {
        let html = default_page();
        assert!(!html.contains(r#"data-reveal="hidden""#));
        assert!(!html.contains(r#"style="opacity:0"#));
        assert!(html.contains(r#"data-reveal="unobserved""#));
    }

    #[test]
    fn grid_items_are_staggered() {
        let html = default_page();
        for delay in ["0", "0.1", "0.2", "0.3", "0.4", "0.5", "0.6", "0.7"] {
            assert!(
                html.contains(&format!(r#"data-reveal-delay="{delay}""#)),
                "no block with delay {delay}"
            );
        }
    }

    #[test]
    fn custom_stagger_step_is_applied() {
        let html = render_page(&PageConfig {
            stagger_step: 0.25,
            ..Default::default()
        });
        assert!(html.contains(r#"data-reveal-delay="1.25""#));
    }

    #[test]
    fn margin_comes_from_config() {
        let html = render_page(&PageConfig {
            reveal_margin_px: -80,
            ..Default::default()
        });
        assert!(html.contains(r#"data-reveal-margin="-80""#));
        assert!(!html.contains(r#"data-reveal-margin="-50""#));
    }

    #[test]
    fn export_script_styles_come_from_reveal_options() {
        let html = default_page();
        let hidden = format!(
            r#"data-reveal-hidden="{}""#,
            RevealOptions::default().hidden_style()
        );
        assert_eq!(hidden, r#"data-reveal-hidden="opacity:0;transform:translateY(40px)""#);
        assert_eq!(html.matches(&hidden).count(), REVEALS_WITHOUT_MENTORS);

        let shown = format!(
            r#"data-reveal-shown="{}""#,
            RevealOptions::default().with_delay(0.3).revealed_style()
        );
        assert!(shown.contains("0.6s cubic-bezier(0.25, 0.1, 0.25, 1) 0.3s"));
        assert!(html.contains(&shown));
        assert_eq!(
            html.matches(r#"data-reveal-threshold="0""#).count(),
            REVEALS_WITHOUT_MENTORS
        );
    }

    #[test]
    fn export_script_has_no_reveal_constants() {
        let html = default_page();
        let script_start = position(&html, "<script>");
        let script = &html[script_start..];
        assert!(script.contains("'IntersectionObserver' in window"));
        assert!(script.contains("observer.disconnect()"));
        assert!(!script.contains("translateY("));
        assert!(!script.contains("cubic-bezier"));
        assert!(!script.contains("0.6s"));
    }
}
