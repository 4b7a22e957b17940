//! CSS for the landing page.
//!
//! One stylesheet shared by the browser build and the exported static
//! document. Breakpoints match [`crate::carousel::Breakpoints::default`]:
//! 640px and 1024px.

/// Complete stylesheet: purple-on-white theme, section layout, widgets,
/// and the hero entrance and partner ticker keyframes.
pub const PAGE_CSS: &str = r#"
:root {
    --purple-50: #faf5ff;
    --purple-100: #f3e8ff;
    --purple-200: #e9d5ff;
    --purple-300: #d8b4fe;
    --purple-400: #c084fc;
    --purple-500: #a855f7;
    --purple-600: #9333ea;
    --purple-700: #7e22ce;
    --purple-800: #6b21a8;
    --purple-900: #581c87;
    --purple-950: #3b0764;
    --violet-50: #f5f3ff;
    --violet-900: #4c1d95;
    --gray-500: #6b7280;
    --gray-600: #4b5563;
    --gray-900: #111827;
    --blue-600: #2563eb;
    --blue-700: #1d4ed8;
    --font-sans: 'Inter', ui-sans-serif, system-ui, -apple-system, 'Segoe UI', sans-serif;
    --container-max: 72rem;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: var(--font-sans);
    color: var(--gray-900);
    background: #fff;
    line-height: 1.5;
    -webkit-font-smoothing: antialiased;
}

img {
    display: block;
    max-width: 100%;
}

a {
    color: inherit;
    text-decoration: none;
}

h1, h2, h3, p {
    margin: 0;
}

.page {
    min-height: 100vh;
    overflow-x: hidden;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    width: 100%;
}

.container.narrow { max-width: 56rem; }
.container.tight { max-width: 48rem; }

.section {
    padding: 6rem 1.5rem;
    background: #fff;
}

@media (min-width: 768px) {
    .section { padding-left: 3rem; padding-right: 3rem; }
}

@media (min-width: 1024px) {
    .section { padding-left: 6rem; padding-right: 6rem; }
}

/* Reveal */
.reveal {
    will-change: opacity, transform;
}

/* Buttons */
.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    border-radius: 9999px;
    font-weight: 500;
    transition: all 150ms ease;
}

.btn:hover { transform: scale(1.02); }
.btn:active { transform: scale(0.98); }

.btn-primary {
    background: var(--purple-600);
    color: #fff;
    padding: 1rem 2rem;
    font-size: 1.125rem;
}

.btn-primary:hover { background: var(--purple-700); }

.btn-small {
    padding: 0.625rem 1.5rem;
    font-size: 0.875rem;
}

.btn-light {
    background: #fff;
    color: var(--purple-900);
    padding: 1rem 2rem;
    font-size: 1.125rem;
    font-weight: 600;
}

.btn-light:hover { background: var(--purple-50); }

.btn-ghost {
    background: transparent;
    color: #fff;
    padding: 1rem 2rem;
    font-size: 1.125rem;
    border: 1px solid rgba(192, 132, 252, 0.5);
}

.btn-ghost:hover {
    border-color: var(--purple-300);
    background: rgba(255, 255, 255, 0.05);
}

/* Header */
.site-header {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    background: rgba(255, 255, 255, 0.8);
    backdrop-filter: blur(12px);
    border-bottom: 1px solid var(--purple-100);
}

.site-header-inner {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 1rem 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.site-header-logo { height: 3.5rem; width: auto; }
.site-header .btn { display: none; }

@media (min-width: 640px) {
    .site-header .btn { display: inline-flex; }
}

/* Hero */
.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    justify-content: center;
    padding: 7rem 1.5rem 4rem;
}

.hero-backdrop {
    position: absolute;
    inset: 0;
    background: linear-gradient(to bottom right, rgba(250, 245, 255, 0.8), #fff, rgba(245, 243, 255, 0.5));
}

.hero-grid {
    position: relative;
    z-index: 10;
    display: flex;
    flex-direction: column;
    animation: hero-enter 0.8s cubic-bezier(0.25, 0.1, 0.25, 1) both;
}

@media (min-width: 1024px) {
    .hero { padding-left: 6rem; padding-right: 6rem; }
    .hero-grid { flex-direction: row; align-items: center; gap: 4rem; }
}

.hero-content { flex: 1; margin-bottom: 3rem; }

@media (min-width: 1024px) {
    .hero-content { margin-bottom: 0; }
}

.hero-mobile-logo {
    height: 2.5rem;
    width: auto;
    margin-bottom: 1.5rem;
    animation: fade-in 0.6s ease 0.2s both;
}

@media (min-width: 1024px) {
    .hero-mobile-logo { display: none; }
}

.hero-title {
    font-size: 2.25rem;
    font-weight: 700;
    line-height: 1.1;
    letter-spacing: -0.025em;
    margin-bottom: 1.5rem;
}

@media (min-width: 768px) { .hero-title { font-size: 3rem; } }
@media (min-width: 1024px) { .hero-title { font-size: 3.75rem; } }

.hero-title-accent { color: var(--purple-600); }

.hero-description {
    font-size: 1.25rem;
    font-weight: 300;
    color: var(--gray-600);
    margin-bottom: 2.5rem;
    max-width: 32rem;
}

.hero-description a { color: var(--blue-600); }
.hero-description a:hover { color: var(--blue-700); }

.hero-media {
    flex: 1;
    position: relative;
    animation: hero-media-enter 0.8s ease 0.3s both;
}

.hero-photo {
    position: relative;
    aspect-ratio: 4 / 3;
    border-radius: 1.5rem;
    overflow: hidden;
    box-shadow: 0 25px 50px -12px rgba(88, 28, 135, 0.1);
}

.hero-photo img {
    width: 100%;
    height: 100%;
    object-fit: cover;
}

.hero-photo-tint {
    position: absolute;
    inset: 0;
    background: linear-gradient(to top, rgba(88, 28, 135, 0.2), transparent);
}

.hero-stat {
    display: none;
    position: absolute;
    bottom: -1.5rem;
    left: -1.5rem;
    background: #fff;
    border-radius: 1rem;
    padding: 1rem;
    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
}

@media (min-width: 768px) { .hero-stat { display: block; } }

.hero-stat-value { font-size: 1.875rem; font-weight: 700; color: var(--purple-600); }
.hero-stat-label { font-size: 0.875rem; color: var(--gray-500); }

@keyframes hero-enter {
    from { opacity: 0; transform: translateY(30px); }
    to { opacity: 1; transform: none; }
}

@keyframes hero-media-enter {
    from { opacity: 0; transform: scale(0.95); }
    to { opacity: 1; transform: none; }
}

@keyframes fade-in {
    from { opacity: 0; }
    to { opacity: 1; }
}

/* Section headers */
.section-eyebrow {
    color: var(--purple-600);
    font-weight: 500;
    letter-spacing: 0.025em;
    font-size: 0.875rem;
    margin-bottom: 0.75rem;
    text-align: center;
}

.section-title {
    font-size: 1.875rem;
    font-weight: 700;
    text-align: center;
    margin-bottom: 1rem;
}

@media (min-width: 768px) { .section-title { font-size: 2.25rem; } }
@media (min-width: 1024px) { .section-title { font-size: 3rem; } }

.section-description {
    color: var(--gray-500);
    text-align: center;
    max-width: 42rem;
    margin: 0 auto 4rem;
    font-size: 1.125rem;
}

/* Benefits */
.benefits-grid {
    display: grid;
    gap: 1.5rem;
}

@media (min-width: 768px) { .benefits-grid { grid-template-columns: repeat(2, 1fr); } }
@media (min-width: 1024px) { .benefits-grid { grid-template-columns: repeat(3, 1fr); } }

.benefit-card {
    height: 100%;
    padding: 2rem;
    border-radius: 1.5rem;
    background: rgba(250, 245, 255, 0.5);
    border: 1px solid var(--purple-100);
    transition: all 300ms ease;
}

.benefit-card:hover {
    background: rgba(243, 232, 255, 0.5);
    border-color: var(--purple-200);
}

.benefit-icon {
    width: 3rem;
    height: 3rem;
    border-radius: 1rem;
    background: var(--purple-100);
    color: var(--purple-600);
    display: flex;
    align-items: center;
    justify-content: center;
    margin-bottom: 1rem;
    transition: background 150ms ease;
}

.benefit-card:hover .benefit-icon { background: var(--purple-200); }

.card-title { font-size: 1.25rem; font-weight: 600; margin-bottom: 0.75rem; }
.card-text { color: var(--gray-600); line-height: 1.625; }

/* Mentors */
.mentors { background: linear-gradient(to bottom, rgba(250, 245, 255, 0.5), #fff); }

.mentor-card {
    height: 100%;
    background: #fff;
    border-radius: 1.5rem;
    padding: 1.5rem;
    border: 1px solid var(--purple-100);
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.mentor-photo {
    aspect-ratio: 1;
    border-radius: 1rem;
    overflow: hidden;
    margin-bottom: 1.5rem;
}

.mentor-photo img { width: 100%; height: 100%; object-fit: cover; }
.mentor-name { font-size: 1.25rem; font-weight: 600; margin-bottom: 0.25rem; }
.mentor-role { color: var(--purple-600); font-weight: 500; font-size: 0.875rem; margin-bottom: 0.75rem; }
.mentor-bio { color: var(--gray-600); font-size: 0.875rem; line-height: 1.625; }

/* Carousel */
.carousel {
    position: relative;
    padding: 0 1rem;
}

@media (min-width: 768px) { .carousel { padding: 0 4rem; } }

.carousel-viewport { overflow: hidden; }

.carousel-track {
    display: flex;
    margin-left: -1rem;
}

.carousel-slide {
    flex: 0 0 100%;
    min-width: 0;
    padding-left: 1rem;
}

@media (min-width: 640px) { .carousel-slide { flex-basis: 50%; } }
@media (min-width: 1024px) { .carousel-slide { flex-basis: 33.3333%; } }

.carousel-button {
    position: absolute;
    top: 50%;
    transform: translateY(-50%);
    width: 2rem;
    height: 2rem;
    border-radius: 9999px;
    background: #fff;
    border: 1px solid var(--purple-200);
    color: var(--gray-900);
    display: inline-flex;
    align-items: center;
    justify-content: center;
    cursor: pointer;
}

.carousel-button:hover { background: var(--purple-50); }
.carousel-button:disabled { opacity: 0.5; cursor: default; }
.carousel-prev { left: -0.5rem; }
.carousel-next { right: -0.5rem; }

@media (min-width: 768px) {
    .carousel-prev { left: -3rem; }
    .carousel-next { right: -3rem; }
}

/* Partner ticker */
.partners { overflow: hidden; }

.ticker { position: relative; }

.ticker-fade {
    position: absolute;
    top: 0;
    bottom: 0;
    width: 6rem;
    z-index: 10;
}

.ticker-fade.left { left: 0; background: linear-gradient(to right, #fff, transparent); }
.ticker-fade.right { right: 0; background: linear-gradient(to left, #fff, transparent); }

.ticker-track {
    display: flex;
    width: max-content;
    animation: ticker-scroll 30s linear infinite;
}

.ticker-set {
    display: flex;
    flex-shrink: 0;
    align-items: center;
    gap: 4rem;
    padding: 0 2rem;
}

.ticker-logo {
    display: flex;
    align-items: center;
    justify-content: center;
    height: 3rem;
    flex-shrink: 0;
}

.ticker-logo img { height: 2.5rem; width: auto; object-fit: contain; }

@keyframes ticker-scroll {
    from { transform: translateX(0); }
    to { transform: translateX(-50%); }
}

@media (prefers-reduced-motion: reduce) {
    .ticker-track, .hero-grid, .hero-media, .hero-mobile-logo { animation: none; }
}

/* Timeline */
.timeline { position: relative; }

.timeline-line {
    position: absolute;
    left: 1rem;
    top: 0;
    bottom: 0;
    width: 1px;
    background: linear-gradient(to bottom, var(--purple-200), var(--purple-400), var(--purple-600));
}

.timeline-row {
    position: relative;
    display: flex;
    align-items: flex-start;
    gap: 1.5rem;
    margin-bottom: 3rem;
}

.timeline .reveal:last-child .timeline-row { margin-bottom: 0; }

.timeline-dot {
    position: absolute;
    left: 1rem;
    width: 0.75rem;
    height: 0.75rem;
    margin-left: -0.375rem;
    transform: translateY(0.5rem);
    background: var(--purple-500);
    border-radius: 9999px;
    box-shadow: 0 0 0 4px var(--purple-100);
}

.timeline-body { flex: 1; padding-left: 3rem; }
.timeline-spacer { display: none; flex: 1; }

.timeline-week {
    display: inline-block;
    color: var(--purple-600);
    font-weight: 700;
    font-size: 0.875rem;
    margin-bottom: 0.5rem;
}

.timeline-title { font-size: 1.25rem; font-weight: 600; margin-bottom: 0.5rem; }
.timeline-text { color: var(--gray-600); }

@media (min-width: 768px) {
    .timeline-line, .timeline-dot { left: 50%; }
    .timeline-row { gap: 0; }
    .timeline-row.right { flex-direction: row-reverse; }
    .timeline-spacer { display: block; }
    .timeline-row.left .timeline-body { padding-left: 0; padding-right: 4rem; text-align: right; }
    .timeline-row.right .timeline-body { padding-left: 4rem; }
}

/* FAQ */
.faq { background: rgba(250, 245, 255, 0.5); }
.faq .section-description { margin-bottom: 3rem; }

.accordion { display: flex; flex-direction: column; gap: 1rem; }

.accordion-item {
    background: #fff;
    border-radius: 1rem;
    padding: 0 1.5rem;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.accordion-heading { font-size: inherit; font-weight: inherit; }

.accordion-trigger {
    width: 100%;
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
    padding: 1.25rem 0;
    background: none;
    border: 0;
    font: inherit;
    font-size: 1.125rem;
    font-weight: 500;
    color: var(--gray-900);
    text-align: left;
    cursor: pointer;
}

.accordion-trigger:focus-visible {
    outline: 2px solid var(--purple-400);
    outline-offset: 2px;
    border-radius: 0.5rem;
}

.accordion-chevron {
    flex-shrink: 0;
    color: var(--gray-500);
    transition: transform 200ms ease;
}

.accordion-item.open .accordion-chevron { transform: rotate(180deg); }

.accordion-panel {
    display: grid;
    grid-template-rows: 0fr;
    transition: grid-template-rows 200ms ease-out;
}

.accordion-item.open .accordion-panel { grid-template-rows: 1fr; }

.accordion-body {
    overflow: hidden;
    color: var(--gray-600);
}

.accordion-item.open .accordion-body { padding-bottom: 1.25rem; }

/* Apply CTA */
.apply {
    background: linear-gradient(to bottom right, var(--purple-900), var(--purple-800), var(--violet-900));
    text-align: center;
}

.apply-title {
    font-size: 1.875rem;
    font-weight: 700;
    color: #fff;
    margin-bottom: 1.5rem;
}

@media (min-width: 768px) { .apply-title { font-size: 2.25rem; } }
@media (min-width: 1024px) { .apply-title { font-size: 3rem; } }

.apply-text {
    color: var(--purple-200);
    font-size: 1.125rem;
    max-width: 36rem;
    margin: 0 auto 2.5rem;
}

.cta-row {
    display: flex;
    flex-direction: column;
    gap: 1rem;
}

.apply .cta-row { justify-content: center; }

@media (min-width: 640px) {
    .cta-row { flex-direction: row; }
}

/* Footer */
.site-footer {
    padding: 2rem 1.5rem;
    background: var(--purple-950);
    border-top: 1px solid var(--purple-900);
}

.site-footer-inner {
    max-width: var(--container-max);
    margin: 0 auto;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 1rem;
}

.site-footer-logo {
    height: 3.5rem;
    width: auto;
    filter: brightness(0) invert(1);
    opacity: 0.8;
}

.site-footer-copyright {
    color: rgba(216, 180, 254, 0.6);
    font-size: 0.875rem;
}
"#;
