//! Inline SVG stroke icons (Lucide, 24x24 grid).
//!
//! Each icon is a list of path `d` strings drawn with a 2px round stroke.
//! Circles are written as two arcs so everything renders through `<path>`.

use leptos::prelude::*;

/// Icons used on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconKind {
    Brain,
    Users,
    BookOpen,
    Target,
    Rocket,
    Trophy,
    ArrowRight,
    ChevronDown,
    ChevronLeft,
    ChevronRight,
}

impl IconKind {
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            IconKind::Brain => ICON_BRAIN,
            IconKind::Users => ICON_USERS,
            IconKind::BookOpen => ICON_BOOK_OPEN,
            IconKind::Target => ICON_TARGET,
            IconKind::Rocket => ICON_ROCKET,
            IconKind::Trophy => ICON_TROPHY,
            IconKind::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            IconKind::ChevronDown => &["m6 9 6 6 6-6"],
            IconKind::ChevronLeft => &["m15 18-6-6 6-6"],
            IconKind::ChevronRight => &["m9 18 6-6-6-6"],
        }
    }

    /// Lowercase name, used as a `data-icon` hook.
    pub fn as_label(self) -> &'static str {
        match self {
            IconKind::Brain => "brain",
            IconKind::Users => "users",
            IconKind::BookOpen => "book-open",
            IconKind::Target => "target",
            IconKind::Rocket => "rocket",
            IconKind::Trophy => "trophy",
            IconKind::ArrowRight => "arrow-right",
            IconKind::ChevronDown => "chevron-down",
            IconKind::ChevronLeft => "chevron-left",
            IconKind::ChevronRight => "chevron-right",
        }
    }
}

/// Renders an inline SVG icon.
///
/// ```rust,ignore
/// view! { <Icon kind=IconKind::Rocket class="benefit-icon" /> }
/// ```
#[component]
pub fn Icon(
    kind: IconKind,
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            data-icon=kind.as_label()
            aria-hidden="true"
        >
            {kind.paths().iter().map(|d| view! { <path d=*d></path> }).collect::<Vec<_>>()}
        </svg>
    }
}

const ICON_BRAIN: &[&str] = &[
    "M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z",
    "M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z",
    "M15 13a4.5 4.5 0 0 1-3-4 4.5 4.5 0 0 1-3 4",
    "M17.599 6.5a3 3 0 0 0 .399-1.375",
    "M6.003 5.125A3 3 0 0 0 6.401 6.5",
    "M3.477 10.896a4 4 0 0 1 .585-.396",
    "M19.938 10.5a4 4 0 0 1 .585.396",
    "M6 18a4 4 0 0 1-1.967-.516",
    "M19.967 17.484A4 4 0 0 1 18 18",
];

const ICON_USERS: &[&str] = &[
    "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
    "M5 7a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
    "M22 21v-2a4 4 0 0 0-3-3.87",
    "M16 3.13a4 4 0 0 1 0 7.75",
];

const ICON_BOOK_OPEN: &[&str] = &[
    "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z",
    "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z",
];

const ICON_TARGET: &[&str] = &[
    "M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0",
    "M6 12a6 6 0 1 0 12 0a6 6 0 1 0-12 0",
    "M10 12a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
];

const ICON_ROCKET: &[&str] = &[
    "M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z",
    "m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z",
    "M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0",
    "M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5",
];

const ICON_TROPHY: &[&str] = &[
    "M6 9H4.5a2.5 2.5 0 0 1 0-5H6",
    "M18 9h1.5a2.5 2.5 0 0 0 0-5H18",
    "M4 22h16",
    "M10 14.66V17c0 .55-.47.98-.97 1.21C7.85 18.75 7 20.24 7 22",
    "M14 14.66V17c0 .55.47.98.97 1.21C16.15 18.75 17 20.24 17 22",
    "M18 2H6v7a6 6 0 0 0 12 0V2Z",
];
