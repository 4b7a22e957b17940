//! Leptos UI components shared by the page sections.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument (static export only)
//! └── LandingPage
//!     ├── Header / Hero / Footer
//!     └── content sections
//!         ├── Reveal (per item, staggered)
//!         ├── Carousel (mentors)
//!         ├── Accordion (FAQ)
//!         └── Icon
//! ```

mod accordion;
mod carousel;
mod document;
mod icons;
mod reveal;

pub use accordion::Accordion;
pub use carousel::Carousel;
pub use document::PageDocument;
pub use icons::{Icon, IconKind};
pub use reveal::Reveal;
