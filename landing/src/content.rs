//! Static page content.
//!
//! Every record on the page lives here as a `&'static` slice. Nothing is
//! loaded at runtime; [`validate`] checks the authoring invariants and is
//! run by the test suite and the export CLI before a page is rendered.

use crate::components::IconKind;
use thiserror::Error;

/// Application form, opened in a new browsing context.
pub const APPLY_URL: &str = "https://tinyurl.com/freevbootcamp26";
/// Host organisation site.
pub const ORG_URL: &str = "https://freeventures.org";
/// Contact address for questions and financial aid.
pub const CONTACT_EMAIL: &str = "aryan@freeventures.org";

pub const LOGO_URL: &str = "https://slelguoygbfzlpylpxfs.supabase.co/storage/v1/render/image/public/project-uploads/11624de4-6333-4122-b504-e397f9009de7/FreeV-HS-Bootcamp-Logo-Resized-1770765612874.png?width=8000&height=8000&resize=contain";
pub const CAMPUS_PHOTO_URL: &str = "https://slelguoygbfzlpylpxfs.supabase.co/storage/v1/render/image/public/project-uploads/11624de4-6333-4122-b504-e397f9009de7/Berkeley-Photo-1770765757591.jpg?width=8000&height=8000&resize=contain";

/// Headline stat shown on the hero photo card.
pub const STUDENTS_LAUNCHED: &str = "500+";
pub const COPYRIGHT: &str = "© 2026 Free Ventures. Empowering the next generation of builders.";

/// A card in the benefits grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BenefitItem {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
}

/// A mentor slide in the carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MentorProfile {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub image: &'static str,
}

/// One week of the program timeline (weeks are 1-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimelineStep {
    pub week: u8,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Company logo in the partner ticker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PartnerLogo {
    pub name: &'static str,
    pub logo: &'static str,
}

pub const BENEFITS: &[BenefitItem] = &[
    BenefitItem {
        icon: IconKind::Brain,
        title: "Startup Fundamentals",
        description: "Master design thinking, lean startup methodology, and problem validation techniques.",
    },
    BenefitItem {
        icon: IconKind::Users,
        title: "Find Co-Founders",
        description: "Connect with like-minded peers and build your founding team from day one.",
    },
    BenefitItem {
        icon: IconKind::BookOpen,
        title: "Real Case Studies",
        description: "Learn from successful startups and understand what makes companies succeed or fail.",
    },
    BenefitItem {
        icon: IconKind::Target,
        title: "Expert Mentorship",
        description: "Get guidance from UC Berkeley students and YC-backed founders who've been there.",
    },
    BenefitItem {
        icon: IconKind::Rocket,
        title: "Launch Your Product",
        description: "Go from idea to MVP - ship something real by the end of the program.",
    },
    BenefitItem {
        icon: IconKind::Trophy,
        title: "Pitch Competition",
        description: "Present your startup to a panel of investors and industry experts. Win upto $10K in prizes.",
    },
];

pub const MENTORS: &[MentorProfile] = &[
    MentorProfile {
        name: "Sarah Chen",
        role: "UC Berkeley CS & Business",
        bio: "Founded EdTech startup acquired in 2023. Passionate about helping young founders.",
        image: "https://images.unsplash.com/photo-1580489944761-15a19d654956?w=400&h=400&fit=crop&crop=face",
    },
    MentorProfile {
        name: "Marcus Johnson",
        role: "YC W23 Founder",
        bio: "Built a $10M ARR SaaS company. Former software engineer at Stripe.",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&fit=crop&crop=face",
    },
    MentorProfile {
        name: "Emily Zhang",
        role: "UC Berkeley Haas MBA",
        bio: "Led product at two unicorn startups. Angel investor in 15+ companies.",
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=400&h=400&fit=crop&crop=face",
    },
    MentorProfile {
        name: "David Park",
        role: "YC S22 Founder",
        bio: "Serial entrepreneur with 3 successful exits. Advisor at Berkeley SkyDeck.",
        image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=400&h=400&fit=crop&crop=face",
    },
    MentorProfile {
        name: "Lisa Thompson",
        role: "UC Berkeley Engineering",
        bio: "AI researcher turned founder. Building the future of education technology.",
        image: "https://images.unsplash.com/photo-1534528741775-53994a69daeb?w=400&h=400&fit=crop&crop=face",
    },
];

pub const TIMELINE: &[TimelineStep] = &[
    TimelineStep {
        week: 1,
        title: "Ideation & Design Thinking",
        description: "Generate and validate startup ideas using structured brainstorming frameworks. Learn how to identify real problems worth solving.",
    },
    TimelineStep {
        week: 2,
        title: "Market Research",
        description: "Conduct user interviews and analyze your target audience. Map out your competitive landscape and identify your unique value proposition.",
    },
    TimelineStep {
        week: 3,
        title: "Business Models & Strategy",
        description: "Explore case studies to learn unit economics & pricing models. Create your own lean business canvas.",
    },
    TimelineStep {
        week: 4,
        title: "MVP Development",
        description: "Turn your validated idea into a minimum viable product. Learn rapid prototyping techniques, no-code tools, and how to ship fast without sacrificing quality.",
    },
    TimelineStep {
        week: 5,
        title: "User Testing & Iteration",
        description: "Put your MVP in front of real users and gather actionable feedback. Learn how to run effective user tests, measure key metrics, and iterate quickly.",
    },
    TimelineStep {
        week: 6,
        title: "Growth & Marketing",
        description: "Master customer acquisition channels and growth strategies. Dive into social media marketing, content strategy, SEO basics, and more.",
    },
    TimelineStep {
        week: 7,
        title: "Storytelling",
        description: "Craft a compelling narrative that resonates with investors and customers. Build your pitch deck, practice delivery, and learn how to handle Q&A.",
    },
    TimelineStep {
        week: 8,
        title: "Demo Day",
        description: "Present your startup to a panel of investors, founders, and industry experts. Compete for $10K in prizes and receive personalized feedback.",
    },
];

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "Who is eligible to apply?",
        answer: "Any high school student (ages 14-18) with a passion for entrepreneurship can apply. No prior business experience required—just curiosity and drive!",
    },
    FaqEntry {
        question: "Do I need coding or business experience?",
        answer: "Not at all! We welcome students from all backgrounds. Whether you're technical, creative, or somewhere in between, you'll find your place here.",
    },
    FaqEntry {
        question: "What's the time commitment?",
        answer: "The bootcamp runs for 8 weeks with 1-2 hours of live sessions per week, plus optional office hours. Most students spend 4-6 hours total per week.",
    },
    FaqEntry {
        question: "What is the pricing of the bootcamp?",
        answer: "The full cost of the bootcamp is $250. Free Ventures is committed to accessible education and offers financial aid to students with verified need. If cost may be a barrier or you are unsure whether you qualify, we encourage you to reach out to aryan@freeventures.org .",
    },
    FaqEntry {
        question: "Can I apply if I already have a startup idea?",
        answer: "Absolutely! Whether you come with an idea or want to discover one during the program, we'll help you develop and validate it.",
    },
];

macro_rules! upload {
    ($file:literal) => {
        concat!(
            "https://slelguoygbfzlpylpxfs.supabase.co/storage/v1/render/image/public/project-uploads/11624de4-6333-4122-b504-e397f9009de7/",
            $file,
            "?width=8000&height=8000&resize=contain"
        )
    };
}

pub const PARTNERS: &[PartnerLogo] = &[
    PartnerLogo {
        name: "Y Combinator",
        logo: upload!("Y-Combinator-Logo-resized-1770407875828.webp"),
    },
    PartnerLogo {
        name: "McKinsey",
        logo: upload!("McKinsey-logo-1770407875704.png"),
    },
    PartnerLogo {
        name: "Google",
        logo: upload!("Google-loog-1770407875705.png"),
    },
    PartnerLogo {
        name: "Amazon",
        logo: upload!("Amazon-logo-resized-1770765063177.webp"),
    },
    PartnerLogo {
        name: "OpenAI",
        logo: upload!("OpenAI-logo-resized-1770765063177.webp"),
    },
    PartnerLogo {
        name: "Stripe",
        logo: upload!("Stripe-logo-1770765063206.png"),
    },
    PartnerLogo {
        name: "Apple",
        logo: upload!("Apple-logo-png-resized-1770765341497.webp"),
    },
    PartnerLogo {
        name: "Jane Street",
        logo: upload!("Jane_Street-Logo-1770765341012.png"),
    },
];

/// How many copies of the partner set the ticker renders back to back.
pub const PARTNER_TICKER_SETS: usize = 4;

/// An authoring mistake in the static content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("{entity}[{index}]: `{field}` is empty")]
    EmptyField {
        entity: &'static str,
        field: &'static str,
        index: usize,
    },
    #[error("timeline[{index}]: expected week {expected}, found week {found}")]
    WeekOutOfSequence { index: usize, expected: usize, found: u8 },
    #[error("faq question listed twice: {question:?}")]
    DuplicateQuestion { question: &'static str },
    #[error("{entity}[{index}]: not an absolute https URL: {url}")]
    InvalidUrl {
        entity: &'static str,
        index: usize,
        url: &'static str,
    },
}

/// Validate the shipped content.
pub fn validate() -> Result<(), ContentError> {
    validate_benefits(BENEFITS)?;
    validate_mentors(MENTORS)?;
    validate_timeline(TIMELINE)?;
    validate_faqs(FAQS)?;
    validate_partners(PARTNERS)?;
    Ok(())
}

fn non_empty(
    entity: &'static str,
    index: usize,
    fields: &[(&'static str, &'static str)],
) -> Result<(), ContentError> {
    match fields.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((field, _)) => Err(ContentError::EmptyField {
            entity,
            field,
            index,
        }),
        None => Ok(()),
    }
}

fn https_url(entity: &'static str, index: usize, url: &'static str) -> Result<(), ContentError> {
    let host = url.strip_prefix("https://").unwrap_or_default();
    if host.is_empty() || host.starts_with('/') || url.contains(char::is_whitespace) {
        return Err(ContentError::InvalidUrl { entity, index, url });
    }
    Ok(())
}

pub fn validate_benefits(items: &[BenefitItem]) -> Result<(), ContentError> {
    for (index, item) in items.iter().enumerate() {
        non_empty("benefits", index, &[("title", item.title)])?;
    }
    Ok(())
}

pub fn validate_mentors(items: &[MentorProfile]) -> Result<(), ContentError> {
    for (index, m) in items.iter().enumerate() {
        non_empty(
            "mentors",
            index,
            &[
                ("name", m.name),
                ("role", m.role),
                ("bio", m.bio),
                ("image", m.image),
            ],
        )?;
        https_url("mentors", index, m.image)?;
    }
    Ok(())
}

/// Weeks must read 1, 2, ..., N with no gaps or repeats.
pub fn validate_timeline(steps: &[TimelineStep]) -> Result<(), ContentError> {
    for (index, step) in steps.iter().enumerate() {
        let expected = index + 1;
        if usize::from(step.week) != expected {
            return Err(ContentError::WeekOutOfSequence {
                index,
                expected,
                found: step.week,
            });
        }
        non_empty("timeline", index, &[("title", step.title)])?;
    }
    Ok(())
}

pub fn validate_faqs(entries: &[FaqEntry]) -> Result<(), ContentError> {
    let mut seen = std::collections::HashSet::new();
    for (index, entry) in entries.iter().enumerate() {
        non_empty(
            "faqs",
            index,
            &[("question", entry.question), ("answer", entry.answer)],
        )?;
        if !seen.insert(entry.question) {
            return Err(ContentError::DuplicateQuestion {
                question: entry.question,
            });
        }
    }
    Ok(())
}

pub fn validate_partners(logos: &[PartnerLogo]) -> Result<(), ContentError> {
    for (index, p) in logos.iter().enumerate() {
        non_empty("partners", index, &[("name", p.name)])?;
        https_url("partners", index, p.logo)?;
    }
    Ok(())
}
