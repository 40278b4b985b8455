//! Page content model for the temple site.
//!
//! Sections, cards and tables here hold only catalog keys plus the few
//! locale-independent values (amounts, hours, stats). Text is resolved
//! through the locale store at render time.

mod render;

pub use render::{pad_to_width, render_page, render_section};

/// Top-level page sections in scroll order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Hero banner.
    Home,
    /// Temple history and stats.
    About,
    /// Recurring activity cards.
    Activities,
    /// Upcoming event cards.
    Events,
    /// Donation tiers.
    Donate,
    /// Contact details, hours and form.
    Contact,
}

impl Section {
    /// All sections in page order.
    pub const ALL: [Self; 6] = [
        Self::Home,
        Self::About,
        Self::Activities,
        Self::Events,
        Self::Donate,
        Self::Contact,
    ];

    /// Fragment id used by the navigation links (`#about`).
    #[must_use]
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Activities => "activities",
            Self::Events => "events",
            Self::Donate => "donate",
            Self::Contact => "contact",
        }
    }

    /// Catalog key of the navigation label.
    #[must_use]
    pub const fn nav_key(self) -> &'static str {
        match self {
            Self::Home => "nav.home",
            Self::About => "nav.about",
            Self::Activities => "nav.activities",
            Self::Events => "nav.events",
            Self::Donate => "nav.donate",
            Self::Contact => "nav.contact",
        }
    }

    /// What: Look up a section by its anchor id.
    ///
    /// Inputs:
    /// - `anchor`: Fragment id, with or without a leading `#`, case-insensitive
    ///
    /// Output:
    /// - `Some(Section)` when the anchor names a section, `None` otherwise
    #[must_use]
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let wanted = anchor.trim().trim_start_matches('#').to_ascii_lowercase();
        Self::ALL.into_iter().find(|s| s.anchor() == wanted)
    }
}

/// Card in the activities grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity {
    /// Subtree under `activities.` holding `title`, `description` and `time`.
    pub key: &'static str,
    /// Decorative icon shown next to the title.
    pub icon: &'static str,
}

/// Card in the upcoming events list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    /// Subtree under `events.` holding `date`, `title`, `description` and `time`.
    pub key: &'static str,
}

/// Suggested donation amount with the catalog key describing its impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DonationTier {
    /// Amount label, identical in every locale.
    pub amount: &'static str,
    /// Catalog key of the impact description.
    pub description_key: &'static str,
}

/// Opening hours row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoursRow {
    /// Catalog key of the day label.
    pub days_key: &'static str,
    /// Opening time span.
    pub hours: &'static str,
}

/// Highlight figure in the about section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    /// Figure, identical in every locale.
    pub value: &'static str,
    /// Catalog key of the caption.
    pub label_key: &'static str,
}

/// Contact form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    /// Catalog key of the label.
    pub label_key: &'static str,
    /// Catalog key of the placeholder text.
    pub placeholder_key: &'static str,
}

/// Activity cards in grid order.
pub const ACTIVITIES: [Activity; 6] = [
    Activity {
        key: "dailyPrayers",
        icon: "🙏",
    },
    Activity {
        key: "meditation",
        icon: "🕉",
    },
    Activity {
        key: "communityService",
        icon: "🤝",
    },
    Activity {
        key: "spiritualDiscourses",
        icon: "📖",
    },
    Activity {
        key: "youthPrograms",
        icon: "🌱",
    },
    Activity {
        key: "festivals",
        icon: "🪔",
    },
];

/// Upcoming events, soonest first.
pub const EVENTS: [Event; 3] = [
    Event {
        key: "springFestival",
    },
    Event {
        key: "meditationRetreat",
    },
    Event {
        key: "communityServiceDay",
    },
];

/// Suggested donation amounts.
pub const DONATION_TIERS: [DonationTier; 3] = [
    DonationTier {
        amount: "$25",
        description_key: "donate.donation25",
    },
    DonationTier {
        amount: "$50",
        description_key: "donate.donation50",
    },
    DonationTier {
        amount: "$100",
        description_key: "donate.donation100",
    },
];

/// Weekly opening hours.
pub const TEMPLE_HOURS: [HoursRow; 3] = [
    HoursRow {
        days_key: "contact.mondayFriday",
        hours: "6:00 AM - 9:00 PM",
    },
    HoursRow {
        days_key: "contact.saturday",
        hours: "5:00 AM - 10:00 PM",
    },
    HoursRow {
        days_key: "contact.sunday",
        hours: "5:00 AM - 10:00 PM",
    },
];

/// Figures shown beside the about text.
pub const ABOUT_STATS: [Stat; 2] = [
    Stat {
        value: "50+",
        label_key: "about.yearsOfService",
    },
    Stat {
        value: "1000+",
        label_key: "about.communityMembers",
    },
];

/// Contact form fields in tab order.
pub const CONTACT_FORM: [FormField; 4] = [
    FormField {
        label_key: "contact.fullName",
        placeholder_key: "contact.namePlaceholder",
    },
    FormField {
        label_key: "contact.emailAddress",
        placeholder_key: "contact.emailPlaceholder",
    },
    FormField {
        label_key: "contact.subject",
        placeholder_key: "contact.subjectPlaceholder",
    },
    FormField {
        label_key: "contact.message",
        placeholder_key: "contact.messagePlaceholder",
    },
];

/// What: List every catalog key the page reads.
///
/// Output:
/// - Dotted keys in render order, possibly with repeats
///
/// Details:
/// - Used to check that rendering never falls back to a raw key
#[must_use]
pub fn referenced_keys() -> Vec<String> {
    let mut keys: Vec<String> = Section::ALL
        .iter()
        .map(|s| s.nav_key().to_string())
        .collect();
    keys.extend(
        ["hero.title", "hero.subtitle", "hero.cta"]
            .iter()
            .map(ToString::to_string),
    );
    keys.extend(
        ["about.title", "about.description1", "about.description2"]
            .iter()
            .map(ToString::to_string),
    );
    keys.extend(ABOUT_STATS.iter().map(|s| s.label_key.to_string()));
    keys.push("activities.title".to_string());
    for activity in &ACTIVITIES {
        for field in ["title", "description", "time"] {
            keys.push(format!("activities.{}.{field}", activity.key));
        }
    }
    keys.push("events.title".to_string());
    for event in &EVENTS {
        for field in ["date", "title", "description", "time"] {
            keys.push(format!("events.{}.{field}", event.key));
        }
    }
    keys.extend(
        ["donate.title", "donate.description"]
            .iter()
            .map(ToString::to_string),
    );
    keys.extend(DONATION_TIERS.iter().map(|t| t.description_key.to_string()));
    keys.extend(
        [
            "donate.donateNow",
            "donate.otherWays",
            "donate.otherWaysDescription",
            "donate.learnMore",
            "contact.title",
            "contact.getInTouch",
            "contact.address",
            "contact.addressValue",
            "contact.phone",
            "contact.phoneValue",
            "contact.email",
            "contact.emailValue",
            "contact.templeHours",
        ]
        .iter()
        .map(ToString::to_string),
    );
    keys.extend(TEMPLE_HOURS.iter().map(|h| h.days_key.to_string()));
    for field in &CONTACT_FORM {
        keys.push(field.label_key.to_string());
        keys.push(field.placeholder_key.to_string());
    }
    keys.extend(
        [
            "contact.sendMessage",
            "footer.description",
            "footer.quickLinks",
            "footer.contactInfo",
            "footer.copyright",
        ]
        .iter()
        .map(ToString::to_string),
    );
    keys
}
