//! Plain-text rendering of the page for the terminal preview.

use std::fmt::Write as _;

use unicode_width::UnicodeWidthStr;

use crate::i18n::{LocaleStore, t};
use crate::page::{
    ABOUT_STATS, ACTIVITIES, CONTACT_FORM, DONATION_TIERS, EVENTS, Section, TEMPLE_HOURS,
};
use crate::preferences::PreferenceStorage;

/// What: Pad a string with trailing spaces up to a display width.
///
/// Inputs:
/// - `text`: Text to pad
/// - `width`: Target width in terminal columns
///
/// Output:
/// - `text` followed by enough spaces to fill `width` columns; unchanged if already wider
///
/// Details:
/// - Uses `unicode_width` so Devanagari and emoji count by rendered columns, not bytes
#[must_use]
pub fn pad_to_width(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width());
    let mut out = String::with_capacity(text.len() + pad);
    out.push_str(text);
    out.extend(std::iter::repeat_n(' ', pad));
    out
}

/// Title followed by a rule of the same display width.
fn heading(out: &mut String, title: &str, rule: char) {
    let _ = writeln!(out, "{title}");
    let rule_line: String = std::iter::repeat_n(rule, title.width().max(1)).collect();
    let _ = writeln!(out, "{rule_line}");
}

/// What: Write label/value rows with the value column aligned.
///
/// Inputs:
/// - `out`: Output buffer
/// - `rows`: `(label, value)` pairs
///
/// Details:
/// - The label column is as wide as the widest label plus two spaces
fn aligned_rows(out: &mut String, rows: &[(String, String)]) {
    let width = rows.iter().map(|(l, _)| l.width()).max().unwrap_or(0) + 2;
    for (label, value) in rows {
        let _ = writeln!(out, "  {}{value}", pad_to_width(label, width));
    }
}

/// Header bar: navigation labels and the active language.
fn render_header<S: PreferenceStorage>(store: &LocaleStore<S>) -> String {
    let nav: Vec<String> = Section::ALL
        .iter()
        .map(|s| t(store, s.nav_key()))
        .collect();
    let active = store.locale();
    format!(
        "{}    [{} ⇄ {}]\n",
        nav.join(" | "),
        active.display_name(),
        active.toggle().display_name()
    )
}

/// Footer: blurb, quick links, contact lines and copyright.
fn render_footer<S: PreferenceStorage>(store: &LocaleStore<S>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", t(store, "footer.description"));
    let _ = writeln!(out);
    let _ = writeln!(out, "{}:", t(store, "footer.quickLinks"));
    for section in Section::ALL {
        let _ = writeln!(out, "  #{:<12}{}", section.anchor(), t(store, section.nav_key()));
    }
    let _ = writeln!(out, "{}:", t(store, "footer.contactInfo"));
    let _ = writeln!(out, "  {}", t(store, "contact.addressValue"));
    let _ = writeln!(out, "  {}", t(store, "contact.phoneValue"));
    let _ = writeln!(out, "  {}", t(store, "contact.emailValue"));
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", t(store, "footer.copyright"));
    out
}

/// What: Render one section in the store's active locale.
///
/// Inputs:
/// - `store`: Locale store supplying the active locale and catalog
/// - `section`: Section to render
///
/// Output:
/// - Multi-line plain text ending with a newline
///
/// Details:
/// - Every string comes from the catalog; missing keys show up as the raw dotted key
#[must_use]
pub fn render_section<S: PreferenceStorage>(store: &LocaleStore<S>, section: Section) -> String {
    let mut out = String::new();
    match section {
        Section::Home => {
            heading(&mut out, &t(store, "hero.title"), '=');
            let _ = writeln!(out, "{}", t(store, "hero.subtitle"));
            let _ = writeln!(out, "[ {} ]", t(store, "hero.cta"));
        }
        Section::About => {
            heading(&mut out, &t(store, "about.title"), '-');
            let _ = writeln!(out, "{}", t(store, "about.description1"));
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", t(store, "about.description2"));
            let _ = writeln!(out);
            let rows: Vec<(String, String)> = ABOUT_STATS
                .iter()
                .map(|s| (s.value.to_string(), t(store, s.label_key)))
                .collect();
            aligned_rows(&mut out, &rows);
        }
        Section::Activities => {
            heading(&mut out, &t(store, "activities.title"), '-');
            for activity in &ACTIVITIES {
                let base = format!("activities.{}", activity.key);
                let _ = writeln!(
                    out,
                    "{} {}  ({})",
                    activity.icon,
                    t(store, &format!("{base}.title")),
                    t(store, &format!("{base}.time"))
                );
                let _ = writeln!(out, "   {}", t(store, &format!("{base}.description")));
            }
        }
        Section::Events => {
            heading(&mut out, &t(store, "events.title"), '-');
            for event in &EVENTS {
                let base = format!("events.{}", event.key);
                let _ = writeln!(
                    out,
                    "{} | {}",
                    t(store, &format!("{base}.date")),
                    t(store, &format!("{base}.title"))
                );
                let _ = writeln!(out, "  {}", t(store, &format!("{base}.time")));
                let _ = writeln!(out, "  {}", t(store, &format!("{base}.description")));
            }
        }
        Section::Donate => {
            heading(&mut out, &t(store, "donate.title"), '-');
            let _ = writeln!(out, "{}", t(store, "donate.description"));
            let rows: Vec<(String, String)> = DONATION_TIERS
                .iter()
                .map(|tier| (tier.amount.to_string(), t(store, tier.description_key)))
                .collect();
            aligned_rows(&mut out, &rows);
            let _ = writeln!(out, "[ {} ]", t(store, "donate.donateNow"));
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", t(store, "donate.otherWays"));
            let _ = writeln!(out, "{}", t(store, "donate.otherWaysDescription"));
            let _ = writeln!(out, "[ {} ]", t(store, "donate.learnMore"));
        }
        Section::Contact => {
            heading(&mut out, &t(store, "contact.title"), '-');
            let _ = writeln!(out, "{}", t(store, "contact.getInTouch"));
            let details: Vec<(String, String)> = [
                ("contact.address", "contact.addressValue"),
                ("contact.phone", "contact.phoneValue"),
                ("contact.email", "contact.emailValue"),
            ]
            .iter()
            .map(|(label, value)| (t(store, label), t(store, value)))
            .collect();
            aligned_rows(&mut out, &details);
            let _ = writeln!(out, "{}", t(store, "contact.templeHours"));
            let hours: Vec<(String, String)> = TEMPLE_HOURS
                .iter()
                .map(|row| (t(store, row.days_key), row.hours.to_string()))
                .collect();
            aligned_rows(&mut out, &hours);
            let _ = writeln!(out);
            let fields: Vec<(String, String)> = CONTACT_FORM
                .iter()
                .map(|f| {
                    (
                        t(store, f.label_key),
                        format!("[{}]", t(store, f.placeholder_key)),
                    )
                })
                .collect();
            aligned_rows(&mut out, &fields);
            let _ = writeln!(out, "[ {} ]", t(store, "contact.sendMessage"));
        }
    }
    out
}

/// What: Render the header, every section in order, and the footer.
///
/// Inputs:
/// - `store`: Locale store supplying the active locale and catalog
///
/// Output:
/// - Full page text with a blank line between blocks
#[must_use]
pub fn render_page<S: PreferenceStorage>(store: &LocaleStore<S>) -> String {
    let mut blocks = vec![render_header(store)];
    blocks.extend(Section::ALL.iter().map(|&s| render_section(store, s)));
    blocks.push(render_footer(store));
    blocks.join("\n")
}
