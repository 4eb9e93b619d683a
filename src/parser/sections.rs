use std::sync::LazyLock;

use regex::Regex;

use super::dom::{Node, Selector};
use super::fields::DISTRICT_LABEL;

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{2}\.\d{2}\.\d{4}").unwrap());

/// Fallback reason when a section has no heading.
pub const UNSPECIFIED_REASON: &str = "Belirtilmemiş";

pub const ANNOUNCEMENT: Selector = Selector::TagClass {
    tag: "section",
    class: "text-info",
};
const REASON: Selector = Selector::Tag("h2");
const EMPHASIS: Selector = Selector::TagClass {
    tag: "p",
    class: "lead",
};

/// Raw texts scraped from one announcement section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock {
    pub reason: String,
    pub location: String,
    pub date: String,
}

impl RawBlock {
    /// A heading alone carries no outage data.
    pub fn has_payload(&self) -> bool {
        !self.location.is_empty() || !self.date.is_empty()
    }
}

/// Gather the reason, location and date texts of one section.
pub fn collect_block(section: &Node<'_>) -> RawBlock {
    let reason = section
        .find(REASON)
        .map(|h| h.text())
        .unwrap_or_else(|| UNSPECIFIED_REASON.to_string());

    let mut location = String::new();
    let mut date = String::new();

    // Later paragraphs overwrite earlier ones for the same role.
    for p in section.find_all(EMPHASIS) {
        let text = p.text();
        if text.contains(DISTRICT_LABEL) {
            location = text;
        } else if DATE_RE.is_match(&text) {
            date = text;
        }
    }

    RawBlock {
        reason,
        location,
        date,
    }
}

// ── Tests ──
