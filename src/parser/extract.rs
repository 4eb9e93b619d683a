use tracing::{debug, warn};

use super::dom::{Document, Selector};
use super::fields::{parse_dates, parse_location};
use super::sections::{collect_block, RawBlock, ANNOUNCEMENT};
use crate::output::OutageRecord;

pub const CITY: &str = "Manisa";

const NO_OUTAGE_NOTICE: Selector = Selector::TagClass {
    tag: "h2",
    class: "text-primary",
};
const NO_OUTAGE_PHRASE: &str = "su kesintisi bulunmamaktadır";

/// What the status page said, as far as the parser can tell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageStatus {
    /// Announcement sections were present. May still be empty if every section was skipped.
    Outages(Vec<OutageRecord>),
    /// No sections, and the page carries the "no outage" notice.
    AllClear,
    /// No sections and no notice: the layout changed or the page did not render.
    Unrecognized,
}

impl PageStatus {
    pub fn into_records(self) -> Vec<OutageRecord> {
        match self {
            PageStatus::Outages(records) => records,
            PageStatus::AllClear | PageStatus::Unrecognized => Vec::new(),
        }
    }
}

/// Outage records on the page, empty for both the all-clear and unrecognized states.
#[allow(dead_code)]
pub fn extract(html: &str) -> Vec<OutageRecord> {
    classify(html).into_records()
}

pub fn classify(html: &str) -> PageStatus {
    let doc = Document::parse(html);
    let sections = doc.find_all(ANNOUNCEMENT);

    if sections.is_empty() {
        return if has_no_outage_notice(&doc) {
            debug!("No announcement sections; all-clear notice present");
            PageStatus::AllClear
        } else {
            warn!("No announcement sections and no all-clear notice; page layout not recognized");
            PageStatus::Unrecognized
        };
    }

    let total = sections.len();
    let records: Vec<OutageRecord> = sections
        .iter()
        .map(collect_block)
        .filter_map(build_record)
        .collect();

    debug!("{} sections → {} records", total, records.len());
    PageStatus::Outages(records)
}

fn build_record(block: RawBlock) -> Option<OutageRecord> {
    if !block.has_payload() {
        debug!("Skipping section without location or date: {:?}", block.reason);
        return None;
    }

    let (district, neighborhoods) = parse_location(&block.location);
    let (start, end) = parse_dates(&block.date);

    Some(OutageRecord {
        city: CITY.to_string(),
        district,
        neighborhoods,
        description: block.reason,
        start,
        end,
    })
}

fn has_no_outage_notice(doc: &Document) -> bool {
    doc.find(NO_OUTAGE_NOTICE)
        .map(|h| h.text().to_lowercase().contains(NO_OUTAGE_PHRASE))
        .unwrap_or(false)
}

// ── Tests ──
