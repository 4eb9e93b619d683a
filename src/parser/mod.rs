pub mod dom;
pub mod extract;
pub mod fields;
pub mod sections;

pub use extract::{classify, PageStatus};

use tracing::info;

use crate::output::ResultSet;

/// Two-pass pipeline: html → raw section blocks → normalized records.
pub fn process_page(html: &str) -> ResultSet {
    let status = classify(html);
    match &status {
        PageStatus::Outages(records) => info!("Found {} outage records", records.len()),
        PageStatus::AllClear => info!("No active outages reported"),
        PageStatus::Unrecognized => {}
    }
    ResultSet::new(status.into_records())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_set_count_matches_data() {
        for name in ["outages", "no_outage", "changed_layout"] {
            let html = std::fs::read_to_string(format!("tests/fixtures/{}.html", name)).unwrap();
            let results = process_page(&html);
            let json = serde_json::to_value(&results).unwrap();
            assert_eq!(json["count"].as_u64(), Some(results.data().len() as u64));
        }
    }

    #[test]
    fn empty_document() {
        assert_eq!(process_page("").count(), 0);
    }
}
