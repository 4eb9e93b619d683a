/// Prefix in front of the district name: "İlçe: TURGUTLU".
pub const DISTRICT_LABEL: &str = "İlçe:";
/// Separates the district from the neighborhood list.
pub const NEIGHBORHOOD_DELIMITER: &str = "- Mahalle:";

/// Split a location line into (district, neighborhoods).
///
/// `"İlçe: TURGUTLU - Mahalle:ATATÜRK,CUMHURİYET"` → `("TURGUTLU", ["ATATÜRK", "CUMHURİYET"])`.
/// Never fails: text without either marker comes back trimmed as the district.
pub fn parse_location(text: &str) -> (String, Vec<String>) {
    if !text.contains(DISTRICT_LABEL) && !text.contains(NEIGHBORHOOD_DELIMITER) {
        return (text.trim().to_string(), Vec::new());
    }

    let cleaned = text.replace(DISTRICT_LABEL, "");
    let cleaned = cleaned.trim();

    match cleaned.split_once(NEIGHBORHOOD_DELIMITER) {
        Some((district, rest)) => {
            let neighborhoods = rest
                .split(',')
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_string)
                .collect();
            (district.trim().to_string(), neighborhoods)
        }
        None => (cleaned.to_string(), Vec::new()),
    }
}

/// Split a date range on every `-` and keep the first two parts as (start, end).
///
/// Timestamps are kept verbatim. Parts after the second are dropped, and
/// text without a `-` becomes the start with an empty end.
pub fn parse_dates(text: &str) -> (String, String) {
    let mut parts = text.split('-');
    match (parts.next(), parts.next()) {
        (Some(start), Some(end)) => (start.trim().to_string(), end.trim().to_string()),
        _ => (text.trim().to_string(), String::new()),
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_with_neighborhoods() {
        let (district, neighborhoods) =
            parse_location("İlçe: TURGUTLU - Mahalle:ATATÜRK,CUMHURİYET");
        assert_eq!(district, "TURGUTLU");
        assert_eq!(neighborhoods, vec!["ATATÜRK", "CUMHURİYET"]);
    }

    #[test]
    fn location_trims_and_drops_empty_neighborhoods() {
        let (district, neighborhoods) =
            parse_location("İlçe:  ŞEHZADELER   - Mahalle: KARAAĞAÇLI , , YARHASANLAR ,");
        assert_eq!(district, "ŞEHZADELER");
        assert_eq!(neighborhoods, vec!["KARAAĞAÇLI", "YARHASANLAR"]);
    }

    #[test]
    fn location_without_delimiter() {
        let (district, neighborhoods) = parse_location("İlçe: SALİHLİ ");
        assert_eq!(district, "SALİHLİ");
        assert!(neighborhoods.is_empty());
    }

    #[test]
    fn location_splits_on_first_delimiter_only() {
        let (district, neighborhoods) =
            parse_location("İlçe: AKHİSAR - Mahalle:A,B - Mahalle:C");
        assert_eq!(district, "AKHİSAR");
        assert_eq!(neighborhoods, vec!["A", "B - Mahalle:C"]);
    }

    #[test]
    fn location_without_any_marker_falls_back() {
        let (district, neighborhoods) = parse_location("  Merkez hattı  ");
        assert_eq!(district, "Merkez hattı");
        assert!(neighborhoods.is_empty());
    }

    #[test]
    fn location_empty_input() {
        assert_eq!(parse_location(""), (String::new(), Vec::new()));
        assert_eq!(parse_location("İlçe:"), (String::new(), Vec::new()));
    }

    #[test]
    fn location_delimiter_without_label() {
        let (district, neighborhoods) = parse_location("SOMA - Mahalle:KURTULUŞ");
        assert_eq!(district, "SOMA");
        assert_eq!(neighborhoods, vec!["KURTULUŞ"]);
    }

    #[test]
    fn dates_range() {
        assert_eq!(
            parse_dates("10.01.2026 10:10 - 10.01.2026 12:34"),
            ("10.01.2026 10:10".to_string(), "10.01.2026 12:34".to_string())
        );
    }

    #[test]
    fn dates_ignore_extra_parts() {
        let (start, end) = parse_dates("10.01.2026 10:10 - 10.01.2026 12:34 - tahmini");
        assert_eq!(start, "10.01.2026 10:10");
        assert_eq!(end, "10.01.2026 12:34");
    }

    #[test]
    fn dates_split_on_every_hyphen() {
        assert_eq!(parse_dates("a-b-c"), ("a".to_string(), "b".to_string()));
        assert_eq!(parse_dates("2026-01-10"), ("2026".to_string(), "01".to_string()));
    }

    #[test]
    fn dates_without_delimiter() {
        assert_eq!(
            parse_dates(" 10.01.2026 10:10 "),
            ("10.01.2026 10:10".to_string(), String::new())
        );
    }

    #[test]
    fn dates_malformed_input() {
        assert_eq!(parse_dates(""), (String::new(), String::new()));
        assert_eq!(parse_dates("-"), (String::new(), String::new()));
        assert_eq!(parse_dates("belirsiz"), ("belirsiz".to_string(), String::new()));
    }
}
