//! Feature type lookup for planetary placemarks.
//!
//! USGS exports are not consistent about where the descriptor lives, so this
//! checks `ExtendedData` first and then falls back to scraping the HTML
//! description balloon.

use crate::readers::kml_reader::RawPlacemark;
use crate::utils::constants::FEATURE_TYPE_FIELDS;
use regex::Regex;
use std::sync::OnceLock;

fn html_tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("valid HTML tag regex"))
}

fn label_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(Feature\s*Type|Descriptor\s*Term)\s*[:\-]\s*([A-Za-z]+)")
            .expect("valid feature type label regex")
    })
}

/// Replace every HTML tag with a single space.
pub fn strip_html_tags(text: &str) -> String {
    html_tag_regex().replace_all(text, " ").into_owned()
}

/// Scan free text for a `Feature Type: X` or `Descriptor Term - X` label.
pub fn feature_type_from_description(description: &str) -> Option<String> {
    let cleaned = strip_html_tags(description);
    label_regex()
        .captures(&cleaned)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str().to_string())
}

pub fn extract_feature_type(placemark: &RawPlacemark) -> Option<String> {
    if let Some(value) = placemark.extended_value(&FEATURE_TYPE_FIELDS) {
        return Some(value.trim().to_string());
    }

    placemark
        .description
        .as_deref()
        .and_then(feature_type_from_description)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placemark(extended: &[(&str, &str)], description: Option<&str>) -> RawPlacemark {
        RawPlacemark {
            extended_data: extended
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            description: description.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_extended_data_wins() {
        let pm = placemark(
            &[("diameter", "12"), ("descriptor", " Crater ")],
            Some("Feature Type: Mons"),
        );
        assert_eq!(extract_feature_type(&pm).as_deref(), Some("Crater"));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let pm = placemark(&[("origin", "Named for a scientist")], None);
        assert_eq!(extract_feature_type(&pm), None);
    }

    #[test]
    fn test_description_fallback_strips_html() {
        let pm = placemark(
            &[],
            Some("<table><tr><td>Feature Type</td><td>: Vallis</td></tr></table>"),
        );
        assert_eq!(extract_feature_type(&pm).as_deref(), Some("Vallis"));
    }

    #[test]
    fn test_descriptor_term_label_is_case_insensitive() {
        assert_eq!(
            feature_type_from_description("descriptor term - Planitia, plains").as_deref(),
            Some("Planitia")
        );
        assert_eq!(
            feature_type_from_description("FEATURETYPE:Rima").as_deref(),
            Some("Rima")
        );
    }

    #[test]
    fn test_no_label_yields_none() {
        assert_eq!(feature_type_from_description("Approved 1935"), None);
        assert_eq!(extract_feature_type(&RawPlacemark::default()), None);
    }

    #[test]
    fn test_strip_html_tags() {
        assert_eq!(strip_html_tags("<b>bold</b>"), " bold ");
        assert_eq!(strip_html_tags("plain"), "plain");
    }
}
