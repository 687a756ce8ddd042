use unicode_normalization::char::canonical_combining_class;
use unicode_normalization::UnicodeNormalization;

/// Canonical lookup key for a display name.
///
/// NFKD decomposition, combining marks (non-zero canonical combining class)
/// dropped, lowercased, whitespace runs collapsed to a single space and
/// trimmed. An empty result marks the name as unusable for indexing.
///
/// # Examples
/// ```
/// use gazetteer_builder::processors::normalize_name;
///
/// assert_eq!(normalize_name("  São   Paulo "), "sao paulo");
/// assert_eq!(normalize_name(" \t "), "");
/// ```
pub fn normalize_name(name: &str) -> String {
    let folded: String = name
        .nfkd()
        .filter(|c| canonical_combining_class(*c) == 0)
        .flat_map(char::to_lowercase)
        .collect();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}
