//! Identifier normalization.
//!
//! Converts schema names into identifiers that are legal in every target
//! language, and disambiguates repeated field names within one run.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

static MATCH_FIRST_CAP: Lazy<Regex> =
    Lazy::new(|| Regex::new("([A-Z])([A-Z][a-z])").expect("valid acronym pattern"));
static MATCH_ALL_CAP: Lazy<Regex> =
    Lazy::new(|| Regex::new("([a-z0-9])([A-Z])").expect("valid camel pattern"));

/// Converts a string to snake_case.
///
/// Splits acronym ends (`XMLHttp` -> `XML_Http`) and camel-case boundaries,
/// turns hyphens into underscores and lowercases the result.
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    let output = MATCH_FIRST_CAP.replace_all(s, "${1}_${2}");
    let output = MATCH_ALL_CAP.replace_all(&output, "${1}_${2}");
    output.replace('-', "_").to_lowercase()
}

/// Uppercases the first character of `s`, leaving the rest unchanged.
#[must_use]
pub fn make_first_upper_case(s: &str) -> String {
    to_title(s)
}

/// Uppercases the first character of `s`, leaving the rest unchanged.
#[must_use]
pub fn to_title(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut result = String::with_capacity(s.len());
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
            result
        }
        None => String::new(),
    }
}

/// Converts a string to PascalCase.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;

    for c in s.chars() {
        if c == '_' || c == '-' {
            capitalize_next = true;
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// Replaces characters that are not legal in identifiers.
///
/// The result only contains alphanumerics and underscores and never starts
/// with a digit.
#[must_use]
pub fn sanitize_identifier(s: &str) -> String {
    let mut result: String = s
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if result.chars().next().is_none_or(|c| c.is_ascii_digit()) {
        result.insert(0, '_');
    }
    result
}

/// Per-run occurrence counter for generated field names.
///
/// A generation run owns one counter; starting a new run means starting from
/// a new counter. Every name handed out is recorded, so a suffixed name never
/// repeats a name issued earlier in the run.
#[derive(Debug, Clone, Default)]
pub struct FieldNameCounter {
    counts: HashMap<String, usize>,
    issued: HashSet<String>,
}

impl FieldNameCounter {
    /// Creates an empty counter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `base` on its first request, then `base` suffixed with the
    /// occurrence number.
    ///
    /// When the suffixed name was already issued (`Item`, `Item`, `Item2`),
    /// the suffix keeps counting up until the name is free.
    pub fn unique(&mut self, base: &str) -> String {
        let count = self.counts.entry(base.to_string()).or_insert(0);
        *count += 1;
        if *count == 1 && !self.issued.contains(base) {
            self.issued.insert(base.to_string());
            return base.to_string();
        }

        let mut suffix = (*count).max(2);
        let mut name = format!("{base}{suffix}");
        while self.issued.contains(&name) {
            suffix += 1;
            name = format!("{base}{suffix}");
        }
        self.issued.insert(name.clone());
        name
    }

    /// Returns how many times `base` has been requested.
    #[must_use]
    pub fn count(&self, base: &str) -> usize {
        self.counts.get(base).copied().unwrap_or(0)
    }

    /// Returns the number of distinct names seen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if no name has been requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("XMLHttpRequest"), "xml_http_request");
        assert_eq!(to_snake_case("UserID"), "user_id");
        assert_eq!(to_snake_case("already_snake"), "already_snake");
        assert_eq!(to_snake_case("kebab-case"), "kebab_case");
        assert_eq!(to_snake_case("clOrdId"), "cl_ord_id");
        assert_eq!(to_snake_case("Max35Text"), "max35_text");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_to_snake_case_idempotent() {
        let inputs = [
            "XMLHttpRequest",
            "UserID",
            "already_snake",
            "kebab-case",
            "ABCd",
            "GrpHdr",
            "MDEntryPx",
            "a1B2c3",
            "Ünïcode-Näme",
            "__double__",
            "a.B",
            "ÀBc",
            "ÀÉÎõ",
            "xml:lang",
            "Some Field.Name",
            "HTTP2Server",
            "x-Y_z",
            "ÉtatCivil",
            "9Lives",
            "",
        ];
        for input in inputs {
            let once = to_snake_case(input);
            assert_eq!(to_snake_case(&once), once, "not idempotent for {input}");
        }
    }

    #[test]
    fn test_make_first_upper_case() {
        assert_eq!(make_first_upper_case("amount"), "Amount");
        assert_eq!(make_first_upper_case("Amount"), "Amount");
        assert_eq!(make_first_upper_case(""), "");
        assert_eq!(make_first_upper_case("éclair"), "Éclair");
        assert_eq!(to_title("ßtraße"), "SStraße");
        assert_eq!(to_title("日本"), "日本");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("message_header"), "MessageHeader");
        assert_eq!(to_pascal_case("side"), "Side");
        assert_eq!(to_pascal_case("order-type"), "OrderType");
        assert_eq!(to_pascal_case("GrpHdr"), "GrpHdr");
    }

    #[test]
    fn test_sanitize_identifier() {
        assert_eq!(sanitize_identifier("xml:lang"), "xml_lang");
        assert_eq!(sanitize_identifier("a.b c"), "a_b_c");
        assert_eq!(sanitize_identifier("3DSecure"), "_3DSecure");
        assert_eq!(sanitize_identifier(""), "_");
        assert_eq!(sanitize_identifier("Valid_Name1"), "Valid_Name1");
    }

    #[test]
    fn test_field_name_counter() {
        let mut counter = FieldNameCounter::new();
        let first = counter.unique("Item");
        let second = counter.unique("Item");
        let third = counter.unique("Item");

        assert_eq!(first, "Item");
        assert_eq!(second, "Item2");
        assert_eq!(third, "Item3");
        assert_ne!(second, third);
        assert_eq!(counter.count("Item"), 3);
        assert_eq!(counter.unique("Other"), "Other");
        assert_eq!(counter.len(), 2);

        let mut fresh = FieldNameCounter::new();
        assert!(fresh.is_empty());
        assert_eq!(fresh.unique("Item"), "Item");
    }

    #[test]
    fn test_field_name_counter_skips_issued_names() {
        let mut counter = FieldNameCounter::new();
        let names = [
            counter.unique("Item"),
            counter.unique("Item"),
            counter.unique("Item2"),
            counter.unique("Item"),
        ];

        assert_eq!(names, ["Item", "Item2", "Item22", "Item3"]);
        assert_eq!(counter.count("Item2"), 1);
    }

    #[test]
    fn test_field_name_counter_base_taken_by_suffix() {
        let mut counter = FieldNameCounter::new();
        assert_eq!(counter.unique("Item2"), "Item2");
        assert_eq!(counter.unique("Item"), "Item");
        assert_eq!(counter.unique("Item"), "Item3");
    }
}
