//! Surface-form pattern construction
//!
//! Builds one alternation pattern per catalog record covering every
//! surface form the record may take in ingredient text: the canonical
//! name, a parenthetical-stripped short name, the literal id, and the
//! INS/E/bare-code spellings of a numeric regulatory code. All literal
//! fragments are escaped so punctuation in regulatory names cannot
//! corrupt the expression.

use crate::catalog::AdditiveRecord;

/// Extract the bare regulatory code from an `INS`-prefixed id.
///
/// `"INS 102"` -> `"102"`, `"INS-924a"` -> `"924a"`. Ids without an
/// INS prefix have no code spelling.
pub fn numeric_code(id: &str) -> Option<&str> {
    let rest = id.trim().strip_prefix("INS")?;
    let code = rest.trim_start_matches([' ', '-']).trim();
    if code.is_empty() {
        None
    } else {
        Some(code)
    }
}

/// Name with a trailing parenthetical stripped, when that leaves a
/// different, non-empty form (`"MSG (Monosodium Glutamate)"` -> `"MSG"`).
pub fn short_name(name: &str) -> Option<&str> {
    let short = name.split('(').next()?.trim();
    if short.is_empty() || short == name.trim() {
        None
    } else {
        Some(short)
    }
}

/// Build the alternation pattern for one record.
///
/// Returns `None` when the record offers no usable surface form
/// (empty name and no numeric code) — the caller skips such records.
pub fn pattern_for(record: &AdditiveRecord) -> Option<String> {
    let mut alternatives = Vec::new();

    let name = record.name.trim();
    if !name.is_empty() {
        alternatives.push(regex::escape(name));
        if let Some(short) = short_name(name) {
            alternatives.push(regex::escape(short));
        }
    }

    if let Some(code) = numeric_code(&record.id) {
        let escaped = regex::escape(code);
        alternatives.push(regex::escape(record.id.trim())); // INS 102
        alternatives.push(format!(r"INS[\s\-]*{escaped}")); // INS-102, INS102
        alternatives.push(format!(r"E\s*{escaped}")); // E 102, E102
        alternatives.push(format!(r"\b{escaped}\b")); // bare 102, whole word only
    }

    if alternatives.is_empty() {
        None
    } else {
        Some(alternatives.join("|"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{RegulatoryStatus, RiskLevel};
    use regex::RegexBuilder;

    fn make_record(id: &str, name: &str) -> AdditiveRecord {
        AdditiveRecord {
            id: id.to_string(),
            name: name.to_string(),
            risk_level: RiskLevel::Green,
            regulatory_status: RegulatoryStatus::Permitted,
            impact: 0.0,
            category: String::new(),
            description: String::new(),
            tags: Vec::new(),
            interaction_partners: Vec::new(),
        }
    }

    fn compile(pattern: &str) -> regex::Regex {
        RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .unwrap()
    }

    #[test]
    fn numeric_code_extraction() {
        assert_eq!(numeric_code("INS 102"), Some("102"));
        assert_eq!(numeric_code("INS-924a"), Some("924a"));
        assert_eq!(numeric_code("INS102"), Some("102"));
        assert_eq!(numeric_code("CUSTOM-1"), None);
        assert_eq!(numeric_code("INS "), None);
    }

    #[test]
    fn short_name_stripping() {
        assert_eq!(short_name("MSG (Monosodium Glutamate)"), Some("MSG"));
        assert_eq!(short_name("Tartrazine"), None);
        assert_eq!(short_name("(anonymous)"), None);
    }

    #[test]
    fn code_spellings_all_match() {
        let record = make_record("INS 102", "Tartrazine");
        let re = compile(&pattern_for(&record).unwrap());

        assert!(re.is_match("contains tartrazine"));
        assert!(re.is_match("INS 102"));
        assert!(re.is_match("ins-102"));
        assert!(re.is_match("INS102"));
        assert!(re.is_match("E102"));
        assert!(re.is_match("e 102"));
        assert!(re.is_match("colour (102) added"));
    }

    #[test]
    fn bare_code_is_whole_word_only() {
        let record = make_record("INS 102", "Tartrazine");
        let re = compile(&pattern_for(&record).unwrap());

        assert!(!re.is_match("contains 1021mg of filler"));
        assert!(!re.is_match("batch 51020"));
        assert!(re.is_match("colour 102."));
    }

    #[test]
    fn punctuated_names_are_escaped() {
        let record = make_record("CUSTOM-7", "1,4-Dioxane (trace)");
        let pattern = pattern_for(&record).unwrap();
        let re = compile(&pattern);

        assert!(re.is_match("may contain 1,4-dioxane (trace)"));
        // The comma and parens must stay literal, not become regex syntax
        assert!(!re.is_match("144-Dioxane trace"));
    }

    #[test]
    fn no_usable_surface_form() {
        let record = make_record("CUSTOM-9", "   ");
        assert!(pattern_for(&record).is_none());

        // Empty name but a numeric code still yields a pattern
        let record = make_record("INS 415", "");
        let re = compile(&pattern_for(&record).unwrap());
        assert!(re.is_match("thickener 415"));
    }
}
