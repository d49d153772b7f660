//! Pure text rendering of lookup outcomes.
//!
//! Kept separate from the lookup itself so both stages can be tested on their
//! own: resolve first, then render whatever came back.

use crate::ConditionRecord;

/// Renders the detail panel for a found condition record.
///
/// Lists the name, the comma-joined symptoms and prevention steps, and the
/// treatment. The illustration path is omitted from the text rendering.
pub fn condition_details(record: &ConditionRecord) -> String {
    let mut out = String::new();
    out.push_str(&record.name);
    out.push('\n');
    out.push_str("Symptoms: ");
    out.push_str(&record.symptoms.join(", "));
    out.push('\n');
    out.push_str("Prevention: ");
    out.push_str(&record.prevention.join(", "));
    out.push('\n');
    out.push_str("Treatment: ");
    out.push_str(&record.treatment);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_details_joins_lists() {
        let record = ConditionRecord {
            name: "Diabetes".into(),
            symptoms: vec!["thirst".into(), "fatigue".into()],
            prevention: vec!["diet".into()],
            treatment: "insulin".into(),
            imagesrc: String::new(),
        };

        let text = condition_details(&record);
        assert!(text.starts_with("Diabetes\n"));
        assert!(text.contains("Symptoms: thirst, fatigue"));
        assert!(text.contains("Prevention: diet"));
        assert!(text.contains("Treatment: insulin"));
    }
}
