use serde::{Deserialize, Serialize};

/// Tri-state availability of a park or a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldStatus {
    Open,
    Closed,
    Unknown,
}

impl FieldStatus {
    /// Maps the free-text condition published by Ocee Park, e.g. `"OPEN"` or
    /// `"Closed - Rain"`, in any letter case. Callers pass the text already
    /// trimmed.
    pub fn from_condition_text(text: &str) -> Self {
        let text = text.to_uppercase();

        if text == "OPEN" {
            FieldStatus::Open
        } else if text == "CLOSED" || text.contains("CLOSE") {
            FieldStatus::Closed
        } else {
            FieldStatus::Unknown
        }
    }
}

/// Classifies a Blue Sombrero `class` attribute such as `"fs-item fs-open"`.
///
/// Open tokens are checked before close tokens.
pub fn classify(raw_class_attribute: &str) -> FieldStatus {
    let classes = raw_class_attribute
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ");

    if classes.contains("fs-open") || classes.contains("fs-dt-open") {
        FieldStatus::Open
    } else if classes.contains("fs-close") || classes.contains("fs-dt-close") {
        FieldStatus::Closed
    } else {
        FieldStatus::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_tokens_classify_as_open() {
        assert_eq!(classify("fs-item fs-open"), FieldStatus::Open);
        assert_eq!(classify("fs-dt-open"), FieldStatus::Open);
        assert_eq!(classify("fs-dt-item fs-dt-open extra"), FieldStatus::Open);
    }

    #[test]
    fn close_tokens_classify_as_closed() {
        assert_eq!(classify("fs-item fs-close"), FieldStatus::Closed);
        assert_eq!(classify("fs-dt-close"), FieldStatus::Closed);
        assert_eq!(classify("fs-item fs-closed"), FieldStatus::Closed);
    }

    #[test]
    fn open_wins_when_both_tokens_present() {
        assert_eq!(classify("fs-close fs-open"), FieldStatus::Open);
    }

    #[test]
    fn missing_tokens_classify_as_unknown() {
        assert_eq!(classify(""), FieldStatus::Unknown);
        assert_eq!(classify("fs-item"), FieldStatus::Unknown);
        assert_eq!(classify("fs-dt-delay"), FieldStatus::Unknown);
    }

    #[test]
    fn whitespace_does_not_change_the_result() {
        assert_eq!(classify("  fs-item   fs-open  "), classify("fs-item fs-open"));
        assert_eq!(classify("\tfs-item\n fs-close "), FieldStatus::Closed);
    }

    #[test]
    fn condition_text_mapping() {
        assert_eq!(FieldStatus::from_condition_text("OPEN"), FieldStatus::Open);
        assert_eq!(FieldStatus::from_condition_text("open"), FieldStatus::Open);
        assert_eq!(FieldStatus::from_condition_text("CLOSED"), FieldStatus::Closed);
        assert_eq!(
            FieldStatus::from_condition_text("Closes at 5pm"),
            FieldStatus::Closed
        );
        assert_eq!(
            FieldStatus::from_condition_text("Closed - Rain"),
            FieldStatus::Closed
        );
        // "CLOSING" does not contain "CLOSE".
        assert_eq!(
            FieldStatus::from_condition_text("Closing at 5pm"),
            FieldStatus::Unknown
        );
        assert_eq!(
            FieldStatus::from_condition_text("OPEN - LIMITED"),
            FieldStatus::Unknown
        );
        assert_eq!(FieldStatus::from_condition_text("DELAYED"), FieldStatus::Unknown);
    }

    #[test]
    fn serializes_as_bare_variant_names() {
        let json = serde_json::to_string(&[
            FieldStatus::Open,
            FieldStatus::Closed,
            FieldStatus::Unknown,
        ])
        .unwrap();
        assert_eq!(json, r#"["Open","Closed","Unknown"]"#);
    }
}
