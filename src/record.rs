//! Drug record input type.

use serde::{Deserialize, Serialize};

/// A single drug row as exported from the upstream drug store.
///
/// All fields are optional text; absent or null fields are treated as empty
/// strings when the corpus text is composed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrugRecord {
    pub name: Option<String>,
    pub description: Option<String>,
    pub side_effects: Option<String>,
    pub therapeutic_class: Option<String>,
    pub action_class: Option<String>,
    pub chemical_class: Option<String>,
    pub substitutes: Option<String>,
    pub habit_forming: Option<String>,
}

impl DrugRecord {
    /// The record's name with surrounding whitespace removed.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("").trim()
    }

    /// Key used for first-occurrence-wins deduplication: the lowercase,
    /// trimmed name.
    pub fn dedup_key(&self) -> String {
        self.display_name().to_lowercase()
    }

    /// Compose the textual profile for this drug.
    ///
    /// Non-empty fields are joined with single spaces in a fixed order (name,
    /// description, side effects, therapeutic class, action class, chemical
    /// class, substitutes, habit forming) and the result is lowercased.
    pub fn profile_text(&self) -> String {
        let parts = [
            &self.name,
            &self.description,
            &self.side_effects,
            &self.therapeutic_class,
            &self.action_class,
            &self.chemical_class,
            &self.substitutes,
            &self.habit_forming,
        ];
        parts
            .iter()
            .filter_map(|part| part.as_deref())
            .filter(|part| !part.is_empty())
            .collect::<Vec<&str>>()
            .join(" ")
            .to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_text_joins_fields_in_order_and_lowercases() {
        let record = DrugRecord {
            name: Some("Aspirin".to_string()),
            description: Some("Pain relief".to_string()),
            therapeutic_class: Some("NSAID".to_string()),
            ..Default::default()
        };
        assert_eq!(record.profile_text(), "aspirin pain relief nsaid");
    }

    #[test]
    fn profile_text_skips_absent_fields() {
        let record = DrugRecord::default();
        assert_eq!(record.profile_text(), "");
    }

    #[test]
    fn dedup_key_folds_case_and_whitespace() {
        let record = DrugRecord {
            name: Some("  Aspirin ".to_string()),
            ..Default::default()
        };
        assert_eq!(record.dedup_key(), "aspirin");
        assert_eq!(record.display_name(), "Aspirin");
    }
}
