//! Load-time data-quality reporting.
//!
//! The loader never repairs the source silently: every anomaly it finds is
//! collected here and handed back alongside the constructed store. The core
//! formats nothing user-facing — consumers decide whether and how to
//! surface the report.

use serde::Serialize;

/// A required field was missing (or empty) on a record, identified by its
/// position in the source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaViolation {
    /// Index of the category in the source `categories` array.
    pub category_index: usize,
    /// Index of the herb within the category, `None` when the category
    /// record itself is malformed.
    pub herb_index: Option<usize>,
    /// Name of the missing field, in source (camelCase) spelling.
    pub field: String,
}

impl std::fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.herb_index {
            Some(hi) => write!(
                f,
                "category[{}].herbs[{}]: missing required field '{}'",
                self.category_index, hi, self.field
            ),
            None => write!(
                f,
                "category[{}]: missing required field '{}'",
                self.category_index, self.field
            ),
        }
    }
}

/// Two herb records collided on the same `(category, id)` pair.
///
/// Both records are retained in the store (the second is never merged or
/// discarded); lookups by id resolve to the first occurrence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateHerbIdentity {
    pub category_id: String,
    pub herb_id: String,
    /// Herb index of the first occurrence within the category.
    pub first_index: usize,
    /// Herb index of the colliding occurrence.
    pub second_index: usize,
    /// Whether the two records carry identical content. Differing content
    /// means the id genuinely refers to two distinct variants.
    pub identical_content: bool,
}

/// Soft findings: suspicious but legal data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DataWarning {
    /// A herb's `category` field does not match the id of the category that
    /// encloses it.
    #[serde(rename_all = "camelCase")]
    CategoryMismatch {
        category_id: String,
        herb_id: String,
        declared: String,
    },
    /// The same herb id appears under more than one category. Expected in
    /// the source data (e.g. "holy-basil" variants), so a warning only.
    #[serde(rename_all = "camelCase")]
    CrossCategoryId {
        herb_id: String,
        categories: Vec<String>,
    },
    /// An id does not match the lowercase-hyphenated slug convention.
    #[serde(rename_all = "camelCase")]
    MalformedSlug { id: String },
}

/// Everything the loader found while constructing a store.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadReport {
    pub violations: Vec<SchemaViolation>,
    pub duplicates: Vec<DuplicateHerbIdentity>,
    pub warnings: Vec<DataWarning>,
}

impl LoadReport {
    /// True when nothing at all was flagged.
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty() && self.duplicates.is_empty() && self.warnings.is_empty()
    }

    /// True when the report would abort a strict-mode load.
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violation_display_includes_position() {
        let v = SchemaViolation {
            category_index: 2,
            herb_index: Some(5),
            field: "scientificName".into(),
        };
        assert_eq!(
            v.to_string(),
            "category[2].herbs[5]: missing required field 'scientificName'"
        );

        let c = SchemaViolation {
            category_index: 0,
            herb_index: None,
            field: "id".into(),
        };
        assert_eq!(c.to_string(), "category[0]: missing required field 'id'");
    }

    #[test]
    fn empty_report_is_clean() {
        let report = LoadReport::default();
        assert!(report.is_clean());
        assert!(!report.has_violations());
    }

    #[test]
    fn warnings_serialize_tagged() {
        let warning = DataWarning::CategoryMismatch {
            category_id: "brain-herbs".into(),
            herb_id: "ginkgo".into(),
            declared: "memory-herbs".into(),
        };
        let value = serde_json::to_value(&warning).unwrap();
        assert_eq!(value["kind"], "categoryMismatch");
        assert_eq!(value["categoryId"], "brain-herbs");
    }
}
