//! Canonical catalog records.
//!
//! These are the post-normalization shapes: `cautions` is always a sequence
//! and `benefit_scores` is always a name → score mapping. The polymorphic
//! source encodings live in [`crate::raw`] and never escape the loader.
//!
//! All records are immutable after construction; the store hands out shared
//! references only.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A named grouping of herbs sharing a therapeutic theme (e.g. "brain-herbs").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HerbCategory {
    /// Unique slug across the whole catalog, e.g. "adaptogens".
    pub id: String,
    /// Display name, e.g. "Adaptogens".
    pub name: String,
    /// Display description. May be empty.
    pub description: String,
    /// Presentation hint, opaque to the core. May be empty.
    pub icon: String,
    /// Presentation hint, opaque to the core. May be empty.
    pub color: String,
    /// Herbs in display order. May be empty ("immune-support" ships empty).
    pub herbs: Vec<Herb>,
}

/// A single catalog entry describing one plant and its metadata.
///
/// `id` is a slug that is unique within a category in well-formed data, but
/// the loader tolerates and reports duplicates rather than rejecting them,
/// so `(category, id)` is the practical identity key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Herb {
    pub id: String,
    pub name: String,
    pub scientific_name: String,
    /// Id of the owning category. Checked (softly) against the enclosing
    /// `HerbCategory.id` at load time.
    pub category: String,
    pub description: String,
    /// Short benefit claims, display order.
    pub benefits: Vec<String>,
    /// Free-text usage guidance.
    pub usage: String,
    /// Always a sequence after normalization, even when the source held a
    /// single text block.
    pub cautions: Vec<String>,
    pub preparations: Vec<Preparation>,
    /// Benefit-category name → score (implied 0–100, not enforced).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefit_scores: Option<BTreeMap<String, f64>>,
    /// Weak by-name references to synergistic herbs; never resolved to ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complementary_herbs: Option<Vec<ComplementaryHerb>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub harvest_season: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sustainability_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub growing_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parts: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traditional_uses: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constituents: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_profile: Option<SafetyProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scientific_research: Option<Vec<ScientificResearch>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detailed_preparations: Option<Vec<DetailedPreparation>>,
}

impl Herb {
    /// Case-sensitive exact tag membership, matching the source convention.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags
            .as_deref()
            .is_some_and(|tags| tags.iter().any(|t| t == tag))
    }
}

/// A method of consuming or using an herb (tea, tincture, capsule, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Preparation {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<String>>,
}

/// Weak, informational cross-reference to another herb by display name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComplementaryHerb {
    pub name: String,
    pub description: String,
}

/// Safety metadata for an herb.
///
/// `pregnancy_safe` (boolean) and `pregnancy_safety` (free text) come from
/// independent source fields and may disagree; both are preserved as-is,
/// never reconciled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SafetyProfile {
    /// Free-form classification, e.g. "Generally Safe". Not an enum in the
    /// source data.
    pub safety_rating: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side_effects: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contraindications: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interactions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pregnancy_safety: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children_safety: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dosage_limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pregnancy_safe: Option<bool>,
}

/// A research citation attached to an herb.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScientificResearch {
    pub title: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Richer alternative to [`Preparation`] with full ingredient and
/// instruction lists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DetailedPreparation {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preparation_time: Option<String>,
}
