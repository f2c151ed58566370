//! Boundary input shapes for the catalog source file.
//!
//! The source JSON is not fully regular: `cautions` is either a single text
//! block or a sequence, and `benefitScores` is either an array of
//! `{category, score}` pairs or an object map. Both encodings are accepted
//! here via `#[serde(untagged)]` and collapsed to one canonical shape by the
//! loader, so the polymorphism never reaches [`crate::model`].
//!
//! Required fields are wrapped in `Option` so a missing field surfaces as a
//! positioned [`crate::report::SchemaViolation`] instead of aborting the
//! whole parse.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::model::{
    ComplementaryHerb, DetailedPreparation, SafetyProfile, ScientificResearch,
};

/// Top-level source file: `{ "categories": [ ... ] }`.
#[derive(Debug, Deserialize)]
pub struct RawCatalogFile {
    pub categories: Vec<RawCategory>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCategory {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    #[serde(default)]
    pub herbs: Vec<RawHerb>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawHerb {
    pub id: Option<String>,
    pub name: Option<String>,
    pub scientific_name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub benefits: Option<Vec<String>>,
    pub usage: Option<String>,
    pub cautions: Option<RawCautions>,
    pub preparations: Option<Vec<RawPreparation>>,
    pub benefit_scores: Option<RawBenefitScores>,
    pub complementary_herbs: Option<Vec<ComplementaryHerb>>,
    pub origin: Option<String>,
    pub harvest_season: Option<String>,
    pub sustainability_info: Option<String>,
    pub growing_info: Option<String>,
    pub image: Option<String>,
    pub parts: Option<Vec<String>>,
    pub traditional_uses: Option<Vec<String>>,
    pub constituents: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub audience: Option<Vec<String>>,
    pub safety_profile: Option<SafetyProfile>,
    pub scientific_research: Option<Vec<ScientificResearch>>,
    pub detailed_preparations: Option<Vec<DetailedPreparation>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPreparation {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub description: Option<String>,
    pub dosage: Option<String>,
    pub steps: Option<Vec<String>>,
}

/// `cautions`: either one text block or a sequence of items.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawCautions {
    One(String),
    Many(Vec<String>),
}

impl RawCautions {
    /// Canonical form: always a sequence. Wrapping a lone string is
    /// idempotent — normalizing already-normalized input is a no-op.
    pub fn into_canonical(self) -> Vec<String> {
        match self {
            RawCautions::One(text) => vec![text],
            RawCautions::Many(items) => items,
        }
    }
}

/// `benefitScores`: either `[{"category": "Energy", "score": 90}, ...]` or
/// `{"Energy": 90, ...}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawBenefitScores {
    Pairs(Vec<RawBenefitScore>),
    Map(BTreeMap<String, f64>),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBenefitScore {
    pub category: String,
    pub score: f64,
}

impl RawBenefitScores {
    /// Canonical form: name → score mapping. Equivalent inputs in either
    /// encoding produce identical mappings; for repeated pair keys the last
    /// entry wins.
    pub fn into_canonical(self) -> BTreeMap<String, f64> {
        match self {
            RawBenefitScores::Pairs(pairs) => pairs
                .into_iter()
                .map(|pair| (pair.category, pair.score))
                .collect(),
            RawBenefitScores::Map(map) => map,
        }
    }
}
