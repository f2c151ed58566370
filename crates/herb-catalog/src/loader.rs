//! Catalog loader: parse, validate, normalize, report.
//!
//! Loading is eager and happens exactly once per store. The pipeline:
//!
//! 1. Parse the source JSON into [`crate::raw`] boundary shapes.
//! 2. Validate required fields per record, by source position.
//! 3. Normalize the polymorphic fields (`cautions`, `benefitScores`) to
//!    their canonical forms.
//! 4. Scan for duplicate `(category, id)` pairs and soft referential
//!    problems; record everything in a [`LoadReport`].
//!
//! Nothing is repaired silently and nothing panics on bad data: lenient
//! mode skips offending records, strict mode refuses the whole catalog.

use std::collections::BTreeMap;
use std::path::Path;

use regex::Regex;
use sha2::{Digest, Sha256};
use tracing::{info, warn};

use crate::config::{CatalogConfig, ValidationMode};
use crate::error::CatalogError;
use crate::model::{Herb, HerbCategory, Preparation};
use crate::raw::{RawCatalogFile, RawHerb};
use crate::report::{DataWarning, DuplicateHerbIdentity, LoadReport, SchemaViolation};
use crate::store::CatalogStore;

/// The sample dataset shipped with the crate, preserving the known source
/// anomalies (duplicate ids, empty category, both polymorphic encodings).
const BUILTIN_DATASET: &str = include_str!("../data/herbs.json");

/// Build a store from a JSON string.
///
/// Returns the store together with the load report. In strict mode any
/// schema violation turns into [`CatalogError::Rejected`] carrying the full
/// report; duplicates and warnings are never fatal in either mode.
pub fn load_catalog(
    source: &str,
    config: &CatalogConfig,
) -> Result<(CatalogStore, LoadReport), CatalogError> {
    let fingerprint = fingerprint(source);
    let raw: RawCatalogFile = serde_json::from_str(source)?;
    let slug_re = Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("valid regex");

    let mut report = LoadReport::default();
    let mut categories: Vec<HerbCategory> = Vec::with_capacity(raw.categories.len());
    // herb id -> category ids it appears under, for cross-category reuse.
    let mut id_homes: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for (ci, raw_cat) in raw.categories.into_iter().enumerate() {
        let id = take_text(raw_cat.id, "id", ci, None, &mut report);
        let name = take_text(raw_cat.name, "name", ci, None, &mut report);
        let (Some(id), Some(name)) = (id, name) else {
            // Malformed category record; its herbs have no home to attach to.
            continue;
        };

        if !slug_re.is_match(&id) {
            report
                .warnings
                .push(DataWarning::MalformedSlug { id: id.clone() });
        }

        // (source herb index, canonical record) for every herb that survived
        // validation; positions stay source-relative for the report.
        let mut kept: Vec<(usize, Herb)> = Vec::with_capacity(raw_cat.herbs.len());
        for (hi, raw_herb) in raw_cat.herbs.into_iter().enumerate() {
            if let Some(herb) = convert_herb(raw_herb, ci, hi, &mut report) {
                kept.push((hi, herb));
            }
        }

        // Duplicate (category, id) detection among the retained records.
        // Both occurrences stay in the store; lookups resolve first-wins.
        let mut first_seen: BTreeMap<String, (usize, usize)> = BTreeMap::new();
        for (vec_index, (hi, herb)) in kept.iter().enumerate() {
            match first_seen.get(herb.id.as_str()) {
                None => {
                    first_seen.insert(herb.id.clone(), (*hi, vec_index));
                }
                Some(&(first_hi, first_vec_index)) => {
                    let identical = kept[first_vec_index].1 == *herb;
                    warn!(
                        category = %id,
                        herb = %herb.id,
                        first_index = first_hi,
                        second_index = hi,
                        identical,
                        "duplicate herb identity"
                    );
                    report.duplicates.push(DuplicateHerbIdentity {
                        category_id: id.clone(),
                        herb_id: herb.id.clone(),
                        first_index: first_hi,
                        second_index: *hi,
                        identical_content: identical,
                    });
                }
            }
        }

        for (_, herb) in &kept {
            // Soft referential check: the declared category must match the
            // enclosing one. Mismatches are reported, never rejected.
            if herb.category != id {
                warn!(
                    category = %id,
                    herb = %herb.id,
                    declared = %herb.category,
                    "herb category does not match enclosing category"
                );
                report.warnings.push(DataWarning::CategoryMismatch {
                    category_id: id.clone(),
                    herb_id: herb.id.clone(),
                    declared: herb.category.clone(),
                });
            }

            if !slug_re.is_match(&herb.id) {
                report
                    .warnings
                    .push(DataWarning::MalformedSlug { id: herb.id.clone() });
            }

            let homes = id_homes.entry(herb.id.clone()).or_default();
            if !homes.contains(&id) {
                homes.push(id.clone());
            }
        }

        categories.push(HerbCategory {
            id,
            name,
            description: raw_cat.description.unwrap_or_default(),
            icon: raw_cat.icon.unwrap_or_default(),
            color: raw_cat.color.unwrap_or_default(),
            herbs: kept.into_iter().map(|(_, herb)| herb).collect(),
        });
    }

    // Same id under multiple categories is expected in the source (the
    // "holy-basil" variants), so it is recorded but never fatal.
    for (herb_id, homes) in id_homes {
        if homes.len() > 1 {
            report.warnings.push(DataWarning::CrossCategoryId {
                herb_id,
                categories: homes,
            });
        }
    }

    if config.mode == ValidationMode::Strict && report.has_violations() {
        return Err(CatalogError::Rejected { report });
    }

    let store = CatalogStore::new(categories, fingerprint, config.include_empty_categories);
    info!(
        categories = store.category_count(),
        herbs = store.herb_count(),
        violations = report.violations.len(),
        duplicates = report.duplicates.len(),
        warnings = report.warnings.len(),
        fingerprint = %store.fingerprint(),
        "catalog loaded"
    );
    Ok((store, report))
}

/// Build a store from a file on disk. The read is the only I/O the crate
/// performs and it happens once, here.
pub fn load_path(
    path: impl AsRef<Path>,
    config: &CatalogConfig,
) -> Result<(CatalogStore, LoadReport), CatalogError> {
    let source = std::fs::read_to_string(path)?;
    load_catalog(&source, config)
}

/// Build a store from the embedded sample dataset.
pub fn builtin(config: &CatalogConfig) -> Result<(CatalogStore, LoadReport), CatalogError> {
    load_catalog(BUILTIN_DATASET, config)
}

/// Validate and normalize one herb record.
///
/// Every missing required field produces its own positioned violation; the
/// record is dropped if any required field is absent. Optional fields pass
/// through untouched — absent stays absent, never defaulted.
fn convert_herb(
    raw: RawHerb,
    ci: usize,
    hi: usize,
    report: &mut LoadReport,
) -> Option<Herb> {
    let id = take_text(raw.id, "id", ci, Some(hi), report);
    let name = take_text(raw.name, "name", ci, Some(hi), report);
    let scientific_name = take_text(raw.scientific_name, "scientificName", ci, Some(hi), report);
    let category = take_text(raw.category, "category", ci, Some(hi), report);
    let description = take_text(raw.description, "description", ci, Some(hi), report);
    let benefits = take_present(raw.benefits, "benefits", ci, Some(hi), report);
    let usage = take_present(raw.usage, "usage", ci, Some(hi), report);
    let cautions = take_present(raw.cautions, "cautions", ci, Some(hi), report);
    let raw_preparations = take_present(raw.preparations, "preparations", ci, Some(hi), report);

    let (
        Some(id),
        Some(name),
        Some(scientific_name),
        Some(category),
        Some(description),
        Some(benefits),
        Some(usage),
        Some(cautions),
        Some(raw_preparations),
    ) = (
        id,
        name,
        scientific_name,
        category,
        description,
        benefits,
        usage,
        cautions,
        raw_preparations,
    )
    else {
        return None;
    };

    let mut preparations = Vec::with_capacity(raw_preparations.len());
    let mut preparations_ok = true;
    for (pi, prep) in raw_preparations.into_iter().enumerate() {
        let kind = take_text(
            prep.kind,
            &format!("preparations[{pi}].type"),
            ci,
            Some(hi),
            report,
        );
        let prep_description = take_text(
            prep.description,
            &format!("preparations[{pi}].description"),
            ci,
            Some(hi),
            report,
        );
        match (kind, prep_description) {
            (Some(kind), Some(description)) => preparations.push(Preparation {
                kind,
                description,
                dosage: prep.dosage,
                steps: prep.steps,
            }),
            _ => preparations_ok = false,
        }
    }
    if !preparations_ok {
        return None;
    }

    Some(Herb {
        id,
        name,
        scientific_name,
        category,
        description,
        benefits,
        usage,
        cautions: cautions.into_canonical(),
        preparations,
        benefit_scores: raw.benefit_scores.map(|scores| scores.into_canonical()),
        complementary_herbs: raw.complementary_herbs,
        origin: raw.origin,
        harvest_season: raw.harvest_season,
        sustainability_info: raw.sustainability_info,
        growing_info: raw.growing_info,
        image: raw.image,
        parts: raw.parts,
        traditional_uses: raw.traditional_uses,
        constituents: raw.constituents,
        tags: raw.tags,
        audience: raw.audience,
        safety_profile: raw.safety_profile,
        scientific_research: raw.scientific_research,
        detailed_preparations: raw.detailed_preparations,
    })
}

/// Required text field: present and non-blank, or one recorded violation.
fn take_text(
    value: Option<String>,
    field: &str,
    ci: usize,
    hi: Option<usize>,
    report: &mut LoadReport,
) -> Option<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Some(text),
        _ => {
            record_violation(field, ci, hi, report);
            None
        }
    }
}

/// Required field where presence is enough (empty sequences are legal).
fn take_present<T>(
    value: Option<T>,
    field: &str,
    ci: usize,
    hi: Option<usize>,
    report: &mut LoadReport,
) -> Option<T> {
    if value.is_none() {
        record_violation(field, ci, hi, report);
    }
    value
}

fn record_violation(field: &str, ci: usize, hi: Option<usize>, report: &mut LoadReport) {
    let violation = SchemaViolation {
        category_index: ci,
        herb_index: hi,
        field: field.to_string(),
    };
    warn!(%violation, "schema violation");
    report.violations.push(violation);
}

fn fingerprint(source: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(source.as_bytes());
    format!("{:x}", hasher.finalize())
}
