//! HTTP read surface over a loaded catalog store.
//!
//! Routes:
//! - `GET /categories` — ordered category summaries
//! - `GET /categories/{id}` — full category
//! - `GET /categories/{id}/herbs` — herbs of a category
//! - `GET /herbs` — all herbs, filterable with `?tag=` / `?category=`
//! - `GET /herbs/{category_id}/{herb_id}` — single herb
//! - `GET /report` — the load report, for callers that surface diagnostics
//! - `GET /healthz` — dataset fingerprint and record counts
//!
//! The store is immutable after startup, so handlers share it through a
//! plain `Arc` — no locking, every request is an in-memory lookup.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};

use herb_catalog::{CatalogStore, Herb, HerbCategory, LoadReport};

pub struct AppState {
    pub store: CatalogStore,
    pub report: LoadReport,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}", get(get_category))
        .route("/categories/{id}/herbs", get(list_category_herbs))
        .route("/herbs", get(list_herbs))
        .route("/herbs/{category_id}/{herb_id}", get(get_herb))
        .route("/report", get(get_report))
        .route("/healthz", get(healthz))
        .with_state(state)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CategorySummary {
    id: String,
    name: String,
    description: String,
    icon: String,
    color: String,
    herb_count: usize,
}

impl From<&HerbCategory> for CategorySummary {
    fn from(category: &HerbCategory) -> Self {
        Self {
            id: category.id.clone(),
            name: category.name.clone(),
            description: category.description.clone(),
            icon: category.icon.clone(),
            color: category.color.clone(),
            herb_count: category.herbs.len(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct HerbFilter {
    tag: Option<String>,
    category: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Health {
    fingerprint: String,
    categories: usize,
    herbs: usize,
    violations: usize,
    duplicates: usize,
    warnings: usize,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

fn not_found(message: String) -> Response {
    (StatusCode::NOT_FOUND, Json(ErrorBody { error: message })).into_response()
}

async fn list_categories(State(state): State<Arc<AppState>>) -> Json<Vec<CategorySummary>> {
    let summaries = state
        .store
        .categories()
        .into_iter()
        .map(CategorySummary::from)
        .collect();
    Json(summaries)
}

async fn get_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    match state.store.category(&id) {
        Some(category) => Json(category.clone()).into_response(),
        None => not_found(format!("category not found: {id}")),
    }
}

async fn list_category_herbs(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    match state.store.category(&id) {
        Some(category) => Json(category.herbs.clone()).into_response(),
        None => not_found(format!("category not found: {id}")),
    }
}

async fn list_herbs(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<HerbFilter>,
) -> Json<Vec<Herb>> {
    // `category` always means enclosing-category membership, matching
    // `GET /categories/{id}/herbs`; the declared `category` field on the
    // herb can legitimately disagree and is never used for filtering.
    let herbs = state
        .store
        .herbs(filter.category.as_deref())
        .into_iter()
        .filter(|h| filter.tag.as_deref().is_none_or(|tag| h.has_tag(tag)))
        .cloned()
        .collect();
    Json(herbs)
}

async fn get_herb(
    State(state): State<Arc<AppState>>,
    Path((category_id, herb_id)): Path<(String, String)>,
) -> Response {
    match state.store.herb(&category_id, &herb_id) {
        Some(herb) => Json(herb.clone()).into_response(),
        None => not_found(format!("herb not found: {category_id}/{herb_id}")),
    }
}

async fn get_report(State(state): State<Arc<AppState>>) -> Json<LoadReport> {
    Json(state.report.clone())
}

async fn healthz(State(state): State<Arc<AppState>>) -> Json<Health> {
    Json(Health {
        fingerprint: state.store.fingerprint().to_string(),
        categories: state.store.category_count(),
        herbs: state.store.herb_count(),
        violations: state.report.violations.len(),
        duplicates: state.report.duplicates.len(),
        warnings: state.report.warnings.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use herb_catalog::{builtin, CatalogConfig};

    fn state() -> Arc<AppState> {
        let (store, report) = builtin(&CatalogConfig::lenient()).expect("builtin loads");
        Arc::new(AppState { store, report })
    }

    #[test]
    fn router_builds_over_builtin_dataset() {
        let _ = router(state());
    }

    #[test]
    fn category_summary_carries_herb_count() {
        let state = state();
        let category = state.store.category("heart-herbs").unwrap();
        let summary = CategorySummary::from(category);
        assert_eq!(summary.id, "heart-herbs");
        assert_eq!(summary.herb_count, category.herbs.len());
        let value = serde_json::to_value(&summary).unwrap();
        assert!(value.get("herbCount").is_some());
    }

    #[tokio::test]
    async fn unknown_category_maps_to_404() {
        let response = get_category(
            State(state()),
            Path("no-such-category".to_string()),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn tag_filter_returns_adaptogens() {
        let Json(herbs) = list_herbs(
            State(state()),
            Query(HerbFilter {
                tag: Some("adaptogen".to_string()),
                category: None,
            }),
        )
        .await;
        assert!(herbs.iter().any(|h| h.id == "ashwagandha"));
    }

    #[tokio::test]
    async fn combined_filters_intersect_by_enclosing_category() {
        // gotu-kola sits in brain-herbs but declares category "adaptogens";
        // the filter must go by where the herb actually lives.
        let Json(by_category) = list_herbs(
            State(state()),
            Query(HerbFilter {
                tag: None,
                category: Some("brain-herbs".to_string()),
            }),
        )
        .await;
        assert!(by_category.iter().any(|h| h.id == "gotu-kola"));

        let Json(both) = list_herbs(
            State(state()),
            Query(HerbFilter {
                tag: Some("clarity".to_string()),
                category: Some("brain-herbs".to_string()),
            }),
        )
        .await;
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].id, "gotu-kola");

        // The same tag under the declared category finds nothing there.
        let Json(declared) = list_herbs(
            State(state()),
            Query(HerbFilter {
                tag: Some("clarity".to_string()),
                category: Some("adaptogens".to_string()),
            }),
        )
        .await;
        assert!(declared.is_empty());
    }

    #[tokio::test]
    async fn empty_category_yields_empty_list_not_404() {
        let response = list_category_herbs(
            State(state()),
            Path("immune-support".to_string()),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
