//! The in-memory catalog store and its query surface.
//!
//! A store is built once by [`crate::loader`], never mutated afterwards,
//! and can be shared freely across readers (`&CatalogStore` or
//! `Arc<CatalogStore>`) without synchronization — there is no writer after
//! construction. Every query is a synchronous in-memory lookup.

use crate::model::{Herb, HerbCategory};

/// Read-only collection of herb categories in source order.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    categories: Vec<HerbCategory>,
    /// SHA-256 of the raw source bytes this store was built from.
    fingerprint: String,
    include_empty_categories: bool,
}

impl CatalogStore {
    pub(crate) fn new(
        categories: Vec<HerbCategory>,
        fingerprint: String,
        include_empty_categories: bool,
    ) -> Self {
        Self {
            categories,
            fingerprint,
            include_empty_categories,
        }
    }

    /// All categories in source order.
    ///
    /// Empty-herb categories (the source ships "immune-support" with zero
    /// herbs) are included unless the store was configured to hide them.
    pub fn categories(&self) -> Vec<&HerbCategory> {
        self.categories
            .iter()
            .filter(|c| self.include_empty_categories || !c.herbs.is_empty())
            .collect()
    }

    /// Look up a category by id. `None` is the not-found result; no error
    /// path exists here.
    pub fn category(&self, id: &str) -> Option<&HerbCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Herbs in source (display) order, optionally restricted to one
    /// category. An unknown category id yields an empty sequence.
    pub fn herbs(&self, category_id: Option<&str>) -> Vec<&Herb> {
        match category_id {
            Some(id) => self
                .category(id)
                .map(|c| c.herbs.iter().collect())
                .unwrap_or_default(),
            None => self
                .categories
                .iter()
                .flat_map(|c| c.herbs.iter())
                .collect(),
        }
    }

    /// Look up a single herb by `(category, id)`.
    ///
    /// When the source holds duplicate ids inside one category, the first
    /// occurrence wins; the later records stay reachable through
    /// [`CatalogStore::herbs`].
    pub fn herb(&self, category_id: &str, herb_id: &str) -> Option<&Herb> {
        self.category(category_id)?
            .herbs
            .iter()
            .find(|h| h.id == herb_id)
    }

    /// Herbs whose `tags` contain the given value, case-sensitive exact
    /// match (source convention), across all categories in source order.
    pub fn herbs_by_tag(&self, tag: &str) -> Vec<&Herb> {
        self.categories
            .iter()
            .flat_map(|c| c.herbs.iter())
            .filter(|h| h.has_tag(tag))
            .collect()
    }

    /// SHA-256 fingerprint of the source bytes, for telling dataset
    /// revisions apart.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Number of categories held, regardless of visibility policy.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Total number of herb records held.
    pub fn herb_count(&self) -> usize {
        self.categories.iter().map(|c| c.herbs.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Herb;

    fn herb(id: &str, category: &str, tags: &[&str]) -> Herb {
        Herb {
            id: id.into(),
            name: id.into(),
            scientific_name: format!("{id} officinalis"),
            category: category.into(),
            description: format!("About {id}."),
            benefits: vec![],
            usage: String::new(),
            cautions: vec![],
            preparations: vec![],
            benefit_scores: None,
            complementary_herbs: None,
            origin: None,
            harvest_season: None,
            sustainability_info: None,
            growing_info: None,
            image: None,
            parts: None,
            traditional_uses: None,
            constituents: None,
            tags: if tags.is_empty() {
                None
            } else {
                Some(tags.iter().map(|t| t.to_string()).collect())
            },
            audience: None,
            safety_profile: None,
            scientific_research: None,
            detailed_preparations: None,
        }
    }

    fn category(id: &str, herbs: Vec<Herb>) -> HerbCategory {
        HerbCategory {
            id: id.into(),
            name: id.into(),
            description: String::new(),
            icon: String::new(),
            color: String::new(),
            herbs,
        }
    }

    fn sample_store(include_empty: bool) -> CatalogStore {
        CatalogStore::new(
            vec![
                category(
                    "adaptogens",
                    vec![
                        herb("ashwagandha", "adaptogens", &["adaptogen", "sleep"]),
                        herb("rhodiola", "adaptogens", &["adaptogen"]),
                    ],
                ),
                category(
                    "heart-herbs",
                    vec![
                        herb("hawthorn", "heart-herbs", &[]),
                        herb("linden", "heart-herbs", &["calming"]),
                    ],
                ),
                category("immune-support", vec![]),
            ],
            "deadbeef".into(),
            include_empty,
        )
    }

    #[test]
    fn categories_preserve_source_order() {
        let store = sample_store(true);
        let ids: Vec<&str> = store.categories().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["adaptogens", "heart-herbs", "immune-support"]);
    }

    #[test]
    fn empty_categories_can_be_hidden() {
        let store = sample_store(false);
        let ids: Vec<&str> = store.categories().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["adaptogens", "heart-herbs"]);
        // Still addressable directly even when hidden from the listing.
        assert!(store.category("immune-support").is_some());
        assert!(store.herbs(Some("immune-support")).is_empty());
    }

    #[test]
    fn category_lookup_round_trips() {
        let store = sample_store(true);
        for listed in store.categories() {
            let fetched = store.category(&listed.id).expect("listed category resolves");
            assert_eq!(fetched, listed);
        }
        assert!(store.category("nonexistent").is_none());
    }

    #[test]
    fn herb_lookup_round_trips() {
        let store = sample_store(true);
        for cat in store.categories() {
            for h in &cat.herbs {
                let fetched = store.herb(&cat.id, &h.id).expect("listed herb resolves");
                assert_eq!(fetched, h);
                let in_category = store.herbs(Some(&cat.id));
                assert_eq!(in_category.iter().filter(|x| x.id == h.id).count(), 1);
            }
        }
        assert!(store.herb("adaptogens", "hawthorn").is_none());
        assert!(store.herb("nonexistent", "ashwagandha").is_none());
    }

    #[test]
    fn unfiltered_herbs_span_all_categories_in_order() {
        let store = sample_store(true);
        let ids: Vec<&str> = store.herbs(None).iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, ["ashwagandha", "rhodiola", "hawthorn", "linden"]);
    }

    #[test]
    fn tag_lookup_is_exact() {
        let store = sample_store(true);
        let adaptogens = store.herbs_by_tag("adaptogen");
        let ids: Vec<&str> = adaptogens.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, ["ashwagandha", "rhodiola"]);
        assert!(store.herbs_by_tag("Adaptogen").is_empty());
    }

    #[test]
    fn duplicate_ids_resolve_first_wins() {
        let mut second = herb("linden", "heart-herbs", &[]);
        second.description = "A second linden entry.".into();
        let store = CatalogStore::new(
            vec![category(
                "heart-herbs",
                vec![herb("linden", "heart-herbs", &["calming"]), second],
            )],
            "deadbeef".into(),
            true,
        );

        // Both records visible positionally.
        assert_eq!(store.herbs(Some("heart-herbs")).len(), 2);
        // Id lookup resolves to the first occurrence.
        let found = store.herb("heart-herbs", "linden").unwrap();
        assert_eq!(found.description, "About linden.");
    }
}
