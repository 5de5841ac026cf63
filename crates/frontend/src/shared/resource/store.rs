//! In-memory collection of one resource kind, with pagination.
//!
//! Pages are 1-indexed. The collection never holds two entities with the
//! same id.

use super::traits::Resource;
use std::collections::HashSet;

/// Outcome of [`ResourceStore::apply_create`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateEffect {
    Appended,
    /// The id was already present; the caller should refresh
    Duplicate,
}

#[derive(Debug, Clone)]
pub struct ResourceStore<R> {
    items: Vec<R>,
    page: usize,
    page_size: usize,
}

impl<R: Resource> ResourceStore<R> {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.items.iter().find(|e| e.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Replace the whole collection at once (refresh result).
    ///
    /// Duplicate ids keep their first occurrence; returns how many were dropped.
    pub fn replace_all(&mut self, items: Vec<R>) -> usize {
        let total = items.len();
        let mut seen = HashSet::with_capacity(total);
        let items: Vec<R> = items
            .into_iter()
            .filter(|e| seen.insert(e.id().to_string()))
            .collect();
        let dropped = total - items.len();
        if dropped > 0 {
            log::warn!(
                "{}: dropped {} duplicate record(s) from server list",
                R::KIND.as_str(),
                dropped
            );
        }
        self.items = items;
        self.clamp_page();
        dropped
    }

    pub fn apply_create(&mut self, entity: R) -> CreateEffect {
        if self.contains(entity.id()) {
            return CreateEffect::Duplicate;
        }
        self.items.push(entity);
        CreateEffect::Appended
    }

    /// Replace in place. `false` when the id is not in the collection.
    pub fn apply_update(&mut self, entity: R) -> bool {
        match self.items.iter_mut().find(|e| e.id() == entity.id()) {
            Some(slot) => {
                *slot = entity;
                true
            }
            None => false,
        }
    }

    /// Remove by id. Removing an absent id is a no-op.
    pub fn apply_delete(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|e| e.id() != id);
        let removed = self.items.len() != before;
        if removed {
            self.clamp_page();
        }
        removed
    }

    /// Entities of page `page` (1-indexed) for `page_size`, clipped to bounds.
    pub fn page(&self, page: usize, page_size: usize) -> &[R] {
        if page == 0 || page_size == 0 {
            return &[];
        }
        let start = (page - 1).saturating_mul(page_size);
        if start >= self.items.len() {
            return &[];
        }
        let end = start.saturating_add(page_size).min(self.items.len());
        &self.items[start..end]
    }

    /// `ceil(len / page_size)`, at least 1
    pub fn total_pages(&self, page_size: usize) -> usize {
        if page_size == 0 {
            return 1;
        }
        self.items.len().div_ceil(page_size).max(1)
    }

    pub fn active_page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn active_total_pages(&self) -> usize {
        self.total_pages(self.page_size)
    }

    pub fn current_page(&self) -> &[R] {
        self.page(self.page, self.page_size)
    }

    /// Select a page; out-of-range values are clamped. Returns the active page.
    pub fn set_page(&mut self, page: usize) -> usize {
        self.page = page;
        self.clamp_page();
        self.page
    }

    fn clamp_page(&mut self) {
        self.page = self.page.clamp(1, self.active_total_pages());
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::shared::resource::config::ResourceKind;
    use crate::shared::resource::payload::FieldBag;
    use contracts::shared::validation::FormMode;
    use serde::Deserialize;

    /// Minimal resource used by the store, session and controller tests
    #[derive(Debug, Clone, PartialEq, Deserialize)]
    pub struct Item {
        pub id: String,
        pub name: String,
    }

    pub fn item(id: &str, name: &str) -> Item {
        Item {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    impl Resource for Item {
        type Draft = String;

        const KIND: ResourceKind = ResourceKind::Category;
        const LABEL: &'static str = "Item";
        const COLLECTION_LABEL: &'static str = "items";

        fn id(&self) -> &str {
            &self.id
        }

        fn to_draft(&self) -> String {
            self.name.clone()
        }

        fn validate(draft: &String, _mode: FormMode) -> Result<(), String> {
            if draft.trim().is_empty() {
                Err("Name is required".to_string())
            } else {
                Ok(())
            }
        }

        fn to_payload(draft: &String) -> FieldBag {
            FieldBag::json().text("name", draft.trim())
        }

        fn settle(draft: &String, id: Option<&str>) -> Option<Self> {
            let name = draft.trim().to_string();
            Some(item(id.unwrap_or(&name), &name))
        }
    }

    fn store_of(n: usize, page_size: usize) -> ResourceStore<Item> {
        let mut store = ResourceStore::new(page_size);
        store.replace_all(
            (1..=n)
                .map(|i| item(&i.to_string(), &format!("N{}", i)))
                .collect(),
        );
        store
    }

    fn ids(items: &[Item]) -> Vec<&str> {
        items.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_page_scenario() {
        let mut store = ResourceStore::new(1);
        store.replace_all(vec![item("1", "A"), item("2", "B")]);
        assert_eq!(ids(store.page(1, 1)), vec!["1"]);
        assert_eq!(ids(store.page(2, 1)), vec!["2"]);
        assert!(store.page(3, 1).is_empty());
        assert!(store.page(0, 1).is_empty());
    }

    #[test]
    fn test_page_sizes() {
        let store = store_of(25, 10);
        for (page, expected) in [(1, 10), (2, 10), (3, 5), (4, 0)] {
            assert_eq!(store.page(page, 10).len(), expected, "page {}", page);
        }
        assert_eq!(store.total_pages(10), 3);
        assert_eq!(store.total_pages(25), 1);
        assert!(store.page(1, 0).is_empty());
    }

    #[test]
    fn test_empty_collection_has_one_page() {
        let store: ResourceStore<Item> = ResourceStore::new(12);
        assert_eq!(store.total_pages(12), 1);
        assert!(store.current_page().is_empty());
    }

    #[test]
    fn test_create_appends_once() {
        let mut store = store_of(2, 10);
        assert_eq!(store.apply_create(item("3", "C")), CreateEffect::Appended);
        assert_eq!(store.apply_create(item("3", "C again")), CreateEffect::Duplicate);
        assert_eq!(store.len(), 3);
        assert_eq!(store.get("3").map(|e| e.name.as_str()), Some("C"));
    }

    #[test]
    fn test_update_in_place_keeps_order() {
        let mut store = store_of(3, 10);
        assert!(store.apply_update(item("2", "renamed")));
        assert_eq!(ids(store.items()), vec!["1", "2", "3"]);
        assert_eq!(store.items()[1].name, "renamed");
        assert!(!store.apply_update(item("9", "ghost")));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut store = store_of(3, 10);
        assert!(store.apply_delete("2"));
        assert!(!store.apply_delete("2"));
        assert!(!store.apply_delete("5"));
        assert_eq!(ids(store.items()), vec!["1", "3"]);
    }

    #[test]
    fn test_replace_all_drops_duplicates() {
        let mut store = ResourceStore::new(10);
        let dropped = store.replace_all(vec![item("1", "A"), item("1", "B"), item("2", "C")]);
        assert_eq!(dropped, 1);
        assert_eq!(ids(store.items()), vec!["1", "2"]);
        assert_eq!(store.items()[0].name, "A");
    }

    #[test]
    fn test_delete_clamps_active_page() {
        let mut store = store_of(3, 1);
        assert_eq!(store.set_page(3), 3);
        store.apply_delete("3");
        assert_eq!(store.active_page(), 2);
        assert_eq!(ids(store.current_page()), vec!["2"]);
    }

    #[test]
    fn test_refresh_clamps_active_page() {
        let mut store = store_of(30, 10);
        store.set_page(3);
        store.replace_all(vec![item("1", "A")]);
        assert_eq!(store.active_page(), 1);
    }

    #[test]
    fn test_set_page_clamps_both_ends() {
        let mut store = store_of(5, 2);
        assert_eq!(store.set_page(0), 1);
        assert_eq!(store.set_page(99), 3);
        assert_eq!(store.active_page(), 3);
    }

    #[test]
    fn test_no_duplicates_after_mixed_sequence() {
        let mut store = store_of(4, 3);
        let ops: Vec<Box<dyn Fn(&mut ResourceStore<Item>)>> = vec![
            Box::new(|s| {
                s.apply_create(item("2", "dup"));
            }),
            Box::new(|s| {
                s.apply_create(item("5", "E"));
            }),
            Box::new(|s| {
                s.apply_delete("1");
            }),
            Box::new(|s| {
                s.apply_create(item("1", "A2"));
            }),
            Box::new(|s| {
                s.apply_update(item("5", "E2"));
            }),
            Box::new(|s| {
                s.apply_create(item("5", "E3"));
            }),
        ];
        for op in ops {
            op(&mut store);
            let mut seen = HashSet::new();
            assert!(store.items().iter().all(|e| seen.insert(e.id.clone())));
        }
        assert_eq!(ids(store.items()), vec!["2", "3", "4", "5", "1"]);
    }
}
