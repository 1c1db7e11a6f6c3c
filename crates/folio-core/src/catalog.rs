//! Catalog Store
//!
//! Holds one page's item collection, the load outcome and the active
//! category filter. The filtered view is never stored: it is recomputed on
//! every read, so a filter change or a reload is visible immediately.

use std::collections::HashSet;

use folio_types::{Category, CategoryFilter, ItemId, MediaRef};
use serde::de::DeserializeOwned;

use crate::error::LoadError;
use crate::source::{ContentSource, fetch_document};

/// A displayable record the catalog can filter and the overlay can point at.
pub trait CatalogItem {
    type Category: Category;

    fn id(&self) -> &ItemId;

    /// `None` when the record carries no (recognised) category
    fn category(&self) -> Option<Self::Category>;

    /// Media the detail view can zoom into, in display order
    fn media(&self) -> Vec<MediaRef> {
        Vec::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Mounted, load not finished yet
    Pending,
    Ready,
    Failed(LoadError),
}

#[derive(Debug)]
pub struct CatalogStore<T: CatalogItem> {
    items: Vec<T>,
    filter: CategoryFilter<T::Category>,
    state: LoadState,
}

impl<T: CatalogItem> Default for CatalogStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: CatalogItem> CatalogStore<T> {
    /// Fresh store for a newly mounted page: empty, pending, filter `All`.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            filter: CategoryFilter::All,
            state: LoadState::Pending,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == LoadState::Ready
    }

    pub fn error(&self) -> Option<&LoadError> {
        match &self.state {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// The full collection in load order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn filter(&self) -> CategoryFilter<T::Category> {
        self.filter
    }

    /// Replace the active filter. Returns `false` when it was already active.
    ///
    /// A filter with no matching items is legal and yields an empty view.
    pub fn set_filter(&mut self, filter: CategoryFilter<T::Category>) -> bool {
        if self.filter == filter {
            return false;
        }
        self.filter = filter;
        true
    }

    /// Lazy projection of the collection through the active filter,
    /// preserving load order.
    pub fn filtered(&self) -> impl Iterator<Item = &T> {
        let filter = self.filter;
        self.items
            .iter()
            .filter(move |item| filter.matches(item.category()))
    }

    pub fn filtered_items(&self) -> Vec<&T> {
        self.filtered().collect()
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered().count()
    }

    /// Items the given filter would show, without switching to it
    pub fn count_matching(&self, filter: CategoryFilter<T::Category>) -> usize {
        self.items
            .iter()
            .filter(|item| filter.matches(item.category()))
            .count()
    }

    pub fn get(&self, id: &ItemId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Store the outcome of the page's load.
    ///
    /// Success replaces the collection in one assignment; failure leaves it
    /// empty. Duplicate ids make the payload malformed.
    pub fn apply(&mut self, result: Result<Vec<T>, LoadError>) -> Result<usize, LoadError> {
        match result.and_then(ensure_unique_ids) {
            Ok(items) => {
                let count = items.len();
                self.items = items;
                self.state = LoadState::Ready;
                Ok(count)
            }
            Err(err) => {
                self.items = Vec::new();
                self.state = LoadState::Failed(err.clone());
                Err(err)
            }
        }
    }

    /// Fetch `document` from `source` as a JSON array and apply it.
    pub async fn load<S>(&mut self, source: &S, document: &str) -> Result<usize, LoadError>
    where
        S: ContentSource,
        T: DeserializeOwned,
    {
        let result = fetch_document::<Vec<T>, S>(source, document).await;
        self.apply(result)
    }
}

/// Reject a collection in which two items share an id.
pub fn ensure_unique_ids<T: CatalogItem>(items: Vec<T>) -> Result<Vec<T>, LoadError> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in &items {
        if !seen.insert(item.id()) {
            return Err(LoadError::Malformed(format!(
                "duplicate id '{}'",
                item.id()
            )));
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::ProjectCategory;

    #[derive(Debug, Clone, PartialEq)]
    struct Entry {
        id: ItemId,
        category: Option<ProjectCategory>,
    }

    impl CatalogItem for Entry {
        type Category = ProjectCategory;

        fn id(&self) -> &ItemId {
            &self.id
        }

        fn category(&self) -> Option<ProjectCategory> {
            self.category
        }
    }

    fn entry(id: i64, category: Option<ProjectCategory>) -> Entry {
        Entry {
            id: ItemId::Number(id),
            category,
        }
    }

    fn ids(store: &CatalogStore<Entry>) -> Vec<ItemId> {
        store.filtered().map(|e| e.id.clone()).collect()
    }

    #[test]
    fn test_new_store_is_pending_and_empty() {
        let store = CatalogStore::<Entry>::new();
        assert_eq!(store.state(), &LoadState::Pending);
        assert_eq!(store.filter(), CategoryFilter::All);
        assert!(store.filtered_items().is_empty());
    }

    #[test]
    fn test_filter_before_load_is_empty_not_error() {
        let mut store = CatalogStore::<Entry>::new();
        store.set_filter(CategoryFilter::Only(ProjectCategory::Web));
        assert_eq!(store.filtered_len(), 0);
        assert_eq!(store.state(), &LoadState::Pending);
    }

    #[test]
    fn test_all_is_identity() {
        let mut store = CatalogStore::new();
        let items = vec![
            entry(3, Some(ProjectCategory::Other)),
            entry(1, None),
            entry(2, Some(ProjectCategory::Web)),
        ];
        store.apply(Ok(items.clone())).unwrap();

        let filtered: Vec<Entry> = store.filtered().cloned().collect();
        assert_eq!(filtered, items);
    }

    #[test]
    fn test_specific_filter_keeps_order_and_skips_uncategorised() {
        let mut store = CatalogStore::new();
        store
            .apply(Ok(vec![
                entry(1, Some(ProjectCategory::Web)),
                entry(2, Some(ProjectCategory::Mobile)),
                entry(3, None),
                entry(4, Some(ProjectCategory::Web)),
            ]))
            .unwrap();

        store.set_filter(CategoryFilter::Only(ProjectCategory::Web));
        assert_eq!(ids(&store), vec![ItemId::Number(1), ItemId::Number(4)]);

        store.set_filter(CategoryFilter::Only(ProjectCategory::Other));
        assert!(ids(&store).is_empty());

        store.set_filter(CategoryFilter::All);
        assert_eq!(store.filtered_len(), 4);
    }

    #[test]
    fn test_set_filter_is_idempotent() {
        let mut store = CatalogStore::new();
        store
            .apply(Ok(vec![
                entry(1, Some(ProjectCategory::Web)),
                entry(2, Some(ProjectCategory::Mobile)),
            ]))
            .unwrap();

        assert!(store.set_filter(CategoryFilter::Only(ProjectCategory::Mobile)));
        let once = ids(&store);
        assert!(!store.set_filter(CategoryFilter::Only(ProjectCategory::Mobile)));
        assert_eq!(ids(&store), once);
    }

    #[test]
    fn test_reload_replaces_in_full_and_keeps_filter() {
        let mut store = CatalogStore::new();
        store
            .apply(Ok(vec![
                entry(1, Some(ProjectCategory::Web)),
                entry(2, Some(ProjectCategory::Web)),
            ]))
            .unwrap();
        store.set_filter(CategoryFilter::Only(ProjectCategory::Web));

        store
            .apply(Ok(vec![entry(9, Some(ProjectCategory::Web))]))
            .unwrap();
        assert_eq!(ids(&store), vec![ItemId::Number(9)]);
        assert_eq!(store.items().len(), 1);
    }

    #[test]
    fn test_failed_load_leaves_collection_empty() {
        let mut store = CatalogStore::new();
        store.apply(Ok(vec![entry(1, None)])).unwrap();

        let err = store
            .apply(Err(LoadError::Transport("connection refused".into())))
            .unwrap_err();
        assert_eq!(err, LoadError::Transport("connection refused".into()));
        assert!(store.items().is_empty());
        assert_eq!(store.error(), Some(&err));
    }

    #[test]
    fn test_duplicate_ids_are_malformed() {
        let mut store = CatalogStore::new();
        let err = store
            .apply(Ok(vec![entry(1, None), entry(1, Some(ProjectCategory::Web))]))
            .unwrap_err();
        assert!(matches!(err, LoadError::Malformed(msg) if msg.contains("duplicate id '1'")));
        assert!(store.items().is_empty());
    }

    #[test]
    fn test_count_matching_does_not_switch_filter() {
        let mut store = CatalogStore::new();
        store
            .apply(Ok(vec![
                entry(1, Some(ProjectCategory::Web)),
                entry(2, Some(ProjectCategory::Mobile)),
                entry(3, Some(ProjectCategory::Web)),
            ]))
            .unwrap();

        assert_eq!(
            store.count_matching(CategoryFilter::Only(ProjectCategory::Web)),
            2
        );
        assert_eq!(store.filter(), CategoryFilter::All);
    }
}
