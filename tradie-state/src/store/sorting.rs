//! Sorting/Filter Store
//!
//! Plain holder for the active sort criterion and table filters. The view
//! is recomputed by `AppStore` whenever this state changes.

use std::collections::BTreeSet;

use tradie_core::domain::{Filters, Sorting, Status};

#[derive(Debug, Clone, Default)]
pub struct SortingStore {
    sorting: Sorting,
    filters: Filters,
}

impl SortingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sorting(&self) -> &Sorting {
        &self.sorting
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn set_sorting(&mut self, sorting: Sorting) -> bool {
        replace_if_changed(&mut self.sorting, sorting)
    }

    pub fn set_search_filter(&mut self, search: impl Into<String>) -> bool {
        replace_if_changed(&mut self.filters.search, search.into())
    }

    pub fn set_status_filters(&mut self, statuses: impl IntoIterator<Item = Status>) -> bool {
        replace_if_changed(&mut self.filters.status, statuses.into_iter().collect())
    }

    pub fn set_client_filters(&mut self, codes: impl IntoIterator<Item = String>) -> bool {
        let codes: BTreeSet<String> = codes.into_iter().collect();
        replace_if_changed(&mut self.filters.client, codes)
    }
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
