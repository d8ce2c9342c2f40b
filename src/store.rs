//! List View State Store
//!
//! Uses Leptos reactive_stores so the remote read only tracks the routed fields.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::TodoQuery;
use crate::filter::LocalFilters;
use crate::models::{TodoSort, ViewMode};

/// Filter, sort and limit selections of the todo list
///
/// `owner` and `category` are routed to the server; the other fields
/// refine the fetched list locally.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ListFilters {
    /// Owner substring (server-side)
    pub owner: Option<String>,
    /// Category substring (server-side)
    pub category: Option<String>,
    /// Body substring (local)
    pub body: Option<String>,
    /// Complete / incomplete / all (local)
    pub status: Option<bool>,
    /// Sort order (local)
    pub sort: Option<TodoSort>,
    /// Maximum number of todos shown (local)
    pub limit: Option<usize>,
    /// Card grid or compact list
    pub layout: ViewMode,
}

impl ListFilters {
    /// Clear every filter, keep the layout
    pub fn reset(&mut self) {
        *self = Self { layout: self.layout, ..Default::default() };
    }
}

/// Type alias for the store
pub type ListStore = Store<ListFilters>;

/// Text input value to an optional filter; blank means no filter
pub fn text_filter(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Number input value to an optional limit; blank or invalid means no limit
pub fn limit_filter(value: &str) -> Option<usize> {
    value.trim().parse().ok()
}

// ========================
// Store Helper Functions
// ========================

/// Query for the remote read, tracking only `owner` and `category`
pub fn store_server_query(store: &ListStore) -> TodoQuery {
    TodoQuery {
        owner: store.owner().get(),
        category: store.category().get(),
        ..Default::default()
    }
}

/// Local refinement, tracking only the local fields
pub fn store_local_filters(store: &ListStore) -> LocalFilters {
    LocalFilters {
        body: store.body().get(),
        status: store.status().get(),
        sort: store.sort().get(),
        limit: store.limit().get(),
        ..Default::default()
    }
}

/// Clear every filter in the store
pub fn store_reset(store: &ListStore) {
    store.write().reset();
}
