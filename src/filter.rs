//! Local Refinement
//!
//! Filtering, sorting and truncation of an already-fetched todo list.

use std::cmp::Ordering;

use crate::models::{Todo, TodoSort};

/// Filters applied in the browser after the server has answered
///
/// Empty strings count as "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalFilters {
    pub owner: Option<String>,
    pub body: Option<String>,
    pub category: Option<String>,
    pub status: Option<bool>,
    pub sort: Option<TodoSort>,
    pub limit: Option<usize>,
}

/// Case-folded comparison, ties broken by the raw strings
///
/// Approximates a locale collation: "apple" < "banana" < "Banana" < "cherry".
/// Only basic Latin text orders the way a collator would; accented letters
/// are compared by code point, so "éclair" sorts after "zebra".
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Apply `filters` to `todos`: substring and status filters, then sort, then limit
///
/// Consumes the input; without a sort the server order is kept.
pub fn filter_todos(mut todos: Vec<Todo>, filters: &LocalFilters) -> Vec<Todo> {
    let needle = |f: &Option<String>| f.as_deref().filter(|s| !s.is_empty()).map(str::to_lowercase);

    if let Some(owner) = needle(&filters.owner) {
        todos.retain(|t| contains_ignore_case(&t.owner, &owner));
    }
    if let Some(body) = needle(&filters.body) {
        todos.retain(|t| contains_ignore_case(&t.body, &body));
    }
    if let Some(category) = needle(&filters.category) {
        todos.retain(|t| contains_ignore_case(&t.category, &category));
    }
    if let Some(status) = filters.status {
        todos.retain(|t| t.status == status);
    }

    if let Some(sort) = filters.sort {
        sort_todos(&mut todos, sort);
    }

    if let Some(limit) = filters.limit {
        todos.truncate(limit);
    }
    todos
}

/// Stable in-place sort
pub fn sort_todos(todos: &mut [Todo], sort: TodoSort) {
    match sort {
        TodoSort::OwnerAsc => todos.sort_by(|a, b| locale_cmp(&a.owner, &b.owner)),
        TodoSort::OwnerDesc => todos.sort_by(|a, b| locale_cmp(&b.owner, &a.owner)),
        TodoSort::BodyAsc => todos.sort_by(|a, b| locale_cmp(&a.body, &b.body)),
        TodoSort::BodyDesc => todos.sort_by(|a, b| locale_cmp(&b.body, &a.body)),
        TodoSort::CategoryAsc => todos.sort_by(|a, b| locale_cmp(&a.category, &b.category)),
        TodoSort::CategoryDesc => todos.sort_by(|a, b| locale_cmp(&b.category, &a.category)),
        // complete first
        TodoSort::Status => todos.sort_by_key(|t| !t.status),
    }
}
