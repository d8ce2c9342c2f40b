//! App Routes
//!
//! Navigation targets for `/todos`, `/todos/new` and `/todos/:id`.
//! Matching and parameter decoding are left to `leptos_router`.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters kept as-is in a path segment
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    #[default]
    List,
    New,
    Detail(String),
}

impl AppRoute {
    /// Path to hand to `<A href>` or `use_navigate`
    pub fn path(&self) -> String {
        match self {
            AppRoute::List => "/todos".to_string(),
            AppRoute::New => "/todos/new".to_string(),
            AppRoute::Detail(id) => format!("/todos/{}", utf8_percent_encode(id, SEGMENT)),
        }
    }
}
