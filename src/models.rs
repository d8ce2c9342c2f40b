//! Frontend Models
//!
//! Data structures matching the todo REST API.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Todo record as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    /// Server-assigned identifier, absent for unsaved todos
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub owner: String,
    pub status: bool,
    pub body: String,
    pub category: String,
}

/// Draft sent to the backend when creating a todo
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTodo {
    pub owner: String,
    pub status: bool,
    pub body: String,
    pub category: String,
}

/// Body of a successful create response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AddTodoResponse {
    pub id: String,
}

// ========================
// List Controls
// ========================

/// Sort orders offered by the list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoSort {
    #[serde(rename = "ownerAsc")]
    OwnerAsc,
    #[serde(rename = "ownerDesc")]
    OwnerDesc,
    #[serde(rename = "bodyAsc")]
    BodyAsc,
    #[serde(rename = "bodyDesc")]
    BodyDesc,
    #[serde(rename = "categoryAsc")]
    CategoryAsc,
    #[serde(rename = "categoryDesc")]
    CategoryDesc,
    #[serde(rename = "status")]
    Status,
}

impl TodoSort {
    pub const ALL: [TodoSort; 7] = [
        TodoSort::OwnerAsc,
        TodoSort::OwnerDesc,
        TodoSort::BodyAsc,
        TodoSort::BodyDesc,
        TodoSort::CategoryAsc,
        TodoSort::CategoryDesc,
        TodoSort::Status,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TodoSort::OwnerAsc => "ownerAsc",
            TodoSort::OwnerDesc => "ownerDesc",
            TodoSort::BodyAsc => "bodyAsc",
            TodoSort::BodyDesc => "bodyDesc",
            TodoSort::CategoryAsc => "categoryAsc",
            TodoSort::CategoryDesc => "categoryDesc",
            TodoSort::Status => "status",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TodoSort::OwnerAsc => "Owner (A-Z)",
            TodoSort::OwnerDesc => "Owner (Z-A)",
            TodoSort::BodyAsc => "Body (A-Z)",
            TodoSort::BodyDesc => "Body (Z-A)",
            TodoSort::CategoryAsc => "Category (A-Z)",
            TodoSort::CategoryDesc => "Category (Z-A)",
            TodoSort::Status => "Complete first",
        }
    }
}

impl fmt::Display for TodoSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TodoSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TodoSort::ALL
            .into_iter()
            .find(|sort| sort.as_str() == s)
            .ok_or_else(|| format!("unknown sort order: {s}"))
    }
}

/// Status filter options (value, label)
pub const STATUS_OPTIONS: &[(StatusFilter, &str)] = &[
    (StatusFilter::All, "All"),
    (StatusFilter::Complete, "Complete"),
    (StatusFilter::Incomplete, "Incomplete"),
];

/// Status filter selection in the list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Complete,
    Incomplete,
}

impl StatusFilter {
    pub fn as_status(self) -> Option<bool> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Complete => Some(true),
            StatusFilter::Incomplete => Some(false),
        }
    }

    pub fn from_status(status: Option<bool>) -> Self {
        match status {
            None => StatusFilter::All,
            Some(true) => StatusFilter::Complete,
            Some(false) => StatusFilter::Incomplete,
        }
    }
}

/// Layout of the todo list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Card,
    List,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::Todo;

    const TEST_TODOS: &str = r#"[
        {
            "_id": "58af3a600343927e48e8720f",
            "owner": "Blanche",
            "status": false,
            "body": "In sunt ex non tempor cillum commodo amet incididunt anim qui commodo quis. Cillum non labore ex sint esse.",
            "category": "software design"
        },
        {
            "_id": "58af3a600343987e48e8720f",
            "owner": "Fry",
            "status": false,
            "body": "sunt ex non tempor cillum commodo amet incididunt anim qui commodo quis. Cillum non labore ex sint esse.",
            "category": "homework"
        },
        {
            "_id": "58af3a600343927c48e8720f",
            "owner": "Barry",
            "status": true,
            "body": "In sunt ex non tempor cillum commodo amet incididunt qui commodo quis. Cillum non labore ex sint esse.",
            "category": "video games"
        }
    ]"#;

    /// Blanche, Fry and Barry, in server order
    pub fn test_todos() -> Vec<Todo> {
        serde_json::from_str(TEST_TODOS).expect("fixture should parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_wire_format() {
        let todos = fixtures::test_todos();
        assert_eq!(todos.len(), 3);
        assert_eq!(todos[0].id.as_deref(), Some("58af3a600343927e48e8720f"));
        assert_eq!(todos[2].owner, "Barry");
        assert!(todos[2].status);

        let unsaved = Todo { id: None, ..todos[0].clone() };
        let json = serde_json::to_value(&unsaved).unwrap();
        assert!(json.get("_id").is_none());
    }

    #[test]
    fn test_add_todo_response() {
        let resp: AddTodoResponse = serde_json::from_str(r#"{"id":"1"}"#).unwrap();
        assert_eq!(resp.id, "1");
    }

    #[test]
    fn test_sort_names() {
        for sort in TodoSort::ALL {
            assert_eq!(sort.as_str().parse::<TodoSort>(), Ok(sort));
            assert_eq!(serde_json::to_string(&sort).unwrap(), format!("\"{}\"", sort));
        }
        assert!("owner".parse::<TodoSort>().is_err());
    }

    #[test]
    fn test_status_filter_mapping() {
        for (filter, _) in STATUS_OPTIONS {
            assert_eq!(StatusFilter::from_status(filter.as_status()), *filter);
        }
        assert_eq!(StatusFilter::Incomplete.as_status(), Some(false));
    }
}
