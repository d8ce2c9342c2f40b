//! Todo API
//!
//! Frontend bindings to the todo REST backend.

mod query;
mod todo;

use crate::error::ApiError;
use crate::models::{NewTodo, Todo};

pub use query::TodoQuery;
pub use todo::TodoService;

/// Anything that can serve todos to the views
///
/// `TodoService` talks HTTP; tests substitute an in-memory source.
#[allow(async_fn_in_trait)]
pub trait TodoSource {
    /// One read of the collection, filtered server-side by `query`
    async fn get_todos(&self, query: &TodoQuery) -> Result<Vec<Todo>, ApiError>;

    /// One read of a single todo
    async fn get_todo(&self, id: &str) -> Result<Todo, ApiError>;

    /// Create a todo, returning the server-assigned identifier
    async fn add_todo(&self, draft: &NewTodo) -> Result<String, ApiError>;
}

#[cfg(test)]
pub(crate) mod mock {
    use std::cell::RefCell;

    use super::*;
    use crate::models::fixtures::test_todos;

    /// In-memory source recording every call it receives
    #[derive(Default)]
    pub struct MockTodoSource {
        pub todos: Vec<Todo>,
        pub fail_with: Option<ApiError>,
        pub next_id: String,
        pub queries: RefCell<Vec<TodoQuery>>,
        pub added: RefCell<Vec<NewTodo>>,
    }

    impl MockTodoSource {
        pub fn new() -> Self {
            Self { todos: test_todos(), next_id: "1".into(), ..Default::default() }
        }

        pub fn failing(err: ApiError) -> Self {
            Self { fail_with: Some(err), ..Self::new() }
        }

        fn check(&self) -> Result<(), ApiError> {
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }
    }

    impl TodoSource for MockTodoSource {
        async fn get_todos(&self, query: &TodoQuery) -> Result<Vec<Todo>, ApiError> {
            self.queries.borrow_mut().push(query.clone());
            self.check()?;
            Ok(self.todos.clone())
        }

        async fn get_todo(&self, id: &str) -> Result<Todo, ApiError> {
            self.check()?;
            self.todos
                .iter()
                .find(|t| t.id.as_deref() == Some(id))
                .cloned()
                .ok_or_else(|| ApiError::Status { status: 404, message: format!("No todo with id {id}") })
        }

        async fn add_todo(&self, draft: &NewTodo) -> Result<String, ApiError> {
            self.added.borrow_mut().push(draft.clone());
            self.check()?;
            Ok(self.next_id.clone())
        }
    }
}
