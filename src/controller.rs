//! Remote Query Tracking
//!
//! Last-request-wins bookkeeping for the list view's server reads.

use crate::api::TodoQuery;
use crate::error::ApiError;
use crate::models::Todo;

/// Identifies one remote read; later tickets supersede earlier ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq, Default)]
pub enum QueryState {
    #[default]
    Idle,
    Pending,
    Success,
    Failed(String),
}

/// What the caller should do after a completion was applied
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Loaded(usize),
    Failed(String),
}

/// Latest server answer plus the state of the read that produced it
#[derive(Debug, Clone, Default)]
pub struct QueryTracker {
    latest: u64,
    /// Server query of the most recent read
    last_query: Option<TodoQuery>,
    state: QueryState,
    todos: Vec<Todo>,
}

impl QueryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new read, superseding any read still in flight
    pub fn begin(&mut self) -> Ticket {
        self.latest += 1;
        self.state = QueryState::Pending;
        Ticket(self.latest)
    }

    /// Start a read only when `query` differs from the last one sent
    ///
    /// Local refinements never reach the server query, so re-running this
    /// after one of them changes nothing.
    pub fn begin_if_changed(&mut self, query: &TodoQuery) -> Option<Ticket> {
        if self.last_query.as_ref() == Some(query) {
            return None;
        }
        self.last_query = Some(query.clone());
        Some(self.begin())
    }

    /// Apply a completed read
    ///
    /// Returns `None` and changes nothing when `ticket` has been superseded.
    /// A failure empties the list and records the user-facing message.
    pub fn resolve(&mut self, ticket: Ticket, result: Result<Vec<Todo>, ApiError>) -> Option<Resolution> {
        if ticket.0 != self.latest {
            log::debug!("[QueryTracker] Dropping stale result for ticket {}", ticket.0);
            return None;
        }
        match result {
            Ok(todos) => {
                let count = todos.len();
                self.todos = todos;
                self.state = QueryState::Success;
                Some(Resolution::Loaded(count))
            }
            Err(err) => {
                let message = err.list_message();
                log::warn!("[QueryTracker] Read failed: {}", err);
                self.todos.clear();
                self.state = QueryState::Failed(message.clone());
                Some(Resolution::Failed(message))
            }
        }
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == QueryState::Pending
    }

    /// Latest successful result, empty after a failure
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            QueryState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
