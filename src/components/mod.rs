//! UI Components
//!
//! Leptos views for the todo pages.

mod add_todo_form;
mod status_selector;
mod toast;
mod todo_card;
mod todo_detail;
mod todo_list;

pub use add_todo_form::AddTodoFormView;
pub use status_selector::StatusSelector;
pub use toast::{Toast, ToastHost, ToastState};
pub use todo_card::{TodoCard, TodoListItem};
pub use todo_detail::TodoDetail;
pub use todo_list::TodoList;
