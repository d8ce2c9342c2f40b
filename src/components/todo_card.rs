//! Todo Card Component
//!
//! One todo rendered as a card (grid view) or a row (list view).

use leptos::prelude::*;

use crate::models::Todo;
use crate::route::AppRoute;

fn status_label(status: bool) -> &'static str {
    if status { "Complete" } else { "Incomplete" }
}

/// Full card with owner, category, status and body
#[component]
pub fn TodoCard(todo: Todo) -> impl IntoView {
    let status_class = if todo.status { "todo-card complete" } else { "todo-card incomplete" };
    let href = todo.id.as_ref().map(|id| AppRoute::Detail(id.clone()).path());

    view! {
        <div class=status_class>
            <div class="todo-card-header">
                <span class="todo-card-owner">{todo.owner}</span>
                <span class="todo-card-category">{todo.category}</span>
            </div>
            <div class="todo-card-status">{status_label(todo.status)}</div>
            <p class="todo-card-body">{todo.body}</p>
            {href.map(|href| view! {
                <a class="todo-card-link" href=href data-test="viewTodoButton">"View"</a>
            })}
        </div>
    }
}

/// Compact row for the list view
#[component]
pub fn TodoListItem(todo: Todo) -> impl IntoView {
    let href = todo.id.as_ref().map(|id| AppRoute::Detail(id.clone()).path()).unwrap_or_default();

    view! {
        <li class="todo-list-item">
            <a href=href>
                <span class="todo-list-owner">{todo.owner}</span>
                <span class="todo-list-category">{todo.category}</span>
                <span class="todo-list-status">{status_label(todo.status)}</span>
            </a>
        </li>
    }
}
