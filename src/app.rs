//! Todo Client App
//!
//! Top-level component: navigation bar, routed page and notifications.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes, A};
use leptos_router::path;

use crate::components::{AddTodoFormView, TodoDetail, TodoList, ToastHost};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::route::AppRoute;

#[component]
pub fn App(config: ApiConfig) -> impl IntoView {
    // Provide context to all children
    provide_context(AppContext::new(config));

    view! {
        <Router>
            <div class="app-layout">
                <nav class="navbar">
                    <A href=AppRoute::List.path() attr:class="navbar-brand">"Todos"</A>
                    <A href=AppRoute::New.path() attr:class="navbar-link">"New Todo"</A>
                </nav>

                <main class="main-content">
                    // unknown paths show the list
                    <Routes fallback=|| view! { <TodoList /> }>
                        <Route path=path!("/") view=|| view! { <Redirect path="/todos" /> } />
                        <Route path=path!("/todos") view=TodoList />
                        <Route path=path!("/todos/new") view=AddTodoFormView />
                        <Route path=path!("/todos/:id") view=TodoDetail />
                    </Routes>
                </main>

                <ToastHost />
            </div>
        </Router>
    }
}
