//! Todo Detail Component
//!
//! Single todo loaded by identifier.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::api::TodoSource;
use crate::components::TodoCard;
use crate::context::use_app_context;
use crate::models::Todo;
use crate::route::AppRoute;

#[derive(Debug, Clone, PartialEq)]
enum DetailState {
    Loading,
    Loaded(Todo),
    Failed(String),
}

/// Detail page for `/todos/:id`
#[component]
pub fn TodoDetail() -> impl IntoView {
    let ctx = use_app_context();
    let params = use_params_map();
    let id = Memo::new(move |_| params.read().get("id").unwrap_or_default());
    let (state, set_state) = signal(DetailState::Loading);

    Effect::new(move |_| {
        let requested = id.get();
        set_state.set(DetailState::Loading);
        let service = ctx.service();
        spawn_local(async move {
            let next = match service.get_todo(&requested).await {
                Ok(todo) => DetailState::Loaded(todo),
                Err(err) if err.status() == 404 => {
                    log::warn!("[TodoDetail] Todo {} not found", requested);
                    DetailState::Failed(format!("No todo with id {}", requested))
                }
                Err(err) => {
                    log::error!("[TodoDetail] Error loading {}: {}", requested, err);
                    DetailState::Failed(err.list_message())
                }
            };
            // a later id may have been requested meanwhile
            if id.try_get_untracked().as_ref() == Some(&requested) {
                let _ = set_state.try_set(next);
            }
        });
    });

    view! {
        <section class="todo-detail-page">
            {move || match state.get() {
                DetailState::Loading => view! { <div class="loading">"Loading..."</div> }.into_any(),
                DetailState::Loaded(todo) => view! { <TodoCard todo=todo /> }.into_any(),
                DetailState::Failed(msg) => view! { <div class="todo-error">{msg}</div> }.into_any(),
            }}
            <A href=AppRoute::List.path() attr:class="back-btn">"Back to todos"</A>
        </section>
    }
}
