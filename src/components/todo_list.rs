//! Todo List Component
//!
//! Filter controls plus the filtered todos, as cards or as a list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use reactive_stores::Store;

use crate::api::TodoSource;
use crate::components::{StatusSelector, TodoCard, TodoListItem};
use crate::context::{use_app_context, LIST_ERROR_MS};
use crate::controller::{QueryTracker, Resolution};
use crate::filter::filter_todos;
use crate::models::{StatusFilter, TodoSort, ViewMode};
use crate::route::AppRoute;
use crate::store::{
    limit_filter, store_local_filters, store_reset, store_server_query, text_filter, ListFilters,
    ListFiltersStoreFields,
};

/// List page: owner/category go to the server, the rest is applied locally
#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_app_context();
    let store = Store::new(ListFilters::default());
    let tracker = RwSignal::new(QueryTracker::new());

    // One server read per change of owner or category; older reads are superseded
    Effect::new(move |_| {
        let query = store_server_query(&store);
        let Some(ticket) = tracker.try_update(|t| t.begin_if_changed(&query)).flatten() else {
            return;
        };
        log::info!("[TodoList] Loading todos: {:?}", query);
        let service = ctx.service();
        spawn_local(async move {
            let result = service.get_todos(&query).await;
            match tracker.try_update(|t| t.resolve(ticket, result)).flatten() {
                Some(Resolution::Loaded(count)) => log::info!("[TodoList] Loaded {} todos", count),
                Some(Resolution::Failed(message)) => ctx.notify(message, Some("OK"), LIST_ERROR_MS),
                None => {}
            }
        });
    });

    // Local refinement never touches the network
    let filtered = Memo::new(move |_| {
        let local = store_local_filters(&store);
        let todos = tracker.with(|t| t.todos().to_vec());
        filter_todos(todos, &local)
    });

    let err_msg = move || tracker.with(|t| t.error().map(str::to_string));
    let loading = move || tracker.with(|t| t.is_pending());
    let status = Signal::derive(move || StatusFilter::from_status(store.status().get()));

    view! {
        <section class="todo-list-page">
            <h1 class="todo-list-title">"Todos"</h1>

            <div class="todo-filters">
                <input
                    type="text"
                    placeholder="Owner"
                    data-test="todoOwnerInput"
                    prop:value=move || store.owner().get().unwrap_or_default()
                    on:input=move |ev| store.owner().set(text_filter(event_target_value(&ev)))
                />
                <input
                    type="text"
                    placeholder="Category"
                    data-test="todoCategoryInput"
                    prop:value=move || store.category().get().unwrap_or_default()
                    on:input=move |ev| store.category().set(text_filter(event_target_value(&ev)))
                />
                <input
                    type="text"
                    placeholder="Body contains"
                    data-test="todoBodyInput"
                    prop:value=move || store.body().get().unwrap_or_default()
                    on:input=move |ev| store.body().set(text_filter(event_target_value(&ev)))
                />
                <input
                    type="number"
                    min="0"
                    placeholder="Limit"
                    data-test="todoLimitInput"
                    prop:value=move || store.limit().get().map(|l| l.to_string()).unwrap_or_default()
                    on:input=move |ev| store.limit().set(limit_filter(&event_target_value(&ev)))
                />
                <select
                    data-test="todoSortSelect"
                    prop:value=move || store.sort().get().map(|s| s.as_str()).unwrap_or_default()
                    on:change=move |ev| store.sort().set(event_target_value(&ev).parse::<TodoSort>().ok())
                >
                    <option value="">"Server order"</option>
                    {TodoSort::ALL.into_iter().map(|sort| view! {
                        <option value=sort.as_str()>{sort.label()}</option>
                    }).collect_view()}
                </select>
                <StatusSelector
                    current=status
                    on_change=move |filter: StatusFilter| store.status().set(filter.as_status())
                />
                <button type="button" class="reset-btn" on:click=move |_| store_reset(&store)>
                    "Reset"
                </button>
            </div>

            <div class="view-toggle" data-test="viewTypeRadio">
                <button
                    type="button"
                    class=move || if store.layout().get() == ViewMode::Card { "view-btn active" } else { "view-btn" }
                    on:click=move |_| store.layout().set(ViewMode::Card)
                >
                    "Card"
                </button>
                <button
                    type="button"
                    class=move || if store.layout().get() == ViewMode::List { "view-btn active" } else { "view-btn" }
                    on:click=move |_| store.layout().set(ViewMode::List)
                >
                    "List"
                </button>
            </div>

            <Show when=loading>
                <div class="loading">"Loading..."</div>
            </Show>

            {move || err_msg().map(|msg| view! { <div class="todo-error">{msg}</div> })}

            {move || match store.layout().get() {
                ViewMode::Card => view! {
                    <div class="todo-cards">
                        <For
                            each=move || filtered.get()
                            key=|todo| todo.id.clone()
                            children=|todo| view! { <TodoCard todo=todo /> }
                        />
                    </div>
                }.into_any(),
                ViewMode::List => view! {
                    <ul class="todo-list">
                        <For
                            each=move || filtered.get()
                            key=|todo| todo.id.clone()
                            children=|todo| view! { <TodoListItem todo=todo /> }
                        />
                    </ul>
                }.into_any(),
            }}

            <p class="todo-count">{move || format!("{} todos", filtered.with(|t| t.len()))}</p>

            <A href=AppRoute::New.path() attr:class="add-todo-fab" attr:data-test="addTodoButton">
                "+ Add Todo"
            </A>
        </section>
    }
}
