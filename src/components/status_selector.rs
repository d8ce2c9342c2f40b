//! Status Selector Component
//!
//! All / complete / incomplete toggle for the list view.

use leptos::prelude::*;

use crate::models::{StatusFilter, STATUS_OPTIONS};

/// Status filter buttons
#[component]
pub fn StatusSelector(
    #[prop(into)] current: Signal<StatusFilter>,
    on_change: impl Fn(StatusFilter) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <div class="status-selector" data-test="todoStatusSelect">
            {STATUS_OPTIONS.iter().map(|(value, label)| {
                let value = *value;
                let is_selected = move || current.get() == value;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "status-btn active" } else { "status-btn" }
                        on:click=move |_| on_change(value)
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
