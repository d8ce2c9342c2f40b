//! Add Todo Form Component
//!
//! Creation form with per-field validation messages.

use std::collections::HashSet;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::context::{use_app_context, ERROR_MS, NOTICE_MS};
use crate::route::AppRoute;
use crate::validation::{submit_todo, AddTodoForm, Field, FieldErrors, SubmitOutcome};

const ALL_FIELDS: [Field; 4] = [Field::Owner, Field::Category, Field::Status, Field::Body];

/// Select value to an optional status
fn parse_status(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Inline error for one field, shown once the field has been touched
#[component]
fn FieldError(
    field: Field,
    errors: Memo<FieldErrors>,
    touched: RwSignal<HashSet<Field>>,
) -> impl IntoView {
    let message = move || {
        if touched.with(|t| t.contains(&field)) {
            errors.with(|e| e.get(field))
        } else {
            None
        }
    };
    view! {
        {move || message().map(|msg| view! { <span class="field-error">{msg}</span> })}
    }
}

/// Form for creating a new todo
#[component]
pub fn AddTodoFormView() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let form = RwSignal::new(AddTodoForm::default());
    let touched = RwSignal::new(HashSet::<Field>::new());
    let (submitting, set_submitting) = signal(false);
    let errors = Memo::new(move |_| form.with(|f| f.validate()));

    let touch = move |field: Field| touched.update(|t| {
        t.insert(field);
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let entered = form.get_untracked();
        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            let service = ctx.service();
            match submit_todo(&service, &entered).await {
                SubmitOutcome::Added { notice, route, .. } => {
                    ctx.notify(notice, None, NOTICE_MS);
                    navigate(&route.path(), Default::default());
                }
                SubmitOutcome::Failed { notice, .. } => {
                    ctx.notify(notice, Some("OK"), ERROR_MS);
                }
                SubmitOutcome::Invalid(_) => {
                    touched.try_update(|t| t.extend(ALL_FIELDS));
                }
            }
            // the form is gone after navigating away
            let _ = set_submitting.try_set(false);
        });
    };

    view! {
        <section class="add-todo-page">
            <h1 class="add-todo-title">"New Todo"</h1>
            <form class="add-todo-form" on:submit=submit>
                <label>
                    "Owner"
                    <input
                        type="text"
                        data-test="ownerInput"
                        prop:value=move || form.with(|f| f.owner.clone())
                        on:input=move |ev| {
                            form.update(|f| f.owner = event_target_value(&ev));
                            touch(Field::Owner);
                        }
                        on:blur=move |_| touch(Field::Owner)
                    />
                    <FieldError field=Field::Owner errors=errors touched=touched />
                </label>

                <label>
                    "Category"
                    <input
                        type="text"
                        data-test="categoryInput"
                        prop:value=move || form.with(|f| f.category.clone())
                        on:input=move |ev| {
                            form.update(|f| f.category = event_target_value(&ev));
                            touch(Field::Category);
                        }
                        on:blur=move |_| touch(Field::Category)
                    />
                    <FieldError field=Field::Category errors=errors touched=touched />
                </label>

                <label>
                    "Status"
                    <select
                        data-test="statusSelect"
                        on:change=move |ev| {
                            form.update(|f| f.status = parse_status(&event_target_value(&ev)));
                            touch(Field::Status);
                        }
                        on:blur=move |_| touch(Field::Status)
                    >
                        <option value="" selected=move || form.with(|f| f.status.is_none())>"Choose..."</option>
                        <option value="true" selected=move || form.with(|f| f.status == Some(true))>"Complete"</option>
                        <option value="false" selected=move || form.with(|f| f.status == Some(false))>"Incomplete"</option>
                    </select>
                    <FieldError field=Field::Status errors=errors touched=touched />
                </label>

                <label>
                    "Body"
                    <textarea
                        data-test="bodyInput"
                        prop:value=move || form.with(|f| f.body.clone().unwrap_or_default())
                        on:input=move |ev| {
                            form.update(|f| f.body = Some(event_target_value(&ev)));
                            touch(Field::Body);
                        }
                        on:blur=move |_| touch(Field::Body)
                    ></textarea>
                    <FieldError field=Field::Body errors=errors touched=touched />
                </label>

                <div class="add-todo-actions">
                    <A href=AppRoute::List.path() attr:class="cancel-btn">"Cancel"</A>
                    <button
                        type="submit"
                        data-test="confirmAddTodoButton"
                        disabled=move || submitting.get() || !errors.with(|e| e.is_empty())
                    >
                        "Add Todo"
                    </button>
                </div>
            </form>
        </section>
    }
}
