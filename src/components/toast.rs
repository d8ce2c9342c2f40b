//! Toast Component
//!
//! Transient, dismissable notification shown at the bottom of the page.

use leptos::prelude::*;

use crate::context::use_app_context;

/// One notification on screen
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    /// Label of the dismiss button, if any
    pub action: Option<&'static str>,
}

/// At most one toast; a newer one replaces the older
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastState {
    next_id: u64,
    current: Option<Toast>,
}

impl ToastState {
    /// Replace the current toast, returning the id to expire it with
    pub fn show(&mut self, message: String, action: Option<&'static str>) -> u64 {
        self.next_id += 1;
        self.current = Some(Toast { id: self.next_id, message, action });
        self.next_id
    }

    /// Remove the toast only if `id` is still the one on screen
    pub fn expire(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|t| t.id == id) {
            self.current = None;
        }
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}

/// Bottom-of-page notification bound to `AppContext::toast`
#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_app_context();
    let toast = ctx.toast;
    let current = move || toast.with(|t| t.current().cloned());

    view! {
        {move || current().map(|t| {
            view! {
                <div class="toast" role="status">
                    <span class="toast-message">{t.message}</span>
                    {t.action.map(|label| view! {
                        <button
                            class="toast-action"
                            on:click=move |_| toast.update(|t| t.dismiss())
                        >
                            {label}
                        </button>
                    })}
                </div>
            }
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_toast_replaces_older() {
        let mut state = ToastState::default();
        let first = state.show("first".into(), None);
        let second = state.show("second".into(), Some("OK"));
        assert_ne!(first, second);
        assert_eq!(state.current().map(|t| t.message.as_str()), Some("second"));

        // the first toast's timer must not close the second
        state.expire(first);
        assert!(state.current().is_some());

        state.expire(second);
        assert!(state.current().is_none());
    }

    #[test]
    fn test_dismiss() {
        let mut state = ToastState::default();
        state.show("Added todo Chris Smith".into(), None);
        state.dismiss();
        assert_eq!(state.current(), None);
    }
}
