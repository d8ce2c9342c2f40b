//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::TodoService;
use crate::components::ToastState;
use crate::config::ApiConfig;

/// How long a success notice stays up
pub const NOTICE_MS: u32 = 2_000;
/// How long an error notice stays up
pub const ERROR_MS: u32 = 5_000;
/// How long a list read failure stays up
pub const LIST_ERROR_MS: u32 = 6_000;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Transient notification
    pub toast: RwSignal<ToastState>,
    /// API location
    config: StoredValue<ApiConfig>,
}

impl AppContext {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            toast: RwSignal::new(ToastState::default()),
            config: StoredValue::new(config),
        }
    }

    /// Service for one or more API calls
    pub fn service(&self) -> TodoService {
        TodoService::new(self.config.get_value())
    }

    /// Show a transient notice that dismisses itself after `duration_ms`
    pub fn notify(&self, message: impl Into<String>, action: Option<&'static str>, duration_ms: u32) {
        let toast = self.toast;
        let Some(id) = toast.try_update(|t| t.show(message.into(), action)) else {
            return;
        };
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(duration_ms).await;
            let _ = toast.try_update(|t| t.expire(id));
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
