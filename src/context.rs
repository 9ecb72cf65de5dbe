//! Admin Context
//!
//! Services shared by every section editor, provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo_timers::future::TimeoutFuture;

use site_config::HttpConfigApi;

use crate::config::AdminConfig;
use crate::store::{store_dismiss_notification, store_push_notification, AdminStore, NotificationKind};

/// App-wide services provided via context
#[derive(Clone, Copy)]
pub struct AdminContext {
    pub store: AdminStore,
    config: StoredValue<AdminConfig>,
}

impl AdminContext {
    pub fn new(store: AdminStore, config: AdminConfig) -> Self {
        Self { store, config: StoredValue::new(config) }
    }

    /// Client for the config API
    pub fn api(&self) -> HttpConfigApi {
        self.config.with_value(|c| HttpConfigApi::new(c.api_base.as_str()))
    }

    /// Show a transient notification
    pub fn notify(&self, kind: NotificationKind, message: impl Into<String>) {
        let message = message.into();
        match kind {
            NotificationKind::Error => log::error!("{}", message),
            NotificationKind::Warning => log::warn!("{}", message),
            _ => log::info!("{}", message),
        }
        let store = self.store;
        let id = store_push_notification(&store, kind, message);
        let lifetime = self.config.with_value(|c| c.notification_ms);
        spawn_local(async move {
            TimeoutFuture::new(lifetime).await;
            store_dismiss_notification(&store, id);
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(NotificationKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(NotificationKind::Error, message);
    }
}

pub fn use_admin_context() -> AdminContext {
    expect_context::<AdminContext>()
}
