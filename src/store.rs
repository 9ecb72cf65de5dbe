//! Admin Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The loaded
//! `ConfigStore` lives here and is the only copy of the configuration.

use leptos::prelude::*;
use reactive_stores::Store;

use site_config::model::{Lang, RiskTier};
use site_config::{ConfigStore, EditResult};

use crate::config::AdminConfig;

/// Sidebar sections
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    General,
    Translations,
    Theme,
    Strategies,
    Hero,
    Agents,
    Contact,
    About,
    Charts,
    Faq,
    StrategyCards,
    Debug,
}

impl Section {
    pub const ALL: [Section; 12] = [
        Section::General,
        Section::Translations,
        Section::Theme,
        Section::Strategies,
        Section::Hero,
        Section::Agents,
        Section::Contact,
        Section::About,
        Section::Charts,
        Section::Faq,
        Section::StrategyCards,
        Section::Debug,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::General => "Generale",
            Section::Translations => "Traduzioni",
            Section::Theme => "Colori Tema",
            Section::Strategies => "Strategie",
            Section::Hero => "Hero",
            Section::Agents => "Agenti",
            Section::Contact => "Contatti",
            Section::About => "Chi Siamo",
            Section::Charts => "Grafici Performance",
            Section::Faq => "FAQ",
            Section::StrategyCards => "Strategy Cards",
            Section::Debug => "Debug",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
    Warning,
}

impl NotificationKind {
    pub fn class(self) -> &'static str {
        match self {
            NotificationKind::Success => "notification success",
            NotificationKind::Error => "notification error",
            NotificationKind::Info => "notification info",
            NotificationKind::Warning => "notification warning",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub message: String,
}

/// Global admin state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AdminState {
    /// Every config resource
    pub config: ConfigStore,
    /// Set once the admin bootstrap succeeded
    pub loaded: bool,
    /// A save is in flight
    pub saving: bool,
    pub section: Section,
    /// Content language tab (translations, FAQ, strategy cards)
    pub lang: Lang,
    pub tier: RiskTier,
    pub theme: String,
    /// Selected performance chart
    pub chart: Option<u32>,
    pub notifications: Vec<Notification>,
    pub next_notification_id: u32,
}

impl AdminState {
    pub fn new(config: &AdminConfig) -> Self {
        Self {
            lang: config.default_lang,
            tier: config.default_tier,
            theme: config.default_theme.to_string(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AdminStore = Store<AdminState>;

/// Get the admin store from context
pub fn use_admin_store() -> AdminStore {
    expect_context::<AdminStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply a direct edit to the configuration and mark it dirty
pub fn store_edit(store: &AdminStore, edit: impl FnOnce(&mut ConfigStore)) {
    let config_field = store.config();
    let mut config = config_field.write();
    edit(&mut config);
    config.mark_dirty();
}

/// Run a checked edit; dirtiness is handled by the editor itself
pub fn store_try_edit<R>(store: &AdminStore, edit: impl FnOnce(&mut ConfigStore) -> EditResult<R>) -> EditResult<R> {
    edit(&mut store.config().write())
}

/// Read from the configuration, tracking it
pub fn store_read<R>(store: &AdminStore, read: impl FnOnce(&ConfigStore) -> R) -> R {
    store.config().with(read)
}

pub fn store_push_notification(store: &AdminStore, kind: NotificationKind, message: String) -> u32 {
    let id = {
        let next_field = store.next_notification_id();
        let mut next = next_field.write();
        *next += 1;
        *next
    };
    store.notifications().write().push(Notification { id, kind, message });
    id
}

pub fn store_dismiss_notification(store: &AdminStore, id: u32) {
    store.notifications().write().retain(|n| n.id != id);
}
