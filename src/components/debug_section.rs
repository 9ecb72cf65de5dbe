//! Debug Section
//!
//! Console verbosity flags. Changes apply to this panel's own logger at once.

use leptos::prelude::*;

use site_config::model::DebugConfig;
use site_config::ConfigStore;

use crate::components::form_binding::config_check;
use crate::logging::apply_debug_config;
use crate::store::{use_admin_store, AdminStore};

fn debug_check(
    store: AdminStore,
    label: &'static str,
    read: impl Fn(&DebugConfig) -> bool + Send + Sync + 'static,
    write: impl Fn(&mut DebugConfig, bool) + Send + Sync + 'static,
) -> impl IntoView {
    config_check(
        store,
        label,
        move |c: &ConfigStore| c.debug.as_ref().map(&read).unwrap_or(false),
        move |c: &mut ConfigStore, on| {
            let debug = c.debug.get_or_insert_with(DebugConfig::default);
            write(debug, on);
            apply_debug_config(debug);
        },
    )
}

#[component]
pub fn DebugSection() -> impl IntoView {
    let store = use_admin_store();

    view! {
        <div class="section-debug">
            <h2>"Debug"</h2>
            <div class="card">
                {debug_check(store, "Debug attivo", |d| d.enabled, |d, on| d.enabled = on)}
                {debug_check(store, "Output console", |d| d.console_output, |d, on| d.console_output = on)}
                {debug_check(store, "Indicatori visivi", |d| d.visual_indicators, |d, on| d.visual_indicators = on)}
            </div>
            <div class="card">
                <h3>"Livelli"</h3>
                {debug_check(store, "Info", |d| d.levels.info, |d, on| d.levels.info = on)}
                {debug_check(store, "Warning", |d| d.levels.warning, |d, on| d.levels.warning = on)}
                {debug_check(store, "Error", |d| d.levels.error, |d, on| d.levels.error = on)}
                {debug_check(store, "Debug", |d| d.levels.debug, |d, on| d.levels.debug = on)}
            </div>
        </div>
    }
}
