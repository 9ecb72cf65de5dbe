//! Admin Header
//!
//! Unsaved-changes indicator and the "save all" button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use site_config::save::plan_all;
use site_config::SaveError;

use crate::browser::BrowserStorage;
use crate::context::use_admin_context;
use crate::store::{AdminStateStoreFields, NotificationKind};

#[component]
pub fn AdminHeader() -> impl IntoView {
    let ctx = use_admin_context();
    let store = ctx.store;

    let is_dirty = move || store.config().with(|c| c.is_dirty());

    let save_all = move |_| {
        if store.saving().get_untracked() {
            return;
        }
        let plan = match plan_all(&store.config().read_untracked()) {
            Ok(plan) => plan,
            Err(SaveError::NothingToSave) => {
                ctx.notify(NotificationKind::Info, "Nessuna configurazione da salvare");
                return;
            }
            Err(e) => {
                ctx.error(format!("Errore durante il salvataggio: {}", e));
                return;
            }
        };
        store.saving().set(true);
        ctx.notify(NotificationKind::Info, "Salvataggio in corso...");
        spawn_local(async move {
            let api = ctx.api();
            let outcome = plan.execute(&api).await;
            let result = outcome.finish(&mut store.config().write(), &BrowserStorage);
            match result {
                Ok(report) => {
                    log::info!("save all wrote {} resources", report.saved.len());
                    ctx.success("Tutte le modifiche sono state salvate!");
                }
                Err(e) => ctx.error(format!("Errore durante il salvataggio: {}", e)),
            }
            store.saving().set(false);
        });
    };

    view! {
        <header class="admin-header">
            <h1>"Configurazione Sito"</h1>
            <div class="header-actions">
                <Show when=is_dirty>
                    <span class="unsaved-indicator">"● Modifiche non salvate"</span>
                </Show>
                <button
                    class="btn btn-primary"
                    disabled=move || store.saving().get()
                    on:click=save_all
                >
                    {move || if store.saving().get() { "Salvataggio..." } else { "Salva Tutto" }}
                </button>
            </div>
        </header>
    }
}
