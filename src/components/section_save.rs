//! Section Save Button
//!
//! Persists one section resource on its own, outside "save all".

use leptos::prelude::*;
use leptos::task::spawn_local;

use site_config::save::plan_section;
use site_config::Resource;

use crate::browser::BrowserStorage;
use crate::context::use_admin_context;
use crate::store::AdminStateStoreFields;

pub fn section_save_button(resource: Resource, success: &'static str) -> impl IntoView {
    let ctx = use_admin_context();
    let store = ctx.store;
    let (saving, set_saving) = signal(false);

    let save = move |_| {
        let plan = match plan_section(&store.config().read_untracked(), resource) {
            Ok(plan) => plan,
            Err(e) => {
                ctx.error(format!("Errore salvataggio: {}", e));
                return;
            }
        };
        set_saving.set(true);
        spawn_local(async move {
            let outcome = plan.execute(&ctx.api()).await;
            match outcome.finish(&mut store.config().write(), &BrowserStorage) {
                Ok(_) => ctx.success(success),
                Err(e) => ctx.error(format!("Errore salvataggio: {}", e)),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="section-actions">
            <button class="btn btn-primary" disabled=move || saving.get() on:click=save>
                {move || if saving.get() { "Salvataggio..." } else { "Salva Sezione" }}
            </button>
        </div>
    }
}
