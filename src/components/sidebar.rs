//! Sidebar Navigation

use leptos::prelude::*;

use crate::store::{use_admin_store, AdminStateStoreFields, Section};

#[component]
pub fn Sidebar() -> impl IntoView {
    let store = use_admin_store();

    view! {
        <nav class="admin-sidebar">
            <div class="sidebar-title">"Pannello Admin"</div>
            {Section::ALL.into_iter().map(|section| {
                let is_active = move || store.section().get() == section;
                view! {
                    <button
                        class=move || if is_active() { "nav-item active" } else { "nav-item" }
                        on:click=move |_| store.section().set(section)
                    >
                        {section.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
