//! Notification Area
//!
//! Transient messages; each removes itself after the configured lifetime.

use leptos::prelude::*;

use crate::store::{store_dismiss_notification, use_admin_store, AdminStateStoreFields};

#[component]
pub fn NotificationArea() -> impl IntoView {
    let store = use_admin_store();

    view! {
        <div class="notification-area">
            <For
                each=move || store.notifications().get()
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <div class=n.kind.class() on:click=move |_| store_dismiss_notification(&store, id)>
                            {n.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
