//! Translations Section
//!
//! Flat key/text tables, one tab per language.

use leptos::prelude::*;

use site_config::model::Lang;

use crate::components::TabBar;
use crate::store::{store_read, use_admin_store, AdminStateStoreFields};

pub fn lang_tabs() -> impl IntoView {
    let store = use_admin_store();
    let options = vec![(Lang::It, "🇮🇹 Italiano".to_string()), (Lang::En, "🇬🇧 English".to_string())];
    view! {
        <TabBar
            options=options
            current=Signal::derive(move || store.lang().get())
            on_change=Callback::new(move |lang: Lang| store.lang().set(lang))
        />
    }
}

#[component]
pub fn TranslationsSection() -> impl IntoView {
    let store = use_admin_store();

    let keys = Memo::new(move |_| {
        let lang = store.lang().get();
        store_read(&store, |c| c.translations(lang).map(|t| t.keys().cloned().collect::<Vec<_>>()).unwrap_or_default())
    });

    view! {
        <div class="section-translations">
            <h2>"Traduzioni"</h2>
            {lang_tabs()}
            <div class="translation-editor">
                <For
                    each=move || keys.get()
                    key=|key| key.clone()
                    children=move |key| {
                        let read_key = key.clone();
                        let label = key.clone();
                        view! {
                            <div class="translation-item">
                                <div class="translation-key">{label}</div>
                                <input
                                    type="text"
                                    class="form-control"
                                    prop:value=move || {
                                        let lang = store.lang().get();
                                        store_read(&store, |c| {
                                            c.translations(lang).and_then(|t| t.get(&read_key).cloned()).unwrap_or_default()
                                        })
                                    }
                                    on:change=move |ev| {
                                        let lang = store.lang().get_untracked();
                                        store.config().write().set_translation(lang, &key, event_target_value(&ev));
                                    }
                                />
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
