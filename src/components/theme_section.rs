//! Theme Colours Section

use leptos::prelude::*;

use crate::components::TabBar;
use crate::store::{store_read, use_admin_store, AdminStateStoreFields};

const THEMES: [(&str, &str); 2] = [("dark", "🌙 Scuro"), ("light", "☀️ Chiaro")];

#[component]
pub fn ThemeSection() -> impl IntoView {
    let store = use_admin_store();

    let variables = Memo::new(move |_| {
        let theme = store.theme().get();
        store_read(&store, |c| {
            c.theme_colors
                .as_ref()
                .and_then(|themes| themes.get(&theme))
                .map(|vars| vars.iter().map(|(k, v)| (k.clone(), v.clone())).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    });

    let options = THEMES.iter().map(|(id, label)| (id.to_string(), label.to_string())).collect::<Vec<_>>();

    view! {
        <div class="section-theme">
            <h2>"Colori Tema"</h2>
            <TabBar
                options=options
                current=Signal::derive(move || store.theme().get())
                on_change=Callback::new(move |theme: String| store.theme().set(theme))
            />
            <div class="color-grid">
                <For
                    each=move || variables.get()
                    key=|(name, color)| format!("{}={}", name, color)
                    children=move |(name, color)| {
                        let label = name.clone();
                        view! {
                            <div class="color-item">
                                <span class="color-swatch" style=format!("background:{}", color)></span>
                                <label>{label}</label>
                                <input
                                    type="text"
                                    class="form-control"
                                    value=color
                                    on:change=move |ev| {
                                        let theme = store.theme().get_untracked();
                                        store.config().write().set_theme_color(&theme, &name, event_target_value(&ev));
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
