//! General Settings Section
//!
//! Site identity, social links, headline performance figures and defaults.

use leptos::prelude::*;

use site_config::model::{PerformanceStats, Settings};
use site_config::ConfigStore;

use crate::components::form_binding::config_input;
use crate::store::{use_admin_store, AdminStore};

fn settings<R: Default>(config: &ConfigStore, read: impl FnOnce(&Settings) -> R) -> R {
    config.settings.as_ref().map(read).unwrap_or_default()
}

fn settings_mut(config: &mut ConfigStore) -> &mut Settings {
    config.settings.get_or_insert_with(Settings::default)
}

fn settings_input(
    store: AdminStore,
    label: &'static str,
    read: impl Fn(&Settings) -> String + Send + Sync + 'static,
    write: impl Fn(&mut Settings, String) + Send + Sync + 'static,
) -> impl IntoView {
    config_input(store, label, move |c| settings(c, &read), move |c, v| write(settings_mut(c), v))
}

#[component]
pub fn GeneralSection() -> impl IntoView {
    let store = use_admin_store();

    view! {
        <div class="section-general">
            <h2>"Impostazioni Generali"</h2>

            <div class="card">
                <h3>"Sito"</h3>
                {settings_input(store, "Titolo", |s| s.site.title.clone(), |s, v| s.site.title = v)}
                {settings_input(store, "Descrizione", |s| s.site.description.clone(), |s, v| s.site.description = v)}
                {settings_input(store, "Parole chiave", |s| s.site.keywords.clone(), |s, v| s.site.keywords = v)}
                {settings_input(store, "Email", |s| s.site.email.clone(), |s, v| s.site.email = v)}
                {settings_input(store, "Telefono", |s| s.site.phone.clone(), |s, v| s.site.phone = v)}
                {settings_input(store, "Telegram", |s| s.site.telegram.clone(), |s, v| s.site.telegram = v)}
            </div>

            <div class="card">
                <h3>"Social"</h3>
                {settings_input(store, "Facebook", |s| s.social.facebook.clone(), |s, v| s.social.facebook = v)}
                {settings_input(store, "Twitter", |s| s.social.twitter.clone(), |s, v| s.social.twitter = v)}
                {settings_input(store, "Instagram", |s| s.social.instagram.clone(), |s, v| s.social.instagram = v)}
                {settings_input(store, "LinkedIn", |s| s.social.linkedin.clone(), |s, v| s.social.linkedin = v)}
            </div>

            <div class="card">
                <h3>"Statistiche Performance"</h3>
                {PerformanceStats::KEYS.into_iter().map(|key| {
                    settings_input(
                        store,
                        key,
                        move |s| s.performance.text(key),
                        move |s, v| s.performance.set_text(key, &v),
                    )
                }).collect_view()}
            </div>

            <div class="card">
                <h3>"Predefiniti"</h3>
                {settings_input(
                    store,
                    "Lingua predefinita",
                    |s| s.features.default_language.clone(),
                    |s, v| s.features.default_language = v,
                )}
                {settings_input(
                    store,
                    "Tema predefinito",
                    |s| s.features.default_theme.clone(),
                    |s, v| s.features.default_theme = v,
                )}
            </div>
        </div>
    }
}
