//! Site Admin App
//!
//! Sidebar, header and the editor of the selected section.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use site_config::ConfigStore;

use crate::components::{
    AboutSection, AdminHeader, AgentsSection, ChartsSection, ContactSection, DebugSection, FaqSection,
    GeneralSection, HeroSection, NotificationArea, Sidebar, StrategiesSection, StrategyCardsSection, ThemeSection,
    TranslationsSection,
};
use crate::config::AdminConfig;
use crate::context::AdminContext;
use crate::logging;
use crate::store::{AdminState, AdminStateStoreFields, Section};

#[component]
pub fn App() -> impl IntoView {
    let config = AdminConfig::from_document();
    let store = Store::new(AdminState::new(&config));
    let ctx = AdminContext::new(store, config);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load every resource once on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let api = ctx.api();
            log::info!("loading configuration from {}", api.base_url());
            match ConfigStore::load_admin(&api).await {
                Ok(loaded) => {
                    if let Some(debug) = &loaded.debug {
                        logging::apply_debug_config(debug);
                    }
                    let first_chart = loaded
                        .performance_charts
                        .as_ref()
                        .and_then(|charts| charts.charts.first())
                        .map(|chart| chart.id);
                    store.chart().set(first_chart);
                    store.config().set(loaded);
                    store.loaded().set(true);
                }
                Err(e) => ctx.error(format!("Errore caricamento configurazioni dal server: {}", e)),
            }
        });
    });

    let current_section = move || match store.section().get() {
        Section::General => view! { <GeneralSection /> }.into_any(),
        Section::Translations => view! { <TranslationsSection /> }.into_any(),
        Section::Theme => view! { <ThemeSection /> }.into_any(),
        Section::Strategies => view! { <StrategiesSection /> }.into_any(),
        Section::Hero => view! { <HeroSection /> }.into_any(),
        Section::Agents => view! { <AgentsSection /> }.into_any(),
        Section::Contact => view! { <ContactSection /> }.into_any(),
        Section::About => view! { <AboutSection /> }.into_any(),
        Section::Charts => view! { <ChartsSection /> }.into_any(),
        Section::Faq => view! { <FaqSection /> }.into_any(),
        Section::StrategyCards => view! { <StrategyCardsSection /> }.into_any(),
        Section::Debug => view! { <DebugSection /> }.into_any(),
    };

    view! {
        <div class="admin-layout">
            <Sidebar />

            <main class="admin-main">
                <AdminHeader />

                <Show
                    when=move || store.loaded().get()
                    fallback=|| view! { <div class="loading">"Caricamento configurazione..."</div> }
                >
                    <section class="admin-section active">{current_section}</section>
                </Show>
            </main>

            <NotificationArea />
        </div>
    }
}
