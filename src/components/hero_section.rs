//! Hero Section
//!
//! Title block, stat counters, the visual panel and the CTA buttons.

use leptos::prelude::*;

use site_config::editor::{HeroCtaField, HeroStatField};
use site_config::model::{Align, CtaSize, CtaStyle, HeroSettings, Lang};
use site_config::render::{HeroForm, HERO_SUBTITLE, HERO_TITLE};
use site_config::{ConfigStore, Resource};

use crate::components::form_binding::{align_group, check_input, style_toggles, text_block, text_input, FormBinding};
use crate::components::list_binding::{add_button, choices, item_header, item_select, item_text, ListBinding};
use crate::components::section_save::section_save_button;
use crate::context::use_admin_context;

fn hero_list<T: Clone>(config: &ConfigStore, list: impl FnOnce(&HeroSettings) -> &Vec<T>) -> Vec<T> {
    config.hero_settings.as_ref().map(|h| list(h).clone()).unwrap_or_default()
}

#[component]
pub fn HeroSection() -> impl IntoView {
    let ctx = use_admin_context();
    let form = FormBinding::new(
        ctx.store,
        HeroForm,
        |c| c.hero_settings.as_ref(),
        |c| c.hero_settings.get_or_insert_with(Default::default),
    );
    let stats = ListBinding::new(ctx, |c| hero_list(c, |h| &h.stats), ConfigStore::hero_stats);
    let ctas = ListBinding::new(ctx, |c| hero_list(c, |h| &h.cta_buttons), ConfigStore::hero_cta_buttons);

    let styles = [CtaStyle::Primary, CtaStyle::Secondary];
    let sizes = [CtaSize::Normal, CtaSize::Large];

    view! {
        <div class="section-hero">
            <h2>"Hero"</h2>

            <div class="card">
                {text_block(form, HERO_TITLE, "Titolo")}
                {text_block(form, HERO_SUBTITLE, "Sottotitolo")}
            </div>

            <div class="card">
                <h3>"Statistiche"</h3>
                <div class="style-row">
                    {text_input(form, "hero-stats-number-size".into(), "Dimensione numeri")}
                    {style_toggles(form, |s| format!("hero-stats-number-{}", s))}
                </div>
                <div class="style-row">
                    {text_input(form, "hero-stats-label-size".into(), "Dimensione etichette")}
                    {style_toggles(form, |s| format!("hero-stats-label-{}", s))}
                </div>
                {text_input(form, "hero-stats-gap".into(), "Spaziatura")}
                {text_input(form, "hero-stats-layout".into(), "Layout")}

                <div class="list-editor">
                    <For
                        each=move || stats.ids()
                        key=|id| *id
                        children=move |id| view! {
                            <div class="list-item">
                                {item_header(stats, id, format!("Statistica #{}", id), Some(HeroStatField::Enabled), None)}
                                {item_text(stats, id, HeroStatField::Number, "Numero")}
                                {item_text(stats, id, HeroStatField::Label(Lang::It), "Etichetta (IT)")}
                                {item_text(stats, id, HeroStatField::Label(Lang::En), "Etichetta (EN)")}
                            </div>
                        }
                    />
                    {add_button(stats, "Aggiungi statistica")}
                </div>
            </div>

            <div class="card">
                <h3>"Elemento visivo"</h3>
                {check_input(form, "hero-visual-enabled".into(), "Mostra elemento visivo")}
                {text_input(form, "hero-visual-position".into(), "Posizione")}
                {check_input(form, "hero-visual-integrate-editor".into(), "Integra grafici performance")}
            </div>

            <div class="card">
                <h3>"Pulsanti CTA"</h3>
                {check_input(form, "hero-cta-enabled".into(), "Mostra pulsanti")}
                {align_group(form, "hero-cta-align".into(), Align::Center)}
                {text_input(form, "hero-cta-gap".into(), "Spaziatura")}

                <div class="list-editor">
                    <For
                        each=move || ctas.ids()
                        key=|id| *id
                        children=move |id| view! {
                            <div class="list-item">
                                {item_header(ctas, id, format!("Pulsante #{}", id), Some(HeroCtaField::Enabled), None)}
                                {item_text(ctas, id, HeroCtaField::Text(Lang::It), "Testo (IT)")}
                                {item_text(ctas, id, HeroCtaField::Text(Lang::En), "Testo (EN)")}
                                {item_text(ctas, id, HeroCtaField::Link, "Link")}
                                {item_select(ctas, id, HeroCtaField::Style, "Stile", choices(styles.map(|s| (s.as_str(), s.as_str()))))}
                                {item_select(ctas, id, HeroCtaField::Size, "Dimensione", choices(sizes.map(|s| (s.as_str(), s.as_str()))))}
                            </div>
                        }
                    />
                    {add_button(ctas, "Aggiungi pulsante")}
                </div>
            </div>

            {section_save_button(Resource::HeroSettings, "Impostazioni Hero salvate con successo!")}
        </div>
    }
}
