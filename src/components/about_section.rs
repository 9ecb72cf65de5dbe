//! About Section
//!
//! Texts, feature bullets, the side image with its effects, and the CTA.

use leptos::prelude::*;

use site_config::editor::FeatureField;
use site_config::model::icons::FEATURE_ICONS;
use site_config::model::{Align, Lang};
use site_config::render::{AboutForm, ABOUT_DESCRIPTION, ABOUT_TITLE};
use site_config::{ConfigStore, Resource};

use crate::components::form_binding::{align_group, check_input, text_block, text_input, FormBinding};
use crate::components::list_binding::{add_button, choices, item_header, item_select, item_text, ListBinding};
use crate::components::section_save::section_save_button;
use crate::context::use_admin_context;

const EFFECTS: [(&str, &str); 3] = [("border", "Bordo"), ("shadow", "Ombra"), ("glow", "Bagliore")];

fn effect_controls(form: FormBinding, effect: &'static str, label: &'static str) -> impl IntoView {
    let name = move |suffix: &str| format!("about-image-{}-{}", effect, suffix);
    view! {
        <fieldset class="image-effect">
            <legend>{label}</legend>
            {check_input(form, name("enabled"), "Attivo")}
            {text_input(form, name("color"), "Colore")}
            {form.has(&name("width")).then(|| text_input(form, name("width"), "Spessore"))}
            {form.has(&name("blur")).then(|| text_input(form, name("blur"), "Sfocatura"))}
        </fieldset>
    }
}

#[component]
pub fn AboutSection() -> impl IntoView {
    let ctx = use_admin_context();
    let form = FormBinding::new(
        ctx.store,
        AboutForm,
        |c| c.about_settings.as_ref(),
        |c| c.about_settings.get_or_insert_with(Default::default),
    );
    let features = ListBinding::new(
        ctx,
        |c| c.about_settings.as_ref().map(|s| s.features.clone()).unwrap_or_default(),
        ConfigStore::about_features,
    );

    view! {
        <div class="section-about">
            <h2>"Chi siamo"</h2>

            <div class="card">
                {text_block(form, ABOUT_TITLE, "Titolo")}
                {text_block(form, ABOUT_DESCRIPTION, "Descrizione")}
            </div>

            <div class="card">
                <h3>"Caratteristiche"</h3>
                {text_input(form, "about-features-position".into(), "Posizione elenco")}
                <div class="list-editor">
                    <For
                        each=move || features.ids()
                        key=|id| *id
                        children=move |id| view! {
                            <div class="list-item">
                                {item_header(features, id, format!("Caratteristica #{}", id), Some(FeatureField::Enabled), None)}
                                {item_select(features, id, FeatureField::Icon, "Icona", choices(FEATURE_ICONS.iter().map(|i| (*i, *i))))}
                                {item_text(features, id, FeatureField::Text(Lang::It), "Testo (IT)")}
                                {item_text(features, id, FeatureField::Text(Lang::En), "Testo (EN)")}
                            </div>
                        }
                    />
                    {add_button(features, "Aggiungi caratteristica")}
                </div>
            </div>

            <div class="card">
                <h3>"Immagine"</h3>
                {check_input(form, "about-image-enabled".into(), "Mostra immagine")}
                {text_input(form, "about-image-src".into(), "URL immagine")}
                {text_input(form, "about-image-alt".into(), "Testo alternativo")}
                {text_input(form, "about-image-position".into(), "Posizione")}
                {text_input(form, "about-image-width".into(), "Larghezza")}
                {text_input(form, "about-image-opacity".into(), "Opacità")}
                {EFFECTS.into_iter().map(|(effect, label)| effect_controls(form, effect, label)).collect_view()}
            </div>

            <div class="card">
                <h3>"Call to action"</h3>
                {check_input(form, "about-cta-enabled".into(), "Mostra pulsante")}
                {text_input(form, "about-cta-text-it".into(), "Testo (IT)")}
                {text_input(form, "about-cta-text-en".into(), "Testo (EN)")}
                {text_input(form, "about-cta-link".into(), "Link")}
                {align_group(form, "about-cta-align".into(), Align::Left)}
                {check_input(form, "about-cta-overlay".into(), "Apri overlay strategie")}
            </div>

            {section_save_button(Resource::AboutSettings, "Impostazioni about salvate con successo!")}
        </div>
    }
}
