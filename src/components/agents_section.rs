//! Agents Section
//!
//! Benefit cards and the section texts with its CTA.

use leptos::prelude::*;

use site_config::editor::BenefitField;
use site_config::model::icons::BENEFIT_ICONS;
use site_config::model::Lang;
use site_config::render::{AgentsForm, AGENTS_CTA_DESCRIPTION, AGENTS_CTA_TITLE, AGENTS_SUBTITLE, AGENTS_TITLE};
use site_config::{ConfigStore, Resource};

use crate::components::form_binding::{text_block, text_input, FormBinding};
use crate::components::list_binding::{add_button, choices, item_header, item_select, item_text, item_textarea, ListBinding};
use crate::components::section_save::section_save_button;
use crate::components::TabBar;
use crate::context::use_admin_context;

#[derive(Clone, Copy, PartialEq)]
enum AgentsTab {
    Benefits,
    General,
}

#[component]
pub fn AgentsSection() -> impl IntoView {
    let ctx = use_admin_context();
    let (tab, set_tab) = signal(AgentsTab::Benefits);

    let form = FormBinding::new(
        ctx.store,
        AgentsForm,
        |c| c.agents_settings.as_ref(),
        |c| c.agents_settings.get_or_insert_with(Default::default),
    );
    let benefits = ListBinding::new(ctx, |c| c.agents_benefits.clone().unwrap_or_default(), ConfigStore::benefits);

    let tabs = vec![(AgentsTab::Benefits, "Vantaggi".to_string()), (AgentsTab::General, "Generale".to_string())];

    let benefits_tab = move || view! {
        <div class="list-editor">
            <For
                each=move || benefits.ids()
                key=|id| *id
                children=move |id| view! {
                    <div class="list-item benefit-card">
                        {item_header(benefits, id, format!("Vantaggio #{}", id), Some(BenefitField::Enabled), None)}
                        {item_select(benefits, id, BenefitField::Icon, "Icona", choices(BENEFIT_ICONS.iter().map(|i| (*i, *i))))}
                        {item_text(benefits, id, BenefitField::Title(Lang::It), "Titolo (IT)")}
                        {item_text(benefits, id, BenefitField::Title(Lang::En), "Titolo (EN)")}
                        {item_textarea(benefits, id, BenefitField::Description(Lang::It), "Descrizione (IT)")}
                        {item_textarea(benefits, id, BenefitField::Description(Lang::En), "Descrizione (EN)")}
                    </div>
                }
            />
            {add_button(benefits, "Aggiungi vantaggio")}
        </div>
    };

    let general_tab = move || view! {
        <div class="card">
            {text_block(form, AGENTS_TITLE, "Titolo")}
            {text_block(form, AGENTS_SUBTITLE, "Sottotitolo")}
        </div>
        <div class="card">
            <h3>"Call to action"</h3>
            {text_block(form, AGENTS_CTA_TITLE, "Titolo CTA")}
            {text_block(form, AGENTS_CTA_DESCRIPTION, "Descrizione CTA")}
            {text_input(form, "agents-cta-btn-it".into(), "Pulsante (IT)")}
            {text_input(form, "agents-cta-btn-en".into(), "Pulsante (EN)")}
            {text_input(form, "agents-cta-btn-link".into(), "Link pulsante")}
        </div>
        {section_save_button(Resource::AgentsSettings, "Impostazioni agenti salvate con successo!")}
    };

    view! {
        <div class="section-agents">
            <h2>"Agenti"</h2>
            <TabBar
                options=tabs
                current=tab
                on_change=Callback::new(move |t| set_tab.set(t))
            />
            {move || match tab.get() {
                AgentsTab::Benefits => benefits_tab().into_any(),
                AgentsTab::General => general_tab().into_any(),
            }}
        </div>
    }
}
