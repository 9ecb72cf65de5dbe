//! Contact Section

use leptos::prelude::*;

use site_config::editor::ContactField;
use site_config::model::icons::CONTACT_ICONS;
use site_config::model::{Lang, LinkType};
use site_config::render::{ContactSectionForm, CONTACT_SUBTITLE, CONTACT_TITLE};
use site_config::{ConfigStore, Resource};

use crate::components::form_binding::{check_input, text_block, text_input, FormBinding};
use crate::components::list_binding::{add_button, choices, item_header, item_select, item_text, ListBinding};
use crate::components::section_save::section_save_button;
use crate::context::use_admin_context;

const FORM_LABELS: [(&str, &str); 4] = [
    ("name", "Etichetta nome"),
    ("email", "Etichetta email"),
    ("message", "Etichetta messaggio"),
    ("submit", "Pulsante invio"),
];

#[component]
pub fn ContactSection() -> impl IntoView {
    let ctx = use_admin_context();
    let form = FormBinding::new(
        ctx.store,
        ContactSectionForm,
        |c| c.contact_settings.as_ref(),
        |c| c.contact_settings.get_or_insert_with(Default::default),
    );
    let items = ListBinding::new(
        ctx,
        |c| c.contact_settings.as_ref().map(|s| s.contact_items.clone()).unwrap_or_default(),
        ConfigStore::contact_items,
    );

    view! {
        <div class="section-contact">
            <h2>"Contatti"</h2>

            <div class="card">
                {text_block(form, CONTACT_TITLE, "Titolo")}
                {text_block(form, CONTACT_SUBTITLE, "Sottotitolo")}
            </div>

            <div class="card">
                <h3>"Recapiti"</h3>
                <div class="list-editor">
                    <For
                        each=move || items.ids()
                        key=|id| *id
                        children=move |id| {
                            let link_type = move || {
                                LinkType::parse(&items.text(&id, ContactField::LinkType)).unwrap_or_default()
                            };
                            view! {
                                <div class="list-item">
                                    {item_header(items, id, format!("Contatto #{}", id), Some(ContactField::Enabled), None)}
                                    {item_select(items, id, ContactField::Icon, "Icona", choices(CONTACT_ICONS.iter().map(|(name, _)| (*name, *name))))}
                                    {item_text(items, id, ContactField::Title(Lang::It), "Titolo (IT)")}
                                    {item_text(items, id, ContactField::Title(Lang::En), "Titolo (EN)")}
                                    {item_text(items, id, ContactField::Content, "Contenuto")}
                                    {item_select(items, id, ContactField::LinkType, "Tipo link", choices(LinkType::ALL.map(|t| (t.as_str(), t.as_str()))))}
                                    {item_text(items, id, ContactField::Link, "Link")}
                                    <small class="hint">{move || link_type().placeholder()}</small>
                                </div>
                            }
                        }
                    />
                    {add_button(items, "Aggiungi contatto")}
                </div>
            </div>

            <div class="card">
                <h3>"Modulo di contatto"</h3>
                {check_input(form, "contact-form-enabled".into(), "Mostra modulo")}
                {FORM_LABELS.into_iter().map(|(field, label)| view! {
                    <div class="form-row">
                        {text_input(form, format!("contact-form-{}-it", field), label)}
                        {text_input(form, format!("contact-form-{}-en", field), "English")}
                    </div>
                }).collect_view()}
            </div>

            {section_save_button(Resource::ContactSettings, "Impostazioni contatti salvate con successo!")}
        </div>
    }
}
