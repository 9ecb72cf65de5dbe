//! FAQ Section
//!
//! Per-language heading and question list.

use leptos::prelude::*;

use site_config::editor::FaqField;
use site_config::model::{FaqSection as FaqDocumentSection, Lang};
use site_config::ConfigStore;

use crate::components::form_binding::config_input;
use crate::components::list_binding::{add_button, item_header, item_text, item_textarea, ListBinding};
use crate::components::translations_section::lang_tabs;
use crate::context::{use_admin_context, AdminContext};
use crate::store::AdminStateStoreFields;

fn faq_mut(config: &mut ConfigStore, lang: Lang) -> &mut FaqDocumentSection {
    config.faqs.get_or_insert_with(Default::default).get_mut(lang)
}

fn faq_items(ctx: AdminContext, lang: Lang) -> impl IntoView {
    let items = ListBinding::new(
        ctx,
        move |c| c.faqs.as_ref().map(|f| f.get(lang).items.clone()).unwrap_or_default(),
        move |c| c.faq_items(lang),
    );
    view! {
        <div class="list-editor">
            <For
                each=move || items.ids()
                key=|id| *id
                children=move |id| view! {
                    <div class="list-item faq-item">
                        {item_header(items, id, format!("FAQ #{}", id), None, None)}
                        {item_text(items, id, FaqField::Question, "Domanda")}
                        {item_textarea(items, id, FaqField::Answer, "Risposta")}
                    </div>
                }
            />
            {add_button(items, "Aggiungi FAQ")}
        </div>
    }
}

#[component]
pub fn FaqSection() -> impl IntoView {
    let ctx = use_admin_context();
    let store = ctx.store;

    view! {
        <div class="section-faq">
            <h2>"FAQ"</h2>
            {lang_tabs()}
            <div class="card">
                {config_input(
                    store,
                    "Titolo sezione",
                    move |c| c.faqs.as_ref().map(|f| f.get(store.lang().get()).section_title.clone()).unwrap_or_default(),
                    move |c, v| faq_mut(c, store.lang().get_untracked()).section_title = v,
                )}
                {config_input(
                    store,
                    "Sottotitolo",
                    move |c| c.faqs.as_ref().map(|f| f.get(store.lang().get()).subtitle.clone()).unwrap_or_default(),
                    move |c, v| faq_mut(c, store.lang().get_untracked()).subtitle = v,
                )}
            </div>
            {move || {
                let lang = store.lang().get();
                faq_items(ctx, lang)
            }}
        </div>
    }
}
