//! Strategy Cards Section
//!
//! Carousel cards of the strategy overlay, per language.

use leptos::prelude::*;

use site_config::editor::StrategyCardField;
use site_config::model::{Lang, StrategyCard};
use site_config::ConfigStore;

use crate::browser::format_selection;
use crate::components::form_binding::config_input;
use crate::components::list_binding::{add_button, item_header, item_text, ListBinding};
use crate::components::translations_section::lang_tabs;
use crate::context::{use_admin_context, AdminContext};
use crate::store::AdminStateStoreFields;

/// Contenteditable card description, committed on blur
fn card_description(cards: ListBinding<StrategyCard>, id: String) -> impl IntoView {
    let initial = cards.items.with_untracked(|items| {
        items.iter().find(|c| c.id == id).map(|c| c.description.clone()).unwrap_or_default()
    });
    let commands = [("bold", "B"), ("italic", "I"), ("underline", "U"), ("insertUnorderedList", "•")];
    view! {
        <div class="form-group">
            <label>"Descrizione"</label>
            <div class="rich-toolbar">
                {commands.into_iter().map(|(command, glyph)| view! {
                    <button class="style-btn" on:mousedown=move |ev| {
                        ev.prevent_default();
                        format_selection(command);
                    }>{glyph}</button>
                }).collect_view()}
            </div>
            <div
                class="rich-text form-control"
                contenteditable="true"
                inner_html=initial
                on:blur=move |ev| {
                    let html = event_target::<web_sys::HtmlElement>(&ev).inner_html();
                    cards.update(id.clone(), StrategyCardField::Description, html);
                }
            ></div>
        </div>
    }
}

fn card_list(ctx: AdminContext, lang: Lang) -> impl IntoView {
    let cards = ListBinding::new(
        ctx,
        move |c| c.strategy_cards.as_ref().map(|s| s.get(lang).cards.clone()).unwrap_or_default(),
        move |c| c.strategy_cards(lang),
    );
    view! {
        <div class="list-editor">
            <For
                each=move || cards.ids()
                key=|id| id.clone()
                children=move |id| view! {
                    <div class="list-item strategy-card">
                        {item_header(cards, id.clone(), id.clone(), None, None)}
                        {item_text(cards, id.clone(), StrategyCardField::Title, "Titolo")}
                        {card_description(cards, id.clone())}
                        {item_text(cards, id.clone(), StrategyCardField::ButtonText, "Testo pulsante")}
                        {item_text(cards, id, StrategyCardField::ButtonLink, "Link pulsante")}
                    </div>
                }
            />
            {add_button(cards, "Aggiungi card")}
        </div>
    }
}

#[component]
pub fn StrategyCardsSection() -> impl IntoView {
    let ctx = use_admin_context();
    let store = ctx.store;

    view! {
        <div class="section-strategy-cards">
            <h2>"Card Strategie"</h2>
            {lang_tabs()}
            <div class="card">
                {config_input(
                    store,
                    "Titolo overlay",
                    move |c| {
                        c.strategy_cards.as_ref().map(|s| s.get(store.lang().get()).overlay_title.clone()).unwrap_or_default()
                    },
                    move |c: &mut ConfigStore, v| {
                        let lang = store.lang().get_untracked();
                        c.strategy_cards.get_or_insert_with(Default::default).get_mut(lang).overlay_title = v;
                    },
                )}
            </div>
            {move || {
                let lang = store.lang().get();
                card_list(ctx, lang)
            }}
        </div>
    }
}
