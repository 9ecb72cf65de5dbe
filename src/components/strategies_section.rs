//! Strategies Section
//!
//! One editor per risk tier: the strategy texts, its title style, and the
//! downloadable attachments with their uploaded files.

use leptos::prelude::*;
use leptos::task::spawn_local;

use site_config::editor::{discard_attachment_file, upload_attachment, AttachmentField};
use site_config::model::icons::{attachment_icon_class, ATTACHMENT_ICONS, ATTACHMENT_TYPES};
use site_config::model::{Lang, RiskTier, StrategyAttachment};
use site_config::render::{
    StrategyForm, ATTACHMENTS_TITLE, ATTACHMENTS_TITLE_STYLE, STRATEGY_DESCRIPTION, STRATEGY_NAME,
    STRATEGY_RISK_LABEL, STRATEGY_TAGLINE, STRATEGY_TITLE_STYLE,
};

use crate::browser::{file_link, picked_file, read_file};
use crate::components::form_binding::{check_input, style_block, text_block, text_input, FormBinding};
use crate::components::list_binding::{
    add_button, choices, item_check, item_header, item_select, item_text, item_textarea, ListBinding,
};
use crate::components::TabBar;
use crate::context::{use_admin_context, AdminContext};
use crate::store::{store_try_edit, AdminStateStoreFields};

fn tier_label(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::Low => "🟢 Basso rischio",
        RiskTier::Medium => "🟡 Medio rischio",
        RiskTier::High => "🔴 Alto rischio",
    }
}

#[component]
pub fn StrategiesSection() -> impl IntoView {
    let store = use_admin_context().store;
    let options = RiskTier::ALL.iter().map(|t| (*t, tier_label(*t).to_string())).collect::<Vec<_>>();

    view! {
        <div class="section-strategies">
            <h2>"Strategie"</h2>
            <TabBar
                options=options
                current=Signal::derive(move || store.tier().get())
                on_change=Callback::new(move |tier: RiskTier| store.tier().set(tier))
            />
            {move || {
                let tier = store.tier().get();
                view! { <StrategyEditor tier=tier /> }
            }}
        </div>
    }
}

/// Upload the picked file and point attachment `id` at it
fn upload_into(ctx: AdminContext, tier: RiskTier, id: u32, ev: web_sys::Event) {
    let Some(file) = picked_file(&ev) else {
        return;
    };
    spawn_local(async move {
        let name = file.name();
        let uploaded = match read_file(&file).await {
            Ok(bytes) => upload_attachment(&ctx.api(), &name, bytes).await.map_err(|e| e.to_string()),
            Err(e) => Err(e),
        };
        match uploaded {
            Ok(uploaded) => match store_try_edit(&ctx.store, |c| c.attach_uploaded(tier, id, &uploaded)) {
                Ok(()) => ctx.success("File caricato con successo!"),
                Err(e) => ctx.error(e.to_string()),
            },
            Err(e) => ctx.error(format!("Errore caricamento file: {}", e)),
        }
    });
}

#[component]
fn StrategyEditor(tier: RiskTier) -> impl IntoView {
    let ctx = use_admin_context();
    let form = FormBinding::new(
        ctx.store,
        StrategyForm,
        move |c| c.strategies.as_ref().and_then(|s| s.get(&tier)),
        move |c| c.strategies.get_or_insert_with(Default::default).entry(tier).or_default(),
    );
    let files = ListBinding::new(
        ctx,
        move |c| {
            c.strategies
                .as_ref()
                .and_then(|s| s.get(&tier))
                .map(|s| s.attachments.files.clone())
                .unwrap_or_default()
        },
        move |c| c.attachments(tier),
    );

    // The uploaded file goes away with its attachment
    let discard = Callback::new(move |removed: StrategyAttachment| {
        spawn_local(async move {
            discard_attachment_file(&ctx.api(), &removed).await;
        });
    });

    let accept = ATTACHMENT_TYPES.iter().map(|t| format!(".{}", t)).collect::<Vec<_>>().join(",");

    view! {
        <div class="strategy-editor">
            <div class="card">
                {text_block(form, STRATEGY_NAME, "Nome")}
                {style_block(form, STRATEGY_TITLE_STYLE, "Stile titolo")}
                {text_block(form, STRATEGY_TAGLINE, "Slogan")}
                {text_block(form, STRATEGY_RISK_LABEL, "Etichetta rischio")}
                <div class="form-row">
                    {text_input(form, "strategy-return".into(), "Rendimento atteso")}
                    {text_input(form, "strategy-drawdown".into(), "Drawdown massimo")}
                </div>
                {text_block(form, STRATEGY_DESCRIPTION, "Descrizione")}
            </div>

            <div class="card">
                <h3>"Allegati"</h3>
                {check_input(form, "attachments-enabled".into(), "Mostra allegati")}
                {text_block(form, ATTACHMENTS_TITLE, "Titolo sezione")}
                {style_block(form, ATTACHMENTS_TITLE_STYLE, "Stile titolo sezione")}

                <div class="list-editor">
                    <For
                        each=move || files.ids()
                        key=|id| *id
                        children=move |id| {
                            let accept = accept.clone();
                            let path = move || files.text(&id, AttachmentField::FilePath);
                            let icon = move || {
                                let icon = files.text(&id, AttachmentField::Icon);
                                let kind = if icon.is_empty() { files.text(&id, AttachmentField::FileType) } else { icon };
                                format!("fas {}", attachment_icon_class(&kind))
                            };
                            view! {
                                <div class="list-item attachment-item">
                                    {item_header(files, id, format!("Allegato #{}", id), Some(AttachmentField::Enabled), Some(discard))}
                                    {item_text(files, id, AttachmentField::Title(Lang::It), "Titolo (IT)")}
                                    {item_text(files, id, AttachmentField::Title(Lang::En), "Titolo (EN)")}
                                    {item_textarea(files, id, AttachmentField::Description(Lang::It), "Descrizione (IT)")}
                                    {item_textarea(files, id, AttachmentField::Description(Lang::En), "Descrizione (EN)")}
                                    <div class="style-row">
                                        {item_text(files, id, AttachmentField::DescriptionFontSize, "Dimensione descrizione")}
                                        {item_check(files, id, AttachmentField::DescriptionBold, "Grassetto")}
                                        {item_check(files, id, AttachmentField::DescriptionItalic, "Corsivo")}
                                        {item_check(files, id, AttachmentField::DescriptionUnderline, "Sottolineato")}
                                    </div>
                                    {item_select(files, id, AttachmentField::Icon, "Icona", choices(ATTACHMENT_ICONS.iter().copied()))}
                                    <div class="attachment-file">
                                        <i class=icon></i>
                                        <Show
                                            when=move || !path().is_empty()
                                            fallback=|| view! { <span class="muted">"Nessun file caricato"</span> }
                                        >
                                            <a href=move || file_link(&path()) target="_blank">{path}</a>
                                        </Show>
                                        <input
                                            type="file"
                                            accept=accept
                                            on:change=move |ev| upload_into(ctx, tier, id, ev)
                                        />
                                    </div>
                                </div>
                            }
                        }
                    />
                    {add_button(files, "Aggiungi allegato")}
                </div>
            </div>
        </div>
    }
}
