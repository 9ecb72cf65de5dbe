//! Form Binding
//!
//! Two-way binding between a section form and the store. The controls are
//! painted from the store; every change writes the control and harvests
//! the whole block straight back into the store.

use std::sync::Arc;

use leptos::prelude::*;

use site_config::model::Align;
use site_config::render::{SectionForm, StyleBlockForm, TextBlockForm};
use site_config::{ConfigStore, Control, FormFields};

use crate::browser::format_selection;
use crate::components::TabBar;
use crate::store::{store_edit, store_read, AdminStore};

type Commit = Arc<dyn Fn(&FormFields) + Send + Sync>;

#[derive(Clone, Copy)]
pub struct FormBinding {
    fields: Memo<FormFields>,
    commit: StoredValue<Commit>,
}

impl FormBinding {
    /// `read` locates the model, `write` creates it on first edit
    pub fn new<F>(
        store: AdminStore,
        form: F,
        read: impl Fn(&ConfigStore) -> Option<&F::Model> + Send + Sync + 'static,
        write: impl Fn(&mut ConfigStore) -> &mut F::Model + Send + Sync + 'static,
    ) -> Self
    where
        F: SectionForm + Copy + Send + Sync + 'static,
        F::Model: Default,
    {
        let fields = Memo::new(move |_| {
            store_read(&store, |config| {
                let mut fields = FormFields::new();
                match read(config) {
                    Some(model) => form.paint(model, &mut fields),
                    None => form.paint(&F::Model::default(), &mut fields),
                }
                fields
            })
        });
        let commit: Commit = Arc::new(move |fields: &FormFields| {
            store_edit(&store, |config| form.harvest(fields, write(config)));
        });
        Self { fields, commit: StoredValue::new(commit) }
    }

    fn change(&self, apply: impl FnOnce(&mut FormFields) -> bool) {
        let mut fields = self.fields.get_untracked();
        if apply(&mut fields) {
            let commit = self.commit.get_value();
            commit(&fields);
        }
    }

    pub fn text(&self, name: &str) -> String {
        self.fields.with(|f| f.get_field(name))
    }

    pub fn set_text(&self, name: &str, value: String) {
        self.change(|f| f.set_field(name, value));
    }

    pub fn flag(&self, name: &str) -> bool {
        self.fields.with(|f| f.style_flag(name) || f.checked(name))
    }

    pub fn toggle_style(&self, name: &str) {
        self.change(|f| {
            let active = f.style_flag(name);
            f.set_style_flag(name, !active)
        });
    }

    pub fn set_checked(&self, name: &str, checked: bool) {
        self.change(|f| f.set_checked(name, checked));
    }

    pub fn alignment(&self, name: &str, fallback: Align) -> Align {
        self.fields.with(|f| f.alignment(name, fallback))
    }

    pub fn set_alignment(&self, name: &str, align: Align) {
        self.change(|f| f.set_alignment(name, Some(align)));
    }

    pub fn has(&self, name: &str) -> bool {
        self.fields.with_untracked(|f| f.contains(name))
    }

    fn is_rich(&self, name: &str) -> bool {
        self.fields.with_untracked(|f| matches!(f.control(name), Some(Control::RichText(_))))
    }
}

// ========================
// Widgets
// ========================

/// Labelled input bound to a text control
pub fn text_input(binding: FormBinding, name: String, label: &'static str) -> impl IntoView {
    let read_name = name.clone();
    view! {
        <div class="form-group">
            <label>{label}</label>
            <input
                type="text"
                class="form-control"
                prop:value=move || binding.text(&read_name)
                on:change=move |ev| binding.set_text(&name, event_target_value(&ev))
            />
        </div>
    }
}

/// Labelled checkbox bound to a check control
pub fn check_input(binding: FormBinding, name: String, label: &'static str) -> impl IntoView {
    let read_name = name.clone();
    view! {
        <label class="checkbox-label">
            <input
                type="checkbox"
                prop:checked=move || binding.flag(&read_name)
                on:change=move |ev| binding.set_checked(&name, event_target_checked(&ev))
            />
            {label}
        </label>
    }
}

/// Contenteditable region with a small formatting toolbar
pub fn rich_text_input(binding: FormBinding, name: String, label: &'static str) -> impl IntoView {
    let initial = binding.fields.with_untracked(|f| f.get_field(&name));
    let toolbar = [("bold", "B"), ("italic", "I"), ("underline", "U"), ("insertUnorderedList", "•")];
    view! {
        <div class="form-group">
            <label>{label}</label>
            <div class="rich-text-toolbar">
                {toolbar.into_iter().map(|(command, glyph)| view! {
                    <button
                        class="format-btn"
                        on:mousedown=move |ev| {
                            ev.prevent_default();
                            format_selection(command);
                        }
                    >
                        {glyph}
                    </button>
                }).collect_view()}
            </div>
            <div
                class="rich-text-editor"
                contenteditable="true"
                inner_html=initial
                on:blur=move |ev| {
                    let html = event_target::<web_sys::HtmlElement>(&ev).inner_html();
                    binding.set_text(&name, html);
                }
            ></div>
        </div>
    }
}

/// Bold/italic/underline buttons
pub fn style_toggles(binding: FormBinding, prefix: impl Fn(&str) -> String) -> impl IntoView {
    let buttons = [("bold", "B"), ("italic", "I"), ("underline", "U")];
    view! {
        <div class="style-toggles">
            {buttons.into_iter().map(|(style, glyph)| {
                let name = prefix(style);
                let read_name = name.clone();
                view! {
                    <button
                        class=move || if binding.flag(&read_name) { "style-btn active" } else { "style-btn" }
                        on:click=move |_| binding.toggle_style(&name)
                    >
                        {glyph}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// Left/center/right buttons
pub fn align_group(binding: FormBinding, name: String, fallback: Align) -> impl IntoView {
    let read_name = name.clone();
    let options = Align::ALL.iter().map(|a| (*a, a.as_str().to_string())).collect::<Vec<_>>();
    view! {
        <TabBar
            options=options
            class="align-group"
            current=Signal::derive(move || binding.alignment(&read_name, fallback))
            on_change=Callback::new(move |align: Align| binding.set_alignment(&name, align))
        />
    }
}

/// Every control a text block painted: both languages plus its style controls
pub fn text_block(binding: FormBinding, form: TextBlockForm, label: &'static str) -> impl IntoView {
    let lang_input = move |suffix: &str, lang_label: &'static str| {
        let name = form.name(suffix);
        if binding.is_rich(&name) {
            rich_text_input(binding, name, lang_label).into_any()
        } else {
            text_input(binding, name, lang_label).into_any()
        }
    };
    let size = form.name("font-size");
    let line_height = form.name("line-height");
    let margin_bottom = form.name("margin-bottom");
    let margin_top = form.name("margin-top");
    let align = form.name("align");

    view! {
        <fieldset class="text-block">
            <legend>{label}</legend>
            {lang_input("it", "Italiano")}
            {lang_input("en", "English")}
            <div class="style-row">
                {binding.has(&size).then(|| text_input(binding, size, "Dimensione font"))}
                {binding.has(&form.name("bold")).then(|| style_toggles(binding, move |s| form.name(s)))}
                {binding.has(&align).then(|| align_group(binding, align, form.default_align))}
                {binding.has(&line_height).then(|| text_input(binding, line_height, "Interlinea"))}
                {binding.has(&margin_bottom).then(|| text_input(binding, margin_bottom, "Margine inferiore"))}
                {binding.has(&margin_top).then(|| text_input(binding, margin_top, "Margine superiore"))}
            </div>
        </fieldset>
    }
}

/// Style-only block: size, styles, alignment, bottom margin
pub fn style_block(binding: FormBinding, form: StyleBlockForm, label: &'static str) -> impl IntoView {
    view! {
        <fieldset class="style-block">
            <legend>{label}</legend>
            <div class="style-row">
                {text_input(binding, form.name("font-size"), "Dimensione font")}
                {style_toggles(binding, move |s| form.name(s))}
                {align_group(binding, form.name("align"), form.default_align)}
                {text_input(binding, form.name("margin-bottom"), "Margine inferiore")}
            </div>
        </fieldset>
    }
}

// ========================
// Direct store fields
// ========================

/// Input editing one store field without a section form
pub fn config_input(
    store: AdminStore,
    label: &'static str,
    read: impl Fn(&ConfigStore) -> String + Send + Sync + 'static,
    write: impl Fn(&mut ConfigStore, String) + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <input
                type="text"
                class="form-control"
                prop:value=move || store_read(&store, &read)
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    store_edit(&store, |config| write(config, value));
                }
            />
        </div>
    }
}

pub fn config_check(
    store: AdminStore,
    label: &'static str,
    read: impl Fn(&ConfigStore) -> bool + Send + Sync + 'static,
    write: impl Fn(&mut ConfigStore, bool) + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <label class="checkbox-label">
            <input
                type="checkbox"
                prop:checked=move || store_read(&store, &read)
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    store_edit(&store, |config| write(config, checked));
                }
            />
            {label}
        </label>
    }
}
