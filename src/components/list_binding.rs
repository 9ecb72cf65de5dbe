//! List Binding
//!
//! Connects one `ListEditor` of the store to the view: a reactive copy of
//! the items, the add button state and the add/remove/toggle/update
//! operations. Cap violations surface as an alert plus a warning.

use std::fmt::Display;
use std::sync::Arc;

use leptos::prelude::*;

use site_config::{AddState, Confirmation, ConfigStore, EditError, EditResult, FieldValue, ListEditor, ListEntry};

use crate::browser::alert;
use crate::components::DeleteConfirmButton;
use crate::context::AdminContext;
use crate::store::{store_read, store_try_edit, NotificationKind};

type Select<T> = Arc<dyn Fn(&mut ConfigStore) -> ListEditor<'_, T> + Send + Sync>;

pub struct ListBinding<T: ListEntry + Send + Sync + 'static> {
    ctx: AdminContext,
    pub items: Memo<Vec<T>>,
    pub add_state: Memo<AddState>,
    select: StoredValue<Select<T>>,
}

impl<T: ListEntry + Send + Sync + 'static> Clone for ListBinding<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ListEntry + Send + Sync + 'static> Copy for ListBinding<T> {}

impl<T> ListBinding<T>
where
    T: ListEntry + Clone + PartialEq + Send + Sync + 'static,
    T::Id: Send + Sync + 'static,
    T::Field: Send + Sync + 'static,
{
    /// `read` copies the list out of the store, `select` opens its editor
    pub fn new(
        ctx: AdminContext,
        read: impl Fn(&ConfigStore) -> Vec<T> + Send + Sync + 'static,
        select: impl Fn(&mut ConfigStore) -> ListEditor<'_, T> + Send + Sync + 'static,
    ) -> Self {
        let store = ctx.store;
        let items = Memo::new(move |_| store_read(&store, &read));
        let add_state = Memo::new(move |_| items.with(|v| AddState { count: v.len(), cap: T::CAP }));
        let select: Select<T> = Arc::new(select);
        Self { ctx, items, add_state, select: StoredValue::new(select) }
    }

    fn run<R>(&self, op: impl FnOnce(&mut ListEditor<'_, T>) -> EditResult<R>) -> Option<R> {
        let select = self.select.get_value();
        let result = store_try_edit(&self.ctx.store, |config| {
            let mut editor = select(config);
            op(&mut editor)
        });
        match result {
            Ok(value) => Some(value),
            Err(EditError::CapReached { cap, .. }) => {
                let message = format!("Massimo {} {} consentiti", cap, T::LABEL_IT);
                alert(&message);
                self.ctx.notify(NotificationKind::Warning, message);
                None
            }
            Err(e) => {
                self.ctx.error(e.to_string());
                None
            }
        }
    }

    pub fn add(&self) {
        self.run(|list| list.add().map(|_| ()));
    }

    /// Remove after the inline confirmation; returns the removed entry
    pub fn remove(&self, id: T::Id) -> Option<T> {
        self.run(|list| list.remove(&id, Confirmation::Confirmed)).flatten()
    }

    pub fn toggle(&self, id: T::Id) {
        self.run(|list| list.toggle(&id));
    }

    pub fn update(&self, id: T::Id, field: T::Field, value: impl Into<FieldValue>) {
        let value = value.into();
        self.run(move |list| list.update(&id, field, value));
    }

    /// Current text of one field, tracked
    pub fn text(&self, id: &T::Id, field: T::Field) -> String {
        self.items.with(|items| {
            items
                .iter()
                .find(|item| item.id() == id)
                .map(|item| item.read(field).as_text().to_string())
                .unwrap_or_default()
        })
    }

    pub fn flag(&self, id: &T::Id, field: T::Field) -> bool {
        self.items.with(|items| {
            items
                .iter()
                .find(|item| item.id() == id)
                .map(|item| item.read(field) == FieldValue::Flag(true))
                .unwrap_or(false)
        })
    }

    pub fn ids(&self) -> Vec<T::Id> {
        self.items.with(|items| items.iter().map(|item| item.id().clone()).collect())
    }
}

// ========================
// Widgets
// ========================

/// "+ Aggiungi" button showing `n/cap`, disabled at the cap
pub fn add_button<T>(list: ListBinding<T>, label: &'static str) -> impl IntoView
where
    T: ListEntry + Clone + PartialEq + Send + Sync + 'static,
    T::Id: Send + Sync + 'static,
    T::Field: Send + Sync + 'static,
{
    view! {
        <button
            class="btn btn-add"
            disabled=move || list.add_state.get().disabled()
            on:click=move |_| list.add()
        >
            {move || format!("+ {} ({})", label, list.add_state.get().label())}
        </button>
    }
}

pub fn item_text<T>(list: ListBinding<T>, id: T::Id, field: T::Field, label: &'static str) -> impl IntoView
where
    T: ListEntry + Clone + PartialEq + Send + Sync + 'static,
    T::Id: Send + Sync + 'static,
    T::Field: Send + Sync + 'static,
{
    let read_id = id.clone();
    view! {
        <div class="form-group">
            <label>{label}</label>
            <input
                type="text"
                class="form-control"
                prop:value=move || list.text(&read_id, field)
                on:change=move |ev| list.update(id.clone(), field, event_target_value(&ev))
            />
        </div>
    }
}

pub fn item_textarea<T>(list: ListBinding<T>, id: T::Id, field: T::Field, label: &'static str) -> impl IntoView
where
    T: ListEntry + Clone + PartialEq + Send + Sync + 'static,
    T::Id: Send + Sync + 'static,
    T::Field: Send + Sync + 'static,
{
    let read_id = id.clone();
    view! {
        <div class="form-group">
            <label>{label}</label>
            <textarea
                class="form-control"
                rows="3"
                prop:value=move || list.text(&read_id, field)
                on:change=move |ev| list.update(id.clone(), field, event_target_value(&ev))
            ></textarea>
        </div>
    }
}

/// `(value, label)` pairs for [`item_select`]
pub fn choices<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Vec<(String, String)> {
    pairs.into_iter().map(|(value, label)| (value.to_string(), label.to_string())).collect()
}

/// `<select>` over fixed `(value, label)` options
pub fn item_select<T>(
    list: ListBinding<T>,
    id: T::Id,
    field: T::Field,
    label: &'static str,
    options: Vec<(String, String)>,
) -> impl IntoView
where
    T: ListEntry + Clone + PartialEq + Send + Sync + 'static,
    T::Id: Send + Sync + 'static,
    T::Field: Send + Sync + 'static,
{
    let read_id = id.clone();
    view! {
        <div class="form-group">
            <label>{label}</label>
            <select
                class="form-control"
                prop:value=move || list.text(&read_id, field)
                on:change=move |ev| list.update(id.clone(), field, event_target_value(&ev))
            >
                {options.into_iter().map(|(value, text)| view! { <option value=value>{text}</option> }).collect_view()}
            </select>
        </div>
    }
}

pub fn item_check<T>(list: ListBinding<T>, id: T::Id, field: T::Field, label: &'static str) -> impl IntoView
where
    T: ListEntry + Clone + PartialEq + Send + Sync + 'static,
    T::Id: Send + Sync + 'static,
    T::Field: Send + Sync + 'static,
{
    let read_id = id.clone();
    view! {
        <label class="checkbox-label">
            <input
                type="checkbox"
                prop:checked=move || list.flag(&read_id, field)
                on:change=move |ev| list.update(id.clone(), field, event_target_checked(&ev))
            />
            {label}
        </label>
    }
}

/// Enabled switch shown in an item header
pub fn item_toggle<T>(list: ListBinding<T>, id: T::Id, field: T::Field) -> impl IntoView
where
    T: ListEntry + Clone + PartialEq + Send + Sync + 'static,
    T::Id: Send + Sync + 'static,
    T::Field: Send + Sync + 'static,
{
    let read_id = id.clone();
    let enabled = move || list.flag(&read_id, field);
    let enabled_class = enabled.clone();
    view! {
        <button
            class=move || if enabled_class() { "btn-toggle active" } else { "btn-toggle" }
            on:click=move |_| list.toggle(id.clone())
        >
            {move || if enabled() { "Attivo" } else { "Disattivato" }}
        </button>
    }
}

/// Item header: title, optional enabled switch, inline delete
pub fn item_header<T>(
    list: ListBinding<T>,
    id: T::Id,
    title: impl Display,
    enabled_field: Option<T::Field>,
    on_removed: Option<Callback<T>>,
) -> impl IntoView
where
    T: ListEntry + Clone + PartialEq + Send + Sync + 'static,
    T::Id: Send + Sync + 'static,
    T::Field: Send + Sync + 'static,
{
    let remove_id = id.clone();
    let on_confirm = Callback::new(move |_: ()| {
        if let Some(removed) = list.remove(remove_id.clone()) {
            if let Some(on_removed) = on_removed {
                on_removed.run(removed);
            }
        }
    });
    let title = title.to_string();
    view! {
        <div class="item-header">
            <span class="item-title">{title}</span>
            {enabled_field.map(|field| item_toggle(list, id.clone(), field))}
            <DeleteConfirmButton title="Rimuovi" on_confirm=on_confirm />
        </div>
    }
}
