//! Tab Bar Component
//!
//! Mutually exclusive button group: language, risk tier, theme and
//! alignment pickers all use it.

use leptos::prelude::*;

/// One button per option; the current one carries the `active` class
#[component]
pub fn TabBar<T>(
    /// `(value, label)` pairs in display order
    options: Vec<(T, String)>,
    #[prop(into)] current: Signal<T>,
    #[prop(into)] on_change: Callback<T>,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    let class = class.unwrap_or_else(|| "tab-bar".to_string());
    view! {
        <div class=class>
            {options.into_iter().map(|(value, label)| {
                let selected = value.clone();
                let is_selected = move || current.with(|c| *c == selected);
                view! {
                    <button
                        class=move || if is_selected() { "tab-btn active" } else { "tab-btn" }
                        on:click=move |_| on_change.run(value.clone())
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
