//! Performance Charts Section
//!
//! Rotation settings, one tab per chart, and the monthly data points.

use leptos::prelude::*;

use site_config::editor::{ChartEditor, ChartField, DataPointField};
use site_config::model::{Lang, PerformanceChart, PerformanceCharts};
use site_config::{Confirmation, ConfigStore, EditResult};

use crate::components::{DeleteConfirmButton, TabBar};
use crate::context::{use_admin_context, AdminContext};
use crate::store::{store_edit, store_read, store_try_edit, AdminStateStoreFields};

fn charts_mut(config: &mut ConfigStore) -> &mut PerformanceCharts {
    config.performance_charts.get_or_insert_with(Default::default)
}

/// Checked edit of one chart; failures become error notifications
fn chart_edit(ctx: AdminContext, id: u32, edit: impl FnOnce(&mut ChartEditor<'_>) -> EditResult<()>) {
    let result = store_try_edit(&ctx.store, |config| {
        let mut chart = config.chart(id)?;
        edit(&mut chart)
    });
    if let Err(e) = result {
        ctx.error(e.to_string());
    }
}

#[component]
pub fn ChartsSection() -> impl IntoView {
    let ctx = use_admin_context();
    let store = ctx.store;

    let settings = Memo::new(move |_| {
        store_read(&store, |c| c.performance_charts.as_ref().map(|p| p.settings.clone()).unwrap_or_default())
    });
    let tabs = Memo::new(move |_| {
        store_read(&store, |c| {
            c.performance_charts
                .as_ref()
                .map(|p| p.charts.iter().map(|ch| (ch.id, ch.title.get(Lang::It).to_string())).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    });

    let set_visible = move |ev: web_sys::Event| {
        let text = event_target_value(&ev);
        match text.trim().parse::<u32>() {
            Ok(n) if n > 0 => store_edit(&store, |c| charts_mut(c).settings.visible_charts = n),
            _ => ctx.error(format!("Numero di grafici non valido: {}", text)),
        }
    };
    let set_interval = move |ev: web_sys::Event| {
        let text = event_target_value(&ev);
        match text.trim().parse::<u64>() {
            Ok(ms) => store_edit(&store, |c| charts_mut(c).settings.rotation_interval = ms),
            Err(_) => ctx.error(format!("Intervallo non valido: {}", text)),
        }
    };

    view! {
        <div class="section-charts">
            <h2>"Grafici Performance"</h2>

            <div class="card">
                <h3>"Impostazioni"</h3>
                <div class="form-group">
                    <label>"Grafici visibili"</label>
                    <input
                        type="number"
                        class="form-control"
                        prop:value=move || settings.get().visible_charts.to_string()
                        on:change=set_visible
                    />
                </div>
                <label class="checkbox-label">
                    <input
                        type="checkbox"
                        prop:checked=move || settings.get().auto_rotate
                        on:change=move |ev| {
                            let on = event_target_checked(&ev);
                            store_edit(&store, |c| charts_mut(c).settings.auto_rotate = on);
                        }
                    />
                    "Rotazione automatica"
                </label>
                <div class="form-group">
                    <label>"Intervallo rotazione (ms)"</label>
                    <input
                        type="number"
                        class="form-control"
                        prop:value=move || settings.get().rotation_interval.to_string()
                        on:change=set_interval
                    />
                </div>
            </div>

            {move || {
                let options = tabs.get();
                view! {
                    <TabBar
                        options=options
                        current=Signal::derive(move || store.chart().get().unwrap_or_default())
                        on_change=Callback::new(move |id: u32| store.chart().set(Some(id)))
                    />
                }
            }}
            {move || store.chart().get().map(|id| view! { <ChartPanel id=id /> })}
        </div>
    }
}

#[component]
fn ChartPanel(id: u32) -> impl IntoView {
    let ctx = use_admin_context();
    let store = ctx.store;

    let chart = Memo::new(move |_| {
        store_read(&store, |c| {
            c.performance_charts.as_ref().and_then(|p| p.charts.iter().find(|ch| ch.id == id).cloned())
        })
    });

    let field_input = move |field: ChartField, label: &'static str, read: fn(&PerformanceChart) -> String| {
        view! {
            <div class="form-group">
                <label>{label}</label>
                <input
                    type="text"
                    class="form-control"
                    prop:value=move || chart.with(|c| c.as_ref().map(read).unwrap_or_default())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        chart_edit(ctx, id, |e| e.set(field, value));
                    }
                />
            </div>
        }
    };

    let points = move || chart.with(|c| c.as_ref().map(|c| c.data.clone()).unwrap_or_default());

    view! {
        <div class="card chart-panel">
            <label class="checkbox-label">
                <input
                    type="checkbox"
                    prop:checked=move || chart.with(|c| c.as_ref().is_some_and(|c| c.enabled))
                    on:change=move |ev| {
                        let on = event_target_checked(&ev);
                        chart_edit(ctx, id, |e| e.set(ChartField::Enabled, on));
                    }
                />
                "Grafico attivo"
            </label>
            {field_input(ChartField::Title(Lang::It), "Titolo (IT)", |c| c.title.it.clone())}
            {field_input(ChartField::Title(Lang::En), "Titolo (EN)", |c| c.title.en.clone())}
            <div class="form-row">
                {field_input(ChartField::TotalProfit, "Profitto totale", |c| c.total_profit.to_string())}
                {field_input(ChartField::TotalPercentage, "Percentuale totale", |c| c.total_percentage.to_string())}
                {field_input(ChartField::Currency, "Valuta", |c| c.currency.clone())}
                {field_input(ChartField::StartDate, "Data inizio", |c| c.start_date.clone())}
            </div>

            <h4>"Dati mensili"</h4>
            <div class="data-points">
                {move || points().into_iter().enumerate().map(|(index, point)| view! {
                    <div class="data-point">
                        <input
                            type="month"
                            class="form-control"
                            value=point.month
                            on:change=move |ev| {
                                let month = event_target_value(&ev);
                                chart_edit(ctx, id, |e| e.update_data_point(index, DataPointField::Month, &month));
                            }
                        />
                        <input
                            type="number"
                            step="0.01"
                            class="form-control"
                            value=point.value.to_string()
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                chart_edit(ctx, id, |e| e.update_data_point(index, DataPointField::Value, &value));
                            }
                        />
                        <DeleteConfirmButton
                            title="Rimuovi punto"
                            on_confirm=Callback::new(move |_: ()| {
                                chart_edit(ctx, id, |e| e.remove_data_point(index, Confirmation::Confirmed).map(|_| ()));
                            })
                        />
                    </div>
                }).collect_view()}
            </div>
            <button
                class="btn btn-add"
                on:click=move |_| chart_edit(ctx, id, |e| e.add_data_point().map(|_| ()))
            >
                "+ Aggiungi mese"
            </button>
        </div>
    }
}
