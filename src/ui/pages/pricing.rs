use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::{AppState, BusinessProfile, ComparisonReport, Item, MAX_ITEMS},
    infra::export::{default_export_dir, export_report, ExportFormat},
    ui::{
        components::{
            breakdown_panel::BreakdownPanel,
            comparison_table::{comparison_rows, ComparisonTable},
            item_editor::ItemEditor,
            kpi_card::KpiCard,
            number_field::NumberField,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
};

#[component]
pub fn PricingPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let editor_revision = use_context::<Signal<u64>>();
    let mut selected = use_signal(|| None::<usize>);

    let (profile, items) = state.with(|st| (st.profile.clone(), st.items.clone()));
    let revision = editor_revision();
    let item_count = items.len();
    let can_remove = item_count > 1;

    let results = match state.with(|st| st.recompute()) {
        Ok(report) => {
            let selection = selected().filter(|position| *position <= report.rows.len());
            rsx! {
                ResultsSection {
                    report,
                    selected: selection,
                    on_select: move |position| selected.set(Some(position)),
                    toasts,
                }
            }
        }
        Err(err) => rsx! {
            section {
                class: "panel",
                h2 { class: "panel-title", "Results" }
                p { class: "panel-error", "{err}" }
                p {
                    class: "panel-note",
                    "Adjust the rates above until the combined load stays below 100%."
                }
            }
        },
    };

    rsx! {
        div {
            class: "stack",
            // A one-entry keyed list, so a settings reset remounts the fields.
            for rev in [revision] {
                ProfileFields { key: "{rev}", profile: profile.clone(), state }
            }

            section {
                class: "panel",
                h2 { class: "panel-title", "Items" }
                div {
                    class: "btn-row",
                    span { class: "field-label", "{item_count} of {MAX_ITEMS} items" }
                    button {
                        class: "btn",
                        disabled: item_count >= MAX_ITEMS,
                        onclick: move |_| resize_items(state, item_count + 1),
                        "Add item"
                    }
                }
                div {
                    class: "table-container",
                    table {
                        class: "table",
                        thead {
                            tr {
                                th { "#" }
                                th { "Name" }
                                th { "Unit variable cost ($)" }
                                th { "Practiced price ($)" }
                                th {}
                            }
                        }
                        tbody {
                            for (index, item) in items.into_iter().enumerate() {
                                ItemEditor {
                                    key: "{revision}-{index}",
                                    position: index + 1,
                                    item,
                                    can_remove,
                                    on_change: move |updated| edit_item(state, index + 1, updated),
                                    on_remove: move |position| {
                                        remove_item(state, editor_revision, position);
                                        selected.set(None);
                                    },
                                }
                            }
                        }
                    }
                }
            }

            {results}
        }
    }
}

#[component]
fn ProfileFields(profile: BusinessProfile, state: Signal<AppState>) -> Element {
    rsx! {
        section {
            class: "panel",
            h2 { class: "panel-title", "Business profile" }
            div {
                class: "grid grid-2",
                NumberField {
                    label: "Forecast monthly revenue ($)".to_string(),
                    initial: profile.forecast_revenue,
                    on_value: move |value| edit_profile(state, |p| p.forecast_revenue = value),
                }
                NumberField {
                    label: "Total fixed cost ($)".to_string(),
                    initial: profile.total_fixed_cost,
                    on_value: move |value| edit_profile(state, |p| p.total_fixed_cost = value),
                }
            }
            div {
                class: "grid grid-3",
                NumberField {
                    label: "Tax (%)".to_string(),
                    initial: profile.tax_rate,
                    scale: 100.0,
                    on_value: move |value| edit_profile(state, |p| p.tax_rate = value),
                }
                NumberField {
                    label: "Card / platform fee (%)".to_string(),
                    initial: profile.fee_rate,
                    scale: 100.0,
                    on_value: move |value| edit_profile(state, |p| p.fee_rate = value),
                }
                NumberField {
                    label: "Commission (%)".to_string(),
                    initial: profile.commission_rate,
                    scale: 100.0,
                    on_value: move |value| edit_profile(state, |p| p.commission_rate = value),
                }
                NumberField {
                    label: "Desired profit (%)".to_string(),
                    initial: profile.profit_rate,
                    scale: 100.0,
                    on_value: move |value| edit_profile(state, |p| p.profit_rate = value),
                }
                NumberField {
                    label: "Reserve (%)".to_string(),
                    initial: profile.reserve_rate,
                    scale: 100.0,
                    hint: Some("Marketing, contingency or reinvestment.".to_string()),
                    on_value: move |value| edit_profile(state, |p| p.reserve_rate = value),
                }
            }
        }
    }
}

#[component]
fn ResultsSection(
    report: ComparisonReport,
    selected: Option<usize>,
    on_select: EventHandler<usize>,
    toasts: Signal<Vec<ToastMessage>>,
) -> Element {
    let summary = report.summary.clone();
    let rows = comparison_rows(&report);
    let flagged = report.flagged_rows().count();
    let selected_result = selected
        .and_then(|position| report.rows.get(position - 1))
        .and_then(|row| row.result().cloned());

    let csv_report = report.clone();
    let json_report = report;

    rsx! {
        section {
            class: "panel",
            h2 { class: "panel-title", "Summary" }
            div {
                class: "grid grid-2",
                KpiCard {
                    title: "Markup".to_string(),
                    value: theme::multiplier(Some(summary.markup)),
                    description: Some(summary.strategy.label().to_string()),
                }
                KpiCard {
                    title: "Load factor".to_string(),
                    value: theme::percent(summary.load_factor * 100.0),
                    description: Some(format!(
                        "{} (fixed {}, variable {})",
                        summary.fixed_cost_mode.label(),
                        theme::percent(summary.fixed_cost_rate * 100.0),
                        theme::percent(summary.variable_rate * 100.0),
                    )),
                }
                KpiCard {
                    title: "Break-even revenue".to_string(),
                    value: theme::money(summary.break_even_revenue),
                    description: Some("Approximation assuming constant variable rates.".to_string()),
                }
                KpiCard {
                    title: "Average contribution margin".to_string(),
                    value: theme::percent(summary.average_contribution_margin_pct),
                }
            }
        }

        section {
            class: "panel",
            h2 { class: "panel-title", "Ideal vs practiced" }
            if flagged > 0 {
                p { class: "panel-note", "{flagged} item(s) price below the ideal contribution or at a loss." }
            }
            ComparisonTable { rows, selected, on_select }
            div {
                class: "btn-row",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| run_export(&csv_report, ExportFormat::Csv, toasts),
                    "Export CSV"
                }
                button {
                    class: "btn",
                    onclick: move |_| run_export(&json_report, ExportFormat::Json, toasts),
                    "Export JSON"
                }
            }
        }

        if let Some(result) = selected_result {
            BreakdownPanel { result }
        }
    }
}

fn edit_profile(mut state: Signal<AppState>, edit: impl FnOnce(&mut BusinessProfile)) {
    state.with_mut(|st| edit(&mut st.profile));
    persist_user_state(&state);
}

fn edit_item(mut state: Signal<AppState>, position: usize, updated: Item) {
    state.with_mut(|st| {
        if let Some(item) = st.item_mut(position) {
            *item = updated;
        }
    });
    persist_user_state(&state);
}

fn resize_items(mut state: Signal<AppState>, count: usize) {
    state.with_mut(|st| st.set_item_count(count));
    persist_user_state(&state);
}

fn remove_item(mut state: Signal<AppState>, mut editor_revision: Signal<u64>, position: usize) {
    let removed = state.with_mut(|st| st.remove_item(position));
    if removed {
        // Positions shift after a removal, so editors must reload their text.
        editor_revision += 1;
        persist_user_state(&state);
    }
}

fn run_export(report: &ComparisonReport, format: ExportFormat, toasts: Signal<Vec<ToastMessage>>) {
    match export_report(report, format, &default_export_dir()) {
        Ok(path) => push_toast(
            toasts,
            ToastKind::Success,
            format!("Saved report to {}", path.display()),
        ),
        Err(err) => {
            tracing::error!(%err, "export failed");
            push_toast(toasts, ToastKind::Error, format!("Export failed: {err}"));
        }
    }
}
