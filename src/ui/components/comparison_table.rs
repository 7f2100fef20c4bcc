use dioxus::prelude::*;

use crate::{
    domain::{ComparisonReport, ReportRow, RowFlags},
    ui::{
        components::margin_badge::MarginBadge,
        theme::{self, MarginTone},
    },
};

/// Display-ready view of one report row.
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonRow {
    pub position: usize,
    pub name: String,
    pub unit_cost: f64,
    pub ideal_price: Option<f64>,
    pub ideal_markup: Option<f64>,
    pub ideal_contribution_pct: Option<f64>,
    pub ideal_net_pct: Option<f64>,
    pub practiced_price: Option<f64>,
    pub practiced_markup: Option<Option<f64>>,
    pub practiced_contribution_pct: Option<f64>,
    pub practiced_net_pct: Option<f64>,
    pub flags: RowFlags,
    pub error: Option<String>,
}

impl From<&ReportRow> for ComparisonRow {
    fn from(row: &ReportRow) -> Self {
        let result = row.result();
        let practiced = result.and_then(|res| res.practiced.as_ref());
        Self {
            position: row.position,
            name: row.name.clone(),
            unit_cost: row.unit_variable_cost,
            ideal_price: result.map(|res| res.ideal_price()),
            ideal_markup: result.and_then(|res| res.markup_ideal().as_option()),
            ideal_contribution_pct: result.map(|res| res.contribution_margin_ideal_pct()),
            ideal_net_pct: result.map(|res| res.net_margin_ideal_pct()),
            practiced_price: practiced.map(|eval| eval.price),
            practiced_markup: practiced.map(|eval| eval.markup.as_option()),
            practiced_contribution_pct: practiced.map(|eval| eval.contribution_margin_pct),
            practiced_net_pct: practiced.map(|eval| eval.net_margin_pct),
            flags: row.flags,
            error: row.error().map(ToString::to_string),
        }
    }
}

pub fn comparison_rows(report: &ComparisonReport) -> Vec<ComparisonRow> {
    report.rows.iter().map(ComparisonRow::from).collect()
}

#[component]
pub fn ComparisonTable(
    rows: Vec<ComparisonRow>,
    selected: Option<usize>,
    on_select: EventHandler<usize>,
) -> Element {
    rsx! {
        div {
            class: "table-container",
            table {
                class: "table",
                thead {
                    tr {
                        th { "#" }
                        th { "Item" }
                        th { class: "numeric", "Unit cost" }
                        th { class: "numeric", "Ideal price" }
                        th { class: "numeric", "Markup" }
                        th { class: "numeric", "CM ideal" }
                        th { class: "numeric", "Net ideal" }
                        th { class: "numeric", "Practiced" }
                        th { class: "numeric", "Markup" }
                        th { class: "numeric", "CM practiced" }
                        th { class: "numeric", "Net practiced" }
                        th { "Status" }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        tr {
                            td { class: "empty", colspan: "12", "No items registered." }
                        }
                    }
                    for row in rows {
                        ComparisonTableRow {
                            key: "{row.position}",
                            selected: selected == Some(row.position),
                            row,
                            on_select,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ComparisonTableRow(row: ComparisonRow, selected: bool, on_select: EventHandler<usize>) -> Element {
    let position = row.position;
    let class = theme::row_class(row.flags, selected);

    if let Some(error) = row.error {
        return rsx! {
            tr {
                class,
                onclick: move |_| on_select.call(position),
                td { "{row.position}" }
                td { "{row.name}" }
                td { class: "numeric", {theme::money(row.unit_cost)} }
                td { class: "panel-error", colspan: "9", "{error}" }
            }
        };
    }

    let tone = MarginTone::for_flags(row.flags);
    rsx! {
        tr {
            class,
            onclick: move |_| on_select.call(position),
            td { "{row.position}" }
            td { "{row.name}" }
            td { class: "numeric", {theme::money(row.unit_cost)} }
            td { class: "numeric", {optional(row.ideal_price, theme::money)} }
            td { class: "numeric", {theme::multiplier(row.ideal_markup)} }
            td { class: "numeric", {optional(row.ideal_contribution_pct, theme::percent)} }
            td { class: "numeric", {optional(row.ideal_net_pct, theme::percent)} }
            td { class: "numeric", {optional(row.practiced_price, theme::money)} }
            td {
                class: "numeric",
                {row.practiced_markup.map(theme::multiplier).unwrap_or_default()}
            }
            td {
                class: "numeric",
                if let Some(pct) = row.practiced_contribution_pct {
                    MarginBadge { value_pct: pct, below_target: row.flags.contribution_below_ideal }
                }
            }
            td {
                class: "numeric",
                if let Some(pct) = row.practiced_net_pct {
                    MarginBadge { value_pct: pct, below_target: false }
                }
            }
            td {
                span { class: theme::badge_class(tone), {tone.label()} }
            }
        }
    }
}

fn optional(value: Option<f64>, format: fn(f64) -> String) -> String {
    value.map(format).unwrap_or_default()
}
