use dioxus::prelude::*;

use crate::{
    domain::{PriceEvaluation, PricingResult},
    ui::theme,
};

/// Where each dollar of the selected item's prices goes.
#[component]
pub fn BreakdownPanel(result: PricingResult) -> Element {
    let delta_note = result.margin_delta().map(|delta| {
        format!(
            "Practiced vs ideal: contribution {} pp, net {} pp.",
            signed(delta.contribution_pct),
            signed(delta.net_pct)
        )
    });

    rsx! {
        section {
            class: "panel",
            h2 { class: "panel-title", "Price breakdown: {result.name}" }
            div {
                class: "grid grid-2",
                Breakdown {
                    title: "Ideal price",
                    unit_cost: result.unit_variable_cost,
                    evaluation: result.ideal.clone(),
                }
                if let Some(practiced) = result.practiced.clone() {
                    Breakdown {
                        title: "Practiced price",
                        unit_cost: result.unit_variable_cost,
                        evaluation: practiced,
                    }
                } else {
                    p { class: "panel-note", "No practiced price registered for this item." }
                }
            }
            if let Some(note) = delta_note {
                p { class: "panel-note", "{note}" }
            }
        }
    }
}

#[component]
fn Breakdown(title: &'static str, unit_cost: f64, evaluation: PriceEvaluation) -> Element {
    let contribution = format!(
        "{} ({})",
        theme::money(evaluation.contribution),
        theme::percent(evaluation.contribution_margin_pct)
    );
    let net = format!(
        "{} ({})",
        theme::money(evaluation.net_profit),
        theme::percent(evaluation.net_margin_pct)
    );

    rsx! {
        div {
            h3 { class: "kpi-title", "{title}" }
            ul {
                class: "breakdown",
                li { span { "Price" } span { {theme::money(evaluation.price)} } }
                li { span { "Unit cost" } span { {theme::money(-unit_cost)} } }
                li { span { "Tax" } span { {theme::money(-evaluation.tax)} } }
                li { span { "Card / platform fee" } span { {theme::money(-evaluation.fee)} } }
                li { span { "Commission" } span { {theme::money(-evaluation.commission)} } }
                li {
                    span { "Contribution" }
                    span { "{contribution}" }
                }
                li { span { "Allocated fixed cost" } span { {theme::money(-evaluation.allocated_fixed_cost)} } }
                li {
                    class: "total",
                    span { "Net profit" }
                    span { "{net}" }
                }
                li { span { "Markup" } span { {theme::multiplier(evaluation.markup.as_option())} } }
            }
        }
    }
}

fn signed(value: f64) -> String {
    format!("{value:+.1}")
}
