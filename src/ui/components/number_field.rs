use dioxus::prelude::*;

use crate::ui::theme;

/// Text input that reports a value only once it parses.
///
/// Commas are accepted as decimal separators. `scale` divides the typed value,
/// so percentages can be entered as `6` and reported as `0.06`.
#[component]
pub fn NumberField(
    label: String,
    initial: f64,
    #[props(default = 1.0)] scale: f64,
    hint: Option<String>,
    on_value: EventHandler<f64>,
) -> Element {
    let mut text = use_signal(|| format_initial(initial * scale));
    let valid = parse_amount(&text()).is_some();

    rsx! {
        div {
            label { class: "field-label", "{label}" }
            input {
                class: theme::input(valid),
                inputmode: "decimal",
                value: text(),
                oninput: move |evt| {
                    let raw = evt.value();
                    if let Some(value) = parse_amount(&raw) {
                        on_value.call(value / scale);
                    }
                    text.set(raw);
                },
            }
            if let Some(hint) = hint {
                span { class: "field-hint", "{hint}" }
            }
        }
    }
}

pub fn parse_amount(raw: &str) -> Option<f64> {
    let normalized = raw.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    normalized
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}

fn format_initial(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded}")
    }
}
