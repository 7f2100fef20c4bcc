use dioxus::prelude::*;

use crate::{
    domain::Item,
    ui::{components::number_field::parse_amount, theme},
};

/// Inline editor for one registered item.
///
/// Edits are reported only when every field parses. An empty practiced price
/// clears it.
#[component]
pub fn ItemEditor(
    position: usize,
    item: Item,
    can_remove: bool,
    on_change: EventHandler<Item>,
    on_remove: EventHandler<usize>,
) -> Element {
    let mut name = use_signal(|| item.name.clone());
    let mut cost = use_signal(|| format!("{:.2}", item.unit_variable_cost));
    let mut practiced = use_signal(|| {
        item.practiced_price
            .map(|price| format!("{price:.2}"))
            .unwrap_or_default()
    });

    let cost_valid = parse_amount(&cost()).is_some();
    let practiced_valid = practiced().trim().is_empty() || parse_amount(&practiced()).is_some();
    let name_valid = !name().trim().is_empty();

    let emit = move || {
        let Some(unit_variable_cost) = parse_amount(&cost()) else {
            return;
        };
        let raw_practiced = practiced();
        let practiced_price = if raw_practiced.trim().is_empty() {
            None
        } else {
            match parse_amount(&raw_practiced) {
                Some(price) => Some(price),
                None => return,
            }
        };
        on_change.call(Item {
            name: name().trim().to_string(),
            unit_variable_cost,
            practiced_price,
        });
    };

    rsx! {
        tr {
            td { "{position}" }
            td {
                input {
                    class: theme::input(name_valid),
                    value: name(),
                    oninput: move |evt| {
                        name.set(evt.value());
                        emit();
                    },
                }
            }
            td {
                input {
                    class: theme::input(cost_valid),
                    inputmode: "decimal",
                    value: cost(),
                    oninput: move |evt| {
                        cost.set(evt.value());
                        emit();
                    },
                }
            }
            td {
                input {
                    class: theme::input(practiced_valid),
                    inputmode: "decimal",
                    placeholder: "optional",
                    value: practiced(),
                    oninput: move |evt| {
                        practiced.set(evt.value());
                        emit();
                    },
                }
            }
            td {
                button {
                    class: "btn btn-danger",
                    disabled: !can_remove,
                    onclick: move |_| on_remove.call(position),
                    "Remove"
                }
            }
        }
    }
}
