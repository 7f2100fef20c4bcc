use dioxus::prelude::*;

use crate::ui::theme::{self, MarginTone};

#[component]
pub fn MarginBadge(value_pct: f64, below_target: bool) -> Element {
    let tone = MarginTone::for_margin(value_pct, below_target);
    rsx! {
        span {
            class: theme::badge_class(tone),
            title: tone.label(),
            {theme::percent(value_pct)}
        }
    }
}
