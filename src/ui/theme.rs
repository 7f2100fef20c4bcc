//! Class helpers shared by the pages, backed by `assets/main.css`.

use crate::domain::RowFlags;

/// How a margin should be highlighted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarginTone {
    Healthy,
    Watch,
    Loss,
    Neutral,
}

impl MarginTone {
    pub fn for_margin(pct: f64, below_target: bool) -> Self {
        if pct < 0.0 {
            MarginTone::Loss
        } else if below_target {
            MarginTone::Watch
        } else {
            MarginTone::Healthy
        }
    }

    pub fn for_flags(flags: RowFlags) -> Self {
        if flags.negative_net_margin {
            MarginTone::Loss
        } else if flags.contribution_below_ideal {
            MarginTone::Watch
        } else {
            MarginTone::Neutral
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MarginTone::Healthy => "Healthy",
            MarginTone::Watch => "Below ideal",
            MarginTone::Loss => "Loss",
            MarginTone::Neutral => "-",
        }
    }
}

pub fn badge_class(tone: MarginTone) -> &'static str {
    match tone {
        MarginTone::Healthy => "badge tone-healthy",
        MarginTone::Watch => "badge tone-watch",
        MarginTone::Loss => "badge tone-loss",
        MarginTone::Neutral => "badge tone-neutral",
    }
}

pub fn row_class(flags: RowFlags, selected: bool) -> String {
    let tone = match MarginTone::for_flags(flags) {
        MarginTone::Loss => " row-loss",
        MarginTone::Watch => " row-watch",
        _ => "",
    };
    let selected = if selected { " selected" } else { "" };
    format!("selectable{tone}{selected}")
}

pub fn nav_button(active: bool) -> &'static str {
    if active {
        "nav-button active"
    } else {
        "nav-button"
    }
}

pub fn choice(active: bool) -> &'static str {
    if active {
        "choice active"
    } else {
        "choice"
    }
}

pub fn input(valid: bool) -> &'static str {
    if valid {
        "input"
    } else {
        "input input-invalid"
    }
}

pub fn money(value: f64) -> String {
    format!("$ {value:.2}")
}

pub fn percent(value: f64) -> String {
    format!("{value:.1}%")
}

pub fn multiplier(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{value:.2}x"),
        None => "undefined".to_string(),
    }
}
