use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::{AllocationPolicy, AppState, FixedCostMode, MarkupStrategy, PricingSettings},
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme,
    },
    util::{persistence::data_file, version},
};

const STRATEGIES: [MarkupStrategy; 2] = [MarkupStrategy::CostPlus, MarkupStrategy::TargetContribution];
const FIXED_COST_MODES: [FixedCostMode; 2] =
    [FixedCostMode::GlobalAverage, FixedCostMode::PerItemAllocation];
const ALLOCATION_POLICIES: [AllocationPolicy; 1] = [AllocationPolicy::EqualSplit];

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let editor_revision = use_context::<Signal<u64>>();

    let settings = state.with(|st| st.settings);
    let session_path = data_file()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "Unavailable on this system".to_string());
    let about = format!("{} {}", version::APP_NAME, version::version_label());

    let on_reset = {
        let mut state = state;
        let mut editor_revision = editor_revision;
        move |_| {
            state.set(AppState::default());
            editor_revision += 1;
            persist_user_state(&state);
            push_toast(toasts, ToastKind::Info, "Restored default inputs and settings.");
        }
    };

    rsx! {
        div {
            class: "stack",
            section {
                class: "panel",
                h2 { class: "panel-title", "Markup strategy" }
                p {
                    class: "panel-note",
                    "Cost-plus applies one markup to every item. Target contribution prices each item so it covers its variable rates plus the required contribution."
                }
                div {
                    class: "btn-row",
                    for strategy in STRATEGIES {
                        button {
                            class: theme::choice(settings.strategy == strategy),
                            onclick: move |_| update_settings(state, toasts, |s| s.strategy = strategy),
                            {strategy.label()}
                        }
                    }
                }
            }

            section {
                class: "panel",
                h2 { class: "panel-title", "Fixed cost treatment" }
                p {
                    class: "panel-note",
                    "Global average folds fixed cost into the markup as a share of forecast revenue. Per-item allocation adds each item's share to its cost instead."
                }
                div {
                    class: "btn-row",
                    for mode in FIXED_COST_MODES {
                        button {
                            class: theme::choice(settings.fixed_cost_mode == mode),
                            onclick: move |_| update_settings(state, toasts, |s| s.fixed_cost_mode = mode),
                            {mode.label()}
                        }
                    }
                }
                div {
                    class: "btn-row",
                    span { class: "field-label", "Allocation" }
                    for policy in ALLOCATION_POLICIES {
                        button {
                            class: theme::choice(settings.allocation == policy),
                            onclick: move |_| update_settings(state, toasts, |s| s.allocation = policy),
                            {policy.label()}
                        }
                    }
                }
            }

            section {
                class: "panel",
                h2 { class: "panel-title", "Session" }
                p { class: "panel-note", "Inputs are saved automatically to {session_path}." }
                div {
                    class: "btn-row",
                    button { class: "btn btn-danger", onclick: on_reset, "Reset defaults" }
                }
            }

            section {
                class: "panel",
                h2 { class: "panel-title", "About" }
                p { "{about}" }
                if let Some(tag) = version::GIT_TAG {
                    p { class: "panel-note", "Built from {tag}" }
                }
            }
        }
    }
}

fn update_settings(
    mut state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    edit: impl FnOnce(&mut PricingSettings),
) {
    state.with_mut(|st| edit(&mut st.settings));
    persist_user_state(&state);
    if let Err(err) = state.with(|st| st.recompute()) {
        push_toast(toasts, ToastKind::Warning, err.to_string());
    }
}
