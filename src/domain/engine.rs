//! One recompute cycle: inputs in, comparison report out.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{
    allocation::{AllocationPolicy, FixedCostAllocator},
    break_even::break_even_revenue,
    entities::{validate_items, BusinessProfile, Item},
    error::{InputError, PricingError},
    markup::{MarkupSolver, MarkupStrategy},
    pricer::price_item,
    rates::{aggregate_rates, FixedCostMode},
    report::{ComparisonReport, SummaryMetrics},
};

/// User-selectable calculation options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingSettings {
    #[serde(default)]
    pub strategy: MarkupStrategy,
    #[serde(default)]
    pub fixed_cost_mode: FixedCostMode,
    #[serde(default)]
    pub allocation: AllocationPolicy,
}

/// Runs the full pipeline with the allocator named in `settings`.
pub fn recompute(
    profile: &BusinessProfile,
    items: &[Item],
    settings: &PricingSettings,
) -> Result<ComparisonReport, PricingError> {
    recompute_with(profile, items, settings, &settings.allocation)
}

/// Same as [`recompute`] with a caller-provided fixed-cost allocator.
///
/// Input and global infeasibility errors abort the whole cycle, as does an
/// allocator that does not return exactly one share per item. An item that
/// cannot be priced is reported on its own row.
pub fn recompute_with(
    profile: &BusinessProfile,
    items: &[Item],
    settings: &PricingSettings,
    allocator: &dyn FixedCostAllocator,
) -> Result<ComparisonReport, PricingError> {
    profile.validate()?;
    validate_items(items)?;

    let load = aggregate_rates(profile, settings.fixed_cost_mode).inspect_err(|err| {
        warn!(%err, "pricing inputs are infeasible");
    })?;
    let solver = MarkupSolver::new(profile, load, settings.strategy);
    let shares = allocator.allocate(profile.total_fixed_cost, items);
    if shares.len() != items.len() {
        return Err(InputError::AllocationMismatch {
            expected: items.len(),
            got: shares.len(),
        }
        .into());
    }
    let break_even = break_even_revenue(profile)?;

    debug!(
        load_factor = load.load_factor,
        markup = solver.markup(),
        strategy = ?settings.strategy,
        mode = ?settings.fixed_cost_mode,
        items = items.len(),
        "recomputing prices"
    );

    let outcomes = items
        .iter()
        .zip(shares)
        .enumerate()
        .map(|(index, (item, share))| {
            let outcome = solver
                .ideal_price(index + 1, item, share)
                .map(|ideal| price_item(item, ideal, profile, share));
            if let Err(err) = &outcome {
                warn!(%err, item = %item.name, "item cannot be priced");
            }
            (item.name.clone(), item.unit_variable_cost, outcome)
        })
        .collect();

    let summary = SummaryMetrics {
        load_factor: load.load_factor,
        markup: solver.markup(),
        break_even_revenue: break_even,
        fixed_cost_rate: load.fixed_cost_rate,
        variable_rate: load.variable_rate,
        average_contribution_margin_pct: 100.0 * (1.0 - load.variable_rate),
        strategy: settings.strategy,
        fixed_cost_mode: settings.fixed_cost_mode,
    };

    Ok(ComparisonReport::assemble(outcomes, summary))
}
