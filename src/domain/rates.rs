use serde::{Deserialize, Serialize};

use super::{
    entities::BusinessProfile,
    error::{InfeasibleScope, PricingError},
};

/// Where the fixed-cost share of the price comes from.
///
/// Pricing spreadsheets disagree on this, so it is an explicit setting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FixedCostMode {
    /// `total_fixed_cost / forecast_revenue` is part of the load factor.
    #[default]
    GlobalAverage,
    /// Each item's allocated fixed cost is added to its cost basis and the
    /// load factor carries no fixed-cost term.
    PerItemAllocation,
}

impl FixedCostMode {
    pub fn label(&self) -> &'static str {
        match self {
            FixedCostMode::GlobalAverage => "Share of forecast revenue",
            FixedCostMode::PerItemAllocation => "Allocated per item",
        }
    }
}

/// Percentages combined into a single load factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RateLoad {
    pub fixed_cost_rate: f64,
    pub variable_rate: f64,
    pub target_rate: f64,
    pub load_factor: f64,
    pub mode: FixedCostMode,
}

impl RateLoad {
    /// `1 - load_factor`, strictly positive once aggregation succeeded.
    pub fn headroom(&self) -> f64 {
        1.0 - self.load_factor
    }
}

/// Sums every deduction taken from the sale price and checks a finite
/// positive price still exists.
pub fn aggregate_rates(
    profile: &BusinessProfile,
    mode: FixedCostMode,
) -> Result<RateLoad, PricingError> {
    let fixed_cost_rate = profile.fixed_cost_rate();
    let variable_rate = profile.variable_rate();
    let target_rate = profile.target_rate();

    let fixed_term = match mode {
        FixedCostMode::GlobalAverage => fixed_cost_rate,
        FixedCostMode::PerItemAllocation => 0.0,
    };
    let load_factor = fixed_term + variable_rate + target_rate;

    if load_factor >= 1.0 {
        return Err(PricingError::infeasible(
            InfeasibleScope::Global,
            1.0 - load_factor,
        ));
    }

    Ok(RateLoad {
        fixed_cost_rate,
        variable_rate,
        target_rate,
        load_factor,
        mode,
    })
}
