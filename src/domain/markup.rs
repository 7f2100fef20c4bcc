use serde::{Deserialize, Serialize};

use super::{
    entities::{BusinessProfile, Item},
    error::{InfeasibleScope, PricingError},
    rates::{FixedCostMode, RateLoad},
};

/// How the ideal price is derived from the unit cost.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkupStrategy {
    /// One multiplier, `1 / (1 - load_factor)`, applied to every item.
    #[default]
    CostPlus,
    /// Price each item so its contribution covers fixed cost plus the
    /// profit and reserve targets expressed in currency.
    TargetContribution,
}

impl MarkupStrategy {
    pub fn label(&self) -> &'static str {
        match self {
            MarkupStrategy::CostPlus => "Cost-plus markup",
            MarkupStrategy::TargetContribution => "Target contribution margin",
        }
    }
}

/// Uniform cost-plus multiplier.
pub fn uniform_markup(load: &RateLoad) -> f64 {
    1.0 / load.headroom()
}

pub struct MarkupSolver<'a> {
    profile: &'a BusinessProfile,
    load: RateLoad,
    strategy: MarkupStrategy,
}

impl<'a> MarkupSolver<'a> {
    pub fn new(profile: &'a BusinessProfile, load: RateLoad, strategy: MarkupStrategy) -> Self {
        Self {
            profile,
            load,
            strategy,
        }
    }

    pub fn strategy(&self) -> MarkupStrategy {
        self.strategy
    }

    pub fn markup(&self) -> f64 {
        uniform_markup(&self.load)
    }

    /// Contribution (fixed cost + profit + reserve) required from every unit
    /// of revenue under the target-contribution strategy.
    pub fn required_contribution_rate(&self) -> f64 {
        let profile = self.profile;
        let fixed_term = match self.load.mode {
            FixedCostMode::GlobalAverage => profile.total_fixed_cost,
            FixedCostMode::PerItemAllocation => 0.0,
        };

        if profile.forecast_revenue > 0.0 {
            let profit_target = profile.forecast_revenue * profile.profit_rate;
            let reserve_target = profile.forecast_revenue * profile.reserve_rate;
            (fixed_term + profit_target + reserve_target) / profile.forecast_revenue
        } else {
            // No forecast: the targets reduce to their rates and the fixed
            // share to zero, like the load factor.
            profile.target_rate()
        }
    }

    /// Ideal price for the item at 1-based `position`.
    ///
    /// `allocated_fixed_cost` only enters the cost basis in
    /// [`FixedCostMode::PerItemAllocation`].
    pub fn ideal_price(
        &self,
        position: usize,
        item: &Item,
        allocated_fixed_cost: f64,
    ) -> Result<f64, PricingError> {
        let cost_basis = match self.load.mode {
            FixedCostMode::GlobalAverage => item.unit_variable_cost,
            FixedCostMode::PerItemAllocation => item.unit_variable_cost + allocated_fixed_cost,
        };

        let denominator = match self.strategy {
            MarkupStrategy::CostPlus => self.load.headroom(),
            MarkupStrategy::TargetContribution => {
                1.0 - (self.profile.variable_rate() + self.required_contribution_rate())
            }
        };

        let price = cost_basis / denominator;
        // Huge costs overflow to infinity; such a row has no usable price.
        if denominator <= 0.0 || !price.is_finite() {
            return Err(PricingError::infeasible(
                InfeasibleScope::Item {
                    position,
                    name: item.name.clone(),
                },
                denominator,
            ));
        }
        Ok(price)
    }
}
