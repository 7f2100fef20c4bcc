use super::{
    entities::BusinessProfile,
    error::{InfeasibleScope, PricingError},
};

/// Revenue at which the average contribution covers the fixed cost.
///
/// This is an estimate: it assumes tax, fee and commission take the same share
/// of every sale across the catalog and ignores each item's unit cost and
/// sales mix. Do not read it as a per-item figure.
pub fn break_even_revenue(profile: &BusinessProfile) -> Result<f64, PricingError> {
    let contribution_rate = 1.0 - profile.variable_rate();
    if contribution_rate <= 0.0 {
        return Err(PricingError::infeasible(
            InfeasibleScope::BreakEven,
            contribution_rate,
        ));
    }
    Ok(profile.total_fixed_cost / contribution_rate)
}
