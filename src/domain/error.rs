use std::fmt;

use thiserror::Error;

/// Which part of a recompute an infeasible denominator belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InfeasibleScope {
    /// The combined load factor; nothing can be priced.
    Global,
    /// A single item under the target-contribution strategy.
    Item { position: usize, name: String },
    /// The break-even estimate.
    BreakEven,
}

impl fmt::Display for InfeasibleScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InfeasibleScope::Global => write!(f, "global load factor"),
            InfeasibleScope::Item { position, name } => write!(f, "item #{position} ({name})"),
            InfeasibleScope::BreakEven => write!(f, "break-even estimate"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum PricingError {
    #[error("{scope} is infeasible: 1 - rates = {denominator:.4}, percentages must add up to less than 100%")]
    InfeasibleConfiguration {
        scope: InfeasibleScope,
        denominator: f64,
    },
    #[error("realized markup for `{item}` is undefined: unit variable cost is zero")]
    UndefinedMarkup { item: String },
    #[error(transparent)]
    InvalidInput(#[from] InputError),
}

impl PricingError {
    pub fn infeasible(scope: InfeasibleScope, denominator: f64) -> Self {
        PricingError::InfeasibleConfiguration { scope, denominator }
    }

    pub fn is_infeasible(&self) -> bool {
        matches!(self, PricingError::InfeasibleConfiguration { .. })
    }
}

/// Inputs outside the ranges the input layer is allowed to hand us.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum InputError {
    #[error("{field} must be a finite, non-negative amount (got {value})")]
    NegativeAmount { field: &'static str, value: f64 },
    #[error("{field} must be between 0% and {max_pct:.0}% (got {value_pct:.2}%)")]
    RateOutOfRange {
        field: &'static str,
        value_pct: f64,
        max_pct: f64,
    },
    #[error("between {min} and {max} items are required (got {count})")]
    ItemCount { count: usize, min: usize, max: usize },
    #[error("item #{position} needs a name")]
    EmptyItemName { position: usize },
    #[error("item #{position} ({name}): {field} must be a finite, non-negative amount")]
    ItemAmount {
        position: usize,
        name: String,
        field: &'static str,
    },
    #[error("fixed cost allocation returned {got} shares for {expected} items")]
    AllocationMismatch { expected: usize, got: usize },
}
