//! Pricing and margin calculations live here.

pub mod allocation;
pub mod app_state;
pub mod break_even;
pub mod engine;
pub mod entities;
pub mod error;
pub mod markup;
pub mod pricer;
pub mod rates;
pub mod report;

pub use allocation::{AllocationPolicy, EqualSplit, FixedCostAllocator};
pub use app_state::{AppState, PersistedState};
pub use break_even::break_even_revenue;
pub use engine::{recompute, recompute_with, PricingSettings};
pub use entities::{validate_items, BusinessProfile, Item, MAX_ITEMS, MIN_ITEMS};
pub use error::{InfeasibleScope, InputError, PricingError};
pub use markup::{uniform_markup, MarkupSolver, MarkupStrategy};
pub use pricer::{
    evaluate_price, price_item, MarginDelta, PriceEvaluation, PricingResult, RealizedMarkup,
};
pub use rates::{aggregate_rates, FixedCostMode, RateLoad};
pub use report::{ComparisonReport, ReportRow, RowFlags, SummaryMetrics};
