use serde::{Deserialize, Serialize};

use super::error::InputError;

pub const MIN_ITEMS: usize = 1;
pub const MAX_ITEMS: usize = 50;

/// Upper bounds accepted from the input layer, as fractions.
pub const TAX_RATE_MAX: f64 = 0.50;
pub const FEE_RATE_MAX: f64 = 0.30;
pub const COMMISSION_RATE_MAX: f64 = 0.50;
pub const PROFIT_RATE_MAX: f64 = 1.00;
pub const RESERVE_RATE_MAX: f64 = 0.50;

/// Business-wide inputs shared by every item of the catalog.
///
/// Rates are fractions of the sale price (`0.06` is 6%).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub forecast_revenue: f64,
    pub total_fixed_cost: f64,
    pub tax_rate: f64,
    /// Card, marketplace and other payment/platform fees.
    pub fee_rate: f64,
    pub commission_rate: f64,
    /// Target net profit.
    pub profit_rate: f64,
    /// Reserve / reinvestment share.
    pub reserve_rate: f64,
}

impl Default for BusinessProfile {
    fn default() -> Self {
        Self {
            forecast_revenue: 10_000.0,
            total_fixed_cost: 2_000.0,
            tax_rate: 0.06,
            fee_rate: 0.05,
            commission_rate: 0.0,
            profit_rate: 0.15,
            reserve_rate: 0.05,
        }
    }
}

impl BusinessProfile {
    /// Share of forecast revenue consumed by fixed costs, 0 without a forecast.
    pub fn fixed_cost_rate(&self) -> f64 {
        if self.forecast_revenue > 0.0 {
            self.total_fixed_cost / self.forecast_revenue
        } else {
            0.0
        }
    }

    /// Deductions that scale with each sale: tax, fees and commission.
    pub fn variable_rate(&self) -> f64 {
        self.tax_rate + self.fee_rate + self.commission_rate
    }

    /// Profit and reserve targets.
    pub fn target_rate(&self) -> f64 {
        self.profit_rate + self.reserve_rate
    }

    pub fn validate(&self) -> Result<(), InputError> {
        check_amount("forecast revenue", self.forecast_revenue)?;
        check_amount("total fixed cost", self.total_fixed_cost)?;
        check_rate("tax rate", self.tax_rate, TAX_RATE_MAX)?;
        check_rate("fee rate", self.fee_rate, FEE_RATE_MAX)?;
        check_rate("commission rate", self.commission_rate, COMMISSION_RATE_MAX)?;
        check_rate("profit rate", self.profit_rate, PROFIT_RATE_MAX)?;
        check_rate("reserve rate", self.reserve_rate, RESERVE_RATE_MAX)?;
        Ok(())
    }
}

/// A product or service registered for pricing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub unit_variable_cost: f64,
    /// The price actually charged, compared against the ideal one.
    #[serde(default)]
    pub practiced_price: Option<f64>,
}

impl Item {
    pub fn new(name: impl Into<String>, unit_variable_cost: f64) -> Self {
        Self {
            name: name.into(),
            unit_variable_cost,
            practiced_price: None,
        }
    }

    pub fn with_practiced_price(mut self, price: f64) -> Self {
        self.practiced_price = Some(price);
        self
    }

    /// Default entry for the 1-based `position` in the item editor.
    pub fn placeholder(position: usize) -> Self {
        Self::new(format!("Product {position}"), 50.0)
    }
}

pub fn validate_items(items: &[Item]) -> Result<(), InputError> {
    if !(MIN_ITEMS..=MAX_ITEMS).contains(&items.len()) {
        return Err(InputError::ItemCount {
            count: items.len(),
            min: MIN_ITEMS,
            max: MAX_ITEMS,
        });
    }

    for (index, item) in items.iter().enumerate() {
        let position = index + 1;
        if item.name.trim().is_empty() {
            return Err(InputError::EmptyItemName { position });
        }
        if !is_amount(item.unit_variable_cost) {
            return Err(InputError::ItemAmount {
                position,
                name: item.name.clone(),
                field: "unit variable cost",
            });
        }
        if item.practiced_price.is_some_and(|price| !is_amount(price)) {
            return Err(InputError::ItemAmount {
                position,
                name: item.name.clone(),
                field: "practiced price",
            });
        }
    }

    Ok(())
}

fn is_amount(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn check_amount(field: &'static str, value: f64) -> Result<(), InputError> {
    if is_amount(value) {
        Ok(())
    } else {
        Err(InputError::NegativeAmount { field, value })
    }
}

fn check_rate(field: &'static str, value: f64, max: f64) -> Result<(), InputError> {
    if value.is_finite() && (0.0..=max).contains(&value) {
        Ok(())
    } else {
        Err(InputError::RateOutOfRange {
            field,
            value_pct: value * 100.0,
            max_pct: max * 100.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_matches_the_documented_starting_point() {
        let profile = BusinessProfile::default();
        assert!(profile.validate().is_ok());
        assert!((profile.fixed_cost_rate() - 0.20).abs() < 1e-12);
        assert!((profile.variable_rate() - 0.11).abs() < 1e-12);
    }

    #[test]
    fn fixed_cost_rate_is_zero_without_forecast() {
        let profile = BusinessProfile {
            forecast_revenue: 0.0,
            ..BusinessProfile::default()
        };
        assert_eq!(profile.fixed_cost_rate(), 0.0);
    }

    #[test]
    fn rejects_rates_above_documented_ceiling() {
        let profile = BusinessProfile {
            fee_rate: 0.31,
            ..BusinessProfile::default()
        };
        let err = profile.validate().unwrap_err();
        assert!(matches!(
            err,
            InputError::RateOutOfRange {
                field: "fee rate",
                ..
            }
        ));
    }

    #[test]
    fn rejects_nan_revenue() {
        let profile = BusinessProfile {
            forecast_revenue: f64::NAN,
            ..BusinessProfile::default()
        };
        assert!(profile.validate().is_err());
    }

    #[test]
    fn item_list_bounds() {
        assert!(matches!(
            validate_items(&[]),
            Err(InputError::ItemCount { count: 0, .. })
        ));

        let many: Vec<Item> = (1..=MAX_ITEMS + 1).map(Item::placeholder).collect();
        assert!(validate_items(&many).is_err());
        assert!(validate_items(&many[..MAX_ITEMS]).is_ok());
    }

    #[test]
    fn blank_names_and_negative_prices_are_rejected() {
        let items = vec![Item::placeholder(1), Item::new("   ", 10.0)];
        assert_eq!(
            validate_items(&items),
            Err(InputError::EmptyItemName { position: 2 })
        );

        let items = vec![Item::new("Cake", 12.0).with_practiced_price(-1.0)];
        assert!(matches!(
            validate_items(&items),
            Err(InputError::ItemAmount {
                field: "practiced price",
                ..
            })
        ));
    }
}
