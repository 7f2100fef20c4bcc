use serde::Serialize;

use super::{
    entities::{BusinessProfile, Item},
    error::PricingError,
};

/// `price / unit_variable_cost`, which has no meaning for a zero cost.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RealizedMarkup {
    Defined(f64),
    Undefined,
}

impl RealizedMarkup {
    pub fn from_price(price: f64, unit_variable_cost: f64) -> Self {
        if unit_variable_cost > 0.0 {
            RealizedMarkup::Defined(price / unit_variable_cost)
        } else {
            RealizedMarkup::Undefined
        }
    }

    pub fn value(&self, item: &str) -> Result<f64, PricingError> {
        match self {
            RealizedMarkup::Defined(value) => Ok(*value),
            RealizedMarkup::Undefined => Err(PricingError::UndefinedMarkup {
                item: item.to_string(),
            }),
        }
    }

    pub fn as_option(&self) -> Option<f64> {
        match self {
            RealizedMarkup::Defined(value) => Some(*value),
            RealizedMarkup::Undefined => None,
        }
    }
}

/// Margins of one item sold at one price, with the currency breakdown.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PriceEvaluation {
    pub price: f64,
    pub tax: f64,
    pub fee: f64,
    pub commission: f64,
    /// Unit cost plus tax, fee and commission.
    pub variable_deductions: f64,
    pub contribution: f64,
    pub contribution_margin_pct: f64,
    pub allocated_fixed_cost: f64,
    pub net_profit: f64,
    pub net_margin_pct: f64,
    pub markup: RealizedMarkup,
}

/// Evaluates `item` sold at `price`.
///
/// Percentages are 0 when `price` is 0. Negative margins are kept as is.
pub fn evaluate_price(
    item: &Item,
    price: f64,
    profile: &BusinessProfile,
    allocated_fixed_cost: f64,
) -> PriceEvaluation {
    let tax = price * profile.tax_rate;
    let fee = price * profile.fee_rate;
    let commission = price * profile.commission_rate;
    let variable_deductions = item.unit_variable_cost + tax + fee + commission;

    let contribution = price - variable_deductions;
    let net_profit = contribution - allocated_fixed_cost;

    PriceEvaluation {
        price,
        tax,
        fee,
        commission,
        variable_deductions,
        contribution,
        contribution_margin_pct: percent_of(contribution, price),
        allocated_fixed_cost,
        net_profit,
        net_margin_pct: percent_of(net_profit, price),
        markup: RealizedMarkup::from_price(price, item.unit_variable_cost),
    }
}

fn percent_of(amount: f64, price: f64) -> f64 {
    if price == 0.0 {
        0.0
    } else {
        100.0 * amount / price
    }
}

/// Practiced minus ideal, in percentage points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MarginDelta {
    pub contribution_pct: f64,
    pub net_pct: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PricingResult {
    pub name: String,
    pub unit_variable_cost: f64,
    pub ideal: PriceEvaluation,
    pub practiced: Option<PriceEvaluation>,
}

impl PricingResult {
    pub fn ideal_price(&self) -> f64 {
        self.ideal.price
    }

    pub fn markup_ideal(&self) -> RealizedMarkup {
        self.ideal.markup
    }

    pub fn contribution_margin_ideal_pct(&self) -> f64 {
        self.ideal.contribution_margin_pct
    }

    pub fn net_margin_ideal_pct(&self) -> f64 {
        self.ideal.net_margin_pct
    }

    pub fn practiced_price(&self) -> Option<f64> {
        self.practiced.as_ref().map(|eval| eval.price)
    }

    pub fn markup_practiced(&self) -> Option<RealizedMarkup> {
        self.practiced.as_ref().map(|eval| eval.markup)
    }

    pub fn contribution_margin_practiced_pct(&self) -> Option<f64> {
        self.practiced
            .as_ref()
            .map(|eval| eval.contribution_margin_pct)
    }

    pub fn net_margin_practiced_pct(&self) -> Option<f64> {
        self.practiced.as_ref().map(|eval| eval.net_margin_pct)
    }

    pub fn margin_delta(&self) -> Option<MarginDelta> {
        self.practiced.as_ref().map(|practiced| MarginDelta {
            contribution_pct: practiced.contribution_margin_pct
                - self.ideal.contribution_margin_pct,
            net_pct: practiced.net_margin_pct - self.ideal.net_margin_pct,
        })
    }
}

/// Prices one item at its ideal price and, when set, its practiced price.
pub fn price_item(
    item: &Item,
    ideal_price: f64,
    profile: &BusinessProfile,
    allocated_fixed_cost: f64,
) -> PricingResult {
    let ideal = evaluate_price(item, ideal_price, profile, allocated_fixed_cost);
    let practiced = item
        .practiced_price
        .map(|price| evaluate_price(item, price, profile, allocated_fixed_cost));

    PricingResult {
        name: item.name.clone(),
        unit_variable_cost: item.unit_variable_cost,
        ideal,
        practiced,
    }
}
