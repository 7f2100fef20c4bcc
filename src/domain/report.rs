use serde::Serialize;

use super::{
    error::PricingError,
    markup::MarkupStrategy,
    pricer::PricingResult,
    rates::FixedCostMode,
};

/// Catalog-wide figures, independent of the individual items.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SummaryMetrics {
    pub load_factor: f64,
    pub markup: f64,
    pub break_even_revenue: f64,
    pub fixed_cost_rate: f64,
    /// Tax + fee + commission.
    pub variable_rate: f64,
    /// `100 * (1 - variable_rate)`.
    pub average_contribution_margin_pct: f64,
    pub strategy: MarkupStrategy,
    pub fixed_cost_mode: FixedCostMode,
}

/// Highlighting hints for the rendering layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RowFlags {
    pub negative_net_margin: bool,
    pub contribution_below_ideal: bool,
}

impl RowFlags {
    pub fn for_result(result: &PricingResult) -> Self {
        let Some(practiced) = result.practiced.as_ref() else {
            return RowFlags::default();
        };
        RowFlags {
            negative_net_margin: practiced.net_margin_pct < 0.0,
            contribution_below_ideal: practiced.contribution_margin_pct
                < result.ideal.contribution_margin_pct,
        }
    }

    pub fn any(&self) -> bool {
        self.negative_net_margin || self.contribution_below_ideal
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReportRow {
    /// 1-based registration order.
    pub position: usize,
    pub name: String,
    pub unit_variable_cost: f64,
    #[serde(serialize_with = "serialize_outcome")]
    pub outcome: Result<PricingResult, PricingError>,
    pub flags: RowFlags,
}

impl ReportRow {
    pub fn result(&self) -> Option<&PricingResult> {
        self.outcome.as_ref().ok()
    }

    pub fn error(&self) -> Option<&PricingError> {
        self.outcome.as_ref().err()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub rows: Vec<ReportRow>,
    pub summary: SummaryMetrics,
}

impl ComparisonReport {
    /// Flags each row; `outcomes` must already be in registration order.
    pub fn assemble(
        outcomes: Vec<(String, f64, Result<PricingResult, PricingError>)>,
        summary: SummaryMetrics,
    ) -> Self {
        let rows = outcomes
            .into_iter()
            .enumerate()
            .map(|(index, (name, unit_variable_cost, outcome))| {
                let flags = outcome
                    .as_ref()
                    .map(RowFlags::for_result)
                    .unwrap_or_default();
                ReportRow {
                    position: index + 1,
                    name,
                    unit_variable_cost,
                    outcome,
                    flags,
                }
            })
            .collect();

        Self { rows, summary }
    }

    pub fn flagged_rows(&self) -> impl Iterator<Item = &ReportRow> {
        self.rows.iter().filter(|row| row.flags.any())
    }

    pub fn priced_count(&self) -> usize {
        self.rows.iter().filter(|row| row.outcome.is_ok()).count()
    }
}

fn serialize_outcome<S>(
    outcome: &Result<PricingResult, PricingError>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::ser::SerializeMap;

    let mut map = serializer.serialize_map(Some(1))?;
    match outcome {
        Ok(result) => map.serialize_entry("priced", result)?,
        Err(err) => map.serialize_entry("error", &err.to_string())?,
    }
    map.end()
}
