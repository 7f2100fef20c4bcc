//! Tabular export of a comparison report.

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;
use time::{macros::format_description, OffsetDateTime};
use tracing::info;

use crate::domain::{ComparisonReport, PriceEvaluation, RealizedMarkup, ReportRow};

const FILE_STEM: &str = "pricing-report";

pub const COLUMNS: [&str; 15] = [
    "Position",
    "Item",
    "Unit Cost",
    "Ideal Price",
    "Ideal Markup",
    "Ideal Contribution Margin (%)",
    "Ideal Net Margin (%)",
    "Practiced Price",
    "Practiced Markup",
    "Practiced Contribution Margin (%)",
    "Practiced Net Margin (%)",
    "Net Margin Delta (pp)",
    "Negative Net Margin",
    "Contribution Below Ideal",
    "Status",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where exports land unless the user picks another folder.
pub fn default_export_dir() -> PathBuf {
    dirs::document_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Writes one row per item under the [`COLUMNS`] header.
pub fn write_csv<W: Write>(report: &ComparisonReport, writer: W) -> Result<(), ExportError> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(COLUMNS)?;
    for row in &report.rows {
        out.write_record(row_cells(row))?;
    }
    out.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(report: &ComparisonReport, writer: W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}

/// Saves the report into `dir` under a timestamped name and returns the path.
pub fn export_report(
    report: &ComparisonReport,
    format: ExportFormat,
    dir: &Path,
) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name(format, OffsetDateTime::now_utc()));
    let mut writer = BufWriter::new(File::create(&path)?);

    match format {
        ExportFormat::Csv => write_csv(report, &mut writer)?,
        ExportFormat::Json => write_json(report, &mut writer)?,
    }
    writer.flush()?;

    info!(path = %path.display(), rows = report.rows.len(), "exported pricing report");
    Ok(path)
}

fn file_name(format: ExportFormat, at: OffsetDateTime) -> String {
    let stamp = at
        .format(format_description!("[year][month][day]-[hour][minute][second]"))
        .unwrap_or_else(|_| at.unix_timestamp().to_string());
    format!("{FILE_STEM}-{stamp}.{}", format.extension())
}

fn row_cells(row: &ReportRow) -> Vec<String> {
    let mut cells = vec![
        row.position.to_string(),
        row.name.clone(),
        money(row.unit_variable_cost),
    ];

    match &row.outcome {
        Ok(result) => {
            cells.extend(evaluation_cells(Some(&result.ideal)));
            cells.extend(evaluation_cells(result.practiced.as_ref()));
            cells.push(
                result
                    .margin_delta()
                    .map(|delta| percent(delta.net_pct))
                    .unwrap_or_default(),
            );
            cells.push(row.flags.negative_net_margin.to_string());
            cells.push(row.flags.contribution_below_ideal.to_string());
            cells.push("ok".to_string());
        }
        Err(err) => {
            cells.extend(std::iter::repeat(String::new()).take(11));
            cells.push(err.to_string());
        }
    }

    cells
}

fn evaluation_cells(evaluation: Option<&PriceEvaluation>) -> [String; 4] {
    match evaluation {
        Some(eval) => [
            money(eval.price),
            markup(eval.markup),
            percent(eval.contribution_margin_pct),
            percent(eval.net_margin_pct),
        ],
        None => Default::default(),
    }
}

fn money(value: f64) -> String {
    format!("{value:.2}")
}

fn percent(value: f64) -> String {
    format!("{value:.1}")
}

fn markup(value: RealizedMarkup) -> String {
    match value {
        RealizedMarkup::Defined(value) => format!("{value:.4}"),
        RealizedMarkup::Undefined => "undefined".to_string(),
    }
}
