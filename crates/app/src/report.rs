//! Projection of engine output into report rows, and report writers.

use std::io::Write;

use api_types::report::{CostCenterRow, CostingReport, NoticeRow};
use engine::{CostSummary, ModelOutput, Notice, RateSet};
use rust_decimal::Decimal;

use crate::{error::Result, settings::ReportFormat};

/// Flatten `output` into report rows rounded to `decimals` places.
pub fn build(output: &ModelOutput, notices: &[Notice], decimals: u32) -> Result<CostingReport> {
    let cost_centers = output
        .iter()
        .map(|(summary, rates)| row(summary, rates, decimals))
        .collect::<Result<Vec<_>>>()?;

    let notices = notices
        .iter()
        .map(|notice| NoticeRow {
            kind: notice.kind().to_string(),
            message: notice.message(),
        })
        .collect();

    Ok(CostingReport {
        financial_year: output.financial_year.to_string(),
        cost_centers,
        notices,
    })
}

fn row(summary: &CostSummary, rates: &RateSet, decimals: u32) -> Result<CostCenterRow> {
    let round = |value: Decimal| value.round_dp(decimals);
    let usage = &summary.usage;
    let implied_income = rates.implied_income(usage.actual)?;

    Ok(CostCenterRow {
        cost_center: summary.cost_center.to_string(),
        unit: usage.unit.clone(),
        capacity: usage.capacity,
        actual: usage.actual,
        utilisation: usage.utilisation().map(|u| u.round_dp(4)),
        salary_cost: round(summary.salary_cost),
        non_salary_cost: round(summary.non_salary_cost),
        estates_cost: round(summary.estates_cost),
        depreciation_cost: round(summary.depreciation_cost),
        total_cost: round(summary.total_cost),
        rate_excluding_salaries: round(rates.excluding_salaries),
        rate_direct_costs_only: round(rates.direct_costs_only),
        rate_excluding_estates: round(rates.excluding_estates),
        rate_excluding_depreciation: round(rates.excluding_depreciation),
        rate_including_all: round(rates.including_all),
        implied_income: round(implied_income),
    })
}

/// Write `report` to `out` in the requested format.
///
/// CSV carries the cost-center rows only; notices are logged by the caller.
pub fn write<W: Write>(report: &CostingReport, format: ReportFormat, mut out: W) -> Result<()> {
    match format {
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut out, report)?;
            writeln!(out)?;
        }
        ReportFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            for row in &report.cost_centers {
                writer.serialize(row)?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}
