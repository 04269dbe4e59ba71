//! Costing of input documents: one job per financial-year document.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use api_types::report::CostingReport;
use chrono::NaiveDate;
use engine::{CostingModel, FinancialYear, ModelInput};
use serde_json::Value;
use tokio::task::JoinSet;

use crate::{
    error::{AppError, Result},
    report,
    settings::Settings,
};

/// A costed document.
#[derive(Debug)]
pub struct Costed {
    pub path: PathBuf,
    pub year: FinancialYear,
    pub report: CostingReport,
}

/// Parse a document, filling in the financial year containing `today` when
/// the document does not name one.
pub fn parse_document(bytes: &[u8], start_month: u32, today: NaiveDate) -> Result<ModelInput> {
    let mut document: Value = serde_json::from_slice(bytes)?;
    let Some(fields) = document.as_object_mut() else {
        return Err(AppError::InvalidDocument(
            "expected a JSON object at the top level".to_string(),
        ));
    };
    if !fields.contains_key("financial_year") {
        let year = FinancialYear::containing(today, start_month)?;
        tracing::info!("no financial year given, assuming {year}");
        fields.insert("financial_year".to_string(), Value::String(year.to_string()));
    }
    Ok(serde_json::from_value(document)?)
}

/// Cost a parsed document and project it into a report.
pub fn cost(input: ModelInput, settings: &Settings) -> Result<(FinancialYear, CostingReport)> {
    let year = input.financial_year;
    let model = CostingModel::new(input)?;
    let notices = model.notices()?;
    for notice in &notices {
        tracing::warn!("{year}: {}", notice.message());
    }
    let notices = if settings.report.include_notices {
        notices
    } else {
        Vec::new()
    };
    let report = report::build(model.output(), &notices, settings.report.decimals)?;
    Ok((year, report))
}

async fn cost_file(path: PathBuf, settings: Settings, today: NaiveDate) -> Result<Costed> {
    let bytes = tokio::fs::read(&path).await?;
    let (year, report) = tokio::task::spawn_blocking(move || {
        let input = parse_document(&bytes, settings.financial_year.start_month, today)?;
        cost(input, &settings)
    })
    .await??;
    tracing::debug!("costed {} as {year}", path.display());
    Ok(Costed { path, year, report })
}

/// Cost every document concurrently. Results come back in input order;
/// a failed document does not stop the others.
pub async fn run_all(
    paths: Vec<PathBuf>,
    settings: &Settings,
    today: NaiveDate,
) -> Vec<Result<Costed>> {
    let mut tasks = JoinSet::new();
    for (index, path) in paths.iter().cloned().enumerate() {
        let settings = settings.clone();
        tasks.spawn(async move {
            let result = cost_file(path.clone(), settings, today)
                .await
                .map_err(|err| err.in_document(path));
            (index, result)
        });
    }

    let mut slots: Vec<Option<Result<Costed>>> = paths.iter().map(|_| None).collect();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, result)) => slots[index] = Some(result),
            Err(err) => tracing::error!("costing task failed: {err}"),
        }
    }

    let results = slots
        .into_iter()
        .zip(paths)
        .map(|(slot, path)| {
            slot.unwrap_or_else(|| {
                Err(AppError::InvalidDocument("costing task did not complete".to_string())
                    .in_document(path))
            })
        })
        .collect();
    reject_duplicate_years(results)
}

/// Each financial year owns one model; a second document for a year already
/// costed is an error.
fn reject_duplicate_years(results: Vec<Result<Costed>>) -> Vec<Result<Costed>> {
    let mut seen: HashMap<FinancialYear, PathBuf> = HashMap::new();
    results
        .into_iter()
        .map(|result| {
            let costed = result?;
            if let Some(first) = seen.get(&costed.year) {
                return Err(AppError::DuplicateYear {
                    year: costed.year,
                    first: first.clone(),
                    second: costed.path,
                });
            }
            seen.insert(costed.year, costed.path.clone());
            Ok(costed)
        })
        .collect()
}

/// File name of a report written into an output directory.
pub fn report_path(dir: &Path, year: FinancialYear, extension: &str) -> PathBuf {
    dir.join(format!("{year}.{extension}"))
}
