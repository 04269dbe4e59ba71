//! The Rate Builder: five alternative charge-out rates per cost center.
//!
//! Every rate is a subset of the cost center's costs divided by its actual
//! usage:
//!
//! | rate | numerator |
//! |---|---|
//! | `excluding_salaries` | non-salary + estates + depreciation |
//! | `direct_costs_only` | salary + non-salary + estates + depreciation |
//! | `excluding_estates` | salary + non-salary + depreciation |
//! | `excluding_depreciation` | salary + non-salary + estates |
//! | `including_all` | salary + non-salary + estates + depreciation |
//!
//! `direct_costs_only` and `including_all` share the same numerator, so they
//! are always equal. Both are reported.
//!
//! When `actual` usage is zero every rate is zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{CostCenterId, CostSummary, EngineError, ResultEngine};

/// The five unit rates of one cost center.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RateSet {
    pub cost_center: CostCenterId,
    pub excluding_salaries: Decimal,
    pub direct_costs_only: Decimal,
    pub excluding_estates: Decimal,
    pub excluding_depreciation: Decimal,
    pub including_all: Decimal,
}

impl RateSet {
    /// All rates zero, used when there is no usage to divide by.
    pub fn zero(cost_center: CostCenterId) -> Self {
        Self {
            cost_center,
            excluding_salaries: Decimal::ZERO,
            direct_costs_only: Decimal::ZERO,
            excluding_estates: Decimal::ZERO,
            excluding_depreciation: Decimal::ZERO,
            including_all: Decimal::ZERO,
        }
    }

    /// Derive the rates from a cost summary.
    pub fn from_summary(summary: &CostSummary) -> ResultEngine<Self> {
        let actual = summary.usage.actual;
        if actual.is_zero() {
            return Ok(Self::zero(summary.cost_center.clone()));
        }

        let label = format!("cost center {}", summary.cost_center);
        let sum = |parts: &[Decimal], field: &'static str| -> ResultEngine<Decimal> {
            parts
                .iter()
                .try_fold(Decimal::ZERO, |acc, part| acc.checked_add(*part))
                .and_then(|total| total.checked_div(actual))
                .ok_or_else(|| EngineError::overflow(label.as_str(), field))
        };

        let CostSummary {
            salary_cost: salary,
            non_salary_cost: non_salary,
            estates_cost: estates,
            depreciation_cost: depreciation,
            ..
        } = *summary;

        Ok(Self {
            cost_center: summary.cost_center.clone(),
            excluding_salaries: sum(&[non_salary, estates, depreciation], "excluding_salaries")?,
            direct_costs_only: sum(
                &[salary, non_salary, estates, depreciation],
                "direct_costs_only",
            )?,
            excluding_estates: sum(&[salary, non_salary, depreciation], "excluding_estates")?,
            excluding_depreciation: sum(
                &[salary, non_salary, estates],
                "excluding_depreciation",
            )?,
            including_all: sum(&[salary, non_salary, estates, depreciation], "including_all")?,
        })
    }

    /// Income the full-cost rate recovers at `actual` usage
    /// (`including_all * actual`). Display only.
    pub fn implied_income(&self, actual: Decimal) -> ResultEngine<Decimal> {
        self.including_all.checked_mul(actual).ok_or_else(|| {
            EngineError::overflow(format!("cost center {}", self.cost_center), "implied_income")
        })
    }
}

/// One rate set per summary, in the same order.
pub fn build_rates(summaries: &[CostSummary]) -> ResultEngine<Vec<RateSet>> {
    summaries.iter().map(RateSet::from_summary).collect()
}
