//! The pure costing pipeline: validation, the four allocation calculators,
//! the Summary Builder and the Rate Builder, run once from scratch.

use serde::{Deserialize, Serialize};

use crate::{
    AllocatedCosts, CostSummary, FinancialYear, ModelInput, RateSet, ResultEngine, build_rates,
    build_summaries, depreciation_costs, estates_costs, non_salary_costs, staff_costs,
};

/// Everything derived from one [`ModelInput`].
///
/// `summaries` and `rates` are both in registry order and have one entry per
/// registry cost center.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelOutput {
    pub financial_year: FinancialYear,
    pub summaries: Vec<CostSummary>,
    pub rates: Vec<RateSet>,
}

impl ModelOutput {
    pub fn summary(&self, cost_center: &str) -> Option<&CostSummary> {
        self.summaries
            .iter()
            .find(|s| s.cost_center.as_str() == cost_center)
    }

    pub fn rates_for(&self, cost_center: &str) -> Option<&RateSet> {
        self.rates
            .iter()
            .find(|r| r.cost_center.as_str() == cost_center)
    }

    /// Summary and rates of each cost center, side by side.
    pub fn iter(&self) -> impl Iterator<Item = (&CostSummary, &RateSet)> {
        self.summaries.iter().zip(self.rates.iter())
    }
}

/// Run the four allocation calculators.
///
/// They read disjoint parts of the input and share no state, so their order
/// does not matter.
pub fn allocate(input: &ModelInput) -> ResultEngine<AllocatedCosts> {
    Ok(AllocatedCosts {
        salary: staff_costs(&input.staff)?,
        non_salary: non_salary_costs(&input.non_salary_items)?,
        estates: estates_costs(&input.rooms, &input.area_cost_types)?,
        depreciation: depreciation_costs(&input.assets)?,
    })
}

/// Cost a financial year: `f(input) -> (summaries, rates)`.
///
/// The input is validated first; configuration errors are returned before any
/// calculator runs. The function is deterministic and has no side effects, so
/// calling it twice on the same input returns equal outputs.
pub fn calculate(input: &ModelInput) -> ResultEngine<ModelOutput> {
    input.validate()?;

    let costs = allocate(input)?;
    let summaries = build_summaries(&input.cost_centers, &costs, &input.usage)?;
    let rates = build_rates(&summaries)?;

    tracing::debug!(
        financial_year = %input.financial_year,
        cost_centers = summaries.len(),
        "costing model calculated"
    );

    Ok(ModelOutput {
        financial_year: input.financial_year,
        summaries,
        rates,
    })
}
