//! The Summary Builder: one cost record per cost center.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{CostCenterId, CostCenterRegistry, CostMap, EngineError, ResultEngine, Usage, UsageRecord};

/// The four calculator outputs, keyed by cost center.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AllocatedCosts {
    pub salary: CostMap,
    pub non_salary: CostMap,
    pub estates: CostMap,
    pub depreciation: CostMap,
}

/// Full cost breakdown of one cost center, paired with its usage.
///
/// `total_cost` is always the sum of the four components; it is computed
/// here and never edited afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CostSummary {
    pub cost_center: CostCenterId,
    pub salary_cost: Decimal,
    pub non_salary_cost: Decimal,
    pub estates_cost: Decimal,
    pub depreciation_cost: Decimal,
    pub total_cost: Decimal,
    pub usage: Usage,
}

impl CostSummary {
    fn new(cost_center: CostCenterId, costs: &AllocatedCosts, usage: Usage) -> ResultEngine<Self> {
        let pick = |map: &CostMap| map.get(cost_center.as_str()).copied().unwrap_or_default();
        let salary_cost = pick(&costs.salary);
        let non_salary_cost = pick(&costs.non_salary);
        let estates_cost = pick(&costs.estates);
        let depreciation_cost = pick(&costs.depreciation);

        let total_cost = salary_cost
            .checked_add(non_salary_cost)
            .and_then(|v| v.checked_add(estates_cost))
            .and_then(|v| v.checked_add(depreciation_cost))
            .ok_or_else(|| EngineError::overflow(format!("cost center {cost_center}"), "total_cost"))?;

        Ok(Self {
            cost_center,
            salary_cost,
            non_salary_cost,
            estates_cost,
            depreciation_cost,
            total_cost,
            usage,
        })
    }
}

/// One summary per registry entry, in registry order.
///
/// Cost centers no input references still get an all-zero record, and a
/// missing usage record defaults to zero capacity and usage.
pub fn build_summaries(
    registry: &CostCenterRegistry,
    costs: &AllocatedCosts,
    usage: &[UsageRecord],
) -> ResultEngine<Vec<CostSummary>> {
    registry
        .iter()
        .map(|cost_center| {
            let usage = usage
                .iter()
                .find(|record| &record.cost_center == cost_center)
                .map(UsageRecord::usage)
                .unwrap_or_default();
            CostSummary::new(cost_center.clone(), costs, usage)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn cc(id: &str) -> CostCenterId {
        CostCenterId::new(id).unwrap()
    }

    #[test]
    fn components_are_summed_into_total() {
        let registry = CostCenterRegistry::from_names(["A"]).unwrap();
        let mut costs = AllocatedCosts::default();
        costs.salary.insert(cc("A"), dec!(50000));
        costs.non_salary.insert(cc("A"), dec!(2000.25));
        costs.estates.insert(cc("A"), dec!(800));
        costs.depreciation.insert(cc("A"), dec!(10000));

        let summaries = build_summaries(&registry, &costs, &[]).unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].total_cost, dec!(62800.25));
    }

    #[test]
    fn every_registry_center_is_present() {
        let registry = CostCenterRegistry::from_names(["A", "B", "C"]).unwrap();
        let mut costs = AllocatedCosts::default();
        costs.salary.insert(cc("B"), dec!(10));
        let usage = [UsageRecord::new(cc("B"), dec!(100), dec!(40), "days")];

        let summaries = build_summaries(&registry, &costs, &usage).unwrap();
        let ids: Vec<&str> = summaries.iter().map(|s| s.cost_center.as_str()).collect();
        assert_eq!(ids, ["A", "B", "C"]);

        assert_eq!(summaries[0].total_cost, Decimal::ZERO);
        assert_eq!(summaries[0].usage, Usage::default());
        assert_eq!(summaries[1].usage.actual, dec!(40));
        assert_eq!(summaries[1].usage.unit, "days");
    }
}
