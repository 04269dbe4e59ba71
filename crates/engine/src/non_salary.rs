//! Non-salary expenditure line items and their calculator.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    CostCenterId, CostMap, ResultEngine,
    util::{accumulate, checked_sum},
};

/// A line of non-salary spend (consumables, service contracts...).
///
/// `declared_total` is entered separately from the per-center amounts and is
/// kept for reconciliation only. It never feeds the calculator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NonSalaryItem {
    /// Stable identifier; renaming updates `name` in place.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    #[serde(default, deserialize_with = "crate::cost_centers::keyed::per_cost_center")]
    pub per_cost_center: BTreeMap<CostCenterId, Decimal>,
    #[serde(default)]
    pub declared_total: Decimal,
}

impl NonSalaryItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    pub fn with_id(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            per_cost_center: BTreeMap::new(),
            declared_total: Decimal::ZERO,
        }
    }

    /// Sum of the per-center amounts, for comparison with `declared_total`.
    pub fn computed_total(&self) -> ResultEngine<Decimal> {
        checked_sum(
            self.per_cost_center.values().copied(),
            &self.label(),
            "per_cost_center",
        )
    }

    pub(crate) fn label(&self) -> String {
        format!("non-salary item {}", self.id)
    }
}

/// Cost center → sum of every item's amount for that center.
pub fn non_salary_costs(items: &[NonSalaryItem]) -> ResultEngine<CostMap> {
    let mut costs = CostMap::new();
    for item in items {
        let label = item.label();
        for (cost_center, amount) in &item.per_cost_center {
            accumulate(&mut costs, cost_center, *amount, &label, "per_cost_center")?;
        }
    }
    Ok(costs)
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn cc(id: &str) -> CostCenterId {
        CostCenterId::new(id).unwrap()
    }

    #[test]
    fn amounts_are_summed_per_center() {
        let mut consumables = NonSalaryItem::new("Consumables");
        consumables.per_cost_center.insert(cc("A"), dec!(1200.50));
        consumables.per_cost_center.insert(cc("B"), dec!(300));
        let mut contracts = NonSalaryItem::new("Service contracts");
        contracts.per_cost_center.insert(cc("A"), dec!(799.50));

        let costs = non_salary_costs(&[consumables, contracts]).unwrap();
        assert_eq!(costs.get("A"), Some(&dec!(2000.00)));
        assert_eq!(costs.get("B"), Some(&dec!(300)));
    }

    #[test]
    fn declared_total_is_ignored() {
        let mut item = NonSalaryItem::new("Travel");
        item.per_cost_center.insert(cc("A"), dec!(100));
        item.declared_total = dec!(999);

        assert_eq!(item.computed_total().unwrap(), dec!(100));
        let costs = non_salary_costs(&[item]).unwrap();
        assert_eq!(costs.get("A"), Some(&dec!(100)));
    }

    #[test]
    fn amounts_keyed_twice_after_normalization_are_rejected() {
        let err = serde_json::from_str::<NonSalaryItem>(
            r#"{ "name": "Consumables", "per_cost_center": { "A": "10", " A": "20" } }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("A in `per_cost_center`"));
    }
}
