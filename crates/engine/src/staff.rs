//! Staff members and the Staff Cost Calculator.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    CostCenterId, CostMap, ResultEngine,
    util::{accumulate, checked_sum, percent_of},
};

/// A member of staff whose salary is charged to one or more cost centers.
///
/// `allocations` maps a cost center to the percentage of the salary it
/// carries. The percentages are taken at face value: nothing forces them to
/// sum to 100.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    /// Stable identifier; renaming a member never changes it.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    pub annual_salary: Decimal,
    #[serde(default, deserialize_with = "crate::cost_centers::keyed::allocations")]
    pub allocations: BTreeMap<CostCenterId, Decimal>,
}

impl StaffMember {
    pub fn new(name: impl Into<String>, annual_salary: Decimal) -> Self {
        Self::with_id(Uuid::new_v4(), name, annual_salary)
    }

    pub fn with_id(id: Uuid, name: impl Into<String>, annual_salary: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            annual_salary,
            allocations: BTreeMap::new(),
        }
    }

    /// Sum of this member's allocation percentages.
    pub fn allocated_percentage(&self) -> ResultEngine<Decimal> {
        checked_sum(self.allocations.values().copied(), &self.label(), "allocations")
    }

    pub(crate) fn label(&self) -> String {
        format!("staff {}", self.id)
    }
}

/// Cost center → sum of `annual_salary * percentage / 100` over all staff.
pub fn staff_costs(staff: &[StaffMember]) -> ResultEngine<CostMap> {
    let mut costs = CostMap::new();
    for member in staff {
        let label = member.label();
        for (cost_center, percentage) in &member.allocations {
            let share = percent_of(member.annual_salary, *percentage, &label, "allocations")?;
            accumulate(&mut costs, cost_center, share, &label, "allocations")?;
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
    fn salary_is_split_by_percentage() {
        let mut member = StaffMember::new("Technician", dec!(100000));
        member.allocations.insert(cc("A"), dec!(50));
        member.allocations.insert(cc("B"), dec!(50));

        let costs = staff_costs(&[member]).unwrap();
        assert_eq!(costs.get("A"), Some(&dec!(50000)));
        assert_eq!(costs.get("B"), Some(&dec!(50000)));
        assert_eq!(costs.get("C"), None);
    }

    #[test]
    fn contributions_add_up_across_staff() {
        let mut first = StaffMember::new("First", dec!(40000));
        first.allocations.insert(cc("A"), dec!(25));
        let mut second = StaffMember::new("Second", dec!(30000));
        second.allocations.insert(cc("A"), dec!(100));

        let costs = staff_costs(&[first, second]).unwrap();
        assert_eq!(costs.get("A"), Some(&dec!(40000)));
    }

    #[test]
    fn over_allocation_is_taken_at_face_value() {
        let mut member = StaffMember::new("Busy", dec!(10000));
        member.allocations.insert(cc("A"), dec!(80));
        member.allocations.insert(cc("B"), dec!(70));

        assert_eq!(member.allocated_percentage().unwrap(), dec!(150));
        let costs = staff_costs(&[member]).unwrap();
        assert_eq!(costs.get("A"), Some(&dec!(8000)));
        assert_eq!(costs.get("B"), Some(&dec!(7000)));
    }

    #[test]
    fn allocation_keys_are_normalized_when_read() {
        let member: StaffMember = serde_json::from_str(
            r#"{ "name": "Operator", "annual_salary": "100000", "allocations": { " Imaging ": "40" } }"#,
        )
        .unwrap();
        assert_eq!(member.allocations.get("Imaging"), Some(&dec!(40)));
    }

    #[test]
    fn allocation_keys_colliding_after_normalization_are_rejected() {
        let err = serde_json::from_str::<StaffMember>(
            r#"{
                "name": "Operator",
                "annual_salary": "100000",
                "allocations": { "Imaging": "40", "Imaging ": "60" }
            }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Imaging in `allocations`"));
    }
}
