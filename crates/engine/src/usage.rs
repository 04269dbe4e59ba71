//! Usage records: how many billable units a cost center delivered.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::CostCenterId;

/// Capacity and actual usage of one cost center over the financial year.
///
/// `actual` is the divisor of every rate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub cost_center: CostCenterId,
    #[serde(default)]
    pub capacity: Decimal,
    #[serde(default)]
    pub actual: Decimal,
    /// Billable unit, e.g. "days" or "plates".
    #[serde(default)]
    pub unit: String,
}

/// Usage figures without the cost center they belong to, as attached to a
/// [`CostSummary`](crate::CostSummary).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    pub capacity: Decimal,
    pub actual: Decimal,
    pub unit: String,
}

impl Usage {
    /// `actual / capacity`, or `None` when no capacity is recorded.
    pub fn utilisation(&self) -> Option<Decimal> {
        if self.capacity.is_zero() {
            return None;
        }
        self.actual.checked_div(self.capacity)
    }
}

impl UsageRecord {
    pub fn new(
        cost_center: CostCenterId,
        capacity: Decimal,
        actual: Decimal,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            cost_center,
            capacity,
            actual,
            unit: unit.into(),
        }
    }

    pub fn usage(&self) -> Usage {
        Usage {
            capacity: self.capacity,
            actual: self.actual,
            unit: self.unit.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn default_usage_is_empty() {
        let usage = Usage::default();
        assert_eq!(usage.capacity, Decimal::ZERO);
        assert_eq!(usage.actual, Decimal::ZERO);
        assert_eq!(usage.unit, "");
        assert_eq!(usage.utilisation(), None);
    }

    #[test]
    fn utilisation_is_actual_over_capacity() {
        let record = UsageRecord::new(CostCenterId::new("A").unwrap(), dec!(250), dec!(200), "days");
        assert_eq!(record.usage().utilisation(), Some(dec!(0.8)));
    }
}
