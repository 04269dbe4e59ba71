//! fEC area-cost types: the cost of one square meter of a kind of space.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A kind of space (lab, office, clean room...) with its yearly cost per m².
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AreaCostType {
    /// Stable identifier; rooms reference the type through it.
    pub id: Uuid,
    pub description: String,
    pub cost_per_area: Decimal,
}

impl AreaCostType {
    pub fn new(description: impl Into<String>, cost_per_area: Decimal) -> Self {
        Self::with_id(Uuid::new_v4(), description, cost_per_area)
    }

    pub fn with_id(id: Uuid, description: impl Into<String>, cost_per_area: Decimal) -> Self {
        Self {
            id,
            description: description.into(),
            cost_per_area,
        }
    }
}
