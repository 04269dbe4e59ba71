//! Rooms and the Estates Cost Calculator.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    AreaCostType, CostCenterId, CostMap, EngineError, ResultEngine,
    util::{accumulate, checked_sum, percent_of},
};

/// A room whose running cost is shared between cost centers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Room {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    pub area_m2: Decimal,
    pub area_cost_type: Uuid,
    /// Cost center → percentage of the room cost it carries.
    #[serde(default, deserialize_with = "crate::cost_centers::keyed::split")]
    pub split: BTreeMap<CostCenterId, Decimal>,
}

impl Room {
    pub fn new(name: impl Into<String>, area_m2: Decimal, area_cost_type: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            area_m2,
            area_cost_type,
            split: BTreeMap::new(),
        }
    }

    /// `area_m2 * cost_per_area` for this room's area-cost type.
    pub fn cost(&self, area_cost_type: &AreaCostType) -> ResultEngine<Decimal> {
        self.area_m2
            .checked_mul(area_cost_type.cost_per_area)
            .ok_or_else(|| EngineError::overflow(self.label(), "area_m2"))
    }

    /// Sum of the split percentages.
    pub fn split_percentage(&self) -> ResultEngine<Decimal> {
        checked_sum(self.split.values().copied(), &self.label(), "split")
    }

    pub(crate) fn label(&self) -> String {
        format!("room {}", self.id)
    }
}

/// Cost center → sum over rooms of `room_cost * percentage / 100`.
///
/// A room pointing to an area-cost type that is not in `area_cost_types` is a
/// data-integrity failure, never a zero-cost room.
pub fn estates_costs(rooms: &[Room], area_cost_types: &[AreaCostType]) -> ResultEngine<CostMap> {
    let by_id: HashMap<Uuid, &AreaCostType> =
        area_cost_types.iter().map(|kind| (kind.id, kind)).collect();

    let mut costs = CostMap::new();
    for room in rooms {
        let kind = by_id
            .get(&room.area_cost_type)
            .ok_or(EngineError::UnknownAreaCostType {
                room: room.id,
                area_cost_type: room.area_cost_type,
            })?;
        let label = room.label();
        let room_cost = room.cost(kind)?;
        for (cost_center, percentage) in &room.split {
            let share = percent_of(room_cost, *percentage, &label, "split")?;
            accumulate(&mut costs, cost_center, share, &label, "split")?;
        }
    }
    Ok(costs)
}
