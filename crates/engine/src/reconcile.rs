//! Reconciliation report: data-quality findings that are not errors.
//!
//! The engine costs a model even when percentages do not add up or declared
//! totals disagree with the detail; those situations are reported here so an
//! operator can review them.

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::{CostCenterId, ModelInput, ModelOutput, ResultEngine};

/// A single reconciliation finding.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    /// A staff member's allocations do not sum to 100%.
    StaffAllocationTotal { staff: Uuid, name: String, total: Decimal },
    /// A room's split does not sum to 100%.
    RoomSplitTotal { room: Uuid, name: String, total: Decimal },
    /// A non-salary item's declared total differs from its per-center amounts.
    DeclaredTotalMismatch {
        item: Uuid,
        name: String,
        declared: Decimal,
        computed: Decimal,
    },
    /// A cost center carries cost but has no usage, so its rates are zero.
    UnrecoveredCost {
        cost_center: CostCenterId,
        total_cost: Decimal,
    },
    /// Actual usage exceeds the recorded capacity.
    UsageOverCapacity {
        cost_center: CostCenterId,
        capacity: Decimal,
        actual: Decimal,
    },
    /// An asset has reached the end of its lifespan but is still depreciated.
    AssetPastLifespan {
        asset: Uuid,
        name: String,
        current_age: Decimal,
        lifespan_years: Decimal,
    },
}

impl Notice {
    /// Stable snake_case tag, matching the serialized `kind`.
    pub fn kind(&self) -> &'static str {
        match self {
            Notice::StaffAllocationTotal { .. } => "staff_allocation_total",
            Notice::RoomSplitTotal { .. } => "room_split_total",
            Notice::DeclaredTotalMismatch { .. } => "declared_total_mismatch",
            Notice::UnrecoveredCost { .. } => "unrecovered_cost",
            Notice::UsageOverCapacity { .. } => "usage_over_capacity",
            Notice::AssetPastLifespan { .. } => "asset_past_lifespan",
        }
    }

    /// Short human-readable description.
    pub fn message(&self) -> String {
        match self {
            Notice::StaffAllocationTotal { name, total, .. } => {
                format!("staff '{name}' is allocated {total}% instead of 100%")
            }
            Notice::RoomSplitTotal { name, total, .. } => {
                format!("room '{name}' is split {total}% instead of 100%")
            }
            Notice::DeclaredTotalMismatch {
                name,
                declared,
                computed,
                ..
            } => format!("item '{name}' declares {declared} but its cost centers sum to {computed}"),
            Notice::UnrecoveredCost {
                cost_center,
                total_cost,
            } => format!("cost center '{cost_center}' has cost {total_cost} but no usage"),
            Notice::UsageOverCapacity {
                cost_center,
                capacity,
                actual,
            } => format!("cost center '{cost_center}' used {actual} of a capacity of {capacity}"),
            Notice::AssetPastLifespan {
                name,
                current_age,
                lifespan_years,
                ..
            } => format!("asset '{name}' is {current_age} years old with a lifespan of {lifespan_years}"),
        }
    }
}

/// Collect every reconciliation notice for `input`, given the output derived
/// from it. The order follows the input collections.
pub fn reconcile(input: &ModelInput, output: &ModelOutput) -> ResultEngine<Vec<Notice>> {
    let mut notices = Vec::new();

    for member in &input.staff {
        let total = member.allocated_percentage()?;
        if total != Decimal::ONE_HUNDRED {
            notices.push(Notice::StaffAllocationTotal {
                staff: member.id,
                name: member.name.clone(),
                total,
            });
        }
    }

    for room in &input.rooms {
        let total = room.split_percentage()?;
        if total != Decimal::ONE_HUNDRED {
            notices.push(Notice::RoomSplitTotal {
                room: room.id,
                name: room.name.clone(),
                total,
            });
        }
    }

    for item in &input.non_salary_items {
        let computed = item.computed_total()?;
        if computed != item.declared_total {
            notices.push(Notice::DeclaredTotalMismatch {
                item: item.id,
                name: item.name.clone(),
                declared: item.declared_total,
                computed,
            });
        }
    }

    for summary in &output.summaries {
        let usage = &summary.usage;
        if usage.actual.is_zero() && !summary.total_cost.is_zero() {
            notices.push(Notice::UnrecoveredCost {
                cost_center: summary.cost_center.clone(),
                total_cost: summary.total_cost,
            });
        }
        if usage.capacity > Decimal::ZERO && usage.actual > usage.capacity {
            notices.push(Notice::UsageOverCapacity {
                cost_center: summary.cost_center.clone(),
                capacity: usage.capacity,
                actual: usage.actual,
            });
        }
    }

    for asset in &input.assets {
        if asset.remaining_life()?.is_zero() {
            notices.push(Notice::AssetPastLifespan {
                asset: asset.id,
                name: asset.name.clone(),
                current_age: asset.current_age,
                lifespan_years: asset.lifespan_years,
            });
        }
    }

    Ok(notices)
}
