//! The per-year input document and its validation.
//!
//! Validation rejects configuration errors (bad lifespans, dangling
//! references, unknown cost centers) before any calculator runs, so the
//! calculators never see data that would turn into a meaningless figure.
//! Reconciliation mismatches (percentages not summing to 100, declared totals
//! that disagree) are *not* errors here; see [`crate::reconcile`].

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    AreaCostType, CostCenterId, CostCenterRegistry, DepreciableAsset, EngineError, FinancialYear,
    NonSalaryItem, ResultEngine, Room, StaffMember, UsageRecord, util::ensure_known_cost_center,
};

/// Everything the engine needs to cost one financial year.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelInput {
    pub financial_year: FinancialYear,
    pub cost_centers: CostCenterRegistry,
    #[serde(default)]
    pub area_cost_types: Vec<AreaCostType>,
    #[serde(default)]
    pub staff: Vec<StaffMember>,
    #[serde(default)]
    pub non_salary_items: Vec<NonSalaryItem>,
    #[serde(default)]
    pub assets: Vec<DepreciableAsset>,
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub usage: Vec<UsageRecord>,
}

/// Entities that carry a stable id inside an ordered collection.
pub(crate) trait Identified {
    const KIND: &'static str;

    fn id(&self) -> Uuid;
}

macro_rules! identified {
    ($ty:ty, $kind:literal) => {
        impl Identified for $ty {
            const KIND: &'static str = $kind;

            fn id(&self) -> Uuid {
                self.id
            }
        }
    };
}

identified!(AreaCostType, "area cost type");
identified!(StaffMember, "staff");
identified!(NonSalaryItem, "non-salary item");
identified!(DepreciableAsset, "asset");
identified!(Room, "room");

/// Find an entity by id, for in-place edits.
pub(crate) fn find_mut<T: Identified>(items: &mut [T], id: Uuid) -> ResultEngine<&mut T> {
    items
        .iter_mut()
        .find(|item| item.id() == id)
        .ok_or_else(|| EngineError::KeyNotFound(format!("{} {id}", T::KIND)))
}

/// Remove an entity by id, keeping the order of the others.
pub(crate) fn remove_by_id<T: Identified>(items: &mut Vec<T>, id: Uuid) -> ResultEngine<T> {
    match items.iter().position(|item| item.id() == id) {
        Some(index) => Ok(items.remove(index)),
        None => Err(EngineError::KeyNotFound(format!("{} {id}", T::KIND))),
    }
}

fn ensure_unique_ids<T: Identified>(items: &[T]) -> ResultEngine<()> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.id()) {
            return Err(EngineError::ExistingKey(format!("{} {}", T::KIND, item.id())));
        }
    }
    Ok(())
}

impl ModelInput {
    /// An empty model for `financial_year` over the given cost centers.
    pub fn new(financial_year: FinancialYear, cost_centers: CostCenterRegistry) -> Self {
        Self {
            financial_year,
            cost_centers,
            area_cost_types: Vec::new(),
            staff: Vec::new(),
            non_salary_items: Vec::new(),
            assets: Vec::new(),
            rooms: Vec::new(),
            usage: Vec::new(),
        }
    }

    /// Reject configuration errors. Runs before every recomputation.
    pub fn validate(&self) -> ResultEngine<()> {
        let registry = &self.cost_centers;

        ensure_unique_ids(&self.area_cost_types)?;
        ensure_unique_ids(&self.staff)?;
        ensure_unique_ids(&self.non_salary_items)?;
        ensure_unique_ids(&self.assets)?;
        ensure_unique_ids(&self.rooms)?;

        for member in &self.staff {
            for cost_center in member.allocations.keys() {
                ensure_known_cost_center(registry, cost_center, || member.label(), "allocations")?;
            }
        }

        for item in &self.non_salary_items {
            for cost_center in item.per_cost_center.keys() {
                ensure_known_cost_center(
                    registry,
                    cost_center,
                    || item.label(),
                    "per_cost_center",
                )?;
            }
        }

        for asset in &self.assets {
            if asset.lifespan_years <= Decimal::ZERO {
                return Err(EngineError::InvalidLifespan {
                    asset: asset.id,
                    lifespan_years: asset.lifespan_years,
                });
            }
            ensure_known_cost_center(registry, &asset.cost_center, || asset.label(), "cost_center")?;
        }

        for room in &self.rooms {
            if self.area_cost_type(room.area_cost_type).is_none() {
                return Err(EngineError::UnknownAreaCostType {
                    room: room.id,
                    area_cost_type: room.area_cost_type,
                });
            }
            for cost_center in room.split.keys() {
                ensure_known_cost_center(registry, cost_center, || room.label(), "split")?;
            }
        }

        let mut with_usage = HashSet::with_capacity(self.usage.len());
        for record in &self.usage {
            ensure_known_cost_center(
                registry,
                &record.cost_center,
                || format!("usage {}", record.cost_center),
                "cost_center",
            )?;
            if !with_usage.insert(&record.cost_center) {
                return Err(EngineError::DuplicateUsage {
                    cost_center: record.cost_center.clone(),
                });
            }
        }

        Ok(())
    }

    pub fn area_cost_type(&self, id: Uuid) -> Option<&AreaCostType> {
        self.area_cost_types.iter().find(|kind| kind.id == id)
    }

    pub fn usage_for(&self, cost_center: &str) -> Option<&UsageRecord> {
        self.usage
            .iter()
            .find(|record| record.cost_center.as_str() == cost_center)
    }

    /// The first entity still pointing at `cost_center`, if any.
    pub(crate) fn cost_center_reference(&self, cost_center: &CostCenterId) -> Option<String> {
        let key = cost_center.as_str();
        self.staff
            .iter()
            .find(|m| m.allocations.contains_key(key))
            .map(StaffMember::label)
            .or_else(|| {
                self.non_salary_items
                    .iter()
                    .find(|i| i.per_cost_center.contains_key(key))
                    .map(NonSalaryItem::label)
            })
            .or_else(|| {
                self.assets
                    .iter()
                    .find(|a| &a.cost_center == cost_center)
                    .map(DepreciableAsset::label)
            })
            .or_else(|| {
                self.rooms
                    .iter()
                    .find(|r| r.split.contains_key(key))
                    .map(Room::label)
            })
            .or_else(|| self.usage_for(key).map(|_| format!("usage {key}")))
    }
}
