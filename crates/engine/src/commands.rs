//! Command structs for model edits.
//!
//! These types group parameters for creating and updating entities, keeping
//! call sites readable and avoiding long argument lists.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{CostCenterId, DepreciableAsset, NonSalaryItem, Room, StaffMember};

/// Create a staff member.
#[derive(Clone, Debug)]
pub struct StaffCmd {
    pub name: String,
    pub annual_salary: Decimal,
    pub allocations: BTreeMap<CostCenterId, Decimal>,
}

impl StaffCmd {
    #[must_use]
    pub fn new(name: impl Into<String>, annual_salary: Decimal) -> Self {
        Self {
            name: name.into(),
            annual_salary,
            allocations: BTreeMap::new(),
        }
    }

    /// Charge `percentage` of the salary to `cost_center`.
    #[must_use]
    pub fn allocate(mut self, cost_center: CostCenterId, percentage: Decimal) -> Self {
        self.allocations.insert(cost_center, percentage);
        self
    }

    pub(crate) fn into_entity(self) -> StaffMember {
        let mut member = StaffMember::new(self.name, self.annual_salary);
        member.allocations = self.allocations;
        member
    }
}

/// Create a non-salary line item.
#[derive(Clone, Debug)]
pub struct NonSalaryCmd {
    pub name: String,
    pub per_cost_center: BTreeMap<CostCenterId, Decimal>,
    pub declared_total: Decimal,
}

impl NonSalaryCmd {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            per_cost_center: BTreeMap::new(),
            declared_total: Decimal::ZERO,
        }
    }

    #[must_use]
    pub fn amount(mut self, cost_center: CostCenterId, amount: Decimal) -> Self {
        self.per_cost_center.insert(cost_center, amount);
        self
    }

    #[must_use]
    pub fn declared_total(mut self, total: Decimal) -> Self {
        self.declared_total = total;
        self
    }

    pub(crate) fn into_entity(self) -> NonSalaryItem {
        let mut item = NonSalaryItem::new(self.name);
        item.per_cost_center = self.per_cost_center;
        item.declared_total = self.declared_total;
        item
    }
}

/// Create a depreciable asset.
#[derive(Clone, Debug)]
pub struct AssetCmd {
    pub name: String,
    pub replacement_cost: Decimal,
    pub lifespan_years: Decimal,
    pub current_age: Decimal,
    pub cost_center: CostCenterId,
}

impl AssetCmd {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        replacement_cost: Decimal,
        lifespan_years: Decimal,
        cost_center: CostCenterId,
    ) -> Self {
        Self {
            name: name.into(),
            replacement_cost,
            lifespan_years,
            current_age: Decimal::ZERO,
            cost_center,
        }
    }

    #[must_use]
    pub fn current_age(mut self, years: Decimal) -> Self {
        self.current_age = years;
        self
    }

    pub(crate) fn into_entity(self) -> DepreciableAsset {
        let mut asset = DepreciableAsset::new(
            self.name,
            self.replacement_cost,
            self.lifespan_years,
            self.cost_center,
        );
        asset.current_age = self.current_age;
        asset
    }
}

/// Partial update of an asset; `None` fields are left unchanged.
#[derive(Clone, Debug, Default)]
pub struct AssetUpdate {
    pub name: Option<String>,
    pub replacement_cost: Option<Decimal>,
    pub lifespan_years: Option<Decimal>,
    pub current_age: Option<Decimal>,
    pub cost_center: Option<CostCenterId>,
}

impl AssetUpdate {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn replacement_cost(mut self, cost: Decimal) -> Self {
        self.replacement_cost = Some(cost);
        self
    }

    #[must_use]
    pub fn lifespan_years(mut self, years: Decimal) -> Self {
        self.lifespan_years = Some(years);
        self
    }

    #[must_use]
    pub fn current_age(mut self, years: Decimal) -> Self {
        self.current_age = Some(years);
        self
    }

    #[must_use]
    pub fn cost_center(mut self, cost_center: CostCenterId) -> Self {
        self.cost_center = Some(cost_center);
        self
    }

    pub(crate) fn apply(self, asset: &mut DepreciableAsset) {
        if let Some(name) = self.name {
            asset.name = name;
        }
        if let Some(cost) = self.replacement_cost {
            asset.replacement_cost = cost;
        }
        if let Some(years) = self.lifespan_years {
            asset.lifespan_years = years;
        }
        if let Some(years) = self.current_age {
            asset.current_age = years;
        }
        if let Some(cost_center) = self.cost_center {
            asset.cost_center = cost_center;
        }
    }
}

/// Create a room.
#[derive(Clone, Debug)]
pub struct RoomCmd {
    pub name: String,
    pub area_m2: Decimal,
    pub area_cost_type: Uuid,
    pub split: BTreeMap<CostCenterId, Decimal>,
}

impl RoomCmd {
    #[must_use]
    pub fn new(name: impl Into<String>, area_m2: Decimal, area_cost_type: Uuid) -> Self {
        Self {
            name: name.into(),
            area_m2,
            area_cost_type,
            split: BTreeMap::new(),
        }
    }

    /// Charge `percentage` of the room cost to `cost_center`.
    #[must_use]
    pub fn share(mut self, cost_center: CostCenterId, percentage: Decimal) -> Self {
        self.split.insert(cost_center, percentage);
        self
    }

    pub(crate) fn into_entity(self) -> Room {
        let mut room = Room::new(self.name, self.area_m2, self.area_cost_type);
        room.split = self.split;
        room
    }
}

/// Partial update of a room; `None` fields are left unchanged.
#[derive(Clone, Debug, Default)]
pub struct RoomUpdate {
    pub name: Option<String>,
    pub area_m2: Option<Decimal>,
    pub area_cost_type: Option<Uuid>,
}

impl RoomUpdate {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn area_m2(mut self, area: Decimal) -> Self {
        self.area_m2 = Some(area);
        self
    }

    #[must_use]
    pub fn area_cost_type(mut self, id: Uuid) -> Self {
        self.area_cost_type = Some(id);
        self
    }

    pub(crate) fn apply(self, room: &mut Room) {
        if let Some(name) = self.name {
            room.name = name;
        }
        if let Some(area) = self.area_m2 {
            room.area_m2 = area;
        }
        if let Some(id) = self.area_cost_type {
            room.area_cost_type = id;
        }
    }
}
