//! Edits to the cost-center registry and the area-cost types.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    AreaCostType, CostCenterId, EngineError, ResultEngine,
    input::{find_mut, remove_by_id},
};

use super::CostingModel;

impl CostingModel {
    /// Append a cost center; it shows up in the output with zero costs.
    pub fn add_cost_center(&mut self, cost_center: CostCenterId) -> ResultEngine<()> {
        self.mutate("add_cost_center", |input| input.cost_centers.add(cost_center))
    }

    /// Remove a cost center nothing references any more.
    pub fn remove_cost_center(&mut self, cost_center: &CostCenterId) -> ResultEngine<()> {
        self.mutate("remove_cost_center", |input| {
            let removed = input.cost_centers.remove(cost_center)?;
            if let Some(entity) = input.cost_center_reference(&removed) {
                return Err(EngineError::CostCenterInUse {
                    cost_center: removed,
                    entity,
                });
            }
            Ok(())
        })
    }

    pub fn add_area_cost_type(
        &mut self,
        description: &str,
        cost_per_area: Decimal,
    ) -> ResultEngine<Uuid> {
        self.mutate("add_area_cost_type", |input| {
            let kind = AreaCostType::new(description.trim(), cost_per_area);
            let id = kind.id;
            input.area_cost_types.push(kind);
            Ok(id)
        })
    }

    /// Change the description and cost per m² of an area-cost type. Every
    /// room of that type is re-costed.
    pub fn update_area_cost_type(
        &mut self,
        id: Uuid,
        description: Option<&str>,
        cost_per_area: Option<Decimal>,
    ) -> ResultEngine<()> {
        self.mutate("update_area_cost_type", |input| {
            let kind = find_mut(&mut input.area_cost_types, id)?;
            if let Some(description) = description {
                kind.description = description.trim().to_string();
            }
            if let Some(cost) = cost_per_area {
                kind.cost_per_area = cost;
            }
            Ok(())
        })
    }

    /// Remove an area-cost type no room uses.
    pub fn remove_area_cost_type(&mut self, id: Uuid) -> ResultEngine<()> {
        self.mutate("remove_area_cost_type", |input| {
            if let Some(room) = input.rooms.iter().find(|room| room.area_cost_type == id) {
                return Err(EngineError::AreaCostTypeInUse {
                    area_cost_type: id,
                    room: room.id,
                });
            }
            remove_by_id(&mut input.area_cost_types, id)?;
            Ok(())
        })
    }
}
