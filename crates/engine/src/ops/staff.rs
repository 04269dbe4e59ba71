use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    CostCenterId, ResultEngine, StaffCmd,
    input::{find_mut, remove_by_id},
    util::normalize_name,
};

use super::CostingModel;

impl CostingModel {
    /// Add a staff member at the end of the list.
    pub fn add_staff(&mut self, cmd: StaffCmd) -> ResultEngine<Uuid> {
        self.mutate("add_staff", |input| {
            let mut member = cmd.into_entity();
            member.name = normalize_name(&member.name, "Unnamed");
            let id = member.id;
            input.staff.push(member);
            Ok(id)
        })
    }

    /// Rename in place; the member keeps its id and position.
    pub fn rename_staff(&mut self, id: Uuid, name: &str) -> ResultEngine<()> {
        self.mutate("rename_staff", |input| {
            find_mut(&mut input.staff, id)?.name = normalize_name(name, "Unnamed");
            Ok(())
        })
    }

    pub fn set_salary(&mut self, id: Uuid, annual_salary: Decimal) -> ResultEngine<()> {
        self.mutate("set_salary", |input| {
            find_mut(&mut input.staff, id)?.annual_salary = annual_salary;
            Ok(())
        })
    }

    /// Set the percentage of a member's salary charged to `cost_center`.
    pub fn set_staff_allocation(
        &mut self,
        id: Uuid,
        cost_center: CostCenterId,
        percentage: Decimal,
    ) -> ResultEngine<()> {
        self.mutate("set_staff_allocation", |input| {
            find_mut(&mut input.staff, id)?
                .allocations
                .insert(cost_center, percentage);
            Ok(())
        })
    }

    /// Stop charging a member's salary to `cost_center`. Clearing an absent
    /// allocation is a no-op.
    pub fn clear_staff_allocation(
        &mut self,
        id: Uuid,
        cost_center: &CostCenterId,
    ) -> ResultEngine<()> {
        self.mutate("clear_staff_allocation", |input| {
            find_mut(&mut input.staff, id)?.allocations.remove(cost_center);
            Ok(())
        })
    }

    pub fn remove_staff(&mut self, id: Uuid) -> ResultEngine<()> {
        self.mutate("remove_staff", |input| {
            remove_by_id(&mut input.staff, id)?;
            Ok(())
        })
    }
}
