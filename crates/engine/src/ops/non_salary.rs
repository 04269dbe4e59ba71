use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    CostCenterId, NonSalaryCmd, ResultEngine,
    input::{find_mut, remove_by_id},
    util::normalize_name,
};

use super::CostingModel;

impl CostingModel {
    pub fn add_non_salary_item(&mut self, cmd: NonSalaryCmd) -> ResultEngine<Uuid> {
        self.mutate("add_non_salary_item", |input| {
            let mut item = cmd.into_entity();
            item.name = normalize_name(&item.name, "Unnamed item");
            let id = item.id;
            input.non_salary_items.push(item);
            Ok(id)
        })
    }

    /// Rename an item as a field update: its amounts and its position in the
    /// list are untouched.
    pub fn rename_non_salary_item(&mut self, id: Uuid, name: &str) -> ResultEngine<()> {
        self.mutate("rename_non_salary_item", |input| {
            find_mut(&mut input.non_salary_items, id)?.name = normalize_name(name, "Unnamed item");
            Ok(())
        })
    }

    /// Set the amount an item charges to `cost_center`; `None` removes the
    /// entry.
    pub fn set_non_salary_amount(
        &mut self,
        id: Uuid,
        cost_center: CostCenterId,
        amount: Option<Decimal>,
    ) -> ResultEngine<()> {
        self.mutate("set_non_salary_amount", |input| {
            let item = find_mut(&mut input.non_salary_items, id)?;
            match amount {
                Some(amount) => {
                    item.per_cost_center.insert(cost_center, amount);
                }
                None => {
                    item.per_cost_center.remove(cost_center.as_str());
                }
            }
            Ok(())
        })
    }

    pub fn set_declared_total(&mut self, id: Uuid, total: Decimal) -> ResultEngine<()> {
        self.mutate("set_declared_total", |input| {
            find_mut(&mut input.non_salary_items, id)?.declared_total = total;
            Ok(())
        })
    }

    pub fn remove_non_salary_item(&mut self, id: Uuid) -> ResultEngine<()> {
        self.mutate("remove_non_salary_item", |input| {
            remove_by_id(&mut input.non_salary_items, id)?;
            Ok(())
        })
    }
}
