use crate::{CostCenterId, EngineError, ResultEngine, UsageRecord};

use super::CostingModel;

impl CostingModel {
    /// Insert or replace the usage record of `record.cost_center`.
    pub fn set_usage(&mut self, record: UsageRecord) -> ResultEngine<()> {
        self.mutate("set_usage", |input| {
            match input
                .usage
                .iter()
                .position(|existing| existing.cost_center == record.cost_center)
            {
                Some(index) => input.usage[index] = record,
                None => input.usage.push(record),
            }
            Ok(())
        })
    }

    /// Drop the usage record of `cost_center`; its rates fall back to zero.
    pub fn remove_usage(&mut self, cost_center: &CostCenterId) -> ResultEngine<UsageRecord> {
        self.mutate("remove_usage", |input| {
            match input
                .usage
                .iter()
                .position(|record| record.cost_center == *cost_center)
            {
                Some(index) => Ok(input.usage.remove(index)),
                None => Err(EngineError::KeyNotFound(format!("usage {cost_center}"))),
            }
        })
    }
}
