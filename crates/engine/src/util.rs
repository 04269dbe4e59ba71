//! Internal helpers for model validation and arithmetic.
//!
//! These utilities are **not** part of the public API. They centralize
//! checked decimal arithmetic and reference checks so every calculator and
//! every edit enforces the same invariants.

use rust_decimal::Decimal;

use crate::{CostCenterId, CostCenterRegistry, CostMap, EngineError, ResultEngine};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// `amount * percentage / 100`, reporting overflow against `entity`.
pub(crate) fn percent_of(
    amount: Decimal,
    percentage: Decimal,
    entity: &str,
    field: &'static str,
) -> ResultEngine<Decimal> {
    amount
        .checked_mul(percentage)
        .and_then(|v| v.checked_div(HUNDRED))
        .ok_or_else(|| EngineError::overflow(entity, field))
}

/// Add `amount` to the entry for `cost_center`, creating it when missing.
pub(crate) fn accumulate(
    costs: &mut CostMap,
    cost_center: &CostCenterId,
    amount: Decimal,
    entity: &str,
    field: &'static str,
) -> ResultEngine<()> {
    let slot = costs.entry(cost_center.clone()).or_insert(Decimal::ZERO);
    *slot = slot
        .checked_add(amount)
        .ok_or_else(|| EngineError::overflow(entity, field))?;
    Ok(())
}

/// Sum an iterator of amounts with overflow checking.
pub(crate) fn checked_sum<I>(values: I, entity: &str, field: &'static str) -> ResultEngine<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    values.into_iter().try_fold(Decimal::ZERO, |acc, v| {
        acc.checked_add(v)
            .ok_or_else(|| EngineError::overflow(entity, field))
    })
}

/// Ensure `cost_center` is listed in the registry.
pub(crate) fn ensure_known_cost_center(
    registry: &CostCenterRegistry,
    cost_center: &CostCenterId,
    entity: impl FnOnce() -> String,
    field: &'static str,
) -> ResultEngine<()> {
    if registry.contains(cost_center) {
        return Ok(());
    }
    Err(EngineError::UnknownCostCenter {
        entity: entity(),
        field,
        cost_center: cost_center.clone(),
    })
}

/// Trim a display name; empty names fall back to `fallback`.
pub(crate) fn normalize_name(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return fallback.to_string();
    }
    trimmed.to_string()
}
