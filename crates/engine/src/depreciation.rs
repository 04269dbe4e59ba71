//! Depreciable assets and the Depreciation Calculator.
//!
//! Depreciation is straight-line: an asset costs
//! `replacement_cost / lifespan_years` every year, charged in full to the one
//! cost center it belongs to.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{CostCenterId, CostMap, EngineError, ResultEngine, util::accumulate};

/// A capital asset (instrument, equipment) charged to a single cost center.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DepreciableAsset {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub replacement_cost: Decimal,
    pub lifespan_years: Decimal,
    /// Informational only, never used by the depreciation formula.
    #[serde(default)]
    pub current_age: Decimal,
    pub cost_center: CostCenterId,
}

impl DepreciableAsset {
    pub fn new(
        name: impl Into<String>,
        replacement_cost: Decimal,
        lifespan_years: Decimal,
        cost_center: CostCenterId,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            replacement_cost,
            lifespan_years,
            current_age: Decimal::ZERO,
            cost_center,
        }
    }

    /// Straight-line yearly depreciation.
    ///
    /// Fails on a non-positive lifespan instead of producing a meaningless
    /// figure.
    pub fn annual_depreciation(&self) -> ResultEngine<Decimal> {
        if self.lifespan_years <= Decimal::ZERO {
            return Err(EngineError::InvalidLifespan {
                asset: self.id,
                lifespan_years: self.lifespan_years,
            });
        }
        self.replacement_cost
            .checked_div(self.lifespan_years)
            .ok_or_else(|| EngineError::overflow(self.label(), "replacement_cost"))
    }

    /// Years left before the asset reaches the end of its lifespan (never
    /// negative).
    pub fn remaining_life(&self) -> ResultEngine<Decimal> {
        self.lifespan_years
            .checked_sub(self.current_age)
            .map(|left| left.max(Decimal::ZERO))
            .ok_or_else(|| EngineError::overflow(self.label(), "current_age"))
    }

    pub(crate) fn label(&self) -> String {
        format!("asset {}", self.id)
    }
}

/// Cost center → sum of the annual depreciation of the assets it owns.
pub fn depreciation_costs(assets: &[DepreciableAsset]) -> ResultEngine<CostMap> {
    let mut costs = CostMap::new();
    for asset in assets {
        let yearly = asset.annual_depreciation()?;
        accumulate(
            &mut costs,
            &asset.cost_center,
            yearly,
            &asset.label(),
            "replacement_cost",
        )?;
    }
    Ok(costs)
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn cc(id: &str) -> CostCenterId {
        CostCenterId::new(id).unwrap()
    }

    #[test]
    fn replacement_cost_is_spread_over_lifespan() {
        let asset = DepreciableAsset::new("Confocal", dec!(100000), dec!(10), cc("A"));
        let costs = depreciation_costs(&[asset]).unwrap();
        assert_eq!(costs.get("A"), Some(&dec!(10000)));
        assert_eq!(costs.len(), 1);
    }

    #[test]
    fn assets_on_the_same_center_add_up() {
        let first = DepreciableAsset::new("Sequencer", dec!(50000), dec!(5), cc("A"));
        let second = DepreciableAsset::new("Robot", dec!(12000), dec!(8), cc("A"));
        let costs = depreciation_costs(&[first, second]).unwrap();
        assert_eq!(costs.get("A"), Some(&dec!(11500)));
    }

    #[test]
    fn zero_lifespan_is_rejected() {
        let asset = DepreciableAsset::new("Broken", dec!(1000), dec!(0), cc("A"));
        let err = depreciation_costs(&[asset.clone()]).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidLifespan {
                asset: asset.id,
                lifespan_years: dec!(0),
            }
        );
    }

    #[test]
    fn current_age_does_not_change_depreciation() {
        let mut asset = DepreciableAsset::new("Old", dec!(9000), dec!(3), cc("A"));
        asset.current_age = dec!(7);
        assert_eq!(asset.annual_depreciation().unwrap(), dec!(3000));
        assert_eq!(asset.remaining_life().unwrap(), dec!(0));

        asset.current_age = dec!(1);
        assert_eq!(asset.remaining_life().unwrap(), dec!(2));
    }
}
