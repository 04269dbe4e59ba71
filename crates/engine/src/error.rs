//! The module contains the errors the engine can return.
//!
//! Every error is raised before any calculator runs, while the input model is
//! being validated, or while an edit is being applied. The errors are:
//!
//! - [`InvalidLifespan`] when an asset has `lifespan_years <= 0`.
//! - [`UnknownAreaCostType`] when a room points to a missing area-cost type.
//! - [`UnknownCostCenter`] when an entity references a cost center that is not
//!   in the registry.
//! - [`KeyNotFound`] when an edit targets an entity that does not exist.
//!
//!  [`InvalidLifespan`]: EngineError::InvalidLifespan
//!  [`UnknownAreaCostType`]: EngineError::UnknownAreaCostType
//!  [`UnknownCostCenter`]: EngineError::UnknownCostCenter
//!  [`KeyNotFound`]: EngineError::KeyNotFound
use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

use crate::CostCenterId;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("asset {asset}: lifespan_years must be > 0, got {lifespan_years}")]
    InvalidLifespan { asset: Uuid, lifespan_years: Decimal },
    #[error("room {room}: area_cost_type {area_cost_type} not found")]
    UnknownAreaCostType { room: Uuid, area_cost_type: Uuid },
    #[error("{entity}: field `{field}` references unknown cost center \"{cost_center}\"")]
    UnknownCostCenter {
        entity: String,
        field: &'static str,
        cost_center: CostCenterId,
    },
    #[error("cost center \"{cost_center}\" has more than one usage record")]
    DuplicateUsage { cost_center: CostCenterId },
    #[error("cost center \"{cost_center}\" is still referenced by {entity}")]
    CostCenterInUse {
        cost_center: CostCenterId,
        entity: String,
    },
    #[error("area cost type {area_cost_type} is still referenced by room {room}")]
    AreaCostTypeInUse { area_cost_type: Uuid, room: Uuid },
    #[error("Invalid cost center id: {0}")]
    InvalidCostCenter(String),
    #[error("Invalid financial year: {0}")]
    InvalidFinancialYear(String),
    #[error("{entity}: arithmetic overflow while computing `{field}`")]
    Overflow { entity: String, field: &'static str },
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("\"{0}\" already present!")]
    ExistingKey(String),
}

impl EngineError {
    pub(crate) fn overflow(entity: impl Into<String>, field: &'static str) -> Self {
        Self::Overflow {
            entity: entity.into(),
            field,
        }
    }
}
