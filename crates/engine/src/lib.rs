//! Cost allocation and rate calculation engine.
//!
//! Given one financial year's raw inputs (staff salaries, non-salary spend,
//! depreciable assets, rooms and usage) the engine derives, per cost center,
//! a full cost breakdown and five alternative unit charge-out rates.
//!
//! The core is the pure function [`calculate`]; [`CostingModel`] wraps it
//! with edit operations that recompute everything after each change.
//!
//! ```rust
//! use engine::{CostCenterId, CostCenterRegistry, CostingModel, FinancialYear, ModelInput, StaffCmd, UsageRecord};
//! use rust_decimal::Decimal;
//!
//! let a = CostCenterId::new("A").unwrap();
//! let registry = CostCenterRegistry::new([a.clone()]).unwrap();
//! let input = ModelInput::new(FinancialYear::new(2025).unwrap(), registry);
//! let mut model = CostingModel::new(input).unwrap();
//!
//! model
//!     .add_staff(StaffCmd::new("Technician", Decimal::from(30_000)).allocate(a.clone(), Decimal::from(100)))
//!     .unwrap();
//! model
//!     .set_usage(UsageRecord::new(a, Decimal::from(200), Decimal::from(150), "days"))
//!     .unwrap();
//!
//! assert_eq!(model.output().rates[0].including_all, Decimal::from(200));
//! ```

use std::collections::BTreeMap;

use rust_decimal::Decimal;

pub use area_costs::AreaCostType;
pub use calculation::{ModelOutput, allocate, calculate};
pub use commands::{AssetCmd, AssetUpdate, NonSalaryCmd, RoomCmd, RoomUpdate, StaffCmd};
pub use cost_centers::{CostCenterId, CostCenterRegistry};
pub use depreciation::{DepreciableAsset, depreciation_costs};
pub use error::EngineError;
pub use estates::{Room, estates_costs};
pub use input::ModelInput;
pub use non_salary::{NonSalaryItem, non_salary_costs};
pub use ops::CostingModel;
pub use rates::{RateSet, build_rates};
pub use reconcile::{Notice, reconcile};
pub use staff::{StaffMember, staff_costs};
pub use summary::{AllocatedCosts, CostSummary, build_summaries};
pub use usage::{Usage, UsageRecord};
pub use year::FinancialYear;

mod area_costs;
mod calculation;
mod commands;
mod cost_centers;
mod depreciation;
mod error;
mod estates;
mod input;
mod non_salary;
mod ops;
mod rates;
mod reconcile;
mod staff;
mod summary;
mod usage;
mod util;
mod year;

pub type ResultEngine<T> = Result<T, EngineError>;

/// Per-cost-center amounts produced by each allocation calculator.
pub type CostMap = BTreeMap<CostCenterId, Decimal>;
