//! Flat, serializable shapes handed to whatever presents a costing model
//! (report files, spreadsheets, a future API).
//!
//! Monetary values are rounded for display; the exact figures stay in the
//! engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub mod report {
    use super::*;

    /// Costing of one financial year.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct CostingReport {
        /// Year-range key, e.g. `2025-2026`.
        pub financial_year: String,
        /// One row per cost center, in registry order.
        pub cost_centers: Vec<CostCenterRow>,
        /// Reconciliation findings; empty when notices are disabled.
        #[serde(default)]
        pub notices: Vec<NoticeRow>,
    }

    /// Costs, usage and rates of one cost center.
    ///
    /// The shape is flat so that it maps one-to-one onto a CSV row.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct CostCenterRow {
        pub cost_center: String,
        pub unit: String,
        pub capacity: Decimal,
        pub actual: Decimal,
        /// `actual / capacity`; absent when no capacity is recorded.
        pub utilisation: Option<Decimal>,
        pub salary_cost: Decimal,
        pub non_salary_cost: Decimal,
        pub estates_cost: Decimal,
        pub depreciation_cost: Decimal,
        pub total_cost: Decimal,
        pub rate_excluding_salaries: Decimal,
        pub rate_direct_costs_only: Decimal,
        pub rate_excluding_estates: Decimal,
        pub rate_excluding_depreciation: Decimal,
        pub rate_including_all: Decimal,
        /// `rate_including_all * actual`, before rounding.
        pub implied_income: Decimal,
    }

    /// A reconciliation finding, reduced to its kind and a message.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct NoticeRow {
        pub kind: String,
        pub message: String,
    }
}
