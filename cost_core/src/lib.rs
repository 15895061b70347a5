//! # cost_core - Manufacturing Cost Calculation Engine
//!
//! `cost_core` converts between batch-level production costs and per-piece
//! costs, derives a selling price from a desired markup, and reports
//! input-validation warnings. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **No I/O**: Front ends read and render; the engine only computes
//! - **"None" is not an error**: A stage that needs a positive quantity
//!   returns `None` until it has one
//! - **Advisory validation**: Warnings never block a calculation
//!
//! ## Quick Start
//!
//! ```rust
//! use cost_core::{calculate, BatchInputs, CostInputs};
//! use cost_core::units::{BatchCost, PieceCost};
//!
//! let inputs = CostInputs::Batch(BatchInputs {
//!     production_quantity: 1000,
//!     raw_material_total: 120000.0,
//!     labour_total: 30000.0,
//!     machine_hours: 120.0,
//!     machine_hour_rate: 600.0,
//!     overheads_total: 20000.0,
//!     packaging_total: 7000.0,
//!     admin_total: 5000.0,
//!     other_costs: 2000.0,
//!     desired_profit_percent: 25.0,
//! });
//!
//! let report = calculate(&inputs);
//! let results = report.results.unwrap();
//! assert_eq!(results.total_cost_per_piece, PieceCost(256.0));
//! assert_eq!(results.recommended_selling_price, PieceCost(320.0));
//! assert_eq!(results.total_batch_profit, BatchCost(64000.0));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Aggregation, pricing and composition stages
//! - [`components`] - The seven cost categories and `CostComponents<T>`
//! - [`inputs`] - Batch and per-piece input shapes
//! - [`validation`] - Negative-value warnings
//! - [`fields`] - Form field descriptors
//! - [`format`] - Currency, count and percent rendering
//! - [`settings`] - Display configuration
//! - [`units`] - Typed money amounts and rounding
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod components;
pub mod errors;
pub mod fields;
pub mod format;
pub mod inputs;
pub mod settings;
pub mod units;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, BatchTotals, CostBreakdown, CostReport, CostResults, PricingResult};
pub use components::{CostCategory, CostComponents};
pub use errors::{CalcError, CalcResult};
pub use inputs::{BatchInputs, CostInputs, PerPieceInputs};
pub use settings::DisplayConfig;
pub use validation::{Severity, Warning};
