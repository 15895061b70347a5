//! # Cost Inputs
//!
//! The two raw input shapes a front end collects, and the tagged
//! [`CostInputs`] wrapper that selects between them.
//!
//! - [`BatchInputs`] - batch totals plus quantity (batch → per-piece flow).
//!   Machine cost is entered as hours × hourly rate.
//! - [`PerPieceInputs`] - per-piece costs (per-piece → batch flow). Machine
//!   cost is a single per-piece figure.
//!
//! Every numeric field defaults to 0: there is no "missing" state, and the
//! default value doubles as the reset state of a form.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "mode": "Batch",
//!   "production_quantity": 1000,
//!   "raw_material_total": 120000.0,
//!   "labour_total": 30000.0,
//!   "machine_hours": 120.0,
//!   "machine_hour_rate": 600.0,
//!   "overheads_total": 20000.0,
//!   "packaging_total": 7000.0,
//!   "admin_total": 5000.0,
//!   "other_costs": 2000.0,
//!   "desired_profit_percent": 25.0
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::CostBreakdown;
use crate::components::CostComponents;
use crate::errors::{CalcError, CalcResult};
use crate::units::{BatchCost, PieceCost};

/// Batch-level inputs for the batch → per-piece flow.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchInputs {
    /// Number of pieces in the batch
    pub production_quantity: i64,
    /// Raw material cost for the whole batch
    pub raw_material_total: f64,
    /// Direct labour cost for the whole batch
    pub labour_total: f64,
    /// Machine hours used by the batch
    pub machine_hours: f64,
    /// Cost of one machine hour
    pub machine_hour_rate: f64,
    /// Factory overheads for the batch
    pub overheads_total: f64,
    /// Packaging cost for the batch
    pub packaging_total: f64,
    /// Administrative cost for the batch
    pub admin_total: f64,
    /// Any other batch cost
    pub other_costs: f64,
    /// Markup on cost, in percent
    pub desired_profit_percent: f64,
}

impl BatchInputs {
    const SHAPE: &'static str = "BatchInputs";

    /// The seven categories as batch totals; machine = hours × rate.
    pub fn cost_totals(&self) -> CostComponents<BatchCost> {
        CostComponents {
            raw_material: BatchCost(self.raw_material_total),
            labour: BatchCost(self.labour_total),
            machine: BatchCost(self.machine_hours * self.machine_hour_rate),
            overhead: BatchCost(self.overheads_total),
            packaging: BatchCost(self.packaging_total),
            admin: BatchCost(self.admin_total),
            other: BatchCost(self.other_costs),
        }
    }

    /// Read a field by its JSON key.
    pub fn field(&self, key: &str) -> CalcResult<f64> {
        let value = match key {
            "production_quantity" => self.production_quantity as f64,
            "raw_material_total" => self.raw_material_total,
            "labour_total" => self.labour_total,
            "machine_hours" => self.machine_hours,
            "machine_hour_rate" => self.machine_hour_rate,
            "overheads_total" => self.overheads_total,
            "packaging_total" => self.packaging_total,
            "admin_total" => self.admin_total,
            "other_costs" => self.other_costs,
            "desired_profit_percent" => self.desired_profit_percent,
            _ => return Err(CalcError::unknown_field(key, Self::SHAPE)),
        };
        Ok(value)
    }

    /// Set a field by its JSON key.
    ///
    /// Quantity is truncated toward zero.
    pub fn set_field(&mut self, key: &str, value: f64) -> CalcResult<()> {
        match key {
            "production_quantity" => self.production_quantity = to_quantity(value),
            "raw_material_total" => self.raw_material_total = value,
            "labour_total" => self.labour_total = value,
            "machine_hours" => self.machine_hours = value,
            "machine_hour_rate" => self.machine_hour_rate = value,
            "overheads_total" => self.overheads_total = value,
            "packaging_total" => self.packaging_total = value,
            "admin_total" => self.admin_total = value,
            "other_costs" => self.other_costs = value,
            "desired_profit_percent" => self.desired_profit_percent = value,
            _ => return Err(CalcError::unknown_field(key, Self::SHAPE)),
        }
        Ok(())
    }
}

/// Per-piece inputs for the per-piece → batch flow.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PerPieceInputs {
    /// Number of pieces in the batch (only needed for batch totals)
    pub production_quantity: i64,
    pub raw_material_per_piece: f64,
    pub labour_per_piece: f64,
    pub machine_per_piece: f64,
    pub overhead_per_piece: f64,
    pub packaging_per_piece: f64,
    pub admin_per_piece: f64,
    pub other_per_piece: f64,
    /// Markup on cost, in percent
    pub desired_profit_percent: f64,
}

impl PerPieceInputs {
    const SHAPE: &'static str = "PerPieceInputs";

    /// Build per-piece inputs from an already computed breakdown.
    ///
    /// ```rust
    /// use cost_core::calculations::to_per_piece;
    /// use cost_core::inputs::{BatchInputs, PerPieceInputs};
    ///
    /// let batch = BatchInputs {
    ///     production_quantity: 4,
    ///     raw_material_total: 10.0,
    ///     ..BatchInputs::default()
    /// };
    /// let breakdown = to_per_piece(&batch).unwrap();
    /// let per_piece = PerPieceInputs::from_breakdown(&breakdown, 4, 10.0);
    /// assert_eq!(per_piece.raw_material_per_piece, 2.5);
    /// ```
    pub fn from_breakdown(breakdown: &CostBreakdown, production_quantity: i64, desired_profit_percent: f64) -> Self {
        let c = &breakdown.components;
        PerPieceInputs {
            production_quantity,
            raw_material_per_piece: c.raw_material.0,
            labour_per_piece: c.labour.0,
            machine_per_piece: c.machine.0,
            overhead_per_piece: c.overhead.0,
            packaging_per_piece: c.packaging.0,
            admin_per_piece: c.admin.0,
            other_per_piece: c.other.0,
            desired_profit_percent,
        }
    }

    /// The seven categories as per-piece amounts, unchanged.
    pub fn costs(&self) -> CostComponents<PieceCost> {
        CostComponents {
            raw_material: PieceCost(self.raw_material_per_piece),
            labour: PieceCost(self.labour_per_piece),
            machine: PieceCost(self.machine_per_piece),
            overhead: PieceCost(self.overhead_per_piece),
            packaging: PieceCost(self.packaging_per_piece),
            admin: PieceCost(self.admin_per_piece),
            other: PieceCost(self.other_per_piece),
        }
    }

    /// Read a field by its JSON key.
    pub fn field(&self, key: &str) -> CalcResult<f64> {
        let value = match key {
            "production_quantity" => self.production_quantity as f64,
            "raw_material_per_piece" => self.raw_material_per_piece,
            "labour_per_piece" => self.labour_per_piece,
            "machine_per_piece" => self.machine_per_piece,
            "overhead_per_piece" => self.overhead_per_piece,
            "packaging_per_piece" => self.packaging_per_piece,
            "admin_per_piece" => self.admin_per_piece,
            "other_per_piece" => self.other_per_piece,
            "desired_profit_percent" => self.desired_profit_percent,
            _ => return Err(CalcError::unknown_field(key, Self::SHAPE)),
        };
        Ok(value)
    }

    /// Set a field by its JSON key.
    ///
    /// Quantity is truncated toward zero.
    pub fn set_field(&mut self, key: &str, value: f64) -> CalcResult<()> {
        match key {
            "production_quantity" => self.production_quantity = to_quantity(value),
            "raw_material_per_piece" => self.raw_material_per_piece = value,
            "labour_per_piece" => self.labour_per_piece = value,
            "machine_per_piece" => self.machine_per_piece = value,
            "overhead_per_piece" => self.overhead_per_piece = value,
            "packaging_per_piece" => self.packaging_per_piece = value,
            "admin_per_piece" => self.admin_per_piece = value,
            "other_per_piece" => self.other_per_piece = value,
            "desired_profit_percent" => self.desired_profit_percent = value,
            _ => return Err(CalcError::unknown_field(key, Self::SHAPE)),
        }
        Ok(())
    }
}

/// Canonical input shape, tagged by mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum CostInputs {
    /// Batch totals → per-piece breakdown
    Batch(BatchInputs),
    /// Per-piece costs → batch totals
    PerPiece(PerPieceInputs),
}

impl CostInputs {
    /// Number of pieces in the batch
    pub fn production_quantity(&self) -> i64 {
        match self {
            CostInputs::Batch(b) => b.production_quantity,
            CostInputs::PerPiece(p) => p.production_quantity,
        }
    }

    /// Markup on cost, in percent
    pub fn desired_profit_percent(&self) -> f64 {
        match self {
            CostInputs::Batch(b) => b.desired_profit_percent,
            CostInputs::PerPiece(p) => p.desired_profit_percent,
        }
    }

    /// Mode name as used in the `mode` tag
    pub fn mode(&self) -> &'static str {
        match self {
            CostInputs::Batch(_) => "Batch",
            CostInputs::PerPiece(_) => "PerPiece",
        }
    }

    /// Set a field on whichever shape is active.
    pub fn set_field(&mut self, key: &str, value: f64) -> CalcResult<()> {
        match self {
            CostInputs::Batch(b) => b.set_field(key, value),
            CostInputs::PerPiece(p) => p.set_field(key, value),
        }
    }
}

impl Default for CostInputs {
    fn default() -> Self {
        CostInputs::Batch(BatchInputs::default())
    }
}

/// Parse a user-typed amount.
///
/// Grouping commas and surrounding whitespace are ignored; anything that
/// does not parse to a finite number is 0.
///
/// ```rust
/// use cost_core::inputs::parse_amount;
///
/// assert_eq!(parse_amount("1,20,000"), 120000.0);
/// assert_eq!(parse_amount(" 7.5 "), 7.5);
/// assert_eq!(parse_amount("-5"), -5.0);
/// assert_eq!(parse_amount("abc"), 0.0);
/// assert_eq!(parse_amount(""), 0.0);
/// ```
pub fn parse_amount(raw: &str) -> f64 {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Parse a user-typed piece count, truncating toward zero.
///
/// ```rust
/// use cost_core::inputs::parse_quantity;
///
/// assert_eq!(parse_quantity("1,000"), 1000);
/// assert_eq!(parse_quantity("12.9"), 12);
/// assert_eq!(parse_quantity("lots"), 0);
/// ```
pub fn parse_quantity(raw: &str) -> i64 {
    to_quantity(parse_amount(raw))
}

fn to_quantity(value: f64) -> i64 {
    // `as` saturates and maps NaN to 0
    value.trunc() as i64
}
