//! # Cost Calculations
//!
//! The calculation stages, applied in dependency order:
//!
//! 1. [`aggregation`] - batch totals ⇄ per-piece breakdown
//! 2. [`pricing`] - selling price and profit from cost and markup
//! 3. [`results`] / [`project_to_batch`] - scale per-piece figures to the batch
//!
//! Validation runs alongside, see [`crate::validation`].
//!
//! Every stage is a pure function of its inputs. A stage that needs a positive
//! quantity returns `None` when it does not have one; that means "not yet
//! computable", never an error.
//!
//! ## Example
//!
//! ```rust
//! use cost_core::calculations::calculate;
//! use cost_core::inputs::{CostInputs, PerPieceInputs};
//! use cost_core::units::{BatchCost, PieceCost};
//!
//! let inputs = CostInputs::PerPiece(PerPieceInputs {
//!     production_quantity: 500,
//!     raw_material_per_piece: 40.0,
//!     labour_per_piece: 10.0,
//!     desired_profit_percent: 20.0,
//!     ..PerPieceInputs::default()
//! });
//!
//! let report = calculate(&inputs);
//! assert_eq!(report.pricing.unwrap().selling_price, PieceCost(60.0));
//! assert_eq!(report.batch_totals.unwrap().total_batch_profit, BatchCost(5000.0));
//! assert!(report.warnings.is_empty());
//! ```

pub mod aggregation;
pub mod pricing;
pub mod results;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::components::{CostCategory, CostComponents};
use crate::inputs::CostInputs;
use crate::units::{BatchCost, PieceCost};
use crate::validation::{validate, Warning};

// Re-export the stage functions
pub use aggregation::{from_per_piece, project_to_batch, to_per_piece};
pub use pricing::{price, PricingResult};
pub use results::{compose_results, CostResults};

/// Per-piece cost by category, plus the total.
///
/// `total_cost_per_piece` is always the rounded sum of the categories.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    #[serde(flatten)]
    pub components: CostComponents<PieceCost>,
    pub total_cost_per_piece: PieceCost,
}

impl CostBreakdown {
    /// Wrap per-piece components and derive the total.
    pub fn new(components: CostComponents<PieceCost>) -> Self {
        CostBreakdown {
            total_cost_per_piece: components.total(),
            components,
        }
    }

    /// Share of the total taken by one category, in percent.
    ///
    /// 0 when the total is not positive. Unrounded; meant for display.
    pub fn share_percent(&self, category: CostCategory) -> f64 {
        let total = self.total_cost_per_piece.0;
        if total <= 0.0 {
            return 0.0;
        }
        self.components.get(category).0 / total * 100.0
    }
}

/// Batch totals by category, with cost, revenue and profit for the batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatchTotals {
    #[serde(flatten)]
    pub components: CostComponents<BatchCost>,
    /// Rounded sum of the category totals
    pub total_batch_cost: BatchCost,
    /// Selling price × quantity
    pub total_revenue: BatchCost,
    /// Revenue − cost
    pub total_batch_profit: BatchCost,
}

/// Everything the engine produces for one input snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostReport {
    /// Mode of the inputs the report was computed from
    pub mode: String,
    pub breakdown: Option<CostBreakdown>,
    pub pricing: Option<PricingResult>,
    pub results: Option<CostResults>,
    pub batch_totals: Option<BatchTotals>,
    pub warnings: Vec<Warning>,
}

impl CostReport {
    /// True when validation reported nothing.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Run every stage that applies to the active input mode.
///
/// - Batch: breakdown and results need a positive quantity; batch totals
///   are not produced (the inputs already are the batch totals).
/// - Per-piece: breakdown and pricing always; results and batch totals need
///   a positive quantity.
///
/// Validation always runs and never blocks the calculation.
pub fn calculate(inputs: &CostInputs) -> CostReport {
    let warnings = validate(inputs);
    let quantity = inputs.production_quantity();
    let profit_percent = inputs.desired_profit_percent();

    let report = match inputs {
        CostInputs::Batch(batch) => {
            let breakdown = to_per_piece(batch);
            let pricing = breakdown.map(|b| price(b.total_cost_per_piece, profit_percent));
            let results = compose_results(breakdown.as_ref(), profit_percent, quantity);
            CostReport {
                mode: inputs.mode().to_string(),
                breakdown,
                pricing,
                results,
                batch_totals: None,
                warnings,
            }
        }
        CostInputs::PerPiece(per_piece) => {
            let breakdown = from_per_piece(per_piece);
            let pricing = price(breakdown.total_cost_per_piece, profit_percent);
            let batch_totals = project_to_batch(per_piece, pricing.selling_price);
            let results = compose_results(Some(&breakdown).filter(|_| quantity > 0), profit_percent, quantity);
            CostReport {
                mode: inputs.mode().to_string(),
                breakdown: Some(breakdown),
                pricing: Some(pricing),
                results,
                batch_totals,
                warnings,
            }
        }
    };

    debug!(
        mode = %report.mode,
        quantity,
        has_breakdown = report.breakdown.is_some(),
        has_batch_totals = report.batch_totals.is_some(),
        warnings = report.warnings.len(),
        "cost report calculated"
    );
    report
}
