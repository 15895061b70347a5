//! # Result Composition
//!
//! Combines a per-piece breakdown, the pricing stage and the batch quantity
//! into the headline figures of the batch → per-piece flow.

use serde::{Deserialize, Serialize};

use super::pricing::{gross_margin_percent, price};
use super::CostBreakdown;
use crate::units::{BatchCost, PieceCost};

/// Headline results: price, profit per piece and profit for the batch.
///
/// ## JSON Example
///
/// ```json
/// {
///   "total_cost_per_piece": 191.0,
///   "desired_profit_percent": 25.0,
///   "recommended_selling_price": 238.75,
///   "profit_per_piece": 47.75,
///   "total_batch_profit": 47750.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostResults {
    pub total_cost_per_piece: PieceCost,
    pub desired_profit_percent: f64,
    pub recommended_selling_price: PieceCost,
    pub profit_per_piece: PieceCost,
    /// Profit per piece × quantity, rounded
    pub total_batch_profit: BatchCost,
}

impl CostResults {
    /// Gross margin (profit as a share of the selling price), in percent.
    pub fn gross_margin_percent(&self) -> f64 {
        gross_margin_percent(self.recommended_selling_price, self.total_cost_per_piece)
    }
}

/// Compose the final results.
///
/// `None` in, `None` out: a missing breakdown means the quantity was not
/// positive when the breakdown was attempted.
///
/// # Example
///
/// ```rust
/// use cost_core::calculations::{compose_results, to_per_piece};
/// use cost_core::inputs::BatchInputs;
/// use cost_core::units::{BatchCost, PieceCost};
///
/// let inputs = BatchInputs {
///     production_quantity: 200,
///     raw_material_total: 2000.0,
///     desired_profit_percent: 20.0,
///     ..BatchInputs::default()
/// };
/// let breakdown = to_per_piece(&inputs);
/// let results = compose_results(breakdown.as_ref(), 20.0, 200).unwrap();
/// assert_eq!(results.recommended_selling_price, PieceCost(12.0));
/// assert_eq!(results.total_batch_profit, BatchCost(400.0));
/// ```
pub fn compose_results(breakdown: Option<&CostBreakdown>, desired_profit_percent: f64, quantity: i64) -> Option<CostResults> {
    let breakdown = breakdown?;
    let pricing = price(breakdown.total_cost_per_piece, desired_profit_percent);

    Some(CostResults {
        total_cost_per_piece: breakdown.total_cost_per_piece,
        desired_profit_percent,
        recommended_selling_price: pricing.selling_price,
        profit_per_piece: pricing.profit_per_piece,
        total_batch_profit: pricing.profit_per_piece.for_batch(quantity),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::CostComponents;

    fn breakdown_costing(total: f64) -> CostBreakdown {
        CostBreakdown::new(CostComponents {
            raw_material: PieceCost(total),
            ..CostComponents::default()
        })
    }

    #[test]
    fn test_compose_results() {
        let breakdown = breakdown_costing(191.0);
        let results = compose_results(Some(&breakdown), 25.0, 1000).unwrap();
        assert_eq!(results.total_cost_per_piece, PieceCost(191.0));
        assert_eq!(results.recommended_selling_price, PieceCost(238.75));
        assert_eq!(results.profit_per_piece, PieceCost(47.75));
        assert_eq!(results.total_batch_profit, BatchCost(47750.0));
        assert_eq!(results.gross_margin_percent(), 20.0);
    }

    #[test]
    fn test_no_breakdown_no_results() {
        assert!(compose_results(None, 25.0, 1000).is_none());
    }

    #[test]
    fn test_batch_profit_uses_rounded_profit_per_piece() {
        let breakdown = breakdown_costing(0.33);
        // 0.33 × 1.1 = 0.363 → 0.36, profit 0.03 per piece
        let results = compose_results(Some(&breakdown), 10.0, 1000).unwrap();
        assert_eq!(results.profit_per_piece, PieceCost(0.03));
        assert_eq!(results.total_batch_profit, BatchCost(30.0));
    }

    #[test]
    fn test_serialization() {
        let results = compose_results(Some(&breakdown_costing(10.0)), 50.0, 4).unwrap();
        let json = serde_json::to_string(&results).unwrap();
        assert!(json.contains("\"recommended_selling_price\":15.0"));
        let roundtrip: CostResults = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, results);
    }
}
