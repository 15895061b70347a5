//! # Aggregation Stage
//!
//! Converts cost components between batch totals and per-piece figures along
//! the quantity dimension.
//!
//! Rounding is applied to every category first; totals are the rounded sum of
//! the already-rounded categories. A displayed total therefore always equals
//! the sum of the displayed parts.

use tracing::debug;

use super::{BatchTotals, CostBreakdown};
use crate::components::{scale_down, scale_up};
use crate::inputs::{BatchInputs, PerPieceInputs};
use crate::units::{Amount, PieceCost};

/// Per-piece breakdown from batch totals.
///
/// Returns `None` when the quantity is zero or negative: nothing can be
/// spread over fewer than one piece.
///
/// # Example
///
/// ```rust
/// use cost_core::calculations::to_per_piece;
/// use cost_core::inputs::BatchInputs;
/// use cost_core::units::PieceCost;
///
/// let inputs = BatchInputs {
///     production_quantity: 1000,
///     raw_material_total: 120000.0,
///     machine_hours: 120.0,
///     machine_hour_rate: 600.0,
///     ..BatchInputs::default()
/// };
///
/// let breakdown = to_per_piece(&inputs).unwrap();
/// assert_eq!(breakdown.components.machine, PieceCost(72.0));
/// assert_eq!(breakdown.total_cost_per_piece, PieceCost(192.0));
/// ```
pub fn to_per_piece(inputs: &BatchInputs) -> Option<CostBreakdown> {
    let quantity = inputs.production_quantity;
    let Some(components) = scale_down(&inputs.cost_totals(), quantity) else {
        debug!(quantity, "per-piece breakdown skipped: quantity must be positive");
        return None;
    };

    Some(CostBreakdown::new(components))
}

/// Per-piece breakdown straight from per-piece inputs.
///
/// Categories pass through unchanged; only the total is derived. Quantity is
/// not needed, so this always succeeds.
pub fn from_per_piece(inputs: &PerPieceInputs) -> CostBreakdown {
    CostBreakdown::new(inputs.costs())
}

/// Batch totals from per-piece inputs and the per-piece selling price.
///
/// Returns `None` when the quantity is zero or negative.
///
/// # Example
///
/// ```rust
/// use cost_core::calculations::project_to_batch;
/// use cost_core::inputs::PerPieceInputs;
/// use cost_core::units::{BatchCost, PieceCost};
///
/// let inputs = PerPieceInputs {
///     production_quantity: 100,
///     raw_material_per_piece: 8.0,
///     labour_per_piece: 2.0,
///     ..PerPieceInputs::default()
/// };
///
/// let totals = project_to_batch(&inputs, PieceCost(12.5)).unwrap();
/// assert_eq!(totals.total_batch_cost, BatchCost(1000.0));
/// assert_eq!(totals.total_revenue, BatchCost(1250.0));
/// assert_eq!(totals.total_batch_profit, BatchCost(250.0));
/// ```
pub fn project_to_batch(inputs: &PerPieceInputs, selling_price: PieceCost) -> Option<BatchTotals> {
    let quantity = inputs.production_quantity;
    let Some(components) = scale_up(&inputs.costs(), quantity) else {
        debug!(quantity, "batch totals skipped: quantity must be positive");
        return None;
    };

    let total_batch_cost = components.total();
    let total_revenue = selling_price.for_batch(quantity);
    let total_batch_profit = (total_revenue - total_batch_cost).rounded();

    Some(BatchTotals {
        components,
        total_batch_cost,
        total_revenue,
        total_batch_profit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::CostCategory;
    use crate::units::BatchCost;

    fn sample_batch() -> BatchInputs {
        BatchInputs {
            production_quantity: 1000,
            raw_material_total: 120000.0,
            labour_total: 30000.0,
            machine_hours: 120.0,
            machine_hour_rate: 600.0,
            overheads_total: 20000.0,
            packaging_total: 7000.0,
            admin_total: 5000.0,
            other_costs: 2000.0,
            desired_profit_percent: 25.0,
        }
    }

    #[test]
    fn test_to_per_piece() {
        let breakdown = to_per_piece(&sample_batch()).unwrap();
        let c = &breakdown.components;
        assert_eq!(c.raw_material, PieceCost(120.0));
        assert_eq!(c.labour, PieceCost(30.0));
        assert_eq!(c.machine, PieceCost(72.0));
        assert_eq!(c.overhead, PieceCost(20.0));
        assert_eq!(c.packaging, PieceCost(7.0));
        assert_eq!(c.admin, PieceCost(5.0));
        assert_eq!(c.other, PieceCost(2.0));
        // 120 + 30 + 72 + 20 + 7 + 5 + 2
        assert_eq!(breakdown.total_cost_per_piece, PieceCost(256.0));
    }

    #[test]
    fn test_to_per_piece_needs_quantity() {
        let mut inputs = sample_batch();
        inputs.production_quantity = 0;
        assert!(to_per_piece(&inputs).is_none());
        inputs.production_quantity = -10;
        assert!(to_per_piece(&inputs).is_none());
    }

    #[test]
    fn test_quantity_one_matches_totals() {
        let mut inputs = sample_batch();
        inputs.production_quantity = 1;
        let breakdown = to_per_piece(&inputs).unwrap();
        let totals = inputs.cost_totals();
        for category in CostCategory::ALL {
            assert_eq!(breakdown.components.get(category).0, totals.get(category).0);
        }
    }

    #[test]
    fn test_each_category_rounded_before_total() {
        let inputs = BatchInputs {
            production_quantity: 3,
            raw_material_total: 10.0,
            labour_total: 10.0,
            ..BatchInputs::default()
        };
        let breakdown = to_per_piece(&inputs).unwrap();
        assert_eq!(breakdown.components.raw_material, PieceCost(3.33));
        // 3.33 + 3.33, not round(6.666...)
        assert_eq!(breakdown.total_cost_per_piece, PieceCost(6.66));
    }

    #[test]
    fn test_from_per_piece_passes_categories_through() {
        let inputs = PerPieceInputs {
            raw_material_per_piece: 1.234,
            labour_per_piece: 2.0,
            ..PerPieceInputs::default()
        };
        let breakdown = from_per_piece(&inputs);
        assert_eq!(breakdown.components.raw_material, PieceCost(1.234));
        assert_eq!(breakdown.total_cost_per_piece, PieceCost(3.23));
    }

    #[test]
    fn test_from_per_piece_negative_cost() {
        let inputs = PerPieceInputs {
            production_quantity: 10,
            raw_material_per_piece: -5.0,
            ..PerPieceInputs::default()
        };
        assert_eq!(from_per_piece(&inputs).total_cost_per_piece, PieceCost(-5.0));
    }

    #[test]
    fn test_round_trip_through_per_piece_inputs() {
        let inputs = BatchInputs {
            production_quantity: 7,
            raw_material_total: 1234.56,
            labour_total: 99.99,
            machine_hours: 3.5,
            machine_hour_rate: 410.0,
            overheads_total: 77.7,
            packaging_total: 10.0,
            admin_total: 1.0,
            other_costs: 0.05,
            desired_profit_percent: 12.5,
        };
        let direct = to_per_piece(&inputs).unwrap();
        let via_per_piece = from_per_piece(&PerPieceInputs::from_breakdown(
            &direct,
            inputs.production_quantity,
            inputs.desired_profit_percent,
        ));
        assert_eq!(via_per_piece, direct);
    }

    #[test]
    fn test_project_to_batch() {
        let inputs = PerPieceInputs {
            production_quantity: 1000,
            raw_material_per_piece: 120.0,
            labour_per_piece: 30.0,
            machine_per_piece: 72.0,
            overhead_per_piece: 20.0,
            packaging_per_piece: 7.0,
            admin_per_piece: 5.0,
            other_per_piece: 2.0,
            desired_profit_percent: 25.0,
        };
        let totals = project_to_batch(&inputs, PieceCost(320.0)).unwrap();
        assert_eq!(totals.components.raw_material, BatchCost(120000.0));
        assert_eq!(totals.components.machine, BatchCost(72000.0));
        assert_eq!(totals.total_batch_cost, BatchCost(256000.0));
        assert_eq!(totals.total_revenue, BatchCost(320000.0));
        assert_eq!(totals.total_batch_profit, BatchCost(64000.0));
    }

    #[test]
    fn test_project_to_batch_invariants() {
        let inputs = PerPieceInputs {
            production_quantity: 3,
            raw_material_per_piece: 0.333,
            labour_per_piece: 1.111,
            other_per_piece: 0.005,
            ..PerPieceInputs::default()
        };
        let totals = project_to_batch(&inputs, PieceCost(2.01)).unwrap();
        assert_eq!(totals.total_batch_cost, totals.components.total());
        assert_eq!(
            totals.total_batch_profit,
            (totals.total_revenue - totals.total_batch_cost).rounded()
        );
    }

    #[test]
    fn test_project_to_batch_needs_quantity() {
        let inputs = PerPieceInputs {
            raw_material_per_piece: 10.0,
            ..PerPieceInputs::default()
        };
        assert!(project_to_batch(&inputs, PieceCost(12.0)).is_none());
    }
}
