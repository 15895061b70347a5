//! # Pricing Stage
//!
//! Selling price and profit per piece from a per-piece cost and a markup
//! percentage. Markup is applied on cost:
//!
//! ```text
//! selling_price    = round(cost × (1 + profit_percent / 100))
//! profit_per_piece = round(selling_price − cost)
//! ```
//!
//! No sign checks happen here. Negative costs or percentages are reported by
//! the validation stage and still flow through the arithmetic.

use serde::{Deserialize, Serialize};

use crate::units::{round_cents, Amount, PieceCost};

/// Selling price and profit for one piece.
///
/// ## JSON Example
///
/// ```json
/// {
///   "total_cost_per_piece": 191.0,
///   "profit_percent": 25.0,
///   "selling_price": 238.75,
///   "profit_per_piece": 47.75
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Cost the price was derived from
    pub total_cost_per_piece: PieceCost,
    /// Markup on cost, in percent
    pub profit_percent: f64,
    /// Recommended selling price per piece
    pub selling_price: PieceCost,
    /// Selling price minus cost
    pub profit_per_piece: PieceCost,
}

impl PricingResult {
    /// Gross margin (profit as a share of the selling price), in percent.
    ///
    /// 0 when the selling price is not positive.
    pub fn gross_margin_percent(&self) -> f64 {
        gross_margin_percent(self.selling_price, self.total_cost_per_piece)
    }
}

/// Price one piece.
///
/// # Example
///
/// ```rust
/// use cost_core::calculations::price;
/// use cost_core::units::PieceCost;
///
/// let pricing = price(PieceCost(191.0), 25.0);
/// assert_eq!(pricing.selling_price, PieceCost(238.75));
/// assert_eq!(pricing.profit_per_piece, PieceCost(47.75));
/// assert_eq!(pricing.gross_margin_percent(), 20.0);
/// ```
pub fn price(total_cost_per_piece: PieceCost, profit_percent: f64) -> PricingResult {
    let selling_price = (total_cost_per_piece * (1.0 + profit_percent / 100.0)).rounded();
    let profit_per_piece = (selling_price - total_cost_per_piece).rounded();

    PricingResult {
        total_cost_per_piece,
        profit_percent,
        selling_price,
        profit_per_piece,
    }
}

/// `round((selling − cost) / selling × 100)`, or 0 when `selling <= 0`.
pub(crate) fn gross_margin_percent(selling_price: PieceCost, cost: PieceCost) -> f64 {
    if selling_price.0 <= 0.0 {
        return 0.0;
    }
    round_cents((selling_price.0 - cost.0) / selling_price.0 * 100.0)
}
