//! # Cost Components
//!
//! The seven cost categories every costing representation carries, and the
//! generic [`CostComponents<T>`] record that holds one amount per category.
//!
//! The same record is used at both scales: `CostComponents<BatchCost>` for
//! batch totals and `CostComponents<PieceCost>` for per-piece figures. Moving
//! between the two goes through [`scale_down`] and [`scale_up`], which both
//! pipelines share.
//!
//! ## Example
//!
//! ```rust
//! use cost_core::components::{scale_down, CostCategory, CostComponents};
//! use cost_core::units::{BatchCost, PieceCost};
//!
//! let totals = CostComponents {
//!     raw_material: BatchCost(1000.0),
//!     labour: BatchCost(500.0),
//!     ..CostComponents::default()
//! };
//!
//! let per_piece = scale_down(&totals, 100).unwrap();
//! assert_eq!(per_piece.get(CostCategory::RawMaterial), PieceCost(10.0));
//! assert_eq!(per_piece.total(), PieceCost(15.0));
//!
//! // No quantity, no conversion
//! assert!(scale_down(&totals, 0).is_none());
//! ```

use serde::{Deserialize, Serialize};

use crate::units::{Amount, BatchCost, PieceCost};

/// The cost categories, in declared order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CostCategory {
    RawMaterial,
    Labour,
    Machine,
    Overhead,
    Packaging,
    Admin,
    Other,
}

impl CostCategory {
    /// All categories in declared order
    pub const ALL: [CostCategory; 7] = [
        CostCategory::RawMaterial,
        CostCategory::Labour,
        CostCategory::Machine,
        CostCategory::Overhead,
        CostCategory::Packaging,
        CostCategory::Admin,
        CostCategory::Other,
    ];

    /// Short display label used by breakdown and batch-total views
    ///
    /// # Example
    /// ```
    /// use cost_core::components::CostCategory;
    /// assert_eq!(CostCategory::RawMaterial.label(), "Raw Material");
    /// ```
    pub fn label(&self) -> &'static str {
        match self {
            CostCategory::RawMaterial => "Raw Material",
            CostCategory::Labour => "Labour",
            CostCategory::Machine => "Machine",
            CostCategory::Overhead => "Overhead",
            CostCategory::Packaging => "Packaging",
            CostCategory::Admin => "Admin",
            CostCategory::Other => "Other",
        }
    }
}

impl std::fmt::Display for CostCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One amount per cost category.
///
/// `T` fixes the scale: [`PieceCost`] or [`BatchCost`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostComponents<T> {
    pub raw_material: T,
    pub labour: T,
    pub machine: T,
    pub overhead: T,
    pub packaging: T,
    pub admin: T,
    pub other: T,
}

impl<T: Copy> CostComponents<T> {
    /// Amount for one category
    pub fn get(&self, category: CostCategory) -> T {
        match category {
            CostCategory::RawMaterial => self.raw_material,
            CostCategory::Labour => self.labour,
            CostCategory::Machine => self.machine,
            CostCategory::Overhead => self.overhead,
            CostCategory::Packaging => self.packaging,
            CostCategory::Admin => self.admin,
            CostCategory::Other => self.other,
        }
    }

    /// Apply `f` to every slot, preserving category order.
    pub fn map<U>(&self, mut f: impl FnMut(T) -> U) -> CostComponents<U> {
        CostComponents {
            raw_material: f(self.raw_material),
            labour: f(self.labour),
            machine: f(self.machine),
            overhead: f(self.overhead),
            packaging: f(self.packaging),
            admin: f(self.admin),
            other: f(self.other),
        }
    }

    /// Iterate `(category, amount)` pairs in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (CostCategory, T)> + '_ {
        CostCategory::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

impl<T: Amount> CostComponents<T> {
    /// Rounded sum of the slots, added in declared order.
    ///
    /// Slots are expected to be rounded already, so the total always equals
    /// the sum of the displayed parts.
    pub fn total(&self) -> T {
        self.iter().map(|(_, amount)| amount).sum::<T>().rounded()
    }
}

/// Convert batch totals to per-piece amounts.
///
/// Each slot is divided by `quantity` and rounded independently. Returns
/// `None` when `quantity <= 0`.
pub fn scale_down(totals: &CostComponents<BatchCost>, quantity: i64) -> Option<CostComponents<PieceCost>> {
    if quantity <= 0 {
        return None;
    }
    Some(totals.map(|amount| amount.per_piece(quantity)))
}

/// Convert per-piece amounts to batch totals.
///
/// Each slot is multiplied by `quantity` and rounded independently. Returns
/// `None` when `quantity <= 0`.
pub fn scale_up(per_piece: &CostComponents<PieceCost>, quantity: i64) -> Option<CostComponents<BatchCost>> {
    if quantity <= 0 {
        return None;
    }
    Some(per_piece.map(|amount| amount.for_batch(quantity)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_per_piece() -> CostComponents<PieceCost> {
        CostComponents {
            raw_material: PieceCost(120.0),
            labour: PieceCost(30.0),
            machine: PieceCost(72.0),
            overhead: PieceCost(20.0),
            packaging: PieceCost(7.0),
            admin: PieceCost(5.0),
            other: PieceCost(2.0),
        }
    }

    #[test]
    fn test_category_order() {
        let labels: Vec<_> = CostCategory::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec!["Raw Material", "Labour", "Machine", "Overhead", "Packaging", "Admin", "Other"]
        );
    }

    #[test]
    fn test_iter_follows_declared_order() {
        let components = sample_per_piece();
        let amounts: Vec<f64> = components.iter().map(|(_, a)| a.0).collect();
        assert_eq!(amounts, vec![120.0, 30.0, 72.0, 20.0, 7.0, 5.0, 2.0]);
    }

    #[test]
    fn test_total_is_rounded_sum() {
        assert_eq!(sample_per_piece().total(), PieceCost(256.0));

        let drifting = CostComponents {
            raw_material: PieceCost(0.1),
            labour: PieceCost(0.2),
            ..CostComponents::default()
        };
        // 0.1 + 0.2 is 0.30000000000000004 in f64
        assert_eq!(drifting.total(), PieceCost(0.3));
    }

    #[test]
    fn test_total_sums_rounded_parts() {
        let totals = CostComponents {
            raw_material: BatchCost(1.0),
            labour: BatchCost(1.0),
            machine: BatchCost(1.0),
            ..CostComponents::default()
        };
        let per_piece = scale_down(&totals, 3).unwrap();
        // Each part shows 0.33, so the total is 0.99 rather than 1.00
        assert_eq!(per_piece.labour, PieceCost(0.33));
        assert_eq!(per_piece.total(), PieceCost(0.99));
    }

    #[test]
    fn test_scale_up() {
        let totals = scale_up(&sample_per_piece(), 1000).unwrap();
        assert_eq!(totals.raw_material, BatchCost(120000.0));
        assert_eq!(totals.machine, BatchCost(72000.0));
        assert_eq!(totals.total(), BatchCost(256000.0));
    }

    #[test]
    fn test_scale_requires_positive_quantity() {
        let per_piece = sample_per_piece();
        assert!(scale_up(&per_piece, 0).is_none());
        assert!(scale_up(&per_piece, -4).is_none());

        let totals = per_piece.map(|p| BatchCost(p.0));
        assert!(scale_down(&totals, 0).is_none());
        assert!(scale_down(&totals, -1).is_none());
    }

    #[test]
    fn test_quantity_of_one_is_identity() {
        let totals = sample_per_piece().map(|p| BatchCost(p.0));
        let per_piece = scale_down(&totals, 1).unwrap();
        assert_eq!(per_piece, sample_per_piece());
    }

    #[test]
    fn test_serialization_is_flat_numbers() {
        let json = serde_json::to_string(&sample_per_piece()).unwrap();
        assert!(json.contains("\"raw_material\":120.0"));
        let roundtrip: CostComponents<PieceCost> = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, sample_per_piece());
    }
}
