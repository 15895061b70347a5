//! # Money Units
//!
//! Type-safe wrappers for money amounts. A cost is either attributed to one
//! piece ([`PieceCost`]) or to a whole batch ([`BatchCost`]); the two are
//! never interchangeable without going through the quantity dimension.
//!
//! ## Design Philosophy
//!
//! Simple newtype wrappers rather than a decimal or money library:
//! - All arithmetic is plain `f64`, rounded to cents at every stage
//! - JSON serialization stays clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## Rounding
//!
//! Every stage rounds with [`round_cents`]: multiply by 100, round to the
//! nearest integer with halves going up, divide by 100.
//!
//! ## Example
//!
//! ```rust
//! use cost_core::units::{BatchCost, PieceCost};
//!
//! let raw_material = BatchCost(120000.0);
//! let per_piece: PieceCost = raw_material.per_piece(1000);
//! assert_eq!(per_piece, PieceCost(120.0));
//!
//! assert_eq!(PieceCost(33.333).for_batch(3), BatchCost(100.0));
//! ```

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};

/// Round to 2 decimal places, halves rounding toward positive infinity.
///
/// ```rust
/// use cost_core::units::round_cents;
///
/// assert_eq!(round_cents(238.754), 238.75);
/// assert_eq!(round_cents(0.125), 0.13);
/// assert_eq!(round_cents(-0.125), -0.12);
/// ```
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

// ============================================================================
// Amount Types
// ============================================================================

/// Money attributed to a single piece
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PieceCost(pub f64);

/// Money attributed to a whole batch
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BatchCost(pub f64);

impl BatchCost {
    /// Spread this batch amount over `quantity` pieces, rounded to cents.
    ///
    /// The caller guarantees `quantity > 0`.
    pub fn per_piece(self, quantity: i64) -> PieceCost {
        PieceCost(round_cents(self.0 / quantity as f64))
    }
}

impl PieceCost {
    /// Scale this per-piece amount up to `quantity` pieces, rounded to cents.
    pub fn for_batch(self, quantity: i64) -> BatchCost {
        BatchCost(round_cents(self.0 * quantity as f64))
    }
}

/// Common behavior of the money newtypes.
///
/// Lets [`CostComponents`](crate::components::CostComponents) total its
/// slots without caring which scale they are expressed in.
pub trait Amount: Copy + Add<Output = Self> + Sum<Self> {
    /// Get the raw f64 value
    fn value(self) -> f64;

    /// Create from raw f64 value
    fn new(value: f64) -> Self;

    /// Round to cents
    fn rounded(self) -> Self {
        Self::new(round_cents(self.value()))
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_amount {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Neg for $type {
            type Output = Self;
            fn neg(self) -> Self::Output {
                Self(-self.0)
            }
        }

        impl Sum for $type {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self(0.0), |acc, x| acc + x)
            }
        }

        impl Amount for $type {
            fn value(self) -> f64 {
                self.0
            }

            fn new(value: f64) -> Self {
                Self(value)
            }
        }

        impl From<$type> for f64 {
            fn from(amount: $type) -> f64 {
                amount.0
            }
        }
    };
}

impl_amount!(PieceCost);
impl_amount!(BatchCost);
