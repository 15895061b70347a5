//! # Input Validation
//!
//! Advisory checks over raw inputs. Validation never blocks the calculation
//! stages and never modifies inputs; it only produces [`Warning`]s for the
//! presentation layer.
//!
//! The one rule currently defined: no cost or profit field may be negative.
//! All offending fields are reported together in a single error, listed in
//! field-declaration order.
//!
//! ## Example
//!
//! ```rust
//! use cost_core::inputs::{BatchInputs, CostInputs};
//! use cost_core::validation::{validate, Severity};
//!
//! let inputs = CostInputs::Batch(BatchInputs {
//!     labour_total: -1.0,
//!     machine_hour_rate: -600.0,
//!     ..BatchInputs::default()
//! });
//!
//! let warnings = validate(&inputs);
//! assert_eq!(warnings.len(), 1);
//! assert_eq!(warnings[0].severity, Severity::Error);
//! assert_eq!(
//!     warnings[0].message,
//!     "Negative values not allowed: Labour, Machine Hour Rate"
//! );
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::inputs::{BatchInputs, CostInputs, PerPieceInputs};

/// How serious a warning is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        };
        write!(f, "{}", s)
    }
}

/// A human-readable message for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warning {
    pub severity: Severity,
    pub message: String,
}

impl Warning {
    /// Create an error-severity warning
    pub fn error(message: impl Into<String>) -> Self {
        Warning {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

/// Inputs that expose their checked fields with display labels.
pub trait LabelledFields {
    /// `(label, value)` pairs in field-declaration order.
    ///
    /// Quantity is not listed: a non-positive quantity already means "no
    /// result" rather than a warning.
    fn labelled_fields(&self) -> Vec<(&'static str, f64)>;
}

impl LabelledFields for BatchInputs {
    fn labelled_fields(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("Raw Material", self.raw_material_total),
            ("Labour", self.labour_total),
            ("Machine Hours", self.machine_hours),
            ("Machine Hour Rate", self.machine_hour_rate),
            ("Overheads", self.overheads_total),
            ("Packaging", self.packaging_total),
            ("Admin", self.admin_total),
            ("Other Costs", self.other_costs),
            ("Profit %", self.desired_profit_percent),
        ]
    }
}

impl LabelledFields for PerPieceInputs {
    fn labelled_fields(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("Raw Material", self.raw_material_per_piece),
            ("Labour", self.labour_per_piece),
            ("Machine Cost", self.machine_per_piece),
            ("Overheads", self.overhead_per_piece),
            ("Packaging", self.packaging_per_piece),
            ("Admin", self.admin_per_piece),
            ("Other Costs", self.other_per_piece),
            ("Profit %", self.desired_profit_percent),
        ]
    }
}

/// Check any labelled input shape.
pub fn check_fields(inputs: &impl LabelledFields) -> Vec<Warning> {
    let negative: Vec<&str> = inputs
        .labelled_fields()
        .into_iter()
        .filter(|(_, value)| *value < 0.0)
        .map(|(label, _)| label)
        .collect();

    if negative.is_empty() {
        return Vec::new();
    }

    debug!(fields = ?negative, "negative input values");
    vec![Warning::error(format!(
        "Negative values not allowed: {}",
        negative.join(", ")
    ))]
}

/// Check whichever input shape is active.
pub fn validate(inputs: &CostInputs) -> Vec<Warning> {
    match inputs {
        CostInputs::Batch(b) => check_fields(b),
        CostInputs::PerPiece(p) => check_fields(p),
    }
}
