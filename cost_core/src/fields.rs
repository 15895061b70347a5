//! # Input Field Configuration
//!
//! Static descriptors for the input forms: label, placeholder, prefix/suffix
//! and a tooltip per field. Front ends render their forms from these tables
//! and feed the entered values back through `set_field` using [`InputFieldConfig::key`].
//!
//! The labels here are the form labels ("Direct Labour", "Admin Costs").
//! Validation messages use their own shorter labels, see
//! [`crate::validation::LabelledFields`].

use serde::Serialize;

/// Descriptor for one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InputFieldConfig {
    /// JSON key of the field on the input shape
    pub key: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub prefix: Option<&'static str>,
    pub suffix: Option<&'static str>,
    pub tooltip: Option<&'static str>,
}

impl InputFieldConfig {
    /// Label decorated with units and the placeholder as a hint,
    /// e.g. `Machine Rate (₹ /hr) [600]`.
    ///
    /// ```rust
    /// use cost_core::fields::QUANTITY_FIELD;
    /// assert_eq!(QUANTITY_FIELD.prompt_label(), "Batch Quantity (pcs) [1000]");
    /// ```
    pub fn prompt_label(&self) -> String {
        let units = match (self.prefix, self.suffix) {
            (Some(p), Some(s)) => format!(" ({} {})", p, s),
            (Some(p), None) => format!(" ({})", p),
            (None, Some(s)) => format!(" ({})", s),
            (None, None) => String::new(),
        };
        format!("{}{} [{}]", self.label, units, self.placeholder)
    }
}

const RUPEE: Option<&str> = Some("₹");

/// Batch → per-piece form, quantity first.
pub const BATCH_INPUT_FIELDS: [InputFieldConfig; 9] = [
    InputFieldConfig {
        key: "production_quantity",
        label: "Quantity",
        placeholder: "1000",
        prefix: None,
        suffix: Some("pcs"),
        tooltip: Some("Total number of pieces to be produced in this batch"),
    },
    InputFieldConfig {
        key: "raw_material_total",
        label: "Raw Material",
        placeholder: "120000",
        prefix: RUPEE,
        suffix: None,
        tooltip: Some("Total cost of raw materials for the entire batch"),
    },
    InputFieldConfig {
        key: "labour_total",
        label: "Direct Labour",
        placeholder: "30000",
        prefix: RUPEE,
        suffix: None,
        tooltip: Some("Total labour wages for production"),
    },
    InputFieldConfig {
        key: "machine_hours",
        label: "Machine Hours",
        placeholder: "120",
        prefix: None,
        suffix: Some("hrs"),
        tooltip: Some("Total machine hours required for production"),
    },
    InputFieldConfig {
        key: "machine_hour_rate",
        label: "Machine Rate",
        placeholder: "600",
        prefix: RUPEE,
        suffix: Some("/hr"),
        tooltip: Some("Cost per hour of machine operation"),
    },
    InputFieldConfig {
        key: "overheads_total",
        label: "Overheads",
        placeholder: "20000",
        prefix: RUPEE,
        suffix: None,
        tooltip: Some("Factory overheads like rent, utilities, maintenance"),
    },
    InputFieldConfig {
        key: "packaging_total",
        label: "Packaging",
        placeholder: "7000",
        prefix: RUPEE,
        suffix: None,
        tooltip: Some("Total packaging cost for the batch"),
    },
    InputFieldConfig {
        key: "admin_total",
        label: "Admin Costs",
        placeholder: "5000",
        prefix: RUPEE,
        suffix: None,
        tooltip: Some("Administrative and indirect expenses"),
    },
    InputFieldConfig {
        key: "other_costs",
        label: "Other Costs",
        placeholder: "2000",
        prefix: RUPEE,
        suffix: None,
        tooltip: Some("Any other miscellaneous costs"),
    },
];

/// Per-piece → batch form, costs only. Quantity is asked for separately.
pub const PERPIECE_COST_FIELDS: [InputFieldConfig; 7] = [
    InputFieldConfig {
        key: "raw_material_per_piece",
        label: "Raw Material",
        placeholder: "120",
        prefix: RUPEE,
        suffix: Some("/pc"),
        tooltip: Some("Raw material cost per piece"),
    },
    InputFieldConfig {
        key: "labour_per_piece",
        label: "Direct Labour",
        placeholder: "30",
        prefix: RUPEE,
        suffix: Some("/pc"),
        tooltip: Some("Labour cost per piece"),
    },
    InputFieldConfig {
        key: "machine_per_piece",
        label: "Machine Cost",
        placeholder: "72",
        prefix: RUPEE,
        suffix: Some("/pc"),
        tooltip: Some("Machine cost per piece"),
    },
    InputFieldConfig {
        key: "overhead_per_piece",
        label: "Overheads",
        placeholder: "20",
        prefix: RUPEE,
        suffix: Some("/pc"),
        tooltip: Some("Overhead cost per piece"),
    },
    InputFieldConfig {
        key: "packaging_per_piece",
        label: "Packaging",
        placeholder: "7",
        prefix: RUPEE,
        suffix: Some("/pc"),
        tooltip: Some("Packaging cost per piece"),
    },
    InputFieldConfig {
        key: "admin_per_piece",
        label: "Admin Costs",
        placeholder: "5",
        prefix: RUPEE,
        suffix: Some("/pc"),
        tooltip: Some("Admin cost per piece"),
    },
    InputFieldConfig {
        key: "other_per_piece",
        label: "Other Costs",
        placeholder: "2",
        prefix: RUPEE,
        suffix: Some("/pc"),
        tooltip: Some("Other costs per piece"),
    },
];

/// Profit markup, shared by both forms.
pub const PROFIT_FIELD: InputFieldConfig = InputFieldConfig {
    key: "desired_profit_percent",
    label: "Desired Profit Margin",
    placeholder: "25",
    prefix: None,
    suffix: Some("%"),
    tooltip: Some("Target profit margin percentage to add on top of cost"),
};

/// Batch quantity on the per-piece form.
pub const QUANTITY_FIELD: InputFieldConfig = InputFieldConfig {
    key: "production_quantity",
    label: "Batch Quantity",
    placeholder: "1000",
    prefix: None,
    suffix: Some("pcs"),
    tooltip: Some("Total number of pieces in this batch"),
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{BatchInputs, PerPieceInputs};

    #[test]
    fn test_batch_keys_are_settable() {
        let mut inputs = BatchInputs::default();
        for field in BATCH_INPUT_FIELDS.iter().chain(std::iter::once(&PROFIT_FIELD)) {
            inputs.set_field(field.key, 1.0).unwrap();
        }
        assert_eq!(inputs.production_quantity, 1);
        assert_eq!(inputs.desired_profit_percent, 1.0);
    }

    #[test]
    fn test_per_piece_keys_are_settable() {
        let mut inputs = PerPieceInputs::default();
        let all = PERPIECE_COST_FIELDS
            .iter()
            .chain([&PROFIT_FIELD, &QUANTITY_FIELD]);
        for field in all {
            inputs.set_field(field.key, 2.0).unwrap();
        }
        assert_eq!(inputs.other_per_piece, 2.0);
        assert_eq!(inputs.production_quantity, 2);
    }

    #[test]
    fn test_prompt_label() {
        assert_eq!(BATCH_INPUT_FIELDS[4].prompt_label(), "Machine Rate (₹ /hr) [600]");
        assert_eq!(BATCH_INPUT_FIELDS[1].prompt_label(), "Raw Material (₹) [120000]");
        assert_eq!(PROFIT_FIELD.prompt_label(), "Desired Profit Margin (%) [25]");
    }
}
