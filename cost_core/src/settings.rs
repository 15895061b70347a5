//! # Display Settings
//!
//! Currency and locale configuration for the formatting helpers. The engine
//! itself is currency-agnostic; these settings only affect how figures are
//! rendered.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "currency_code": "INR",
//!   "locale": "en-IN",
//!   "decimal_places": 2
//! }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use cost_core::settings::DisplayConfig;
//!
//! let config: DisplayConfig = serde_json::from_str(r#"{"currency_code":"USD","locale":"en-US"}"#).unwrap();
//! assert_eq!(config.decimal_places, 2);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Largest supported number of decimal places
pub const MAX_DECIMAL_PLACES: u32 = 6;

/// Display configuration for currency, grouping and precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// ISO 4217 currency code (e.g., "INR")
    pub currency_code: String,

    /// BCP 47 locale tag (e.g., "en-IN"); selects digit grouping
    pub locale: String,

    /// Fixed decimal places for currency and percent output
    pub decimal_places: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            currency_code: "INR".to_string(),
            locale: "en-IN".to_string(),
            decimal_places: 2,
        }
    }
}

impl DisplayConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> CalcResult<()> {
        let code = &self.currency_code;
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(CalcError::invalid_input(
                "currency_code",
                code.clone(),
                "Currency code must be three uppercase letters",
            ));
        }
        if self.locale.trim().is_empty() {
            return Err(CalcError::invalid_input(
                "locale",
                self.locale.clone(),
                "Locale must not be empty",
            ));
        }
        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(CalcError::invalid_input(
                "decimal_places",
                self.decimal_places.to_string(),
                format!("At most {} decimal places are supported", MAX_DECIMAL_PLACES),
            ));
        }
        Ok(())
    }

    /// Symbol printed before currency amounts.
    ///
    /// Unknown codes fall back to the code itself followed by a space.
    pub fn currency_symbol(&self) -> String {
        match self.currency_code.as_str() {
            "INR" => "₹".to_string(),
            "USD" => "$".to_string(),
            "EUR" => "€".to_string(),
            "GBP" => "£".to_string(),
            "JPY" => "¥".to_string(),
            other => format!("{} ", other),
        }
    }

    /// Whether the locale uses Indian digit grouping (12,34,567).
    pub fn uses_indian_grouping(&self) -> bool {
        self.locale.ends_with("-IN")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DisplayConfig::default();
        assert_eq!(config.currency_code, "INR");
        assert_eq!(config.locale, "en-IN");
        assert_eq!(config.decimal_places, 2);
        assert!(config.validate().is_ok());
        assert!(config.uses_indian_grouping());
        assert_eq!(config.currency_symbol(), "₹");
    }

    #[test]
    fn test_invalid_currency_code() {
        let config = DisplayConfig {
            currency_code: "rupee".to_string(),
            ..DisplayConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_invalid_decimal_places() {
        let config = DisplayConfig {
            decimal_places: 9,
            ..DisplayConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_locale() {
        let config = DisplayConfig {
            locale: "  ".to_string(),
            ..DisplayConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_currency_symbol() {
        let config = DisplayConfig {
            currency_code: "CHF".to_string(),
            locale: "de-CH".to_string(),
            decimal_places: 2,
        };
        assert_eq!(config.currency_symbol(), "CHF ");
        assert!(!config.uses_indian_grouping());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = DisplayConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let roundtrip: DisplayConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, config);
    }
}
