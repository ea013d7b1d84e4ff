//! Error types for the divider calculator.
//!
//! Only input validation and catalog loading can fail. A search that finds
//! nothing is not an error: it is reported through `Option` and empty lists.

use thiserror::Error;

/// Result type alias using [`DividerError`].
pub type Result<T> = std::result::Result<T, DividerError>;

#[derive(Error, Debug)]
pub enum DividerError {
    // ============ Input Errors ============
    /// A value supplied by the user could not be read as a number
    #[error("Invalid value for {field}: '{input}' is not a number")]
    InvalidNumber { field: &'static str, input: String },

    #[error("{field} must be a finite number (got {value})")]
    NonFiniteInput { field: &'static str, value: f64 },

    #[error("Input voltage must be positive (got {vin} V)")]
    NonPositiveVin { vin: f64 },

    #[error("Desired output voltage cannot be negative (got {vout} V)")]
    NegativeVout { vout: f64 },

    #[error("Desired output voltage {vout} V cannot be greater than input voltage {vin} V")]
    VoutAboveVin { vout: f64, vin: f64 },

    #[error("Maximum current must be positive (got {imax} mA)")]
    NonPositiveImax { imax: f64 },

    #[error("Advisory threshold must be positive (got {threshold} V)")]
    NonPositiveThreshold { threshold: f64 },

    // ============ Catalog Errors ============
    #[error("No valid resistors found in the catalog")]
    EmptyCatalog,

    /// Catalog values must be positive and finite
    #[error("Invalid resistor value {value} kΩ: values must be positive")]
    InvalidResistor { value: f64 },

    #[error("Malformed resistor value '{entry}' in catalog")]
    MalformedCatalog { entry: String },

    #[error("Catalog file '{path}' not found")]
    CatalogNotFound { path: String },

    #[error("Catalog file must have a [Resistors] section with a 'values' key")]
    MissingCatalogKey,

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
