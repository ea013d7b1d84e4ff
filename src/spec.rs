use crate::error::{DividerError, Result};

/// The target a divider is chosen for: input voltage, desired output voltage
/// and an optional current cap in mA.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerSpec {
    vin: f64,
    vout_desired: f64,
    imax: Option<f64>,
}

impl DividerSpec {
    /// Validates that every value is finite, `0 <= vout_desired <= vin`, `vin > 0`
    /// and `imax > 0` when given.
    /// # Examples
    /// ```
    ///     # use divider_calc::DividerSpec;
    ///     let spec = DividerSpec::new(3.3, 1.0, Some(0.5)).unwrap();
    ///     assert_eq!(spec.imax(), Some(0.5));
    ///     assert!(DividerSpec::new(3.3, 4.0, None).is_err());
    /// ```
    pub fn new(vin: f64, vout_desired: f64, imax: Option<f64>) -> Result<Self> {
        let fields = [
            ("Input voltage", Some(vin)),
            ("Desired output voltage", Some(vout_desired)),
            ("Maximum current", imax),
        ];
        for (field, value) in fields {
            if let Some(value) = value.filter(|v| v.is_infinite()) {
                return Err(DividerError::NonFiniteInput { field, value });
            }
        }
        if !(vin > 0.0) {
            return Err(DividerError::NonPositiveVin { vin });
        }
        if !(vout_desired >= 0.0) {
            return Err(DividerError::NegativeVout { vout: vout_desired });
        }
        if vout_desired > vin {
            return Err(DividerError::VoutAboveVin {
                vout: vout_desired,
                vin,
            });
        }
        if let Some(imax) = imax {
            if !(imax > 0.0) {
                return Err(DividerError::NonPositiveImax { imax });
            }
        }
        Ok(DividerSpec {
            vin,
            vout_desired,
            imax,
        })
    }

    pub fn vin(&self) -> f64 {
        self.vin
    }

    pub fn vout_desired(&self) -> f64 {
        self.vout_desired
    }

    pub fn imax(&self) -> Option<f64> {
        self.imax
    }

    /// True when `current_ma` is within the cap, or there is no cap.
    pub fn allows_current(&self, current_ma: f64) -> bool {
        self.imax.map_or(true, |imax| current_ma <= imax)
    }
}

/// Reads a user supplied decimal number, naming `field` in the error.
pub fn parse_value(field: &'static str, input: &str) -> Result<f64> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(DividerError::InvalidNumber {
            field,
            input: trimmed.to_string(),
        }),
    }
}

/// Like [`parse_value`], but an empty answer means "not given".
pub fn parse_optional_value(field: &'static str, input: &str) -> Result<Option<f64>> {
    if input.trim().is_empty() {
        Ok(None)
    } else {
        parse_value(field, input).map(Some)
    }
}
