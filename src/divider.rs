//! Closed-form divider equations.
//!
//! Resistances are in kΩ throughout the crate, so `V / kΩ` comes out in mA.

/// Relative tolerance shared by the pair search tie-break and the exact-match
/// degenerate target check.
pub const REL_TOL: f64 = 1e-9;

/// Output voltage at the midpoint of `r1` over `r2` across `vin`.
pub fn vout(vin: f64, r1: f64, r2: f64) -> f64 {
    vin * r2 / (r1 + r2)
}

/// Divider current figure reported in mA and compared against the current
/// cap: `1000 * vin / (r1 + r2)` with resistances in kΩ.
pub fn current_ma(vin: f64, r1: f64, r2: f64) -> f64 {
    1000.0 * vin / (r1 + r2)
}

/// Power dissipated by the divider in mW.
pub fn power_mw(vin: f64, current_ma: f64) -> f64 {
    vin * current_ma / 1000.0
}

/// Equality within [`REL_TOL`] of the larger magnitude. Comparisons against
/// zero are therefore exact.
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= REL_TOL * a.abs().max(b.abs())
}
