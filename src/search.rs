//! Exhaustive search over every ordered pair of catalog values.

use itertools::Itertools;

use crate::catalog::ResistorCatalog;
use crate::divider::{approx_eq, current_ma, power_mw, vout};
use crate::spec::DividerSpec;

/// Input voltage above which a low-voltage ADC front-end is at risk.
pub const DEFAULT_ADVISORY_THRESHOLD: f64 = 3.3;

/// One evaluated (R1, R2) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub r1: f64,
    pub r2: f64,
    pub vout: f64,
    /// `|vout - vout_desired|`
    pub error: f64,
    pub current_ma: f64,
}

impl Candidate {
    fn evaluate(spec: &DividerSpec, r1: f64, r2: f64) -> Self {
        let vout = vout(spec.vin(), r1, r2);
        Candidate {
            r1,
            r2,
            vout,
            error: (vout - spec.vout_desired()).abs(),
            current_ma: current_ma(spec.vin(), r1, r2),
        }
    }

    pub fn sum(&self) -> f64 {
        self.r1 + self.r2
    }

    pub fn power_mw(&self, vin: f64) -> f64 {
        power_mw(vin, self.current_ma)
    }

    /// Whether `self` should replace `best` as the incumbent. Errors equal
    /// within the relative tolerance fall back to the smaller resistor sum.
    fn beats(&self, best: &Candidate) -> bool {
        if approx_eq(self.error, best.error) {
            self.sum() < best.sum()
        } else {
            self.error < best.error
        }
    }
}

/// Non-fatal conditions noticed while searching.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Advisory {
    InputAboveThreshold { vin: f64, threshold: f64 },
}

/// Outcome of [`find_best_pair`].
#[derive(Debug, Clone, PartialEq)]
pub struct PairSearch {
    /// `None` when no pair satisfies the current cap.
    pub best: Option<Candidate>,
    /// Every pair within the current cap, in enumeration order.
    pub achievable: Vec<Candidate>,
    pub advisory: Option<Advisory>,
}

/// Checks `vin` against the advisory threshold, if any.
pub fn check_input_voltage(vin: f64, threshold: Option<f64>) -> Option<Advisory> {
    match threshold {
        Some(threshold) if vin > threshold => {
            log::warn!(
                "Input voltage {} V exceeds {} V, which is unsafe for a low-voltage ADC input",
                vin,
                threshold
            );
            Some(Advisory::InputAboveThreshold { vin, threshold })
        }
        _ => None,
    }
}

/// Scores all `n²` ordered pairs of `catalog`, a value may pair with itself.
/// Pairs drawing more than `spec.imax()` are dropped.
pub fn find_best_pair(
    catalog: &ResistorCatalog,
    spec: &DividerSpec,
    advisory_threshold: Option<f64>,
) -> PairSearch {
    let advisory = check_input_voltage(spec.vin(), advisory_threshold);

    let achievable: Vec<Candidate> = catalog
        .iter()
        .cartesian_product(catalog.iter())
        .map(|(&r1, &r2)| Candidate::evaluate(spec, r1, r2))
        .filter(|c| spec.allows_current(c.current_ma))
        .collect();

    let mut best: Option<Candidate> = None;
    for c in &achievable {
        if best.as_ref().map_or(true, |b| c.beats(b)) {
            best = Some(*c);
        }
    }

    log::debug!(
        "Evaluated {} pairs, {} within the current cap",
        catalog.len() * catalog.len(),
        achievable.len()
    );

    PairSearch {
        best,
        achievable,
        advisory,
    }
}
