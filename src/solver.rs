//! Inverse divider equation: given one resistor, find the partner that hits
//! the target voltage exactly.

use std::fmt;

use crate::catalog::ResistorCatalog;
use crate::divider::{approx_eq, current_ma};
use crate::spec::DividerSpec;

/// Divider position held by the known catalog value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Top resistor, between Vin and the output
    R1,
    /// Bottom resistor, between the output and ground
    R2,
}

impl Role {
    pub fn partner(self) -> Role {
        match self {
            Role::R1 => Role::R2,
            Role::R2 => Role::R1,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Role::R1 => write!(f, "R1"),
            Role::R2 => write!(f, "R2"),
        }
    }
}

/// A pair where one value came from the catalog and the other was solved for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Suggestion {
    pub r1: f64,
    pub r2: f64,
    pub known: Role,
    pub current_ma: f64,
}

impl Suggestion {
    /// Value of the resistor in position `role`.
    pub fn r(&self, role: Role) -> f64 {
        match role {
            Role::R1 => self.r1,
            Role::R2 => self.r2,
        }
    }

    /// The catalog value.
    pub fn fixed(&self) -> f64 {
        self.r(self.known)
    }

    /// The solved value.
    pub fn derived(&self) -> f64 {
        self.r(self.known.partner())
    }
}

/// Solves `vout = vin * r2 / (r1 + r2)` for the resistor opposite `known`.
///
/// Returns `None` when the target is 0 V or Vin (within tolerance), when the
/// partner comes out non-positive, or when the pair exceeds the current cap.
pub fn solve_partner(spec: &DividerSpec, known: f64, role: Role) -> Option<Suggestion> {
    let (vin, vout) = (spec.vin(), spec.vout_desired());
    if approx_eq(vout, 0.0) || approx_eq(vout, vin) {
        return None;
    }

    let (r1, r2) = match role {
        Role::R1 => (known, known * vout / (vin - vout)),
        Role::R2 => (known * (vin - vout) / vout, known),
    };
    let solved = match role {
        Role::R1 => r2,
        Role::R2 => r1,
    };
    if !(solved.is_finite() && solved > 0.0) {
        return None;
    }

    let current = current_ma(vin, r1, r2);
    if !spec.allows_current(current) {
        return None;
    }
    Some(Suggestion {
        r1,
        r2,
        known: role,
        current_ma: current,
    })
}

/// Every successful solve, in catalog order and R1 before R2 for each value.
pub fn suggest_partners(catalog: &ResistorCatalog, spec: &DividerSpec) -> Vec<Suggestion> {
    catalog
        .iter()
        .flat_map(|&r| {
            [Role::R1, Role::R2]
                .into_iter()
                .filter_map(move |role| solve_partner(spec, r, role))
        })
        .collect()
}
