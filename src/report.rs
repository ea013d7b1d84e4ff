//! Plain text rendering of a calculation.

use std::fmt;

use crate::ranking::AchievableTable;
use crate::search::{Advisory, Candidate};
use crate::solver::Suggestion;
use crate::spec::DividerSpec;

fn format_rval(r: f64, unit: &str) -> String {
    let mut val = format!("{:.3}", r);
    if val.contains('.') {
        let trimmed = val.trim_end_matches('0').trim_end_matches('.').len();
        val.truncate(trimmed);
    }
    if val.contains('.') {
        val.replace('.', unit)
    } else {
        val.push_str(unit);
        val
    }
}

/// Formats a kΩ value in resistor notation, e.g. `4K7`, `100R`, `1M`.
pub fn format_resistance(r_kohm: f64) -> String {
    let r = r_kohm * 1000.0;
    if r < 1000.0 {
        format_rval(r, "R")
    } else if r < 1_000_000.0 {
        format_rval(r / 1000.0, "K")
    } else {
        format_rval(r / 1_000_000.0, "M")
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Advisory::InputAboveThreshold { vin, threshold } => write!(
                f,
                "Warning: Input voltage {} V exceeds {} V, which is unsafe for a low-voltage ADC input.",
                vin, threshold
            ),
        }
    }
}

/// Everything a run produces for one [`DividerSpec`].
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub spec: DividerSpec,
    pub advisory: Option<Advisory>,
    pub best: Option<Candidate>,
    pub suggestions: Vec<Suggestion>,
    pub table: AchievableTable,
}

impl Report {
    fn fmt_best(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "=== Best Resistor Combination ===")?;
        match &self.best {
            None => writeln!(
                f,
                "No suitable resistor combination found within the current limit."
            ),
            Some(best) => {
                writeln!(f, "R1: {}", format_resistance(best.r1))?;
                writeln!(f, "R2: {}", format_resistance(best.r2))?;
                writeln!(f, "Actual output voltage: {:.3} V", best.vout)?;
                writeln!(f, "Error from desired voltage: {:.3} V", best.error)?;
                writeln!(f, "Current consumption: {:.3} mA", best.current_ma)?;
                writeln!(
                    f,
                    "Power consumption: {:.3} mW",
                    best.power_mw(self.spec.vin())
                )
            }
        }
    }

    fn fmt_suggestions(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "=== Suggested Resistors for Exact Output ===")?;
        if self.suggestions.is_empty() {
            return writeln!(f, "No valid resistor suggestions within the current limit.");
        }
        for s in &self.suggestions {
            writeln!(
                f,
                "Use R1 = {} with R2 = {} (you have {} = {}, current: {:.3} mA)",
                format_resistance(s.r1),
                format_resistance(s.r2),
                s.known,
                format_resistance(s.fixed()),
                s.current_ma
            )?;
        }
        Ok(())
    }

    fn fmt_table(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "=== Achievable Output Voltages with Current Resistors ===")?;
        if self.table.is_empty() {
            return writeln!(
                f,
                "No achievable voltages less than or equal to the desired output voltage within the current limit."
            );
        }
        for c in self.table.rows() {
            writeln!(
                f,
                "Vout: {:.3} V (R1: {}, R2: {}, Current: {:.3} mA)",
                c.vout,
                format_resistance(c.r1),
                format_resistance(c.r2),
                c.current_ma
            )?;
        }
        if self.table.omitted() > 0 {
            writeln!(f, "... and {} more combinations.", self.table.omitted())?;
        }
        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(advisory) = &self.advisory {
            writeln!(f, "{}", advisory)?;
        }
        self.fmt_best(f)?;
        writeln!(f)?;
        self.fmt_suggestions(f)?;
        writeln!(f)?;
        self.fmt_table(f)
    }
}
