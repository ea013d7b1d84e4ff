//! A resistor divider picker for circuit design.
//!
//! Given an input voltage, a desired output voltage and a catalog of the resistor values you
//! have on hand, it finds the pair R1 (top) / R2 (bottom) whose output comes closest to the
//! target, suggests the exact partner value for each catalog resistor, and lists the voltages
//! the catalog can reach without overshooting.
//!
//! All resistances are in kΩ.
//!
//! # Example
//! Dividing 3.3v down to 1v with a drawer holding 1K, 2K and 4K7 resistors:
//! ```rust
//! use divider_calc::*;
//!
//! let calc = DividerCalc::new(ResistorCatalog::new(vec![1.0, 2.0, 4.7]).unwrap());
//! let spec = DividerSpec::new(3.3, 1.0, None).unwrap();
//!
//! println!("Number of combinations: {}", calc.combinations());
//!
//! let report = calc.calc(&spec);
//! let best = report.best.unwrap();
//! assert_eq!((best.r1, best.r2), (4.7, 2.0));
//!
//! print!("{}", report);
//! ```
//! Running this example prints (suggestions shortened):
//! ```text
//! Number of combinations: 9
//! === Best Resistor Combination ===
//! R1: 4K7
//! R2: 2K
//! Actual output voltage: 0.985 V
//! Error from desired voltage: 0.015 V
//! Current consumption: 492.537 mA
//! Power consumption: 1.625 mW
//!
//! === Suggested Resistors for Exact Output ===
//! Use R1 = 1K with R2 = 434R783 (you have R1 = 1K, current: 2300.000 mA)
//! Use R1 = 2K3 with R2 = 1K (you have R2 = 1K, current: 1000.000 mA)
//! ...
//!
//! === Achievable Output Voltages with Current Resistors ===
//! Vout: 0.985 V (R1: 4K7, R2: 2K, Current: 492.537 mA)
//! Vout: 0.579 V (R1: 4K7, R2: 1K, Current: 578.947 mA)
//! ```

#[macro_use]
extern crate lazy_static;

pub mod catalog;
pub mod divider;
pub mod error;
pub mod ranking;
pub mod report;
pub mod search;
pub mod solver;
pub mod spec;

pub use catalog::{CatalogFile, ResistorCatalog, E12, E24, E3, E6};
pub use error::{DividerError, Result};
pub use ranking::{AchievableTable, DEFAULT_TABLE_ROWS};
pub use report::Report;
pub use search::{Advisory, Candidate, PairSearch, DEFAULT_ADVISORY_THRESHOLD};
pub use solver::{Role, Suggestion};
pub use spec::DividerSpec;

/// Main calculator struct
#[derive(Debug, Clone)]
pub struct DividerCalc {
    catalog: ResistorCatalog,
    advisory_threshold: Option<f64>,
    table_rows: usize,
}

impl DividerCalc {
    /// Creates a calculator over `catalog`, warning above
    /// [`DEFAULT_ADVISORY_THRESHOLD`] and listing [`DEFAULT_TABLE_ROWS`] achievable voltages.
    pub fn new(catalog: ResistorCatalog) -> Self {
        DividerCalc {
            catalog,
            advisory_threshold: Some(DEFAULT_ADVISORY_THRESHOLD),
            table_rows: DEFAULT_TABLE_ROWS,
        }
    }

    /// Creates a calculator drawing both resistors from one of the E-series constants.
    /// # Examples
    /// ```
    ///     # use divider_calc::*;
    ///     let calc = DividerCalc::series(&E12);
    ///     assert_eq!(calc.combinations(), E12.len() * E12.len());
    /// ```
    pub fn series(series: &ResistorCatalog) -> Self {
        Self::new(series.clone())
    }

    /// Sets the input voltage above which an [`Advisory`] is raised.
    pub fn with_advisory_threshold(mut self, threshold: f64) -> Result<Self> {
        if !(threshold > 0.0) {
            return Err(DividerError::NonPositiveThreshold { threshold });
        }
        self.advisory_threshold = Some(threshold);
        Ok(self)
    }

    /// Never raise the input voltage advisory.
    pub fn without_advisory(mut self) -> Self {
        self.advisory_threshold = None;
        self
    }

    pub fn with_table_rows(mut self, rows: usize) -> Self {
        self.table_rows = rows;
        self
    }

    pub fn catalog(&self) -> &ResistorCatalog {
        &self.catalog
    }

    pub fn advisory_threshold(&self) -> Option<f64> {
        self.advisory_threshold
    }

    /// Returns the number of (R1, R2) pairs the search evaluates.
    pub fn combinations(&self) -> usize {
        self.catalog.len() * self.catalog.len()
    }

    /// Scores every ordered pair from the catalog. See [`search::find_best_pair`].
    pub fn best_pair(&self, spec: &DividerSpec) -> PairSearch {
        search::find_best_pair(&self.catalog, spec, self.advisory_threshold)
    }

    /// Exact partner values for each catalog resistor. See [`solver::suggest_partners`].
    pub fn suggestions(&self, spec: &DividerSpec) -> Vec<Suggestion> {
        solver::suggest_partners(&self.catalog, spec)
    }

    /// Runs the search and the solver and ranks the achievable voltages.
    pub fn calc(&self, spec: &DividerSpec) -> Report {
        let PairSearch {
            best,
            achievable,
            advisory,
        } = self.best_pair(spec);
        let table = AchievableTable::build(&achievable, spec.vout_desired(), self.table_rows);
        Report {
            spec: *spec,
            advisory,
            best,
            suggestions: self.suggestions(spec),
            table,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc() -> DividerCalc {
        DividerCalc::new(ResistorCatalog::new(vec![1.0, 2.0, 4.7]).unwrap())
    }

    #[test]
    fn test_threshold_settings() {
        assert_eq!(calc().advisory_threshold(), Some(3.3));
        assert_eq!(
            calc().with_advisory_threshold(5.0).unwrap().advisory_threshold(),
            Some(5.0)
        );
        assert!(calc().with_advisory_threshold(0.0).is_err());
        assert_eq!(calc().without_advisory().advisory_threshold(), None);
    }

    #[test]
    fn test_report_sections() {
        let spec = DividerSpec::new(3.3, 1.0, None).unwrap();
        let report = calc().calc(&spec);
        assert!(report.advisory.is_none());
        assert_eq!(report.suggestions.len(), 6);
        assert_eq!(report.table.rows().len(), 2);

        let text = report.to_string();
        assert!(text.contains("R1: 4K7\nR2: 2K\n"));
        assert!(text.contains("Actual output voltage: 0.985 V"));
        assert!(text.contains("Use R1 = 2K with R2 = 869R565 (you have R1 = 2K"));
        assert!(text.contains("Vout: 0.579 V (R1: 4K7, R2: 1K, Current: 578.947 mA)"));
        assert!(!text.contains("more combinations"));
    }

    #[test]
    fn test_report_none_found() {
        let spec = DividerSpec::new(5.0, 5.0, Some(1.0)).unwrap();
        let text = calc().calc(&spec).to_string();
        assert!(text.starts_with("Warning: Input voltage 5 V exceeds 3.3 V"));
        assert!(text.contains("No suitable resistor combination found"));
        assert!(text.contains("No valid resistor suggestions"));
        assert!(text.contains("No achievable voltages"));
    }

    #[test]
    fn test_report_remainder() {
        let spec = DividerSpec::new(3.3, 3.3, None).unwrap();
        let report = DividerCalc::series(&E3).calc(&spec);
        let matching = E3.len() * E3.len();
        assert_eq!(report.table.rows().len(), DEFAULT_TABLE_ROWS);
        assert_eq!(report.table.omitted(), matching - DEFAULT_TABLE_ROWS);
        assert!(report
            .to_string()
            .contains(&format!("... and {} more combinations.", matching - 15)));
    }
}
