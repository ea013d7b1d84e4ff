//! The set of resistor values a divider may be built from.
//!
//! A catalog is either read from an INI file:
//! ```text
//! [Resistors]
//! values = 1.0, 2.2, 4.7, 10
//! ```
//! or taken from one of the standard E-series constants.

use std::path::Path;

use config::{Config, ConfigError, File, FileFormat};
use itertools::Itertools;

use crate::error::{DividerError, Result};

/// Decades each E-series mantissa is expanded over, in kΩ (10R to 9M1).
const DECADES_KOHM: &[f64] = &[1e-2, 1e-1, 1e0, 1e1, 1e2, 1e3];

const VALUES_KEYS: &[&str] = &["resistors.values", "Resistors.values"];
const THRESHOLD_KEYS: &[&str] = &["advisory.vin_threshold", "Advisory.vin_threshold"];

lazy_static! {
    /// Catalog of the E3 standard series
    pub static ref E3: ResistorCatalog = ResistorCatalog::series(&[1.0, 2.2, 4.7]);
    /// Catalog of the E6 standard series
    pub static ref E6: ResistorCatalog = ResistorCatalog::extend(&E3, &[1.5, 3.3, 6.8]);
    /// Catalog of the E12 standard series
    pub static ref E12: ResistorCatalog =
        ResistorCatalog::extend(&E6, &[1.2, 1.8, 2.7, 3.9, 5.6, 8.2]);
    /// Catalog of the E24 standard series
    pub static ref E24: ResistorCatalog = ResistorCatalog::extend(
        &E12,
        &[1.1, 1.3, 1.6, 2.0, 2.4, 3.0, 3.6, 4.3, 5.1, 6.2, 7.5, 9.1]
    );
}

/// An immutable list of resistor values in kΩ. Duplicates are kept; the order
/// only affects which of several equally good pairs is met first.
#[derive(Debug, Clone, PartialEq)]
pub struct ResistorCatalog {
    values: Box<[f64]>,
}

impl ResistorCatalog {
    /// Builds a catalog, rejecting an empty list and any value that is not a
    /// positive finite number.
    /// # Examples
    /// ```
    ///     # use divider_calc::ResistorCatalog;
    ///     let cat = ResistorCatalog::new(vec![1.0, 2.0, 4.7]).unwrap();
    ///     assert_eq!(cat.len(), 3);
    ///     assert!(ResistorCatalog::new(vec![]).is_err());
    ///     assert!(ResistorCatalog::new(vec![1.0, 0.0]).is_err());
    /// ```
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(DividerError::EmptyCatalog);
        }
        if let Some(&value) = values.iter().find(|v| !(v.is_finite() && **v > 0.0)) {
            return Err(DividerError::InvalidResistor { value });
        }
        Ok(ResistorCatalog {
            values: values.into_boxed_slice(),
        })
    }

    fn series(mantissas: &[f64]) -> Self {
        ResistorCatalog {
            values: mantissas
                .iter()
                .cartesian_product(DECADES_KOHM.iter())
                .map(|(val, dec)| val * dec)
                .collect::<Vec<f64>>()
                .into_boxed_slice(),
        }
    }

    fn extend(base: &ResistorCatalog, add: &[f64]) -> Self {
        ResistorCatalog {
            values: base
                .iter()
                .cloned()
                .chain(
                    add.iter()
                        .cartesian_product(DECADES_KOHM.iter())
                        .map(|(val, dec)| val * dec),
                )
                .collect::<Vec<f64>>()
                .into_boxed_slice(),
        }
    }

    /// Parses a comma separated list such as `"1.0, 2.2, 4.7"`.
    pub fn parse_list(list: &str) -> Result<Self> {
        let values = list
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| {
                entry
                    .parse::<f64>()
                    .map_err(|_| DividerError::MalformedCatalog {
                        entry: entry.to_string(),
                    })
            })
            .collect::<Result<Vec<f64>>>()?;
        Self::new(values)
    }

    /// Reads the `[Resistors] values` key of an INI file.
    pub fn from_ini_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading resistor catalog from {}", path.display());
        CatalogFile::load(path)?.catalog()
    }

    /// Same as [`ResistorCatalog::from_ini_file`] for INI text already in memory.
    pub fn from_ini_str(text: &str) -> Result<Self> {
        CatalogFile::parse(text)?.catalog()
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> + Clone {
        self.values.iter()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A parsed catalog INI file. Besides the resistor list it may carry an
/// `[Advisory] vin_threshold` entry.
#[derive(Debug)]
pub struct CatalogFile {
    config: Config,
}

impl CatalogFile {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DividerError::CatalogNotFound {
                path: path.display().to_string(),
            });
        }
        let config = Config::builder()
            .add_source(File::from(path).format(FileFormat::Ini))
            .build()?;
        Ok(CatalogFile { config })
    }

    pub fn parse(text: &str) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from_str(text, FileFormat::Ini))
            .build()?;
        Ok(CatalogFile { config })
    }

    fn lookup<T>(
        &self,
        keys: &[&str],
        get: impl Fn(&Config, &str) -> std::result::Result<T, ConfigError>,
    ) -> std::result::Result<T, ConfigError> {
        let mut last = ConfigError::NotFound(keys[0].to_string());
        for &key in keys {
            match get(&self.config, key) {
                Err(ConfigError::NotFound(missing)) => last = ConfigError::NotFound(missing),
                found => return found,
            }
        }
        Err(last)
    }

    pub fn catalog(&self) -> Result<ResistorCatalog> {
        match self.lookup(VALUES_KEYS, Config::get_string) {
            Ok(list) => ResistorCatalog::parse_list(&list),
            Err(ConfigError::NotFound(_)) => Err(DividerError::MissingCatalogKey),
            Err(e) => Err(e.into()),
        }
    }

    /// The advisory threshold in volts, if the file sets one.
    pub fn advisory_threshold(&self) -> Result<Option<f64>> {
        match self.lookup(THRESHOLD_KEYS, Config::get_float) {
            Ok(threshold) if threshold > 0.0 => Ok(Some(threshold)),
            Ok(threshold) => Err(DividerError::NonPositiveThreshold { threshold }),
            Err(ConfigError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_series_sizes() {
        assert_eq!(E3.len(), 3 * DECADES_KOHM.len());
        assert_eq!(E6.len(), 6 * DECADES_KOHM.len());
        assert_eq!(E12.len(), 12 * DECADES_KOHM.len());
        assert_eq!(E24.len(), 24 * DECADES_KOHM.len());
    }

    #[test]
    fn test_series_span() {
        let min = E12.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = E12.iter().cloned().fold(0.0, f64::max);
        assert_relative_eq!(min, 0.01);
        assert_relative_eq!(max, 8200.0);
        assert!(E24.iter().any(|v| (v - 4.7).abs() < 1e-12));
        let top = E24.iter().cloned().fold(0.0, f64::max);
        assert_relative_eq!(top, 9100.0);
    }

    #[test]
    fn test_parse_list() {
        let cat = ResistorCatalog::parse_list(" 1.0, 2.2 ,4.7,").unwrap();
        assert_eq!(cat.values(), &[1.0, 2.2, 4.7]);

        let dup = ResistorCatalog::parse_list("1, 1, 2").unwrap();
        assert_eq!(dup.len(), 3);

        match ResistorCatalog::parse_list("1.0, 4k7") {
            Err(DividerError::MalformedCatalog { entry }) => assert_eq!(entry, "4k7"),
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(
            ResistorCatalog::parse_list(" , "),
            Err(DividerError::EmptyCatalog)
        ));
        assert!(matches!(
            ResistorCatalog::parse_list("1.0, -2.0"),
            Err(DividerError::InvalidResistor { .. })
        ));
    }

    #[test]
    fn test_from_ini_str() {
        let cat = ResistorCatalog::from_ini_str("[Resistors]\nvalues = 1.0, 2.0, 4.7\n").unwrap();
        assert_eq!(cat.values(), &[1.0, 2.0, 4.7]);
    }

    #[test]
    fn test_missing_section() {
        assert!(matches!(
            ResistorCatalog::from_ini_str("[Capacitors]\nvalues = 1.0\n"),
            Err(DividerError::MissingCatalogKey)
        ));
        assert!(matches!(
            ResistorCatalog::from_ini_str("[Resistors]\nvalue = 1.0\n"),
            Err(DividerError::MissingCatalogKey)
        ));
    }

    #[test]
    fn test_advisory_threshold() {
        let file = CatalogFile::parse("[Resistors]\nvalues = 1\n[Advisory]\nvin_threshold = 5.0\n")
            .unwrap();
        assert_eq!(file.advisory_threshold().unwrap(), Some(5.0));

        let file = CatalogFile::parse("[Resistors]\nvalues = 1\n").unwrap();
        assert_eq!(file.advisory_threshold().unwrap(), None);

        let file = CatalogFile::parse("[Resistors]\nvalues = 1\n[Advisory]\nvin_threshold = 0\n")
            .unwrap();
        assert!(file.advisory_threshold().is_err());
    }
}
