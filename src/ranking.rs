//! Orders the achievable pairs for display: highest output first without ever
//! overshooting the target.

use itertools::Itertools;

use crate::search::Candidate;

/// Rows shown in the achievable voltages table.
pub const DEFAULT_TABLE_ROWS: usize = 15;

#[derive(Debug, Clone, PartialEq)]
pub struct AchievableTable {
    rows: Vec<Candidate>,
    omitted: usize,
}

impl AchievableTable {
    /// Keeps candidates with `vout <= vout_desired`, sorted by descending
    /// `vout` then ascending `r1 + r2`, truncated to `limit` rows.
    pub fn build(achievable: &[Candidate], vout_desired: f64, limit: usize) -> Self {
        let mut rows: Vec<Candidate> = achievable
            .iter()
            .filter(|c| c.vout <= vout_desired)
            .cloned()
            .sorted_by(|a, b| {
                b.vout
                    .total_cmp(&a.vout)
                    .then_with(|| a.sum().total_cmp(&b.sum()))
            })
            .collect();
        let omitted = rows.len().saturating_sub(limit);
        rows.truncate(limit);
        AchievableTable { rows, omitted }
    }

    pub fn rows(&self) -> &[Candidate] {
        &self.rows
    }

    /// Matching pairs left out of the table.
    pub fn omitted(&self) -> usize {
        self.omitted
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
