//! Summary of what a normalization pass changed

/// Counters collected while normalizing a table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizeReport {
    /// Rows processed (equal in input and output)
    pub rows: usize,
    /// Rows whose address produced a non-null `Adresse1`
    pub addresses_split: usize,
    /// Rows whose address yielded a postal code
    pub postal_codes_found: usize,
    /// Codes whose text changed
    pub codes_rewritten: usize,
    /// Cells cut short, per column in the order columns were processed
    pub truncated: Vec<(String, usize)>,
}

impl NormalizeReport {
    pub fn new(rows: usize) -> Self {
        Self {
            rows,
            ..Default::default()
        }
    }

    /// Add `count` truncated cells to a column's tally
    pub fn record_truncated(&mut self, column: &str, count: usize) {
        if count == 0 {
            return;
        }
        match self.truncated.iter_mut().find(|(name, _)| name == column) {
            Some(entry) => entry.1 += count,
            None => self.truncated.push((column.to_string(), count)),
        }
    }

    pub fn total_truncated(&self) -> usize {
        self.truncated.iter().map(|(_, n)| n).sum()
    }

    pub fn truncated_in(&self, column: &str) -> usize {
        self.truncated
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}
