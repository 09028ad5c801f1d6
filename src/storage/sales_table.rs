use crate::models::TransactionLine;

/// Counters describing what happened to the rows of a loaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    /// Number of header fields.
    pub columns: usize,
    pub accepted: usize,
    /// Rows that parsed but broke a data model invariant.
    pub rejected: usize,
    /// Rows that could not be parsed at all.
    pub malformed: usize
}

/// Immutable in-memory snapshot of the accepted transaction lines, in file order.
#[derive(Debug, Clone, Default)]
pub struct SalesTable {
    lines: Vec<TransactionLine>,
    report: LoadReport
}

impl SalesTable {
    pub fn new(lines: Vec<TransactionLine>, report: LoadReport) -> Self {
        Self { lines, report }
    }

    pub fn lines(&self) -> &[TransactionLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }
}
