use std::collections::BTreeSet;
use std::fmt::{self, Display, Formatter};

use chrono::NaiveDate;

use crate::models::TransactionLine;
use crate::types::ChannelFilter;

/// Set of constraints a line must satisfy to be part of a view.
///
/// Every dimension left empty (no date bound, no location, no category,
/// `ChannelFilter::All`) places no restriction on the lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalesFilter {
    /// Inclusive lower date bound.
    pub start: Option<NaiveDate>,
    /// Inclusive upper date bound.
    pub end: Option<NaiveDate>,
    pub store_locations: BTreeSet<String>,
    pub channel: ChannelFilter,
    pub categories: BTreeSet<String>
}

impl SalesFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_date_range(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    pub fn with_store_locations<I, S>(mut self, locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        self.store_locations = locations.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_channel(mut self, channel: ChannelFilter) -> Self {
        self.channel = channel;
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_unrestricted(&self) -> bool {
        self.start.is_none()
            && self.end.is_none()
            && self.store_locations.is_empty()
            && self.channel == ChannelFilter::All
            && self.categories.is_empty()
    }

    pub fn matches(&self, line: &TransactionLine) -> bool {
        if self.start.is_some_and(|start| line.date < start) {
            return false
        }

        if self.end.is_some_and(|end| line.date > end) {
            return false
        }

        if !self.store_locations.is_empty() && !self.store_locations.contains(&line.store_location) {
            return false
        }

        if !self.channel.matches(line.channel) {
            return false
        }

        self.categories.is_empty() || self.categories.contains(&line.product_category)
    }

    /// Returns the matching lines in their original order. The input is left untouched.
    pub fn apply<'a, I>(&self, lines: I) -> Vec<&'a TransactionLine>
    where
        I: IntoIterator<Item = &'a TransactionLine>
    {
        lines.into_iter().filter(|line| self.matches(line)).collect()
    }
}

impl Display for SalesFilter {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        if self.is_unrestricted() {
            return formatter.write_str("none");
        }

        let mut parts = Vec::new();

        if let Some(start) = self.start {
            parts.push(format!("from {start}"));
        }

        if let Some(end) = self.end {
            parts.push(format!("to {end}"));
        }

        if !self.store_locations.is_empty() {
            parts.push(format!("locations: {}", join(&self.store_locations)));
        }

        if self.channel != ChannelFilter::All {
            parts.push(format!("channel: {}", self.channel));
        }

        if !self.categories.is_empty() {
            parts.push(format!("categories: {}", join(&self.categories)));
        }

        formatter.write_str(&parts.join("; "))
    }
}

fn join(values: &BTreeSet<String>) -> String {
    values.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}
