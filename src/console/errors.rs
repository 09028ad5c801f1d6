use chrono::NaiveDate;
use thiserror::Error;

use crate::types::ChannelError;

/// Problems with a filter typed at the menu prompt.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        value: String
    },
    #[error("Start date {start} is after end date {end}")]
    InvertedDateRange {
        start: NaiveDate,
        end: NaiveDate
    },
    #[error(transparent)]
    Channel(#[from] ChannelError)
}
