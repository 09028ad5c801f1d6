use std::str::FromStr;

use chrono::NaiveDate;

use crate::aggregation::SalesFilter;
use crate::console::errors::InputError;
use crate::types::ChannelFilter;

/// Raw answers to the filter prompts, one per dimension.
#[derive(Debug, Clone, Default)]
pub struct FilterAnswers {
    pub start: String,
    pub end: String,
    pub store_locations: String,
    pub channel: String,
    pub categories: String
}

/// Turns the prompt answers into a filter. Blank answers leave a dimension unrestricted.
pub fn parse_filter(answers: &FilterAnswers) -> Result<SalesFilter, InputError> {
    let start = parse_optional_date(&answers.start)?;
    let end = parse_optional_date(&answers.end)?;

    if let (Some(start), Some(end)) = (start, end) {
        if start > end {
            return Err(InputError::InvertedDateRange { start, end });
        }
    }

    Ok(SalesFilter::new()
        .with_date_range(start, end)
        .with_store_locations(parse_list(&answers.store_locations))
        .with_channel(ChannelFilter::from_str(&answers.channel)?)
        .with_categories(parse_list(&answers.categories)))
}

pub fn parse_optional_date(value: &str) -> Result<Option<NaiveDate>, InputError> {
    let value = value.trim();

    if value.is_empty() {
        return Ok(None);
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| InputError::InvalidDate { value: value.to_string() })
}

/// Splits a comma-separated answer, dropping blank entries.
pub fn parse_list(value: &str) -> Vec<String> {
    value.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
