mod aggregator;
mod filter;
mod overview;

use std::borrow::Cow;

use chrono::Weekday;
use rust_decimal::Decimal;

use crate::models::TransactionLine;

pub use aggregator::{
    daily_revenue, revenue_by_group, revenue_by_weekday, summary_statistics, top_n, total_revenue, GroupTotal,
    GroupedRevenue, RankedGroup, SummaryStatistics
};
pub use filter::SalesFilter;
pub use overview::{customer_segments, dataset_overview, DatasetOverview};

/// Attribute of a transaction line that revenue can be grouped by.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GroupKey {
    StoreLocation,
    StoreId,
    Category,
    Product,
    Customer,
    Channel,
    PaymentMethod,
    Segment,
    DayOfWeek
}

impl GroupKey {
    /// Extracts the grouping value of a line for this key.
    pub fn value_of<'a>(&self, line: &'a TransactionLine) -> Cow<'a, str> {
        match self {
            GroupKey::StoreLocation => Cow::Borrowed(&line.store_location),
            GroupKey::StoreId => Cow::Borrowed(&line.store_id),
            GroupKey::Category => Cow::Borrowed(&line.product_category),
            GroupKey::Product => Cow::Borrowed(&line.product_name),
            GroupKey::Customer => Cow::Borrowed(&line.customer_id),
            GroupKey::Channel => Cow::Borrowed(line.channel.as_str()),
            GroupKey::PaymentMethod => Cow::Borrowed(&line.payment_method),
            GroupKey::Segment => Cow::Borrowed(&line.customer_segment),
            GroupKey::DayOfWeek => Cow::Borrowed(weekday_name(line.weekday()))
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GroupKey::StoreLocation => "Store Location",
            GroupKey::StoreId => "Store ID",
            GroupKey::Category => "Product Category",
            GroupKey::Product => "Product Name",
            GroupKey::Customer => "Customer ID",
            GroupKey::Channel => "Channel",
            GroupKey::PaymentMethod => "Payment Method",
            GroupKey::Segment => "Customer Segment",
            GroupKey::DayOfWeek => "Day of Week"
        }
    }
}

/// Quantity a ranking is ordered by.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum Metric {
    #[default]
    Revenue,
    Quantity
}

impl Metric {
    pub fn value_of(&self, line: &TransactionLine) -> Decimal {
        match self {
            Metric::Revenue => line.line_revenue(),
            Metric::Quantity => Decimal::from(line.quantity)
        }
    }
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday"
    }
}
