use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;

use crate::aggregation::{GroupKey, Metric};
use crate::models::TransactionLine;

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun
];

/// Revenue accumulated for one distinct value of a `GroupKey`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupTotal {
    pub key: String,
    pub revenue: Decimal
}

/// One entry of a top-N ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedGroup {
    pub key: String,
    pub value: Decimal
}

/// Revenue per group, ordered by descending revenue and then ascending key.
///
/// Only groups that have at least one line are present.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupedRevenue {
    groups: Vec<GroupTotal>
}

impl GroupedRevenue {
    pub fn iter(&self) -> impl Iterator<Item = &GroupTotal> {
        self.groups.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Sum over every group. Equals `total_revenue` of the same lines.
    pub fn total(&self) -> Decimal {
        self.groups.iter().fold(Decimal::ZERO, |total, group| total.saturating_add(group.revenue))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SummaryStatistics {
    pub total_revenue: Decimal,
    /// Number of distinct transaction ids.
    pub transaction_count: usize,
    /// Zero when there are no transactions.
    pub average_revenue_per_transaction: Decimal,
    pub unique_customer_count: usize,
    pub unique_product_count: usize
}

pub fn total_revenue<'a, I>(lines: I) -> Decimal
where
    I: IntoIterator<Item = &'a TransactionLine>
{
    lines.into_iter().fold(Decimal::ZERO, |total, line| total.saturating_add(line.line_revenue()))
}

pub fn revenue_by_group<'a, I>(lines: I, key: GroupKey) -> GroupedRevenue
where
    I: IntoIterator<Item = &'a TransactionLine>
{
    let groups = rank(accumulate(lines, key, Metric::Revenue))
        .into_iter()
        .map(|(key, revenue)| GroupTotal { key, revenue })
        .collect();

    GroupedRevenue { groups }
}

/// Ranks the groups of `key` by `metric` and keeps the first `n`.
///
/// A non-positive `n` yields an empty ranking.
pub fn top_n<'a, I>(lines: I, key: GroupKey, n: i64, metric: Metric) -> Vec<RankedGroup>
where
    I: IntoIterator<Item = &'a TransactionLine>
{
    let Ok(limit) = usize::try_from(n) else {
        return Vec::new()
    };

    if limit == 0 {
        return Vec::new()
    }

    let mut ranking = rank(accumulate(lines, key, metric));
    ranking.truncate(limit);

    ranking.into_iter()
        .map(|(key, value)| RankedGroup { key, value })
        .collect()
}

pub fn summary_statistics<'a, I>(lines: I) -> SummaryStatistics
where
    I: IntoIterator<Item = &'a TransactionLine>
{
    let mut total_revenue = Decimal::ZERO;
    let mut transactions = HashSet::new();
    let mut customers = HashSet::new();
    let mut products = HashSet::new();

    for line in lines {
        total_revenue = total_revenue.saturating_add(line.line_revenue());
        transactions.insert(line.transaction_id.as_str());
        customers.insert(line.customer_id.as_str());
        products.insert(line.product_id.as_str());
    }

    let transaction_count = transactions.len();
    let average_revenue_per_transaction = if transaction_count == 0 {
        Decimal::ZERO
    } else {
        total_revenue / Decimal::from(transaction_count as u64)
    };

    SummaryStatistics {
        total_revenue,
        transaction_count,
        average_revenue_per_transaction,
        unique_customer_count: customers.len(),
        unique_product_count: products.len()
    }
}

/// Revenue per calendar date, in chronological order.
pub fn daily_revenue<'a, I>(lines: I) -> Vec<(NaiveDate, Decimal)>
where
    I: IntoIterator<Item = &'a TransactionLine>
{
    let mut totals = BTreeMap::<NaiveDate, Decimal>::new();

    for line in lines {
        let total = totals.entry(line.date).or_default();
        *total = total.saturating_add(line.line_revenue());
    }

    totals.into_iter().collect()
}

/// Revenue per day of the week, Monday first. Days without lines are absent.
pub fn revenue_by_weekday<'a, I>(lines: I) -> Vec<(Weekday, Decimal)>
where
    I: IntoIterator<Item = &'a TransactionLine>
{
    let mut totals: [Option<Decimal>; 7] = [None; 7];

    for line in lines {
        let slot = &mut totals[line.weekday().num_days_from_monday() as usize];
        *slot = Some(slot.unwrap_or_default().saturating_add(line.line_revenue()));
    }

    WEEKDAYS.iter()
        .zip(totals)
        .filter_map(|(weekday, total)| total.map(|revenue| (*weekday, revenue)))
        .collect()
}

fn accumulate<'a, I>(lines: I, key: GroupKey, metric: Metric) -> HashMap<String, Decimal>
where
    I: IntoIterator<Item = &'a TransactionLine>
{
    let mut totals = HashMap::<String, Decimal>::new();

    for line in lines {
        let group = key.value_of(line);
        let value = metric.value_of(line);

        if let Some(total) = totals.get_mut(group.as_ref()) {
            *total = total.saturating_add(value);
        } else {
            totals.insert(group.into_owned(), value);
        }
    }

    totals
}

fn rank(totals: HashMap<String, Decimal>) -> Vec<(String, Decimal)> {
    let mut ranking: Vec<(String, Decimal)> = totals.into_iter().collect();
    ranking.sort_by(|left, right| right.1.cmp(&left.1).then_with(|| left.0.cmp(&right.0)));
    ranking
}
