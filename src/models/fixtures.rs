use std::str::FromStr;

use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::TransactionLine;
use crate::storage::{LoadReport, SalesTable};
use crate::types::Channel;

/// Builds a line with neutral defaults; tests overwrite the fields they care about.
pub fn create_line(transaction_id: &str, quantity: u32, unit_price: &str, discount: &str) -> Result<TransactionLine> {
    Ok(TransactionLine {
        transaction_id: transaction_id.to_string(),
        bill_id: format!("B-{transaction_id}"),
        date: NaiveDate::from_ymd_opt(2025, 1, 6).ok_or_else(|| anyhow::anyhow!("invalid fixture date"))?,
        store_id: "S1".to_string(),
        store_location: "S1".to_string(),
        customer_id: "C001".to_string(),
        customer_segment: "Regular".to_string(),
        product_id: "P001".to_string(),
        product_category: "Grocery".to_string(),
        product_name: "Rice 5kg".to_string(),
        quantity,
        unit_price: Decimal::from_str(unit_price)?,
        payment_method: "Cash".to_string(),
        channel: Channel::InStore,
        discount_applied: Decimal::from_str(discount)?
    })
}

/// The three lines used throughout the aggregation examples: 7.00, 8.00 and 6.25 of revenue.
pub fn example_lines() -> Result<Vec<TransactionLine>> {
    let mut first = create_line("T1", 2, "3.5", "0")?;
    let mut second = create_line("T2", 1, "10", "2")?;
    let mut third = create_line("T3", 5, "1.25", "0")?;

    first.store_location = "S1".to_string();
    second.store_location = "S1".to_string();
    third.store_location = "S2".to_string();

    Ok(vec![first, second, third])
}

/// Wraps lines in a table as if every one of them had been accepted by the loader.
pub fn create_table(lines: Vec<TransactionLine>) -> SalesTable {
    let report = LoadReport {
        columns: 15,
        accepted: lines.len(),
        rejected: 0,
        malformed: 0
    };

    SalesTable::new(lines, report)
}

pub fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| anyhow::anyhow!("invalid date {year}-{month}-{day}"))
}
