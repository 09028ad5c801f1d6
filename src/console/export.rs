use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use csv::WriterBuilder;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::TransactionLine;
use crate::types::Channel;

const EXPORT_HEADER: [&str; 16] = [
    "transaction_id",
    "bill_id",
    "date",
    "store_id",
    "store_location",
    "customer_id",
    "customer_segment",
    "product_id",
    "product_category",
    "product_name",
    "quantity",
    "unit_price",
    "payment_method",
    "channel",
    "discount_applied",
    "line_revenue"
];

/// A transaction line as written to an export file, with its revenue appended.
#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    transaction_id: &'a str,
    bill_id: &'a str,
    date: NaiveDate,
    store_id: &'a str,
    store_location: &'a str,
    customer_id: &'a str,
    customer_segment: &'a str,
    product_id: &'a str,
    product_category: &'a str,
    product_name: &'a str,
    quantity: u32,
    #[serde(with = "rust_decimal::serde::str")]
    unit_price: Decimal,
    payment_method: &'a str,
    channel: Channel,
    #[serde(with = "rust_decimal::serde::str")]
    discount_applied: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    line_revenue: Decimal
}

impl<'a> From<&'a TransactionLine> for ExportRow<'a> {
    fn from(line: &'a TransactionLine) -> Self {
        Self {
            transaction_id: &line.transaction_id,
            bill_id: &line.bill_id,
            date: line.date,
            store_id: &line.store_id,
            store_location: &line.store_location,
            customer_id: &line.customer_id,
            customer_segment: &line.customer_segment,
            product_id: &line.product_id,
            product_category: &line.product_category,
            product_name: &line.product_name,
            quantity: line.quantity,
            unit_price: line.unit_price,
            payment_method: &line.payment_method,
            channel: line.channel,
            discount_applied: line.discount_applied,
            line_revenue: line.line_revenue()
        }
    }
}

/// Writes the lines as CSV and returns how many rows were written.
///
/// The header row is always written, even when there are no lines.
pub fn export_csv<'a, I, W>(lines: I, writer: W) -> Result<usize>
where
    I: IntoIterator<Item = &'a TransactionLine>,
    W: Write
{
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    let mut written = 0;

    writer.write_record(EXPORT_HEADER)?;

    for line in lines {
        writer.serialize(ExportRow::from(line))?;
        written += 1;
    }

    writer.flush()?;

    Ok(written)
}

pub fn export_to_path<'a, I>(lines: I, path: &Path) -> Result<usize>
where
    I: IntoIterator<Item = &'a TransactionLine>
{
    let file = File::create(path).with_context(|| format!("Unable to create export file [{}]", path.display()))?;

    export_csv(lines, file).with_context(|| format!("Unable to write export file [{}]", path.display()))
}
