use std::io::{self, Write};

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;

use crate::aggregation::{
    weekday_name, DatasetOverview, GroupTotal, GroupedRevenue, Metric, RankedGroup, SummaryStatistics
};
use crate::console::format::{format_count, format_currency};
use crate::models::TransactionLine;
use crate::storage::SalesTable;

const RULE_WIDTH: usize = 60;
const SAMPLE_RULE_WIDTH: usize = 105;

pub fn write_banner<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "{}", "█".repeat(RULE_WIDTH))?;
    writeln!(output, "█  URBANMART RETAIL INSIGHTS - CONSOLE APPLICATION       █")?;
    writeln!(output, "█  Data Analytics & Business Intelligence Project        █")?;
    writeln!(output, "{}", "█".repeat(RULE_WIDTH))?;
    writeln!(output)
}

pub fn write_welcome<W: Write>(output: &mut W, store_name: &str) -> io::Result<()> {
    writeln!(output, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(output, "Welcome to {store_name} Sales Analysis")?;
    writeln!(output, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(output)
}

/// Prints the sanity checks run right after loading.
pub fn write_overview<W: Write>(output: &mut W, table: &SalesTable, overview: &DatasetOverview) -> io::Result<()> {
    let report = table.report();

    writeln!(output, "--- BASIC SANITY CHECKS ---")?;
    writeln!(output, "Total number of rows: {}", overview.row_count)?;
    writeln!(output, "Total number of columns: {}", report.columns)?;

    if report.rejected > 0 || report.malformed > 0 {
        writeln!(output, "Skipped rows: {} rejected, {} malformed", report.rejected, report.malformed)?;
    }

    writeln!(output, "Unique store IDs: {}", overview.store_ids.join(", "))?;

    match overview.date_range {
        Some((first, last)) => writeln!(output, "Date range: {first} to {last}")?,
        None => writeln!(output, "Date range: no data")?
    }

    writeln!(output)?;
    writeln!(output, "--- DATASET VOCABULARY ---")?;
    writeln!(output, "Product categories: {}", overview.categories.join(", "))?;
    writeln!(output, "Store ID to location mapping:")?;

    for (store_id, location) in &overview.store_mapping {
        writeln!(output, "  {store_id} → {location}")?;
    }

    writeln!(output, "Channel distribution:")?;
    writeln!(output, "  Online transactions: {}", overview.online_count)?;
    writeln!(output, "  In-store transactions: {}", overview.in_store_count)?;
    writeln!(output)
}

pub fn write_heading<W: Write>(output: &mut W, title: &str) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "--- {} ---", title.to_uppercase())
}

pub fn write_grouped<W: Write>(output: &mut W, grouped: &GroupedRevenue) -> io::Result<()> {
    if grouped.is_empty() {
        return writeln!(output, "No sales match the current filters.");
    }

    for group in grouped.iter() {
        write_group_row(output, group)?;
    }

    writeln!(output, "{}", "-".repeat(RULE_WIDTH / 2))?;
    write_group_row(output, &GroupTotal { key: "Total".to_string(), revenue: grouped.total() })
}

fn write_group_row<W: Write>(output: &mut W, group: &GroupTotal) -> io::Result<()> {
    writeln!(output, "{:20} : {}", group.key, format_currency(group.revenue))
}

/// Prints a ranking table; `extra` supplies an optional annotation column per entry.
pub fn write_ranking<W, F>(output: &mut W, key_label: &str, metric: Metric, ranking: &[RankedGroup], extra: F) -> io::Result<()>
where
    W: Write,
    F: Fn(&RankedGroup) -> Option<String>
{
    if ranking.is_empty() {
        return writeln!(output, "No sales match the current filters.");
    }

    let value_label = match metric {
        Metric::Revenue => "Revenue",
        Metric::Quantity => "Units"
    };

    writeln!(output, "{:<6} {:<30} {:<15}", "Rank", key_label, value_label)?;
    writeln!(output, "{}", "-".repeat(RULE_WIDTH))?;

    for (index, entry) in ranking.iter().enumerate() {
        let value = match metric {
            Metric::Revenue => format_currency(entry.value),
            Metric::Quantity => entry.value.normalize().to_string()
        };

        match extra(entry) {
            Some(annotation) => writeln!(output, "{:<6} {:<30} {:<15} {}", index + 1, entry.key, value, annotation)?,
            None => writeln!(output, "{:<6} {:<30} {}", index + 1, entry.key, value)?
        }
    }

    Ok(())
}

pub fn write_statistics<W: Write>(output: &mut W, statistics: &SummaryStatistics) -> io::Result<()> {
    writeln!(output, "Total Transactions: {}", format_count(statistics.transaction_count))?;
    writeln!(output, "Total Revenue: {}", format_currency(statistics.total_revenue))?;
    writeln!(output, "Average Transaction Value: {}", format_currency(statistics.average_revenue_per_transaction))?;
    writeln!(output, "Unique Customers: {}", format_count(statistics.unique_customer_count))?;
    writeln!(output, "Unique Products: {}", format_count(statistics.unique_product_count))
}

pub fn write_daily_trend<W: Write>(output: &mut W, daily: &[(NaiveDate, Decimal)]) -> io::Result<()> {
    if daily.is_empty() {
        return writeln!(output, "No sales match the current filters.");
    }

    for (date, revenue) in daily {
        writeln!(output, "{date} : {}", format_currency(*revenue))?;
    }

    Ok(())
}

pub fn write_weekdays<W: Write>(output: &mut W, weekdays: &[(Weekday, Decimal)]) -> io::Result<()> {
    if weekdays.is_empty() {
        return writeln!(output, "No sales match the current filters.");
    }

    for (weekday, revenue) in weekdays {
        writeln!(output, "{:20} : {}", weekday_name(*weekday), format_currency(*revenue))?;
    }

    Ok(())
}

/// Prints the first `limit` lines of a view with their prices and revenue.
pub fn write_sample<W: Write>(output: &mut W, lines: &[&TransactionLine], limit: usize) -> io::Result<()> {
    if lines.is_empty() {
        return writeln!(output, "No sales match the current filters.");
    }

    writeln!(
        output,
        "{:<12} {:<10} {:<14} {:<24} {:>4} {:>12} {:>10} {:>12}",
        "Date", "ID", "Store", "Product", "Qty", "Unit Price", "Discount", "Revenue"
    )?;
    writeln!(output, "{}", "-".repeat(SAMPLE_RULE_WIDTH))?;

    for line in lines.iter().take(limit) {
        writeln!(
            output,
            "{:<12} {:<10} {:<14} {:<24} {:>4} {:>12} {:>10} {:>12}",
            line.date.to_string(),
            line.transaction_id,
            line.store_location,
            line.product_name,
            line.quantity,
            format_currency(line.unit_price),
            format_currency(line.discount_applied),
            format_currency(line.line_revenue())
        )?;
    }

    writeln!(output, "Showing {} of {} records", lines.len().min(limit), lines.len())
}
