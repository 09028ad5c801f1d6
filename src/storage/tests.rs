use super::errors::LoadError;
use super::SalesLoader;

use std::io::Write;
use std::str::FromStr;

use anyhow::Result;
use rust_decimal::Decimal;
use tempfile::NamedTempFile;

use crate::models::fixtures::{create_table, example_lines};
use crate::types::Channel;

const HEADER: &str = "transaction_id,bill_id,date,store_id,store_location,customer_id,customer_segment,product_id,product_category,product_name,quantity,unit_price,payment_method,channel,discount_applied";

fn create_temporary_csv(rows: &[&str]) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;

    writeln!(file, "{HEADER}")?;

    for row in rows {
        writeln!(file, "{row}")?;
    }

    Ok(file)
}

#[tokio::test]
async fn test_loader_reads_valid_csv_in_file_order() -> Result<()> {
    let file = create_temporary_csv(&[
        "T1,B1,2025-01-06,S1,Downtown,C1,Loyal,P1,Grocery,Rice 5kg,2,3.50,Card,In-store,0",
        "T2,B1,2025-01-06,S1,Downtown,C1,Loyal,P2,Dairy,Milk 1L,1,10.00,Card,In-store,2.00",
        "T3,B2,2025-01-07,S2,Uptown,C2,New,P3,Snacks,Crisps,5,1.25,UPI,Online,0",
    ])?;

    let table = SalesLoader::new().load(file.path()).await?;
    let ids: Vec<&str> = table.lines().iter().map(|line| line.transaction_id.as_str()).collect();

    assert_eq!(ids, vec!["T1", "T2", "T3"]);
    assert_eq!(table.report().columns, 15);
    assert_eq!(table.report().accepted, 3);
    assert_eq!(table.lines()[1].line_revenue(), Decimal::from_str("8.00")?);
    assert_eq!(table.lines()[2].channel, Channel::Online);

    Ok(())
}

#[tokio::test]
async fn test_loader_trims_whitespace_around_fields() -> Result<()> {
    let file = create_temporary_csv(&[
        " T1 , B1 , 2025-01-06 , S1 , Downtown , C1 , Loyal , P1 , Grocery , Rice 5kg , 2 , 3.50 , Card , In-store , 0 ",
    ])?;

    let table = SalesLoader::new().load(file.path()).await?;

    assert_eq!(table.len(), 1);
    assert_eq!(table.lines()[0].store_location, "Downtown");
    assert_eq!(table.lines()[0].unit_price, Decimal::from_str("3.5")?);

    Ok(())
}

#[tokio::test]
async fn test_loader_skips_malformed_rows() -> Result<()> {
    let file = create_temporary_csv(&[
        "T1,B1,2025-01-06,S1,Downtown,C1,Loyal,P1,Grocery,Rice 5kg,2,3.50,Card,In-store,0",
        "T2,B1,not-a-date,S1,Downtown,C1,Loyal,P2,Dairy,Milk 1L,1,10.00,Card,In-store,0",
        "T3,B2,2025-01-07,S2,Uptown,C2,New,P3,Snacks,Crisps,-5,1.25,UPI,Online,0",
        "T4,B2,2025-01-07,S2,Uptown,C2,New,P3,Snacks,Crisps,5,1.25,UPI,Carrier pigeon,0",
        "T5,B3,2025-01-08",
        "T6,B4,2025-01-08,S2,Uptown,C2,New,P3,Snacks,Crisps,1,1.25,UPI,Online,0",
    ])?;

    let table = SalesLoader::new().load(file.path()).await?;
    let ids: Vec<&str> = table.lines().iter().map(|line| line.transaction_id.as_str()).collect();

    assert_eq!(ids, vec!["T1", "T6"]);
    assert_eq!(table.report().malformed, 4);
    assert_eq!(table.report().rejected, 0);

    Ok(())
}

#[tokio::test]
async fn test_loader_rejects_invalid_lines() -> Result<()> {
    let file = create_temporary_csv(&[
        "T1,B1,2025-01-06,S1,Downtown,C1,Loyal,P1,Grocery,Rice 5kg,0,3.50,Card,In-store,0",
        "T2,B1,2025-01-06,S1,Downtown,C1,Loyal,P2,Dairy,Milk 1L,1,10.00,Card,In-store,10.01",
        "T3,B2,2025-01-07,S2,Uptown,C2,New,P3,Snacks,Crisps,5,-1.25,UPI,Online,0",
        "T4,B2,2025-01-07,S2,Uptown,C2,New,P3,Snacks,Crisps,5,1.25,UPI,Online,-1",
        "T5,B3,2025-01-08,S2,Uptown,C2,New,P3,Snacks,Crisps,1,1.25,UPI,Online,1.25",
    ])?;

    let table = SalesLoader::new().load(file.path()).await?;

    assert_eq!(table.len(), 1);
    assert_eq!(table.lines()[0].transaction_id, "T5");
    assert_eq!(table.report().rejected, 4);

    Ok(())
}

#[tokio::test]
async fn test_loader_rejects_line_whose_subtotal_overflows() -> Result<()> {
    let file = create_temporary_csv(&[
        "T1,B1,2025-01-06,S1,Downtown,C1,Loyal,P1,Grocery,Rice 5kg,2,79228162514264337593543950335,Card,In-store,0",
        "T2,B1,2025-01-06,S1,Downtown,C1,Loyal,P2,Dairy,Milk 1L,1,10.00,Card,In-store,0",
    ])?;

    let table = SalesLoader::new().load(file.path()).await?;

    assert_eq!(table.len(), 1);
    assert_eq!(table.lines()[0].transaction_id, "T2");
    assert_eq!(table.report().rejected, 1);
    assert_eq!(table.report().malformed, 0);

    Ok(())
}

#[tokio::test]
async fn test_loader_rejects_duplicate_transaction_ids() -> Result<()> {
    let file = create_temporary_csv(&[
        "T1,B1,2025-01-06,S1,Downtown,C1,Loyal,P1,Grocery,Rice 5kg,2,3.50,Card,In-store,0",
        "T1,B9,2025-01-09,S2,Uptown,C9,New,P9,Snacks,Crisps,9,9.00,UPI,Online,0",
    ])?;

    let table = SalesLoader::new().load(file.path()).await?;

    assert_eq!(table.len(), 1);
    assert_eq!(table.lines()[0].bill_id, "B1");
    assert_eq!(table.report().rejected, 1);

    Ok(())
}

#[tokio::test]
async fn test_loader_handles_more_rows_than_backpressure() -> Result<()> {
    let rows: Vec<String> = (0..50)
        .map(|index| format!("T{index},B{index},2025-01-06,S1,Downtown,C1,Loyal,P1,Grocery,Rice 5kg,1,1.00,Card,In-store,0"))
        .collect();
    let row_refs: Vec<&str> = rows.iter().map(String::as_str).collect();
    let file = create_temporary_csv(&row_refs)?;

    let table = SalesLoader::new().with_backpressure(2).load(file.path()).await?;

    assert_eq!(table.len(), 50);

    Ok(())
}

#[tokio::test]
async fn test_loader_fails_on_missing_file() {
    let result = SalesLoader::new().load("missing_sales.csv").await;

    assert!(matches!(result, Err(LoadError::Open { .. })));
}

#[tokio::test]
async fn test_loader_fails_on_empty_file() -> Result<()> {
    let file = NamedTempFile::new()?;
    let result = SalesLoader::new().load(file.path()).await;

    assert!(matches!(result, Err(LoadError::MissingHeader { .. })));

    Ok(())
}

#[tokio::test]
async fn test_loader_accepts_header_only_file() -> Result<()> {
    let file = create_temporary_csv(&[])?;
    let table = SalesLoader::new().load(file.path()).await?;

    assert!(table.is_empty());
    assert_eq!(table.report().columns, 15);

    Ok(())
}

#[test]
fn test_table_keeps_lines_and_report() -> Result<()> {
    let table = create_table(example_lines()?);

    assert_eq!(table.len(), 3);
    assert_eq!(table.report().accepted, 3);
    assert_eq!(table.report().rejected, 0);

    Ok(())
}
