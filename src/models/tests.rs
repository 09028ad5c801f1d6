use super::InvalidInput;
use super::fixtures::{create_line, date};

use std::str::FromStr;

use anyhow::Result;
use chrono::Weekday;
use rust_decimal::Decimal;

#[test]
fn test_line_revenue_subtracts_discount_from_subtotal() -> Result<()> {
    let line = create_line("T1", 1, "10", "2")?;

    assert_eq!(line.subtotal(), Decimal::from_str("10")?);
    assert_eq!(line.line_revenue(), Decimal::from_str("8")?);

    Ok(())
}

#[test]
fn test_line_revenue_is_exact_for_fractional_prices() -> Result<()> {
    let line = create_line("T1", 5, "1.25", "0")?;

    assert_eq!(line.line_revenue(), Decimal::from_str("6.25")?);

    Ok(())
}

#[test]
fn test_weekday_is_derived_from_date() -> Result<()> {
    let mut line = create_line("T1", 1, "1", "0")?;
    line.date = date(2025, 1, 11)?;

    assert_eq!(line.weekday(), Weekday::Sat);

    Ok(())
}

#[test]
fn test_valid_line_passes_validation() -> Result<()> {
    let line = create_line("T1", 3, "4.99", "1.50")?;

    assert!(line.validate().is_ok());

    Ok(())
}

#[test]
fn test_discount_equal_to_subtotal_is_accepted() -> Result<()> {
    let line = create_line("T1", 2, "5", "10")?;

    assert!(line.validate().is_ok());
    assert!(line.line_revenue().is_zero());

    Ok(())
}

#[test]
fn test_zero_quantity_is_rejected() -> Result<()> {
    let line = create_line("T1", 0, "5", "0")?;

    assert!(matches!(line.validate(), Err(InvalidInput::ZeroQuantity { .. })));

    Ok(())
}

#[test]
fn test_negative_unit_price_is_rejected() -> Result<()> {
    let line = create_line("T1", 1, "-0.01", "0")?;

    assert!(matches!(line.validate(), Err(InvalidInput::NegativeUnitPrice { .. })));

    Ok(())
}

#[test]
fn test_negative_discount_is_rejected() -> Result<()> {
    let line = create_line("T1", 1, "5", "-1")?;

    assert!(matches!(line.validate(), Err(InvalidInput::NegativeDiscount { .. })));

    Ok(())
}

#[test]
fn test_discount_above_subtotal_is_rejected() -> Result<()> {
    let line = create_line("T7", 2, "5", "10.01")?;
    let result = line.validate();

    assert!(matches!(result, Err(InvalidInput::DiscountExceedsSubtotal { .. })));
    assert_eq!(
        result.err().map(|error| error.to_string()),
        Some("Discount [10.01] exceeds subtotal [10] for transaction [T7]".to_string())
    );

    Ok(())
}

#[test]
fn test_overflowing_subtotal_is_rejected() -> Result<()> {
    let line = create_line("T1", 2, "79228162514264337593543950335", "0")?;

    assert_eq!(line.checked_subtotal(), None);
    assert_eq!(line.subtotal(), Decimal::MAX);
    assert!(matches!(line.validate(), Err(InvalidInput::SubtotalOverflow { quantity: 2, .. })));

    Ok(())
}
