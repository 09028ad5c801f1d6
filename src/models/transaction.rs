use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::errors::InvalidInput;
use crate::types::{Channel, CustomerId, StoreId, TransactionId};

/// Represents a single row from the sales CSV file.
///
/// One line is one product entry within a bill. Lines are never mutated after
/// loading; every figure the aggregations report is derived from these fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionLine {
    /// Unique identifier of the line across the dataset.
    pub transaction_id: TransactionId,
    /// Checkout event this line belongs to. Several lines may share a bill.
    pub bill_id: String,
    pub date: NaiveDate,
    pub store_id: StoreId,
    pub store_location: String,
    pub customer_id: CustomerId,
    pub customer_segment: String,
    pub product_id: String,
    pub product_category: String,
    pub product_name: String,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub unit_price: Decimal,
    pub payment_method: String,
    pub channel: Channel,
    /// Absolute discount taken off the line subtotal.
    #[serde(with = "rust_decimal::serde::str")]
    pub discount_applied: Decimal
}

impl TransactionLine {
    /// Calculates quantity * unit price, before discount.
    ///
    /// Saturates at the `Decimal` bounds; `validate` rejects lines where that happens.
    pub fn subtotal(&self) -> Decimal {
        Decimal::from(self.quantity).saturating_mul(self.unit_price)
    }

    /// Calculates quantity * unit price, or `None` if it overflows.
    pub fn checked_subtotal(&self) -> Option<Decimal> {
        Decimal::from(self.quantity).checked_mul(self.unit_price)
    }

    /// Calculates the revenue of the line (subtotal - discount).
    pub fn line_revenue(&self) -> Decimal {
        self.subtotal().saturating_sub(self.discount_applied)
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Checks the line against the data model invariants.
    ///
    /// # Errors
    /// Returns `InvalidInput` if:
    /// - The quantity is zero.
    /// - The unit price or the discount is negative.
    /// - The subtotal does not fit in a `Decimal`.
    /// - The discount exceeds the line subtotal.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        if self.quantity == 0 {
            return Err(InvalidInput::zero_quantity(self))
        }

        if self.unit_price < Decimal::ZERO {
            return Err(InvalidInput::negative_unit_price(self))
        }

        if self.discount_applied < Decimal::ZERO {
            return Err(InvalidInput::negative_discount(self))
        }

        let Some(subtotal) = self.checked_subtotal() else {
            return Err(InvalidInput::subtotal_overflow(self))
        };

        if self.discount_applied > subtotal {
            return Err(InvalidInput::discount_exceeds_subtotal(self))
        }

        Ok(())
    }
}
