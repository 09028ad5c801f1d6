use crate::models::TransactionLine;
use crate::types::TransactionId;
use rust_decimal::Decimal;
use thiserror::Error;

/// A transaction line that violates the data model and must not reach the aggregations.
#[derive(Debug, Error, PartialEq)]
pub enum InvalidInput {
    #[error("Quantity must be positive for transaction [{transaction_id}]")]
    ZeroQuantity {
        transaction_id: TransactionId
    },
    #[error("Unit price [{unit_price}] is negative for transaction [{transaction_id}]")]
    NegativeUnitPrice {
        transaction_id: TransactionId,
        unit_price: Decimal
    },
    #[error("Discount [{discount}] is negative for transaction [{transaction_id}]")]
    NegativeDiscount {
        transaction_id: TransactionId,
        discount: Decimal
    },
    #[error("Subtotal of [{quantity}] x [{unit_price}] overflows for transaction [{transaction_id}]")]
    SubtotalOverflow {
        transaction_id: TransactionId,
        quantity: u32,
        unit_price: Decimal
    },
    #[error("Discount [{discount}] exceeds subtotal [{subtotal}] for transaction [{transaction_id}]")]
    DiscountExceedsSubtotal {
        transaction_id: TransactionId,
        discount: Decimal,
        subtotal: Decimal
    },
    #[error("Duplicate transaction [{transaction_id}]")]
    DuplicateTransaction {
        transaction_id: TransactionId
    }
}

impl InvalidInput {
    pub fn zero_quantity(line: &TransactionLine) -> Self {
        Self::ZeroQuantity { transaction_id: line.transaction_id.clone() }
    }

    pub fn negative_unit_price(line: &TransactionLine) -> Self {
        Self::NegativeUnitPrice {
            transaction_id: line.transaction_id.clone(),
            unit_price: line.unit_price
        }
    }

    pub fn negative_discount(line: &TransactionLine) -> Self {
        Self::NegativeDiscount {
            transaction_id: line.transaction_id.clone(),
            discount: line.discount_applied
        }
    }

    pub fn subtotal_overflow(line: &TransactionLine) -> Self {
        Self::SubtotalOverflow {
            transaction_id: line.transaction_id.clone(),
            quantity: line.quantity,
            unit_price: line.unit_price
        }
    }

    pub fn discount_exceeds_subtotal(line: &TransactionLine) -> Self {
        Self::DiscountExceedsSubtotal {
            transaction_id: line.transaction_id.clone(),
            discount: line.discount_applied,
            subtotal: line.subtotal()
        }
    }

    pub fn duplicate_transaction(line: &TransactionLine) -> Self {
        Self::DuplicateTransaction { transaction_id: line.transaction_id.clone() }
    }
}
