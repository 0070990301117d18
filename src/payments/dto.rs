use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentReceiptDto {
    pub transaction_id: String,
    pub patron_id: String,
    pub book_id: String,
    pub amount: Decimal,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefundReceiptDto {
    pub transaction_id: String,
    pub amount: Decimal,
    pub message: String,
}
