use async_trait::async_trait;
use rust_decimal::Decimal;
use crate::core::library::LibraryResult;
use crate::payments::dto::{PaymentReceiptDto, RefundReceiptDto};

pub mod service;

#[async_trait]
pub trait PaymentService: Sync + Send {
    // charges the late fee currently owed on the patron's borrow record for the book
    async fn pay_late_fee(&self, patron_id: &str, book_id: &str) -> LibraryResult<PaymentReceiptDto>;

    async fn refund_late_fee(&self, transaction_id: &str, amount: Decimal) -> LibraryResult<RefundReceiptDto>;
}
