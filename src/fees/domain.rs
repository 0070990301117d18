use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::fees::dto::LateFeeQuote;

pub mod calculator;
pub mod service;

#[async_trait]
pub trait LateFeeService: Sync + Send {
    // quotes the fee owed on the patron's first borrow record for the book
    async fn calculate_late_fee(&self, patron_id: &str, book_id: &str) -> LibraryResult<LateFeeQuote>;
}
