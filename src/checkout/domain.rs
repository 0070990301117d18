use async_trait::async_trait;
use crate::checkout::dto::{BorrowReceiptDto, ReturnReceiptDto};
use crate::core::library::LibraryResult;

pub mod model;
pub mod service;

#[async_trait]
pub trait CheckoutService: Sync + Send {
    async fn checkout(&self, patron_id: &str, book_id: &str) -> LibraryResult<BorrowReceiptDto>;
    async fn returned(&self, patron_id: &str, book_id: &str) -> LibraryResult<ReturnReceiptDto>;
}
