pub mod memory_checkout_repository;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use crate::checkout::domain::model::{BorrowedBookEntity, CheckoutEntity};
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;


#[async_trait]
pub trait CheckoutRepository: Repository<CheckoutEntity> {
    // closes the single open record with the given id
    async fn update_returned(&self, checkout_id: &str, returned_at: &NaiveDateTime) -> LibraryResult<usize>;

    async fn count_borrowed(&self, patron_id: &str) -> LibraryResult<usize>;

    // open records of the patron joined with their books, oldest first
    async fn find_borrowed(&self, patron_id: &str) -> LibraryResult<Vec<BorrowedBookEntity>>;
}
