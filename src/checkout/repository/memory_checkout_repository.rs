use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};

use crate::checkout::domain::model::{BorrowedBookEntity, CheckoutEntity};
use crate::checkout::repository::CheckoutRepository;
use crate::core::library::{CheckoutStatus, LibraryError, LibraryResult, ReasonCode};
use crate::core::repository::Repository;
use crate::utils::memory::MemoryClient;

#[derive(Debug)]
pub struct MemoryCheckoutRepository {
    client: MemoryClient,
}

impl MemoryCheckoutRepository {
    pub(crate) fn new(client: MemoryClient) -> Self {
        Self {
            client,
        }
    }
}

#[async_trait]
impl Repository<CheckoutEntity> for MemoryCheckoutRepository {
    async fn create(&self, entity: &CheckoutEntity) -> LibraryResult<usize> {
        let mut tables = self.client.write()?;
        if tables.checkouts.iter().any(|c| c.checkout_id == entity.checkout_id) {
            return Err(LibraryError::duplicate_key(
                format!("checkout {} already exists", entity.checkout_id).as_str(), ReasonCode::BorrowRecordFailed));
        }
        tables.checkouts.push(entity.clone());
        Ok(1)
    }

    async fn get(&self, id: &str) -> LibraryResult<CheckoutEntity> {
        let tables = self.client.read()?;
        tables.checkouts.iter().find(|c| c.checkout_id == id).cloned().ok_or_else(||
            LibraryError::not_found(format!("checkout not found for {}", id).as_str(), ReasonCode::CheckoutNotFound))
    }
}

#[async_trait]
impl CheckoutRepository for MemoryCheckoutRepository {
    async fn update_returned(&self, checkout_id: &str, returned_at: &NaiveDateTime) -> LibraryResult<usize> {
        let mut tables = self.client.write()?;
        let checkout = tables.checkouts.iter_mut()
            .find(|c| c.checkout_id == checkout_id && c.is_open())
            .ok_or_else(|| LibraryError::not_found(
                format!("no open checkout {}", checkout_id).as_str(), ReasonCode::CheckoutNotFound))?;
        checkout.returned_at = Some(*returned_at);
        checkout.checkout_status = CheckoutStatus::Returned;
        checkout.version += 1;
        checkout.updated_at = Utc::now().naive_utc();
        Ok(1)
    }

    async fn count_borrowed(&self, patron_id: &str) -> LibraryResult<usize> {
        let tables = self.client.read()?;
        Ok(tables.checkouts.iter().filter(|c| c.patron_id == patron_id && c.is_open()).count())
    }

    async fn find_borrowed(&self, patron_id: &str) -> LibraryResult<Vec<BorrowedBookEntity>> {
        let tables = self.client.read()?;
        let borrowed = tables.checkouts.iter()
            .filter(|c| c.patron_id == patron_id && c.is_open())
            .filter_map(|c| tables.books.iter().find(|b| b.book_id == c.book_id).map(|b| BorrowedBookEntity {
                checkout_id: c.checkout_id.to_string(),
                book_id: c.book_id.to_string(),
                title: b.title.to_string(),
                author: b.author.to_string(),
                checkout_at: c.checkout_at,
                due_at: c.due_at,
                returned_at: c.returned_at,
            }))
            .collect();
        Ok(borrowed)
    }
}
