use async_trait::async_trait;
use chrono::Utc;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult, ReasonCode};
use crate::core::repository::Repository;
use crate::utils::memory::MemoryClient;

#[derive(Debug)]
pub struct MemoryBookRepository {
    client: MemoryClient,
}

impl MemoryBookRepository {
    pub(crate) fn new(client: MemoryClient) -> Self {
        Self {
            client,
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut tables = self.client.write()?;
        if tables.books.iter().any(|b| b.book_id == entity.book_id) {
            return Err(LibraryError::duplicate_key(
                format!("book {} already exists", entity.book_id).as_str(), ReasonCode::BookInsertFailed));
        }
        tables.books.push(entity.clone());
        Ok(1)
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        let tables = self.client.read()?;
        tables.books.iter().find(|b| b.book_id == id).cloned().ok_or_else(||
            LibraryError::not_found(format!("book not found for {}", id).as_str(), ReasonCode::BookNotFound))
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_by_isbn(&self, isbn: &str) -> LibraryResult<Option<BookEntity>> {
        let tables = self.client.read()?;
        Ok(tables.books.iter().find(|b| b.isbn == isbn).cloned())
    }

    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.client.read()?.books.clone())
    }

    async fn update_availability(&self, book_id: &str, delta: i64) -> LibraryResult<usize> {
        let mut tables = self.client.write()?;
        let book = tables.books.iter_mut().find(|b| b.book_id == book_id).ok_or_else(||
            LibraryError::not_found(format!("book not found for {}", book_id).as_str(), ReasonCode::BookNotFound))?;
        let available = book.available_copies + delta;
        if available < 0 || available > book.total_copies {
            return Err(LibraryError::database(
                format!("available copies of {} would become {} outside 0..={}",
                        book_id, available, book.total_copies).as_str(), ReasonCode::AvailabilityUpdateFailed, false));
        }
        book.available_copies = available;
        book.version += 1;
        book.updated_at = Utc::now().naive_utc();
        Ok(1)
    }
}
