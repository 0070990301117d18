use std::collections::HashMap;
use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::{CatalogService, SearchType};
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult, ReasonCode};
use crate::gateway::events::{EventPublisher, publish_quietly};

const MAX_TITLE_LEN: usize = 200;
const MAX_AUTHOR_LEN: usize = 100;
const ISBN_LEN: usize = 13;

pub(crate) struct CatalogServiceImpl {
    branch_id: String,
    book_repository: Box<dyn BookRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
            events_publisher,
        }
    }

    fn validate(title: &str, author: &str, isbn: &str, total_copies: i64) -> LibraryResult<()> {
        if title.is_empty() {
            return Err(LibraryError::validation("Title is required.", ReasonCode::InvalidTitle));
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(LibraryError::validation("Title must be less than 200 characters.", ReasonCode::InvalidTitle));
        }
        if author.is_empty() {
            return Err(LibraryError::validation("Author is required.", ReasonCode::InvalidAuthor));
        }
        if author.chars().count() > MAX_AUTHOR_LEN {
            return Err(LibraryError::validation("Author must be less than 100 characters.", ReasonCode::InvalidAuthor));
        }
        if isbn.chars().count() != ISBN_LEN {
            return Err(LibraryError::validation("ISBN must be exactly 13 digits.", ReasonCode::InvalidIsbn));
        }
        if total_copies <= 0 {
            return Err(LibraryError::validation("Total copies must be a positive integer.", ReasonCode::InvalidCopies));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, title: &str, author: &str, isbn: &str, total_copies: i64) -> LibraryResult<BookDto> {
        let (title, author) = (title.trim(), author.trim());
        Self::validate(title, author, isbn, total_copies)?;
        if self.book_repository.find_by_isbn(isbn).await?.is_some() {
            return Err(LibraryError::duplicate_key("A book with this ISBN already exists.", ReasonCode::DuplicateIsbn));
        }
        let book = BookDto::new(title, author, isbn, total_copies);
        if let Err(err) = self.book_repository.create(&BookEntity::from(&book)).await {
            tracing::warn!(isbn, "failed to insert book: {}", err);
            return Err(LibraryError::database("Database error occurred while adding the book.", ReasonCode::BookInsertFailed, err.retryable()));
        }
        tracing::info!(book_id = book.book_id.as_str(), isbn, "book added to catalog");
        publish_quietly(self.events_publisher.as_ref(), DomainEvent::added(
            "book_added", "books", book.book_id.as_str(),
            &HashMap::from([("branch_id".to_string(), self.branch_id.to_string())]), &book)).await;
        Ok(book)
    }

    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto> {
        match self.book_repository.get(id).await {
            Ok(book) => Ok(BookDto::from(&book)),
            Err(err) if err.is_not_found() => {
                tracing::debug!(book_id = id, "book lookup missed");
                Err(LibraryError::not_found("Book not found.", ReasonCode::BookNotFound))
            }
            Err(err) => Err(err),
        }
    }

    async fn find_all_books(&self) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.find_all().await?;
        Ok(books.iter().map(BookDto::from).collect())
    }

    async fn search_books(&self, term: &str, search_type: SearchType) -> LibraryResult<Vec<BookDto>> {
        let needle = term.to_lowercase();
        let found: Vec<BookDto> = match search_type {
            SearchType::Title => self.book_repository.find_all().await?.iter()
                .filter(|b| b.title.to_lowercase().contains(needle.as_str()))
                .map(BookDto::from).collect(),
            SearchType::Author => self.book_repository.find_all().await?.iter()
                .filter(|b| b.author.to_lowercase().contains(needle.as_str()))
                .map(BookDto::from).collect(),
            SearchType::Isbn => self.book_repository.find_by_isbn(term).await?.iter()
                .map(BookDto::from).collect(),
            SearchType::Unknown => vec![],
        };
        tracing::debug!(term, search_type = %search_type, "catalog searched");
        Ok(found)
    }
}
