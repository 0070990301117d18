pub mod service;

use std::fmt;
use std::fmt::{Display, Formatter};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn add_book(&self, title: &str, author: &str, isbn: &str, total_copies: i64) -> LibraryResult<BookDto>;
    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto>;
    async fn find_all_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn search_books(&self, term: &str, search_type: SearchType) -> LibraryResult<Vec<BookDto>>;
}

// SearchType selects the field a catalog search matches against
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum SearchType {
    Title,
    Author,
    Isbn,
    Unknown,
}

impl From<String> for SearchType {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "title" => SearchType::Title,
            "author" => SearchType::Author,
            "isbn" => SearchType::Isbn,
            _ => SearchType::Unknown,
        }
    }
}

impl Display for SearchType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            SearchType::Title => write!(f, "title"),
            SearchType::Author => write!(f, "author"),
            SearchType::Isbn => write!(f, "isbn"),
            SearchType::Unknown => write!(f, "unknown"),
        }
    }
}
