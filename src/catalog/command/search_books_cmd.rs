use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::{CatalogService, SearchType};
use crate::core::command::{Command, CommandError};

pub struct SearchBooksCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl SearchBooksCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// `search_type` is free text as typed by the patron; unknown types match nothing
#[derive(Debug, Deserialize)]
pub struct SearchBooksCommandRequest {
    pub q: String,
    #[serde(rename = "type")]
    pub search_type: String,
}

impl SearchBooksCommandRequest {
    pub fn new(q: &str, search_type: &str) -> Self {
        Self {
            q: q.to_string(),
            search_type: search_type.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct SearchBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl SearchBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand {
    async fn execute(&self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        self.catalog_service.search_books(req.q.as_str(), SearchType::from(req.search_type))
            .await.map_err(CommandError::from).map(SearchBooksCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::utils::memory::{build_memory_client, MemoryClient};

    lazy_static! {
        static ref CLIENT: MemoryClient = build_memory_client();
        static ref ADD_CMD : AsyncOnce<AddBookCommand> = AsyncOnce::new(async {
                let svc = factory::create_catalog_service(&Configuration::new("test"), &CLIENT);
                AddBookCommand::new(svc)
            });
        static ref SEARCH_CMD : AsyncOnce<SearchBooksCommand> = AsyncOnce::new(async {
                let svc = factory::create_catalog_service(&Configuration::new("test"), &CLIENT);
                SearchBooksCommand::new(svc)
            });
    }

    #[tokio::test]
    async fn test_should_run_search_books() {
        let add_cmd = ADD_CMD.get().await;
        let search_cmd = SEARCH_CMD.get().await;

        let _ = add_cmd.execute(AddBookCommandRequest::new("Moby-Dick", "Herman Melville", "9781503280786", 2))
            .await.expect("should add book");
        let res = search_cmd.execute(SearchBooksCommandRequest::new("moby", "Title")).await.expect("should search");
        assert_eq!(1, res.books.len());
        let res = search_cmd.execute(SearchBooksCommandRequest::new("9781503280786", "ISBN")).await.expect("should search");
        assert_eq!("Herman Melville", res.books[0].author.as_str());
        let res = search_cmd.execute(SearchBooksCommandRequest::new("moby", "publisher")).await.expect("should search");
        assert!(res.books.is_empty());
    }
}
