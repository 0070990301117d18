use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct GetBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl GetBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetBookCommandRequest {
    pub book_id: String,
}

impl GetBookCommandRequest {
    pub fn new(book_id: &str) -> Self {
        Self {
            book_id: book_id.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct GetBookCommandResponse {
    pub book: BookDto,
}

impl GetBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        self.catalog_service.find_book_by_id(req.book_id.as_str())
            .await.map_err(CommandError::from).map(GetBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::utils::memory::{build_memory_client, MemoryClient};

    lazy_static! {
        static ref CLIENT: MemoryClient = build_memory_client();
        static ref ADD_CMD : AsyncOnce<AddBookCommand> = AsyncOnce::new(async {
                let svc = factory::create_catalog_service(&Configuration::new("test"), &CLIENT);
                AddBookCommand::new(svc)
            });
        static ref GET_CMD : AsyncOnce<GetBookCommand> = AsyncOnce::new(async {
                let svc = factory::create_catalog_service(&Configuration::new("test"), &CLIENT);
                GetBookCommand::new(svc)
            });
    }

    #[tokio::test]
    async fn test_should_run_get_book() {
        let add_cmd = ADD_CMD.get().await;
        let get_cmd = GET_CMD.get().await;

        let add_res = add_cmd.execute(AddBookCommandRequest::new("1984", "George Orwell", "9780451524935", 1))
            .await.expect("should add book");
        let get_res = get_cmd.execute(GetBookCommandRequest::new(add_res.book.book_id.as_str()))
            .await.expect("should get book");
        assert_eq!(add_res.book, get_res.book);
    }

    #[tokio::test]
    async fn test_should_not_get_missing_book() {
        let get_cmd = GET_CMD.get().await;
        let err = get_cmd.execute(GetBookCommandRequest::new("missing")).await.expect_err("should not find book");
        assert!(matches!(err, CommandError::NotFound { .. }));
        assert_eq!("Book not found.", err.message());
    }
}
