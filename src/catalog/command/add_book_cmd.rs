use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub total_copies: i64,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, isbn: &str, total_copies: i64) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            total_copies,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub success: bool,
    pub message: String,
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            success: true,
            message: format!("Book \"{}\" has been successfully added to the catalog.", book.title),
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        self.catalog_service.add_book(req.title.as_str(), req.author.as_str(), req.isbn.as_str(), req.total_copies)
            .await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use rand::Rng;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::utils::memory::{build_memory_client, MemoryClient};

    lazy_static! {
        static ref CLIENT: MemoryClient = build_memory_client();
        static ref SUT_CMD : AsyncOnce<AddBookCommand> = AsyncOnce::new(async {
                let svc = factory::create_catalog_service(&Configuration::new("test"), &CLIENT);
                AddBookCommand::new(svc)
            });
    }

    fn random_isbn() -> String {
        format!("{:013}", rand::thread_rng().gen_range(0..10_000_000_000_000u64))
    }

    #[tokio::test]
    async fn test_should_run_add_book() {
        let cmd = SUT_CMD.get().await;

        let res = cmd.execute(AddBookCommandRequest::new("The Great Gatsby", "F. Scott Fitzgerald", random_isbn().as_str(), 3))
            .await.expect("should add book");
        assert!(res.success);
        assert_eq!("Book \"The Great Gatsby\" has been successfully added to the catalog.", res.message.as_str());
        assert_eq!(3, res.book.available_copies);
    }

    #[tokio::test]
    async fn test_should_fail_add_book_with_message() {
        let cmd = SUT_CMD.get().await;

        let isbn = random_isbn();
        let _ = cmd.execute(AddBookCommandRequest::new("1984", "George Orwell", isbn.as_str(), 1))
            .await.expect("should add book");
        let err = cmd.execute(AddBookCommandRequest::new("1984", "George Orwell", isbn.as_str(), 1))
            .await.expect_err("should reject duplicate");
        assert!(matches!(err, CommandError::DuplicateKey { .. }));
        assert_eq!((false, "A book with this ISBN already exists.".to_string()), err.outcome());
    }
}
