use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::patrons::domain::PatronStatusService;
use crate::patrons::dto::PatronStatusDto;

pub struct GetPatronStatusCommand {
    patron_status_service: Box<dyn PatronStatusService>,
}

impl GetPatronStatusCommand {
    pub fn new(patron_status_service: Box<dyn PatronStatusService>) -> Self {
        Self {
            patron_status_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetPatronStatusCommandRequest {
    pub patron_id: String,
}

impl GetPatronStatusCommandRequest {
    pub fn new(patron_id: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct GetPatronStatusCommandResponse {
    pub status: PatronStatusDto,
}

impl GetPatronStatusCommandResponse {
    pub fn new(status: PatronStatusDto) -> Self {
        Self {
            status,
        }
    }
}

#[async_trait]
impl Command<GetPatronStatusCommandRequest, GetPatronStatusCommandResponse> for GetPatronStatusCommand {
    async fn execute(&self, req: GetPatronStatusCommandRequest) -> Result<GetPatronStatusCommandResponse, CommandError> {
        self.patron_status_service.status_report(req.patron_id.as_str())
            .await.map_err(CommandError::from).map(GetPatronStatusCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::factory::create_catalog_service;
    use crate::checkout::command::checkout_book_cmd::{CheckoutBookCommand, CheckoutBookCommandRequest};
    use crate::checkout::factory::create_checkout_service;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::patrons::command::get_patron_status_cmd::{GetPatronStatusCommand, GetPatronStatusCommandRequest};
    use crate::patrons::factory::create_patron_status_service;
    use crate::utils::memory::{build_memory_client, MemoryClient};

    lazy_static! {
        static ref CLIENT: MemoryClient = build_memory_client();
        static ref BOOK_CMD : AsyncOnce<AddBookCommand> = AsyncOnce::new(async {
                AddBookCommand::new(create_catalog_service(&Configuration::new("test"), &CLIENT))
            });
        static ref CHECKOUT_CMD : AsyncOnce<CheckoutBookCommand> = AsyncOnce::new(async {
                CheckoutBookCommand::new(create_checkout_service(&Configuration::new("test"), &CLIENT))
            });
        static ref STATUS_CMD : AsyncOnce<GetPatronStatusCommand> = AsyncOnce::new(async {
                GetPatronStatusCommand::new(create_patron_status_service(&Configuration::new("test"), &CLIENT))
            });
    }

    #[tokio::test]
    async fn test_should_run_get_patron_status() {
        let book = BOOK_CMD.get().await.execute(AddBookCommandRequest::new("Middlemarch", "George Eliot", "9780141439549", 2))
            .await.expect("should add book").book;
        let _ = CHECKOUT_CMD.get().await.execute(CheckoutBookCommandRequest::new("777777", book.book_id.as_str()))
            .await.expect("should checkout");

        let res = STATUS_CMD.get().await.execute(GetPatronStatusCommandRequest::new("777777"))
            .await.expect("should report status");
        assert_eq!(1, res.status.books_borrowed_count);
        assert_eq!(vec!["Middlemarch"], res.status.book_titles);
        let json = serde_json::to_value(&res).expect("should serialize");
        assert_eq!("777777", json["status"]["patron_id"]);
    }
}
