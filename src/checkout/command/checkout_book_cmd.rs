use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::checkout::domain::CheckoutService;
use crate::checkout::dto::{BorrowReceiptDto, CheckoutDto};
use crate::core::command::{Command, CommandError};

pub struct CheckoutBookCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl CheckoutBookCommand {
    pub fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CheckoutBookCommandRequest {
    pub patron_id: String,
    pub book_id: String,
}

impl CheckoutBookCommandRequest {
    pub fn new(patron_id: &str, book_id: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            book_id: book_id.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct CheckoutBookCommandResponse {
    pub success: bool,
    pub message: String,
    pub checkout: CheckoutDto,
}

impl CheckoutBookCommandResponse {
    pub fn new(receipt: BorrowReceiptDto) -> Self {
        Self {
            success: true,
            message: receipt.message(),
            checkout: receipt.checkout,
        }
    }
}

#[async_trait]
impl Command<CheckoutBookCommandRequest, CheckoutBookCommandResponse> for CheckoutBookCommand {
    async fn execute(&self, req: CheckoutBookCommandRequest) -> Result<CheckoutBookCommandResponse, CommandError> {
        self.checkout_service.checkout(req.patron_id.as_str(), req.book_id.as_str())
            .await.map_err(CommandError::from).map(CheckoutBookCommandResponse::new)
    }
}
