use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::checkout::domain::CheckoutService;
use crate::checkout::dto::ReturnReceiptDto;
use crate::core::command::{Command, CommandError};

pub struct ReturnBookCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl ReturnBookCommand {
    pub fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReturnBookCommandRequest {
    pub patron_id: String,
    pub book_id: String,
}

impl ReturnBookCommandRequest {
    pub fn new(patron_id: &str, book_id: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            book_id: book_id.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct ReturnBookCommandResponse {
    pub success: bool,
    pub message: String,
    pub returned: ReturnReceiptDto,
}

impl ReturnBookCommandResponse {
    pub fn new(returned: ReturnReceiptDto) -> Self {
        Self {
            success: true,
            message: returned.message(),
            returned,
        }
    }
}

#[async_trait]
impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand {
    async fn execute(&self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        self.checkout_service.returned(req.patron_id.as_str(), req.book_id.as_str())
            .await.map_err(CommandError::from).map(ReturnBookCommandResponse::new)
    }
}
