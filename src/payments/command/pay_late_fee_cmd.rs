use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::payments::domain::PaymentService;
use crate::payments::dto::PaymentReceiptDto;

pub struct PayLateFeeCommand {
    payment_service: Box<dyn PaymentService>,
}

impl PayLateFeeCommand {
    pub fn new(payment_service: Box<dyn PaymentService>) -> Self {
        Self {
            payment_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PayLateFeeCommandRequest {
    pub patron_id: String,
    pub book_id: String,
}

impl PayLateFeeCommandRequest {
    pub fn new(patron_id: &str, book_id: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            book_id: book_id.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct PayLateFeeCommandResponse {
    pub success: bool,
    pub message: String,
    pub transaction_id: String,
    pub amount: Decimal,
}

impl PayLateFeeCommandResponse {
    pub fn new(receipt: PaymentReceiptDto) -> Self {
        Self {
            success: true,
            message: receipt.message,
            transaction_id: receipt.transaction_id,
            amount: receipt.amount,
        }
    }
}

#[async_trait]
impl Command<PayLateFeeCommandRequest, PayLateFeeCommandResponse> for PayLateFeeCommand {
    async fn execute(&self, req: PayLateFeeCommandRequest) -> Result<PayLateFeeCommandResponse, CommandError> {
        self.payment_service.pay_late_fee(req.patron_id.as_str(), req.book_id.as_str())
            .await.map_err(CommandError::from).map(PayLateFeeCommandResponse::new)
    }
}
