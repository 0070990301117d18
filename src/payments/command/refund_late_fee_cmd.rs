use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::payments::domain::PaymentService;
use crate::payments::dto::RefundReceiptDto;

pub struct RefundLateFeeCommand {
    payment_service: Box<dyn PaymentService>,
}

impl RefundLateFeeCommand {
    pub fn new(payment_service: Box<dyn PaymentService>) -> Self {
        Self {
            payment_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RefundLateFeeCommandRequest {
    pub transaction_id: String,
    pub amount: Decimal,
}

impl RefundLateFeeCommandRequest {
    pub fn new(transaction_id: &str, amount: Decimal) -> Self {
        Self {
            transaction_id: transaction_id.to_string(),
            amount,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct RefundLateFeeCommandResponse {
    pub success: bool,
    pub message: String,
}

impl RefundLateFeeCommandResponse {
    pub fn new(receipt: RefundReceiptDto) -> Self {
        Self {
            success: true,
            message: receipt.message,
        }
    }
}

#[async_trait]
impl Command<RefundLateFeeCommandRequest, RefundLateFeeCommandResponse> for RefundLateFeeCommand {
    async fn execute(&self, req: RefundLateFeeCommandRequest) -> Result<RefundLateFeeCommandResponse, CommandError> {
        self.payment_service.refund_late_fee(req.transaction_id.as_str(), req.amount)
            .await.map_err(CommandError::from).map(RefundLateFeeCommandResponse::new)
    }
}
