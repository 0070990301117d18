use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::core::library::LateFeeStatus;
use crate::fees::domain::LateFeeService;
use crate::fees::dto::LateFeeQuote;

pub struct GetLateFeeCommand {
    late_fee_service: Box<dyn LateFeeService>,
}

impl GetLateFeeCommand {
    pub fn new(late_fee_service: Box<dyn LateFeeService>) -> Self {
        Self {
            late_fee_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetLateFeeCommandRequest {
    pub patron_id: String,
    pub book_id: String,
}

impl GetLateFeeCommandRequest {
    pub fn new(patron_id: &str, book_id: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            book_id: book_id.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct GetLateFeeCommandResponse {
    pub fee_amount: Decimal,
    pub days_overdue: i64,
    pub status: LateFeeStatus,
}

impl GetLateFeeCommandResponse {
    pub fn new(quote: LateFeeQuote) -> Self {
        Self {
            fee_amount: quote.fee_amount,
            days_overdue: quote.days_overdue,
            status: quote.status,
        }
    }
}

#[async_trait]
impl Command<GetLateFeeCommandRequest, GetLateFeeCommandResponse> for GetLateFeeCommand {
    async fn execute(&self, req: GetLateFeeCommandRequest) -> Result<GetLateFeeCommandResponse, CommandError> {
        self.late_fee_service.calculate_late_fee(req.patron_id.as_str(), req.book_id.as_str())
            .await.map_err(CommandError::from).map(GetLateFeeCommandResponse::new)
    }
}
