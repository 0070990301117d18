use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use simple_error::SimpleError;

// An Err from the gateway means the call itself failed (transport, timeout); a decline is an Ok
// transaction with `success == false`.
pub type GatewayResult<T> = Result<T, SimpleError>;

// PaymentTransaction is the gateway's reply to a charge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentTransaction {
    pub success: bool,
    // empty when the charge was declined
    pub transaction_id: String,
    pub message: String,
}

impl PaymentTransaction {
    pub fn approved(transaction_id: &str, message: &str) -> Self {
        Self {
            success: true,
            transaction_id: transaction_id.to_string(),
            message: message.to_string(),
        }
    }

    pub fn declined(message: &str) -> Self {
        Self {
            success: false,
            transaction_id: String::new(),
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefundTransaction {
    pub success: bool,
    pub message: String,
}

impl RefundTransaction {
    pub fn approved(message: &str) -> Self {
        Self { success: true, message: message.to_string() }
    }

    pub fn declined(message: &str) -> Self {
        Self { success: false, message: message.to_string() }
    }
}

// PaymentGateway is the external money-movement collaborator
#[async_trait]
pub trait PaymentGateway: Sync + Send {
    async fn process_payment(&self, patron_id: &str, amount: Decimal, description: &str) -> GatewayResult<PaymentTransaction>;
    async fn refund_payment(&self, transaction_id: &str, amount: Decimal) -> GatewayResult<RefundTransaction>;
}

// every transaction id handed out by a payment gateway starts with this prefix
pub const TRANSACTION_PREFIX: &str = "txn_";
