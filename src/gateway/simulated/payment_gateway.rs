use std::collections::HashMap;
use std::sync::Mutex;
use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use simple_error::SimpleError;
use crate::gateway::payment::{GatewayResult, PaymentGateway, PaymentTransaction, RefundTransaction, TRANSACTION_PREFIX};

// largest single charge the gateway accepts
const PAYMENT_LIMIT: Decimal = dec!(1000.00);

#[derive(Debug)]
struct LedgerEntry {
    amount: Decimal,
    refunded: bool,
}

// SimulatedPaymentGateway approves charges locally and keeps a ledger so refunds can be checked
// against what was actually charged. It is the default gateway when none is configured.
#[derive(Debug, Default)]
pub struct SimulatedPaymentGateway {
    ledger: Mutex<HashMap<String, LedgerEntry>>,
}

impl SimulatedPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentGateway for SimulatedPaymentGateway {
    async fn process_payment(&self, patron_id: &str, amount: Decimal, description: &str) -> GatewayResult<PaymentTransaction> {
        if amount <= Decimal::ZERO {
            return Ok(PaymentTransaction::declined("Invalid amount: must be greater than 0"));
        }
        if amount > PAYMENT_LIMIT {
            return Ok(PaymentTransaction::declined("Payment declined: amount exceeds limit"));
        }
        if patron_id.len() != 6 {
            return Ok(PaymentTransaction::declined("Invalid patron ID format"));
        }
        let transaction_id = format!("{}{}_{}_{:04}", TRANSACTION_PREFIX, patron_id,
                                     Utc::now().timestamp_millis(), rand::thread_rng().gen_range(0..10000));
        let mut ledger = self.ledger.lock().map_err(|err| SimpleError::new(format!("payment ledger unavailable: {}", err)))?;
        ledger.insert(transaction_id.clone(), LedgerEntry { amount, refunded: false });
        tracing::debug!(patron_id, transaction_id = transaction_id.as_str(), description, "simulated charge approved");
        Ok(PaymentTransaction::approved(transaction_id.as_str(),
                                        format!("Payment of ${:.2} processed successfully", amount).as_str()))
    }

    async fn refund_payment(&self, transaction_id: &str, amount: Decimal) -> GatewayResult<RefundTransaction> {
        if !transaction_id.starts_with(TRANSACTION_PREFIX) {
            return Ok(RefundTransaction::declined("Invalid transaction ID"));
        }
        if amount <= Decimal::ZERO {
            return Ok(RefundTransaction::declined("Invalid refund amount"));
        }
        let mut ledger = self.ledger.lock().map_err(|err| SimpleError::new(format!("payment ledger unavailable: {}", err)))?;
        let entry = match ledger.get_mut(transaction_id) {
            Some(entry) => entry,
            None => return Ok(RefundTransaction::declined("Transaction not found")),
        };
        if entry.refunded {
            return Ok(RefundTransaction::declined("Transaction already refunded"));
        }
        if amount > entry.amount {
            return Ok(RefundTransaction::declined("Refund amount exceeds original payment"));
        }
        entry.refunded = true;
        let refund_id = format!("refund_{}_{}", transaction_id, rand::thread_rng().gen_range(100000..1000000));
        Ok(RefundTransaction::approved(
            format!("Refund of ${:.2} processed. Refund ID: {}", amount, refund_id).as_str()))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use crate::gateway::factory::create_payment_gateway;
    use crate::gateway::payment::PaymentGateway;
    use crate::gateway::simulated::payment_gateway::SimulatedPaymentGateway;

    #[tokio::test]
    async fn test_should_process_and_refund_payment() {
        let gateway = create_payment_gateway();
        let txn = gateway.process_payment("123456", dec!(5.50), "Late fees for '1984'").await.expect("should charge");
        assert!(txn.success);
        assert!(txn.transaction_id.starts_with("txn_123456_"));
        assert_eq!("Payment of $5.50 processed successfully", txn.message.as_str());

        let refund = gateway.refund_payment(txn.transaction_id.as_str(), dec!(5.50)).await.expect("should refund");
        assert!(refund.success);
        assert!(refund.message.starts_with("Refund of $5.50 processed. Refund ID: refund_txn_123456_"));

        let again = gateway.refund_payment(txn.transaction_id.as_str(), dec!(5.50)).await.expect("should answer");
        assert!(!again.success);
        assert_eq!("Transaction already refunded", again.message.as_str());
    }

    #[tokio::test]
    async fn test_should_decline_invalid_payments() {
        let gateway = SimulatedPaymentGateway::new();
        let txn = gateway.process_payment("123456", dec!(0), "nothing").await.expect("should answer");
        assert!(!txn.success);
        assert!(txn.transaction_id.is_empty());
        let txn = gateway.process_payment("123456", dec!(1000.01), "too much").await.expect("should answer");
        assert_eq!("Payment declined: amount exceeds limit", txn.message.as_str());
        let txn = gateway.process_payment("12345", dec!(1), "short id").await.expect("should answer");
        assert_eq!("Invalid patron ID format", txn.message.as_str());
    }

    #[tokio::test]
    async fn test_should_decline_unknown_refunds() {
        let gateway = SimulatedPaymentGateway::new();
        let refund = gateway.refund_payment("txn_999999_0", dec!(1)).await.expect("should answer");
        assert_eq!("Transaction not found", refund.message.as_str());
        let refund = gateway.refund_payment("abc", dec!(1)).await.expect("should answer");
        assert_eq!("Invalid transaction ID", refund.message.as_str());

        let txn = gateway.process_payment("123456", dec!(2.00), "fee").await.expect("should charge");
        let refund = gateway.refund_payment(txn.transaction_id.as_str(), dec!(3.00)).await.expect("should answer");
        assert_eq!("Refund amount exceeds original payment", refund.message.as_str());
        let refund = gateway.refund_payment(txn.transaction_id.as_str(), dec!(-1)).await.expect("should answer");
        assert_eq!("Invalid refund amount", refund.message.as_str());
    }
}
