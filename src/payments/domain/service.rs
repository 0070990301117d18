use std::collections::HashMap;
use async_trait::async_trait;
use rust_decimal::Decimal;
use crate::catalog::domain::CatalogService;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult, ReasonCode};
use crate::fees::domain::calculator::MAX_LATE_FEE;
use crate::fees::domain::LateFeeService;
use crate::gateway::events::{EventPublisher, publish_quietly};
use crate::gateway::payment::{PaymentGateway, TRANSACTION_PREFIX};
use crate::patrons::domain::model::PatronId;
use crate::payments::domain::PaymentService;
use crate::payments::dto::{PaymentReceiptDto, RefundReceiptDto};

pub(crate) struct PaymentServiceImpl {
    late_fee_service: Box<dyn LateFeeService>,
    catalog_service: Box<dyn CatalogService>,
    payment_gateway: Box<dyn PaymentGateway>,
    events_publisher: Box<dyn EventPublisher>,
}

impl PaymentServiceImpl {
    pub(crate) fn new(late_fee_service: Box<dyn LateFeeService>, catalog_service: Box<dyn CatalogService>,
                      payment_gateway: Box<dyn PaymentGateway>, events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            late_fee_service,
            catalog_service,
            payment_gateway,
            events_publisher,
        }
    }

    fn validate_refund(transaction_id: &str, amount: Decimal) -> LibraryResult<()> {
        if transaction_id.is_empty() || !transaction_id.starts_with(TRANSACTION_PREFIX) {
            return Err(LibraryError::validation("Invalid transaction ID.", ReasonCode::InvalidTransactionId));
        }
        if amount <= Decimal::ZERO {
            return Err(LibraryError::validation("Refund amount must be greater than 0.", ReasonCode::InvalidAmount));
        }
        if amount > MAX_LATE_FEE {
            return Err(LibraryError::validation("Refund amount exceeds maximum late fee.", ReasonCode::ExceedsMaximum));
        }
        Ok(())
    }
}

#[async_trait]
impl PaymentService for PaymentServiceImpl {
    async fn pay_late_fee(&self, patron_id: &str, book_id: &str) -> LibraryResult<PaymentReceiptDto> {
        let patron = PatronId::parse(patron_id)?;
        let quote = self.late_fee_service.calculate_late_fee(patron.as_str(), book_id).await.map_err(|err| {
            tracing::warn!(patron_id, book_id, "late fee quote failed: {}", err);
            LibraryError::not_granted("Unable to calculate late fees.", ReasonCode::FeeCalculationFailed)
        })?;
        if !quote.is_due() {
            return Err(LibraryError::not_granted("No late fees to pay for this book.", ReasonCode::NoFeeDue));
        }
        let book = self.catalog_service.find_book_by_id(book_id).await?;

        let description = format!("Late fees for '{}'", book.title);
        let txn = match self.payment_gateway.process_payment(patron.as_str(), quote.fee_amount, description.as_str()).await {
            Ok(txn) => txn,
            Err(err) => {
                tracing::warn!(patron_id, book_id, "payment gateway error: {}", err);
                return Err(LibraryError::external_service(
                    format!("Payment processing error: {}", err).as_str(), ReasonCode::PaymentProcessingError));
            }
        };
        if !txn.success {
            tracing::warn!(patron_id, book_id, "payment declined: {}", txn.message);
            return Err(LibraryError::external_service(
                format!("Payment failed: {}", txn.message).as_str(), ReasonCode::PaymentDeclined));
        }

        let receipt = PaymentReceiptDto {
            transaction_id: txn.transaction_id.to_string(),
            patron_id: patron.to_string(),
            book_id: book.book_id.to_string(),
            amount: quote.fee_amount,
            message: format!("Payment successful! {}", txn.message),
        };
        tracing::info!(patron_id, book_id, transaction_id = receipt.transaction_id.as_str(), amount = %receipt.amount, "late fee paid");
        publish_quietly(self.events_publisher.as_ref(), DomainEvent::added(
            "late_fee_paid", "payments", receipt.transaction_id.as_str(), &HashMap::new(), &receipt)).await;
        Ok(receipt)
    }

    async fn refund_late_fee(&self, transaction_id: &str, amount: Decimal) -> LibraryResult<RefundReceiptDto> {
        Self::validate_refund(transaction_id, amount)?;
        let refund = match self.payment_gateway.refund_payment(transaction_id, amount).await {
            Ok(refund) => refund,
            Err(err) => {
                tracing::warn!(transaction_id, "refund gateway error: {}", err);
                return Err(LibraryError::external_service(
                    format!("Refund processing error: {}", err).as_str(), ReasonCode::RefundProcessingError));
            }
        };
        if !refund.success {
            tracing::warn!(transaction_id, "refund declined: {}", refund.message);
            return Err(LibraryError::external_service(
                format!("Refund failed: {}", refund.message).as_str(), ReasonCode::RefundFailed));
        }

        let receipt = RefundReceiptDto {
            transaction_id: transaction_id.to_string(),
            amount,
            message: refund.message,
        };
        tracing::info!(transaction_id, amount = %amount, "late fee refunded");
        publish_quietly(self.events_publisher.as_ref(), DomainEvent::deleted(
            "late_fee_refunded", "payments", transaction_id, &HashMap::new(), &receipt)).await;
        Ok(receipt)
    }
}
