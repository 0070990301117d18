use std::collections::HashMap;
use chrono::Utc;
use async_trait::async_trait;
use crate::books::domain::Book;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::checkout::domain::CheckoutService;
use crate::checkout::domain::model::CheckoutEntity;
use crate::checkout::dto::{BorrowReceiptDto, CheckoutDto, ReturnReceiptDto};
use crate::checkout::repository::CheckoutRepository;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult, ReasonCode};
use crate::fees::dto::LateFeeQuote;
use crate::gateway::events::{EventPublisher, publish_quietly};
use crate::patrons::domain::model::PatronId;

pub(crate) struct CheckoutServiceImpl {
    branch_id: String,
    max_borrowed_books: usize,
    book_loan_days: i64,
    book_repository: Box<dyn BookRepository>,
    checkout_repository: Box<dyn CheckoutRepository>,
    catalog_service: Box<dyn CatalogService>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CheckoutServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
                      checkout_repository: Box<dyn CheckoutRepository>, catalog_service: Box<dyn CatalogService>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            max_borrowed_books: config.max_borrowed_books,
            book_loan_days: config.book_loan_days,
            book_repository,
            checkout_repository,
            catalog_service,
            events_publisher,
        }
    }

    fn metadata(&self) -> HashMap<String, String> {
        HashMap::from([("branch_id".to_string(), self.branch_id.to_string())])
    }
}

#[async_trait]
impl CheckoutService for CheckoutServiceImpl {
    async fn checkout(&self, patron_id: &str, book_id: &str) -> LibraryResult<BorrowReceiptDto> {
        let patron = PatronId::parse(patron_id)?;
        let book = self.catalog_service.find_book_by_id(book_id).await?;
        if !book.is_available() {
            return Err(LibraryError::unavailable("This book is currently not available.", ReasonCode::BookUnavailable, true));
        }
        let borrowed = self.checkout_repository.count_borrowed(patron.as_str()).await?;
        if borrowed > self.max_borrowed_books {
            tracing::debug!(patron_id, borrowed, "borrowing limit reached");
            return Err(LibraryError::not_granted(
                format!("You have reached the maximum borrowing limit of {} books.", self.max_borrowed_books).as_str(),
                ReasonCode::BorrowLimitExceeded));
        }

        let checkout = CheckoutDto::from_patron_book(self.branch_id.as_str(), &patron, &book, self.book_loan_days);
        if let Err(err) = self.checkout_repository.create(&CheckoutEntity::from(&checkout)).await {
            tracing::warn!(patron_id, book_id, "failed to create borrow record: {}", err);
            return Err(LibraryError::database("Database error occurred while creating borrow record.",
                                              ReasonCode::BorrowRecordFailed, err.retryable()));
        }
        if let Err(err) = self.book_repository.update_availability(book.book_id.as_str(), -1).await {
            tracing::warn!(patron_id, book_id, "failed to decrement availability: {}", err);
            return Err(LibraryError::database("Database error occurred while updating book availability.",
                                              ReasonCode::AvailabilityUpdateFailed, err.retryable()));
        }

        tracing::info!(patron_id, book_id, checkout_id = checkout.checkout_id.as_str(), "book borrowed");
        publish_quietly(self.events_publisher.as_ref(), DomainEvent::added(
            "book_checkout", "checkout", checkout.checkout_id.as_str(), &self.metadata(), &checkout)).await;
        Ok(BorrowReceiptDto::new(checkout, book.title()))
    }

    async fn returned(&self, patron_id: &str, book_id: &str) -> LibraryResult<ReturnReceiptDto> {
        let patron = PatronId::parse(patron_id)?;
        let book = self.catalog_service.find_book_by_id(book_id).await?;
        let borrowed = self.checkout_repository.find_borrowed(patron.as_str()).await?;
        let record = borrowed.iter().find(|b| b.book_id == book.book_id).ok_or_else(||
            LibraryError::not_granted("This book was not borrowed by this patron", ReasonCode::NotBorrowedByPatron))?;

        let returned_at = Utc::now().naive_utc();
        let late_fee = LateFeeQuote::for_due_date(&record.due_at, &returned_at);

        if let Err(err) = self.checkout_repository.update_returned(record.checkout_id.as_str(), &returned_at).await {
            tracing::warn!(patron_id, book_id, "failed to record return date: {}", err);
            return Err(LibraryError::database("Database error occurred while recording return date.",
                                              ReasonCode::ReturnDateFailed, err.retryable()));
        }
        if let Err(err) = self.book_repository.update_availability(book.book_id.as_str(), 1).await {
            tracing::warn!(patron_id, book_id, "failed to increment availability: {}", err);
            return Err(LibraryError::database("Database error occurred while updating book availability.",
                                              ReasonCode::AvailabilityUpdateFailed, err.retryable()));
        }

        let receipt = ReturnReceiptDto {
            patron_id: patron.to_string(),
            book_id: book.book_id.to_string(),
            title: book.title.to_string(),
            returned_at,
            late_fee,
        };
        tracing::info!(patron_id, book_id, fee = %receipt.late_fee.fee_amount, "book returned");
        publish_quietly(self.events_publisher.as_ref(), DomainEvent::updated(
            "book_returned", "checkout", book.book_id.as_str(), &self.metadata(), &receipt)).await;
        Ok(receipt)
    }
}
