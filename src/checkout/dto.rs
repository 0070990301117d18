use chrono::{Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::books::domain::Book;
use crate::checkout::domain::model::{BorrowedBookEntity, CheckoutEntity};
use crate::core::domain::Identifiable;
use crate::core::library::CheckoutStatus;
use crate::fees::dto::LateFeeQuote;
use crate::patrons::domain::model::PatronId;
use crate::utils::date::{format_due_date, opt_serializer, serializer};


// CheckoutDto abstracts the book that is checked out or borrowed.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CheckoutDto {
    pub checkout_id: String,
    pub version: i64,
    pub branch_id: String,
    pub book_id: String,
    pub patron_id: String,
    pub checkout_status: CheckoutStatus,
    #[serde(with = "serializer")]
    pub checkout_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub due_at: NaiveDateTime,
    #[serde(with = "opt_serializer")]
    pub returned_at: Option<NaiveDateTime>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl CheckoutDto {
    pub fn from_patron_book(branch_id: &str, patron: &PatronId, book: &dyn Book, loan_days: i64) -> Self {
        let now = Utc::now().naive_utc();
        CheckoutDto {
            checkout_id: Uuid::new_v4().to_string(),
            version: 0,
            branch_id: branch_id.to_string(),
            book_id: book.id(),
            patron_id: patron.to_string(),
            checkout_status: CheckoutStatus::CheckedOut,
            checkout_at: now,
            due_at: now + Duration::days(loan_days),
            returned_at: None,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Identifiable for CheckoutDto {
    fn id(&self) -> String {
        self.checkout_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl From<&CheckoutEntity> for CheckoutDto {
    fn from(other: &CheckoutEntity) -> CheckoutDto {
        CheckoutDto {
            checkout_id: other.checkout_id.to_string(),
            version: other.version,
            branch_id: other.branch_id.to_string(),
            book_id: other.book_id.to_string(),
            patron_id: other.patron_id.to_string(),
            checkout_status: other.checkout_status,
            checkout_at: other.checkout_at,
            due_at: other.due_at,
            returned_at: other.returned_at,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&CheckoutDto> for CheckoutEntity {
    fn from(other: &CheckoutDto) -> CheckoutEntity {
        CheckoutEntity {
            checkout_id: other.checkout_id.to_string(),
            version: other.version,
            branch_id: other.branch_id.to_string(),
            book_id: other.book_id.to_string(),
            patron_id: other.patron_id.to_string(),
            checkout_status: other.checkout_status,
            checkout_at: other.checkout_at,
            due_at: other.due_at,
            returned_at: other.returned_at,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

// BorrowedBookDto is one line of a patron's currently borrowed books
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BorrowedBookDto {
    pub book_id: String,
    pub title: String,
    pub author: String,
    #[serde(with = "serializer")]
    pub checkout_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub due_at: NaiveDateTime,
    #[serde(with = "opt_serializer")]
    pub returned_at: Option<NaiveDateTime>,
}

impl From<&BorrowedBookEntity> for BorrowedBookDto {
    fn from(other: &BorrowedBookEntity) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            checkout_at: other.checkout_at,
            due_at: other.due_at,
            returned_at: other.returned_at,
        }
    }
}

// BorrowReceiptDto is handed back after a successful borrow
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BorrowReceiptDto {
    pub checkout: CheckoutDto,
    pub title: String,
}

impl BorrowReceiptDto {
    pub fn new(checkout: CheckoutDto, title: &str) -> Self {
        Self { checkout, title: title.to_string() }
    }

    pub fn message(&self) -> String {
        format!("Successfully borrowed \"{}\". Due date: {}.", self.title, format_due_date(&self.checkout.due_at))
    }
}

// ReturnReceiptDto is handed back after a successful return, with the fee quoted for it
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ReturnReceiptDto {
    pub patron_id: String,
    pub book_id: String,
    pub title: String,
    #[serde(with = "serializer")]
    pub returned_at: NaiveDateTime,
    pub late_fee: LateFeeQuote,
}

impl ReturnReceiptDto {
    pub fn message(&self) -> String {
        if self.late_fee.is_due() {
            format!("Book \"{}\" successfully returned. Late fee: ${:.2}", self.title, self.late_fee.fee_amount)
        } else {
            format!("Book \"{}\" successfully returned.", self.title)
        }
    }
}
