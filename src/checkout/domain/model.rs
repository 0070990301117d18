use chrono::{Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::domain::Identifiable;
use crate::core::library::CheckoutStatus;
use crate::utils::date::{opt_serializer, serializer};

// CheckoutEntity is the borrow record of one copy of a book by a patron. It stays open until
// `returned_at` is set and is never deleted.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CheckoutEntity {
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

impl CheckoutEntity {
    pub fn new(branch_id: &str, book_id: &str, patron_id: &str, loan_days: i64) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            checkout_id: Uuid::new_v4().to_string(),
            version: 0,
            branch_id: branch_id.to_string(),
            book_id: book_id.to_string(),
            patron_id: patron_id.to_string(),
            checkout_status: CheckoutStatus::CheckedOut,
            checkout_at: now,
            due_at: now + Duration::days(loan_days),
            returned_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_open(&self) -> bool {
        self.returned_at.is_none()
    }
}

impl Identifiable for CheckoutEntity {
    fn id(&self) -> String {
        self.checkout_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

// BorrowedBookEntity joins an open borrow record with the catalog data of its book
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BorrowedBookEntity {
    pub checkout_id: String,
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
