use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::checkout::dto::BorrowedBookDto;

// PatronStatusDto summarizes what a patron currently holds and owes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatronStatusDto {
    pub patron_id: String,
    pub currently_borrowed: Vec<BorrowedBookDto>,
    pub book_titles: Vec<String>,
    pub due_dates: Vec<NaiveDateTime>,
    pub total_late_fees: Decimal,
    // counted by a separate query and not reconciled with `currently_borrowed`
    pub books_borrowed_count: usize,
}

impl PatronStatusDto {
    pub fn new(patron_id: &str, currently_borrowed: Vec<BorrowedBookDto>,
               total_late_fees: Decimal, books_borrowed_count: usize) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            book_titles: currently_borrowed.iter().map(|b| b.title.to_string()).collect(),
            due_dates: currently_borrowed.iter().map(|b| b.due_at).collect(),
            currently_borrowed,
            total_late_fees,
            books_borrowed_count,
        }
    }
}
