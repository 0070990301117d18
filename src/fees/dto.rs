use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::core::library::LateFeeStatus;
use crate::fees::domain::calculator::{days_overdue, late_fee_for};

// LateFeeQuote is the fee owed on one borrow record at the time it was asked for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LateFeeQuote {
    pub fee_amount: Decimal,
    pub days_overdue: i64,
    pub status: LateFeeStatus,
}

impl LateFeeQuote {
    pub fn for_due_date(due_at: &NaiveDateTime, now: &NaiveDateTime) -> Self {
        let days = days_overdue(due_at, now);
        Self {
            fee_amount: late_fee_for(days),
            days_overdue: days,
            status: LateFeeStatus::Success,
        }
    }

    pub fn not_borrowed() -> Self {
        Self {
            fee_amount: late_fee_for(0),
            days_overdue: 0,
            status: LateFeeStatus::NotBorrowed,
        }
    }

    pub fn is_due(&self) -> bool {
        self.fee_amount > Decimal::ZERO
    }
}
