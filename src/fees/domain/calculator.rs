use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// no single book ever owes more than this
pub const MAX_LATE_FEE: Decimal = dec!(15.00);

const FIRST_WEEK_DAYS: i64 = 7;
const FIRST_WEEK_DAILY_RATE: Decimal = dec!(0.50);
const FIRST_WEEK_FEE: Decimal = dec!(3.50);
const LATER_DAILY_RATE: Decimal = dec!(1.00);
// tiers apply strictly below this day and the cap strictly above it
const CAP_DAY: i64 = 19;

/// Whole days elapsed since `due_at`, or 0 while the book is not yet due.
pub fn days_overdue(due_at: &NaiveDateTime, now: &NaiveDateTime) -> i64 {
    if now > due_at {
        (*now - *due_at).num_days()
    } else {
        0
    }
}

/// Fee owed for a book that is `days_overdue` days late.
///
/// The first week costs 0.50 per day, later days 1.00 per day on top of the 3.50 already owed,
/// and anything beyond day 19 is capped at `MAX_LATE_FEE`. Day 19 itself matches no tier and
/// owes nothing.
pub fn late_fee_for(days_overdue: i64) -> Decimal {
    let mut fee = if days_overdue <= 0 {
        Decimal::ZERO
    } else if days_overdue <= FIRST_WEEK_DAYS {
        Decimal::from(days_overdue) * FIRST_WEEK_DAILY_RATE
    } else if days_overdue < CAP_DAY {
        Decimal::from(days_overdue - FIRST_WEEK_DAYS) * LATER_DAILY_RATE + FIRST_WEEK_FEE
    } else if days_overdue > CAP_DAY {
        MAX_LATE_FEE
    } else {
        Decimal::ZERO
    };
    fee.rescale(2);
    fee
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use rust_decimal_macros::dec;
    use crate::fees::domain::calculator::{days_overdue, late_fee_for, MAX_LATE_FEE};

    #[tokio::test]
    async fn test_should_count_whole_days_overdue() {
        let due = NaiveDate::from_ymd_opt(2024, 3, 1).and_then(|d| d.and_hms_opt(10, 0, 0)).expect("valid date");
        assert_eq!(0, days_overdue(&due, &(due - Duration::days(3))));
        assert_eq!(0, days_overdue(&due, &due));
        assert_eq!(0, days_overdue(&due, &(due + Duration::hours(23))));
        assert_eq!(1, days_overdue(&due, &(due + Duration::hours(25))));
        assert_eq!(10, days_overdue(&due, &(due + Duration::days(10))));
    }

    #[tokio::test]
    async fn test_should_charge_first_week_daily() {
        assert_eq!(dec!(0.00), late_fee_for(0));
        assert_eq!(dec!(0.50), late_fee_for(1));
        assert_eq!(dec!(2.50), late_fee_for(5));
        assert_eq!(dec!(3.50), late_fee_for(7));
    }

    #[tokio::test]
    async fn test_should_charge_after_first_week() {
        assert_eq!(dec!(4.50), late_fee_for(8));
        assert_eq!(dec!(6.50), late_fee_for(10));
        assert_eq!(dec!(14.50), late_fee_for(18));
    }

    #[tokio::test]
    async fn test_should_cap_after_day_nineteen() {
        assert_eq!(dec!(0.00), late_fee_for(19));
        assert_eq!(MAX_LATE_FEE, late_fee_for(20));
        assert_eq!(MAX_LATE_FEE, late_fee_for(365));
    }

    #[tokio::test]
    async fn test_should_format_with_two_decimals() {
        assert_eq!("2.50", late_fee_for(5).to_string());
        assert_eq!("0.00", late_fee_for(0).to_string());
        assert_eq!("15.00", late_fee_for(30).to_string());
    }
}
