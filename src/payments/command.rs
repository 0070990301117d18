pub mod pay_late_fee_cmd;
pub mod refund_late_fee_cmd;
