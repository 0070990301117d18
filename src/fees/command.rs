pub mod get_late_fee_cmd;
