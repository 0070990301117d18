pub mod get_patron_status_cmd;
