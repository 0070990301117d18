use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult, ReasonCode};

const PATRON_ID_LEN: usize = 6;

// PatronId is a library card number: exactly six ASCII digits
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct PatronId(String);

impl PatronId {
    pub fn parse(raw: &str) -> LibraryResult<PatronId> {
        if raw.len() == PATRON_ID_LEN && raw.bytes().all(|b| b.is_ascii_digit()) {
            Ok(PatronId(raw.to_string()))
        } else {
            Err(LibraryError::validation("Invalid patron ID. Must be exactly 6 digits.", ReasonCode::InvalidPatron))
        }
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for PatronId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::ReasonCode;
    use crate::patrons::domain::model::PatronId;

    #[tokio::test]
    async fn test_should_parse_patron_id() {
        let patron = PatronId::parse("123456").expect("should parse");
        assert_eq!("123456", patron.as_str());
        assert_eq!("123456", patron.to_string());
    }

    #[tokio::test]
    async fn test_should_reject_bad_patron_ids() {
        for raw in ["", "12345", "1234567", "12a456", " 12345", "１２３４５６"] {
            let err = PatronId::parse(raw).expect_err("should reject");
            assert_eq!(ReasonCode::InvalidPatron, err.reason_code());
            assert_eq!("Invalid patron ID. Must be exactly 6 digits.", err.message());
        }
    }
}
