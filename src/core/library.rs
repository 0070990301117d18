use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

// ReasonCode names the specific rule or collaborator step behind a LibraryError so that callers
// can branch on the failure without parsing the message.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum ReasonCode {
    InvalidTitle,
    InvalidAuthor,
    InvalidIsbn,
    InvalidCopies,
    InvalidPatron,
    InvalidTransactionId,
    InvalidAmount,
    ExceedsMaximum,
    BookNotFound,
    CheckoutNotFound,
    DuplicateIsbn,
    BookUnavailable,
    BorrowLimitExceeded,
    NotBorrowedByPatron,
    FeeCalculationFailed,
    NoFeeDue,
    BookInsertFailed,
    BorrowRecordFailed,
    AvailabilityUpdateFailed,
    ReturnDateFailed,
    StoreUnavailable,
    PaymentDeclined,
    PaymentProcessingError,
    RefundFailed,
    RefundProcessingError,
    Serialization,
    Unknown,
}

impl Display for ReasonCode {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug)]
pub enum LibraryError {
    Validation {
        message: String,
        reason_code: ReasonCode,
    },
    NotFound {
        message: String,
        reason_code: ReasonCode,
    },
    DuplicateKey {
        message: String,
        reason_code: ReasonCode,
    },
    // The requested copy cannot be handed out right now; it may become available once another
    // patron returns one.
    CurrentlyUnavailable {
        message: String,
        reason_code: ReasonCode,
        retryable: bool,
    },
    // A circulation or fee rule refuses the request for this patron.
    NotGranted {
        message: String,
        reason_code: ReasonCode,
    },
    Database {
        message: String,
        reason_code: ReasonCode,
        retryable: bool,
    },
    // The payment gateway declined or failed while handling the request.
    ExternalService {
        message: String,
        reason_code: ReasonCode,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: ReasonCode,
    },
}

impl LibraryError {
    pub fn database(message: &str, reason_code: ReasonCode, retryable: bool) -> LibraryError {
        LibraryError::Database { message: message.to_string(), reason_code, retryable }
    }

    pub fn duplicate_key(message: &str, reason_code: ReasonCode) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string(), reason_code }
    }

    pub fn not_found(message: &str, reason_code: ReasonCode) -> LibraryError {
        LibraryError::NotFound { message: message.to_string(), reason_code }
    }

    pub fn unavailable(message: &str, reason_code: ReasonCode, retryable: bool) -> LibraryError {
        LibraryError::CurrentlyUnavailable { message: message.to_string(), reason_code, retryable }
    }

    pub fn not_granted(message: &str, reason_code: ReasonCode) -> LibraryError {
        LibraryError::NotGranted { message: message.to_string(), reason_code }
    }

    pub fn validation(message: &str, reason_code: ReasonCode) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn external_service(message: &str, reason_code: ReasonCode) -> LibraryError {
        LibraryError::ExternalService { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: ReasonCode) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn message(&self) -> &str {
        match self {
            LibraryError::Validation { message, .. } => { message }
            LibraryError::NotFound { message, .. } => { message }
            LibraryError::DuplicateKey { message, .. } => { message }
            LibraryError::CurrentlyUnavailable { message, .. } => { message }
            LibraryError::NotGranted { message, .. } => { message }
            LibraryError::Database { message, .. } => { message }
            LibraryError::ExternalService { message, .. } => { message }
            LibraryError::Serialization { message } => { message }
            LibraryError::Runtime { message, .. } => { message }
        }
    }

    pub fn reason_code(&self) -> ReasonCode {
        match self {
            LibraryError::Validation { reason_code, .. } => { *reason_code }
            LibraryError::NotFound { reason_code, .. } => { *reason_code }
            LibraryError::DuplicateKey { reason_code, .. } => { *reason_code }
            LibraryError::CurrentlyUnavailable { reason_code, .. } => { *reason_code }
            LibraryError::NotGranted { reason_code, .. } => { *reason_code }
            LibraryError::Database { reason_code, .. } => { *reason_code }
            LibraryError::ExternalService { reason_code, .. } => { *reason_code }
            LibraryError::Serialization { .. } => { ReasonCode::Serialization }
            LibraryError::Runtime { reason_code, .. } => { *reason_code }
        }
    }

    pub fn retryable(&self) -> bool {
        match self {
            LibraryError::Validation { .. } => { false }
            LibraryError::NotFound { .. } => { false }
            LibraryError::DuplicateKey { .. } => { false }
            LibraryError::CurrentlyUnavailable { retryable, .. } => { *retryable }
            LibraryError::NotGranted { .. } => { false }
            LibraryError::Database { retryable, .. } => { *retryable }
            LibraryError::ExternalService { .. } => { false }
            LibraryError::Serialization { .. } => { false }
            LibraryError::Runtime { .. } => { false }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LibraryError::NotFound { .. })
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("serde io {:?}", err).as_str(), ReasonCode::Unknown)
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for library operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum CheckoutStatus {
    CheckedOut,
    Returned,
}

impl From<String> for CheckoutStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "CheckedOut" => CheckoutStatus::CheckedOut,
            "Returned" => CheckoutStatus::Returned,
            _ => CheckoutStatus::CheckedOut,
        }
    }
}

impl Display for CheckoutStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            CheckoutStatus::CheckedOut => write!(f, "CheckedOut"),
            CheckoutStatus::Returned => write!(f, "Returned"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum LateFeeStatus {
    #[serde(rename = "success")]
    Success,
    #[serde(rename = "Book was not borrowed by patron")]
    NotBorrowed,
}

impl From<String> for LateFeeStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "success" => LateFeeStatus::Success,
            _ => LateFeeStatus::NotBorrowed,
        }
    }
}

impl Display for LateFeeStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            LateFeeStatus::Success => write!(f, "success"),
            LateFeeStatus::NotBorrowed => write!(f, "Book was not borrowed by patron"),
        }
    }
}
