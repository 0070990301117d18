use async_trait::async_trait;
use serde::Serialize;
use crate::core::library::{LibraryError, ReasonCode};

// CommandError is the failure half of every command outcome; the UI renders `message` as-is.
#[derive(Debug, Serialize)]
#[serde(tag = "kind")]
pub enum CommandError {
    Database {
        message: String,
        reason_code: ReasonCode,
        retryable: bool,
    },
    DuplicateKey {
        message: String,
        reason_code: ReasonCode,
    },
    ExternalService {
        message: String,
        reason_code: ReasonCode,
    },
    NotFound {
        message: String,
        reason_code: ReasonCode,
    },
    Rejected {
        message: String,
        reason_code: ReasonCode,
        retryable: bool,
    },
    Runtime {
        message: String,
        reason_code: ReasonCode,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: ReasonCode,
    },
}

impl CommandError {
    pub fn message(&self) -> &str {
        match self {
            CommandError::Database { message, .. } => { message }
            CommandError::DuplicateKey { message, .. } => { message }
            CommandError::ExternalService { message, .. } => { message }
            CommandError::NotFound { message, .. } => { message }
            CommandError::Rejected { message, .. } => { message }
            CommandError::Runtime { message, .. } => { message }
            CommandError::Serialization { message } => { message }
            CommandError::Validation { message, .. } => { message }
        }
    }

    pub fn reason_code(&self) -> ReasonCode {
        match self {
            CommandError::Database { reason_code, .. } => { *reason_code }
            CommandError::DuplicateKey { reason_code, .. } => { *reason_code }
            CommandError::ExternalService { reason_code, .. } => { *reason_code }
            CommandError::NotFound { reason_code, .. } => { *reason_code }
            CommandError::Rejected { reason_code, .. } => { *reason_code }
            CommandError::Runtime { reason_code, .. } => { *reason_code }
            CommandError::Serialization { .. } => { ReasonCode::Serialization }
            CommandError::Validation { reason_code, .. } => { *reason_code }
        }
    }

    // success flag and message in the shape the presentation layer consumes
    pub fn outcome(&self) -> (bool, String) {
        (false, self.message().to_string())
    }
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::Database { message, reason_code, retryable } => {
                CommandError::Database { message, reason_code, retryable }
            }
            LibraryError::DuplicateKey { message, reason_code } => {
                CommandError::DuplicateKey { message, reason_code }
            }
            LibraryError::NotFound { message, reason_code } => {
                CommandError::NotFound { message, reason_code }
            }
            LibraryError::CurrentlyUnavailable { message, reason_code, retryable } => {
                CommandError::Rejected { message, reason_code, retryable }
            }
            LibraryError::NotGranted { message, reason_code } => {
                CommandError::Rejected { message, reason_code, retryable: false }
            }
            LibraryError::ExternalService { message, reason_code } => {
                CommandError::ExternalService { message, reason_code }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}
