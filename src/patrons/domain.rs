use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::patrons::dto::PatronStatusDto;

pub mod model;
pub mod service;

#[async_trait]
pub trait PatronStatusService: Sync + Send {
    async fn status_report(&self, patron_id: &str) -> LibraryResult<PatronStatusDto>;
}
