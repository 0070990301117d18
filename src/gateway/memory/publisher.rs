use async_trait::async_trait;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, ReasonCode};
use crate::gateway::events::EventPublisher;
use crate::utils::memory::MemoryClient;

#[derive(Debug)]
pub struct MemoryPublisher {
    client: MemoryClient,
}

impl MemoryPublisher {
    pub(crate) fn new(client: MemoryClient) -> Self {
        Self {
            client,
        }
    }
}

#[async_trait]
impl EventPublisher for MemoryPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        let mut tables = self.client.write()?;
        if tables.events.iter().any(|e| e.event_id == event.event_id) {
            return Err(LibraryError::duplicate_key(
                format!("event {} already published", event.event_id).as_str(), ReasonCode::Unknown));
        }
        tables.events.push(event.clone());
        Ok(())
    }
}
