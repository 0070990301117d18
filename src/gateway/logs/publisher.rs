use async_trait::async_trait;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogsPublisher ships every domain event as a structured tracing record
#[derive(Debug, Default)]
pub struct LogsPublisher {}

impl LogsPublisher {
    pub(crate) fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl EventPublisher for LogsPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        let json = serde_json::to_string(event)?;
        tracing::info!(event_id = event.event_id.as_str(), event_name = event.name.as_str(),
            group = event.group.as_str(), key = event.key.as_str(), "{}", json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::DomainEvent;
    use crate::gateway::{factory, GatewayPublisherVia};
    use crate::utils::memory::build_memory_client;

    #[tokio::test]
    async fn test_should_publish_to_logs() {
        let client = build_memory_client();
        let data = HashMap::from([("a", 1), ("b", 2)]);
        let event = DomainEvent::added("book_added", "books", "key", &HashMap::from([("k".to_string(), "v".to_string())]), &data).expect("build event");
        let publisher = factory::create_publisher(GatewayPublisherVia::Logs, &client);
        let _ = publisher.publish(&event).await.expect("should publish");
        assert_eq!(0, client.events().expect("should read events").len());
    }
}
