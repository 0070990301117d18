use async_trait::async_trait;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;

#[async_trait]
pub trait EventPublisher: Sync + Send {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError>;
}

// Publishes an audit event after a committed change. Failures are logged and swallowed so they
// never alter the outcome reported to the patron.
pub(crate) async fn publish_quietly(publisher: &dyn EventPublisher, event: serde_json::Result<DomainEvent>) {
    match event {
        Ok(event) => {
            if let Err(err) = publisher.publish(&event).await {
                tracing::warn!(event_name = event.name.as_str(), key = event.key.as_str(), "failed to publish event: {}", err);
            }
        }
        Err(err) => {
            tracing::warn!("failed to build event: {}", err);
        }
    }
}
