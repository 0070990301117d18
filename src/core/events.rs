use std::collections::HashMap;
use chrono::{NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::library::LibraryResult;
use crate::utils::date::serializer;

// DomainEventType defines type of event for catalog and circulation changes
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum DomainEventType {
    Added,
    Updated,
    Deleted,
}

// DomainEvent records a committed change, e.g. a book entering the catalog or a late fee being paid
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    pub event_id: String,
    pub name: String,
    pub group: String,
    pub key: String,
    pub kind: DomainEventType,
    pub metadata: HashMap<String, String>,
    pub json_data: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl DomainEvent {
    pub fn added<T: Serialize>(name: &str, group: &str, key: &str, metadata: &HashMap<String, String>, data: &T) -> serde_json::Result<Self> {
        Self::record(DomainEventType::Added, name, group, key, metadata, data)
    }

    pub fn updated<T: Serialize>(name: &str, group: &str, key: &str, metadata: &HashMap<String, String>, data: &T) -> serde_json::Result<Self> {
        Self::record(DomainEventType::Updated, name, group, key, metadata, data)
    }

    pub fn deleted<T: Serialize>(name: &str, group: &str, key: &str, metadata: &HashMap<String, String>, data: &T) -> serde_json::Result<Self> {
        Self::record(DomainEventType::Deleted, name, group, key, metadata, data)
    }

    // decodes the JSON body back into the type it was recorded from
    pub fn payload<T: DeserializeOwned>(&self) -> LibraryResult<T> {
        Ok(serde_json::from_str(self.json_data.as_str())?)
    }

    fn record<T: Serialize>(kind: DomainEventType, name: &str, group: &str, key: &str,
                            metadata: &HashMap<String, String>, data: &T) -> serde_json::Result<Self> {
        Ok(DomainEvent {
            event_id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            group: group.to_string(),
            key: key.to_string(),
            kind,
            metadata: metadata.clone(),
            json_data: serde_json::to_string(data)?,
            created_at: Utc::now().naive_utc(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::{DomainEvent, DomainEventType};

    #[tokio::test]
    async fn test_should_build_added() {
        let data = HashMap::from([("isbn", "9780743273565")]);
        let event = DomainEvent::added("book_added", "books", "book1", &HashMap::new(), &data).expect("build event");
        assert_eq!("book_added", event.name.as_str());
        assert_eq!("book1", event.key.as_str());
        assert_eq!(DomainEventType::Added, event.kind);
    }

    #[tokio::test]
    async fn test_should_build_updated() {
        let data = HashMap::from([("patron_id", "123456")]);
        let event = DomainEvent::updated("book_returned", "checkout", "checkout1",
                                         &HashMap::from([("branch".to_string(), "main".to_string())]), &data).expect("build event");
        assert_eq!(DomainEventType::Updated, event.kind);
        assert_eq!(Some(&"main".to_string()), event.metadata.get("branch"));
    }

    #[tokio::test]
    async fn test_should_build_deleted() {
        let event = DomainEvent::deleted("late_fee_refunded", "payments", "txn_123456_1", &HashMap::new(), &"5.50").expect("build event");
        assert_eq!(DomainEventType::Deleted, event.kind);
    }

    #[tokio::test]
    async fn test_should_decode_payload() {
        let data = HashMap::from([("a".to_string(), 1), ("b".to_string(), 2)]);
        let event = DomainEvent::added("name", "group", "key", &HashMap::new(), &data).expect("build event");
        let decoded: HashMap<String, i32> = event.payload().expect("should decode payload");
        assert_eq!(data, decoded);
    }
}
