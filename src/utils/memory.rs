use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use crate::books::domain::model::BookEntity;
use crate::checkout::domain::model::CheckoutEntity;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult, ReasonCode};

// MemoryTables holds the rows of the in-memory data store in insertion order
#[derive(Debug, Default)]
pub struct MemoryTables {
    pub(crate) books: Vec<BookEntity>,
    pub(crate) checkouts: Vec<CheckoutEntity>,
    pub(crate) events: Vec<DomainEvent>,
}

// MemoryClient is a cheap-to-clone handle; every clone sees the same tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryClient {
    tables: Arc<RwLock<MemoryTables>>,
}

impl MemoryClient {
    pub(crate) fn read(&self) -> LibraryResult<RwLockReadGuard<'_, MemoryTables>> {
        self.tables.read().map_err(|err| LibraryError::database(
            format!("memory store unavailable {}", err).as_str(), ReasonCode::StoreUnavailable, false))
    }

    pub(crate) fn write(&self) -> LibraryResult<RwLockWriteGuard<'_, MemoryTables>> {
        self.tables.write().map_err(|err| LibraryError::database(
            format!("memory store unavailable {}", err).as_str(), ReasonCode::StoreUnavailable, false))
    }

    // events recorded by the memory publisher, oldest first
    pub fn events(&self) -> LibraryResult<Vec<DomainEvent>> {
        Ok(self.read()?.events.clone())
    }
}

pub fn build_memory_client() -> MemoryClient {
    MemoryClient::default()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::DomainEvent;
    use crate::utils::memory::build_memory_client;

    #[tokio::test]
    async fn test_should_share_tables_between_clones() {
        let client = build_memory_client();
        let other = client.clone();
        let event = DomainEvent::added("book_added", "books", "key", &HashMap::new(), &"data").expect("build event");
        other.write().expect("should lock").events.push(event.clone());
        assert_eq!(vec![event], client.events().expect("should read events"));
    }
}
