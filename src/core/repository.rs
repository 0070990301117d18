use async_trait::async_trait;
use crate::core::library::LibraryResult;

// Repository is the entity-level face of the data access collaborator
#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity
    async fn create(&self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity, NotFound when absent
    async fn get(&self, id: &str) -> LibraryResult<Entity>;
}
