use crate::books::factory::create_book_repository;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::gateway::factory::create_publisher;
use crate::utils::memory::MemoryClient;

pub fn create_catalog_service(config: &Configuration, client: &MemoryClient) -> Box<dyn CatalogService> {
    let book_repo = create_book_repository(client);
    let publisher = create_publisher(config.events_via, client);
    Box::new(CatalogServiceImpl::new(config, book_repo, publisher))
}
