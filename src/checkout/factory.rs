use crate::books::factory::create_book_repository;
use crate::catalog::factory::create_catalog_service;
use crate::checkout::domain::CheckoutService;
use crate::checkout::domain::service::CheckoutServiceImpl;
use crate::checkout::repository::CheckoutRepository;
use crate::checkout::repository::memory_checkout_repository::MemoryCheckoutRepository;
use crate::core::domain::Configuration;
use crate::gateway::factory::create_publisher;
use crate::utils::memory::MemoryClient;

pub fn create_checkout_repository(client: &MemoryClient) -> Box<dyn CheckoutRepository> {
    Box::new(MemoryCheckoutRepository::new(client.clone()))
}

pub fn create_checkout_service(config: &Configuration, client: &MemoryClient) -> Box<dyn CheckoutService> {
    let book_repo = create_book_repository(client);
    let checkout_repo = create_checkout_repository(client);
    let catalog_svc = create_catalog_service(config, client);
    let publisher = create_publisher(config.events_via, client);
    Box::new(CheckoutServiceImpl::new(config, book_repo, checkout_repo,
                                      catalog_svc, publisher))
}
