use crate::checkout::factory::create_checkout_repository;
use crate::core::domain::Configuration;
use crate::fees::factory::create_late_fee_service;
use crate::patrons::domain::PatronStatusService;
use crate::patrons::domain::service::PatronStatusServiceImpl;
use crate::utils::memory::MemoryClient;

pub fn create_patron_status_service(config: &Configuration, client: &MemoryClient) -> Box<dyn PatronStatusService> {
    Box::new(PatronStatusServiceImpl::new(create_checkout_repository(client),
                                          create_late_fee_service(config, client)))
}
