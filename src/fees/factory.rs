use crate::catalog::factory::create_catalog_service;
use crate::checkout::factory::create_checkout_repository;
use crate::core::domain::Configuration;
use crate::fees::domain::LateFeeService;
use crate::fees::domain::service::LateFeeServiceImpl;
use crate::utils::memory::MemoryClient;

pub fn create_late_fee_service(config: &Configuration, client: &MemoryClient) -> Box<dyn LateFeeService> {
    Box::new(LateFeeServiceImpl::new(create_checkout_repository(client),
                                     create_catalog_service(config, client)))
}
