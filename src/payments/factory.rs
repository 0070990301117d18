use crate::catalog::factory::create_catalog_service;
use crate::core::domain::Configuration;
use crate::fees::factory::create_late_fee_service;
use crate::gateway::factory::create_publisher;
use crate::gateway::payment::PaymentGateway;
use crate::payments::domain::PaymentService;
use crate::payments::domain::service::PaymentServiceImpl;
use crate::utils::memory::MemoryClient;

pub fn create_payment_service(config: &Configuration, client: &MemoryClient,
                              payment_gateway: Box<dyn PaymentGateway>) -> Box<dyn PaymentService> {
    let late_fee_svc = create_late_fee_service(config, client);
    let catalog_svc = create_catalog_service(config, client);
    let publisher = create_publisher(config.events_via, client);
    Box::new(PaymentServiceImpl::new(late_fee_svc, catalog_svc, payment_gateway, publisher))
}
