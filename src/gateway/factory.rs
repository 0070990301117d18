use crate::gateway::events::EventPublisher;
use crate::gateway::GatewayPublisherVia;
use crate::gateway::logs::publisher::LogsPublisher;
use crate::gateway::memory::publisher::MemoryPublisher;
use crate::gateway::payment::PaymentGateway;
use crate::gateway::simulated::payment_gateway::SimulatedPaymentGateway;
use crate::utils::memory::MemoryClient;

pub fn create_publisher(via: GatewayPublisherVia, client: &MemoryClient) -> Box<dyn EventPublisher> {
    match via {
        GatewayPublisherVia::Logs => {
            Box::new(LogsPublisher::new())
        }
        GatewayPublisherVia::Memory => {
            Box::new(MemoryPublisher::new(client.clone()))
        }
    }
}

pub fn create_payment_gateway() -> Box<dyn PaymentGateway> {
    Box::new(SimulatedPaymentGateway::new())
}
