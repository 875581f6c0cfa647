use crate::gateway::events::{EventPublisher, NoopPublisher};
use crate::gateway::GatewayPublisherVia;
use crate::gateway::logs::publisher::LogPublisher;

pub fn create_publisher(via: GatewayPublisherVia, branch_id: &str) -> Box<dyn EventPublisher> {
    match via {
        GatewayPublisherVia::Logs => {
            Box::new(LogPublisher::new(branch_id))
        }
        GatewayPublisherVia::Disabled => {
            Box::new(NoopPublisher)
        }
    }
}
