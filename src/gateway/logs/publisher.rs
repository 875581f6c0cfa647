use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;

// LogPublisher writes each domain event to the tracing subscriber as a
// single JSON document.
#[derive(Debug)]
pub struct LogPublisher {
    branch_id: String,
}

impl LogPublisher {
    pub fn new(branch_id: &str) -> Self {
        Self {
            branch_id: branch_id.to_string(),
        }
    }
}

impl EventPublisher for LogPublisher {
    fn publish(&self, event: &DomainEvent) -> LibraryResult<()> {
        let json = serde_json::to_string(event)?;
        info!(branch = self.branch_id.as_str(), kind = ?event.kind, key = event.key.as_str(), event = json.as_str(), "catalog event");
        Ok(())
    }
}
