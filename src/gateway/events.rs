use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;

pub trait EventPublisher {
    fn publish(&self, event: &DomainEvent) -> LibraryResult<()>;
}

// Drops every event; used when a session runs with events turned off.
#[derive(Debug, Default)]
pub struct NoopPublisher;

impl EventPublisher for NoopPublisher {
    fn publish(&self, _event: &DomainEvent) -> LibraryResult<()> {
        Ok(())
    }
}
