pub mod events;
pub mod factory;
pub mod logs;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum GatewayPublisherVia {
    Logs,
    Disabled,
}

impl GatewayPublisherVia {
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled { GatewayPublisherVia::Logs } else { GatewayPublisherVia::Disabled }
    }
}

#[cfg(test)]
mod tests {
    use crate::gateway::GatewayPublisherVia;

    #[test]
    fn test_should_pick_publisher_via() {
        assert_eq!(GatewayPublisherVia::Logs, GatewayPublisherVia::from_enabled(true));
        assert_eq!(GatewayPublisherVia::Disabled, GatewayPublisherVia::from_enabled(false));
    }
}
