use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::gateway::factory::create_publisher;
use crate::gateway::GatewayPublisherVia;

// Each call starts a new session with its own empty catalog.
pub fn create_catalog_service(config: &Configuration) -> Box<dyn CatalogService> {
    let book_repo = factory::create_book_repository();
    let publisher = create_publisher(GatewayPublisherVia::from_enabled(config.publish_events), config.branch_id.as_str());
    Box::new(CatalogServiceImpl::new(config, book_repo, publisher))
}
