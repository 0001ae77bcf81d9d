//! Infrastructure layer: storage adapters, config, and service wiring.

pub mod config;
pub mod repository;


use std::sync::Arc;

use catalog_products::{ProductMapper, ProductService};

pub use config::CatalogConfig;
pub use repository::InMemoryProductRepository;

/// Service backed by the in-memory repository.
pub type InMemoryProductService = ProductService<Arc<InMemoryProductRepository>>;

/// Wire a [`ProductService`] over a fresh in-memory repository.
///
/// The repository handle is shared so callers can inspect the table.
pub fn build_product_service(config: &CatalogConfig) -> (InMemoryProductService, Arc<InMemoryProductRepository>) {
    let repository = Arc::new(InMemoryProductRepository::new());
    let service = ProductService::with_rules(repository.clone(), ProductMapper::new(), config.product_rules());
    tracing::info!(stock_limit = config.stock_limit, "product service ready");
    (service, repository)
}
