//! Products domain module.
//!
//! Business rules for the product catalog: validation gates, mapping between
//! entity and views, and the service that ties them to a repository. No IO
//! happens here; storage lives behind [`ProductRepository`].

pub mod mapper;
pub mod product;
pub mod repository;
pub mod rules;
pub mod service;

pub use mapper::ProductMapper;
pub use product::{Price, Product, ProductRequest, ProductResponse};
pub use repository::ProductRepository;
pub use rules::{DEFAULT_STOCK_LIMIT, ProductRules};
pub use service::ProductService;
