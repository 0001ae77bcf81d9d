//! Persistence seam for products.

use std::sync::Arc;

use catalog_core::{DomainResult, ProductId};

use crate::product::Product;

/// Storage abstraction for [`Product`] entities.
pub trait ProductRepository: Send + Sync {
    fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>>;

    /// Exact, case-sensitive match on the stored name.
    fn find_by_name(&self, name: &str) -> DomainResult<Option<Product>>;

    /// All stored products, ordered by id.
    fn find_all(&self) -> DomainResult<Vec<Product>>;

    /// Persist a product and return it with its identity populated.
    ///
    /// A product without an id gets a fresh one; a product with an id
    /// replaces the stored record.
    fn save(&self, product: Product) -> DomainResult<Product>;
}

impl<S> ProductRepository for Arc<S>
where
    S: ProductRepository + ?Sized,
{
    fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>> {
        (**self).find_by_id(id)
    }

    fn find_by_name(&self, name: &str) -> DomainResult<Option<Product>> {
        (**self).find_by_name(name)
    }

    fn find_all(&self) -> DomainResult<Vec<Product>> {
        (**self).find_all()
    }

    fn save(&self, product: Product) -> DomainResult<Product> {
        (**self).save(product)
    }
}
