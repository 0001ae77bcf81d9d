//! Conversions between the product entity and its request/response views.

use catalog_core::{DomainError, DomainResult, Entity};

use crate::product::{Price, Product, ProductRequest, ProductResponse};
use crate::rules;

/// Stateless mapper between [`Product`] and its views.
#[derive(Debug, Default, Copy, Clone)]
pub struct ProductMapper;

impl ProductMapper {
    pub fn new() -> Self {
        Self
    }

    /// Project a persisted product. Fails for a product without identity.
    pub fn to_response(&self, product: &Product) -> DomainResult<ProductResponse> {
        let id = product
            .id()
            .ok_or_else(|| DomainError::invariant("cannot project a product that was never persisted"))?;

        Ok(ProductResponse {
            id,
            name: product.name().to_string(),
            price: product.price().value(),
            stock: product.stock(),
        })
    }

    /// Build an unpersisted product from a request.
    ///
    /// Only converts; range rules are the service's job. Values that cannot
    /// be represented (negative stock, invalid price) still fail here.
    pub fn to_entity(&self, request: &ProductRequest) -> DomainResult<Product> {
        let price = Price::new(request.price)?;
        let stock = u32::try_from(request.stock).map_err(|_| rules::negative_stock(request.stock))?;

        Ok(Product::new(request.name.trim(), price, stock))
    }
}
