//! Catalog service: lookups and validated saves over a [`ProductRepository`].

use catalog_core::{DomainError, DomainResult, ProductId};

use crate::mapper::ProductMapper;
use crate::product::{ProductRequest, ProductResponse};
use crate::repository::ProductRepository;
use crate::rules::ProductRules;

/// Product catalog operations.
///
/// `save` runs its gates in a fixed order: name and price, stock range, then
/// name uniqueness. The repository is only written once every gate passed.
#[derive(Debug)]
pub struct ProductService<R> {
    repository: R,
    mapper: ProductMapper,
    rules: ProductRules,
}

impl<R> ProductService<R>
where
    R: ProductRepository,
{
    pub fn new(repository: R, mapper: ProductMapper) -> Self {
        Self::with_rules(repository, mapper, ProductRules::default())
    }

    pub fn with_rules(repository: R, mapper: ProductMapper, rules: ProductRules) -> Self {
        Self {
            repository,
            mapper,
            rules,
        }
    }

    pub fn rules(&self) -> &ProductRules {
        &self.rules
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn find_by_id(&self, id: ProductId) -> DomainResult<ProductResponse> {
        tracing::debug!(product_id = %id, "looking up product");

        let product = self
            .repository
            .find_by_id(id)?
            .ok_or_else(|| DomainError::not_found(format!("product {id}")))?;

        self.mapper.to_response(&product)
    }

    pub fn find_all(&self) -> DomainResult<Vec<ProductResponse>> {
        self.repository
            .find_all()?
            .iter()
            .map(|product| self.mapper.to_response(product))
            .collect()
    }

    pub fn save(&self, request: &ProductRequest) -> DomainResult<ProductResponse> {
        self.validate(request).inspect_err(|err| {
            tracing::warn!(name = %request.name, error = %err, "rejected product save");
        })?;

        let product = self.mapper.to_entity(request)?;
        let saved = self.repository.save(product)?;
        let response = self.mapper.to_response(&saved)?;

        tracing::info!(product_id = %response.id, name = %response.name, "product saved");
        Ok(response)
    }

    fn validate(&self, request: &ProductRequest) -> DomainResult<()> {
        let name = request.name.trim();
        self.rules.check_name(name)?;
        self.rules.check_price(request.price)?;
        self.rules.check_stock(request.stock)?;

        if self.repository.find_by_name(name)?.is_some() {
            return Err(DomainError::already_exists(format!("product named '{name}'")));
        }
        Ok(())
    }
}
