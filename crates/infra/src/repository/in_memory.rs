use std::collections::BTreeMap;
use std::sync::RwLock;

use catalog_core::{DomainError, DomainResult, Entity, ProductId};
use catalog_products::{Product, ProductRepository};

#[derive(Debug)]
struct Table {
    rows: BTreeMap<ProductId, Product>,
    /// `None` once the sequence has handed out (or been pushed past) `u64::MAX`.
    next_id: Option<u64>,
}

/// In-memory product table for tests/dev.
///
/// Ids come from a sequence starting at 1. Names are unique across the table,
/// the same way a unique column constraint would enforce it.
#[derive(Debug)]
pub struct InMemoryProductRepository {
    inner: RwLock<Table>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: Some(1),
            }),
        }
    }

    pub fn len(&self) -> DomainResult<usize> {
        Ok(self.read()?.rows.len())
    }

    pub fn is_empty(&self) -> DomainResult<bool> {
        Ok(self.len()? == 0)
    }

    fn read(&self) -> DomainResult<std::sync::RwLockReadGuard<'_, Table>> {
        self.inner
            .read()
            .map_err(|_| DomainError::storage("product table lock poisoned"))
    }

    fn write(&self) -> DomainResult<std::sync::RwLockWriteGuard<'_, Table>> {
        self.inner
            .write()
            .map_err(|_| DomainError::storage("product table lock poisoned"))
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>> {
        Ok(self.read()?.rows.get(&id).cloned())
    }

    fn find_by_name(&self, name: &str) -> DomainResult<Option<Product>> {
        let table = self.read()?;
        Ok(table.rows.values().find(|p| p.name() == name).cloned())
    }

    fn find_all(&self) -> DomainResult<Vec<Product>> {
        Ok(self.read()?.rows.values().cloned().collect())
    }

    fn save(&self, product: Product) -> DomainResult<Product> {
        let mut table = self.write()?;

        let clash = table
            .rows
            .values()
            .any(|p| p.name() == product.name() && p.id() != product.id());
        if clash {
            return Err(DomainError::already_exists(format!(
                "product named '{}'",
                product.name()
            )));
        }

        let id = match product.id() {
            Some(id) => {
                // Keep the sequence ahead of explicitly chosen ids.
                table.next_id = match (table.next_id, id.get().checked_add(1)) {
                    (Some(next), Some(after)) => Some(next.max(after)),
                    _ => None,
                };
                id
            }
            None => {
                let raw = table
                    .next_id
                    .ok_or_else(|| DomainError::storage("product id sequence exhausted"))?;
                let id = ProductId::new(raw)?;
                if table.rows.contains_key(&id) {
                    return Err(DomainError::storage(format!("product id {id} already allocated")));
                }
                table.next_id = raw.checked_add(1);
                id
            }
        };

        let stored = product.with_id(id);
        table.rows.insert(id, stored.clone());
        tracing::debug!(product_id = %id, "product row written");
        Ok(stored)
    }
}
