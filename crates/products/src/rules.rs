//! Validation gates applied before a product is persisted.

use catalog_core::{DomainError, DomainResult};

use crate::product::Price;

/// Stock must stay strictly below this unless configured otherwise.
pub const DEFAULT_STOCK_LIMIT: u32 = 20;

/// Business rules for new products.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ProductRules {
    stock_limit: u32,
}

impl ProductRules {
    /// `stock_limit` is exclusive: a stock equal to it is rejected.
    pub fn new(stock_limit: u32) -> Self {
        Self { stock_limit }
    }

    pub fn stock_limit(&self) -> u32 {
        self.stock_limit
    }

    /// Accepts `0 <= stock < stock_limit`.
    pub fn check_stock(&self, stock: i32) -> DomainResult<u32> {
        let limit = self.stock_limit;
        match u32::try_from(stock) {
            Ok(stock) if stock < limit => Ok(stock),
            Ok(stock) => Err(DomainError::out_of_range(format!(
                "stock {stock} must be less than {limit}"
            ))),
            Err(_) => Err(negative_stock(stock)),
        }
    }

    pub fn check_name(&self, name: &str) -> DomainResult<()> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(())
    }

    pub fn check_price(&self, price: f64) -> DomainResult<Price> {
        Price::new(price)
    }
}

/// Error for a stock value that has no `u32` representation.
pub(crate) fn negative_stock(stock: i32) -> DomainError {
    DomainError::out_of_range(format!("stock {stock} cannot be negative"))
}

impl Default for ProductRules {
    fn default() -> Self {
        Self::new(DEFAULT_STOCK_LIMIT)
    }
}
