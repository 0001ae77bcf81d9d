//! Configuration loading and representation.
//!
//! Values come from environment variables; anything missing or malformed
//! falls back to its default with a warning.

use catalog_products::{DEFAULT_STOCK_LIMIT, ProductRules};

pub const STOCK_LIMIT_VAR: &str = "CATALOG_STOCK_LIMIT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Exclusive upper bound for a new product's stock.
    pub stock_limit: u32,
}

impl CatalogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (used by `from_env` and tests).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let stock_limit = match lookup(STOCK_LIMIT_VAR) {
            None => DEFAULT_STOCK_LIMIT,
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(limit) if limit > 0 => limit,
                _ => {
                    tracing::warn!(
                        value = %raw,
                        default = DEFAULT_STOCK_LIMIT,
                        "{STOCK_LIMIT_VAR} is not a positive integer; using default"
                    );
                    DEFAULT_STOCK_LIMIT
                }
            },
        };

        Self { stock_limit }
    }

    pub fn product_rules(&self) -> ProductRules {
        ProductRules::new(self.stock_limit)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            stock_limit: DEFAULT_STOCK_LIMIT,
        }
    }
}
