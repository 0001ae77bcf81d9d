use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, DomainResult, Entity, ProductId, ValueObject};

/// Unit price of a product. Finite and never negative.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::validation(format!("price must be a finite number, got {value}")));
        }
        if value < 0.0 {
            return Err(DomainError::validation(format!("price cannot be negative, got {value}")));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl ValueObject for Price {}

impl TryFrom<f64> for Price {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Entity: Product.
///
/// `id` stays `None` until the repository persists the product.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: Option<ProductId>,
    name: String,
    price: Price,
    stock: u32,
}

impl Product {
    /// Build an unpersisted product.
    pub fn new(name: impl Into<String>, price: Price, stock: u32) -> Self {
        Self {
            id: None,
            name: name.into(),
            price,
            stock,
        }
    }

    /// Attach the identity assigned by persistence.
    pub fn with_id(mut self, id: ProductId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Option<Self::Id> {
        self.id
    }
}

/// Input carried by a save call. Not persisted directly.
///
/// Fields hold raw caller input; nothing is validated until the service runs
/// its gates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    pub price: f64,
    pub stock: i32,
}

impl ProductRequest {
    pub fn new(name: impl Into<String>, price: f64, stock: i32) -> Self {
        Self {
            name: name.into(),
            price,
            stock,
        }
    }
}

/// Read-only projection of a persisted product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub stock: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u64) -> ProductId {
        ProductId::new(raw).unwrap()
    }

    #[test]
    fn new_product_is_not_persisted() {
        let product = Product::new("telefono", Price::new(0.5).unwrap(), 10);
        assert_eq!(product.id(), None);
        assert!(!product.is_persisted());
    }

    #[test]
    fn with_id_marks_product_persisted() {
        let product = Product::new("telefono", Price::new(0.5).unwrap(), 10).with_id(id(23));
        assert_eq!(product.id(), Some(id(23)));
        assert!(product.is_persisted());
        assert_eq!(product.name(), "telefono");
        assert_eq!(product.price().value(), 0.5);
        assert_eq!(product.stock(), 10);
    }

    #[test]
    fn price_rejects_negative_and_non_finite_values() {
        assert!(matches!(Price::new(-0.01), Err(DomainError::Validation(_))));
        assert!(matches!(Price::new(f64::NAN), Err(DomainError::Validation(_))));
        assert!(matches!(Price::new(f64::INFINITY), Err(DomainError::Validation(_))));
        assert_eq!(Price::new(0.0).unwrap().value(), 0.0);
    }

    #[test]
    fn price_deserialization_runs_validation() {
        let price: Price = serde_json::from_str("0.5").unwrap();
        assert_eq!(price.value(), 0.5);
        assert!(serde_json::from_str::<Price>("-1.0").is_err());
    }

    #[test]
    fn request_reads_from_json() {
        let request: ProductRequest =
            serde_json::from_str(r#"{"name":"telefono","price":0.5,"stock":9}"#).unwrap();
        assert_eq!(request, ProductRequest::new("telefono", 0.5, 9));
    }

    #[test]
    fn response_serializes_flat() {
        let response = ProductResponse {
            id: id(1),
            name: "telefono".to_string(),
            price: 0.5,
            stock: 9,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "telefono", "price": 0.5, "stock": 9})
        );
    }
}
