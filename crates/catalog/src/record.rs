//! Loose product records, as found in seed files or other untyped input.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use storefront_core::{DomainError, DomainResult};

use crate::product::{Product, ProductKind};

/// Product-shaped record before validation.
///
/// Shape is checked when decoding (wrong shape → `TypeMismatch`); values are
/// checked when turning it into a [`Product`] (bad values → `Validation`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub quantity: i64,
    #[serde(default)]
    pub kind: ProductKind,
}

impl ProductRecord {
    pub fn from_value(value: &Value) -> DomainResult<Self> {
        if !value.is_object() {
            return Err(DomainError::type_mismatch(format!(
                "expected a product record, found {}",
                json_type(value)
            )));
        }
        Self::deserialize(value)
            .map_err(|e| DomainError::type_mismatch(format!("not a product record: {e}")))
    }

    pub fn into_product(self) -> DomainResult<Product> {
        Product::of_kind(self.name, self.description, self.price, self.quantity, self.kind)
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
