use serde::Serialize;

use storefront_core::{CategoryId, DomainError, DomainResult, Entity};

use crate::product::Product;
use crate::record::ProductRecord;

/// Outcome of [`Category::restock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Restock {
    /// No product with that name existed; the product was appended.
    Added,
    /// The delivery was merged into an existing product with the same name.
    Merged { price_raised: bool, quantity: i64 },
}

/// A named group of products.
///
/// Products are kept in insertion order and are never removed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    id: CategoryId,
    name: String,
    description: String,
    products: Vec<Product>,
}

impl Category {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            description: description.into(),
            products: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of product entries (not units in stock).
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// First product with the given name.
    pub fn find(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name() == name)
    }

    /// Mutable access, e.g. for price updates. Quantity is only changed via
    /// [`Category::restock`].
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.name() == name)
    }

    /// Append a product. Products without stock are refused and leave the
    /// category untouched.
    pub fn add_product(&mut self, product: Product) -> DomainResult<()> {
        ensure_in_stock(&product)?;

        tracing::debug!(
            category_id = %self.id,
            category = %self.name,
            product = %product.name(),
            quantity = product.quantity(),
            "product added"
        );
        self.products.push(product);
        Ok(())
    }

    /// Append a product described by an untyped record.
    ///
    /// Fails with [`DomainError::TypeMismatch`] when the record does not have
    /// the shape of a product.
    pub fn add_record(&mut self, record: &serde_json::Value) -> DomainResult<()> {
        let product = ProductRecord::from_value(record)?.into_product()?;
        self.add_product(product)
    }

    /// Receive a delivery: merge into an existing product of the same name
    /// (price may only go up, quantities add) or append it.
    ///
    /// Products are matched by name alone: a delivery of a different kind is
    /// folded into the existing entry and its kind attributes are not kept.
    /// A merge whose quantity would overflow fails and changes nothing.
    pub fn restock(&mut self, product: Product) -> DomainResult<Restock> {
        ensure_in_stock(&product)?;

        let existing = self
            .products
            .iter_mut()
            .find(|p| p.name() == product.name());
        if let Some(existing) = existing {
            let price_raised = existing.absorb(&product)?;
            let quantity = existing.quantity();
            tracing::debug!(
                category = %self.name,
                product = %product.name(),
                price_raised,
                quantity,
                "delivery merged"
            );
            return Ok(Restock::Merged {
                price_raised,
                quantity,
            });
        }

        self.add_product(product)?;
        Ok(Restock::Added)
    }

    /// Units in stock across all products.
    ///
    /// Widened to `i128`: each quantity fits in `i64`, their sum may not.
    pub fn total_quantity(&self) -> i128 {
        self.products
            .iter()
            .map(|p| i128::from(p.quantity()))
            .sum()
    }

    /// Mean unit price; `0.0` for an empty category.
    pub fn average_price(&self) -> f64 {
        if self.products.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.products.iter().map(|p| p.price().value()).sum();
        sum / self.products.len() as f64
    }

    /// One product per line.
    pub fn listing(&self) -> String {
        self.products
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn ensure_in_stock(product: &Product) -> DomainResult<()> {
    if product.quantity() <= 0 {
        return Err(DomainError::validation(format!(
            "quantity of '{}' must be greater than zero",
            product.name()
        )));
    }
    Ok(())
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}, products in stock: {} pcs.",
            self.name,
            self.total_quantity()
        )
    }
}
