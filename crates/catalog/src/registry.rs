//! Catalog-wide counters.

use storefront_core::DomainResult;

use crate::category::{Category, Restock};
use crate::product::Product;

/// Counts categories created and products added.
///
/// Pass it explicitly wherever categories are built or filled; counters only
/// move on successful operations and are never reset.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CatalogRegistry {
    categories_created: u64,
    products_added: u64,
}

impl CatalogRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn categories_created(&self) -> u64 {
        self.categories_created
    }

    pub fn products_added(&self) -> u64 {
        self.products_added
    }

    pub fn new_category(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Category {
        let category = Category::new(name, description);
        self.categories_created += 1;
        tracing::debug!(
            category = %category.name(),
            categories_created = self.categories_created,
            "category created"
        );
        category
    }

    pub fn add_product(&mut self, category: &mut Category, product: Product) -> DomainResult<()> {
        category.add_product(product)?;
        self.products_added += 1;
        Ok(())
    }

    pub fn add_record(
        &mut self,
        category: &mut Category,
        record: &serde_json::Value,
    ) -> DomainResult<()> {
        category.add_record(record)?;
        self.products_added += 1;
        Ok(())
    }

    /// Merged deliveries do not count as new products.
    pub fn restock(&mut self, category: &mut Category, product: Product) -> DomainResult<Restock> {
        let outcome = category.restock(product)?;
        if outcome == Restock::Added {
            self.products_added += 1;
        }
        Ok(outcome)
    }
}
