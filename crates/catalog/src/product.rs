use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Entity, ProductId};

use crate::confirm::ConfirmPriceDrop;
use crate::price::Price;

/// Attributes specific to smartphones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmartphoneSpec {
    pub performance: f64,
    pub model: String,
    pub memory: u32, // GB
    pub color: String,
}

/// Attributes specific to lawn grass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LawnGrassSpec {
    pub manufacturer_country: String,
    pub germination_period: u32, // days
    pub color: String,
}

/// Concrete kind of a product.
///
/// Two products can only be combined when their kinds match.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProductKind {
    #[default]
    Standard,
    Smartphone(SmartphoneSpec),
    LawnGrass(LawnGrassSpec),
}

impl ProductKind {
    /// Stable kind name (e.g. "smartphone").
    pub fn label(&self) -> &'static str {
        match self {
            ProductKind::Standard => "standard",
            ProductKind::Smartphone(_) => "smartphone",
            ProductKind::LawnGrass(_) => "lawn_grass",
        }
    }

    pub fn same_kind_as(&self, other: &ProductKind) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
    }
}

/// Outcome of [`Product::set_price`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceUpdate {
    /// New price was not lower than the current one and has been applied.
    Accepted,
    /// A lower price was confirmed and applied.
    Lowered,
    /// A lower price was not confirmed; the price is unchanged.
    Cancelled,
    /// The new price was not a positive number; the price is unchanged.
    Rejected,
}

impl PriceUpdate {
    /// Whether the price now equals the requested value.
    pub fn is_applied(self) -> bool {
        matches!(self, PriceUpdate::Accepted | PriceUpdate::Lowered)
    }
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    price: Price,
    quantity: i64,
    kind: ProductKind,
    created_at: DateTime<Utc>,
}

impl Product {
    /// Create a standard product.
    pub fn create(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> DomainResult<Self> {
        Self::of_kind(name, description, price, quantity, ProductKind::Standard)
    }

    pub fn smartphone(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: i64,
        spec: SmartphoneSpec,
    ) -> DomainResult<Self> {
        Self::of_kind(name, description, price, quantity, ProductKind::Smartphone(spec))
    }

    pub fn lawn_grass(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: i64,
        spec: LawnGrassSpec,
    ) -> DomainResult<Self> {
        Self::of_kind(name, description, price, quantity, ProductKind::LawnGrass(spec))
    }

    /// Create a product of any kind.
    ///
    /// A zero quantity is allowed here (the product exists but is out of
    /// stock); categories refuse such products on add.
    pub fn of_kind(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: i64,
        kind: ProductKind,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if quantity < 0 {
            return Err(DomainError::validation(format!(
                "quantity cannot be negative, got {quantity}"
            )));
        }
        let price = Price::new(price)?;

        let product = Self {
            id: ProductId::new(),
            name,
            description: description.into(),
            price,
            quantity,
            kind,
            created_at: Utc::now(),
        };

        tracing::info!(
            product_id = %product.id,
            kind = product.kind.label(),
            name = %product.name,
            price = %product.price,
            quantity = product.quantity,
            "product created"
        );

        Ok(product)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Value of the stock on hand (price × quantity).
    pub fn stock_value(&self) -> f64 {
        self.price.value() * self.quantity as f64
    }

    /// Guarded price update.
    ///
    /// Non-positive values are rejected with a warning rather than an error.
    /// A lower price needs `confirm` to agree; an equal or higher price is
    /// always applied.
    pub fn set_price<C>(&mut self, new_price: f64, confirm: &mut C) -> PriceUpdate
    where
        C: ConfirmPriceDrop + ?Sized,
    {
        let candidate = match Price::new(new_price) {
            Ok(price) => price,
            Err(err) => {
                tracing::warn!(
                    product_id = %self.id,
                    name = %self.name,
                    new_price,
                    error = %err,
                    "price rejected"
                );
                return PriceUpdate::Rejected;
            }
        };

        if candidate >= self.price {
            self.price = candidate;
            return PriceUpdate::Accepted;
        }

        if confirm.confirm(self, candidate) {
            tracing::info!(
                product_id = %self.id,
                name = %self.name,
                from = %self.price,
                to = %candidate,
                "price lowered"
            );
            self.price = candidate;
            PriceUpdate::Lowered
        } else {
            tracing::info!(
                product_id = %self.id,
                name = %self.name,
                kept = %self.price,
                "price drop cancelled"
            );
            PriceUpdate::Cancelled
        }
    }

    /// Combined stock value of two products of the same kind.
    pub fn combined_value(&self, other: &Product) -> DomainResult<f64> {
        if !self.kind.same_kind_as(&other.kind) {
            return Err(DomainError::type_mismatch(format!(
                "cannot combine {} with {}",
                self.kind.label(),
                other.kind.label()
            )));
        }
        Ok(self.stock_value() + other.stock_value())
    }

    /// Fold an incoming delivery of the same product into this one: the price
    /// only ever goes up, the quantity accumulates. Returns whether the price
    /// was raised. Nothing changes when the quantity would overflow.
    pub(crate) fn absorb(&mut self, incoming: &Product) -> DomainResult<bool> {
        let quantity = self.quantity.checked_add(incoming.quantity).ok_or_else(|| {
            DomainError::validation(format!(
                "quantity of '{}' would overflow: {} + {}",
                self.name, self.quantity, incoming.quantity
            ))
        })?;

        self.quantity = quantity;
        if incoming.price > self.price {
            self.price = incoming.price;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::ops::Add for &Product {
    type Output = DomainResult<f64>;

    fn add(self, rhs: &Product) -> Self::Output {
        self.combined_value(rhs)
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}, {} rub. Remaining: {} pcs.",
            self.name, self.price, self.quantity
        )
    }
}
