use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Entity};

use crate::price::Price;

/// Product identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl ProductId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Inventory entity: Product.
///
/// `id`, `name` and `price` are fixed at construction; only `stock` changes
/// afterwards, through the guarded increase/decrease operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Price,
    stock: i64,
}

impl Product {
    /// Create a validated product.
    ///
    /// Every field is checked before any state exists: a failed check yields
    /// no product value at all, never a partially-initialized one.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Price,
        stock: i64,
    ) -> DomainResult<Self> {
        let name = name.into();

        if id.0 < 5 || id.0 > 50_000 {
            return Err(DomainError::out_of_range(
                "Product ID must be between 5 and 50000",
            ));
        }
        if price.cents() < 500 || price.cents() > 500_000 {
            return Err(DomainError::out_of_range(
                "Price must be between $5 and $5000",
            ));
        }
        if stock < 5 || stock > 500_000 {
            return Err(DomainError::out_of_range(
                "Stock must be between 5 and 500000",
            ));
        }
        if name.trim().is_empty() {
            return Err(DomainError::invalid_argument(
                "Product Name cannot be empty or whitespace",
            ));
        }

        Ok(Self {
            id,
            name,
            price,
            stock,
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }

    /// Invariant helper: whether any units are currently available.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Add units to stock.
    ///
    /// The 500000 ceiling applies at construction only; increases past it are
    /// accepted.
    pub fn increase_stock(&mut self, amount: i64) -> DomainResult<()> {
        if amount < 1 {
            return Err(DomainError::invalid_argument(
                "Increase amount must be at least 1",
            ));
        }
        self.stock += amount;
        Ok(())
    }

    /// Remove units from stock. Stock may reach 0 but never go below it.
    pub fn decrease_stock(&mut self, amount: i64) -> DomainResult<()> {
        if amount < 1 {
            return Err(DomainError::invalid_argument(
                "Decrease amount must be at least 1",
            ));
        }
        if self.stock - amount < 0 {
            return Err(DomainError::invalid_operation("Stock cannot be negative"));
        }
        self.stock -= amount;
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
