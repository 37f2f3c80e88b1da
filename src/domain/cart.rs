use super::money::{Money, Price};
use crate::error::{CheckoutError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Customer classification driving the discount policy.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    #[default]
    Standard,
    Premium,
}

impl FromStr for Tier {
    type Err = CheckoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Tier::Standard),
            "premium" => Ok(Tier::Premium),
            other => Err(CheckoutError::ValidationError(format!(
                "Unknown tier '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Standard => f.write_str("STANDARD"),
            Tier::Premium => f.write_str("PREMIUM"),
        }
    }
}

/// A single line item in a cart.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Item {
    name: String,
    price: Price,
}

impl Item {
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }
}

/// The customer placing an order.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct User {
    id: u64,
    name: String,
    email: String,
    tier: Tier,
}

impl User {
    pub fn new(id: u64, name: impl Into<String>, email: impl Into<String>, tier: Tier) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            tier,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }
}

/// An uncommitted collection of items owned by a single user.
///
/// The cart keeps its own snapshot of the items it was built with.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Cart {
    owner: User,
    items: Vec<Item>,
}

impl Cart {
    pub fn new(owner: User, items: Vec<Item>) -> Self {
        Self { owner, items }
    }

    pub fn owner(&self) -> &User {
        &self.owner
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all item prices. An empty cart totals zero.
    ///
    /// Fails with a validation error if the sum does not fit in a `Decimal`.
    pub fn total(&self) -> Result<Money> {
        Money::checked_sum(self.items.iter().map(|item| Money::from(item.price)))
    }
}
