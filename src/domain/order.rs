use super::cart::User;
use super::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity assigned to an order by the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    Processed,
}

/// The committed result of a successful checkout.
///
/// An order is built in memory without an identity, handed to the repository, and comes
/// back as a copy carrying the assigned `id`. The owner is a value copy of the cart's user.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Order {
    /// Absent until the order has been persisted.
    pub id: Option<OrderId>,
    pub owner: User,
    pub final_total: Money,
    pub status: OrderStatus,
}

impl Order {
    /// Creates a processed order that has not been persisted yet.
    pub fn processed(owner: User, final_total: Money) -> Self {
        Self {
            id: None,
            owner,
            final_total,
            status: OrderStatus::Processed,
        }
    }

    /// Returns a copy of this order carrying `id`, all other fields preserved.
    pub fn with_id(self, id: OrderId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}
