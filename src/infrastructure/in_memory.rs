use crate::domain::order::{Order, OrderId};
use crate::domain::ports::{Notifier, OrderRepository};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct OrderTable {
    last_id: u64,
    orders: BTreeMap<OrderId, Order>,
}

/// A thread-safe in-memory order repository.
///
/// Uses `Arc<RwLock<..>>` so clones share the same table. Identities are assigned
/// sequentially starting at 1.
#[derive(Default, Clone)]
pub struct InMemoryOrderRepository {
    table: Arc<RwLock<OrderTable>>,
}

impl InMemoryOrderRepository {
    /// Creates a new, empty in-memory order repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn save(&self, order: Order) -> Result<Order> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let id = OrderId(table.last_id);
        let saved = order.with_id(id);
        table.orders.insert(id, saved.clone());
        Ok(saved)
    }

    async fn get(&self, id: OrderId) -> Result<Option<Order>> {
        let table = self.table.read().await;
        Ok(table.orders.get(&id).cloned())
    }

    async fn all_orders(&self) -> Result<Vec<Order>> {
        let table = self.table.read().await;
        Ok(table.orders.values().cloned().collect())
    }
}

/// A message accepted by [`InMemoryOutbox`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

/// A notifier that keeps every message in memory instead of delivering it.
#[derive(Default, Clone)]
pub struct InMemoryOutbox {
    messages: Arc<RwLock<Vec<SentMessage>>>,
}

impl InMemoryOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages accepted so far, oldest first.
    pub async fn messages(&self) -> Vec<SentMessage> {
        self.messages.read().await.clone()
    }
}

#[async_trait]
impl Notifier for InMemoryOutbox {
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> Result<bool> {
        let mut messages = self.messages.write().await;
        messages.push(SentMessage {
            recipient: recipient.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(true)
    }
}
