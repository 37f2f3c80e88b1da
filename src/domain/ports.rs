use super::money::Money;
use super::order::{Order, OrderId};
use super::payment::{PaymentInstrument, PaymentResult};
use crate::error::Result;
use async_trait::async_trait;

/// Approves or declines a charge against a payment instrument.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn charge(&self, amount: Money, instrument: &PaymentInstrument) -> Result<PaymentResult>;
}

/// Persists orders and assigns their identity.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Stores `order` and returns a copy with `id` populated.
    async fn save(&self, order: Order) -> Result<Order>;
    async fn get(&self, id: OrderId) -> Result<Option<Order>>;
    async fn all_orders(&self) -> Result<Vec<Order>>;
}

/// Delivers a message to a customer.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> Result<bool>;
}

pub type PaymentGatewayBox = Box<dyn PaymentGateway>;
pub type OrderRepositoryBox = Box<dyn OrderRepository>;
pub type NotifierBox = Box<dyn Notifier>;
