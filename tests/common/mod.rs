#![allow(dead_code)]

use async_trait::async_trait;
use checkout::domain::cart::{Cart, Item, Tier, User};
use checkout::domain::money::{Money, Price};
use checkout::domain::order::{Order, OrderId};
use checkout::domain::payment::{PaymentInstrument, PaymentResult};
use checkout::domain::ports::{Notifier, OrderRepository, PaymentGateway};
use checkout::error::{CheckoutError, Result};
use rand::Rng;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::Error;
use std::path::Path;
use std::sync::{Arc, Mutex};

pub fn standard_user() -> User {
    User::new(1, "João Silva", "joao@email.com", Tier::Standard)
}

pub fn premium_user() -> User {
    User::new(2, "Maria Santos", "premium@email.com", Tier::Premium)
}

pub fn user_with_email(email: &str) -> User {
    User::new(3, "Custom User", email, Tier::Standard)
}

pub fn card() -> PaymentInstrument {
    PaymentInstrument::new("1234", "123")
}

pub fn item(name: &str, price: Decimal) -> Item {
    Item::new(name, Price::new(price).expect("non-negative price"))
}

/// Builds carts for tests, defaulting to a standard user with one item of 100.
pub struct CartBuilder {
    user: User,
    items: Vec<Item>,
}

impl Default for CartBuilder {
    fn default() -> Self {
        Self {
            user: standard_user(),
            items: vec![item("Default product", Decimal::ONE_HUNDRED)],
        }
    }
}

impl CartBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.user = user;
        self
    }

    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    pub fn empty(mut self) -> Self {
        self.items.clear();
        self
    }

    /// Replaces the items with a single item worth `total`.
    pub fn with_total(mut self, total: Decimal) -> Self {
        self.items = vec![item("Product", total)];
        self
    }

    pub fn build(self) -> Cart {
        Cart::new(self.user, self.items)
    }
}

/// Collaborator calls in the order they happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Charge(Money),
    Save,
    Send {
        recipient: String,
        subject: String,
        body: String,
    },
}

pub type CallLog = Arc<Mutex<Vec<Call>>>;

pub fn calls(log: &CallLog) -> Vec<Call> {
    log.lock().unwrap().clone()
}

/// Gateway double answering every charge with a fixed result.
pub struct StubGateway {
    pub result: PaymentResult,
    pub fail: bool,
    pub log: CallLog,
}

#[async_trait]
impl PaymentGateway for StubGateway {
    async fn charge(&self, amount: Money, _instrument: &PaymentInstrument) -> Result<PaymentResult> {
        self.log.lock().unwrap().push(Call::Charge(amount));
        if self.fail {
            return Err(CheckoutError::GatewayError("gateway unavailable".to_string()));
        }
        Ok(self.result.clone())
    }
}

/// Repository double assigning a fixed identity, or none at all.
pub struct StubRepository {
    pub id: Option<OrderId>,
    pub log: CallLog,
}

#[async_trait]
impl OrderRepository for StubRepository {
    async fn save(&self, order: Order) -> Result<Order> {
        self.log.lock().unwrap().push(Call::Save);
        Ok(match self.id {
            Some(id) => order.with_id(id),
            None => order,
        })
    }

    async fn get(&self, _id: OrderId) -> Result<Option<Order>> {
        Ok(None)
    }

    async fn all_orders(&self) -> Result<Vec<Order>> {
        Ok(Vec::new())
    }
}

/// Notifier double recording each message and answering with `delivered`.
pub struct StubNotifier {
    pub delivered: bool,
    pub fail: bool,
    pub log: CallLog,
}

#[async_trait]
impl Notifier for StubNotifier {
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> Result<bool> {
        self.log.lock().unwrap().push(Call::Send {
            recipient: recipient.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        if self.fail {
            return Err(CheckoutError::NotificationError("smtp down".to_string()));
        }
        Ok(self.delivered)
    }
}

/// Random cart with up to `max_items` items priced between 0 and 1000 with two decimals.
pub fn random_cart<R: Rng>(rng: &mut R, tier: Tier, max_items: usize) -> Cart {
    let count = rng.gen_range(0..=max_items);
    let items = (0..count)
        .map(|i| item(&format!("item-{}", i), Decimal::new(rng.gen_range(0..=100_000), 2)))
        .collect();
    Cart::new(User::new(9, "Random", "random@example.com", tier), items)
}

pub fn generate_cart_csv(path: &Path, prices: &[&str]) -> std::result::Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["name", "price"])?;
    for (i, price) in prices.iter().enumerate() {
        wtr.write_record([format!("Product {}", i + 1).as_str(), *price])?;
    }

    wtr.flush()?;
    Ok(())
}
