use crate::domain::order::{Order, OrderId};
use crate::domain::ports::OrderRepository;
use crate::error::{CheckoutError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamilyDescriptor, DB, IteratorMode, Options, WriteBatch};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Column Family for storing orders, keyed by big-endian order id.
pub const CF_ORDERS: &str = "orders";
/// Column Family for repository bookkeeping such as the id sequence.
pub const CF_META: &str = "meta";

const LAST_ORDER_ID_KEY: &[u8] = b"last_order_id";

/// A persistent order repository using RocksDB.
///
/// The id sequence lives next to the orders, so identities keep increasing across
/// restarts. Each save writes the order and the new sequence value in one batch.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDBOrderRepository {
    db: Arc<DB>,
    sequence: Arc<Mutex<()>>,
}

impl RocksDBOrderRepository {
    /// Opens or creates a RocksDB instance at the specified path.
    ///
    /// Ensures that the required column families ("orders" and "meta") exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_orders = ColumnFamilyDescriptor::new(CF_ORDERS, Options::default());
        let cf_meta = ColumnFamilyDescriptor::new(CF_META, Options::default());

        let db = DB::open_cf_descriptors(&opts, path, vec![cf_orders, cf_meta])?;

        Ok(Self {
            db: Arc::new(db),
            sequence: Arc::new(Mutex::new(())),
        })
    }

    fn missing_cf(name: &str) -> CheckoutError {
        CheckoutError::InternalError(Box::new(std::io::Error::other(format!(
            "{} column family not found",
            name
        ))))
    }

    fn last_id(&self) -> Result<u64> {
        let cf = self
            .db
            .cf_handle(CF_META)
            .ok_or_else(|| Self::missing_cf(CF_META))?;
        match self.db.get_cf(&cf, LAST_ORDER_ID_KEY)? {
            Some(bytes) => {
                let raw: [u8; 8] = bytes.as_slice().try_into().map_err(|_| {
                    CheckoutError::RepositoryError("corrupt order id sequence".to_string())
                })?;
                Ok(u64::from_be_bytes(raw))
            }
            None => Ok(0),
        }
    }
}

#[async_trait]
impl OrderRepository for RocksDBOrderRepository {
    async fn save(&self, order: Order) -> Result<Order> {
        let _guard = self.sequence.lock().await;

        let id = self.last_id()? + 1;
        let saved = order.with_id(OrderId(id));
        let value = serde_json::to_vec(&saved).map_err(|e| {
            CheckoutError::InternalError(Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization error: {}", e),
            )))
        })?;

        let orders = self
            .db
            .cf_handle(CF_ORDERS)
            .ok_or_else(|| Self::missing_cf(CF_ORDERS))?;
        let meta = self
            .db
            .cf_handle(CF_META)
            .ok_or_else(|| Self::missing_cf(CF_META))?;

        let mut batch = WriteBatch::default();
        batch.put_cf(&orders, id.to_be_bytes(), value);
        batch.put_cf(&meta, LAST_ORDER_ID_KEY, id.to_be_bytes());
        self.db.write(batch)?;

        Ok(saved)
    }

    async fn get(&self, id: OrderId) -> Result<Option<Order>> {
        let cf = self
            .db
            .cf_handle(CF_ORDERS)
            .ok_or_else(|| Self::missing_cf(CF_ORDERS))?;

        match self.db.get_cf(&cf, id.0.to_be_bytes())? {
            Some(bytes) => {
                let order = serde_json::from_slice(&bytes).map_err(|e| {
                    CheckoutError::InternalError(Box::new(std::io::Error::new(
                        std::io::ErrorKind::InvalidData,
                        format!("Deserialization error: {}", e),
                    )))
                })?;
                Ok(Some(order))
            }
            None => Ok(None),
        }
    }

    async fn all_orders(&self) -> Result<Vec<Order>> {
        let cf = self
            .db
            .cf_handle(CF_ORDERS)
            .ok_or_else(|| Self::missing_cf(CF_ORDERS))?;

        let mut orders = Vec::new();
        for item in self.db.iterator_cf(&cf, IteratorMode::Start) {
            let (_key, value) = item?;
            let order: Order = serde_json::from_slice(&value).map_err(|e| {
                CheckoutError::InternalError(Box::new(std::io::Error::other(format!(
                    "Failed to deserialize order: {}",
                    e
                ))))
            })?;
            orders.push(order);
        }

        Ok(orders)
    }
}
