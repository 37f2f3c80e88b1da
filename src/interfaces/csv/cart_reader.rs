use crate::domain::cart::Item;
use crate::domain::money::Price;
use crate::error::{CheckoutError, Result};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct ItemRecord {
    name: String,
    price: Price,
}

/// Reads cart items from a CSV source with a `name, price` header.
///
/// This reader wraps `csv::Reader` and provides an iterator over `Result<Item>`.
/// It handles whitespace trimming and flexible record lengths automatically.
pub struct CartReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CartReader<R> {
    /// Creates a new `CartReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes items, one result per row.
    pub fn items(self) -> impl Iterator<Item = Result<Item>> {
        self.reader.into_deserialize().map(|result| {
            result
                .map(|record: ItemRecord| Item::new(record.name, record.price))
                .map_err(CheckoutError::from)
        })
    }
}
