use checkout::application::checkout::CheckoutService;
use checkout::domain::cart::{Cart, Tier, User};
use checkout::domain::money::Money;
use checkout::domain::payment::PaymentInstrument;
use checkout::domain::ports::OrderRepositoryBox;
use checkout::infrastructure::gateway::SimulatedGateway;
use checkout::infrastructure::in_memory::InMemoryOrderRepository;
use checkout::infrastructure::log_notifier::LogNotifier;
use checkout::interfaces::csv::cart_reader::CartReader;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input cart CSV file (columns: name, price)
    input: PathBuf,

    /// Customer id
    #[arg(long, default_value_t = 1)]
    user_id: u64,

    /// Customer name
    #[arg(long, default_value = "Customer")]
    name: String,

    /// Customer email, the confirmation recipient
    #[arg(long)]
    email: String,

    /// Customer tier: standard or premium
    #[arg(long, default_value = "standard")]
    tier: Tier,

    /// Card number passed to the payment gateway
    #[arg(long)]
    card_number: String,

    /// Card security code
    #[arg(long, default_value = "000")]
    cvv: String,

    /// Decline charges above this amount
    #[arg(long)]
    credit_limit: Option<Decimal>,

    /// Decline charges made with this card number (repeatable)
    #[arg(long = "decline-card")]
    decline_cards: Vec<String>,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long)]
    db_path: Option<PathBuf>,
}

fn open_repository(db_path: Option<PathBuf>) -> Result<OrderRepositoryBox> {
    match db_path {
        #[cfg(feature = "storage-rocksdb")]
        Some(path) => {
            let repository = checkout::infrastructure::rocksdb::RocksDBOrderRepository::open(path)
                .into_diagnostic()?;
            Ok(Box::new(repository))
        }
        #[cfg(not(feature = "storage-rocksdb"))]
        Some(_) => {
            eprintln!(
                "WARNING: Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to In-Memory storage."
            );
            Ok(Box::new(InMemoryOrderRepository::new()))
        }
        None => Ok(Box::new(InMemoryOrderRepository::new())),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut gateway = SimulatedGateway::new();
    if let Some(limit) = cli.credit_limit {
        gateway = gateway.with_credit_limit(Money::new(limit));
    }
    for card in cli.decline_cards {
        gateway = gateway.with_decline_card(card);
    }

    let repository = open_repository(cli.db_path)?;
    let service = CheckoutService::new(Box::new(gateway), repository, Box::new(LogNotifier));

    // Any malformed row rejects the whole cart
    let file = File::open(cli.input).into_diagnostic()?;
    let items = CartReader::new(file)
        .items()
        .collect::<checkout::error::Result<Vec<_>>>()
        .into_diagnostic()?;
    let owner = User::new(cli.user_id, cli.name, cli.email, cli.tier);
    let cart = Cart::new(owner, items);
    let instrument = PaymentInstrument::new(cli.card_number, cli.cvv);

    match service.process_order(&cart, &instrument).await.into_diagnostic()? {
        Some(order) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            serde_json::to_writer_pretty(&mut out, &order).into_diagnostic()?;
            writeln!(out).into_diagnostic()?;
        }
        None => eprintln!("payment declined"),
    }

    Ok(())
}
