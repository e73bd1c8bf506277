use clap::Parser;
use clothshop::application::processor::AsyncOrderProcessor;
use clothshop::application::shop::Shop;
use clothshop::domain::catalog::Catalog;
use clothshop::domain::order::Order;
use clothshop::domain::payment::Customer;
use clothshop::infrastructure::in_memory::InMemoryOrderStore;
use clothshop::infrastructure::order_log::{DEFAULT_LOG_PATH, FileOrderLog};
use clothshop::interfaces::console::Console;
use clothshop::interfaces::csv::catalog_reader::CatalogReader;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Catalog CSV file (id,name,section,category,price). Uses the built-in
    /// clothing catalog when omitted.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// File that finalized orders are appended to
    #[arg(long, default_value = DEFAULT_LOG_PATH)]
    log_path: PathBuf,

    /// Id of the order being built
    #[arg(long, default_value_t = 1)]
    order_id: u32,

    /// How long the background processing step takes
    #[arg(long, default_value_t = 2000)]
    processing_delay_ms: u64,

    /// Name of the customer placing the order
    #[arg(long, default_value = "Puspa")]
    customer: String,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            CatalogReader::new(file).into_catalog().into_diagnostic()?
        }
        None => Catalog::clothing(),
    };
    info!(items = catalog.len(), "Catalog loaded");

    let customer = Customer::new(101, cli.customer, "98XXXXXXXX");
    let shop = Shop::new(
        catalog,
        Box::new(InMemoryOrderStore::new()),
        Box::new(FileOrderLog::new(&cli.log_path)),
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    console
        .say(format!("Welcome, {}!", customer.name))
        .into_diagnostic()?;
    console.show_catalog(shop.catalog()).into_diagnostic()?;

    let mut order = Order::new(cli.order_id);
    console
        .select_items(shop.catalog(), &mut order)
        .into_diagnostic()?;

    shop.place_order(order.clone()).await.into_diagnostic()?;
    console.say("Order placed successfully.").into_diagnostic()?;

    let method = console.read_payment_method().into_diagnostic()?;
    let checkout = shop.checkout(&mut order, &method).await;
    console.report_checkout(&checkout).into_diagnostic()?;

    let processor = AsyncOrderProcessor::new(Duration::from_millis(cli.processing_delay_ms));
    let processing = processor.spawn(&order);
    console.say("Processing order...").into_diagnostic()?;

    // Joined so the confirmation is never lost to process exit.
    let total = processing.wait().await.into_diagnostic()?;
    console
        .say(format!("Order processed. Final Amount: Rs {}", total))
        .into_diagnostic()?;

    Ok(())
}
