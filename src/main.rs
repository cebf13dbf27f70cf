use chrono::NaiveDate;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use rentcar::application::rental::RentalQuoteService;
use rentcar::config::QuoteConfig;
use rentcar::domain::customer::Customer;
use rentcar::domain::ports::VehicleCatalogBox;
use rentcar::infrastructure::clock::FixedClock;
use rentcar::infrastructure::json_file::JsonFileVehicleCatalog;
use rentcar::interfaces::json::document_reader::DocumentReader;
use rentcar::interfaces::json::transaction_writer::TransactionWriter;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file holding the array of vehicles
    #[arg(long)]
    catalog: PathBuf,

    /// JSON file describing the vehicle category to rent from
    #[arg(long)]
    category: PathBuf,

    /// JSON file describing the customer
    #[arg(long, conflicts_with_all = ["age", "name"])]
    customer: Option<PathBuf>,

    /// Customer age, when no customer file is given
    #[arg(long, required_unless_present = "customer")]
    age: Option<u32>,

    /// Customer name, when no customer file is given
    #[arg(long)]
    name: Option<String>,

    /// Number of rental days
    #[arg(long)]
    days: u32,

    /// Quote configuration (tax brackets, currency, date style)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Date to count the rental from instead of today (YYYY-MM-DD)
    #[arg(long)]
    today: Option<NaiveDate>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => QuoteConfig::from_path(path).into_diagnostic()?,
        None => QuoteConfig::default(),
    };

    let category = DocumentReader::new(File::open(&cli.category).into_diagnostic()?)
        .category()
        .into_diagnostic()?;

    let customer = match (&cli.customer, cli.age) {
        (Some(path), _) => DocumentReader::new(File::open(path).into_diagnostic()?)
            .customer()
            .into_diagnostic()?,
        (None, Some(age)) => Customer::new(age).with_name(cli.name.clone().unwrap_or_default()),
        (None, None) => miette::bail!("either --customer or --age is required"),
    };

    let catalog: VehicleCatalogBox = Box::new(JsonFileVehicleCatalog::new(&cli.catalog));
    let mut service = RentalQuoteService::new(catalog, config.tax_table(), config.formatting());
    if let Some(today) = cli.today {
        service = service.with_clock(Box::new(FixedClock(today)));
    }

    let transaction = service
        .rent(customer, &category, cli.days)
        .await
        .into_diagnostic()?;

    let stdout = io::stdout();
    let mut writer = TransactionWriter::new(stdout.lock());
    writer.write_transaction(&transaction).into_diagnostic()?;

    Ok(())
}
