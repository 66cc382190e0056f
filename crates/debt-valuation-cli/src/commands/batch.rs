use chrono::NaiveDate;
use clap::Args;
use serde_json::Value;

use debt_valuation_core::{DebtInstrument, InstrumentService, MemoryStore};

use crate::commands::reference_date;
use crate::input;

/// Arguments for batch registration and listing
#[derive(Args)]
pub struct BatchArgs {
    /// Path to a JSON or YAML file holding an array of instrument entries
    #[arg(long)]
    pub input: Option<String>,

    /// Reference date for lateness, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub reference_date: Option<NaiveDate>,
}

/// Register every entry through the service, then emit the full listing.
/// Entries are valued in insertion order against one reference date.
pub fn run_batch(args: BatchArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let entries: Vec<DebtInstrument> = input::read_payload(&args.input, "instruments")?;
    let reference = reference_date(args.reference_date);

    let service = InstrumentService::new(MemoryStore::new());
    for entry in entries {
        service.create_as_of(entry, reference)?;
    }

    let out = service.list_as_of(reference)?;
    Ok(serde_json::to_value(out)?)
}
