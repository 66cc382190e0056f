use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use debt_valuation_core::valuation;
use debt_valuation_core::{DebtInstrument, Installment};

use crate::commands::reference_date;
use crate::input;

/// Arguments for single-instrument valuation
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct ValueArgs {
    /// Path to a JSON or YAML instrument file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Reference date for lateness, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub reference_date: Option<NaiveDate>,

    /// Instrument identifier (quick form)
    #[arg(long)]
    pub id: Option<String>,

    /// Debtor name (quick form)
    #[arg(long)]
    pub debtor_name: Option<String>,

    /// Debtor tax identifier (quick form)
    #[arg(long)]
    pub debtor_tax_id: Option<String>,

    /// Monthly interest rate as a decimal, e.g. 0.01 (quick form)
    #[arg(long)]
    pub monthly_interest_rate: Option<Decimal>,

    /// Penalty rate as a decimal, e.g. 0.02 (quick form)
    #[arg(long)]
    pub penalty_rate: Option<Decimal>,

    /// Installment number (quick form)
    #[arg(long, default_value = "1")]
    pub number: i32,

    /// Installment due date, YYYY-MM-DD (quick form)
    #[arg(long)]
    pub due_date: Option<String>,

    /// Installment face value (quick form)
    #[arg(long)]
    pub face_value: Option<Decimal>,
}

pub fn run_value(args: ValueArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let instrument: DebtInstrument = if let Some(ref path) = args.input {
        input::file::read_document(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        // Quick form: one installment from flags. Identity fields may be
        // empty; the engine accepts any string.
        DebtInstrument {
            id: args.id.unwrap_or_default(),
            debtor_name: args.debtor_name.unwrap_or_default(),
            debtor_tax_id: args.debtor_tax_id.unwrap_or_default(),
            monthly_interest_rate: args
                .monthly_interest_rate
                .ok_or("--monthly-interest-rate is required (or provide --input)")?,
            penalty_rate: args
                .penalty_rate
                .ok_or("--penalty-rate is required (or provide --input)")?,
            installments: vec![Installment {
                number: args.number,
                due_date: args
                    .due_date
                    .ok_or("--due-date is required (or provide --input)")?,
                face_value: args
                    .face_value
                    .ok_or("--face-value is required (or provide --input)")?,
            }],
        }
    };

    let out = valuation::valuate_instrument(&instrument, reference_date(args.reference_date));
    Ok(serde_json::to_value(out)?)
}
