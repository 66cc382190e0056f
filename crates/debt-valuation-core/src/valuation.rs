//! Late-payment valuation of installment debt instruments.
//!
//! Covers:
//! 1. **Per-installment adjustment** -- days overdue against a reference
//!    date, simple daily interest (monthly rate / 30, flat 30-day month, no
//!    compounding) plus an unconditional penalty on face value.
//! 2. **Instrument aggregate** -- exact original value and the rounded sum
//!    of rounded installment adjustments.
//!
//! All arithmetic uses `rust_decimal::Decimal`. Monetary results round to
//! 2 decimal places, half away from zero. Nothing here validates: negative
//! rates, negative amounts and malformed due dates all produce a numeric
//! result, never an error.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::instrument::DebtInstrument;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Flat day-count denominator: every month counts as 30 days.
const DAYS_PER_MONTH: Decimal = dec!(30);

/// Due dates are ISO calendar dates.
const ISO_DATE: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Valuation of a single installment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallmentValuation {
    /// Installment number (output is sorted ascending on this).
    pub number: i32,
    /// Effective due date, normalized to "YYYY-MM-DD". A malformed input
    /// date shows up here as the reference date it fell back to.
    pub due_date: String,
    /// Face amount, as entered.
    pub face_value: Money,
    /// Whole days between due date and reference date, floored at 0.
    pub days_overdue: i64,
    /// face + interest + penalty, rounded to 2 decimal places.
    pub adjusted_value: Money,
}

/// Valuation of a whole instrument against a reference date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentValuation {
    pub id: String,
    pub debtor_name: String,
    pub debtor_tax_id: String,
    pub monthly_interest_rate: Rate,
    pub penalty_rate: Rate,
    /// Number of installments in the schedule.
    pub installment_count: usize,
    /// Exact sum of face values, no rounding.
    pub original_value: Money,
    /// Sum of the rounded installment adjustments, rounded again to 2
    /// decimal places. The two-stage rounding is contractual; totals may
    /// differ by a cent from rounding the exact aggregate once.
    pub adjusted_value: Money,
    /// Per-installment valuations, ascending by installment number.
    pub installments: Vec<InstallmentValuation>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Valuate an instrument against a reference date.
///
/// Pure and infallible: the result depends only on the two arguments, and
/// every input produces a valuation. Malformed due dates fall back to the
/// reference date (zero days overdue, so no interest accrues) and are
/// reported through the envelope warnings rather than as errors.
pub fn valuate_instrument(
    instrument: &DebtInstrument,
    reference_date: NaiveDate,
) -> ComputationOutput<InstrumentValuation> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let result = compute_valuation(instrument, reference_date, &mut warnings);

    let elapsed = start.elapsed().as_micros() as u64;

    with_metadata(
        "Late-payment adjustment -- simple daily interest (monthly rate / 30) plus unconditional penalty on face value",
        &serde_json::json!({
            "day_count": "flat 30-day month, no compounding",
            "penalty": "face x penalty_rate on every installment, regardless of delay",
            "malformed_due_dates": "fall back to the reference date (never rejected)",
            "rounding": "2 dp, half away from zero; per installment first, aggregate re-rounded",
            "reference_date": reference_date.format(ISO_DATE).to_string(),
        }),
        warnings,
        elapsed,
        result,
    )
}

/// Core transform shared by [`valuate_instrument`] and the service listing.
/// Appends one warning per unparseable due date.
pub(crate) fn compute_valuation(
    instrument: &DebtInstrument,
    reference_date: NaiveDate,
    warnings: &mut Vec<String>,
) -> InstrumentValuation {
    // Explicit ascending sort; stable, so duplicate numbers keep entry order.
    let mut ordered: Vec<_> = instrument.installments.iter().collect();
    ordered.sort_by_key(|p| p.number);

    let daily_rate = instrument.monthly_interest_rate / DAYS_PER_MONTH;

    let mut adjusted_total = Decimal::ZERO;
    let mut installments = Vec::with_capacity(ordered.len());

    for parcel in ordered {
        let due_date = match NaiveDate::parse_from_str(&parcel.due_date, ISO_DATE) {
            Ok(date) => date,
            Err(_) => {
                warnings.push(format!(
                    "installment {}: due date '{}' is not a valid ISO date; treated as due on the reference date",
                    parcel.number, parcel.due_date
                ));
                reference_date
            }
        };

        // Future due dates clamp to zero; lateness is never negative.
        let days_overdue = (reference_date - due_date).num_days().max(0);

        let interest = Decimal::from(days_overdue) * daily_rate * parcel.face_value;
        let penalty = parcel.face_value * instrument.penalty_rate;
        let adjusted_value = round_money(parcel.face_value + interest + penalty);

        adjusted_total += adjusted_value;

        installments.push(InstallmentValuation {
            number: parcel.number,
            due_date: due_date.format(ISO_DATE).to_string(),
            face_value: parcel.face_value,
            days_overdue,
            adjusted_value,
        });
    }

    InstrumentValuation {
        id: instrument.id.clone(),
        debtor_name: instrument.debtor_name.clone(),
        debtor_tax_id: instrument.debtor_tax_id.clone(),
        monthly_interest_rate: instrument.monthly_interest_rate,
        penalty_rate: instrument.penalty_rate,
        installment_count: instrument.installments.len(),
        original_value: instrument.original_value(),
        adjusted_value: round_money(adjusted_total),
        installments,
    }
}

/// Round to 2 decimal places, half away from zero (decimal semantics, not
/// binary float).
fn round_money(value: Money) -> Money {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
