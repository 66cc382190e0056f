use serde::{Deserialize, Serialize};

use crate::types::{Money, Rate};

/// One scheduled payment of a debt instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Installment {
    /// Sequence number within the instrument. Not required to be unique or
    /// positive; output ordering sorts on it.
    pub number: i32,
    /// Due date as received, "YYYY-MM-DD" expected. Kept verbatim even when
    /// malformed -- unparseable dates are normalized at valuation time, never
    /// rejected.
    pub due_date: String,
    /// Face (nominal) amount of the installment.
    pub face_value: Money,
}

/// A debt instrument: debtor identification plus its installment schedule.
///
/// No field carries a uniqueness or non-negativity invariant; whatever the
/// entry payload said is stored as-is. Instruments are append-only: created
/// once, never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtInstrument {
    /// External identifier of the instrument.
    pub id: String,
    /// Name of the debtor.
    pub debtor_name: String,
    /// Debtor tax identifier, carried as an opaque string.
    pub debtor_tax_id: String,
    /// Simple interest rate per month (0.01 = 1%/month).
    pub monthly_interest_rate: Rate,
    /// Penalty as a fraction of face value, applied to every installment.
    pub penalty_rate: Rate,
    /// Installment schedule, in entry order.
    pub installments: Vec<Installment>,
}

impl DebtInstrument {
    /// Exact (unrounded) sum of installment face values.
    pub fn original_value(&self) -> Money {
        self.installments.iter().map(|p| p.face_value).sum()
    }
}
