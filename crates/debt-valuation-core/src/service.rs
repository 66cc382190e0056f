//! Create/list operations over an instrument store.
//!
//! The service is the boundary the engine is invoked through: `create`
//! persists an entry and returns its valuation, `list` re-valuates every
//! stored instrument. Both compute against "today" in the local time zone;
//! the `_as_of` variants pin the reference date explicitly and are what
//! tests and the CLI use. Valuations are never stored -- the same
//! instrument yields different adjusted values on different days.

use chrono::{Local, NaiveDate};
use std::time::Instant;

use crate::instrument::DebtInstrument;
use crate::storage::InstrumentStore;
use crate::types::{with_metadata, ComputationOutput};
use crate::valuation::{self, InstrumentValuation};
use crate::DebtValuationResult;

const LIST_METHODOLOGY: &str =
    "Late-payment adjustment of every stored instrument against a single reference date";

/// Create/list service over an [`InstrumentStore`].
pub struct InstrumentService<S: InstrumentStore> {
    store: S,
}

impl<S: InstrumentStore> InstrumentService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persist an entry and return its valuation against today.
    pub fn create(
        &self,
        entry: DebtInstrument,
    ) -> DebtValuationResult<ComputationOutput<InstrumentValuation>> {
        self.create_as_of(entry, today())
    }

    /// Persist an entry and return its valuation against an explicit
    /// reference date. Store failures propagate unchanged and nothing is
    /// returned in that case -- there is no partial valuation mode.
    pub fn create_as_of(
        &self,
        entry: DebtInstrument,
        reference_date: NaiveDate,
    ) -> DebtValuationResult<ComputationOutput<InstrumentValuation>> {
        let valued = valuation::valuate_instrument(&entry, reference_date);
        self.store.append(entry)?;
        Ok(valued)
    }

    /// Valuate every stored instrument against today.
    pub fn list(&self) -> DebtValuationResult<ComputationOutput<Vec<InstrumentValuation>>> {
        self.list_as_of(today())
    }

    /// Valuate every stored instrument against an explicit reference date,
    /// in insertion order. Warnings from individual instruments (malformed
    /// due dates) are merged into the single envelope.
    pub fn list_as_of(
        &self,
        reference_date: NaiveDate,
    ) -> DebtValuationResult<ComputationOutput<Vec<InstrumentValuation>>> {
        let start = Instant::now();
        let mut warnings: Vec<String> = Vec::new();

        let valuations: Vec<InstrumentValuation> = self
            .store
            .get_all()?
            .iter()
            .map(|instrument| valuation::compute_valuation(instrument, reference_date, &mut warnings))
            .collect();

        let elapsed = start.elapsed().as_micros() as u64;

        Ok(with_metadata(
            LIST_METHODOLOGY,
            &serde_json::json!({
                "reference_date": reference_date.format("%Y-%m-%d").to_string(),
                "count": valuations.len(),
            }),
            warnings,
            elapsed,
            valuations,
        ))
    }
}

/// Today in the local/server time zone. Lateness is a calendar-date
/// question, so the time-of-day component is dropped.
fn today() -> NaiveDate {
    Local::now().date_naive()
}
