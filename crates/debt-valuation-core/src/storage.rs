//! Instrument persistence boundary.
//!
//! The engine never touches storage directly; the service goes through
//! [`InstrumentStore`], and production deployments can swap a durable
//! implementation in behind the same trait.

use std::sync::RwLock;

use crate::error::DebtValuationError;
use crate::instrument::DebtInstrument;
use crate::DebtValuationResult;

/// Append-only store of debt instruments.
///
/// Implementations must keep insertion order and hand back independent
/// copies on read: callers may freely mutate what `get_all` returns without
/// affecting stored state or other readers. Failures propagate to the
/// caller unchanged; no retry or suppression happens at this seam.
pub trait InstrumentStore: Send + Sync {
    /// Append a new instrument. Instruments are immutable once stored.
    fn append(&self, instrument: DebtInstrument) -> DebtValuationResult<()>;

    /// Snapshot of every stored instrument, in insertion order.
    fn get_all(&self) -> DebtValuationResult<Vec<DebtInstrument>>;
}

/// In-memory [`InstrumentStore`].
///
/// A `RwLock` over a `Vec`: concurrent appends serialize through the write
/// lock, reads clone the whole vector as a snapshot. Instruments are plain
/// value types, so the clone is structural and cannot alias stored state.
#[derive(Debug, Default)]
pub struct MemoryStore {
    instruments: RwLock<Vec<DebtInstrument>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InstrumentStore for MemoryStore {
    fn append(&self, instrument: DebtInstrument) -> DebtValuationResult<()> {
        let mut guard = self
            .instruments
            .write()
            .map_err(|_| DebtValuationError::Storage("instrument store lock poisoned".into()))?;
        guard.push(instrument);
        Ok(())
    }

    fn get_all(&self) -> DebtValuationResult<Vec<DebtInstrument>> {
        let guard = self
            .instruments
            .read()
            .map_err(|_| DebtValuationError::Storage("instrument store lock poisoned".into()))?;
        Ok(guard.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instrument::Installment;
    use rust_decimal_macros::dec;

    fn sample(id: &str) -> DebtInstrument {
        DebtInstrument {
            id: id.into(),
            debtor_name: "Teste".into(),
            debtor_tax_id: "10987654321".into(),
            monthly_interest_rate: dec!(0.01),
            penalty_rate: dec!(0.02),
            installments: vec![Installment {
                number: 1,
                due_date: "2024-01-10".into(),
                face_value: dec!(100),
            }],
        }
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let store = MemoryStore::new();
        store.append(sample("A")).unwrap();
        store.append(sample("B")).unwrap();
        store.append(sample("C")).unwrap();

        let all = store.get_all().unwrap();
        let ids: Vec<&str> = all.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_get_all_returns_independent_copies() {
        let store = MemoryStore::new();
        store.append(sample("A")).unwrap();

        let mut first = store.get_all().unwrap();
        first[0].debtor_name = "Mutated".into();
        first[0].installments.clear();

        let second = store.get_all().unwrap();
        assert_eq!(second[0].debtor_name, "Teste");
        assert_eq!(second[0].installments.len(), 1);
    }

    #[test]
    fn test_empty_store_reads_empty() {
        let store = MemoryStore::new();
        assert!(store.get_all().unwrap().is_empty());
    }
}
