pub mod error;
pub mod instrument;
pub mod service;
pub mod storage;
pub mod types;
pub mod valuation;

pub use error::DebtValuationError;
pub use instrument::{DebtInstrument, Installment};
pub use service::InstrumentService;
pub use storage::{InstrumentStore, MemoryStore};
pub use types::*;
pub use valuation::{InstallmentValuation, InstrumentValuation};

/// Standard result type for all debt-valuation operations
pub type DebtValuationResult<T> = Result<T, DebtValuationError>;
