use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("{field} must be non-negative, got {amount}")]
    Validation { field: &'static str, amount: Decimal },

    #[error("could not {operation}: {source}")]
    Persistence {
        operation: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl LedgerError {
    pub fn persistence(operation: &'static str, source: anyhow::Error) -> Self {
        LedgerError::Persistence { operation, source }
    }
}

pub(crate) fn ensure_non_negative(field: &'static str, amount: Decimal) -> Result<(), LedgerError> {
    if amount < Decimal::ZERO {
        return Err(LedgerError::Validation { field, amount });
    }
    Ok(())
}
