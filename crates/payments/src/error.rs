//! Ledger error model.

use thiserror::Error;

use paymint_core::Iban;

/// Result type used across the payments ledger.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger operation error.
///
/// Every variant is recoverable: a failed operation leaves the registry
/// unchanged, and retry policy belongs to the caller. The ledger never logs
/// or swallows a failure internally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Amount not positive where positivity is required (emission).
    #[error("amount must be greater than zero")]
    InvalidAmount,

    /// A referenced identifier is absent from the registry.
    #[error("account with IBAN {iban} not found")]
    AccountNotFound { iban: Iban },

    /// A referenced account is blocked where activity is required.
    #[error("account {iban} is blocked")]
    AccountBlocked { iban: Iban },

    /// Source balance insufficient for the requested debit.
    #[error("insufficient funds in account {iban}")]
    InsufficientFunds { iban: Iban },

    /// New-account creation produced an identifier that already exists.
    #[error("generated IBAN {iban} already exists")]
    IbanCollision { iban: Iban },
}
