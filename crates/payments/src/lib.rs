//! Payments module (account registry with emission/destruction semantics).
//!
//! Pure domain logic only: no IO, no logging, no persistence concerns.

pub mod account;
pub mod error;
pub mod ledger;

pub use account::{Account, AccountStatus};
pub use error::{LedgerError, LedgerResult};
pub use ledger::Ledger;
