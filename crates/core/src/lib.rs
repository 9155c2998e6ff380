//! Shared domain primitives.
//!
//! Account identifiers, identifier generation, and the money representation
//! used by the payments ledger. Pure domain code: no IO, no logging.

pub mod iban;
pub mod money;

pub use iban::{Iban, IbanGenerator, RandomIbanGenerator};
pub use money::Amount;
