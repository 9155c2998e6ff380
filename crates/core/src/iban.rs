//! Account identifiers and their generation.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Identifier of a ledger account (IBAN-format string).
///
/// The format is opaque to the ledger: identifiers only need to be stable,
/// unique, and comparable. Equality and hashing are byte-wise on the
/// underlying string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Iban(String);

impl Iban {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Iban {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<&str> for Iban {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Iban {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<Iban> for String {
    fn from(value: Iban) -> Self {
        value.0
    }
}

/// Capability: produce fresh account identifiers.
///
/// The ledger calls this when opening accounts and performs its own collision
/// check at insertion time, so implementations only need a negligible
/// collision probability, not proven uniqueness.
pub trait IbanGenerator: Send + Sync {
    fn generate(&self) -> Iban;
}

/// Default generator: `BY` + two check digits + `CBDC` + a zero-padded
/// twenty-digit serial.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIbanGenerator;

impl IbanGenerator for RandomIbanGenerator {
    fn generate(&self) -> Iban {
        let mut rng = rand::thread_rng();
        let check: u8 = rng.gen_range(0..100);
        let serial: u64 = rng.gen_range(0..1_000_000_000_000_000_000);
        Iban::new(format!("BY{check:02}CBDC{serial:020}"))
    }
}
