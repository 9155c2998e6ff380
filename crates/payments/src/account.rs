use serde::{Deserialize, Serialize};

use paymint_core::{Amount, Iban};

/// Account status lifecycle.
///
/// Nothing in the ledger itself transitions status; blocking and unblocking
/// belong to a surrounding system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Blocked,
}

/// One ledger entry: identifier, current balance, status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub iban: Iban,
    pub balance: Amount,
    pub status: AccountStatus,
}

impl Account {
    /// Open a fresh account: zero balance, active.
    pub fn new(iban: Iban) -> Self {
        Self {
            iban,
            balance: 0.0,
            status: AccountStatus::Active,
        }
    }

    /// Invariant helper: whether this account may originate or receive
    /// transfers and destructions. Blocked accounts cannot transact.
    pub fn can_transact(&self) -> bool {
        self.status == AccountStatus::Active
    }
}
