//! The payments ledger: account registry and monetary operations.
//!
//! One [`Ledger`] owns every account behind a single exclusive lock. Emission
//! creates value in the designated emission account, destruction relocates
//! value into the designated destruction sink, transfers move value between
//! accounts. Value is conserved: a transfer or destruction never changes
//! total supply, and emission raises it by exactly the emitted amount.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use paymint_core::{Amount, Iban, IbanGenerator, RandomIbanGenerator};

use crate::account::Account;
use crate::error::{LedgerError, LedgerResult};

const EMISSION_IBAN: &str = "BY00000000000000000000000000001";
const DESTRUCTION_IBAN: &str = "BY0000000000000000000000000002";

/// Account registry with conservation semantics.
///
/// All operations take `&self` and serialize through one exclusive lock, so
/// a `Ledger` can be shared across threads (`Arc<Ledger>`) and no operation
/// ever observes another's partial effect. A failed operation leaves the
/// registry untouched.
pub struct Ledger {
    accounts: Mutex<HashMap<Iban, Account>>,
    emission_iban: Iban,
    destruction_iban: Iban,
    generator: Box<dyn IbanGenerator>,
}

impl Ledger {
    /// Build a ledger holding only the emission account and the destruction
    /// sink, both zero-balance and active, using the default identifier
    /// generator.
    pub fn new() -> Self {
        Self::with_generator(RandomIbanGenerator)
    }

    /// Same as [`Ledger::new`] with an injected identifier generator.
    ///
    /// Prefer a scripted generator in tests that need deterministic
    /// identifiers or collision behavior.
    pub fn with_generator(generator: impl IbanGenerator + 'static) -> Self {
        let emission_iban = Iban::from(EMISSION_IBAN);
        let destruction_iban = Iban::from(DESTRUCTION_IBAN);

        let mut accounts = HashMap::new();
        accounts.insert(emission_iban.clone(), Account::new(emission_iban.clone()));
        accounts.insert(
            destruction_iban.clone(),
            Account::new(destruction_iban.clone()),
        );

        Self {
            accounts: Mutex::new(accounts),
            emission_iban,
            destruction_iban,
            generator: Box::new(generator),
        }
    }

    /// Identifier of the emission account (the source of new value).
    pub fn emission_iban(&self) -> &Iban {
        &self.emission_iban
    }

    /// Identifier of the destruction sink (where destroyed value ends up).
    pub fn destruction_iban(&self) -> &Iban {
        &self.destruction_iban
    }

    /// Open a new zero-balance, active account and return its identifier.
    ///
    /// The generated identifier is checked against the registry before
    /// insertion: a duplicate surfaces as [`LedgerError::IbanCollision`]
    /// instead of silently overwriting an existing account. The ledger does
    /// not retry on collision; regeneration is the caller's call.
    pub fn create_account(&self) -> LedgerResult<Iban> {
        let mut accounts = self.lock_accounts();

        let iban = self.generator.generate();
        if accounts.contains_key(&iban) {
            return Err(LedgerError::IbanCollision { iban });
        }

        accounts.insert(iban.clone(), Account::new(iban.clone()));
        Ok(iban)
    }

    /// Create `amount` new units of value in the emission account.
    ///
    /// The emission account is not itself a precondition target: it is
    /// credited even while blocked.
    pub fn emit(&self, amount: Amount) -> LedgerResult<()> {
        if amount <= 0.0 {
            return Err(LedgerError::InvalidAmount);
        }

        let mut accounts = self.lock_accounts();
        credit(&mut accounts, &self.emission_iban, amount);
        Ok(())
    }

    /// Remove `amount` from circulation: debit `from`, credit the
    /// destruction sink.
    ///
    /// Preconditions, checked in order: `from` exists, `from` is active,
    /// `from` holds at least `amount`. The first failure is reported and
    /// nothing is mutated.
    pub fn destroy(&self, from: &Iban, amount: Amount) -> LedgerResult<()> {
        let mut accounts = self.lock_accounts();

        let account = accounts
            .get(from)
            .ok_or_else(|| LedgerError::AccountNotFound { iban: from.clone() })?;
        if !account.can_transact() {
            return Err(LedgerError::AccountBlocked { iban: from.clone() });
        }
        if account.balance < amount {
            return Err(LedgerError::InsufficientFunds { iban: from.clone() });
        }

        debit(&mut accounts, from, amount);
        credit(&mut accounts, &self.destruction_iban, amount);
        Ok(())
    }

    /// Move `amount` from `from` to `to`.
    ///
    /// Preconditions, checked in order: both accounts exist, neither is
    /// blocked, the source holds at least `amount`. The debit and credit
    /// land together or not at all. There is no positivity check on
    /// `amount`; a zero or negative amount is accepted and moves value
    /// accordingly.
    pub fn transfer(&self, from: &Iban, to: &Iban, amount: Amount) -> LedgerResult<()> {
        let mut accounts = self.lock_accounts();

        let from_account = accounts
            .get(from)
            .ok_or_else(|| LedgerError::AccountNotFound { iban: from.clone() })?;
        let to_account = accounts
            .get(to)
            .ok_or_else(|| LedgerError::AccountNotFound { iban: to.clone() })?;

        if !from_account.can_transact() {
            return Err(LedgerError::AccountBlocked { iban: from.clone() });
        }
        if !to_account.can_transact() {
            return Err(LedgerError::AccountBlocked { iban: to.clone() });
        }
        if from_account.balance < amount {
            return Err(LedgerError::InsufficientFunds { iban: from.clone() });
        }

        debit(&mut accounts, from, amount);
        credit(&mut accounts, to, amount);
        Ok(())
    }

    /// Current state of every account, in no particular order.
    ///
    /// Takes the same exclusive lock as the mutating operations, so the
    /// returned records never reflect a partially-applied operation.
    pub fn snapshot(&self) -> Vec<Account> {
        let accounts = self.lock_accounts();
        accounts.values().cloned().collect()
    }

    // No ledger code panics while holding the guard, so a poisoned mutex
    // still guards consistent state; recover it rather than fail.
    fn lock_accounts(&self) -> MutexGuard<'_, HashMap<Iban, Account>> {
        self.accounts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

/// Credits always land: the emission account and destruction sink exist for
/// the ledger's whole lifetime, and transfer destinations are validated
/// before any mutation.
fn credit(accounts: &mut HashMap<Iban, Account>, iban: &Iban, amount: Amount) {
    let account = accounts
        .entry(iban.clone())
        .or_insert_with(|| Account::new(iban.clone()));
    account.balance += amount;
}

fn debit(accounts: &mut HashMap<Iban, Account>, iban: &Iban, amount: Amount) {
    if let Some(account) = accounts.get_mut(iban) {
        account.balance -= amount;
    }
}
