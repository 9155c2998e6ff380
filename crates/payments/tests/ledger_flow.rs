use std::collections::HashSet;
use std::thread;

use paymint_core::Iban;
use paymint_payments::{AccountStatus, Ledger, LedgerError};

fn balance_of(ledger: &Ledger, iban: &Iban) -> f64 {
    ledger
        .snapshot()
        .into_iter()
        .find(|account| &account.iban == iban)
        .map(|account| account.balance)
        .expect("account should exist in snapshot")
}

fn total_supply(ledger: &Ledger) -> f64 {
    ledger.snapshot().iter().map(|account| account.balance).sum()
}

fn open_funded_account(ledger: &Ledger, amount: f64) -> Iban {
    let iban = ledger.create_account().expect("failed to create account");
    ledger
        .transfer(ledger.emission_iban(), &iban, amount)
        .expect("failed to seed account from emission");
    iban
}

#[test]
fn full_lifecycle_emit_transfer_destroy_snapshot() {
    let ledger = Ledger::new();

    ledger.emit(1000.0).unwrap();
    let account = ledger.create_account().unwrap();
    ledger
        .transfer(ledger.emission_iban(), &account, 500.0)
        .unwrap();

    // An overdraw fails and leaves everything as it was.
    let err = ledger
        .transfer(&account, ledger.emission_iban(), 1000.0)
        .unwrap_err();
    assert_eq!(
        err,
        LedgerError::InsufficientFunds { iban: account.clone() }
    );
    assert_eq!(balance_of(&ledger, &account), 500.0);

    ledger.destroy(&account, 200.0).unwrap();

    assert_eq!(balance_of(&ledger, ledger.emission_iban()), 500.0);
    assert_eq!(balance_of(&ledger, &account), 300.0);
    assert_eq!(balance_of(&ledger, ledger.destruction_iban()), 200.0);
    assert_eq!(total_supply(&ledger), 1000.0);

    let snapshot = ledger.snapshot();
    assert_eq!(snapshot.len(), 3);
    assert!(snapshot
        .iter()
        .all(|account| account.status == AccountStatus::Active));
}

#[test]
fn concurrent_transfers_between_disjoint_pairs() {
    let ledger = Ledger::new();
    ledger.emit(4000.0).unwrap();
    let a = open_funded_account(&ledger, 1000.0);
    let b = open_funded_account(&ledger, 1000.0);
    let c = open_funded_account(&ledger, 1000.0);
    let d = open_funded_account(&ledger, 1000.0);

    thread::scope(|scope| {
        scope.spawn(|| {
            for _ in 0..100 {
                ledger.transfer(&a, &b, 5.0).unwrap();
            }
        });
        scope.spawn(|| {
            for _ in 0..100 {
                ledger.transfer(&c, &d, 5.0).unwrap();
            }
        });
    });

    assert_eq!(balance_of(&ledger, &a), 500.0);
    assert_eq!(balance_of(&ledger, &b), 1500.0);
    assert_eq!(balance_of(&ledger, &c), 500.0);
    assert_eq!(balance_of(&ledger, &d), 1500.0);
    assert_eq!(total_supply(&ledger), 4000.0);
}

// Both directions drain and refill the same pair. Every individual transfer
// still finds sufficient funds: each source is seeded with exactly the total
// its own thread moves out, and the opposing thread only adds to it.
#[test]
fn contended_transfers_interleave_without_corruption() {
    let ledger = Ledger::new();
    ledger.emit(2000.0).unwrap();
    let a = open_funded_account(&ledger, 1000.0);
    let b = open_funded_account(&ledger, 1000.0);

    thread::scope(|scope| {
        scope.spawn(|| {
            for _ in 0..100 {
                ledger.transfer(&a, &b, 10.0).unwrap();
            }
        });
        scope.spawn(|| {
            for _ in 0..100 {
                ledger.transfer(&b, &a, 10.0).unwrap();
            }
        });
    });

    assert_eq!(balance_of(&ledger, &a), 1000.0);
    assert_eq!(balance_of(&ledger, &b), 1000.0);
    assert_eq!(total_supply(&ledger), 2000.0);
}

#[test]
fn concurrent_emissions_accumulate_exactly() {
    let ledger = Ledger::new();

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..100 {
                    ledger.emit(7.0).unwrap();
                }
            });
        }
    });

    assert_eq!(balance_of(&ledger, ledger.emission_iban()), 2800.0);
    assert_eq!(total_supply(&ledger), 2800.0);
}

#[test]
fn concurrent_account_creation_yields_distinct_accounts() {
    let ledger = Ledger::new();

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..25 {
                    ledger.create_account().unwrap();
                }
            });
        }
    });

    let snapshot = ledger.snapshot();
    assert_eq!(snapshot.len(), 102);
    let distinct: HashSet<_> = snapshot.iter().map(|account| &account.iban).collect();
    assert_eq!(distinct.len(), 102);
}
