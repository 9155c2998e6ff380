//! Demonstration driver for the paymint ledger.
//!
//! Runs the canonical flow once: emit value, open an account, fund it from
//! the emission account, destroy part of its balance, then print every
//! account as pretty JSON on stdout. A rejected operation is logged and the
//! flow continues.

use paymint_payments::Ledger;

fn main() -> anyhow::Result<()> {
    paymint_observability::init();

    let ledger = Ledger::new();

    if let Err(err) = ledger.emit(1000.0) {
        tracing::error!("emission failed: {err}");
    }

    let account = ledger.create_account()?;
    tracing::info!("opened account {account}");

    if let Err(err) = ledger.transfer(ledger.emission_iban(), &account, 500.0) {
        tracing::error!("transfer failed: {err}");
    }

    if let Err(err) = ledger.destroy(&account, 200.0) {
        tracing::error!("destruction failed: {err}");
    }

    println!("{}", serde_json::to_string_pretty(&ledger.snapshot())?);

    Ok(())
}
