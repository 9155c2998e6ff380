//! Money representation.

/// Monetary amount used for balances and operation arguments.
///
/// Amounts are plain `f64`; the ledger performs no rounding or fixed-point
/// normalization.
pub type Amount = f64;
