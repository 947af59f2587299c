//! # Money Split
//!
//! Settles a shared-expense pool: given what each participant paid, computes
//! a short list of pairwise transfers after which everyone has paid the same.
//!
//! ## Design Principles
//!
//! - **Decimal arithmetic**: amounts are `rust_decimal` values; only transfer
//!   amounts are rounded, half-up to cents
//! - **Validated values**: every stage returns an immutable value built by a
//!   checking constructor
//! - **Verified output**: transfers are replayed against the balances before
//!   a result is handed out
//! - **Deterministic output**: ties are broken by participant name
//!
//! ## Example
//!
//! ```
//! use money_split::{settle, Money};
//!
//! let result = settle([
//!     ("Alice", Money::from_cents(6000)),
//!     ("Bob", Money::from_cents(2000)),
//! ])
//! .unwrap();
//!
//! let transfer = &result.transfers()[0];
//! assert_eq!(transfer.payer(), "Bob");
//! assert_eq!(transfer.recipient(), "Alice");
//! assert_eq!(transfer.amount().to_string(), "20.00");
//! ```

pub mod balance;
pub mod error;
pub mod input;
pub mod ledger;
pub mod money;
pub mod optimizer;
pub mod report;
pub mod settlement;
pub mod transfer;

pub use balance::{compute_balances, BalanceSet, ParticipantStatus};
pub use error::{Result, SplitError};
pub use input::{read_payments, PaymentRecord};
pub use ledger::PaymentLedger;
pub use money::Money;
pub use optimizer::optimize_transfers;
pub use settlement::{settle, SettlementResult, SummaryRow};
pub use transfer::Transfer;

/// Validates raw payments into a ledger.
pub fn build_ledger<I, S>(payments: I) -> Result<PaymentLedger>
where
    I: IntoIterator<Item = (S, Money)>,
    S: AsRef<str>,
{
    PaymentLedger::build(payments)
}

/// Cross-checks transfers against balances and bundles the result.
pub fn assemble_result(
    ledger: PaymentLedger,
    balances: BalanceSet,
    transfers: Vec<Transfer>,
) -> Result<SettlementResult> {
    SettlementResult::assemble(ledger, balances, transfers)
}
