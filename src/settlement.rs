//! Settlement result and the end-to-end pipeline.
//!
//! A result is only constructed after its transfers have been replayed
//! against the balances they claim to settle. A failed replay means the
//! optimizer is wrong, not that the input was.

use crate::balance::{compute_balances, BalanceSet, ParticipantStatus};
use crate::error::{Result, SplitError};
use crate::ledger::PaymentLedger;
use crate::money::Money;
use crate::optimizer::optimize_transfers;
use crate::transfer::Transfer;
use log::{debug, info};
use std::collections::BTreeMap;

/// Ledger, balances and the ordered transfers that settle them.
///
/// # Invariants
///
/// Replaying `transfers` (payer loses the amount, recipient gains it, every
/// participant starting at zero) reproduces each balance within one cent.
#[derive(Debug, Clone)]
pub struct SettlementResult {
    ledger: PaymentLedger,
    balances: BalanceSet,
    transfers: Vec<Transfer>,
}

/// One participant's line in the settlement summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub name: String,
    pub paid: Money,
    pub should_pay: Money,
    pub balance: Money,
    pub status: ParticipantStatus,
}

impl SettlementResult {
    /// Cross-checks `transfers` against `balances` and assembles the result.
    ///
    /// Returns `TransferMismatch` for the first participant (in name order)
    /// whose replayed net change is off by more than `Money::TOLERANCE`.
    pub fn assemble(
        ledger: PaymentLedger,
        balances: BalanceSet,
        transfers: Vec<Transfer>,
    ) -> Result<Self> {
        replay(&ledger, &balances, &transfers)?;

        Ok(SettlementResult {
            ledger,
            balances,
            transfers,
        })
    }

    pub fn ledger(&self) -> &PaymentLedger {
        &self.ledger
    }

    pub fn balances(&self) -> &BalanceSet {
        &self.balances
    }

    /// Transfers in settlement priority order.
    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }

    /// `true` when nobody needs to pay anybody.
    pub fn is_balanced(&self) -> bool {
        self.transfers.is_empty()
    }

    pub fn transaction_count(&self) -> usize {
        self.transfers.len()
    }

    pub fn total_transferred(&self) -> Money {
        self.transfers.iter().map(Transfer::amount).sum()
    }

    /// Per-participant summary sorted by name.
    pub fn summary(&self) -> Vec<SummaryRow> {
        let should_pay = self.balances.average_per_person();

        self.ledger
            .payments()
            .iter()
            .map(|(name, paid)| {
                let balance = self.balances.balance(name).unwrap_or_default();
                SummaryRow {
                    name: name.clone(),
                    paid: *paid,
                    should_pay,
                    balance,
                    status: self
                        .balances
                        .status(name)
                        .unwrap_or(ParticipantStatus::Even),
                }
            })
            .collect()
    }
}

fn replay(ledger: &PaymentLedger, balances: &BalanceSet, transfers: &[Transfer]) -> Result<()> {
    let mut net_changes: BTreeMap<&str, Money> =
        ledger.participants().map(|name| (name, Money::ZERO)).collect();

    for transfer in transfers {
        *net_changes.entry(transfer.payer()).or_default() -= transfer.amount();
        *net_changes.entry(transfer.recipient()).or_default() += transfer.amount();
    }

    for (name, actual) in net_changes {
        let expected = balances.balance(name).unwrap_or_default();
        if !(actual - expected).is_negligible() {
            return Err(SplitError::TransferMismatch {
                name: name.to_string(),
                expected,
                actual,
            });
        }
    }

    Ok(())
}

/// Runs the whole pipeline: validate, balance, optimize, verify.
pub fn settle<I, S>(payments: I) -> Result<SettlementResult>
where
    I: IntoIterator<Item = (S, Money)>,
    S: AsRef<str>,
{
    let ledger = PaymentLedger::build(payments)?;
    let balances = compute_balances(&ledger);
    let transfers = optimize_transfers(&balances);
    debug!(
        "Optimizer produced {} transfers for {} participants",
        transfers.len(),
        ledger.participant_count()
    );

    let result = SettlementResult::assemble(ledger, balances, transfers)?;
    info!(
        "Settled {} participants with {} transfers",
        result.ledger().participant_count(),
        result.transaction_count()
    );
    Ok(result)
}
