//! Greedy debt settlement.
//!
//! Repeatedly matches the largest outstanding debtor with the largest
//! outstanding creditor and transfers the smaller of the two amounts. For a
//! single pool with equal shares this yields at most `n - 1` transfers and
//! usually the true minimum, but it is a heuristic: some topologies admit a
//! shorter plan.
//!
//! # Tie-break
//!
//! When several entries share the largest remaining amount, the one with the
//! lexicographically smallest name is selected. Results therefore depend only
//! on the balances, never on input order.

use crate::balance::BalanceSet;
use crate::money::Money;
use crate::transfer::Transfer;
use log::debug;
use std::cmp::Ordering;

/// Outstanding amount for one side of the matching.
#[derive(Debug)]
struct Outstanding<'a> {
    name: &'a str,
    remaining: Money,
}

impl<'a> Outstanding<'a> {
    fn from_views(entries: Vec<(&'a str, Money)>) -> Vec<Self> {
        entries
            .into_iter()
            .map(|(name, remaining)| Outstanding { name, remaining })
            .collect()
    }
}

/// Largest amount first, then smallest name.
fn priority(a: &Outstanding<'_>, b: &Outstanding<'_>) -> Ordering {
    b.remaining
        .cmp(&a.remaining)
        .then_with(|| a.name.cmp(b.name))
}

fn select(entries: &[Outstanding<'_>]) -> Option<usize> {
    entries
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| priority(a, b))
        .map(|(idx, _)| idx)
}

/// Computes the transfers that settle `balances`, in emission order.
///
/// Each transfer amount is rounded half-up to cents. An entry whose remaining
/// amount drops to one cent or less is treated as settled, which absorbs the
/// rounding residue instead of emitting a near-zero transfer.
pub fn optimize_transfers(balances: &BalanceSet) -> Vec<Transfer> {
    let mut debtors = Outstanding::from_views(balances.debtors());
    let mut creditors = Outstanding::from_views(balances.creditors());
    let mut transfers = Vec::new();

    while let (Some(d), Some(c)) = (select(&debtors), select(&creditors)) {
        let amount = debtors[d]
            .remaining
            .min(creditors[c].remaining)
            .round_half_up();

        debug!(
            "{} pays {} {} (owed {}, due {})",
            debtors[d].name, creditors[c].name, amount, debtors[d].remaining, creditors[c].remaining
        );
        transfers.push(Transfer::settled(debtors[d].name, creditors[c].name, amount));

        debtors[d].remaining -= amount;
        creditors[c].remaining -= amount;

        if debtors[d].remaining <= Money::TOLERANCE {
            debtors.swap_remove(d);
        }
        if creditors[c].remaining <= Money::TOLERANCE {
            creditors.swap_remove(c);
        }
    }

    transfers
}
