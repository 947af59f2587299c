//! Signed balances: what each participant paid minus their fair share.

use crate::error::{Result, SplitError};
use crate::ledger::PaymentLedger;
use crate::money::Money;
use log::debug;
use std::collections::BTreeMap;

/// Net position of every participant.
///
/// Positive balances were overpaid and are owed money; negative balances
/// owe money. Entries within one cent of zero count as settled.
///
/// # Invariants
///
/// - At least one entry
/// - `|Σ balances| <= Money::TOLERANCE`, checked once at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceSet {
    balances: BTreeMap<String, Money>,
    total: Money,
    average: Money,
}

/// Settlement direction for a single participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipantStatus {
    /// Overpaid; receives the amount.
    Receives(Money),

    /// Underpaid; pays the amount.
    Pays(Money),

    /// Within tolerance of their fair share.
    Even,
}

impl BalanceSet {
    /// Validated constructor for balances computed outside the calculator.
    pub fn new<I, S>(balances: I, total: Money, average: Money) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Money)>,
        S: Into<String>,
    {
        let balances: BTreeMap<String, Money> = balances
            .into_iter()
            .map(|(name, balance)| (name.into(), balance))
            .collect();

        if balances.is_empty() {
            return Err(SplitError::EmptyBalances);
        }

        let sum: Money = balances.values().sum();
        if !sum.is_negligible() {
            return Err(SplitError::BalanceSumMismatch { sum });
        }

        Ok(BalanceSet {
            balances,
            total,
            average,
        })
    }

    pub fn balances(&self) -> &BTreeMap<String, Money> {
        &self.balances
    }

    pub fn balance(&self, name: &str) -> Option<Money> {
        self.balances.get(name).copied()
    }

    pub fn total_amount(&self) -> Money {
        self.total
    }

    pub fn average_per_person(&self) -> Money {
        self.average
    }

    /// Participants who owe money, as positive amounts, in name order.
    pub fn debtors(&self) -> Vec<(&str, Money)> {
        self.balances
            .iter()
            .filter(|(_, balance)| **balance < -Money::TOLERANCE)
            .map(|(name, balance)| (name.as_str(), -*balance))
            .collect()
    }

    /// Participants who are owed money, in name order.
    pub fn creditors(&self) -> Vec<(&str, Money)> {
        self.balances
            .iter()
            .filter(|(_, balance)| **balance > Money::TOLERANCE)
            .map(|(name, balance)| (name.as_str(), *balance))
            .collect()
    }

    pub fn status(&self, name: &str) -> Option<ParticipantStatus> {
        self.balance(name).map(|balance| {
            if balance > Money::TOLERANCE {
                ParticipantStatus::Receives(balance)
            } else if balance < -Money::TOLERANCE {
                ParticipantStatus::Pays(-balance)
            } else {
                ParticipantStatus::Even
            }
        })
    }
}

/// Computes `amount_paid - average` for every participant.
///
/// Cannot fail for a valid ledger: the balances sum to exactly
/// `total - count * (total / count)`, which is zero up to `Decimal` precision.
pub fn compute_balances(ledger: &PaymentLedger) -> BalanceSet {
    let average = ledger.average_per_person();
    let balances: BTreeMap<String, Money> = ledger
        .payments()
        .iter()
        .map(|(name, paid)| (name.clone(), *paid - average))
        .collect();

    debug_assert!(
        balances.values().sum::<Money>().is_negligible(),
        "balances must sum to zero"
    );
    debug!(
        "Computed {} balances around average {}",
        balances.len(),
        average
    );

    BalanceSet {
        balances,
        total: ledger.total(),
        average,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    fn ledger(entries: &[(&str, &str)]) -> PaymentLedger {
        PaymentLedger::build(entries.iter().map(|(n, a)| (*n, money(a)))).unwrap()
    }

    #[test]
    fn test_new_exposes_debtors_and_creditors() {
        let set = BalanceSet::new(
            [("Alice", money("20")), ("Bob", money("-20"))],
            money("80"),
            money("40"),
        )
        .unwrap();

        assert_eq!(set.debtors(), vec![("Bob", money("20"))]);
        assert_eq!(set.creditors(), vec![("Alice", money("20"))]);
        assert_eq!(set.total_amount(), money("80"));
        assert_eq!(set.average_per_person(), money("40"));
    }

    #[test]
    fn test_new_rejects_unbalanced_sum() {
        match BalanceSet::new(
            [("Alice", money("10")), ("Bob", money("5"))],
            money("80"),
            money("40"),
        ) {
            Err(SplitError::BalanceSumMismatch { sum }) => assert_eq!(sum, money("15")),
            other => panic!("Expected BalanceSumMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_new_rejects_empty() {
        let empty: Vec<(String, Money)> = Vec::new();
        assert!(matches!(
            BalanceSet::new(empty, Money::ZERO, Money::ZERO),
            Err(SplitError::EmptyBalances)
        ));
    }

    #[test]
    fn test_settled_entries_excluded_from_views() {
        let set = BalanceSet::new(
            [
                ("Alice", money("0.01")),
                ("Bob", money("-0.01")),
                ("Carol", money("5")),
                ("Dave", money("-5")),
            ],
            money("40"),
            money("10"),
        )
        .unwrap();

        assert_eq!(set.creditors(), vec![("Carol", money("5"))]);
        assert_eq!(set.debtors(), vec![("Dave", money("5"))]);
        assert_eq!(set.status("Alice"), Some(ParticipantStatus::Even));
        assert_eq!(
            set.status("Dave"),
            Some(ParticipantStatus::Pays(money("5")))
        );
        assert_eq!(set.status("Zed"), None);
    }

    #[test]
    fn test_compute_single_participant() {
        let set = compute_balances(&ledger(&[("Alice", "50")]));
        assert_eq!(set.balance("Alice"), Some(Money::ZERO));
        assert_eq!(set.total_amount(), money("50"));
        assert_eq!(set.average_per_person(), money("50"));
    }

    #[test]
    fn test_compute_equal_payments() {
        let set = compute_balances(&ledger(&[("Alice", "30"), ("Bob", "30"), ("Charlie", "30")]));
        assert!(set.balances().values().all(Money::is_zero));
        assert!(set.debtors().is_empty());
        assert!(set.creditors().is_empty());
    }

    #[test]
    fn test_compute_unequal_payments() {
        let set = compute_balances(&ledger(&[
            ("Alice", "100"),
            ("Bob", "50"),
            ("Charlie", "30"),
            ("Dave", "20"),
        ]));

        assert_eq!(set.balance("Alice"), Some(money("50")));
        assert_eq!(set.balance("Bob"), Some(money("0")));
        assert_eq!(set.balance("Charlie"), Some(money("-20")));
        assert_eq!(set.balance("Dave"), Some(money("-30")));
        assert_eq!(set.average_per_person(), money("50"));
    }

    #[test]
    fn test_compute_conserves_with_inexact_average() {
        let set = compute_balances(&ledger(&[("Alice", "100"), ("Bob", "0"), ("Carol", "0")]));
        let sum: Money = set.balances().values().sum();
        assert!(sum.is_negligible());
        assert_eq!(set.balance("Bob").unwrap().round_half_up(), money("-33.33"));
    }
}
