//! Validated record of what each participant paid into the pool.

use crate::error::{Result, SplitError};
use crate::money::Money;
use std::collections::BTreeMap;

/// Participant name to amount paid.
///
/// # Invariants
///
/// - At least one participant
/// - Every name is non-empty after trimming and unique
/// - Every amount is `>= 0`
///
/// Participants are held in name order so that every later stage iterates
/// them deterministically, whatever order the input arrived in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentLedger {
    payments: BTreeMap<String, Money>,
}

impl PaymentLedger {
    /// Validates the payments and builds a ledger.
    ///
    /// Names are stored trimmed, so `" Alice"` and `"Alice"` are the same
    /// participant and would be rejected as a duplicate. The running total
    /// is checked here, so no later stage can overflow: every balance and
    /// transfer is bounded by it.
    pub fn build<I, S>(payments: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Money)>,
        S: AsRef<str>,
    {
        let mut validated = BTreeMap::new();
        let mut total = Money::ZERO;

        for (name, amount) in payments {
            let name = name.as_ref().trim();
            if name.is_empty() {
                return Err(SplitError::InvalidName);
            }
            if amount.is_negative() {
                return Err(SplitError::NegativeAmount {
                    name: name.to_string(),
                });
            }
            total = total
                .checked_add(amount)
                .ok_or_else(|| SplitError::AmountOverflow {
                    name: name.to_string(),
                })?;
            if validated.insert(name.to_string(), amount).is_some() {
                return Err(SplitError::DuplicateName {
                    name: name.to_string(),
                });
            }
        }

        if validated.is_empty() {
            return Err(SplitError::EmptyLedger);
        }

        Ok(PaymentLedger {
            payments: validated,
        })
    }

    pub fn payments(&self) -> &BTreeMap<String, Money> {
        &self.payments
    }

    /// Amount paid by `name`, if they are part of the ledger.
    pub fn amount_paid(&self, name: &str) -> Option<Money> {
        self.payments.get(name).copied()
    }

    /// Participant names in ascending order.
    pub fn participants(&self) -> impl Iterator<Item = &str> {
        self.payments.keys().map(String::as_str)
    }

    pub fn total(&self) -> Money {
        self.payments.values().sum()
    }

    pub fn participant_count(&self) -> usize {
        self.payments.len()
    }

    /// Fair share per participant. Never divides by zero: a ledger always
    /// holds at least one entry.
    pub fn average_per_person(&self) -> Money {
        self.total().split(self.participant_count())
    }
}
