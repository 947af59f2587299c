//! A single payment from one participant to another.

use crate::error::{Result, SplitError};
use crate::money::Money;
use serde::Serialize;

/// Immutable transfer of `amount` from `payer` to `recipient`.
///
/// # Invariants
///
/// - `payer` and `recipient` are non-empty and differ
/// - `amount > 0`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transfer {
    payer: String,
    recipient: String,
    amount: Money,
}

impl Transfer {
    /// Validates and creates a transfer.
    pub fn new(
        payer: impl Into<String>,
        recipient: impl Into<String>,
        amount: Money,
    ) -> Result<Self> {
        let payer = payer.into();
        let recipient = recipient.into();

        if payer.trim().is_empty() || recipient.trim().is_empty() {
            return Err(SplitError::EmptyTransferParty);
        }
        if payer == recipient {
            return Err(SplitError::SelfTransfer { name: payer });
        }
        if amount <= Money::ZERO {
            return Err(SplitError::NonPositiveTransfer { amount });
        }

        Ok(Transfer {
            payer,
            recipient,
            amount,
        })
    }

    /// Builds a transfer whose invariants the caller already guarantees.
    pub(crate) fn settled(payer: &str, recipient: &str, amount: Money) -> Self {
        debug_assert!(!payer.is_empty() && !recipient.is_empty());
        debug_assert_ne!(payer, recipient);
        debug_assert!(amount > Money::ZERO);

        Transfer {
            payer: payer.to_string(),
            recipient: recipient.to_string(),
            amount,
        }
    }

    pub fn payer(&self) -> &str {
        &self.payer
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn amount(&self) -> Money {
        self.amount
    }
}
