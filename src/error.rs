//! Error types for the settlement pipeline.

use crate::money::Money;
use thiserror::Error;

/// Result type alias for settlement operations
pub type Result<T> = std::result::Result<T, SplitError>;

/// Errors that can occur while building or settling a ledger.
#[derive(Error, Debug)]
pub enum SplitError {
    /// No participants were supplied
    #[error("Payments cannot be empty")]
    EmptyLedger,

    /// Participant name is empty or whitespace only
    #[error("Participant names cannot be empty")]
    InvalidName,

    /// Paid amount below zero
    #[error("Amount for {name} cannot be negative")]
    NegativeAmount { name: String },

    /// Adding this participant's amount exceeds the representable total
    #[error("Total overflows when adding the amount for {name}")]
    AmountOverflow { name: String },

    /// The same participant appears twice in one ledger
    #[error("Participant {name} appears more than once")]
    DuplicateName { name: String },

    /// A balance set was constructed with no entries
    #[error("Balances cannot be empty")]
    EmptyBalances,

    /// Balances do not sum to zero within tolerance
    #[error("Balances must sum to zero, got {sum}")]
    BalanceSumMismatch { sum: Money },

    /// Transfer payer or recipient is empty
    #[error("Payer and recipient names cannot be empty")]
    EmptyTransferParty,

    /// Transfer from a participant to themselves
    #[error("Payer and recipient cannot be the same participant ({name})")]
    SelfTransfer { name: String },

    /// Transfer amount is zero or negative
    #[error("Transfer amount must be positive, got {amount}")]
    NonPositiveTransfer { amount: Money },

    /// Replayed transfers do not reproduce a participant's balance
    #[error("Transfer mismatch for {name}: expected {expected}, got {actual}")]
    TransferMismatch {
        name: String,
        expected: Money,
        actual: Money,
    },

    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing or writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Missing input file argument
    #[error("Missing input file argument. Usage: money-split <payments.csv> [--summary]")]
    MissingArgument,
}

impl SplitError {
    /// Returns `true` for consistency failures that point at a defect in the
    /// calculator or optimizer rather than at bad input.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            SplitError::BalanceSumMismatch { .. } | SplitError::TransferMismatch { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_classification() {
        let mismatch = SplitError::TransferMismatch {
            name: "Alice".to_string(),
            expected: Money::from_cents(2000),
            actual: Money::ZERO,
        };
        assert!(mismatch.is_internal());
        assert!(SplitError::BalanceSumMismatch {
            sum: Money::from_cents(500)
        }
        .is_internal());

        assert!(!SplitError::EmptyLedger.is_internal());
        assert!(!SplitError::InvalidName.is_internal());
        assert!(!SplitError::AmountOverflow {
            name: "Alice".to_string()
        }
        .is_internal());
        assert!(!SplitError::NegativeAmount {
            name: "Alice".to_string()
        }
        .is_internal());
    }

    #[test]
    fn test_messages_name_the_participant() {
        let err = SplitError::NegativeAmount {
            name: "Alice".to_string(),
        };
        assert_eq!(err.to_string(), "Amount for Alice cannot be negative");

        let err = SplitError::TransferMismatch {
            name: "Bob".to_string(),
            expected: Money::from_cents(-2000),
            actual: Money::from_cents(-1500),
        };
        assert_eq!(
            err.to_string(),
            "Transfer mismatch for Bob: expected -20.00, got -15.00"
        );
    }
}
