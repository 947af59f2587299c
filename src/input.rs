//! Payment records read from CSV.

use crate::error::Result;
use crate::money::Money;
use csv::{ReaderBuilder, Trim};
use log::warn;
use serde::Deserialize;
use std::io::Read;
use std::str::FromStr;

/// Raw payment row as read from CSV (`name,amount`).
#[derive(Debug, Deserialize)]
pub struct PaymentRecord {
    pub name: String,

    /// Kept as a string so bad amounts can be reported per row.
    pub amount: String,
}

impl PaymentRecord {
    /// Returns the trimmed name and parsed amount, or `None` when the amount
    /// is not a number. Sign and name checks belong to the ledger.
    pub fn parse(&self) -> Option<(String, Money)> {
        let amount = Money::from_str(&self.amount).ok()?;
        Some((self.name.trim().to_string(), amount))
    }
}

/// Reads payments in input order.
///
/// Unparsable rows are logged and skipped. A name seen again replaces the
/// earlier amount, with a warning, and keeps its first position.
pub fn read_payments<R: Read>(reader: R) -> Result<Vec<(String, Money)>> {
    let mut csv_reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut payments: Vec<(String, Money)> = Vec::new();

    for (row_idx, result) in csv_reader.deserialize::<PaymentRecord>().enumerate() {
        let row_num = row_idx + 2; // 1-indexed, accounting for header row

        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!("Row {}: CSV parse error: {}", row_num, e);
                continue;
            }
        };

        let Some((name, amount)) = record.parse() else {
            warn!("Row {}: Invalid amount '{}', skipping", row_num, record.amount);
            continue;
        };

        match payments.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => {
                warn!(
                    "Row {}: {} already exists, overwriting {} with {}",
                    row_num, name, entry.1, amount
                );
                entry.1 = amount;
            }
            None => payments.push((name, amount)),
        }
    }

    Ok(payments)
}
