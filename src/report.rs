//! CSV rendering and result logging for a settlement.
//!
//! All monetary values are written with exactly 2 decimal places.

use crate::balance::ParticipantStatus;
use crate::error::Result;
use crate::settlement::SettlementResult;
use csv::WriterBuilder;
use log::info;
use std::io::Write;

/// Writes `payer,recipient,amount` rows in settlement order.
pub fn write_transfers<W: Write>(result: &SettlementResult, writer: W) -> Result<()> {
    let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    csv_writer.write_record(["payer", "recipient", "amount"])?;
    for transfer in result.transfers() {
        csv_writer.serialize(transfer)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Writes one row per participant, sorted by name.
pub fn write_summary<W: Write>(result: &SettlementResult, writer: W) -> Result<()> {
    let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    csv_writer.write_record(["name", "paid", "should_pay", "balance", "status"])?;
    for row in result.summary() {
        csv_writer.write_record([
            row.name,
            row.paid.to_string(),
            row.should_pay.to_string(),
            row.balance.to_string(),
            status_label(row.status),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

fn status_label(status: ParticipantStatus) -> String {
    match status {
        ParticipantStatus::Receives(amount) => format!("receives {}", amount),
        ParticipantStatus::Pays(amount) => format!("pays {}", amount),
        ParticipantStatus::Even => "even".to_string(),
    }
}

/// Logs totals, payments and transfers at info level.
pub fn log_results(result: &SettlementResult) {
    let ledger = result.ledger();
    let balances = result.balances();

    info!("Total paid: {}", balances.total_amount());
    info!("Average per person: {}", balances.average_per_person());
    info!("Participants: {}", ledger.participant_count());

    for (name, amount) in ledger.payments() {
        info!("{} paid {}", name, amount);
    }

    if result.is_balanced() {
        info!("No transfers needed - everyone paid equally");
    } else {
        for transfer in result.transfers() {
            info!(
                "{} pays {}: {}",
                transfer.payer(),
                transfer.recipient(),
                transfer.amount()
            );
        }
    }

    info!("Total transfers: {}", result.transaction_count());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::settlement::settle;

    fn render<F>(write: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut output = Vec::new();
        write(&mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_transfers_csv() {
        let result = settle([
            ("Alice", Money::from_cents(10000)),
            ("Bob", Money::from_cents(5000)),
            ("Charlie", Money::from_cents(3000)),
            ("Dave", Money::from_cents(2000)),
        ])
        .unwrap();

        let output = render(|out| write_transfers(&result, out));
        assert_eq!(
            output,
            "payer,recipient,amount\nDave,Alice,30.00\nCharlie,Alice,20.00\n"
        );
    }

    #[test]
    fn test_transfers_csv_balanced() {
        let result = settle([("Alice", Money::from_cents(3000)), ("Bob", Money::from_cents(3000))]).unwrap();

        let output = render(|out| write_transfers(&result, out));
        assert_eq!(output, "payer,recipient,amount\n");
    }

    #[test]
    fn test_summary_csv() {
        let result = settle([
            ("Bob", Money::from_cents(2000)),
            ("Alice", Money::from_cents(6000)),
            ("Carol", Money::from_cents(4000)),
        ])
        .unwrap();

        let output = render(|out| write_summary(&result, out));
        assert_eq!(
            output,
            "name,paid,should_pay,balance,status\n\
             Alice,60.00,40.00,20.00,receives 20.00\n\
             Bob,20.00,40.00,-20.00,pays 20.00\n\
             Carol,40.00,40.00,0.00,even\n"
        );
    }
}
