use rust_decimal::Decimal;

use crate::engine::{ReasonEngine, RejectionReason};
use crate::models::{Client, ClientTier, LimitProfile, Outcome, TransactionType};

/// Client details shown at the top of the report
#[derive(Debug, Clone, PartialEq)]
pub struct ClientSummary {
    pub full_name: String,
    pub number: u64,
    pub dni: String,
    /// Single line: street and number, city, province, country
    pub address: String,
    pub tier: ClientTier,
    pub profile: LimitProfile,
}

/// One transaction of the report with its explanation
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    pub date: String,
    pub tx_type: TransactionType,
    /// Type as written in the input, shown in the report
    pub type_name: String,
    pub outcome: Outcome,
    pub amount: Decimal,
    /// Empty for accepted transactions
    pub reason: String,
}

/// Header followed by one row per transaction, in input order
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub header: ClientSummary,
    pub rows: Vec<TransactionRow>,
}

impl Report {
    /// Number of rows including the header
    pub fn row_count(&self) -> usize {
        1 + self.rows.len()
    }
}

/// Project a client into its report, explaining every rejection
pub fn build_report(client: &Client) -> Report {
    let engine = ReasonEngine::for_client(client);

    let header = ClientSummary {
        full_name: client.full_name(),
        number: client.number,
        dni: client.dni.clone(),
        address: client.address.to_string(),
        tier: client.tier,
        profile: client.profile,
    };

    let rows = client
        .transactions
        .iter()
        .enumerate()
        .map(|(index, tx)| {
            let reason = engine.explain(tx);
            if reason == Some(RejectionReason::Unknown) {
                eprintln!(
                    "Warning: No known cause for rejected {} transaction #{} of client {}",
                    tx.tx_type,
                    tx.number.unwrap_or(index as u64 + 1),
                    client.number
                );
            }

            TransactionRow {
                date: tx.date.clone(),
                tx_type: tx.tx_type,
                type_name: tx.type_name.clone(),
                outcome: tx.outcome,
                amount: tx.amount,
                reason: reason.map(|r| r.to_string()).unwrap_or_default(),
            }
        })
        .collect();

    Report { header, rows }
}
