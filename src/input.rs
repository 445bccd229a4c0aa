use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ReportError, Result};
use crate::models::{
    AccountSnapshot, Address, Client, ClientTier, Outcome, Transaction, TransactionType,
};
use crate::validate::{validate_document, SchemaIssue};

/// Client document as it appears in the input file
#[derive(Debug, Deserialize)]
struct ClientRecord {
    #[serde(rename = "numero", deserialize_with = "deserialize_count")]
    number: u64,
    #[serde(rename = "nombre")]
    name: String,
    #[serde(rename = "apellido")]
    surname: String,
    #[serde(alias = "DNI")]
    dni: String,
    #[serde(rename = "tipo")]
    tier: ClientTier,
    #[serde(rename = "direccion")]
    address: Address,
    #[serde(rename = "transacciones")]
    transactions: Vec<TransactionRecord>,
}

/// Transaction entry as it appears in the input file
#[derive(Debug, Deserialize)]
struct TransactionRecord {
    #[serde(rename = "numero", default, deserialize_with = "deserialize_optional_count")]
    number: Option<u64>,
    #[serde(rename = "cuentaNumero", default, deserialize_with = "deserialize_optional_count")]
    account_number: Option<u64>,
    #[serde(rename = "fecha")]
    date: String,
    #[serde(rename = "estado")]
    outcome: Outcome,
    #[serde(rename = "tipo")]
    type_name: String,
    #[serde(rename = "monto")]
    amount: Decimal,
    #[serde(rename = "saldoEnCuenta")]
    balance: Decimal,
    #[serde(rename = "cupoDiarioRestante")]
    remaining_daily_quota: Decimal,
    #[serde(
        rename = "totalChequerasActualmente",
        default,
        deserialize_with = "deserialize_optional_count"
    )]
    open_checkbooks: Option<u64>,
    #[serde(
        rename = "totalTarjetasDeCreditoActualmente",
        default,
        deserialize_with = "deserialize_optional_count"
    )]
    open_credit_cards: Option<u64>,
}

/// Counters may be written as `2` or `2.0`; the schema check has already
/// rejected fractional and negative values
fn number_to_count<E>(number: &serde_json::Number) -> std::result::Result<u64, E>
where
    E: serde::de::Error,
{
    if let Some(value) = number.as_u64() {
        return Ok(value);
    }
    match number.as_f64() {
        Some(value) if value >= 0.0 && value.fract() == 0.0 => Ok(value as u64),
        _ => Err(E::custom(format!("expected a non-negative integer, got {}", number))),
    }
}

fn deserialize_count<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    number_to_count(&number)
}

fn deserialize_optional_count<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<serde_json::Number>::deserialize(deserializer)?
        .map(|number| number_to_count(&number))
        .transpose()
}

/// Read, check and load the client document at `path`
pub fn load_client(path: &Path) -> Result<Client> {
    let content = fs::read_to_string(path).map_err(|source| ReportError::InputUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    parse_client(&content)
}

/// Check and load a client document from its JSON text
pub fn parse_client(content: &str) -> Result<Client> {
    if content.trim().is_empty() {
        return Err(ReportError::EmptyInput);
    }

    let document: Value = serde_json::from_str(content).map_err(ReportError::InvalidJson)?;

    let issues = validate_document(&document);
    if !issues.is_empty() {
        return Err(ReportError::Schema(issues));
    }

    let record: ClientRecord = serde_json::from_value(document)
        .map_err(|err| schema_error("$".to_string(), err.to_string()))?;

    into_client(record)
}

fn schema_error(path: String, message: String) -> ReportError {
    ReportError::Schema(vec![SchemaIssue { path, message }])
}

fn into_client(record: ClientRecord) -> Result<Client> {
    let snapshot = account_snapshot(record.number, &record.transactions);

    // Counters are the client's current ones: every transaction shares the snapshot
    let transactions = record
        .transactions
        .into_iter()
        .enumerate()
        .map(|(index, tx)| {
            let tx_type = TransactionType::from_wire(&tx.type_name).ok_or_else(|| {
                schema_error(
                    format!("transacciones[{}].tipo", index),
                    format!("unknown transaction type {}", tx.type_name),
                )
            })?;

            Ok(Transaction {
                number: tx.number,
                account_number: tx.account_number,
                date: tx.date,
                outcome: tx.outcome,
                tx_type,
                type_name: tx.type_name,
                amount: tx.amount,
                balance: tx.balance,
                remaining_daily_quota: tx.remaining_daily_quota,
                open_checkbooks: snapshot.open_checkbooks,
                open_credit_cards: snapshot.open_credit_cards,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Client {
        number: record.number,
        name: record.name,
        surname: record.surname,
        dni: record.dni,
        tier: record.tier,
        address: record.address,
        profile: record.tier.profile(),
        snapshot,
        transactions,
    })
}

/// Each counter comes from the first record that carries it
fn account_snapshot(client: u64, transactions: &[TransactionRecord]) -> AccountSnapshot {
    let open_checkbooks = transactions
        .iter()
        .find_map(|tx| tx.open_checkbooks);
    let open_credit_cards = transactions
        .iter()
        .find_map(|tx| tx.open_credit_cards);

    if !transactions.is_empty() && (open_checkbooks.is_none() || open_credit_cards.is_none()) {
        eprintln!(
            "Warning: No open checkbook or credit card count reported for client {}, assuming 0",
            client
        );
    }

    AccountSnapshot {
        open_checkbooks: open_checkbooks.map(saturating_u32).unwrap_or(0),
        open_credit_cards: open_credit_cards.map(saturating_u32).unwrap_or(0),
    }
}

fn saturating_u32(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
