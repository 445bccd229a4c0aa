use std::fmt;

use rust_decimal::Decimal;
use serde::Deserialize;

/// Terminal state recorded for a transaction
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub enum Outcome {
    #[serde(rename = "ACEPTADA")]
    Accepted,
    #[serde(rename = "RECHAZADA")]
    Rejected,
}

impl Outcome {
    /// Name used in the input document and in the report
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Accepted => "ACEPTADA",
            Outcome::Rejected => "RECHAZADA",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type of transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    WithdrawalAtm,
    CreditCardIssue,
    CheckbookIssue,
    DollarPurchase,
    TransferOut,
    TransferIn,
}

impl TransactionType {
    /// Parse a type name from the input document. `COMPRAR_DOLAR` is an
    /// older spelling of `COMPRA_DOLAR`.
    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "RETIRO_EFECTIVO_CAJERO_AUTOMATICO" => Some(TransactionType::WithdrawalAtm),
            "ALTA_TARJETA_CREDITO" => Some(TransactionType::CreditCardIssue),
            "ALTA_CHEQUERA" => Some(TransactionType::CheckbookIssue),
            "COMPRA_DOLAR" | "COMPRAR_DOLAR" => Some(TransactionType::DollarPurchase),
            "TRANSFERENCIA_ENVIADA" => Some(TransactionType::TransferOut),
            "TRANSFERENCIA_RECIBIDA" => Some(TransactionType::TransferIn),
            _ => None,
        }
    }

    /// Canonical name of the type
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::WithdrawalAtm => "RETIRO_EFECTIVO_CAJERO_AUTOMATICO",
            TransactionType::CreditCardIssue => "ALTA_TARJETA_CREDITO",
            TransactionType::CheckbookIssue => "ALTA_CHEQUERA",
            TransactionType::DollarPurchase => "COMPRA_DOLAR",
            TransactionType::TransferOut => "TRANSFERENCIA_ENVIADA",
            TransactionType::TransferIn => "TRANSFERENCIA_RECIBIDA",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transaction as recorded in the client's history.
///
/// The open checkbook and credit card counts are the client's current ones,
/// shared by every transaction of the client.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub number: Option<u64>,
    pub account_number: Option<u64>,
    pub date: String,
    pub outcome: Outcome,
    pub tx_type: TransactionType,
    /// Type name exactly as written in the input
    pub type_name: String,
    pub amount: Decimal,
    pub balance: Decimal,
    pub remaining_daily_quota: Decimal,
    pub open_checkbooks: u32,
    pub open_credit_cards: u32,
}

impl Transaction {
    pub fn is_rejected(&self) -> bool {
        self.outcome == Outcome::Rejected
    }
}
