use std::fmt;

use serde::Deserialize;

use super::profile::{ClientTier, LimitProfile};
use super::transaction::Transaction;

/// Postal address of a client
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Address {
    #[serde(rename = "calle")]
    pub street: String,
    #[serde(rename = "numero")]
    pub number: String,
    #[serde(rename = "ciudad")]
    pub city: String,
    #[serde(rename = "provincia")]
    pub province: String,
    #[serde(rename = "pais")]
    pub country: String,
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, {}, {}, {}",
            self.street, self.number, self.city, self.province, self.country
        )
    }
}

/// Open checkbooks and credit cards of the account, as first reported in
/// the client's transaction history
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccountSnapshot {
    pub open_checkbooks: u32,
    pub open_credit_cards: u32,
}

/// Client identity, limits and transaction history
#[derive(Debug, Clone)]
pub struct Client {
    pub number: u64,
    pub name: String,
    pub surname: String,
    pub dni: String,
    pub tier: ClientTier,
    pub address: Address,
    pub profile: LimitProfile,
    pub snapshot: AccountSnapshot,
    /// In input order
    pub transactions: Vec<Transaction>,
}

impl Client {
    /// Name and surname as shown in the report
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}
