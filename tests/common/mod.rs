#![allow(dead_code)]

use rejection_report::models::{
    AccountSnapshot, Address, Client, ClientTier, Outcome, Transaction, TransactionType,
};
use rust_decimal::Decimal;

/// Helper to create a transaction with all fields
pub fn make_transaction(
    outcome: Outcome,
    tx_type: TransactionType,
    amount: Decimal,
    balance: Decimal,
    remaining_daily_quota: Decimal,
) -> Transaction {
    Transaction {
        number: None,
        account_number: None,
        date: "10/10/2022 16:14:43".to_string(),
        outcome,
        tx_type,
        type_name: tx_type.as_str().to_string(),
        amount,
        balance,
        remaining_daily_quota,
        open_checkbooks: 0,
        open_credit_cards: 0,
    }
}

/// Helper to create a rejected transaction
pub fn make_rejected(
    tx_type: TransactionType,
    amount: Decimal,
    balance: Decimal,
    remaining_daily_quota: Decimal,
) -> Transaction {
    make_transaction(Outcome::Rejected, tx_type, amount, balance, remaining_daily_quota)
}

/// Helper to create an accepted transaction
pub fn make_accepted(tx_type: TransactionType, amount: Decimal, balance: Decimal) -> Transaction {
    make_transaction(Outcome::Accepted, tx_type, amount, balance, balance)
}

/// Helper to create a rejected issuance request with the given open counts
pub fn make_issue_request(
    tx_type: TransactionType,
    open_checkbooks: u32,
    open_credit_cards: u32,
) -> Transaction {
    Transaction {
        open_checkbooks,
        open_credit_cards,
        ..make_rejected(tx_type, Decimal::ZERO, Decimal::ZERO, Decimal::ZERO)
    }
}

/// Helper to create a client of the given tier
pub fn make_client(tier: ClientTier, transactions: Vec<Transaction>) -> Client {
    Client {
        number: 100001,
        name: "Nicolas".to_string(),
        surname: "Gaston".to_string(),
        dni: "29494777".to_string(),
        tier,
        address: Address {
            street: "Rivadavia".to_string(),
            number: "7900".to_string(),
            city: "Capital Federal".to_string(),
            province: "Buenos Aires".to_string(),
            country: "Argentina".to_string(),
        },
        profile: tier.profile(),
        snapshot: AccountSnapshot::default(),
        transactions,
    }
}

/// Build a client document with the given tier and raw transaction objects
pub fn build_document(tier: &str, transactions: &[&str]) -> String {
    format!(
        r#"{{
  "numero": 100001,
  "nombre": "Nicolas",
  "apellido": "Gaston",
  "dni": "29494777",
  "tipo": "{}",
  "direccion": {{
    "calle": "Rivadavia",
    "numero": "7900",
    "ciudad": "Capital Federal",
    "provincia": "Buenos Aires",
    "pais": "Argentina"
  }},
  "transacciones": [{}]
}}"#,
        tier,
        transactions.join(",")
    )
}

/// Process a JSON string through the pipeline and return the HTML output
pub fn process_json_string(json: &str) -> Result<String, Box<dyn std::error::Error>> {
    let mut output = Vec::new();
    rejection_report::process_client(json.as_bytes(), &mut output)?;
    Ok(String::from_utf8(output)?)
}

/// Assert that the HTML contains a transaction row with the given cells
pub fn assert_row(
    html: &str,
    date: &str,
    tx_type: &str,
    outcome: &str,
    amount: &str,
    reason: &str,
) {
    let pattern = format!(
        "<td>{}</td><td>{}</td><td>{}</td><td class=\"amount\">{}</td><td>{}</td>",
        date, tx_type, outcome, amount, reason
    );

    assert!(
        html.contains(&pattern),
        "Expected output to contain row {}\nActual output:\n{}",
        pattern,
        html
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_make_rejected() {
        let tx = make_rejected(TransactionType::WithdrawalAtm, dec!(5000), dec!(2000), dec!(9999));
        assert_eq!(tx.outcome, Outcome::Rejected);
        assert_eq!(tx.amount, dec!(5000));
        assert_eq!(tx.balance, dec!(2000));
        assert_eq!(tx.remaining_daily_quota, dec!(9999));
    }

    #[test]
    fn test_build_document() {
        let json = build_document("GOLD", &[r#"{"a": 1}"#, r#"{"b": 2}"#]);
        assert!(json.contains(r#""tipo": "GOLD""#));
        assert!(json.contains(r#"[{"a": 1},{"b": 2}]"#));
    }
}
