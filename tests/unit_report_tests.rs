mod common;

use common::{make_accepted, make_client, make_issue_request, make_rejected};
use rejection_report::models::{ClientTier, Outcome, TransactionType};
use rejection_report::report::build_report;
use rust_decimal_macros::dec;

#[test]
fn test_header_describes_client() {
    let client = make_client(ClientTier::Gold, Vec::new());
    let report = build_report(&client);

    assert_eq!(report.header.full_name, "Nicolas Gaston");
    assert_eq!(report.header.number, 100001);
    assert_eq!(report.header.dni, "29494777");
    assert_eq!(
        report.header.address,
        "Rivadavia 7900, Capital Federal, Buenos Aires, Argentina"
    );
    assert_eq!(report.header.tier, ClientTier::Gold);
    assert_eq!(report.header.profile, ClientTier::Gold.profile());
}

#[test]
fn test_client_without_transactions_has_only_header() {
    let client = make_client(ClientTier::Classic, Vec::new());
    let report = build_report(&client);

    assert!(report.rows.is_empty());
    assert_eq!(report.row_count(), 1);
}

#[test]
fn test_one_row_per_transaction() {
    let transactions = vec![
        make_accepted(TransactionType::TransferIn, dec!(1000), dec!(0)),
        make_rejected(TransactionType::WithdrawalAtm, dec!(5000), dec!(2000), dec!(9999)),
        make_issue_request(TransactionType::CheckbookIssue, 0, 0),
    ];
    let client = make_client(ClientTier::Classic, transactions);
    let report = build_report(&client);

    assert_eq!(report.rows.len(), 3);
    assert_eq!(report.row_count(), 4);
}

#[test]
fn test_rows_keep_input_order_and_reasons() {
    let mut first = make_rejected(TransactionType::TransferIn, dec!(600000), dec!(0), dec!(0));
    first.date = "01/01/2022 10:00:00".to_string();
    let mut second = make_accepted(TransactionType::WithdrawalAtm, dec!(100), dec!(500));
    second.date = "02/01/2022 10:00:00".to_string();
    let mut third = make_issue_request(TransactionType::CreditCardIssue, 0, 1);
    third.date = "03/01/2022 10:00:00".to_string();

    let client = make_client(ClientTier::Gold, vec![first, second, third]);
    let report = build_report(&client);

    let dates: Vec<&str> = report.rows.iter().map(|row| row.date.as_str()).collect();
    assert_eq!(
        dates,
        vec!["01/01/2022 10:00:00", "02/01/2022 10:00:00", "03/01/2022 10:00:00"]
    );

    assert_eq!(report.rows[0].reason, "Excede el monto limite a recibir");
    assert_eq!(report.rows[0].outcome, Outcome::Rejected);
    assert_eq!(report.rows[0].amount, dec!(600000));

    assert_eq!(report.rows[1].reason, "");
    assert_eq!(report.rows[1].outcome, Outcome::Accepted);
    assert_eq!(report.rows[1].tx_type, TransactionType::WithdrawalAtm);

    assert_eq!(report.rows[2].reason, "Alcanzo el limite de tarjetas de credito");
}

#[test]
fn test_unknown_reason_is_reported_not_dropped() {
    let tx = make_rejected(TransactionType::WithdrawalAtm, dec!(15000), dec!(10000), dec!(50000));
    let client = make_client(ClientTier::Black, vec![tx]);
    let report = build_report(&client);

    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].reason, "Razon desconocida");
}

#[test]
fn test_report_is_deterministic() {
    let transactions = vec![
        make_rejected(TransactionType::DollarPurchase, dec!(100), dec!(50), dec!(0)),
        make_accepted(TransactionType::TransferOut, dec!(10), dec!(100)),
    ];
    let client = make_client(ClientTier::Black, transactions);

    assert_eq!(build_report(&client), build_report(&client));
}

#[test]
fn test_rows_keep_type_spelling_from_input() {
    let mut tx = make_rejected(TransactionType::DollarPurchase, dec!(100), dec!(50), dec!(0));
    tx.type_name = "COMPRAR_DOLAR".to_string();
    let client = make_client(ClientTier::Gold, vec![tx]);
    let report = build_report(&client);

    assert_eq!(report.rows[0].tx_type, TransactionType::DollarPurchase);
    assert_eq!(report.rows[0].type_name, "COMPRAR_DOLAR");
    assert_eq!(report.rows[0].reason, "Fondos insuficientes");
}
