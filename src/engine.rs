use std::fmt;

use rust_decimal::Decimal;

use crate::models::{Client, ClientTier, LimitProfile, Transaction, TransactionType};

/// Message returned when a rejection matches none of the known causes
pub const UNKNOWN_REASON: &str = "Razon desconocida";

/// Why a rejected transaction was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    /// The tier is not allowed to buy dollars
    DollarPurchaseNotAllowed(ClientTier),
    InsufficientFunds,
    CreditCardLimitReached,
    /// The tier is not allowed to request checkbooks
    CheckbookNotAllowed(ClientTier),
    CheckbookLimitReached,
    InsufficientBalance,
    DailyQuotaExceeded,
    IncomingTransferCapExceeded,
    /// No known cause matches the recorded fields
    Unknown,
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::DollarPurchaseNotAllowed(tier) => {
                write!(f, "Los clientes {} no pueden comprar dolares", tier)
            }
            RejectionReason::InsufficientFunds => f.write_str("Fondos insuficientes"),
            RejectionReason::CreditCardLimitReached => {
                f.write_str("Alcanzo el limite de tarjetas de credito")
            }
            RejectionReason::CheckbookNotAllowed(tier) => {
                write!(f, "Los clientes {} no pueden solicitar chequeras", tier)
            }
            RejectionReason::CheckbookLimitReached => f.write_str("Alcanzo el limite de chequeras"),
            RejectionReason::InsufficientBalance => f.write_str("Saldo en cuenta insuficiente"),
            RejectionReason::DailyQuotaExceeded => {
                f.write_str("La operacion excede el limite de cupo diario restante")
            }
            RejectionReason::IncomingTransferCapExceeded => {
                f.write_str("Excede el monto limite a recibir")
            }
            RejectionReason::Unknown => f.write_str(UNKNOWN_REASON),
        }
    }
}

/// Explain the outcome of a transaction as a message.
///
/// Accepted transactions always yield an empty string. Rejected ones yield
/// the message of the first matching rule for their type, or
/// [`UNKNOWN_REASON`].
pub fn infer_reason(profile: &LimitProfile, tier: ClientTier, tx: &Transaction) -> String {
    match classify(profile, tier, tx) {
        Some(reason) => reason.to_string(),
        None => String::new(),
    }
}

/// Structured form of [`infer_reason`]: `None` for accepted transactions
pub fn classify(
    profile: &LimitProfile,
    tier: ClientTier,
    tx: &Transaction,
) -> Option<RejectionReason> {
    // Accepted transactions are never second-guessed
    if !tx.is_rejected() {
        return None;
    }

    let reason = match tx.tx_type {
        TransactionType::DollarPurchase => dollar_purchase(profile, tier, tx),
        TransactionType::CreditCardIssue => credit_card_issue(profile, tx),
        TransactionType::CheckbookIssue => checkbook_issue(profile, tier, tx),
        TransactionType::WithdrawalAtm => withdrawal_atm(profile, tier, tx),
        TransactionType::TransferOut => transfer_out(profile, tx),
        TransactionType::TransferIn => transfer_in(profile, tx),
    };

    Some(reason)
}

fn dollar_purchase(profile: &LimitProfile, tier: ClientTier, tx: &Transaction) -> RejectionReason {
    if !profile.dollar_purchases_allowed {
        RejectionReason::DollarPurchaseNotAllowed(tier)
    } else if tx.amount > tx.balance {
        RejectionReason::InsufficientFunds
    } else {
        RejectionReason::Unknown
    }
}

fn credit_card_issue(profile: &LimitProfile, tx: &Transaction) -> RejectionReason {
    if tx.open_credit_cards >= profile.credit_card_cap {
        RejectionReason::CreditCardLimitReached
    } else {
        RejectionReason::Unknown
    }
}

fn checkbook_issue(profile: &LimitProfile, tier: ClientTier, tx: &Transaction) -> RejectionReason {
    // CLASSIC wins over the counter check, even with room left under the cap
    if tier == ClientTier::Classic {
        RejectionReason::CheckbookNotAllowed(tier)
    } else if tx.open_checkbooks >= profile.checkbook_cap {
        RejectionReason::CheckbookLimitReached
    } else {
        RejectionReason::Unknown
    }
}

fn withdrawal_atm(profile: &LimitProfile, tier: ClientTier, tx: &Transaction) -> RejectionReason {
    let overdraft = match tier {
        ClientTier::Classic => Decimal::ZERO,
        _ => profile.overdraft_allowance,
    };

    if tx.amount > tx.balance.saturating_add(overdraft) {
        RejectionReason::InsufficientBalance
    } else if tx.amount > tx.remaining_daily_quota {
        RejectionReason::DailyQuotaExceeded
    } else {
        RejectionReason::Unknown
    }
}

fn transfer_out(profile: &LimitProfile, tx: &Transaction) -> RejectionReason {
    // A debit too large to represent can never be covered
    let total_debit = tx
        .amount
        .checked_mul(profile.transfer_fee_rate)
        .and_then(|fee| tx.amount.checked_add(fee));
    let available = tx.balance.saturating_add(profile.overdraft_allowance);

    match total_debit {
        Some(debit) if debit <= available => RejectionReason::Unknown,
        _ => RejectionReason::InsufficientBalance,
    }
}

fn transfer_in(profile: &LimitProfile, tx: &Transaction) -> RejectionReason {
    if profile.incoming_transfer_cap.is_exceeded_by(tx.amount) {
        RejectionReason::IncomingTransferCapExceeded
    } else {
        RejectionReason::Unknown
    }
}

/// Reason inference bound to one client's tier and limits
pub struct ReasonEngine {
    tier: ClientTier,
    profile: LimitProfile,
}

impl ReasonEngine {
    /// Create an engine using the client's own tier and profile
    pub fn for_client(client: &Client) -> Self {
        Self {
            tier: client.tier,
            profile: client.profile,
        }
    }

    /// Classify a single transaction
    pub fn explain(&self, tx: &Transaction) -> Option<RejectionReason> {
        classify(&self.profile, self.tier, tx)
    }
}
