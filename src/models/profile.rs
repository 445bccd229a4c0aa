use std::fmt;

use rust_decimal::Decimal;
use serde::Deserialize;

/// Client category, which fixes the account limits
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum ClientTier {
    Classic,
    Gold,
    Black,
}

impl ClientTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientTier::Classic => "CLASSIC",
            ClientTier::Gold => "GOLD",
            ClientTier::Black => "BLACK",
        }
    }

    /// Limits that apply to every client of this tier
    pub fn profile(&self) -> LimitProfile {
        LimitProfile::for_tier(*self)
    }
}

impl fmt::Display for ClientTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upper bound on an amount; `Unbounded` is never exceeded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cap {
    Limited(Decimal),
    Unbounded,
}

impl Cap {
    /// True when `amount` is strictly above the cap
    pub fn is_exceeded_by(&self, amount: Decimal) -> bool {
        match self {
            Cap::Limited(limit) => amount > *limit,
            Cap::Unbounded => false,
        }
    }
}

impl fmt::Display for Cap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cap::Limited(limit) => write!(f, "{}", limit),
            Cap::Unbounded => f.write_str("sin limite"),
        }
    }
}

/// Account limits of a tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitProfile {
    pub daily_withdrawal_cap: Decimal,
    pub incoming_transfer_cap: Cap,
    /// Fraction of the amount charged on outgoing transfers
    pub transfer_fee_rate: Decimal,
    pub overdraft_allowance: Decimal,
    pub dollar_purchases_allowed: bool,
    pub checkbook_cap: u32,
    pub credit_card_cap: u32,
}

impl LimitProfile {
    /// Look up the fixed limits of a tier
    pub fn for_tier(tier: ClientTier) -> Self {
        match tier {
            ClientTier::Classic => Self {
                daily_withdrawal_cap: Decimal::new(10_000, 0),
                incoming_transfer_cap: Cap::Limited(Decimal::new(150_000, 0)),
                transfer_fee_rate: Decimal::new(1, 2),
                overdraft_allowance: Decimal::ZERO,
                dollar_purchases_allowed: false,
                checkbook_cap: 0,
                credit_card_cap: 0,
            },
            ClientTier::Gold => Self {
                daily_withdrawal_cap: Decimal::new(20_000, 0),
                incoming_transfer_cap: Cap::Limited(Decimal::new(500_000, 0)),
                transfer_fee_rate: Decimal::new(5, 3),
                overdraft_allowance: Decimal::new(10_000, 0),
                dollar_purchases_allowed: true,
                checkbook_cap: 1,
                credit_card_cap: 1,
            },
            ClientTier::Black => Self {
                daily_withdrawal_cap: Decimal::new(100_000, 0),
                incoming_transfer_cap: Cap::Unbounded,
                transfer_fee_rate: Decimal::ZERO,
                overdraft_allowance: Decimal::new(10_000, 0),
                dollar_purchases_allowed: true,
                checkbook_cap: 2,
                credit_card_cap: 5,
            },
        }
    }
}
