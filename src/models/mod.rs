pub mod client;
pub mod profile;
pub mod transaction;

pub use client::{AccountSnapshot, Address, Client};
pub use profile::{Cap, ClientTier, LimitProfile};
pub use transaction::{Outcome, Transaction, TransactionType};
