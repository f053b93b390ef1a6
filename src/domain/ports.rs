use crate::error::Result;
use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;

/// Message authentication primitive keyed by the merchant secret.
pub trait Signer: Send + Sync {
    /// Signs `message` and returns the signature as a hex string.
    fn sign(&self, message: &[u8]) -> Result<String>;
}

/// Converts amounts and currencies to the gateway's wire representation.
pub trait AmountFormatter: Send + Sync {
    /// Amount in integer minor units of `currency` (e.g. cents).
    fn minor_units(&self, amount: Decimal, currency: &str) -> Result<i64>;
    /// ISO-4217 numeric code of `currency`, zero-padded to three digits.
    fn numeric_code(&self, currency: &str) -> Result<String>;
}

/// Source of the default transaction time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

pub type SignerBox = Box<dyn Signer>;
pub type AmountFormatterBox = Box<dyn AmountFormatter>;
pub type ClockBox = Box<dyn Clock>;
