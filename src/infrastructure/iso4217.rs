use crate::domain::ports::AmountFormatter;
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

struct Currency {
    alpha: &'static str,
    numeric: u16,
    exponent: u32,
}

const CURRENCIES: &[Currency] = &[
    Currency { alpha: "AUD", numeric: 36, exponent: 2 },
    Currency { alpha: "CAD", numeric: 124, exponent: 2 },
    Currency { alpha: "CHF", numeric: 756, exponent: 2 },
    Currency { alpha: "CNY", numeric: 156, exponent: 2 },
    Currency { alpha: "CZK", numeric: 203, exponent: 2 },
    Currency { alpha: "DKK", numeric: 208, exponent: 2 },
    Currency { alpha: "EUR", numeric: 978, exponent: 2 },
    Currency { alpha: "GBP", numeric: 826, exponent: 2 },
    Currency { alpha: "HKD", numeric: 344, exponent: 2 },
    Currency { alpha: "JPY", numeric: 392, exponent: 0 },
    Currency { alpha: "KWD", numeric: 414, exponent: 3 },
    Currency { alpha: "MAD", numeric: 504, exponent: 2 },
    Currency { alpha: "NOK", numeric: 578, exponent: 2 },
    Currency { alpha: "PLN", numeric: 985, exponent: 2 },
    Currency { alpha: "SEK", numeric: 752, exponent: 2 },
    Currency { alpha: "TND", numeric: 788, exponent: 3 },
    Currency { alpha: "USD", numeric: 840, exponent: 2 },
    Currency { alpha: "XOF", numeric: 952, exponent: 0 },
    Currency { alpha: "XPF", numeric: 953, exponent: 0 },
];

/// Table-backed ISO-4217 formatter covering the currencies the gateway settles in.
#[derive(Debug, Default, Clone, Copy)]
pub struct Iso4217Formatter;

impl Iso4217Formatter {
    pub fn new() -> Self {
        Self
    }

    fn lookup(currency: &str) -> Result<&'static Currency> {
        CURRENCIES
            .iter()
            .find(|c| c.alpha.eq_ignore_ascii_case(currency.trim()))
            .ok_or_else(|| PaymentError::CurrencyError(currency.to_string()))
    }
}

impl AmountFormatter for Iso4217Formatter {
    fn minor_units(&self, amount: Decimal, currency: &str) -> Result<i64> {
        let currency = Self::lookup(currency)?;

        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PaymentError::AmountError(format!(
                "amount {amount} must not be negative"
            )));
        }
        if amount.normalize().scale() > currency.exponent {
            return Err(PaymentError::AmountError(format!(
                "amount {amount} has more decimal places than {} allows",
                currency.alpha
            )));
        }

        amount
            .checked_mul(Decimal::from(10_i64.pow(currency.exponent)))
            .and_then(|minor| minor.to_i64())
            .ok_or_else(|| PaymentError::AmountError(format!("amount {amount} is too large")))
    }

    fn numeric_code(&self, currency: &str) -> Result<String> {
        Ok(format!("{:03}", Self::lookup(currency)?.numeric))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_minor_units_by_exponent() {
        let formatter = Iso4217Formatter::new();

        assert_eq!(formatter.minor_units(dec!(10.50), "EUR").unwrap(), 1050);
        assert_eq!(formatter.minor_units(dec!(10), "eur").unwrap(), 1000);
        assert_eq!(formatter.minor_units(dec!(1500), "JPY").unwrap(), 1500);
        assert_eq!(formatter.minor_units(dec!(1.234), "TND").unwrap(), 1234);
        assert_eq!(formatter.minor_units(dec!(0), "USD").unwrap(), 0);
    }

    #[test]
    fn test_trailing_zeros_are_accepted() {
        let formatter = Iso4217Formatter::new();
        assert_eq!(formatter.minor_units(dec!(12.3000), "EUR").unwrap(), 1230);
    }

    #[test]
    fn test_excess_precision_rejected() {
        let formatter = Iso4217Formatter::new();

        assert!(matches!(
            formatter.minor_units(dec!(10.505), "EUR"),
            Err(PaymentError::AmountError(_))
        ));
        assert!(matches!(
            formatter.minor_units(dec!(10.5), "JPY"),
            Err(PaymentError::AmountError(_))
        ));
    }

    #[test]
    fn test_oversized_amount_rejected() {
        let formatter = Iso4217Formatter::new();

        assert!(matches!(
            formatter.minor_units(Decimal::MAX, "EUR"),
            Err(PaymentError::AmountError(msg)) if msg.ends_with("is too large")
        ));
        assert!(matches!(
            formatter.minor_units(Decimal::from(i64::MAX), "JPY"),
            Ok(i64::MAX)
        ));
        assert!(matches!(
            formatter.minor_units(Decimal::from(i64::MAX), "EUR"),
            Err(PaymentError::AmountError(_))
        ));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let formatter = Iso4217Formatter::new();
        assert!(matches!(
            formatter.minor_units(dec!(-1.00), "EUR"),
            Err(PaymentError::AmountError(_))
        ));
    }

    #[test]
    fn test_numeric_codes_are_padded() {
        let formatter = Iso4217Formatter::new();

        assert_eq!(formatter.numeric_code("EUR").unwrap(), "978");
        assert_eq!(formatter.numeric_code("aud").unwrap(), "036");
        assert!(matches!(
            formatter.numeric_code("ZZZ"),
            Err(PaymentError::CurrencyError(code)) if code == "ZZZ"
        ));
    }
}
