use crate::domain::params::AuthorizeParameters;
use crate::error::Result;
use std::io::Read;

/// Reads authorization parameters from a JSON source.
///
/// Unknown keys are ignored and missing ones take their defaults, so a file only has to carry
/// what the merchant actually sets.
pub struct ParamsReader<R: Read> {
    source: R,
}

impl<R: Read> ParamsReader<R> {
    /// Creates a new `ParamsReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self { source }
    }

    pub fn parameters(self) -> Result<AuthorizeParameters> {
        Ok(serde_json::from_reader(self.source)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PaymentError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reader_full_document() {
        let data = r#"{
            "site": "1999888",
            "rank": "32",
            "identifier": "107904482",
            "amount": 12.5,
            "currency": "EUR",
            "transaction_id": "order-1",
            "card": { "email": "buyer@example.com" },
            "return_url": "https://shop.test/return",
            "subscriber": { "reference": "sub-1", "token": "tok", "expiry": "2512" },
            "want_abonne": true,
            "test_mode": true,
            "unknown": "ignored"
        }"#;

        let params = ParamsReader::new(data.as_bytes()).parameters().unwrap();

        assert_eq!(params.amount, Some(dec!(12.5)));
        assert_eq!(params.return_url(), Some("https://shop.test/return"));
        assert_eq!(params.token_expiry(), Some("2512"));
        assert!(params.want_abonne);
        assert!(params.test_mode);
        assert!(params.authorize_only);
    }

    #[test]
    fn test_reader_malformed_document() {
        let result = ParamsReader::new("{ not json".as_bytes()).parameters();
        assert!(matches!(result, Err(PaymentError::JsonError(_))));
    }
}
