use chrono::DateTime;
use paybox_system::application::request_builder::RequestBuilder;
use paybox_system::domain::params::{AuthorizeParameters, CardHolder};
use paybox_system::infrastructure::clock::FixedClock;
use paybox_system::infrastructure::hmac_signer::HmacSha512Signer;
use paybox_system::infrastructure::iso4217::Iso4217Formatter;
use rust_decimal_macros::dec;

pub const HMAC_KEY: &str = "0123456789ABCDEF0123456789ABCDEF0123456789ABCDEF0123456789ABCDEF";
pub const FROZEN_TIME: &str = "2024-03-01T09:30:00+01:00";

/// Builder with the test key and a clock frozen at `FROZEN_TIME`.
pub fn frozen_builder() -> RequestBuilder {
    RequestBuilder::new(
        Box::new(HmacSha512Signer::from_hex(HMAC_KEY).unwrap()),
        Box::new(Iso4217Formatter::new()),
        Box::new(FixedClock(DateTime::parse_from_rfc3339(FROZEN_TIME).unwrap())),
    )
}

/// Smallest parameter set that passes validation.
pub fn valid_params() -> AuthorizeParameters {
    AuthorizeParameters {
        site: "1999888".to_string(),
        rank: "32".to_string(),
        identifier: "107904482".to_string(),
        amount: Some(dec!(10.50)),
        currency: Some("EUR".to_string()),
        transaction_id: Some("order-42".to_string()),
        card: CardHolder {
            email: Some("buyer@example.com".to_string()),
        },
        ..Default::default()
    }
}
