use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// Card holder contact data carried alongside the payment.
#[derive(Debug, Deserialize, PartialEq, Clone, Default)]
pub struct CardHolder {
    pub email: Option<String>,
}

/// Stored-card ("abonne") data used for recurring charges.
#[derive(Debug, Deserialize, PartialEq, Clone, Default)]
pub struct Subscriber {
    /// Merchant-side subscriber reference (`PBX_REFABONNE`).
    pub reference: Option<String>,
    /// Gateway-issued card token (`PBX_TOKEN`).
    pub token: Option<String>,
    /// Card expiry date as expected by the gateway, e.g. `2512` (`PBX_DATEVAL`).
    pub expiry: Option<String>,
}

/// Everything the request builder reads to assemble an authorization request.
///
/// Optional strings count as unset when they are `None` or empty.
#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(default)]
pub struct AuthorizeParameters {
    pub site: String,
    pub rank: String,
    pub identifier: String,

    /// Amount in major units (e.g. `10.50`). An empty string reads as unset.
    #[serde(deserialize_with = "blank_as_none")]
    pub amount: Option<Decimal>,
    /// ISO-4217 alphabetic currency code (e.g. `EUR`).
    pub currency: Option<String>,
    pub transaction_id: Option<String>,
    pub card: CardHolder,
    /// Explicit transaction time in ISO-8601 with offset (e.g. `2011-02-28T11:01:50+01:00`),
    /// sent verbatim. The builder's clock is read when unset.
    pub time: Option<String>,
    pub authorize_only: bool,

    pub notify_url: Option<String>,
    pub return_url: Option<String>,
    pub cancel_url: Option<String>,

    pub subscriber: Subscriber,

    pub test_mode: bool,
    pub want_abonne: bool,
}

impl Default for AuthorizeParameters {
    fn default() -> Self {
        Self {
            site: String::new(),
            rank: String::new(),
            identifier: String::new(),
            amount: None,
            currency: None,
            transaction_id: None,
            card: CardHolder::default(),
            time: None,
            authorize_only: true,
            notify_url: None,
            return_url: None,
            cancel_url: None,
            subscriber: Subscriber::default(),
            test_mode: false,
            want_abonne: false,
        }
    }
}

impl AuthorizeParameters {
    pub fn currency(&self) -> Option<&str> {
        present(&self.currency)
    }

    pub fn email(&self) -> Option<&str> {
        present(&self.card.email)
    }

    pub fn time(&self) -> Option<&str> {
        present(&self.time)
    }

    pub fn notify_url(&self) -> Option<&str> {
        present(&self.notify_url)
    }

    pub fn return_url(&self) -> Option<&str> {
        present(&self.return_url)
    }

    pub fn cancel_url(&self) -> Option<&str> {
        present(&self.cancel_url)
    }

    pub fn subscriber_reference(&self) -> Option<&str> {
        present(&self.subscriber.reference)
    }

    pub fn token(&self) -> Option<&str> {
        present(&self.subscriber.token)
    }

    pub fn token_expiry(&self) -> Option<&str> {
        present(&self.subscriber.expiry)
    }

    pub fn has_token(&self) -> bool {
        self.token().is_some()
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AmountInput {
    Blank(String),
    Value(Decimal),
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<AmountInput>::deserialize(deserializer)? {
        None => Ok(None),
        Some(AmountInput::Value(amount)) => Ok(Some(amount)),
        Some(AmountInput::Blank(text)) if text.trim().is_empty() => Ok(None),
        Some(AmountInput::Blank(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
