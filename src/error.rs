use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Validation error: the {0} parameter is required")]
    ValidationError(String),
    #[error("Amount error: {0}")]
    AmountError(String),
    #[error("Currency error: unsupported currency {0:?}")]
    CurrencyError(String),
    #[error("HMAC key error: {0}")]
    KeyError(#[from] hex::FromHexError),
    #[error("HMAC key error: the key must not be empty")]
    KeyLengthError,
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Form decode error: {0}")]
    FormDecodeError(#[from] serde_urlencoded::de::Error),
    #[error("Form encode error: {0}")]
    FormEncodeError(#[from] serde_urlencoded::ser::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
