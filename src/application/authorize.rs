use crate::application::endpoint::endpoint;
use crate::application::request_builder::RequestBuilder;
use crate::domain::params::AuthorizeParameters;
use crate::domain::payload::AssembledPayload;
use crate::error::Result;
use serde::Serialize;

/// Payment method this request type handles.
pub const PAYMENT_METHOD: &str = "card";
/// Gateway transaction type for an authorization.
pub const TRANSACTION_TYPE: &str = "00001";

/// What the customer's browser must be sent: a form POST of `fields` to `url`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RedirectForm {
    pub url: &'static str,
    pub method: &'static str,
    pub fields: AssembledPayload,
}

impl RedirectForm {
    /// The gateway never answers an authorization inline; the customer is always redirected.
    pub fn is_redirect(&self) -> bool {
        true
    }

    pub fn is_successful(&self) -> bool {
        false
    }
}

/// Off-site authorization: builds the signed payload and pairs it with the payment page URL.
pub struct AuthorizeRequest {
    builder: RequestBuilder,
}

impl AuthorizeRequest {
    pub fn new(builder: RequestBuilder) -> Self {
        Self { builder }
    }

    pub fn payment_method(&self) -> &'static str {
        PAYMENT_METHOD
    }

    pub fn transaction_type(&self) -> &'static str {
        TRANSACTION_TYPE
    }

    pub fn redirect(&self, params: &AuthorizeParameters) -> Result<RedirectForm> {
        let fields = self.builder.build(params)?;
        Ok(RedirectForm {
            url: endpoint(params.test_mode),
            method: "POST",
            fields,
        })
    }
}
