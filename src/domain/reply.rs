use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Reply field names posted back by the gateway.
pub mod fields {
    pub const RESPONSE_CODE: &str = "x_response_code";
    pub const TRANSACTION_ID: &str = "x_trans_id";
    pub const REASON_TEXT: &str = "x_response_reason_text";
}

/// Response code the gateway uses for an accepted authorization.
pub const SUCCESS_CODE: &str = "1";

/// Fields of a gateway reply, as received on the return or notify URL.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ResponsePayload {
    fields: HashMap<String, String>,
}

impl ResponsePayload {
    /// Parses a reply from a urlencoded query string or form body. A leading `?` is ignored.
    pub fn from_query(query: &str) -> Result<Self> {
        let query = query.trim().trim_start_matches('?');
        Ok(Self {
            fields: serde_urlencoded::from_str(query)?,
        })
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for ResponsePayload
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Verdict extracted from a gateway reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompletedAuthorization {
    pub successful: bool,
    pub reference: Option<String>,
    pub message: Option<String>,
}
