use crate::error::Result;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Outbound wire field names understood by the gateway.
pub mod fields {
    pub const SITE: &str = "PBX_SITE";
    pub const RANK: &str = "PBX_RANG";
    pub const IDENTIFIER: &str = "PBX_IDENTIFIANT";
    pub const HASH: &str = "PBX_HASH";
    pub const TOTAL: &str = "PBX_TOTAL";
    pub const CURRENCY: &str = "PBX_DEVISE";
    pub const COMMAND: &str = "PBX_CMD";
    pub const HOLDER: &str = "PBX_PORTEUR";
    pub const ECHO_FIELDS: &str = "PBX_RETOUR";
    pub const TIME: &str = "PBX_TIME";
    pub const AUTHORIZE_ONLY: &str = "PBX_AUTOSEULE";
    pub const NOTIFY_URL: &str = "PBX_REPONDRE_A";
    pub const SUCCESS_URL: &str = "PBX_EFFECTUE";
    pub const REFUSED_URL: &str = "PBX_REFUSE";
    pub const CANCELLED_URL: &str = "PBX_ANNULE";
    pub const PENDING_URL: &str = "PBX_ATTENTE";
    pub const SUBSCRIBER_REFERENCE: &str = "PBX_REFABONNE";
    pub const SUBSCRIBER_TOKEN: &str = "PBX_TOKEN";
    pub const TOKEN_EXPIRY: &str = "PBX_DATEVAL";
    pub const SIGNATURE: &str = "PBX_HMAC";
}

pub type Field = (&'static str, String);

/// A group of fields produced by one of the builder's assemblers.
pub type FieldGroup = Vec<Field>;

/// Ordered field set under construction. Keys are unique; merging keeps the first value seen.
#[derive(Debug, Default, Clone)]
pub(crate) struct FieldSet {
    fields: Vec<Field>,
}

impl FieldSet {
    pub(crate) fn merge(&mut self, group: FieldGroup) {
        for (name, value) in group {
            if !self.contains(name) {
                self.fields.push((name, value));
            }
        }
    }

    pub(crate) fn insert(&mut self, name: &'static str, value: impl Into<String>) {
        self.merge(vec![(name, value.into())]);
    }

    fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|(n, _)| *n == name)
    }

    /// Canonical message the signature commits to: `KEY=VALUE` pairs joined by `&`, unescaped.
    pub(crate) fn signing_message(&self) -> String {
        self.fields
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub(crate) fn seal(mut self, signature: String) -> AssembledPayload {
        self.fields.retain(|(name, _)| *name != fields::SIGNATURE);
        self.fields.push((fields::SIGNATURE, signature));
        AssembledPayload {
            fields: self.fields,
        }
    }
}

/// Signed, ordered request payload ready to be posted to the gateway.
///
/// Only the request builder can produce one, and it offers no way to change a field once the
/// signature has been computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledPayload {
    fields: Vec<Field>,
}

impl AssembledPayload {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn signature(&self) -> &str {
        self.get(fields::SIGNATURE).unwrap_or_default()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(n, _)| *n)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(n, v)| (*n, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Encodes the payload as an `application/x-www-form-urlencoded` body.
    pub fn to_form_body(&self) -> Result<String> {
        Ok(serde_urlencoded::to_string(&self.fields)?)
    }
}

impl Serialize for AssembledPayload {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
