use crate::domain::reply::ResponsePayload;
use crate::error::Result;

/// Parses a gateway reply given either as a JSON object or as a urlencoded query string.
pub fn read_reply(input: &str) -> Result<ResponsePayload> {
    let input = input.trim();
    if input.starts_with('{') {
        Ok(serde_json::from_str(input)?)
    } else {
        ResponsePayload::from_query(input)
    }
}
