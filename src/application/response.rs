use crate::domain::reply::{CompletedAuthorization, ResponsePayload, SUCCESS_CODE, fields};

/// Turns a gateway reply into a verdict. Missing fields never fail; they read as an
/// unsuccessful authorization with no reference and no message.
pub fn interpret(reply: &ResponsePayload) -> CompletedAuthorization {
    let outcome = CompletedAuthorization {
        successful: reply.get(fields::RESPONSE_CODE) == Some(SUCCESS_CODE),
        reference: reply.get(fields::TRANSACTION_ID).map(str::to_string),
        message: reply.get(fields::REASON_TEXT).map(str::to_string),
    };

    if outcome.successful {
        tracing::info!(reference = ?outcome.reference, "Authorization accepted");
    } else {
        tracing::warn!(
            code = ?reply.get(fields::RESPONSE_CODE),
            message = ?outcome.message,
            "Authorization not accepted"
        );
    }
    outcome
}
