//! Application layer containing the request/response logic for the gateway.
//!
//! `RequestBuilder` assembles and signs the outbound payload, `endpoint` picks the payment page,
//! `AuthorizeRequest` pairs the two into a redirect form, and `interpret` reads the reply.

pub mod authorize;
pub mod endpoint;
pub mod request_builder;
pub mod response;
