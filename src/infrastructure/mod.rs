//! Concrete collaborators behind the domain ports.

pub mod clock;
pub mod hmac_signer;
pub mod iso4217;
