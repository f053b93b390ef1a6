use crate::domain::ports::Signer;
use crate::error::{PaymentError, Result};
use hmac::{Hmac, Mac};
use sha2::Sha512;

type HmacSha512 = Hmac<Sha512>;

/// HMAC-SHA512 signer keyed by the merchant's hex-encoded secret.
///
/// Produces an uppercase hex digest, which is the form the gateway compares against.
#[derive(Clone)]
pub struct HmacSha512Signer {
    key: Vec<u8>,
}

impl HmacSha512Signer {
    /// Creates a signer from the hex secret shown in the merchant back office.
    pub fn from_hex(key: &str) -> Result<Self> {
        let key = hex::decode(key.trim())?;
        if key.is_empty() {
            return Err(PaymentError::KeyLengthError);
        }
        Ok(Self { key })
    }
}

impl std::fmt::Debug for HmacSha512Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmacSha512Signer")
            .field("key", &"***")
            .finish()
    }
}

impl Signer for HmacSha512Signer {
    fn sign(&self, message: &[u8]) -> Result<String> {
        let mut mac =
            HmacSha512::new_from_slice(&self.key).map_err(|_| PaymentError::KeyLengthError)?;
        mac.update(message);
        Ok(hex::encode_upper(mac.finalize().into_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "0123456789ABCDEF0123456789ABCDEF";

    #[test]
    fn test_known_signature() {
        let signer = HmacSha512Signer::from_hex(KEY).unwrap();
        let signature = signer.sign(b"PBX_SITE=1999888&PBX_RANG=32").unwrap();

        assert_eq!(
            signature,
            "773DE2787ED29C33774A5ECCBDA22C996861724AF0B89CCDFB0B69C8F8E357285D64210F5929B239E7383B35B12CDB00A34CEABCB148A701A6BA0163C72BED69"
        );
    }

    #[test]
    fn test_lowercase_key_is_equivalent() {
        let upper = HmacSha512Signer::from_hex(KEY).unwrap();
        let lower = HmacSha512Signer::from_hex(&KEY.to_lowercase()).unwrap();

        assert_eq!(upper.sign(b"abc").unwrap(), lower.sign(b"abc").unwrap());
    }

    #[test]
    fn test_invalid_keys_rejected() {
        assert!(matches!(
            HmacSha512Signer::from_hex("not hex"),
            Err(PaymentError::KeyError(_))
        ));
        assert!(matches!(
            HmacSha512Signer::from_hex("ABC"),
            Err(PaymentError::KeyError(_))
        ));
        assert!(matches!(
            HmacSha512Signer::from_hex(""),
            Err(PaymentError::KeyLengthError)
        ));
    }

    #[test]
    fn test_debug_hides_key() {
        let signer = HmacSha512Signer::from_hex(KEY).unwrap();
        assert!(!format!("{signer:?}").contains("01"));
    }
}
