pub const PRODUCTION_URL: &str = "https://tpeweb.e-transactions.fr/cgi/MYchoix_pagepaiement.cgi";
pub const TEST_URL: &str =
    "https://preprod-tpeweb.e-transactions.fr/cgi/MYchoix_pagepaiement.cgi";

/// Payment page the form is posted to; the pre-production host speaks the same protocol.
pub fn endpoint(test_mode: bool) -> &'static str {
    let url = if test_mode { TEST_URL } else { PRODUCTION_URL };
    tracing::debug!(%url, test_mode, "Selected gateway endpoint");
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_distinct_and_stable() {
        assert_eq!(endpoint(false), PRODUCTION_URL);
        assert_eq!(endpoint(true), TEST_URL);
        assert_ne!(endpoint(true), endpoint(false));
        assert_eq!(endpoint(true), endpoint(true));
    }

    #[test]
    fn test_endpoints_are_https() {
        assert!(endpoint(false).starts_with("https://"));
        assert!(endpoint(true).starts_with("https://"));
    }
}
