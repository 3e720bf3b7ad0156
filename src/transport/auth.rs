use base64::{Engine, engine::general_purpose::STANDARD};

use crate::domain::{Phone, SessionToken};

/// Value of the `Authorization` header for an authenticated call.
///
/// The service uses HTTP Basic auth with the account phone as the user and the
/// session token as the password: `Basic base64("{phone}:{token}")`. Standard
/// alphabet, with padding. The token may be empty (client not yet logged in),
/// in which case the encoded credential is `"{phone}:"`.
pub fn basic_auth_value(phone: &Phone, token: &SessionToken) -> String {
    let credentials = format!("{}:{}", phone.as_str(), token.as_str());
    format!("Basic {}", STANDARD.encode(credentials))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_phone_colon_token() {
        let phone = Phone::new("+79261234567").unwrap();
        let token = SessionToken::new("248916");
        // base64("+79261234567:248916")
        assert_eq!(
            basic_auth_value(&phone, &token),
            "Basic Kzc5MjYxMjM0NTY3OjI0ODkxNg=="
        );
    }

    #[test]
    fn empty_token_still_carries_the_separator() {
        let phone = Phone::new("+79261234567").unwrap();
        let token = SessionToken::default();
        // base64("+79261234567:")
        assert_eq!(
            basic_auth_value(&phone, &token),
            "Basic Kzc5MjYxMjM0NTY3Og=="
        );
    }

    #[test]
    fn value_changes_with_the_token() {
        let phone = Phone::new("+79261234567").unwrap();
        let before = basic_auth_value(&phone, &SessionToken::default());
        let after = basic_auth_value(&phone, &SessionToken::new("248916"));
        assert_ne!(before, after);
    }
}
