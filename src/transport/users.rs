use serde::{Deserialize, Serialize};

use crate::domain::{Email, LoginInfo, Phone};

/// Account display name sent with every signup request. The service requires
/// the field but identifies accounts by phone number.
pub const SIGNUP_ACCOUNT_NAME: &str = "test_name";

#[derive(Debug, Clone, Serialize)]
struct SignupJsonRequest<'a> {
    email: &'a str,
    name: &'a str,
    phone: &'a str,
}

#[derive(Debug, Clone, Serialize)]
struct RestoreJsonRequest<'a> {
    phone: &'a str,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoginJsonResponse {
    email: String,
    name: String,
}

/// JSON body for `POST v1/mobile/users/signup`.
pub fn encode_signup_json(email: &Email, phone: &Phone) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(&SignupJsonRequest {
        email: email.as_str(),
        name: SIGNUP_ACCOUNT_NAME,
        phone: phone.as_str(),
    })
}

/// JSON body for `POST v1/mobile/users/restore`.
pub fn encode_restore_json(phone: &Phone) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(&RestoreJsonRequest {
        phone: phone.as_str(),
    })
}

/// Decode the `GET v1/mobile/users/login` response body.
///
/// Missing fields decode as empty strings, mirroring how lenient the service
/// is about its own response shape; malformed JSON is an error.
pub fn decode_login_json(body: &[u8]) -> Result<LoginInfo, serde_json::Error> {
    let parsed: LoginJsonResponse = serde_json::from_slice(body)?;
    Ok(LoginInfo {
        email: parsed.email,
        name: parsed.name,
    })
}
