//! Transport layer: wire-format details (URL templating, JSON bodies, auth).

mod auth;
mod receipt;
mod users;

pub use auth::basic_auth_value;
pub use receipt::{bill_check_path, bill_detail_path, decode_receipt_json};
pub use users::{decode_login_json, encode_restore_json, encode_signup_json};
