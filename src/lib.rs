//! Typed Rust client for the proverkacheka.nalog.ru receipt-verification API.
//!
//! The crate follows a three-layer design: a domain layer of strong types, a
//! transport layer for wire-format quirks (URL templating, JSON bodies, Basic
//! auth), and a small client layer orchestrating requests.
//!
//! ```rust,no_run
//! use proverkacheka::{
//!     FiscalDocument, FiscalNumber, FiscalSign, Phone, ReceiptRef, SmsPassword, TaxClient,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), proverkacheka::TaxError> {
//!     let mut client = TaxClient::new(Phone::new("+79261234567")?);
//!     client.login(SmsPassword::new("123456")?).await?;
//!
//!     let receipt = ReceiptRef::new(
//!         FiscalNumber::new("8710000100518392")?,
//!         FiscalDocument::new("54812")?,
//!         FiscalSign::new("3522207165")?,
//!     );
//!     let detail = client.bill_detail(&receipt).await?;
//!     println!("total: {} kopecks", detail.total_sum);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{HttpResponse, HttpTransport, TaxClient, TaxClientBuilder, TaxError};
pub use domain::{
    Email, FiscalDocument, FiscalNumber, FiscalSign, LoginInfo, Phone, ReceiptDetail, ReceiptItem,
    ReceiptProperty, ReceiptRef, SessionToken, SmsPassword, TotalAmount, ValidationError,
};
