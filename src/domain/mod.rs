//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::ReceiptRef;
pub use response::{LoginInfo, ReceiptDetail, ReceiptItem, ReceiptProperty};
pub use validation::ValidationError;
pub use value::{
    Email, FiscalDocument, FiscalNumber, FiscalSign, Phone, SessionToken, SmsPassword, TotalAmount,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_rejects_empty() {
        assert!(matches!(
            Phone::new("   "),
            Err(ValidationError::Empty {
                field: Phone::FIELD
            })
        ));
    }

    #[test]
    fn phone_new_trims_but_does_not_normalize() {
        let phone = Phone::new(" 79261234567 ").unwrap();
        assert_eq!(phone.as_str(), "79261234567");
    }

    #[test]
    fn phone_parse_normalizes_to_e164() {
        let phone = Phone::parse(Some(phonenumber::country::Id::RU), "8 926 123-45-67").unwrap();
        assert_eq!(phone.as_str(), "+79261234567");
    }

    #[test]
    fn phone_parse_rejects_garbage() {
        assert!(matches!(
            Phone::parse(Some(phonenumber::country::Id::RU), "not a phone"),
            Err(ValidationError::InvalidPhoneNumber { .. })
        ));
    }

    #[test]
    fn email_requires_at_sign() {
        assert!(Email::new("user@example.com").is_ok());
        assert!(matches!(
            Email::new("user.example.com"),
            Err(ValidationError::InvalidEmail { .. })
        ));
        assert!(matches!(
            Email::new(""),
            Err(ValidationError::Empty {
                field: Email::FIELD
            })
        ));
    }

    #[test]
    fn sms_password_rejects_empty_but_keeps_whitespace() {
        assert!(SmsPassword::new("").is_err());
        let password = SmsPassword::new(" 123456 ").unwrap();
        assert_eq!(password.as_str(), " 123456 ");
    }

    #[test]
    fn session_token_defaults_to_empty() {
        let token = SessionToken::default();
        assert!(token.is_empty());
        assert_eq!(token.as_str(), "");
    }

    #[test]
    fn session_token_from_sms_password() {
        let token: SessionToken = SmsPassword::new("248916").unwrap().into();
        assert_eq!(token.as_str(), "248916");
    }

    #[test]
    fn fiscal_identifiers_must_be_digits() {
        assert!(FiscalNumber::new("8710000100518392").is_ok());
        assert!(matches!(
            FiscalNumber::new("87100001-0518392"),
            Err(ValidationError::NotDigits {
                field: FiscalNumber::FIELD,
                ..
            })
        ));
        assert!(matches!(
            FiscalDocument::new(""),
            Err(ValidationError::Empty {
                field: FiscalDocument::FIELD
            })
        ));
        assert!(matches!(
            FiscalSign::new("12 34"),
            Err(ValidationError::NotDigits {
                field: FiscalSign::FIELD,
                ..
            })
        ));
    }

    #[test]
    fn fiscal_identifiers_are_trimmed() {
        let sign = FiscalSign::new(" 999888777 ").unwrap();
        assert_eq!(sign.as_str(), "999888777");
    }

    #[test]
    fn total_amount_range_is_enforced() {
        assert!(TotalAmount::new(0.0).is_ok());
        assert!(TotalAmount::new(150.50).is_ok());
        assert!(matches!(
            TotalAmount::new(-0.01),
            Err(ValidationError::InvalidAmount { .. })
        ));
        assert!(TotalAmount::new(f64::NAN).is_err());
        assert!(TotalAmount::new(f64::INFINITY).is_err());
    }

    #[test]
    fn total_amount_wire_format_uses_six_fractional_digits() {
        assert_eq!(TotalAmount::new(150.50).unwrap().to_wire(), "150.500000");
        assert_eq!(TotalAmount::new(0.0).unwrap().to_wire(), "0.000000");
        assert_eq!(TotalAmount::new(19.99).unwrap().to_wire(), "19.990000");
    }

    #[test]
    fn receipt_ref_exposes_its_parts() {
        let receipt = ReceiptRef::new(
            FiscalNumber::new("1234567890").unwrap(),
            FiscalDocument::new("42").unwrap(),
            FiscalSign::new("999888777").unwrap(),
        );
        assert_eq!(receipt.fiscal_number().as_str(), "1234567890");
        assert_eq!(receipt.fiscal_document().as_str(), "42");
        assert_eq!(receipt.fiscal_sign().as_str(), "999888777");
    }
}
