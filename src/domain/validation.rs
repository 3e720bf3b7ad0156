use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Empty { field: &'static str },
    NotDigits { field: &'static str, input: String },
    InvalidPhoneNumber { input: String },
    InvalidEmail { input: String },
    InvalidAmount { input: f64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::NotDigits { field, input } => {
                write!(f, "{field} must contain only digits: {input}")
            }
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::InvalidEmail { input } => write!(f, "invalid email address: {input}"),
            Self::InvalidAmount { input } => {
                write!(f, "amount must be finite and non-negative: {input}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "phone" };
        assert_eq!(err.to_string(), "phone must not be empty");

        let err = ValidationError::NotDigits {
            field: "fiscalSign",
            input: "12a4".to_owned(),
        };
        assert_eq!(err.to_string(), "fiscalSign must contain only digits: 12a4");

        let err = ValidationError::InvalidPhoneNumber {
            input: "bad".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid phone number: bad");

        let err = ValidationError::InvalidEmail {
            input: "not-an-address".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid email address: not-an-address");

        let err = ValidationError::InvalidAmount { input: -1.0 };
        assert_eq!(err.to_string(), "amount must be finite and non-negative: -1");
    }
}
