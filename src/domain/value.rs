use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Phone number identifying the account (`phone`).
///
/// Invariant: non-empty after trimming. [`Phone::new`] does not normalize; use
/// [`Phone::parse`] when you want E.164 normalization of free-form input.
pub struct Phone(String);

impl Phone {
    /// JSON field name used by the service (`phone`).
    pub const FIELD: &'static str = "phone";

    /// Create a validated (non-empty) phone number, kept as provided.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Parse free-form input and normalize it to E.164.
    ///
    /// `default_region` is used when the input does not carry an explicit
    /// country prefix (the service registers Russian numbers, so
    /// `country::Id::RU` is the usual choice).
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self(e164))
    }

    /// The value sent on the wire.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Email address used for signup (`email`).
///
/// Invariant: non-empty after trimming and contains `@`. The service performs
/// its own deliverability checks; this only rejects obviously broken input.
pub struct Email(String);

impl Email {
    /// JSON field name used by the service (`email`).
    pub const FIELD: &'static str = "email";

    /// Create a validated [`Email`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if !trimmed.contains('@') {
            return Err(ValidationError::InvalidEmail {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated address.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// One-time password received via SMS after signup/restore.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct SmsPassword(String);

impl SmsPassword {
    pub const FIELD: &'static str = "smsPassword";

    /// Create a validated [`SmsPassword`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
/// Session token: the password component of Basic auth.
///
/// Empty by default. A fresh client that has not logged in (and was not seeded
/// via the builder) authenticates as `base64("{phone}:")`, which is exactly
/// what the service sees from its own mobile application before login.
pub struct SessionToken(String);

impl SessionToken {
    /// Create a token. No validation: the service itself issues the value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the token value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a token has been set (by login or the builder).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<SmsPassword> for SessionToken {
    /// A successful SMS login uses the password itself as the session token.
    fn from(value: SmsPassword) -> Self {
        Self(value.0)
    }
}

/// Validate that a wire-bound identifier is non-empty and all ASCII digits.
///
/// Fiscal identifiers are interpolated into URL path segments and query
/// strings; restricting them to digits keeps templating infallible.
fn digits(field: &'static str, value: impl Into<String>) -> Result<String, ValidationError> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::NotDigits {
            field,
            input: trimmed.to_owned(),
        });
    }
    Ok(trimmed.to_owned())
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Fiscal drive number printed on the receipt (ФН).
///
/// Invariant: non-empty, ASCII digits only.
pub struct FiscalNumber(String);

impl FiscalNumber {
    pub const FIELD: &'static str = "fiscalNumber";

    /// Create a validated [`FiscalNumber`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(digits(Self::FIELD, value)?))
    }

    /// Borrow the validated identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Fiscal document number printed on the receipt (ФД).
///
/// Invariant: non-empty, ASCII digits only.
pub struct FiscalDocument(String);

impl FiscalDocument {
    pub const FIELD: &'static str = "fiscalDocument";

    /// Create a validated [`FiscalDocument`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(digits(Self::FIELD, value)?))
    }

    /// Borrow the validated identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Fiscal sign printed on the receipt (ФП/ФПД), sent as the `fiscalSign`
/// query parameter.
///
/// Invariant: non-empty, ASCII digits only.
pub struct FiscalSign(String);

impl FiscalSign {
    /// Query parameter name used by the service (`fiscalSign`).
    pub const FIELD: &'static str = "fiscalSign";

    /// Create a validated [`FiscalSign`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(digits(Self::FIELD, value)?))
    }

    /// Borrow the validated identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Receipt total in major currency units (`sum`), e.g. `150.50` roubles.
///
/// Invariant: finite and non-negative. The wire format is fixed at six
/// fractional digits (`150.5` encodes as `150.500000`), matching what the
/// verification endpoint expects.
pub struct TotalAmount(f64);

impl TotalAmount {
    /// Query parameter name used by the service (`sum`).
    pub const FIELD: &'static str = "sum";

    /// Create a validated [`TotalAmount`].
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || value < 0.0 {
            return Err(ValidationError::InvalidAmount { input: value });
        }
        Ok(Self(value))
    }

    /// The underlying amount.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Wire encoding with six fractional digits.
    pub fn to_wire(self) -> String {
        format!("{:.6}", self.0)
    }
}
