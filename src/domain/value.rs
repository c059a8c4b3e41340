use crate::domain::validation::ValidationError;

#[derive(Clone, PartialEq, Eq, Hash)]
/// Semaphore API key (`apikey`).
///
/// Invariant: non-empty after trimming. The format is not checked; a wrong key only
/// surfaces as an authentication failure from the remote service.
pub struct ApiKey(String);

impl ApiKey {
    /// Query/form field name used by Semaphore (`apikey`).
    pub const FIELD: &'static str = "apikey";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender name shown as the SMS originator (`sendername`).
///
/// Invariant: non-empty after trimming. The value must be registered and approved in
/// your Semaphore account.
pub struct SenderName(String);

impl SenderName {
    /// Form/query field name used by Semaphore (`sendername`).
    pub const FIELD: &'static str = "sendername";

    /// Sender name used when the client is not configured with one.
    pub const DEFAULT: &'static str = "SEMAPHORE";

    /// Create a validated [`SenderName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SenderName {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Encoded id of a sent message, as returned by `messages`.
///
/// Invariant: non-empty after trimming.
pub struct MessageId(String);

impl MessageId {
    pub const FIELD: &'static str = "message_id";

    /// Create a validated [`MessageId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated message id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Recipient phone number(s) for a send (`number`).
///
/// Semaphore accepts either one comma-separated string or a list of numbers. The shape
/// given by the caller is kept as-is on the wire; only the recipient count is derived.
pub enum Recipients {
    /// One string, possibly holding several comma-separated numbers.
    Single(String),
    /// An ordered list of numbers.
    Many(Vec<String>),
}

impl Recipients {
    /// Form field name used by Semaphore (`number`).
    pub const FIELD: &'static str = "number";

    /// Number of recipients addressed by this value.
    ///
    /// A single string is split on `,`; an empty string still counts as one recipient.
    pub fn count(&self) -> usize {
        match self {
            Self::Single(value) => value.split(',').count(),
            Self::Many(values) => values.len(),
        }
    }
}

impl From<&str> for Recipients {
    fn from(value: &str) -> Self {
        Self::Single(value.to_owned())
    }
}

impl From<String> for Recipients {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for Recipients {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

impl From<Vec<&str>> for Recipients {
    fn from(values: Vec<&str>) -> Self {
        Self::Many(values.into_iter().map(str::to_owned).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Recipients {
    fn from(values: [&str; N]) -> Self {
        Self::Many(values.iter().map(|it| (*it).to_owned()).collect())
    }
}
