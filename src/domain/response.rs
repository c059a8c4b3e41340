use std::fmt;

use serde::de::DeserializeOwned;

/// Response body exactly as returned by Semaphore.
///
/// The client never interprets it; [`RawBody::json`] is available for callers that
/// want to deserialize it themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBody(String);

impl RawBody {
    pub(crate) fn new(body: String) -> Self {
        Self(body)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Deserialize the body as JSON into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.0)
    }
}

impl fmt::Display for RawBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RawBody {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<RawBody> for String {
    fn from(value: RawBody) -> Self {
        value.0
    }
}
