use std::fmt;

#[derive(Clone, PartialEq, Eq, Hash)]
/// PossiNote API key.
///
/// The key is stored as provided and never validated locally; the remote API is the
/// authority on whether it is accepted. `Debug` output redacts the secret.
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap an API key.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the key as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `Authorization` header value for this key (`Bearer <key>`).
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&"<redacted>").finish()
    }
}

impl From<String> for ApiKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ApiKey {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}
