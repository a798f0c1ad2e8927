//! I define the model of authentication challenges emitted on
//! unauthorized responses.
//!

use http::HeaderValue;

/// An authentication challenge, emitted as a `WWW-Authenticate`
/// header value on `401 Unauthorized` responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    /// Authentication scheme name.
    pub scheme: String,

    /// Realm the challenge applies to.
    pub realm: String,

    /// Optional scope of the challenge.
    pub scope: Option<String>,
}

impl Challenge {
    /// Encode the challenge as a header string.
    pub fn str_encode(&self) -> String {
        let mut encoded = format!("{} realm=\"{}\"", self.scheme, self.realm);
        if let Some(scope) = &self.scope {
            encoded.push_str(&format!(" scope=\"{}\"", scope));
        }
        encoded
    }

    /// Encode the challenge as a header value, if it carries no
    /// invalid characters.
    pub fn to_header_value(&self) -> Option<HeaderValue> {
        HeaderValue::from_str(&self.str_encode()).ok()
    }
}
