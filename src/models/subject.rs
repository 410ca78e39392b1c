use serde::Serialize;
use std::fmt;

/// Wikidata identifier of the person being visualized (e.g. "Q241897").
/// Opaque: no validation beyond interpolation into the query; a malformed
/// identifier simply yields an empty result from the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subject(String);

impl Subject {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
