use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a film in the festival catalog (catalog-assigned string)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilmId(String);

impl FilmId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FilmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for FilmId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for FilmId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Identifier of a single screening, unique across the whole catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScreeningId(String);

impl ScreeningId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScreeningId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ScreeningId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ScreeningId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}
