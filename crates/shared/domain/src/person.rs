//! Person domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Person domain entity (one persisted row)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub birth_date: DateTime<Utc>,
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Person [id={}, name={}, location={}, birth_date={}]",
            self.id,
            self.name,
            self.location,
            self.birth_date.to_rfc3339()
        )
    }
}

/// Insert-or-update input keyed by the optional identifier.
///
/// Without an identifier the database assigns one. With an identifier the
/// row is overwritten when it exists and inserted under that id otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpsertPerson {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub name: String,
    pub location: String,
    pub birth_date: DateTime<Utc>,
}

impl UpsertPerson {
    /// New person whose identifier is generated on insert
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        birth_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            location: location.into(),
            birth_date,
        }
    }

    /// Person targeting a given identifier
    pub fn with_id(
        id: i32,
        name: impl Into<String>,
        location: impl Into<String>,
        birth_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            ..Self::new(name, location, birth_date)
        }
    }
}
