//! Stakeholder records: user-owned, edited at runtime.

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A person or role with a stake in the architecture work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stakeholder {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub organization: String,

    /// Ordered free-text concerns.
    pub concerns: Vec<String>,

    pub influence: Level,
    pub interest: Level,

    /// Free-text phase association, e.g. "Phase A" or "All Phases".
    /// Not checked against the catalog.
    pub phase: String,

    pub notes: String,
    pub created_at: Timestamp,
}

impl Stakeholder {
    /// The editable fields of this stakeholder, as a draft.
    #[must_use]
    pub fn to_draft(&self) -> StakeholderDraft {
        StakeholderDraft {
            name: self.name.clone(),
            role: self.role.clone(),
            organization: self.organization.clone(),
            concerns: self.concerns.clone(),
            influence: self.influence,
            interest: self.interest,
            phase: self.phase.clone(),
            notes: self.notes.clone(),
        }
    }

    /// First eight characters of the id, for display.
    #[must_use]
    pub fn short_id(&self) -> String {
        self.id.to_string()[..8].to_string()
    }
}

/// Everything about a stakeholder that a user can set.
///
/// Used both to create a stakeholder and to replace one wholesale on edit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeholderDraft {
    pub name: String,
    pub role: String,
    pub organization: String,
    pub concerns: Vec<String>,
    pub influence: Level,
    pub interest: Level,
    pub phase: String,
    pub notes: String,
}

/// A three-level rating used for both influence and interest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    High,
    #[default]
    Medium,
    Low,
}

impl Level {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of `high`, `medium`, `low`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown level '{0}': expected high, medium, or low")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
