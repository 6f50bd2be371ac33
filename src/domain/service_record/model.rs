//! Service record domain model

use chrono::{DateTime, Utc};

/// Name of the well-known record every endpoint operates on.
///
/// Created by the schema initializer and never deleted.
pub const MAIN_SERVICE: &str = "main_service";

/// A named service with a toggleable activation flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRecord {
    pub name: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ServiceRecord {
    pub fn status(&self) -> ServiceStatus {
        ServiceStatus::from(self.active)
    }
}

/// The two states the activation flag can be in.
///
/// Transitions happen only through the activate/deactivate/toggle
/// operations; there are no automatic transitions and no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceStatus {
    Active,
    Inactive,
}

impl ServiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl From<bool> for ServiceStatus {
    fn from(active: bool) -> Self {
        if active {
            Self::Active
        } else {
            Self::Inactive
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_reflects_flag() {
        assert_eq!(ServiceStatus::from(true).as_str(), "active");
        assert_eq!(ServiceStatus::from(false).as_str(), "inactive");
    }
}
