use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Access class of the signed-in user.
///
/// `None` stands for "no role": an empty session, or a persisted role string
/// that is not one of the three known classes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Teacher,
    Student,
    #[default]
    None,
}

impl Role {
    /// Roles a session can be created with.
    pub const ASSIGNABLE: [Role; 3] = [Role::Admin, Role::Teacher, Role::Student];

    /// Lenient parse used for persisted and backend-provided values.
    ///
    /// Never fails: anything unrecognized becomes `Role::None`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        raw.parse().unwrap_or(Role::None)
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Teacher => "teacher",
            Role::Student => "student",
            Role::None => "none",
        }
    }

    /// Returns true for admin, teacher and student.
    #[must_use]
    pub fn is_assignable(&self) -> bool {
        !matches!(self, Role::None)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for strict role parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRoleError {
    raw: String,
}

impl fmt::Display for ParseRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown role `{}` (expected admin, teacher or student)",
            self.raw
        )
    }
}

impl std::error::Error for ParseRoleError {}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "admin" => Ok(Role::Admin),
            "teacher" => Ok(Role::Teacher),
            "student" => Ok(Role::Student),
            other => Err(ParseRoleError {
                raw: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_roles() {
        assert_eq!(Role::parse("admin"), Role::Admin);
        assert_eq!(Role::parse("teacher"), Role::Teacher);
        assert_eq!(Role::parse("student"), Role::Student);
    }

    #[test]
    fn lenient_parse_maps_garbage_to_none() {
        for raw in ["", "none", "professor", "ADMIN", "root", "🙂"] {
            assert_eq!(Role::parse(raw), Role::None, "raw = {raw:?}");
        }
    }

    #[test]
    fn strict_parse_rejects_none_literal() {
        let err = "none".parse::<Role>().unwrap_err();
        assert!(err.to_string().contains("none"));
    }

    #[test]
    fn display_round_trips_assignable_roles() {
        for role in Role::ASSIGNABLE {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn none_is_not_assignable() {
        assert!(Role::Teacher.is_assignable());
        assert!(!Role::None.is_assignable());
    }
}
