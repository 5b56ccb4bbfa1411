use thiserror::Error;

use super::Role;

/// Rejected attempt to persist a half-formed session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidSessionWrite {
    #[error("session token must not be empty")]
    MissingToken,
    #[error("session role must be admin, teacher or student")]
    MissingRole,
}

/// The signed-in state of this client: bearer token, role and display name.
///
/// Token and role are either both present or both absent. Constructors
/// enforce this, so holders of a `Session` never see one without the other.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    role: Role,
    username: Option<String>,
}

impl Session {
    /// A session with nothing in it.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Validate the inputs of a login and build the session to persist.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSessionWrite::MissingToken` for an empty or blank
    /// token and `InvalidSessionWrite::MissingRole` for `Role::None`.
    pub fn authenticated(
        token: impl Into<String>,
        role: Role,
        username: Option<String>,
    ) -> Result<Self, InvalidSessionWrite> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(InvalidSessionWrite::MissingToken);
        }
        if !role.is_assignable() {
            return Err(InvalidSessionWrite::MissingRole);
        }

        Ok(Self {
            token: Some(token),
            role,
            username: normalize_optional(username),
        })
    }

    /// Rebuild a session from whatever was found in storage.
    ///
    /// Fails closed: a token without a role, or a role without a token,
    /// yields an empty session.
    #[must_use]
    pub fn from_parts(token: Option<String>, role: Role, username: Option<String>) -> Self {
        match token {
            Some(token) if !token.trim().is_empty() && role.is_assignable() => Self {
                token: Some(token),
                role,
                username: normalize_optional(username),
            },
            _ => Self::empty(),
        }
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticated_keeps_all_three_fields() {
        let session =
            Session::authenticated("abc123", Role::Teacher, Some("profX".into())).unwrap();
        assert_eq!(session.token(), Some("abc123"));
        assert_eq!(session.role(), Role::Teacher);
        assert_eq!(session.username(), Some("profX"));
        assert!(session.is_authenticated());
    }

    #[test]
    fn authenticated_rejects_blank_token() {
        assert_eq!(
            Session::authenticated("", Role::Student, None),
            Err(InvalidSessionWrite::MissingToken)
        );
        assert_eq!(
            Session::authenticated("   ", Role::Student, None),
            Err(InvalidSessionWrite::MissingToken)
        );
    }

    #[test]
    fn authenticated_rejects_missing_role() {
        assert_eq!(
            Session::authenticated("abc", Role::None, None),
            Err(InvalidSessionWrite::MissingRole)
        );
    }

    #[test]
    fn blank_username_is_dropped() {
        let session = Session::authenticated("abc", Role::Admin, Some("  ".into())).unwrap();
        assert_eq!(session.username(), None);
    }

    #[test]
    fn from_parts_fails_closed_on_token_without_role() {
        let session = Session::from_parts(Some("abc".into()), Role::None, Some("x".into()));
        assert_eq!(session, Session::empty());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn from_parts_fails_closed_on_role_without_token() {
        let session = Session::from_parts(None, Role::Admin, None);
        assert_eq!(session, Session::empty());
        assert_eq!(session.role(), Role::None);
    }

    #[test]
    fn from_parts_accepts_complete_session() {
        let session = Session::from_parts(Some("t".into()), Role::Student, None);
        assert!(session.is_authenticated());
        assert_eq!(session.role(), Role::Student);
    }
}
