use crate::model::{Role, Session};
use crate::route::{Route, landing_route_for};

/// Outcome of checking a session against a page's requirement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardResult {
    Allow,
    Deny(Route),
}

impl GuardResult {
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardResult::Allow)
    }

    /// Redirect target for a denied check.
    #[must_use]
    pub fn redirect(&self) -> Option<Route> {
        match self {
            GuardResult::Allow => None,
            GuardResult::Deny(route) => Some(*route),
        }
    }
}

/// True iff the session carries a token and, when a role is required,
/// that exact role.
#[must_use]
pub fn is_authorized(session: &Session, required: Option<Role>) -> bool {
    session.is_authenticated() && required.is_none_or(|role| session.role() == role)
}

/// Decide whether a view may render for `session`.
///
/// Anonymous visitors are sent to login. Signed-in users on a page meant
/// for another role are sent to their own landing page and keep their
/// session.
#[must_use]
pub fn evaluate_guard(session: &Session, required: Option<Role>) -> GuardResult {
    if is_authorized(session, required) {
        GuardResult::Allow
    } else if session.is_authenticated() {
        GuardResult::Deny(landing_route_for(session.role()))
    } else {
        GuardResult::Deny(Route::Login)
    }
}

/// Per-mount guard state: `Unchecked` until the first check, then frozen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardPhase {
    #[default]
    Unchecked,
    Allowed,
    Denied(Route),
}

impl GuardPhase {
    /// Run `check` if this mount has not been checked yet.
    ///
    /// `Allowed` and `Denied` are terminal: later calls do not re-run
    /// `check`, even if the session changed in the meantime.
    pub fn settle(&mut self, check: impl FnOnce() -> GuardResult) -> GuardPhase {
        if matches!(self, GuardPhase::Unchecked) {
            *self = match check() {
                GuardResult::Allow => GuardPhase::Allowed,
                GuardResult::Deny(route) => GuardPhase::Denied(route),
            };
        }
        *self
    }

    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardPhase::Allowed)
    }

    #[must_use]
    pub fn redirect(&self) -> Option<Route> {
        match self {
            GuardPhase::Denied(route) => Some(*route),
            GuardPhase::Unchecked | GuardPhase::Allowed => None,
        }
    }
}
