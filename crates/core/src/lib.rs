//! Pure types for the portal client: roles, sessions, routes and the
//! authorization decision every page makes before it renders.
//!
//! Nothing here performs IO. Persistence lives in `storage`, network access
//! and the stateful guard in `services`.

#![forbid(unsafe_code)]

pub mod guard;
pub mod model;
pub mod route;

pub use guard::{GuardPhase, GuardResult, evaluate_guard, is_authorized};
pub use model::{
    Credentials, FormError, InvalidSessionWrite, Level, ParseLevelError, ParseRoleError,
    Registration, Role, Session,
};
pub use route::{Route, RouteAccess, landing_route_for};
