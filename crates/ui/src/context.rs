use std::sync::Arc;

use dioxus::prelude::*;
use edu_core::Session;
use services::{
    AdminService, AppServices, AuthService, CourseService, ResultService, SessionGuard,
    UserService,
};

/// Services the views depend on, supplied by the composition root.
pub trait UiApp: Send + Sync {
    fn session_guard(&self) -> SessionGuard;
    fn auth(&self) -> Arc<AuthService>;
    fn courses(&self) -> Arc<CourseService>;
    fn admin(&self) -> Arc<AdminService>;
    fn results(&self) -> Arc<ResultService>;
    fn users(&self) -> Arc<UserService>;
}

impl UiApp for AppServices {
    fn session_guard(&self) -> SessionGuard {
        AppServices::session_guard(self).clone()
    }

    fn auth(&self) -> Arc<AuthService> {
        AppServices::auth(self)
    }

    fn courses(&self) -> Arc<CourseService> {
        AppServices::courses(self)
    }

    fn admin(&self) -> Arc<AdminService> {
        AppServices::admin(self)
    }

    fn results(&self) -> Arc<ResultService> {
        AppServices::results(self)
    }

    fn users(&self) -> Arc<UserService> {
        AppServices::users(self)
    }
}

#[derive(Clone)]
pub struct AppContext {
    session_guard: SessionGuard,
    auth: Arc<AuthService>,
    courses: Arc<CourseService>,
    admin: Arc<AdminService>,
    results: Arc<ResultService>,
    users: Arc<UserService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            session_guard: app.session_guard(),
            auth: app.auth(),
            courses: app.courses(),
            admin: app.admin(),
            results: app.results(),
            users: app.users(),
        }
    }

    #[must_use]
    pub fn session_guard(&self) -> &SessionGuard {
        &self.session_guard
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn courses(&self) -> Arc<CourseService> {
        Arc::clone(&self.courses)
    }

    #[must_use]
    pub fn admin(&self) -> Arc<AdminService> {
        Arc::clone(&self.admin)
    }

    #[must_use]
    pub fn results(&self) -> Arc<ResultService> {
        Arc::clone(&self.results)
    }

    #[must_use]
    pub fn users(&self) -> Arc<UserService> {
        Arc::clone(&self.users)
    }
}

/// Snapshot of the stored session for chrome such as the nav bar.
///
/// Guards never read this; they ask `SessionGuard` directly on mount.
#[derive(Clone, Copy)]
pub struct SessionDisplay(Signal<Session>);

impl SessionDisplay {
    #[must_use]
    pub fn session(&self) -> Session {
        self.0.read().clone()
    }

    /// Re-read the store after login, logout or an expired token.
    pub fn refresh(&mut self, guard: &SessionGuard) {
        self.0.set(guard.get_session());
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// Provide the `SessionDisplay` snapshot, seeded from the store.
pub fn use_session_display(guard: &SessionGuard) -> SessionDisplay {
    use_context_provider(|| SessionDisplay(Signal::new(guard.get_session())))
}
