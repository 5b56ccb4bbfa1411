use std::sync::Arc;

use storage::Storage;

use crate::admin_service::AdminService;
use crate::api_client::ApiClient;
use crate::auth_service::AuthService;
use crate::config::ApiConfig;
use crate::course_service::CourseService;
use crate::result_service::ResultService;
use crate::session_guard::SessionGuard;
use crate::user_service::UserService;

/// Assembles app-facing services around one shared `SessionGuard`.
#[derive(Clone)]
pub struct AppServices {
    session_guard: SessionGuard,
    auth: Arc<AuthService>,
    courses: Arc<CourseService>,
    admin: Arc<AdminService>,
    results: Arc<ResultService>,
    users: Arc<UserService>,
}

impl AppServices {
    #[must_use]
    pub fn new(config: ApiConfig, storage: &Storage) -> Self {
        let session_guard = SessionGuard::new(Arc::clone(&storage.session));
        let api = ApiClient::new(config, session_guard.clone());

        Self {
            auth: Arc::new(AuthService::new(api.clone())),
            courses: Arc::new(CourseService::new(api.clone())),
            admin: Arc::new(AdminService::new(api.clone())),
            results: Arc::new(ResultService::new(api.clone())),
            users: Arc::new(UserService::new(api)),
            session_guard,
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
