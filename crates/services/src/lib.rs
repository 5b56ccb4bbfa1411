#![forbid(unsafe_code)]

pub mod admin_service;
pub mod api_client;
pub mod app_services;
pub mod auth_service;
pub mod config;
pub mod course_service;
pub mod dto;
pub mod error;
pub mod result_service;
pub mod session_guard;
pub mod user_service;

pub use admin_service::AdminService;
pub use api_client::ApiClient;
pub use app_services::AppServices;
pub use auth_service::AuthService;
pub use config::{API_BASE_URL_ENV, ApiConfig, DEFAULT_API_BASE_URL};
pub use course_service::CourseService;
pub use error::{ApiError, AuthError, ConfigError, SessionError};
pub use result_service::ResultService;
pub use session_guard::SessionGuard;
pub use user_service::UserService;
