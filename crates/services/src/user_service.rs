use edu_core::{Level, Role};
use reqwest::Method;

use crate::api_client::ApiClient;
use crate::dto::UserSummary;
use crate::error::ApiError;

/// User directory, as used by teachers.
#[derive(Clone)]
pub struct UserService {
    api: ApiClient,
}

impl UserService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Every registered student.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn students(&self) -> Result<Vec<UserSummary>, ApiError> {
        let users: Vec<UserSummary> = self.api.get_json("/users/").await?;
        Ok(users
            .into_iter()
            .filter(|user| user.role == Role::Student)
            .collect())
    }

    /// Move a student to another level.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn set_level(&self, user_id: u64, level: Level) -> Result<(), ApiError> {
        self.api
            .send_empty(
                Method::PUT,
                &format!("/users/{user_id}/level?level={}", level.as_str()),
            )
            .await?;
        tracing::info!(user_id, level = %level, "student level changed");
        Ok(())
    }
}
