use reqwest::Method;

use edu_core::Role;

use crate::api_client::ApiClient;
use crate::dto::{AdminCourse, AdminCourseDetail, DashboardStats, NewCourse, RoleUpdate, UserSummary};
use crate::error::ApiError;

/// Administration endpoints. The backend enforces the admin role; these
/// calls never touch the local session except through the 401 interceptor.
#[derive(Clone)]
pub struct AdminService {
    api: ApiClient,
}

impl AdminService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn dashboard(&self) -> Result<DashboardStats, ApiError> {
        self.api.get_json("/admin/dashboard").await
    }

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn users(&self) -> Result<Vec<UserSummary>, ApiError> {
        self.api.get_json("/admin/users").await
    }

    /// Change another user's role on the backend.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn update_role(&self, user_id: u64, role: Role) -> Result<(), ApiError> {
        let request = self
            .api
            .request(Method::PUT, &format!("/admin/users/{user_id}/role"))?
            .json(&RoleUpdate { role });
        self.api.execute(request).await?;
        tracing::info!(user_id, role = %role, "user role updated");
        Ok(())
    }

    /// Flip a user's active flag.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn toggle_active(&self, user_id: u64) -> Result<(), ApiError> {
        self.api
            .send_empty(Method::PATCH, &format!("/admin/users/{user_id}/toggle_active"))
            .await?;
        tracing::info!(user_id, "user active flag toggled");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn delete_user(&self, user_id: u64) -> Result<(), ApiError> {
        self.api
            .send_empty(Method::DELETE, &format!("/admin/users/{user_id}"))
            .await?;
        tracing::info!(user_id, "user deleted");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn courses(&self) -> Result<Vec<AdminCourse>, ApiError> {
        self.api.get_json("/admin/courses").await
    }

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn course_detail(&self, course_id: u64) -> Result<AdminCourseDetail, ApiError> {
        self.api
            .get_json(&format!("/admin/courses/{course_id}"))
            .await
    }

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn create_course(&self, course: &NewCourse) -> Result<(), ApiError> {
        let request = self
            .api
            .request(Method::POST, "/admin/courses")?
            .json(course);
        self.api.execute(request).await?;
        tracing::info!(teacher_id = course.teacher_id, "course created");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn delete_course(&self, course_id: u64) -> Result<(), ApiError> {
        self.api
            .send_empty(Method::DELETE, &format!("/admin/courses/{course_id}"))
            .await?;
        tracing::info!(course_id, "course deleted");
        Ok(())
    }
}
