use reqwest::Method;

use crate::api_client::ApiClient;
use crate::dto::{Course, Pdf, QuizSummary};
use crate::error::ApiError;

/// Course catalogue and per-course material.
#[derive(Clone)]
pub struct CourseService {
    api: ApiClient,
}

impl CourseService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Published courses visible to students.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn published_courses(&self) -> Result<Vec<Course>, ApiError> {
        self.api.get_json("/courses/").await
    }

    /// Courses owned by the signed-in teacher.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn teacher_courses(&self) -> Result<Vec<Course>, ApiError> {
        self.api.get_json("/courses/teacher").await
    }

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn course(&self, course_id: u64) -> Result<Course, ApiError> {
        self.api.get_json(&format!("/courses/{course_id}")).await
    }

    /// Course as seen by an enrolled student.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn student_course(&self, course_id: u64) -> Result<Course, ApiError> {
        self.api
            .get_json(&format!("/courses/student/{course_id}"))
            .await
    }

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn course_pdfs(&self, course_id: u64) -> Result<Vec<Pdf>, ApiError> {
        self.api.get_json(&format!("/pdfs/course/{course_id}")).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn course_quizzes(&self, course_id: u64) -> Result<Vec<QuizSummary>, ApiError> {
        self.api
            .get_json(&format!("/quizzes/course/{course_id}"))
            .await
    }

    /// Delete a course owned by the signed-in teacher.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn delete_course(&self, course_id: u64) -> Result<(), ApiError> {
        self.api
            .send_empty(Method::DELETE, &format!("/courses/{course_id}"))
            .await?;
        tracing::info!(course_id, "course deleted");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn delete_pdf(&self, pdf_id: u64) -> Result<(), ApiError> {
        self.api
            .send_empty(Method::DELETE, &format!("/pdfs/{pdf_id}"))
            .await?;
        tracing::info!(pdf_id, "pdf deleted");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn delete_quiz(&self, quiz_id: u64) -> Result<(), ApiError> {
        self.api
            .send_empty(Method::DELETE, &format!("/quizzes/{quiz_id}"))
            .await?;
        tracing::info!(quiz_id, "quiz deleted");
        Ok(())
    }

    /// Raw bytes of a course PDF.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn download_pdf(&self, pdf_id: u64) -> Result<Vec<u8>, ApiError> {
        self.api.get_bytes(&format!("/pdfs/{pdf_id}/open")).await
    }
}
