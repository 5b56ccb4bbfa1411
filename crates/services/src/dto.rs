//! Wire shapes exchanged with the backend.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use edu_core::Role;

/// Body of a successful `POST /auth/login`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginResponse {
    pub access_token: Option<String>,
    pub token_type: Option<String>,
    pub role: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserSummary {
    pub id: u64,
    pub username: String,
    pub email: String,
    #[serde(deserialize_with = "lenient_role")]
    pub role: Role,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload of `POST /users/`.
#[derive(Debug, Clone, Serialize)]
pub struct NewUser<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TeacherRef {
    pub id: u64,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Course {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_published: bool,
    #[serde(default)]
    pub teacher: Option<TeacherRef>,
    #[serde(default, deserialize_with = "timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Pdf {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub course_id: Option<u64>,
    #[serde(default, deserialize_with = "timestamp")]
    pub uploaded_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuizSummary {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub course_id: Option<u64>,
    #[serde(default, deserialize_with = "timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DashboardStats {
    pub total_users: u64,
    pub total_students: u64,
    pub total_teachers: u64,
    pub total_courses: u64,
    pub total_pdfs: u64,
    pub total_enrollments: u64,
}

/// Course row of the admin listing, with the teacher flattened.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AdminCourse {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_published: bool,
    #[serde(default)]
    pub teacher_id: Option<u64>,
    #[serde(default)]
    pub teacher_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AdminCourseDetail {
    pub course: AdminCourse,
    #[serde(default)]
    pub pdfs: Vec<Pdf>,
    #[serde(default)]
    pub quizzes: Vec<QuizSummary>,
}

/// Payload of `POST /admin/courses`.
#[derive(Debug, Clone, Serialize)]
pub struct NewCourse {
    pub title: String,
    pub description: Option<String>,
    pub is_published: bool,
    pub teacher_id: u64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct RoleUpdate {
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuizResult {
    pub id: u64,
    #[serde(default)]
    pub quiz_title: Option<String>,
    #[serde(default)]
    pub course_title: Option<String>,
    pub score: f64,
    #[serde(default)]
    pub passed: bool,
    #[serde(default, deserialize_with = "timestamp")]
    pub date_taken: Option<DateTime<Utc>>,
}

impl QuizResult {
    /// Label for listings: the quiz title, else the course title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.quiz_title
            .as_deref()
            .or(self.course_title.as_deref())
            .unwrap_or("Untitled quiz")
    }
}

fn default_true() -> bool {
    true
}

fn lenient_role<'de, D>(deserializer: D) -> Result<Role, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(Role::parse(&raw))
}

/// Accept RFC 3339 timestamps as well as the naive ISO form the backend
/// emits for columns without a time zone (read as UTC).
fn timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.map(|value| {
        parse_timestamp(&value)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp `{value}`")))
    })
    .transpose()
}

pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        })
}
