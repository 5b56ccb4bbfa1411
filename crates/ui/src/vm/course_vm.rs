use services::dto::{AdminCourse, Course, Pdf, QuizSummary};

use crate::vm::time_fmt::format_date;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseCardVm {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub teacher: String,
    pub published: bool,
    pub updated_at_str: String,
}

impl From<&Course> for CourseCardVm {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id,
            title: course.title.clone(),
            description: description_or_placeholder(course.description.as_deref()),
            teacher: course
                .teacher
                .as_ref()
                .map_or_else(|| "Unassigned".to_string(), |t| t.username.clone()),
            published: course.is_published,
            updated_at_str: format_date(course.updated_at.or(course.created_at)),
        }
    }
}

impl From<&AdminCourse> for CourseCardVm {
    fn from(course: &AdminCourse) -> Self {
        Self {
            id: course.id,
            title: course.title.clone(),
            description: description_or_placeholder(course.description.as_deref()),
            teacher: course
                .teacher_name
                .clone()
                .unwrap_or_else(|| "Unassigned".to_string()),
            published: course.is_published,
            updated_at_str: "-".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaterialVm {
    pub id: u64,
    pub title: String,
    pub detail: String,
}

impl From<&Pdf> for MaterialVm {
    fn from(pdf: &Pdf) -> Self {
        Self {
            id: pdf.id,
            title: pdf.title.clone(),
            detail: pdf
                .file_url
                .clone()
                .unwrap_or_else(|| format_date(pdf.uploaded_at)),
        }
    }
}

impl From<&QuizSummary> for MaterialVm {
    fn from(quiz: &QuizSummary) -> Self {
        Self {
            id: quiz.id,
            title: quiz.title.clone(),
            detail: format_date(quiz.created_at),
        }
    }
}

/// Course header with its PDFs and quizzes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseDetailVm {
    pub course: CourseCardVm,
    pub pdfs: Vec<MaterialVm>,
    pub quizzes: Vec<MaterialVm>,
}

#[must_use]
pub fn map_course_cards<'a, T>(items: &'a [T]) -> Vec<CourseCardVm>
where
    CourseCardVm: From<&'a T>,
{
    items.iter().map(CourseCardVm::from).collect()
}

#[must_use]
pub fn map_materials<'a, T>(items: &'a [T]) -> Vec<MaterialVm>
where
    MaterialVm: From<&'a T>,
{
    items.iter().map(MaterialVm::from).collect()
}

fn description_or_placeholder(description: Option<&str>) -> String {
    description
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or("No description.")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_course_without_teacher_is_unassigned() {
        let course = AdminCourse {
            id: 2,
            title: "Physics".into(),
            description: Some("   ".into()),
            is_published: false,
            teacher_id: None,
            teacher_name: None,
        };
        let vm = CourseCardVm::from(&course);
        assert_eq!(vm.teacher, "Unassigned");
        assert_eq!(vm.description, "No description.");
        assert!(!vm.published);
    }
}
