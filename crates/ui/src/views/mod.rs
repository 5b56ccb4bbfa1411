mod admin;
mod guard;
mod home;
mod login;
mod nav;
mod register;
mod shared;
mod state;
mod student;
mod teacher;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use admin::{AdminCourseDetailPage, AdminCoursesPage, AdminDashboardPage, AdminUsersPage};
pub use guard::{Redirect, RequireRole, SessionExpired, ViewErrorNotice};
pub use home::HomeView;
pub use login::LoginView;
pub use nav::NavBar;
pub use register::RegisterView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use student::{
    StudentCourseDetailPage, StudentCoursesPage, StudentDashboardPage, StudentResultsPage,
};
pub use teacher::{
    TeacherCourseDetailPage, TeacherCoursesPage, TeacherDashboardPage, TeacherStudentsPage,
};
