use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use edu_core::Route as AppRoute;

use crate::views::{
    AdminCourseDetailPage, AdminCoursesPage, AdminDashboardPage, AdminUsersPage, HomeView,
    LoginView, NavBar, RegisterView, StudentCourseDetailPage, StudentCoursesPage,
    StudentDashboardPage, StudentResultsPage, TeacherCourseDetailPage, TeacherCoursesPage,
    TeacherDashboardPage, TeacherStudentsPage,
};

/// Router table. Paths match `edu_core::Route::path` one to one, so a
/// redirect computed by the guard can be handed to the navigator as a path.
#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/login", LoginView)] Login {},
        #[route("/register", RegisterView)] Register {},

        #[route("/admin/dashboard", AdminDashboardPage)] AdminDashboard {},
        #[route("/admin/users", AdminUsersPage)] AdminUsers {},
        #[route("/admin/courses", AdminCoursesPage)] AdminCourses {},
        #[route("/admin/courses/:course_id", AdminCourseDetailPage)] AdminCourseDetail { course_id: u64 },

        #[route("/teacher", TeacherDashboardPage)] TeacherDashboard {},
        #[route("/teacher/courses", TeacherCoursesPage)] TeacherCourses {},
        #[route("/teacher/courses/:course_id", TeacherCourseDetailPage)] TeacherCourseDetail { course_id: u64 },
        #[route("/teacher/students", TeacherStudentsPage)] TeacherStudents {},

        #[route("/student", StudentDashboardPage)] StudentDashboard {},
        #[route("/student/courses", StudentCoursesPage)] StudentCourses {},
        #[route("/student/courses/:course_id", StudentCourseDetailPage)] StudentCourseDetail { course_id: u64 },
        #[route("/student/results", StudentResultsPage)] StudentResults {},
}

impl From<AppRoute> for Route {
    fn from(route: AppRoute) -> Self {
        match route {
            AppRoute::Home => Route::Home {},
            AppRoute::Login => Route::Login {},
            AppRoute::Register => Route::Register {},
            AppRoute::AdminDashboard => Route::AdminDashboard {},
            AppRoute::AdminUsers => Route::AdminUsers {},
            AppRoute::AdminCourses => Route::AdminCourses {},
            AppRoute::AdminCourseDetail { course_id } => Route::AdminCourseDetail { course_id },
            AppRoute::TeacherDashboard => Route::TeacherDashboard {},
            AppRoute::TeacherCourses => Route::TeacherCourses {},
            AppRoute::TeacherCourseDetail { course_id } => Route::TeacherCourseDetail { course_id },
            AppRoute::TeacherStudents => Route::TeacherStudents {},
            AppRoute::StudentDashboard => Route::StudentDashboard {},
            AppRoute::StudentCourses => Route::StudentCourses {},
            AppRoute::StudentCourseDetail { course_id } => Route::StudentCourseDetail { course_id },
            AppRoute::StudentResults => Route::StudentResults {},
        }
    }
}

impl From<Route> for AppRoute {
    fn from(route: Route) -> Self {
        match route {
            Route::Home {} => AppRoute::Home,
            Route::Login {} => AppRoute::Login,
            Route::Register {} => AppRoute::Register,
            Route::AdminDashboard {} => AppRoute::AdminDashboard,
            Route::AdminUsers {} => AppRoute::AdminUsers,
            Route::AdminCourses {} => AppRoute::AdminCourses,
            Route::AdminCourseDetail { course_id } => AppRoute::AdminCourseDetail { course_id },
            Route::TeacherDashboard {} => AppRoute::TeacherDashboard,
            Route::TeacherCourses {} => AppRoute::TeacherCourses,
            Route::TeacherCourseDetail { course_id } => AppRoute::TeacherCourseDetail { course_id },
            Route::TeacherStudents {} => AppRoute::TeacherStudents,
            Route::StudentDashboard {} => AppRoute::StudentDashboard,
            Route::StudentCourses {} => AppRoute::StudentCourses,
            Route::StudentCourseDetail { course_id } => AppRoute::StudentCourseDetail { course_id },
            Route::StudentResults {} => AppRoute::StudentResults,
        }
    }
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            NavBar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
