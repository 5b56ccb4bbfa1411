use std::fmt;

use crate::model::Role;

/// Every page of the portal.
///
/// Paths are fixed; `Route::from_path` is the inverse of `Route::path`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Register,

    AdminDashboard,
    AdminUsers,
    AdminCourses,
    AdminCourseDetail { course_id: u64 },

    TeacherDashboard,
    TeacherCourses,
    TeacherCourseDetail { course_id: u64 },
    TeacherStudents,

    StudentDashboard,
    StudentCourses,
    StudentCourseDetail { course_id: u64 },
    StudentResults,
}

/// Who may open a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    Role(Role),
}

impl Route {
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".into(),
            Route::Login => "/login".into(),
            Route::Register => "/register".into(),
            Route::AdminDashboard => "/admin/dashboard".into(),
            Route::AdminUsers => "/admin/users".into(),
            Route::AdminCourses => "/admin/courses".into(),
            Route::AdminCourseDetail { course_id } => format!("/admin/courses/{course_id}"),
            Route::TeacherDashboard => "/teacher".into(),
            Route::TeacherCourses => "/teacher/courses".into(),
            Route::TeacherCourseDetail { course_id } => format!("/teacher/courses/{course_id}"),
            Route::TeacherStudents => "/teacher/students".into(),
            Route::StudentDashboard => "/student".into(),
            Route::StudentCourses => "/student/courses".into(),
            Route::StudentCourseDetail { course_id } => format!("/student/courses/{course_id}"),
            Route::StudentResults => "/student/results".into(),
        }
    }

    /// Parse a location path. A single trailing slash is ignored.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim();
        let trimmed = if trimmed.len() > 1 {
            trimmed.strip_suffix('/').unwrap_or(trimmed)
        } else {
            trimmed
        };
        let segments: Vec<&str> = trimmed
            .strip_prefix('/')?
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        let route = match segments.as_slice() {
            [] => Route::Home,
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["admin", "dashboard"] => Route::AdminDashboard,
            ["admin", "users"] => Route::AdminUsers,
            ["admin", "courses"] => Route::AdminCourses,
            ["admin", "courses", id] => Route::AdminCourseDetail {
                course_id: id.parse().ok()?,
            },
            ["teacher"] => Route::TeacherDashboard,
            ["teacher", "courses"] => Route::TeacherCourses,
            ["teacher", "courses", id] => Route::TeacherCourseDetail {
                course_id: id.parse().ok()?,
            },
            ["teacher", "students"] => Route::TeacherStudents,
            ["student"] => Route::StudentDashboard,
            ["student", "courses"] => Route::StudentCourses,
            ["student", "courses", id] => Route::StudentCourseDetail {
                course_id: id.parse().ok()?,
            },
            ["student", "results"] => Route::StudentResults,
            _ => return None,
        };
        Some(route)
    }

    #[must_use]
    pub fn access(&self) -> RouteAccess {
        match self {
            Route::Home | Route::Login | Route::Register => RouteAccess::Public,
            Route::AdminDashboard
            | Route::AdminUsers
            | Route::AdminCourses
            | Route::AdminCourseDetail { .. } => RouteAccess::Role(Role::Admin),
            Route::TeacherDashboard
            | Route::TeacherCourses
            | Route::TeacherCourseDetail { .. }
            | Route::TeacherStudents => RouteAccess::Role(Role::Teacher),
            Route::StudentDashboard
            | Route::StudentCourses
            | Route::StudentCourseDetail { .. }
            | Route::StudentResults => RouteAccess::Role(Role::Student),
        }
    }

    /// The role a guard should require for this route, if any.
    #[must_use]
    pub fn required_role(&self) -> Option<Role> {
        match self.access() {
            RouteAccess::Public => None,
            RouteAccess::Role(role) => Some(role),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Where a user with `role` lands after login, or when they open a page
/// that belongs to a different role.
///
/// Total: anything that is not a known role goes to the public home page.
#[must_use]
pub fn landing_route_for(role: Role) -> Route {
    match role {
        Role::Admin => Route::AdminDashboard,
        Role::Teacher => Route::TeacherDashboard,
        Role::Student => Route::StudentDashboard,
        Role::None => Route::Home,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Route; 15] = [
        Route::Home,
        Route::Login,
        Route::Register,
        Route::AdminDashboard,
        Route::AdminUsers,
        Route::AdminCourses,
        Route::AdminCourseDetail { course_id: 7 },
        Route::TeacherDashboard,
        Route::TeacherCourses,
        Route::TeacherCourseDetail { course_id: 8 },
        Route::TeacherStudents,
        Route::StudentDashboard,
        Route::StudentCourses,
        Route::StudentCourseDetail { course_id: 9 },
        Route::StudentResults,
    ];

    #[test]
    fn every_path_parses_back() {
        for route in ALL {
            assert_eq!(Route::from_path(&route.path()), Some(route), "{route}");
        }
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        assert_eq!(Route::from_path("/teacher/"), Some(Route::TeacherDashboard));
        assert_eq!(Route::from_path("/"), Some(Route::Home));
    }

    #[test]
    fn unknown_paths_do_not_parse() {
        assert_eq!(Route::from_path("/dashboard"), None);
        assert_eq!(Route::from_path("admin/dashboard"), None);
        assert_eq!(Route::from_path("/admin/courses/abc"), None);
    }

    #[test]
    fn landing_routes_match_roles() {
        assert_eq!(landing_route_for(Role::Admin), Route::AdminDashboard);
        assert_eq!(landing_route_for(Role::Teacher), Route::TeacherDashboard);
        assert_eq!(landing_route_for(Role::Student), Route::StudentDashboard);
        assert_eq!(landing_route_for(Role::None), Route::Home);
    }

    #[test]
    fn landing_route_is_total_over_arbitrary_strings() {
        for raw in ["", "admin ", "Admin", "superuser", "professor", "\u{0}"] {
            let route = landing_route_for(Role::parse(raw));
            let expected = if raw.trim() == "admin" {
                Route::AdminDashboard
            } else {
                Route::Home
            };
            assert_eq!(route, expected, "raw = {raw:?}");
        }
    }

    #[test]
    fn each_landing_route_belongs_to_its_role() {
        for role in Role::ASSIGNABLE {
            assert_eq!(landing_route_for(role).required_role(), Some(role));
        }
    }

    #[test]
    fn public_pages_need_no_role() {
        assert_eq!(Route::Home.access(), RouteAccess::Public);
        assert_eq!(Route::Login.required_role(), None);
        assert_eq!(Route::Register.required_role(), None);
    }
}
