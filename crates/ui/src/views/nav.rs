use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use edu_core::Role;

use crate::context::{AppContext, SessionDisplay};
use crate::routes::Route;

#[component]
pub fn NavBar() -> Element {
    let ctx = use_context::<AppContext>();
    let mut display = use_context::<SessionDisplay>();
    let navigator = use_navigator();
    let session = display.session();
    let user_label = session
        .username()
        .unwrap_or(session.role().as_str())
        .to_string();

    let on_logout = move |_: MouseEvent| {
        let auth = ctx.auth();
        match auth.logout() {
            Ok(route) => {
                display.refresh(ctx.session_guard());
                let _ = navigator.replace(route.path());
            }
            Err(err) => tracing::error!(error = %err, "logout failed"),
        }
    };

    rsx! {
        nav { class: "navbar",
            h1 { Link { to: Route::Home {}, "EduPortal" } }
            ul {
                match session.role() {
                    Role::Admin => rsx! {
                        li { Link { to: Route::AdminDashboard {}, "Dashboard" } }
                        li { Link { to: Route::AdminUsers {}, "Users" } }
                        li { Link { to: Route::AdminCourses {}, "Courses" } }
                    },
                    Role::Teacher => rsx! {
                        li { Link { to: Route::TeacherDashboard {}, "Dashboard" } }
                        li { Link { to: Route::TeacherCourses {}, "My courses" } }
                        li { Link { to: Route::TeacherStudents {}, "Students" } }
                    },
                    Role::Student => rsx! {
                        li { Link { to: Route::StudentDashboard {}, "Dashboard" } }
                        li { Link { to: Route::StudentCourses {}, "Courses" } }
                        li { Link { to: Route::StudentResults {}, "Results" } }
                    },
                    Role::None => rsx! {
                        li { Link { to: Route::Login {}, "Sign in" } }
                        li { Link { to: Route::Register {}, "Register" } }
                    },
                }
            }
            if session.is_authenticated() {
                div { class: "navbar-user",
                    span { class: "username", "{user_label}" }
                    button { class: "logout", onclick: on_logout, "Log out" }
                }
            }
        }
    }
}
