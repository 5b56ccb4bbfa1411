use dioxus::prelude::*;
use dioxus_router::Link;

use edu_core::{Level, Role};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::guard::{RequireRole, ViewErrorNotice};
use crate::views::shared::{CourseCard, CourseDetail, StatTile, load_course_materials};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{CourseCardVm, UserRowVm, filter_users, map_course_cards, map_user_rows};

#[component]
pub fn TeacherDashboardPage() -> Element {
    rsx! {
        RequireRole { role: Role::Teacher, TeacherDashboard {} }
    }
}

#[component]
pub fn TeacherCoursesPage() -> Element {
    rsx! {
        RequireRole { role: Role::Teacher, TeacherCourses {} }
    }
}

#[component]
pub fn TeacherCourseDetailPage(course_id: u64) -> Element {
    rsx! {
        RequireRole { role: Role::Teacher, TeacherCourseDetail { course_id } }
    }
}

#[component]
pub fn TeacherStudentsPage() -> Element {
    rsx! {
        RequireRole { role: Role::Teacher, TeacherStudents {} }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct TeacherOverview {
    courses: Vec<CourseCardVm>,
    students: u64,
}

#[component]
fn TeacherDashboard() -> Element {
    let ctx = use_context::<AppContext>();
    let courses = ctx.courses();
    let users = ctx.users();

    let resource = use_resource(move || {
        let courses = courses.clone();
        let users = users.clone();
        async move {
            let mine = courses.teacher_courses().await?;
            let students = users.students().await?;
            Ok::<_, ViewError>(TeacherOverview {
                courses: map_course_cards(&mine),
                students: students.len() as u64,
            })
        }
    });

    rsx! {
        div { class: "page",
            h2 { "Teacher dashboard" }
            match view_state_from_resource(resource) {
                ViewState::Idle | ViewState::Loading => rsx! { p { "Loading..." } },
                ViewState::Ready(overview) => {
                    let course_count = overview.courses.len() as u64;
                    let recent: Vec<CourseCardVm> = overview.courses.into_iter().take(5).collect();
                    rsx! {
                        div { class: "stats",
                            StatTile { label: "My courses", value: course_count }
                            StatTile { label: "Students", value: overview.students }
                        }
                        h3 { "Recent courses" }
                        ul { class: "course-list",
                            for card in recent {
                                CourseCard { key: "{card.id}", card: card.clone(),
                                    Link { to: Route::TeacherCourseDetail { course_id: card.id }, "{card.title}" }
                                }
                            }
                        }
                    }
                }
                ViewState::Error(err) => rsx! { ViewErrorNotice { err } },
            }
        }
    }
}

#[component]
fn TeacherCourses() -> Element {
    let ctx = use_context::<AppContext>();
    let courses = ctx.courses();
    let mut action_error = use_signal(|| None::<ViewError>);

    let mut resource = use_resource(move || {
        let courses = courses.clone();
        async move {
            let mine = courses.teacher_courses().await?;
            Ok::<_, ViewError>(map_course_cards(&mine))
        }
    });

    let on_delete = use_callback(move |course_id: u64| {
        let courses = ctx.courses();
        spawn(async move {
            match courses.delete_course(course_id).await {
                Ok(()) => {
                    action_error.set(None);
                    resource.restart();
                }
                Err(err) => action_error.set(Some(ViewError::from(err))),
            }
        });
    });

    rsx! {
        div { class: "page",
            h2 { "My courses" }
            if let Some(err) = action_error() {
                ViewErrorNotice { err }
            }
            match view_state_from_resource(resource) {
                ViewState::Idle | ViewState::Loading => rsx! { p { "Loading..." } },
                ViewState::Ready(cards) => rsx! {
                    if cards.is_empty() {
                        p { "You have no courses yet." }
                    } else {
                        ul { class: "course-list",
                            for card in cards {
                                CourseCard { key: "{card.id}", card: card.clone(),
                                    Link { to: Route::TeacherCourseDetail { course_id: card.id }, "{card.title}" }
                                    button {
                                        class: "danger",
                                        onclick: move |_| on_delete.call(card.id),
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! { ViewErrorNotice { err } },
            }
        }
    }
}

#[component]
fn TeacherCourseDetail(course_id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let courses = ctx.courses();

    let resource = use_resource(move || {
        let courses = courses.clone();
        async move {
            let course = courses.course(course_id).await?;
            load_course_materials(&courses, course).await
        }
    });

    rsx! {
        div { class: "page",
            Link { to: Route::TeacherCourses {}, "Back to my courses" }
            match view_state_from_resource(resource) {
                ViewState::Idle | ViewState::Loading => rsx! { p { "Loading..." } },
                ViewState::Ready(detail) => rsx! { CourseDetail { detail } },
                ViewState::Error(err) => rsx! { ViewErrorNotice { err } },
            }
        }
    }
}

#[component]
fn TeacherStudents() -> Element {
    let ctx = use_context::<AppContext>();
    let users = ctx.users();
    let mut query = use_signal(String::new);
    let mut action_error = use_signal(|| None::<ViewError>);

    let mut resource = use_resource(move || {
        let users = users.clone();
        async move {
            let students = users.students().await?;
            Ok::<_, ViewError>(map_user_rows(&students))
        }
    });

    let on_level = use_callback(move |(user_id, level): (u64, Level)| {
        let users = ctx.users();
        spawn(async move {
            match users.set_level(user_id, level).await {
                Ok(()) => {
                    action_error.set(None);
                    resource.restart();
                }
                Err(err) => action_error.set(Some(ViewError::from(err))),
            }
        });
    });

    rsx! {
        div { class: "page",
            h2 { "Students" }
            input {
                class: "search",
                placeholder: "Search by name or email",
                value: "{query}",
                oninput: move |evt| query.set(evt.value()),
            }
            if let Some(err) = action_error() {
                ViewErrorNotice { err }
            }
            match view_state_from_resource(resource) {
                ViewState::Idle | ViewState::Loading => rsx! { p { "Loading..." } },
                ViewState::Ready(rows) => {
                    let visible = filter_users(&rows, &query());
                    let shown = visible.len();
                    let total = rows.len();
                    rsx! {
                        p { class: "count", "{shown} of {total} students" }
                        table { class: "users",
                            thead {
                                tr {
                                    th { "Username" }
                                    th { "Email" }
                                    th { "Level" }
                                }
                            }
                            tbody {
                                for row in visible {
                                    StudentRow { key: "{row.id}", row, on_level }
                                }
                            }
                        }
                    }
                }
                ViewState::Error(err) => rsx! { ViewErrorNotice { err } },
            }
        }
    }
}

#[component]
fn StudentRow(row: UserRowVm, on_level: EventHandler<(u64, Level)>) -> Element {
    let user_id = row.id;

    rsx! {
        tr {
            td { "{row.username}" }
            td { "{row.email}" }
            td {
                select {
                    value: "{row.level}",
                    onchange: move |evt| {
                        if let Ok(level) = evt.value().parse::<Level>() {
                            on_level.call((user_id, level));
                        }
                    },
                    for level in Level::ALL {
                        option { value: level.as_str(), "{level}" }
                    }
                }
            }
        }
    }
}
