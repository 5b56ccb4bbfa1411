use dioxus::prelude::*;
use dioxus_router::Link;

use edu_core::Role;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::guard::{RequireRole, ViewErrorNotice};
use crate::views::shared::{CourseCard, CourseDetail, StatTile, load_course_materials};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{
    CourseCardVm, ResultRowVm, ResultsOverviewVm, map_course_cards, map_result_rows,
    results_overview,
};

#[component]
pub fn StudentDashboardPage() -> Element {
    rsx! {
        RequireRole { role: Role::Student, StudentDashboard {} }
    }
}

#[component]
pub fn StudentCoursesPage() -> Element {
    rsx! {
        RequireRole { role: Role::Student, StudentCourses {} }
    }
}

#[component]
pub fn StudentCourseDetailPage(course_id: u64) -> Element {
    rsx! {
        RequireRole { role: Role::Student, StudentCourseDetail { course_id } }
    }
}

#[component]
pub fn StudentResultsPage() -> Element {
    rsx! {
        RequireRole { role: Role::Student, StudentResults {} }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct StudentOverview {
    courses: Vec<CourseCardVm>,
    results: ResultsOverviewVm,
}

#[component]
fn StudentDashboard() -> Element {
    let ctx = use_context::<AppContext>();
    let courses = ctx.courses();
    let results = ctx.results();

    let resource = use_resource(move || {
        let courses = courses.clone();
        let results = results.clone();
        async move {
            let published = courses.published_courses().await?;
            let mine = results.my_results().await?;
            Ok::<_, ViewError>(StudentOverview {
                courses: map_course_cards(&published),
                results: results_overview(&mine),
            })
        }
    });

    rsx! {
        div { class: "page",
            h2 { "Student dashboard" }
            match view_state_from_resource(resource) {
                ViewState::Idle | ViewState::Loading => rsx! { p { "Loading..." } },
                ViewState::Ready(overview) => {
                    let average = format!("{:.0}%", overview.results.average_score);
                    rsx! {
                        div { class: "stats",
                            StatTile { label: "Available courses", value: overview.courses.len() as u64 }
                            StatTile { label: "Quizzes taken", value: overview.results.taken as u64 }
                            StatTile { label: "Quizzes passed", value: overview.results.passed as u64 }
                        }
                        p { class: "average", "Average score: {average}" }
                        Link { to: Route::StudentCourses {}, "Browse courses" }
                    }
                }
                ViewState::Error(err) => rsx! { ViewErrorNotice { err } },
            }
        }
    }
}

#[component]
fn StudentCourses() -> Element {
    let ctx = use_context::<AppContext>();
    let courses = ctx.courses();

    let resource = use_resource(move || {
        let courses = courses.clone();
        async move {
            let published = courses.published_courses().await?;
            Ok::<_, ViewError>(map_course_cards(&published))
        }
    });

    rsx! {
        div { class: "page",
            h2 { "Courses" }
            match view_state_from_resource(resource) {
                ViewState::Idle | ViewState::Loading => rsx! { p { "Loading..." } },
                ViewState::Ready(cards) => rsx! {
                    if cards.is_empty() {
                        p { "No courses are published yet." }
                    } else {
                        ul { class: "course-list",
                            for card in cards {
                                CourseCard { key: "{card.id}", card: card.clone(),
                                    Link { to: Route::StudentCourseDetail { course_id: card.id }, "{card.title}" }
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
fn StudentCourseDetail(course_id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let courses = ctx.courses();

    let resource = use_resource(move || {
        let courses = courses.clone();
        async move {
            let course = courses.student_course(course_id).await?;
            load_course_materials(&courses, course).await
        }
    });

    rsx! {
        div { class: "page",
            Link { to: Route::StudentCourses {}, "Back to courses" }
            match view_state_from_resource(resource) {
                ViewState::Idle | ViewState::Loading => rsx! { p { "Loading..." } },
                ViewState::Ready(detail) => rsx! { CourseDetail { detail } },
                ViewState::Error(err) => rsx! { ViewErrorNotice { err } },
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct ResultsData {
    overview: ResultsOverviewVm,
    rows: Vec<ResultRowVm>,
}

#[component]
fn StudentResults() -> Element {
    let ctx = use_context::<AppContext>();
    let results = ctx.results();

    let resource = use_resource(move || {
        let results = results.clone();
        async move {
            let mine = results.my_results().await?;
            Ok::<_, ViewError>(ResultsData {
                overview: results_overview(&mine),
                rows: map_result_rows(&mine),
            })
        }
    });

    rsx! {
        div { class: "page",
            h2 { "My results" }
            match view_state_from_resource(resource) {
                ViewState::Idle | ViewState::Loading => rsx! { p { "Loading..." } },
                ViewState::Ready(data) => {
                    if data.rows.is_empty() {
                        rsx! { p { "You have not taken any quiz yet." } }
                    } else {
                        let average = format!("{:.0}%", data.overview.average_score);
                        rsx! {
                            p { class: "summary",
                                "Passed {data.overview.passed} of {data.overview.taken} quizzes, average {average}"
                            }
                            table { class: "results",
                                thead {
                                    tr {
                                        th { "Quiz" }
                                        th { "Score" }
                                        th { "Result" }
                                        th { "Date" }
                                    }
                                }
                                tbody {
                                    for row in data.rows {
                                        ResultRow { key: "{row.id}", row }
                                    }
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
fn ResultRow(row: ResultRowVm) -> Element {
    let verdict = if row.passed { "Passed" } else { "Failed" };

    rsx! {
        tr { class: if row.passed { "passed" } else { "failed" },
            td { "{row.title}" }
            td { "{row.score_str}" }
            td { "{verdict}" }
            td { "{row.taken_at_str}" }
        }
    }
}
