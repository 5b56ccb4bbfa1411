use dioxus::prelude::*;
use dioxus_router::Link;

use edu_core::Role;
use services::dto::NewCourse;

use crate::context::{AppContext, SessionDisplay};
use crate::routes::Route;
use crate::views::guard::{RequireRole, ViewErrorNotice};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::views::shared::{CourseDetail, StatTile};
use crate::vm::{
    CourseCardVm, CourseDetailVm, UserRowVm, map_course_cards, map_materials, map_user_rows,
};

#[component]
pub fn AdminDashboardPage() -> Element {
    rsx! {
        RequireRole { role: Role::Admin, AdminDashboard {} }
    }
}

#[component]
pub fn AdminUsersPage() -> Element {
    rsx! {
        RequireRole { role: Role::Admin, AdminUsers {} }
    }
}

#[component]
pub fn AdminCoursesPage() -> Element {
    rsx! {
        RequireRole { role: Role::Admin, AdminCourses {} }
    }
}

#[component]
pub fn AdminCourseDetailPage(course_id: u64) -> Element {
    rsx! {
        RequireRole { role: Role::Admin, AdminCourseDetail { course_id } }
    }
}

#[component]
fn AdminDashboard() -> Element {
    let ctx = use_context::<AppContext>();
    let admin = ctx.admin();

    let resource = use_resource(move || {
        let admin = admin.clone();
        async move { admin.dashboard().await.map_err(ViewError::from) }
    });

    rsx! {
        div { class: "page",
            h2 { "Admin dashboard" }
            match view_state_from_resource(resource) {
                ViewState::Idle | ViewState::Loading => rsx! { p { "Loading..." } },
                ViewState::Ready(stats) => rsx! {
                    div { class: "stats",
                        StatTile { label: "Users", value: stats.total_users }
                        StatTile { label: "Students", value: stats.total_students }
                        StatTile { label: "Teachers", value: stats.total_teachers }
                        StatTile { label: "Courses", value: stats.total_courses }
                        StatTile { label: "PDFs", value: stats.total_pdfs }
                        StatTile { label: "Enrollments", value: stats.total_enrollments }
                    }
                },
                ViewState::Error(err) => rsx! { ViewErrorNotice { err } },
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum UserAction {
    SetRole(u64, Role),
    ToggleActive(u64),
    Delete(u64),
}

#[component]
fn AdminUsers() -> Element {
    let ctx = use_context::<AppContext>();
    let admin = ctx.admin();
    let mut action_error = use_signal(|| None::<ViewError>);

    let mut resource = use_resource(move || {
        let admin = admin.clone();
        async move {
            let users = admin.users().await.map_err(ViewError::from)?;
            Ok(map_user_rows(&users))
        }
    });

    let me = use_context::<SessionDisplay>()
        .session()
        .username()
        .map(str::to_owned);

    let on_action = use_callback(move |action: UserAction| {
        let admin = ctx.admin();
        spawn(async move {
            let outcome = match action {
                UserAction::SetRole(user_id, role) => admin.update_role(user_id, role).await,
                UserAction::ToggleActive(user_id) => admin.toggle_active(user_id).await,
                UserAction::Delete(user_id) => admin.delete_user(user_id).await,
            };
            match outcome {
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
            h2 { "Users" }
            if let Some(err) = action_error() {
                ViewErrorNotice { err }
            }
            match view_state_from_resource(resource) {
                ViewState::Idle | ViewState::Loading => rsx! { p { "Loading..." } },
                ViewState::Ready(rows) => rsx! {
                    if rows.is_empty() {
                        p { "No users yet." }
                    } else {
                        table { class: "users",
                            thead {
                                tr {
                                    th { "Username" }
                                    th { "Email" }
                                    th { "Role" }
                                    th { "Status" }
                                    th { "" }
                                }
                            }
                            tbody {
                                for row in rows {
                                    UserRow { key: "{row.id}", row, me: me.clone(), on_action }
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
fn UserRow(row: UserRowVm, #[props(!optional)] me: Option<String>, on_action: EventHandler<UserAction>) -> Element {
    let user_id = row.id;
    let is_self = row.is_current_user(me.as_deref());
    let status = if row.active { "Active" } else { "Disabled" };
    let toggle_label = if row.active { "Disable" } else { "Enable" };
    let role_value = row.role.as_str();

    rsx! {
        tr {
            td {
                "{row.username}"
                if is_self {
                    span { class: "you", " (you)" }
                }
            }
            td { "{row.email}" }
            td {
                select {
                    value: "{role_value}",
                    disabled: is_self,
                    onchange: move |evt| {
                        let role = Role::parse(&evt.value());
                        if role.is_assignable() {
                            on_action.call(UserAction::SetRole(user_id, role));
                        }
                    },
                    for role in Role::ASSIGNABLE {
                        option { value: role.as_str(), "{role}" }
                    }
                }
            }
            td { "{status}" }
            td {
                button { disabled: is_self, onclick: move |_| on_action.call(UserAction::ToggleActive(user_id)), "{toggle_label}" }
                button { class: "danger", disabled: is_self, onclick: move |_| on_action.call(UserAction::Delete(user_id)), "Delete" }
            }
        }
    }
}

#[component]
fn AdminCourses() -> Element {
    let ctx = use_context::<AppContext>();
    let admin = ctx.admin();
    let mut action_error = use_signal(|| None::<ViewError>);

    let mut resource = use_resource(move || {
        let admin = admin.clone();
        async move {
            let courses = admin.courses().await.map_err(ViewError::from)?;
            Ok(map_course_cards(&courses))
        }
    });

    let on_delete = use_callback(move |course_id: u64| {
        let admin = ctx.admin();
        spawn(async move {
            match admin.delete_course(course_id).await {
                Ok(()) => {
                    action_error.set(None);
                    resource.restart();
                }
                Err(err) => action_error.set(Some(ViewError::from(err))),
            }
        });
    });

    let on_created = use_callback(move |()| resource.restart());

    rsx! {
        div { class: "page",
            h2 { "Courses" }
            NewCourseForm { on_created }
            if let Some(err) = action_error() {
                ViewErrorNotice { err }
            }
            match view_state_from_resource(resource) {
                ViewState::Idle | ViewState::Loading => rsx! { p { "Loading..." } },
                ViewState::Ready(cards) => rsx! {
                    if cards.is_empty() {
                        p { "No courses yet." }
                    } else {
                        ul { class: "course-list",
                            for card in cards {
                                AdminCourseItem { key: "{card.id}", card, on_delete }
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
fn AdminCourseItem(card: CourseCardVm, on_delete: EventHandler<u64>) -> Element {
    let course_id = card.id;
    let visibility = if card.published { "Published" } else { "Draft" };

    rsx! {
        li { class: "course-item",
            Link { to: Route::AdminCourseDetail { course_id }, "{card.title}" }
            span { class: "course-teacher", "{card.teacher}" }
            span { class: "course-visibility", "{visibility}" }
            button { class: "danger", onclick: move |_| on_delete.call(course_id), "Delete" }
        }
    }
}

#[component]
fn NewCourseForm(on_created: EventHandler<()>) -> Element {
    let ctx = use_context::<AppContext>();
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut teacher_id = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Ok(teacher) = teacher_id().trim().parse::<u64>() else {
            error.set(Some("Teacher id must be a number.".to_string()));
            return;
        };
        if title().trim().is_empty() {
            error.set(Some("Title is required.".to_string()));
            return;
        }
        let course = NewCourse {
            title: title().trim().to_string(),
            description: Some(description().trim().to_string()).filter(|d| !d.is_empty()),
            is_published: true,
            teacher_id: teacher,
        };
        let admin = ctx.admin();
        spawn(async move {
            match admin.create_course(&course).await {
                Ok(()) => {
                    error.set(None);
                    title.set(String::new());
                    description.set(String::new());
                    teacher_id.set(String::new());
                    on_created.call(());
                }
                Err(err) => error.set(Some(ViewError::from(err).message())),
            }
        });
    };

    rsx! {
        form { class: "inline-form", onsubmit: on_submit,
            input { placeholder: "Title", value: "{title}", oninput: move |evt| title.set(evt.value()) }
            input { placeholder: "Description", value: "{description}", oninput: move |evt| description.set(evt.value()) }
            input { placeholder: "Teacher id", value: "{teacher_id}", oninput: move |evt| teacher_id.set(evt.value()) }
            button { r#type: "submit", "Add course" }
            if let Some(message) = error() {
                p { class: "form-error", "{message}" }
            }
        }
    }
}

#[component]
fn AdminCourseDetail(course_id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let admin = ctx.admin();

    let mut resource = use_resource(move || {
        let admin = admin.clone();
        async move {
            let detail = admin
                .course_detail(course_id)
                .await
                .map_err(ViewError::from)?;
            Ok(CourseDetailVm {
                course: CourseCardVm::from(&detail.course),
                pdfs: map_materials(&detail.pdfs),
                quizzes: map_materials(&detail.quizzes),
            })
        }
    });

    let on_changed = use_callback(move |()| resource.restart());

    rsx! {
        div { class: "page",
            Link { to: Route::AdminCourses {}, "Back to courses" }
            match view_state_from_resource(resource) {
                ViewState::Idle | ViewState::Loading => rsx! { p { "Loading..." } },
                ViewState::Ready(detail) => rsx! { CourseDetail { detail, manage: true, on_changed } },
                ViewState::Error(err) => rsx! { ViewErrorNotice { err } },
            }
        }
    }
}
