use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use edu_core::{Role, Route as AppRoute};
use services::{ApiConfig, AppServices};
use storage::Storage;

use crate::context::{UiApp, build_app_context, use_session_display};
use crate::views::{
    AdminCourseDetailPage, AdminCoursesPage, AdminDashboardPage, AdminUsersPage, HomeView,
    LoginView, NavBar, RegisterView, StudentCourseDetailPage, StudentCoursesPage,
    StudentDashboardPage, StudentResultsPage, TeacherCourseDetailPage, TeacherCoursesPage,
    TeacherDashboardPage, TeacherStudentsPage,
};

/// Nothing listens here; fetches fail fast with a connection error.
pub const UNREACHABLE_API: &str = "http://127.0.0.1:9";

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<AppServices>,
    view: AppRoute,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    use_session_display(ctx.session_guard());
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

/// Every path lands on `Root`, so guard redirects keep the mounted view.
#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/:..segments")]
    Root { segments: Vec<String> },
}

#[component]
fn Root(segments: Vec<String>) -> Element {
    let _ = segments;
    let view = use_context::<AppRoute>();
    let page = match view {
        AppRoute::Home => rsx! { HomeView {} },
        AppRoute::Login => rsx! { LoginView {} },
        AppRoute::Register => rsx! { RegisterView {} },
        AppRoute::AdminDashboard => rsx! { AdminDashboardPage {} },
        AppRoute::AdminUsers => rsx! { AdminUsersPage {} },
        AppRoute::AdminCourses => rsx! { AdminCoursesPage {} },
        AppRoute::AdminCourseDetail { course_id } => rsx! { AdminCourseDetailPage { course_id } },
        AppRoute::TeacherDashboard => rsx! { TeacherDashboardPage {} },
        AppRoute::TeacherCourses => rsx! { TeacherCoursesPage {} },
        AppRoute::TeacherCourseDetail { course_id } => rsx! { TeacherCourseDetailPage { course_id } },
        AppRoute::TeacherStudents => rsx! { TeacherStudentsPage {} },
        AppRoute::StudentDashboard => rsx! { StudentDashboardPage {} },
        AppRoute::StudentCourses => rsx! { StudentCoursesPage {} },
        AppRoute::StudentCourseDetail { course_id } => rsx! { StudentCourseDetailPage { course_id } },
        AppRoute::StudentResults => rsx! { StudentResultsPage {} },
    };
    rsx! {
        NavBar {}
        {page}
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub services: Arc<AppServices>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive async work until the rendered HTML contains `needle`.
    pub async fn drive_until(&mut self, needle: &str, max_rounds: usize) -> String {
        for _ in 0..max_rounds {
            let html = self.render();
            if html.contains(needle) {
                return html;
            }
            self.drive_async().await;
        }
        self.render()
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Mount `view` with an optional signed-in session of `role`.
pub fn setup_view_harness(view: AppRoute, session: Option<(Role, &str)>) -> ViewHarness {
    setup_view_harness_with_api(view, session, UNREACHABLE_API)
}

pub fn setup_view_harness_with_api(
    view: AppRoute,
    session: Option<(Role, &str)>,
    api_base: &str,
) -> ViewHarness {
    let storage = Storage::in_memory();
    let config = ApiConfig::new(api_base).expect("api config");
    let services = Arc::new(AppServices::new(config, &storage));

    if let Some((role, username)) = session {
        services
            .session_guard()
            .set_session("test-token", role, Some(username))
            .expect("seed session");
    }

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app: Arc::clone(&services),
            view,
        },
    );

    ViewHarness {
        dom,
        storage,
        services,
    }
}
