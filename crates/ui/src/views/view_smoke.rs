use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router as HttpRouter};
use serde_json::json;
use edu_core::{Role, Route, Session};
use storage::SessionStore;

use super::test_harness::{setup_view_harness, setup_view_harness_with_api};

fn dashboard_heading(role: Role) -> &'static str {
    match role {
        Role::Admin => "Admin dashboard",
        Role::Teacher => "Teacher dashboard",
        Role::Student => "Student dashboard",
        Role::None => unreachable!("no dashboard without a role"),
    }
}

fn dashboard_route(role: Role) -> Route {
    edu_core::landing_route_for(role)
}

#[tokio::test(flavor = "current_thread")]
async fn anonymous_visitor_never_sees_protected_content() {
    for role in Role::ASSIGNABLE {
        let mut harness = setup_view_harness(dashboard_route(role), None);
        harness.rebuild();
        let html = harness.render();
        assert!(html.contains("Redirecting..."), "missing placeholder in {html}");
        assert!(
            !html.contains(dashboard_heading(role)),
            "protected heading leaked in {html}"
        );
    }
}

#[tokio::test(flavor = "current_thread")]
async fn each_role_only_renders_its_own_dashboard() {
    for signed_in in Role::ASSIGNABLE {
        for page in Role::ASSIGNABLE {
            let mut harness = setup_view_harness(dashboard_route(page), Some((signed_in, "tester")));
            harness.rebuild();
            let html = harness.render();
            let heading = dashboard_heading(page);
            if signed_in == page {
                assert!(html.contains(heading), "{signed_in} should see {heading}: {html}");
                assert!(!html.contains("Redirecting..."));
            } else {
                assert!(!html.contains(heading), "{signed_in} must not see {heading}: {html}");
                assert!(html.contains("Redirecting..."));
            }
        }
    }
}

#[tokio::test(flavor = "current_thread")]
async fn wrong_role_keeps_the_session() {
    let mut harness = setup_view_harness(Route::AdminUsers, Some((Role::Teacher, "profX")));
    harness.rebuild();
    assert!(harness.render().contains("Redirecting..."));
    let session = harness.services.session_guard().get_session();
    assert_eq!(session.role(), Role::Teacher);
}

#[tokio::test(flavor = "current_thread")]
async fn nav_shows_user_and_logout_when_signed_in() {
    let mut harness = setup_view_harness(Route::Home, Some((Role::Student, "amira")));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("amira"), "missing username in {html}");
    assert!(html.contains("Log out"), "missing logout in {html}");
    assert!(html.contains("Go to your dashboard"), "missing dashboard link in {html}");

    let mut harness = setup_view_harness(Route::Home, None);
    harness.rebuild();
    let html = harness.render();
    assert!(!html.contains("Log out"));
    assert!(html.contains("Sign in"));
}

#[tokio::test(flavor = "current_thread")]
async fn login_and_register_forms_render_for_anyone() {
    let mut harness = setup_view_harness(Route::Login, None);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("type=\"password\""), "missing password input in {html}");

    let mut harness = setup_view_harness(Route::Register, None);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("value=\"teacher\""), "missing role option in {html}");
    assert!(!html.contains("value=\"admin\""), "admin must not be self-assignable: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn unreachable_backend_shows_error_and_keeps_session() {
    let mut harness = setup_view_harness(Route::StudentResults, Some((Role::Student, "amira")));
    harness.rebuild();
    let html = harness
        .drive_until("Cannot reach the server", 40)
        .await;
    assert!(html.contains("Cannot reach the server"), "missing error in {html}");
    assert!(harness.services.session_guard().is_authorized(Some(Role::Student)));
}

async fn serve(app: HttpRouter) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{addr}")
}

#[tokio::test(flavor = "current_thread")]
async fn expired_token_clears_session_and_redirects() {
    let app = HttpRouter::new().route(
        "/courses/teacher",
        get(|| async { (StatusCode::UNAUTHORIZED, "{\"detail\":\"Could not validate credentials\"}") }),
    );
    let base = serve(app).await;

    let mut harness = setup_view_harness_with_api(
        Route::TeacherCourses,
        Some((Role::Teacher, "profX")),
        &base,
    );
    harness.rebuild();
    let html = harness.drive_until("session has expired", 40).await;
    assert!(html.contains("session has expired"), "missing expiry notice in {html}");
    assert_eq!(harness.storage.session.get().unwrap().into_session(), Session::empty());
}

#[tokio::test(flavor = "current_thread")]
async fn admin_cannot_edit_their_own_row() {
    let app = HttpRouter::new().route(
        "/admin/users",
        get(|| async {
            Json(json!([
                {"id": 1, "username": "root", "email": "root@gmail.com", "role": "admin", "is_active": true},
                {"id": 2, "username": "amira", "email": "amira@gmail.com", "role": "student", "is_active": true}
            ]))
        }),
    );
    let base = serve(app).await;

    let mut harness =
        setup_view_harness_with_api(Route::AdminUsers, Some((Role::Admin, "root")), &base);
    harness.rebuild();
    let html = harness.drive_until("amira@gmail.com", 40).await;
    assert_eq!(html.matches("(you)").count(), 1, "one marked row in {html}");

    let rows: Vec<&str> = html.split("<tr").skip(1).collect();
    let own = rows.iter().find(|row| row.contains("root@gmail.com")).expect("own row");
    let other = rows.iter().find(|row| row.contains("amira@gmail.com")).expect("other row");
    assert_eq!(own.matches("disabled").count(), 3, "controls left enabled in {own}");
    assert!(!other.contains("disabled"), "other rows stay editable: {other}");
}

#[tokio::test(flavor = "current_thread")]
async fn teacher_pages_offer_course_delete_and_level_choice() {
    let app = HttpRouter::new()
        .route(
            "/courses/teacher",
            get(|| async { Json(json!([{"id": 1, "title": "Algebra", "is_published": true}])) }),
        )
        .route(
            "/users/",
            get(|| async {
                Json(json!([
                    {"id": 2, "username": "amira", "email": "amira@gmail.com", "role": "student", "level": "intermediate"}
                ]))
            }),
        );
    let base = serve(app).await;

    let mut harness =
        setup_view_harness_with_api(Route::TeacherCourses, Some((Role::Teacher, "profX")), &base);
    harness.rebuild();
    let html = harness.drive_until("Algebra", 40).await;
    assert!(html.contains("Delete"), "missing delete action in {html}");

    let mut harness =
        setup_view_harness_with_api(Route::TeacherStudents, Some((Role::Teacher, "profX")), &base);
    harness.rebuild();
    let html = harness.drive_until("amira@gmail.com", 40).await;
    for level in ["beginner", "intermediate", "advanced"] {
        assert!(html.contains(&format!("value=\"{level}\"")), "missing {level} option in {html}");
    }
}
