use dioxus::prelude::*;
use dioxus_router::Link;

use edu_core::landing_route_for;

use crate::context::SessionDisplay;
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let display = use_context::<SessionDisplay>();
    let session = display.session();

    rsx! {
        div { class: "page home",
            h2 { "Welcome to EduPortal" }
            p { "Courses, PDFs and quizzes for students, teachers and administrators." }

            if session.is_authenticated() {
                Link { class: "cta", to: Route::from(landing_route_for(session.role())), "Go to your dashboard" }
            } else {
                div { class: "cta-row",
                    Link { class: "cta", to: Route::Login {}, "Sign in" }
                    Link { class: "cta secondary", to: Route::Register {}, "Create an account" }
                }
            }
        }
    }
}
