use dioxus::prelude::*;
use dioxus_router::use_navigator;

use edu_core::{GuardPhase, Role, Route};

use crate::context::{AppContext, SessionDisplay};
use crate::views::ViewError;

/// Renders `children` only if the stored session holds `role`.
///
/// The check runs once, before the first render of this mount, and its
/// outcome is kept for the lifetime of the mount. A denied mount shows a
/// placeholder and replaces the location; `children` are never built.
#[component]
pub fn RequireRole(role: Role, children: Element) -> Element {
    let ctx = use_context::<AppContext>();
    let phase = use_hook(|| {
        let mut phase = GuardPhase::default();
        phase.settle(|| ctx.session_guard().guard(Some(role)))
    });

    match phase.redirect() {
        Some(target) => rsx! { Redirect { to: target } },
        None if phase.is_allowed() => children,
        None => rsx! {},
    }
}

/// Placeholder that replaces the current location once mounted.
#[component]
pub fn Redirect(to: Route) -> Element {
    let navigator = use_navigator();
    use_effect(move || {
        tracing::debug!(target = %to, "redirecting");
        let _ = navigator.replace(to.path());
    });

    rsx! {
        p { class: "redirecting", "Redirecting..." }
    }
}

/// Shown when a fetch came back 401: refresh the nav and go to login.
#[component]
pub fn SessionExpired() -> Element {
    let ctx = use_context::<AppContext>();
    let mut display = use_context::<SessionDisplay>();
    use_effect(move || display.refresh(ctx.session_guard()));

    rsx! {
        div { class: "session-expired",
            p { "Your session has expired. Please sign in again." }
            Redirect { to: Route::Login }
        }
    }
}

/// Error line for a failed fetch; an expired session redirects instead.
#[component]
pub fn ViewErrorNotice(err: ViewError) -> Element {
    match err {
        ViewError::SessionExpired => rsx! { SessionExpired {} },
        other => {
            let message = other.message();
            rsx! {
                p { class: "error", "{message}" }
            }
        }
    }
}
