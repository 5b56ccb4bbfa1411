use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use edu_core::Credentials;
use services::AuthError;

use crate::context::{AppContext, SessionDisplay};
use crate::routes::Route;

#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut display = use_context::<SessionDisplay>();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let credentials = match Credentials::new(email(), password()) {
            Ok(credentials) => credentials,
            Err(err) => {
                error.set(Some(err.to_string()));
                return;
            }
        };
        let auth = ctx.auth();
        let guard = ctx.session_guard().clone();
        submitting.set(true);
        error.set(None);
        spawn(async move {
            match auth.login(&credentials).await {
                Ok(route) => {
                    display.refresh(&guard);
                    let _ = navigator.replace(route.path());
                }
                Err(err) => error.set(Some(login_error_message(&err))),
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "page auth",
            h2 { "Sign in" }
            form { class: "auth-form", onsubmit: on_submit,
                label { "Email"
                    input {
                        r#type: "email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                label { "Password"
                    input {
                        r#type: "password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                if let Some(message) = error() {
                    p { class: "form-error", "{message}" }
                }
                button { r#type: "submit", disabled: submitting(), "Sign in" }
            }
            p { "No account yet? "
                Link { to: Route::Register {}, "Register" }
            }
        }
    }
}

fn login_error_message(err: &AuthError) -> String {
    match err {
        AuthError::Rejected(detail) => detail.clone(),
        AuthError::Api(services::ApiError::Network(_)) => {
            "Cannot reach the server. Please try again later.".to_string()
        }
        AuthError::MalformedResponse(_) => {
            "The server sent an unexpected answer. Please try again.".to_string()
        }
        other => other.to_string(),
    }
}
