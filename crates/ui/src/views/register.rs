use dioxus::prelude::*;
use dioxus_router::Link;

use edu_core::{Registration, Role};
use services::{ApiError, AuthError};

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn RegisterView() -> Element {
    let ctx = use_context::<AppContext>();

    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| Role::Student);
    let mut status = use_signal(|| None::<Result<String, String>>);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let registration = match Registration::new(username(), email(), password(), role()) {
            Ok(registration) => registration,
            Err(err) => {
                status.set(Some(Err(err.to_string())));
                return;
            }
        };
        let auth = ctx.auth();
        spawn(async move {
            let outcome = match auth.register(&registration).await {
                Ok(user) => Ok(format!("Account created for {}. You can now sign in.", user.username)),
                Err(AuthError::Api(ApiError::Server { detail, .. })) => Err(detail),
                Err(err) => Err(err.to_string()),
            };
            if outcome.is_ok() {
                password.set(String::new());
            }
            status.set(Some(outcome));
        });
    };

    let role_value = role().as_str();

    rsx! {
        div { class: "page auth",
            h2 { "Create an account" }
            form { class: "auth-form", onsubmit: on_submit,
                label { "Username"
                    input { value: "{username}", oninput: move |evt| username.set(evt.value()) }
                }
                label { "Email"
                    input { r#type: "email", value: "{email}", oninput: move |evt| email.set(evt.value()) }
                }
                label { "Password"
                    input { r#type: "password", value: "{password}", oninput: move |evt| password.set(evt.value()) }
                }
                label { "I am a"
                    select {
                        value: "{role_value}",
                        onchange: move |evt| role.set(Role::parse(&evt.value())),
                        option { value: "student", "Student" }
                        option { value: "teacher", "Teacher" }
                    }
                }
                match status() {
                    Some(Ok(message)) => rsx! { p { class: "form-success", "{message}" } },
                    Some(Err(message)) => rsx! { p { class: "form-error", "{message}" } },
                    None => rsx! {},
                }
                button { r#type: "submit", "Register" }
            }
            p { "Already registered? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}
