use std::collections::HashMap;

use dioxus::prelude::*;
use tm_types::{auth::LoginRequest, validation::validate_login};

use crate::{
    Routes, app::{
        api::{auth::login, use_api}, auth::{
            guard::sanitize_return_path, hooks::{use_auth, use_session}
        }
    }, components::{FieldError, Layout, field_error}
};

#[component]
pub fn LoginPage(redirect: String) -> Element {
    let api = use_api();
    let auth = use_auth();
    let session = use_session();
    let nav = navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(HashMap::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    // Only checked on arrival; a successful login navigates on its own
    use_effect(move || {
        if auth.peek().user.is_some() {
            nav.replace(Routes::HomePage {});
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if submitting() {
            return;
        }

        let request = LoginRequest {
            username: username().trim().to_string(),
            password: password(),
        };
        let field_errors = validate_login(&request.username, &request.password);
        if !field_errors.is_empty() {
            errors.set(field_errors);
            return;
        }
        errors.set(HashMap::new());
        error.set(None);
        submitting.set(true);

        let api = api.clone();
        let session = session.clone();
        let target = sanitize_return_path(Some(&redirect));

        spawn(async move {
            match login(&api, &request).await {
                Ok(identity) => {
                    session.login(identity);
                    nav.replace(Routes::for_path(&target));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "login failed");
                    error.set(Some(e.user_message()));
                    submitting.set(false);
                }
            }
        });
    };

    let errs = errors();

    rsx! {
        Layout { title: "Sign in",
            div { class: "flex justify-center",
                div { class: "card w-full max-w-md bg-base-100 shadow-xl",
                    form { class: "card-body", onsubmit: on_submit,
                        h2 { class: "card-title", "Sign in" }

                        if let Some(message) = error() {
                            div { class: "alert alert-error", span { "{message}" } }
                        }

                        div { class: "form-control",
                            label { class: "label", span { class: "label-text", "Username" } }
                            input {
                                class: "input input-bordered",
                                autocomplete: "username",
                                value: "{username}",
                                oninput: move |evt| username.set(evt.value()),
                            }
                            FieldError { message: field_error(&errs, "username") }
                        }
                        div { class: "form-control",
                            label { class: "label", span { class: "label-text", "Password" } }
                            input {
                                r#type: "password",
                                class: "input input-bordered",
                                autocomplete: "current-password",
                                value: "{password}",
                                oninput: move |evt| password.set(evt.value()),
                            }
                            FieldError { message: field_error(&errs, "password") }
                        }

                        div { class: "card-actions mt-4",
                            button { r#type: "submit", class: "btn btn-primary w-full", disabled: submitting(),
                                if submitting() {
                                    span { class: "loading loading-spinner" }
                                }
                                "Login"
                            }
                        }
                        p { class: "text-sm text-center mt-2",
                            "No account yet? "
                            Link { to: Routes::RegisterPage {}, class: "link link-primary", "Register" }
                        }
                    }
                }
            }
        }
    }
}
