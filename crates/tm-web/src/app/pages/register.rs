use std::{collections::HashMap, str::FromStr};

use dioxus::prelude::*;
use tm_types::{
    auth::{RegisterRequest, Role}, validation::{RegistrationInput, format_errors}
};

use crate::{
    Routes, app::{
        api::{auth::register, use_api}, auth::hooks::{use_auth, use_session}
    }, components::{FieldError, Layout, field_error, use_toast}
};

/// Roles open to self-registration.
const REGISTRABLE: [Role; 2] = [Role::Traveller, Role::TravelAgency];

#[component]
pub fn RegisterPage() -> Element {
    let api = use_api();
    let auth = use_auth();
    let session = use_session();
    let toast = use_toast();
    let nav = navigator();

    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut role = use_signal(|| Role::Traveller);
    let mut agency_name = use_signal(String::new);
    let mut errors = use_signal(HashMap::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

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

        let (username_val, email_val, password_val, confirm_val, agency_val) =
            (username(), email(), password(), confirm_password(), agency_name());
        let field_errors = RegistrationInput {
            username: &username_val,
            email: &email_val,
            password: &password_val,
            confirm_password: &confirm_val,
            role: role(),
            travel_agency_name: &agency_val,
        }
        .validate();
        if !field_errors.is_empty() {
            tracing::debug!(errors = %format_errors(&field_errors), "form rejected");
            errors.set(field_errors);
            return;
        }
        errors.set(HashMap::new());
        error.set(None);
        submitting.set(true);

        let request = RegisterRequest {
            username: username_val.trim().to_string(),
            email: email_val.trim().to_string(),
            password: password_val,
            role: role(),
            travel_agency_name: (role() == Role::TravelAgency).then(|| agency_val.trim().to_string()),
        };
        let api = api.clone();
        let session = session.clone();

        spawn(async move {
            match register(&api, &request).await {
                Ok(identity) => {
                    tracing::info!(user = %identity, "registered and signed in");
                    toast.success(format!("Welcome, {}!", identity.display_name()));
                    session.login(identity);
                    nav.replace(Routes::HomePage {});
                }
                Err(e) => {
                    tracing::warn!(error = %e, "registration failed");
                    error.set(Some(e.user_message()));
                    submitting.set(false);
                }
            }
        });
    };

    let errs = errors();

    rsx! {
        Layout { title: "Register",
            div { class: "flex justify-center",
                div { class: "card w-full max-w-md bg-base-100 shadow-xl",
                    form { class: "card-body", onsubmit: on_submit,
                        h2 { class: "card-title", "Create an account" }

                        if let Some(message) = error() {
                            div { class: "alert alert-error", span { "{message}" } }
                        }

                        div { class: "form-control",
                            label { class: "label", span { class: "label-text", "Account type" } }
                            select {
                                class: "select select-bordered",
                                onchange: move |evt| {
                                    if let Ok(selected) = Role::from_str(&evt.value()) {
                                        role.set(selected);
                                    }
                                },
                                for option_role in REGISTRABLE {
                                    option { value: option_role.as_str(), selected: option_role == role(), "{option_role.label()}" }
                                }
                            }
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
                            label { class: "label", span { class: "label-text", "Email" } }
                            input {
                                r#type: "email",
                                class: "input input-bordered",
                                value: "{email}",
                                oninput: move |evt| email.set(evt.value()),
                            }
                            FieldError { message: field_error(&errs, "email") }
                        }
                        if role() == Role::TravelAgency {
                            div { class: "form-control",
                                label { class: "label", span { class: "label-text", "Agency name" } }
                                input {
                                    class: "input input-bordered",
                                    value: "{agency_name}",
                                    oninput: move |evt| agency_name.set(evt.value()),
                                }
                                FieldError { message: field_error(&errs, "travel_agency_name") }
                            }
                        }
                        div { class: "form-control",
                            label { class: "label", span { class: "label-text", "Password" } }
                            input {
                                r#type: "password",
                                class: "input input-bordered",
                                autocomplete: "new-password",
                                value: "{password}",
                                oninput: move |evt| password.set(evt.value()),
                            }
                            FieldError { message: field_error(&errs, "password") }
                        }
                        div { class: "form-control",
                            label { class: "label", span { class: "label-text", "Confirm password" } }
                            input {
                                r#type: "password",
                                class: "input input-bordered",
                                autocomplete: "new-password",
                                value: "{confirm_password}",
                                oninput: move |evt| confirm_password.set(evt.value()),
                            }
                            FieldError { message: field_error(&errs, "confirm_password") }
                        }

                        div { class: "card-actions mt-4",
                            button { r#type: "submit", class: "btn btn-primary w-full", disabled: submitting(),
                                if submitting() {
                                    span { class: "loading loading-spinner" }
                                }
                                "Register"
                            }
                        }
                        p { class: "text-sm text-center mt-2",
                            "Already registered? "
                            Link { to: Routes::login_then(String::new()), class: "link link-primary", "Login" }
                        }
                    }
                }
            }
        }
    }
}
