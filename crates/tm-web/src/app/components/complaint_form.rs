use std::{collections::HashMap, str::FromStr};

use dioxus::prelude::*;
use tm_types::{
    complaints::{ComplaintType, NewComplaint}, validation::{COMPLAINT_DESCRIPTION_MAX, ComplaintInput, ValidationError}
};

use crate::{
    app::api::{
        ApiClient, auth::list_agencies, complaints::submit_complaint, packages::list_packages, restaurants::list_restaurants, use_api
    }, components::{FieldError, field_error, use_toast}, error::ApiError
};

/// Names a complaint of `kind` can be about.
async fn entity_names(api: &ApiClient, kind: ComplaintType) -> Result<Vec<String>, ApiError> {
    let mut names: Vec<String> = match kind {
        ComplaintType::Restaurant => list_restaurants(api).await?.into_iter().map(|r| r.name).collect(),
        ComplaintType::TravelPackage => list_packages(api).await?.into_iter().map(|p| p.name).collect(),
        ComplaintType::TravelAgency => list_agencies(api)
            .await?
            .into_iter()
            .map(|a| a.display_name().to_string())
            .collect(),
    };
    names.sort();
    names.dedup();
    Ok(names)
}

/// Complaint submission form for the signed-in traveller.
#[component]
pub fn ComplaintForm(username: String, on_submitted: EventHandler<()>) -> Element {
    let api = use_api();
    let toast = use_toast();

    let mut complaint_type = use_signal(|| ComplaintType::TravelPackage);
    let mut entity_name = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut errors = use_signal(HashMap::<String, ValidationError>::new);
    let mut submitting = use_signal(|| false);

    let entities = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            let kind = complaint_type();
            async move { entity_names(&api, kind).await }
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if submitting() {
            return;
        }

        let subject_val = subject();
        let description_val = description();
        let entity_val = entity_name();

        let field_errors = ComplaintInput {
            subject: &subject_val,
            description: &description_val,
            entity_name: &entity_val,
        }
        .validate();
        if !field_errors.is_empty() {
            errors.set(field_errors);
            return;
        }
        errors.set(HashMap::new());
        submitting.set(true);

        let complaint = NewComplaint {
            subject: subject_val.trim().to_string(),
            description: description_val.trim().to_string(),
            complaint_type: complaint_type(),
            entity_name: entity_val,
            username: username.clone(),
        };
        let api = api.clone();

        spawn(async move {
            match submit_complaint(&api, &complaint).await {
                Ok(()) => {
                    toast.success("Complaint submitted");
                    subject.set(String::new());
                    description.set(String::new());
                    entity_name.set(String::new());
                    on_submitted.call(());
                }
                Err(e) => {
                    tracing::warn!(error = %e, "complaint submission failed");
                    toast.error(e.user_message());
                }
            }
            submitting.set(false);
        });
    };

    let errs = errors();
    let remaining = COMPLAINT_DESCRIPTION_MAX as i64 - description().chars().count() as i64;

    rsx! {
        form { class: "flex flex-col gap-3", onsubmit: on_submit,
            div { class: "form-control",
                label { class: "label", span { class: "label-text", "About" } }
                select {
                    class: "select select-bordered",
                    onchange: move |evt| {
                        if let Ok(kind) = ComplaintType::from_str(&evt.value()) {
                            complaint_type.set(kind);
                            entity_name.set(String::new());
                        }
                    },
                    for kind in ComplaintType::ALL {
                        option { value: kind.as_str(), selected: kind == complaint_type(), "{kind.label()}" }
                    }
                }
            }

            div { class: "form-control",
                label { class: "label", span { class: "label-text", "{complaint_type().label()}" } }
                match entities() {
                    Some(Ok(names)) => rsx! {
                        select {
                            class: "select select-bordered",
                            value: "{entity_name}",
                            onchange: move |evt| entity_name.set(evt.value()),
                            option { value: "", disabled: true, selected: entity_name().is_empty(), "Select..." }
                            for name in names.iter() {
                                option { key: "{name}", value: "{name}", "{name}" }
                            }
                        }
                    },
                    // Lists are a convenience; typing the name works too
                    Some(Err(_)) => rsx! {
                        input {
                            class: "input input-bordered",
                            value: "{entity_name}",
                            oninput: move |evt| entity_name.set(evt.value()),
                        }
                    },
                    None => rsx! { span { class: "loading loading-dots loading-sm" } },
                }
                FieldError { message: field_error(&errs, "entity_name") }
            }

            div { class: "form-control",
                label { class: "label", span { class: "label-text", "Subject" } }
                input {
                    class: "input input-bordered",
                    value: "{subject}",
                    oninput: move |evt| subject.set(evt.value()),
                }
                FieldError { message: field_error(&errs, "subject") }
            }

            div { class: "form-control",
                label { class: "label",
                    span { class: "label-text", "Description" }
                    span { class: if remaining < 0 { "label-text-alt text-error" } else { "label-text-alt" }, "{remaining} characters left" }
                }
                textarea {
                    class: "textarea textarea-bordered h-32",
                    value: "{description}",
                    oninput: move |evt| description.set(evt.value()),
                }
                FieldError { message: field_error(&errs, "description") }
            }

            button { r#type: "submit", class: "btn btn-primary", disabled: submitting(),
                if submitting() {
                    span { class: "loading loading-spinner" }
                }
                "Submit Complaint"
            }
        }
    }
}
