use dioxus::prelude::*;
use tm_types::{auth::Identity, complaints::Complaint};

use crate::{
    app::{
        api::{complaints::my_complaints, use_api}, auth::{guard::AccessPolicy, hooks::use_current_user}
    }, components::{ComplaintForm, ErrorPanel, Layout, LoadingPanel, RequireRole, StatusBadge}
};

#[component]
pub fn MyComplaintsPage() -> Element {
    let user = use_current_user();

    rsx! {
        Layout { title: "My Complaints",
            RequireRole { policy: AccessPolicy::TRAVELLER_ONLY,
                if let Some(user) = user {
                    Complaints { user }
                }
            }
        }
    }
}

#[component]
fn Complaints(user: Identity) -> Element {
    let api = use_api();
    let username = user.username.clone();

    let mut complaints = use_resource(use_reactive!(|username| {
        let api = api.clone();
        async move { my_complaints(&api, &username).await }
    }));

    rsx! {
        h1 { class: "text-2xl font-bold mb-4", "My Complaints" }
        div { class: "grid gap-6 lg:grid-cols-3",
            div { class: "card bg-base-100 shadow lg:col-span-1",
                div { class: "card-body",
                    h2 { class: "card-title", "New complaint" }
                    ComplaintForm { username: user.username.clone(), on_submitted: move |_| complaints.restart() }
                }
            }
            div { class: "lg:col-span-2",
                match complaints() {
                    None => rsx! { LoadingPanel {} },
                    Some(Err(e)) => rsx! { ErrorPanel { error: e, on_retry: move |_| complaints.restart() } },
                    Some(Ok(list)) if list.is_empty() => rsx! {
                        div { class: "alert", "You have not submitted any complaints." }
                    },
                    Some(Ok(list)) => rsx! {
                        div { class: "flex flex-col gap-4",
                            for complaint in list {
                                ComplaintCard { key: "{complaint.id}", complaint }
                            }
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn ComplaintCard(complaint: Complaint) -> Element {
    let submitted = complaint
        .submitted_at()
        .map(|at| at.format("%b %-d, %Y %H:%M").to_string());
    let about = match (complaint.complaint_type, complaint.entity_name.as_deref()) {
        (Some(kind), Some(name)) => Some(format!("{}: {}", kind.label(), name)),
        (None, Some(name)) => Some(name.to_string()),
        _ => None,
    };

    rsx! {
        div { class: "card bg-base-100 shadow",
            div { class: "card-body",
                div { class: "flex items-start justify-between gap-2",
                    h3 { class: "card-title", "{complaint.subject}" }
                    StatusBadge { status: complaint.status() }
                }
                if let Some(about) = about {
                    p { class: "text-sm opacity-70", "{about}" }
                }
                p { class: "whitespace-pre-line", "{complaint.description}" }
                if let Some(submitted) = submitted {
                    p { class: "text-xs opacity-60", "Submitted {submitted}" }
                }
                if let Some(response) = complaint.response.as_deref() {
                    div { class: "alert alert-info mt-2",
                        div {
                            div { class: "font-semibold", "Response" }
                            p { "{response}" }
                        }
                    }
                }
            }
        }
    }
}
