use std::str::FromStr;

use dioxus::prelude::*;
use tm_types::complaints::{Complaint, ComplaintStatus, ComplaintStatusUpdate};

use crate::{
    app::{
        api::{
            complaints::{all_complaints, update_complaint_status}, use_api
        }, auth::guard::AccessPolicy
    }, components::{ErrorPanel, Layout, LoadingPanel, Modal, RequireRole, StatusBadge, use_toast}
};

#[component]
pub fn ManageComplaintsPage() -> Element {
    rsx! {
        Layout { title: "Complaints",
            RequireRole { policy: AccessPolicy::ADMIN_ONLY,
                ComplaintQueue {}
            }
        }
    }
}

/// Complaints shown under `filter`, newest first. `None` shows everything.
fn filter_complaints(mut complaints: Vec<Complaint>, filter: Option<ComplaintStatus>) -> Vec<Complaint> {
    complaints.retain(|c| filter.is_none_or(|status| c.status() == status));
    complaints.sort_by(|a, b| b.submitted_at().cmp(&a.submitted_at()).then(b.id.cmp(&a.id)));
    complaints
}

#[component]
fn ComplaintQueue() -> Element {
    let api = use_api();
    let toast = use_toast();

    let mut filter = use_signal(|| None::<ComplaintStatus>);
    let mut responding = use_signal(|| None::<Complaint>);
    let mut new_status = use_signal(ComplaintStatus::default);
    let mut response = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let mut complaints = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { all_complaints(&api).await }
        }
    });

    let submit = move |_: MouseEvent| {
        let Some(complaint) = responding() else {
            return;
        };
        let update = ComplaintStatusUpdate {
            status: new_status(),
            response: Some(response()),
        };
        busy.set(true);
        let api = api.clone();

        spawn(async move {
            match update_complaint_status(&api, complaint.id, &update).await {
                Ok(()) => {
                    tracing::info!(complaint = complaint.id, status = %update.status, "complaint updated");
                    toast.success(format!("Complaint marked {}", update.status.label()));
                    responding.set(None);
                    complaints.restart();
                }
                Err(e) => {
                    tracing::warn!(error = %e, complaint = complaint.id, "complaint update failed");
                    toast.error(e.user_message());
                }
            }
            busy.set(false);
        });
    };

    let subject = responding().map(|c| c.subject).unwrap_or_default();

    rsx! {
        div { class: "flex flex-wrap items-center justify-between gap-2 mb-4",
            h1 { class: "text-2xl font-bold", "Complaints" }
            select {
                class: "select select-bordered select-sm",
                onchange: move |evt| filter.set(ComplaintStatus::from_str(&evt.value()).ok()),
                option { value: "", selected: filter().is_none(), "All statuses" }
                for status in ComplaintStatus::ALL {
                    option { value: status.as_str(), selected: filter() == Some(status), "{status.label()}" }
                }
            }
        }

        match complaints() {
            None => rsx! { LoadingPanel {} },
            Some(Err(e)) => rsx! { ErrorPanel { error: e, on_retry: move |_| complaints.restart() } },
            Some(Ok(list)) => {
                let shown = filter_complaints(list, filter());
                rsx! {
                    if shown.is_empty() {
                        div { class: "alert", "No complaints to show." }
                    }
                    div { class: "overflow-x-auto",
                        table { class: "table",
                            thead {
                                tr {
                                    th { "Subject" }
                                    th { "From" }
                                    th { "About" }
                                    th { "Submitted" }
                                    th { "Status" }
                                    th {}
                                }
                            }
                            tbody {
                                for complaint in shown {
                                    tr { key: "{complaint.id}",
                                        td {
                                            div { class: "font-semibold", "{complaint.subject}" }
                                            div { class: "text-sm opacity-70 max-w-md whitespace-pre-line", "{complaint.description}" }
                                        }
                                        td { {complaint.username.clone().unwrap_or_default()} }
                                        td {
                                            if let Some(kind) = complaint.complaint_type {
                                                div { class: "text-xs opacity-60", "{kind.label()}" }
                                            }
                                            {complaint.entity_name.clone().unwrap_or_default()}
                                        }
                                        td {
                                            {complaint.submitted_at().map(|at| at.format("%b %-d, %Y").to_string()).unwrap_or_default()}
                                        }
                                        td { StatusBadge { status: complaint.status() } }
                                        td {
                                            button {
                                                class: "btn btn-xs btn-outline",
                                                onclick: {
                                                    let complaint = complaint.clone();
                                                    move |_| {
                                                        new_status.set(complaint.status());
                                                        response.set(complaint.response.clone().unwrap_or_default());
                                                        responding.set(Some(complaint.clone()));
                                                    }
                                                },
                                                "Respond"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        Modal {
            open: responding().is_some(),
            on_close: move |_| responding.set(None),
            title: "Respond to \"{subject}\"",
            actions: rsx! {
                button { class: "btn btn-primary", disabled: busy(), onclick: submit,
                    if busy() {
                        span { class: "loading loading-spinner" }
                    }
                    "Update"
                }
            },
            div { class: "form-control",
                label { class: "label", span { class: "label-text", "Status" } }
                select {
                    class: "select select-bordered",
                    onchange: move |evt| {
                        if let Ok(status) = ComplaintStatus::from_str(&evt.value()) {
                            new_status.set(status);
                        }
                    },
                    for status in ComplaintStatus::ALL {
                        option { value: status.as_str(), selected: new_status() == status, "{status.label()}" }
                    }
                }
            }
            div { class: "form-control mt-2",
                label { class: "label", span { class: "label-text", "Response to the traveller" } }
                textarea {
                    class: "textarea textarea-bordered h-24",
                    value: "{response}",
                    oninput: move |evt| response.set(evt.value()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complaint(id: i64, status: Option<ComplaintStatus>, created_at: Option<&str>) -> Complaint {
        Complaint {
            id,
            subject: format!("Complaint {}", id),
            description: String::new(),
            status,
            response: None,
            created_at: created_at.map(str::to_string),
            resolved_at: None,
            user_id: None,
            username: Some("ana".to_string()),
            complaint_type: None,
            entity_name: None,
        }
    }

    #[test]
    fn test_filter_treats_missing_status_as_pending() {
        let list = vec![
            complaint(1, None, None),
            complaint(2, Some(ComplaintStatus::Resolved), None),
            complaint(3, Some(ComplaintStatus::Pending), None),
        ];
        let pending: Vec<i64> = filter_complaints(list.clone(), Some(ComplaintStatus::Pending))
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(pending, vec![3, 1]);
        assert_eq!(filter_complaints(list, None).len(), 3);
    }

    #[test]
    fn test_newest_first() {
        let list = vec![
            complaint(1, None, Some("2026-03-01T10:00:00")),
            complaint(2, None, Some("2026-03-05T09:30:00.123")),
            complaint(3, None, None),
        ];
        let order: Vec<i64> = filter_complaints(list, None).iter().map(|c| c.id).collect();
        assert_eq!(order, vec![2, 1, 3]);
    }
}
