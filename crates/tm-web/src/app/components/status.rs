use dioxus::prelude::*;
use tm_types::complaints::ComplaintStatus;

use crate::error::ApiError;

#[component]
pub fn LoadingPanel(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div { class: "flex flex-col items-center justify-center gap-2 py-12",
            span { class: "loading loading-spinner loading-lg" }
            span { class: "text-sm opacity-70", "{label}" }
        }
    }
}

/// Inline failure with a manual retry.
#[component]
pub fn ErrorPanel(error: ApiError, on_retry: EventHandler<()>) -> Element {
    let message = error.user_message();
    rsx! {
        div { class: "alert alert-error my-4",
            span { "{message}" }
            button { class: "btn btn-sm", onclick: move |_| on_retry.call(()), "Retry" }
        }
    }
}

#[component]
pub fn StatusBadge(status: ComplaintStatus) -> Element {
    let class = match status {
        ComplaintStatus::Pending => "badge-warning",
        ComplaintStatus::InProgress => "badge-info",
        ComplaintStatus::Resolved => "badge-success",
        ComplaintStatus::Rejected => "badge-error",
    };
    rsx! {
        span { class: "badge {class} whitespace-nowrap", "{status.label()}" }
    }
}
