use std::time::Duration;

use dioxus::prelude::*;

use crate::app::utils::sleep;

#[derive(Clone, Debug, PartialEq)]
pub enum ToastType {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub message: String,
    pub toast_type: ToastType,
}

/// Handle for raising toasts from anywhere below the app root.
#[derive(Clone, Copy, PartialEq)]
pub struct ToastHandle {
    message: Signal<Option<ToastMessage>>,
}

impl ToastHandle {
    pub fn show(&self, message: impl Into<String>, toast_type: ToastType) {
        let mut signal = self.message;
        signal.set(Some(ToastMessage {
            message: message.into(),
            toast_type,
        }));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, ToastType::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, ToastType::Error);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(message, ToastType::Info);
    }
}

/// Provide the toast handle; render the returned signal with [`Toast`].
pub fn use_toast_provider() -> Signal<Option<ToastMessage>> {
    let message = use_signal(|| None::<ToastMessage>);
    use_context_provider(|| ToastHandle { message });
    message
}

pub fn use_toast() -> ToastHandle {
    use_context::<ToastHandle>()
}

#[component]
pub fn Toast(mut message: Signal<Option<ToastMessage>>) -> Element {
    // Auto-dismiss after 5 seconds when a message is shown
    use_effect(move || {
        if let Some(shown) = message() {
            spawn(async move {
                sleep(Duration::from_secs(5)).await;
                // A newer toast keeps its own full five seconds
                let unchanged = *message.peek() == Some(shown);
                if unchanged {
                    message.set(None);
                }
            });
        }
    });

    let Some(toast) = message() else {
        return rsx! {};
    };

    let alert_class = match toast.toast_type {
        ToastType::Success => "alert-success",
        ToastType::Error => "alert-error",
        ToastType::Warning => "alert-warning",
        ToastType::Info => "alert-info",
    };

    rsx! {
        div { class: "toast toast-bottom toast-end z-50",
            div {
                class: "alert {alert_class}",
                style: "max-width: 30vw; word-wrap: break-word; white-space: normal;",
                span { "{toast.message}" }
                button {
                    class: "btn btn-sm btn-circle btn-ghost ml-2",
                    onclick: move |_| message.set(None),
                    "✕"
                }
            }
        }
    }
}
