use dioxus::prelude::*;

/// Dialog shell. While `busy` it cannot be dismissed.
#[component]
pub fn Modal(
    open: bool,
    on_close: EventHandler<()>,
    title: String,
    children: Element,
    actions: Option<Element>,
    #[props(default)] busy: bool,
) -> Element {
    if !open {
        return rsx! {};
    }

    let close = move |_: MouseEvent| {
        if !busy {
            on_close.call(());
        }
    };

    rsx! {
        dialog {
            class: "modal modal-open modal-bottom sm:modal-middle",
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape && !busy {
                    on_close.call(());
                }
            },
            div { class: "modal-box",
                h3 { class: "font-bold text-lg", "{title}" }
                div { class: "py-4", {children} }
                div { class: "modal-action",
                    if let Some(actions) = actions {
                        {actions}
                    }
                    button { class: "btn", disabled: busy, onclick: close, "Close" }
                }
            }
            div { class: "modal-backdrop", onclick: close }
        }
    }
}

/// Yes/no dialog for destructive actions such as deletes and cancellations.
#[component]
pub fn ConfirmDialog(
    open: bool,
    title: String,
    confirm_label: String,
    busy: bool,
    on_confirm: EventHandler<()>,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        Modal {
            open,
            title,
            busy,
            on_close,
            actions: rsx! {
                button { class: "btn btn-error", disabled: busy, onclick: move |_| on_confirm.call(()),
                    if busy {
                        span { class: "loading loading-spinner" }
                    }
                    "{confirm_label}"
                }
            },
            {children}
        }
    }
}
