use dioxus::prelude::*;

use crate::{Routes, app::auth::hooks::use_current_user, components::Layout};

#[component]
pub fn AccessDeniedPage() -> Element {
    let user = use_current_user();

    rsx! {
        Layout { title: "Access denied",
            div { class: "hero min-h-[50vh]",
                div { class: "hero-content text-center",
                    div {
                        h1 { class: "text-5xl font-bold", "Access denied" }
                        p { class: "py-6",
                            "This page is only available to travellers."
                            if let Some(user) = user {
                                " You are signed in as {user.username} ({user.role.label()})."
                            }
                        }
                        Link { to: Routes::HomePage {}, class: "btn btn-primary", "Go Home" }
                    }
                }
            }
        }
    }
}
