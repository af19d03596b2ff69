use dioxus::prelude::*;

use crate::{Routes, components::Layout};

#[component]
pub fn NotFoundPage(route: Vec<String>) -> Element {
    let path = route.join("/");
    rsx! {
        Layout { title: "Not found",
            div { class: "hero min-h-[50vh]",
                div { class: "hero-content text-center",
                    div {
                        h1 { class: "text-5xl font-bold", "404" }
                        p { class: "py-6", "Nothing here: /{path}" }
                        Link { to: Routes::HomePage {}, class: "btn btn-primary", "Go Home" }
                    }
                }
            }
        }
    }
}
