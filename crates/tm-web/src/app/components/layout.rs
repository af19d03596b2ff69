use dioxus::prelude::*;

use crate::components::{Footer, NavBar};

const APP_NAME: &str = "Travel Management";

/// Page frame: navbar, content column and footer. `title` names the page in
/// the browser tab.
#[component]
pub fn Layout(#[props(default)] title: Option<String>, children: Element) -> Element {
    let tab_title = match title.as_deref() {
        Some(page) => format!("{page} | {APP_NAME}"),
        None => APP_NAME.to_string(),
    };

    rsx! {
        document::Title { "{tab_title}" }
        div { class: "min-h-screen flex flex-col bg-base-200",
            NavBar {}
            main { class: "flex-grow w-full max-w-6xl mx-auto px-4 py-6",
                {children}
            }
            Footer {}
        }
    }
}
