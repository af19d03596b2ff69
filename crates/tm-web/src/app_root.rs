use dioxus::prelude::*;

use crate::{
    ClientConfig, app::{api::ApiClient, auth::context::use_auth_provider, routes::AppRouter}, components::{Toast, use_toast_provider}
};

const DAISYUI_CSS: &str = "https://cdn.jsdelivr.net/npm/daisyui@5";
const TAILWIND_BROWSER: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

/// Root shell: global providers around the router.
#[component]
pub fn app_root() -> Element {
    let config = use_context_provider(ClientConfig::default);
    use_context_provider(|| ApiClient::new(&config));
    use_auth_provider(config.session_key.clone());
    let toast = use_toast_provider();

    rsx! {
        document::Title { "Travel Management" }
        document::Stylesheet { href: DAISYUI_CSS }
        document::Script { src: TAILWIND_BROWSER }
        AppRouter {}
        Toast { message: toast }
    }
}
