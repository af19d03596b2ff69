use dioxus::prelude::*;
use tm_types::{auth::Identity, packages::TravelPackage};

use crate::{
    Routes, app::{
        api::{
            packages::{agency_packages, delete_package}, use_api
        }, auth::{guard::AccessPolicy, hooks::use_current_user}, utils::format_price
    }, components::{ConfirmDialog, ErrorPanel, Layout, LoadingPanel, RequireRole, use_toast}
};

#[component]
pub fn ViewPackagesPage() -> Element {
    let user = use_current_user();

    rsx! {
        Layout { title: "My Packages",
            RequireRole { policy: AccessPolicy::AGENCY_ONLY,
                if let Some(user) = user {
                    AgencyPackages { user }
                }
            }
        }
    }
}

#[component]
fn AgencyPackages(user: Identity) -> Element {
    let api = use_api();
    let toast = use_toast();
    let mut deleting = use_signal(|| None::<TravelPackage>);
    let mut busy = use_signal(|| false);
    let username = user.username.clone();

    let mut packages = use_resource({
        let api = api.clone();
        use_reactive!(|username| {
            let api = api.clone();
            async move { agency_packages(&api, &username).await }
        })
    });

    let confirm_delete = move |_: ()| {
        let Some(package) = deleting() else {
            return;
        };
        busy.set(true);
        let api = api.clone();
        spawn(async move {
            match delete_package(&api, package.id).await {
                Ok(()) => {
                    tracing::info!(package = package.id, "package deleted");
                    toast.success("Package deleted");
                    packages.restart();
                }
                Err(e) => {
                    tracing::warn!(error = %e, package = package.id, "package delete failed");
                    toast.error(e.user_message());
                }
            }
            deleting.set(None);
            busy.set(false);
        });
    };

    let pending_name = deleting().map(|p| p.name).unwrap_or_default();

    rsx! {
        div { class: "flex items-center justify-between mb-4",
            h1 { class: "text-2xl font-bold", "My Packages" }
            Link { to: Routes::CreatePackagePage {}, class: "btn btn-sm btn-primary", "Create Package" }
        }

        match packages() {
            None => rsx! { LoadingPanel {} },
            Some(Err(e)) => rsx! { ErrorPanel { error: e, on_retry: move |_| packages.restart() } },
            Some(Ok(list)) if list.is_empty() => rsx! {
                div { class: "alert", "You have not published any packages yet." }
            },
            Some(Ok(list)) => rsx! {
                div { class: "overflow-x-auto",
                    table { class: "table table-zebra",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Destination" }
                                th { "Price" }
                                th { "Hotels" }
                                th { "Restaurants" }
                                th {}
                            }
                        }
                        tbody {
                            for package in list {
                                tr { key: "{package.id}",
                                    td { class: "font-semibold", "{package.name}" }
                                    td { {package.destination().unwrap_or("-").to_string()} }
                                    td { "{format_price(package.price)}" }
                                    td { "{package.hotels.len()}" }
                                    td { "{package.restaurants.len()}" }
                                    td { class: "flex gap-2 justify-end",
                                        Link { to: Routes::EditPackagePage { id: package.id }, class: "btn btn-xs btn-outline", "Edit" }
                                        button {
                                            class: "btn btn-xs btn-error btn-outline",
                                            onclick: {
                                                let package = package.clone();
                                                move |_| deleting.set(Some(package.clone()))
                                            },
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
        }

        ConfirmDialog {
            open: deleting().is_some(),
            title: "Delete package",
            confirm_label: "Delete",
            busy: busy(),
            on_confirm: confirm_delete,
            on_close: move |_| deleting.set(None),
            p { "Delete \"{pending_name}\"? Travellers will no longer be able to book it." }
        }
    }
}
