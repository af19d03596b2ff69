use dioxus::prelude::*;

use crate::app::api::{destinations::list_destinations, use_api};

/// Optional destination picker for hotels and restaurants.
#[component]
pub(super) fn DestinationSelect(selected: Option<i64>, on_change: EventHandler<Option<i64>>) -> Element {
    let api = use_api();

    let destinations = use_resource(move || {
        let api = api.clone();
        async move { list_destinations(&api).await }
    });

    rsx! {
        div { class: "form-control",
            label { class: "label", span { class: "label-text", "Destination (optional)" } }
            match destinations() {
                Some(Ok(list)) => rsx! {
                    select {
                        class: "select select-bordered",
                        onchange: move |evt| on_change.call(evt.value().parse().ok()),
                        option { value: "", selected: selected.is_none(), "None" }
                        for destination in list {
                            option {
                                key: "{destination.id}",
                                value: "{destination.id}",
                                selected: selected == Some(destination.id),
                                "{destination.name}, {destination.country}"
                            }
                        }
                    }
                },
                Some(Err(e)) => rsx! {
                    span { class: "label-text-alt text-warning", "Destinations unavailable: {e.user_message()}" }
                },
                None => rsx! { span { class: "loading loading-dots loading-sm" } },
            }
        }
    }
}
