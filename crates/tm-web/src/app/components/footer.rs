use dioxus::prelude::*;
use tracing::level_filters::LevelFilter;

use crate::app::logging::{get_log_level, level_name, parse_level, set_log_level};

const LEVELS: [LevelFilter; 5] = [LevelFilter::ERROR, LevelFilter::WARN, LevelFilter::INFO, LevelFilter::DEBUG, LevelFilter::TRACE];

#[component]
pub fn Footer() -> Element {
    let mut level = use_signal(get_log_level);

    rsx! {
        footer { class: "footer footer-center text-base-content p-4",
            aside {
                p { "Travel Management - plan, book and share your journeys" }
            }
            label { class: "flex items-center gap-2 text-xs opacity-60",
                "Console log level"
                select {
                    class: "select select-xs select-ghost",
                    onchange: move |evt| {
                        if let Some(selected) = parse_level(&evt.value()) {
                            set_log_level(selected);
                            level.set(selected);
                        }
                    },
                    for option_level in LEVELS {
                        option {
                            value: level_name(option_level),
                            selected: level() == option_level,
                            "{level_name(option_level)}"
                        }
                    }
                }
            }
        }
    }
}
