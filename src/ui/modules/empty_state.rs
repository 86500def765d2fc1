use dioxus::prelude::*;

use crate::ui::state::app_state::AppState;

const EMPTY_ICON_PATH: &str = "M0 56H28.8V84.8H0M67.2 27.2H38.4V36.8H67.2M0 36.8H28.8V8H0M38.4 8V17.6H96V8M38.4 84.8H67.2V75.2H38.4M38.4 65.6H96V56H38.4";

#[component]
pub fn EmptyState() -> Element {
    let app = use_context::<AppState>();
    let mut modal_open = app.modal_open;

    rsx! {
        div { class: "empty-state-container",
            div { class: "empty-state-icon",
                svg {
                    "width": "96",
                    "height": "96",
                    "viewBox": "0 0 96 96",
                    "fill": "none",
                    "xmlns": "http://www.w3.org/2000/svg",
                    path { "d": EMPTY_ICON_PATH, "fill": "#212529" }
                }
            }
            div { class: "empty-state-content",
                h3 { class: "empty-state-title", "Please select framework from list in left side" }
                p { class: "empty-state-description",
                    "or "
                    span {
                        id: "add-new-framework-link",
                        class: "empty-state-link",
                        onclick: move |event| {
                            event.prevent_default();
                            modal_open.set(true);
                        },
                        "click here"
                    }
                    " to add new framework"
                }
            }
        }
    }
}
