use dioxus::prelude::*;

use crate::ui::state::app_state::AppState;

/// Keys that dismiss the header menu.
pub fn closes_menu(key: &Key) -> bool {
    *key == Key::Escape
}

/// Hamburger toggle plus its dropdown. Outside clicks and Escape are handled by the shell.
#[component]
pub fn HeaderDropdown() -> Element {
    let app = use_context::<AppState>();
    let mut menu_open = app.menu_open;
    let mut modal_open = app.modal_open;
    let status = app.status;
    let open = menu_open();

    rsx! {
        header { class: "shell__header d-flex align-items-center justify-content-between px-3",
            div { class: "shell__brand fw-semibold", "Compliance Frameworks" }
            span { class: "shell__status small text-muted", "{status}" }
            div { class: "position-relative",
                button {
                    id: "hamburger-toggle",
                    r#type: "button",
                    class: if open { "hamburger active" } else { "hamburger" },
                    "aria-label": "Toggle menu",
                    "aria-expanded": "{open}",
                    onclick: move |event| {
                        event.prevent_default();
                        event.stop_propagation();
                        let current = *menu_open.peek();
                        menu_open.set(!current);
                    },
                    span {}
                    span {}
                    span {}
                }
                div {
                    id: "header-dropdown",
                    class: if open { "header-dropdown show" } else { "header-dropdown" },
                    onclick: move |event| event.stop_propagation(),
                    button {
                        id: "add-custom-framework-mobile",
                        r#type: "button",
                        class: "btn btn-link",
                        onclick: move |_| {
                            menu_open.set(false);
                            modal_open.set(true);
                        },
                        "Add custom framework"
                    }
                }
            }
        }
    }
}
