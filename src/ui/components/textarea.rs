use dioxus::prelude::*;

use crate::ui::components::input::LabelPosition;

#[component]
pub fn TextArea(
    #[props(default, into)] id: String,
    #[props(default, into)] name: String,
    #[props(default, into)] label: String,
    #[props(default)] label_position: LabelPosition,
    #[props(default, into)] placeholder: String,
    #[props(default, into)] default_value: String,
    #[props(default = 4)] rows: u32,
    #[props(default = true)] full_width: bool,
    #[props(default)] disabled: bool,
    #[props(default, into)] class: String,
    on_change: Option<EventHandler<String>>,
) -> Element {
    let layout = match label_position {
        LabelPosition::Top => "bk-textarea--label-top",
        LabelPosition::Left => "bk-textarea--label-left",
    };

    rsx! {
        div { class: "bk-textarea {layout} {class}",
            if !label.is_empty() {
                label { class: "bk-textarea__label", "for": "{id}", "{label}" }
            }
            textarea {
                id: (!id.is_empty()).then(|| id.clone()),
                name: (!name.is_empty()).then(|| name.clone()),
                class: "bk-textarea__control",
                style: full_width.then_some("width: 100%;"),
                placeholder: "{placeholder}",
                rows: "{rows}",
                disabled,
                initial_value: "{default_value}",
                oninput: move |event| {
                    if let Some(handler) = &on_change {
                        handler.call(event.value());
                    }
                },
            }
        }
    }
}
