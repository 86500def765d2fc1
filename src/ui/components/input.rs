use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LabelPosition {
    #[default]
    Top,
    Left,
}

impl LabelPosition {
    fn layout_class(self, block: &str) -> String {
        match self {
            LabelPosition::Top => format!("{block}--label-top"),
            LabelPosition::Left => format!("{block}--label-left"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputSize {
    Small,
    #[default]
    Default,
    Large,
}

impl InputSize {
    pub fn class(self) -> &'static str {
        match self {
            InputSize::Small => "bk-input--small",
            InputSize::Default => "bk-input--default",
            InputSize::Large => "bk-input--large",
        }
    }
}

fn full_width_style(full_width: bool) -> Option<&'static str> {
    full_width.then_some("width: 100%;")
}

/// Labelled single-line input. `on_change` fires on every keystroke.
#[component]
pub fn TextInput(
    #[props(default, into)] id: String,
    #[props(default, into)] name: String,
    #[props(default = "text".to_string(), into)] input_type: String,
    #[props(default, into)] label: String,
    #[props(default)] label_position: LabelPosition,
    #[props(default, into)] placeholder: String,
    #[props(default, into)] default_value: String,
    #[props(default)] size: InputSize,
    #[props(default)] full_width: bool,
    #[props(default)] disabled: bool,
    #[props(default, into)] class: String,
    on_change: Option<EventHandler<String>>,
) -> Element {
    let layout = label_position.layout_class("bk-input");

    rsx! {
        div { class: "bk-input {layout} {class}",
            if !label.is_empty() {
                label { class: "bk-input__label", "for": "{id}", "{label}" }
            }
            input {
                id: (!id.is_empty()).then(|| id.clone()),
                name: (!name.is_empty()).then(|| name.clone()),
                r#type: "{input_type}",
                class: "bk-input__control {size.class()}",
                style: full_width_style(full_width),
                placeholder: "{placeholder}",
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
