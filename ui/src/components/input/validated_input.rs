use dioxus::prelude::*;

use crate::utils::validation::{field_class, field_style};

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum InputType {
    Text,
    Password,
    Email,
    Number,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
            InputType::Email => "email",
            InputType::Number => "number",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub value: String,
    #[props(default)]
    pub placeholder: String,
    pub input_type: InputType,
    /// Current error for the bound field; switches the input to its invalid styling
    pub error: Option<String>,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    let error = props.error.as_deref();

    rsx! {
        input {
            class: field_class(error),
            style: field_style(error),
            r#type: props.input_type.as_str(),
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            aria_invalid: error.is_some(),
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}
