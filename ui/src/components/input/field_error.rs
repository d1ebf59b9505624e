use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct FieldErrorProps {
    pub message: Option<String>,
}

/// Error text rendered beneath a form control; renders nothing when the field is valid.
#[component]
pub fn FieldError(props: FieldErrorProps) -> Element {
    match props.message {
        Some(message) => rsx! {
            p {
                class: "field-error",
                role: "alert",
                "{message}"
            }
        },
        None => rsx! {},
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct FormFieldProps {
    pub label: String,
    pub error: Option<String>,
    pub children: Element,
}

/// Label, control and error text for a single field
#[component]
pub fn FormField(props: FormFieldProps) -> Element {
    rsx! {
        div {
            class: "input-section",
            label {
                class: "input-label",
                "{props.label}"
            }
            {props.children}
            FieldError { message: props.error }
        }
    }
}
