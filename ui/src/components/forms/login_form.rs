use dioxus::prelude::*;

use crate::components::forms::SkillsField;
use crate::components::input::{FieldError, FormField, InputType, ValidatedInput};
use crate::config::FormConfig;
use crate::features::login::*;
use crate::utils::log_payload;
use crate::utils::validation::{field_class, field_style};
use crate::console_debug;

const LOGIN_FORM_CSS: Asset = asset!("/assets/styling/login_form.css");

#[derive(Props, PartialEq, Clone)]
pub struct LoginFormProps {
    /// Validation triggers; defaults to validate on submit, then on every change
    pub config: Option<FormConfig>,
    /// Receives the validated payload. Without it the payload is logged to the console.
    pub on_submit: Option<EventHandler<LoginFormData>>,
}

fn error_at(state: &LoginFormState, path: &str) -> Option<String> {
    state.error_for(&FieldPath::new(path)).map(str::to_string)
}

#[component]
pub fn LoginForm(props: LoginFormProps) -> Element {
    let config = props.config.unwrap_or_default();
    let on_submit = props.on_submit;
    let mut state = use_signal(move || LoginFormState::new(config));

    // Reduce in place so the signal keeps its subscribers
    let dispatch = EventHandler::new(move |action: LoginFormAction| {
        state.with_mut(|s| s.reduce_in_place(action));
    });

    let current = state();
    let department_error = error_at(&current, "department");
    let skill_errors: Vec<Option<String>> = (0..current.draft.skills.len())
        .map(|index| current.error_for(&FieldPath::skill_name(index)).map(str::to_string))
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: LOGIN_FORM_CSS }

        form {
            class: "login-form",
            novalidate: true,
            onsubmit: move |event: FormEvent| {
                event.prevent_default();

                let mut accepted = None;
                state.with_mut(|s| {
                    s.submit(|data| accepted = Some(data));
                });

                match accepted {
                    Some(data) => match on_submit {
                        Some(handler) => handler.call(data),
                        None => log_payload("✅ Form Submitted:", &data),
                    },
                    None => {
                        console_debug!(
                            "[LoginForm] Submission blocked by {} field error(s)",
                            state.read().errors.len()
                        );
                    }
                }
            },

            h2 {
                class: "form-title",
                "Complex Form"
            }

            FormField {
                label: "Name".to_string(),
                error: error_at(&current, "name"),
                ValidatedInput {
                    value: current.draft.name.clone(),
                    input_type: InputType::Text,
                    error: error_at(&current, "name"),
                    on_change: move |value: String| dispatch.call(LoginFormAction::SetName(value))
                }
            }

            FormField {
                label: "Email".to_string(),
                error: error_at(&current, "email"),
                ValidatedInput {
                    value: current.draft.email.clone(),
                    input_type: InputType::Email,
                    error: error_at(&current, "email"),
                    on_change: move |value: String| dispatch.call(LoginFormAction::SetEmail(value))
                }
            }

            FormField {
                label: "Password".to_string(),
                error: error_at(&current, "password"),
                ValidatedInput {
                    value: current.draft.password.clone(),
                    input_type: InputType::Password,
                    error: error_at(&current, "password"),
                    on_change: move |value: String| dispatch.call(LoginFormAction::SetPassword(value))
                }
            }

            FormField {
                label: "Age".to_string(),
                error: error_at(&current, "age"),
                ValidatedInput {
                    value: current.draft.age.clone(),
                    input_type: InputType::Number,
                    error: error_at(&current, "age"),
                    on_change: move |value: String| dispatch.call(LoginFormAction::SetAge(value))
                }
            }

            FormField {
                label: "Department".to_string(),
                error: department_error.clone(),
                select {
                    class: field_class(department_error.as_deref()),
                    style: field_style(department_error.as_deref()),
                    value: "{current.draft.department}",
                    onchange: move |event| dispatch.call(LoginFormAction::SetDepartment(event.value())),
                    option { value: "", "Select..." }
                    for department in Department::ALL {
                        option {
                            key: "{department}",
                            value: department.as_str(),
                            selected: current.draft.department == department.as_str(),
                            "{department}"
                        }
                    }
                }
            }

            FormField {
                label: "Gender".to_string(),
                error: error_at(&current, "gender"),
                div {
                    class: "radio-group",
                    for gender in [Gender::Male, Gender::Female] {
                        label {
                            key: "{gender.as_str()}",
                            input {
                                r#type: "radio",
                                name: "gender",
                                value: gender.as_str(),
                                checked: current.draft.gender == Some(gender),
                                onchange: move |_| dispatch.call(LoginFormAction::SetGender(gender))
                            }
                            " {gender.label()}"
                        }
                    }
                }
            }

            div {
                class: "input-section",
                label {
                    class: "checkbox-label",
                    input {
                        r#type: "checkbox",
                        checked: current.draft.agree_to_terms,
                        onchange: move |event| dispatch.call(LoginFormAction::SetAgreeToTerms(event.checked()))
                    }
                    " I agree to the terms"
                }
                FieldError { message: error_at(&current, "agreeToTerms") }
            }

            div {
                class: "input-section",
                h3 {
                    class: "section-title",
                    "Address"
                }
                ValidatedInput {
                    value: current.draft.address.street.clone(),
                    placeholder: "Street".to_string(),
                    input_type: InputType::Text,
                    error: error_at(&current, "address.street"),
                    on_change: move |value: String| dispatch.call(LoginFormAction::SetStreet(value))
                }
                FieldError { message: error_at(&current, "address.street") }
                ValidatedInput {
                    value: current.draft.address.city.clone(),
                    placeholder: "City".to_string(),
                    input_type: InputType::Text,
                    error: error_at(&current, "address.city"),
                    on_change: move |value: String| dispatch.call(LoginFormAction::SetCity(value))
                }
                FieldError { message: error_at(&current, "address.city") }
            }

            SkillsField {
                skills: current.draft.skills.clone(),
                errors: skill_errors,
                dispatch: dispatch
            }

            div {
                class: "button-section",
                button {
                    r#type: "submit",
                    class: "submit-button",
                    "Submit"
                }
            }
        }
    }
}
