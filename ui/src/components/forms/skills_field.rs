use dioxus::prelude::*;

use crate::components::input::{FieldError, InputType, ValidatedInput};
use crate::features::login::{LoginFormAction, SkillDraft};

#[derive(Props, PartialEq, Clone)]
pub struct SkillsFieldProps {
    pub skills: Vec<SkillDraft>,
    /// Error per row, aligned with `skills`
    pub errors: Vec<Option<String>>,
    pub dispatch: EventHandler<LoginFormAction>,
}

/// Repeatable skill rows with per-row remove buttons and an append button
#[component]
pub fn SkillsField(props: SkillsFieldProps) -> Element {
    let dispatch = props.dispatch;

    rsx! {
        div {
            class: "skills-section",
            h3 {
                class: "section-title",
                "Skills"
            }

            for (index, skill) in props.skills.iter().enumerate() {
                div {
                    key: "{skill.id}",
                    class: "skill-entry",
                    div {
                        class: "skill-row",
                        ValidatedInput {
                            value: skill.name.clone(),
                            placeholder: "Skill".to_string(),
                            input_type: InputType::Text,
                            error: props.errors.get(index).cloned().flatten(),
                            on_change: move |name: String| {
                                dispatch.call(LoginFormAction::SetSkillName(index, name));
                            }
                        }
                        button {
                            r#type: "button",
                            class: "remove-skill-button",
                            onclick: move |_| dispatch.call(LoginFormAction::RemoveSkill(index)),
                            "X"
                        }
                    }
                    FieldError { message: props.errors.get(index).cloned().flatten() }
                }
            }

            button {
                r#type: "button",
                class: "add-skill-button",
                onclick: move |_| dispatch.call(LoginFormAction::AppendSkill),
                "Add Skill"
            }
        }
    }
}
