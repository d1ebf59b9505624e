use std::collections::BTreeSet;

use tracing::{debug, instrument};

use super::errors::{FieldErrors, FieldPath};
use super::schema::validate;
use super::types::*;
use crate::config::FormConfig;

/// Draft plus the validation bookkeeping the form renders from
#[derive(Clone, PartialEq, Debug, Default)]
pub struct LoginFormState {
    pub draft: LoginFormDraft,
    pub errors: FieldErrors,
    /// Set by the first submit attempt
    pub submitted: bool,
    pub submit_count: u32,
    pub config: FormConfig,
    touched: BTreeSet<FieldPath>,
    // Keyed by skill id so removals don't shift them
    touched_skills: BTreeSet<u64>,
}

impl LoginFormState {
    pub fn new(config: FormConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Applies one user action to the draft, revalidating when the trigger mode asks for it
    pub fn reduce_in_place(&mut self, action: LoginFormAction) {
        match action {
            LoginFormAction::SetName(name) => {
                self.draft.name = name;
                self.touch("name");
            }
            LoginFormAction::SetEmail(email) => {
                self.draft.email = email;
                self.touch("email");
            }
            LoginFormAction::SetPassword(password) => {
                self.draft.password = password;
                self.touch("password");
            }
            LoginFormAction::SetAge(age) => {
                self.draft.age = age;
                self.touch("age");
            }
            LoginFormAction::SetDepartment(department) => {
                self.draft.department = department;
                self.touch("department");
            }
            LoginFormAction::SetGender(gender) => {
                self.draft.gender = Some(gender);
                self.touch("gender");
            }
            LoginFormAction::SetAgreeToTerms(agreed) => {
                self.draft.agree_to_terms = agreed;
                self.touch("agreeToTerms");
            }
            LoginFormAction::SetStreet(street) => {
                self.draft.address.street = street;
                self.touch("address.street");
            }
            LoginFormAction::SetCity(city) => {
                self.draft.address.city = city;
                self.touch("address.city");
            }
            LoginFormAction::SetSkillName(index, name) => {
                if let Some(skill) = self.draft.skills.get(index) {
                    self.touched_skills.insert(skill.id);
                }
                self.draft.set_skill_name(index, name);
            }
            LoginFormAction::AppendSkill => {
                self.draft.append_skill();
            }
            LoginFormAction::RemoveSkill(index) => {
                if let Some(removed) = self.draft.remove_skill(index) {
                    self.touched_skills.remove(&removed.id);
                }
            }
        }

        if self.config.validates_on_change(self.submitted) {
            self.refresh_errors();
        }
    }

    /// Validates the full draft. Calls `on_valid` exactly once when every field
    /// passes; otherwise stores the errors and leaves `on_valid` uncalled.
    #[instrument(skip_all, fields(attempt = self.submit_count + 1))]
    pub fn submit(&mut self, on_valid: impl FnOnce(LoginFormData)) -> bool {
        self.submitted = true;
        self.submit_count += 1;

        match validate(&self.draft) {
            Ok(data) => {
                self.errors = FieldErrors::new();
                on_valid(data);
                true
            }
            Err(errors) => {
                debug!(failed = errors.len(), "submission blocked");
                self.errors = errors;
                false
            }
        }
    }

    pub fn error_for(&self, path: &FieldPath) -> Option<&str> {
        self.errors.get(path)
    }

    fn touch(&mut self, path: &str) {
        self.touched.insert(FieldPath::new(path));
    }

    fn is_touched(&self, path: &FieldPath) -> bool {
        match path.skill_index() {
            Some(index) => self
                .draft
                .skills
                .get(index)
                .is_some_and(|skill| self.touched_skills.contains(&skill.id)),
            None => self.touched.contains(path),
        }
    }

    fn refresh_errors(&mut self) {
        let mut errors = validate(&self.draft).err().unwrap_or_default();
        // Before the first submit only fields the user has edited report errors
        if !self.submitted {
            errors.retain(|path| self.is_touched(path));
        }
        self.errors = errors;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValidationMode;
    use crate::features::login::fixtures::valid_draft;
    use crate::features::login::schema::*;

    fn valid_state() -> LoginFormState {
        LoginFormState {
            draft: valid_draft(),
            ..LoginFormState::default()
        }
    }

    fn submit_collecting(state: &mut LoginFormState) -> Vec<LoginFormData> {
        let mut received = Vec::new();
        state.submit(|data| received.push(data));
        received
    }

    #[test]
    fn test_valid_submit_calls_handler_once() {
        let mut state = valid_state();
        let received = submit_collecting(&mut state);

        assert_eq!(received.len(), 1);
        assert_eq!(received[0].age, 20.0);
        assert_eq!(received[0].department, Department::It);
        assert_eq!(received[0].skills, vec![Skill { name: "Go".to_string() }]);
        assert!(state.errors.is_empty());
        assert_eq!(state.submit_count, 1);
    }

    #[test]
    fn test_invalid_submit_never_calls_handler() {
        let mut state = LoginFormState::default();
        let received = submit_collecting(&mut state);

        assert!(received.is_empty());
        assert!(state.submitted);
        assert_eq!(state.error_for(&"name".into()), Some(NAME_TOO_SHORT));
        assert_eq!(
            state.error_for(&FieldPath::skill_name(0)),
            Some(SKILL_REQUIRED)
        );
    }

    #[test]
    fn test_underage_blocks_submission() {
        let mut state = valid_state();
        state.reduce_in_place(LoginFormAction::SetAge("17".to_string()));

        assert!(submit_collecting(&mut state).is_empty());
        assert_eq!(state.error_for(&"age".into()), Some(AGE_TOO_LOW));
    }

    #[test]
    fn test_unchecked_terms_block_submission() {
        let mut state = valid_state();
        state.reduce_in_place(LoginFormAction::SetAgreeToTerms(false));

        assert!(!state.submit(|_| panic!("handler must not run")));
        assert_eq!(state.error_for(&"agreeToTerms".into()), Some(TERMS_REQUIRED));
        assert_eq!(state.errors.len(), 1);
    }

    #[test]
    fn test_no_errors_before_first_submit() {
        let mut state = LoginFormState::default();
        state.reduce_in_place(LoginFormAction::SetName("J".to_string()));
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_errors_clear_once_field_becomes_valid() {
        let mut state = valid_state();
        state.reduce_in_place(LoginFormAction::SetEmail("not-an-email".to_string()));
        state.submit(|_| {});
        assert_eq!(state.error_for(&"email".into()), Some(EMAIL_INVALID));

        state.reduce_in_place(LoginFormAction::SetEmail("jo@example.org".to_string()));
        assert_eq!(state.error_for(&"email".into()), None);
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_revalidate_on_submit_keeps_stale_errors() {
        let mut state = LoginFormState::new(FormConfig {
            mode: ValidationMode::OnSubmit,
            revalidate_mode: ValidationMode::OnSubmit,
        });
        state.draft = valid_draft();
        state.reduce_in_place(LoginFormAction::SetCity(String::new()));
        state.submit(|_| {});
        state.reduce_in_place(LoginFormAction::SetCity("Gotham".to_string()));

        assert_eq!(state.error_for(&"address.city".into()), Some(CITY_REQUIRED));
        assert!(state.submit(|_| {}));
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_eager_mode_reports_only_touched_fields() {
        let mut state = LoginFormState::new(FormConfig::eager());
        state.reduce_in_place(LoginFormAction::SetPassword("123".to_string()));

        assert_eq!(state.error_for(&"password".into()), Some(PASSWORD_TOO_SHORT));
        assert_eq!(state.errors.len(), 1);

        state.reduce_in_place(LoginFormAction::SetSkillName(0, String::new()));
        assert_eq!(
            state.error_for(&FieldPath::skill_name(0)),
            Some(SKILL_REQUIRED)
        );
    }

    #[test]
    fn test_append_skill_adds_empty_entry() {
        let mut state = valid_state();
        state.reduce_in_place(LoginFormAction::AppendSkill);

        assert_eq!(state.draft.skills.len(), 2);
        assert_eq!(state.draft.skills[1].name, "");
    }

    #[test]
    fn test_remove_skill_preserves_order() {
        let mut state = valid_state();
        for name in ["Rust", "Zig", "Elm"] {
            state.reduce_in_place(LoginFormAction::AppendSkill);
            let last = state.draft.skills.len() - 1;
            state.reduce_in_place(LoginFormAction::SetSkillName(last, name.to_string()));
        }

        state.reduce_in_place(LoginFormAction::RemoveSkill(1));

        let names: Vec<&str> = state
            .draft
            .skills
            .iter()
            .map(|skill| skill.name.as_str())
            .collect();
        assert_eq!(names, vec!["Go", "Zig", "Elm"]);
    }

    #[test]
    fn test_remove_skill_reindexes_errors_after_submit() {
        let mut state = valid_state();
        state.reduce_in_place(LoginFormAction::AppendSkill);
        state.reduce_in_place(LoginFormAction::AppendSkill);
        state.reduce_in_place(LoginFormAction::SetSkillName(2, "Elm".to_string()));
        state.submit(|_| {});
        assert_eq!(
            state.error_for(&FieldPath::skill_name(1)),
            Some(SKILL_REQUIRED)
        );

        state.reduce_in_place(LoginFormAction::RemoveSkill(1));
        assert!(state.errors.is_empty());
        assert_eq!(state.draft.skills.len(), 2);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut state = valid_state();
        let before = state.draft.clone();
        state.reduce_in_place(LoginFormAction::RemoveSkill(9));
        assert_eq!(state.draft, before);
    }
}
