// Core types for the login form - no dioxus imports needed here
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::errors::{ParseDepartmentError, ParseGenderError};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub enum Department {
    #[serde(rename = "IT")]
    It,
    #[serde(rename = "HR")]
    Hr,
    Finance,
}

impl Department {
    pub const ALL: [Department; 3] = [Department::It, Department::Hr, Department::Finance];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::It => "IT",
            Department::Hr => "HR",
            Department::Finance => "Finance",
        }
    }
}

impl FromStr for Department {
    type Err = ParseDepartmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::ALL
            .into_iter()
            .find(|department| department.as_str() == s)
            .ok_or_else(|| ParseDepartmentError(s.to_string()))
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl FromStr for Gender {
    type Err = ParseGenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(ParseGenderError(other.to_string())),
        }
    }
}

#[derive(Clone, PartialEq, Debug, Default, Serialize)]
pub struct Address {
    pub street: String,
    pub city: String,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct Skill {
    pub name: String,
}

/// One row of the skills field array while it is being edited.
#[derive(Clone, PartialEq, Debug)]
pub struct SkillDraft {
    /// Render key, stable across removals of other rows
    pub id: u64,
    pub name: String,
}

/// In-progress form input. Every field holds exactly what the user typed.
#[derive(Clone, PartialEq, Debug)]
pub struct LoginFormDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Raw text of the number input, coerced on validation
    pub age: String,
    /// Empty until a department is selected
    pub department: String,
    pub gender: Option<Gender>,
    pub agree_to_terms: bool,
    pub address: Address,
    pub skills: Vec<SkillDraft>,
    next_skill_id: u64,
}

impl LoginFormDraft {
    pub fn append_skill(&mut self) {
        let id = self.next_skill_id;
        self.next_skill_id += 1;
        self.skills.push(SkillDraft {
            id,
            name: String::new(),
        });
    }

    /// Removes the skill at `index`, shifting later rows up. Out of range is ignored.
    pub fn remove_skill(&mut self, index: usize) -> Option<SkillDraft> {
        (index < self.skills.len()).then(|| self.skills.remove(index))
    }

    pub fn set_skill_name(&mut self, index: usize, name: String) {
        if let Some(skill) = self.skills.get_mut(index) {
            skill.name = name;
        }
    }
}

impl Default for LoginFormDraft {
    fn default() -> Self {
        let mut draft = Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            age: String::new(),
            department: String::new(),
            gender: None,
            agree_to_terms: false,
            address: Address::default(),
            skills: Vec::new(),
            next_skill_id: 0,
        };
        draft.append_skill();
        draft
    }
}

/// Validated payload handed to the submit handler.
#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginFormData {
    pub name: String,
    pub email: String,
    pub password: String,
    pub age: f64,
    pub department: Department,
    pub gender: Gender,
    pub agree_to_terms: bool,
    pub address: Address,
    pub skills: Vec<Skill>,
}

// Action enum for state mutations
#[derive(Clone, Debug, PartialEq)]
pub enum LoginFormAction {
    SetName(String),
    SetEmail(String),
    SetPassword(String),
    SetAge(String),
    SetDepartment(String),
    SetGender(Gender),
    SetAgreeToTerms(bool),
    SetStreet(String),
    SetCity(String),
    SetSkillName(usize, String),
    AppendSkill,
    RemoveSkill(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_draft_seeds_one_skill() {
        let draft = LoginFormDraft::default();
        assert_eq!(draft.skills.len(), 1);
        assert!(draft.skills[0].name.is_empty());
        assert!(draft.gender.is_none());
        assert!(!draft.agree_to_terms);
    }

    #[test]
    fn test_skill_ids_stay_unique_after_removal() {
        let mut draft = LoginFormDraft::default();
        draft.append_skill();
        draft.append_skill();
        let removed = draft.remove_skill(1).map(|skill| skill.id);
        draft.append_skill();

        let ids: Vec<u64> = draft.skills.iter().map(|skill| skill.id).collect();
        assert_eq!(removed, Some(1));
        assert_eq!(ids, vec![0, 2, 3]);
    }

    #[test]
    fn test_remove_out_of_range_is_ignored() {
        let mut draft = LoginFormDraft::default();
        assert!(draft.remove_skill(5).is_none());
        assert_eq!(draft.skills.len(), 1);
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!("HR".parse::<Department>(), Ok(Department::Hr));
        assert!("Sales".parse::<Department>().is_err());
        assert!("".parse::<Department>().is_err());
        assert_eq!("female".parse::<Gender>(), Ok(Gender::Female));
        assert!("Male".parse::<Gender>().is_err());
    }

    #[test]
    fn test_payload_uses_wire_names() {
        let data = LoginFormData {
            name: "Jo".to_string(),
            email: "a@b.com".to_string(),
            password: "secret1".to_string(),
            age: 20.0,
            department: Department::It,
            gender: Gender::Male,
            agree_to_terms: true,
            address: Address {
                street: "Main St".to_string(),
                city: "Metropolis".to_string(),
            },
            skills: vec![Skill {
                name: "Go".to_string(),
            }],
        };

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["agreeToTerms"], serde_json::json!(true));
        assert_eq!(json["department"], serde_json::json!("IT"));
        assert_eq!(json["gender"], serde_json::json!("male"));
        assert_eq!(json["age"], serde_json::json!(20.0));
        assert_eq!(json["skills"][0]["name"], serde_json::json!("Go"));
    }
}
