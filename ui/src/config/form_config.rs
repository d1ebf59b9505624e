use serde::{Deserialize, Serialize};

/// When a validation pass is triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationMode {
    /// Only when the form is submitted
    OnSubmit,
    /// After every change to a field
    OnChange,
}

/// Validation trigger settings for a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormConfig {
    /// Trigger used before the first submit attempt
    pub mode: ValidationMode,

    /// Trigger used once the form has been submitted at least once
    pub revalidate_mode: ValidationMode,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            mode: ValidationMode::OnSubmit,
            revalidate_mode: ValidationMode::OnChange,
        }
    }
}

impl FormConfig {
    /// Validate on every keystroke, even before the first submit
    pub fn eager() -> Self {
        Self {
            mode: ValidationMode::OnChange,
            revalidate_mode: ValidationMode::OnChange,
        }
    }

    /// Mode in effect given whether a submit has been attempted
    pub fn active_mode(&self, submitted: bool) -> ValidationMode {
        if submitted {
            self.revalidate_mode
        } else {
            self.mode
        }
    }

    pub fn validates_on_change(&self, submitted: bool) -> bool {
        self.active_mode(submitted) == ValidationMode::OnChange
    }
}
