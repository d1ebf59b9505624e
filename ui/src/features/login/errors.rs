use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// Dotted/indexed address of a form field, e.g. `address.city` or `skills.0.name`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldPath(String);

impl FieldPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn skill_name(index: usize) -> Self {
        Self(format!("skills.{}.name", index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Row index for `skills.<n>.name` paths.
    pub fn skill_index(&self) -> Option<usize> {
        let mut segments = self.0.split('.');
        match (segments.next(), segments.next()) {
            (Some("skills"), Some(index)) => index.parse().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

/// Per-field validation failures. Holds the first violated rule's message for
/// each field that failed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct FieldErrors(BTreeMap<FieldPath, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for `path` unless one is already present.
    pub fn insert(&mut self, path: impl Into<FieldPath>, message: impl Into<String>) {
        self.0.entry(path.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, path: &FieldPath) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &FieldPath) -> bool {
        self.0.contains_key(path)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldPath, &str)> {
        self.0.iter().map(|(path, message)| (path, message.as_str()))
    }

    /// Keeps only the entries whose path satisfies `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(&FieldPath) -> bool) {
        self.0.retain(|path, _| keep(path));
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown department: {0}")]
pub struct ParseDepartmentError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown gender: {0}")]
pub struct ParseGenderError(pub String);
