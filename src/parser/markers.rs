use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Texts that identify one legacy update block, plus the names used when
/// reading assignments and emitting the builder call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Markers {
    pub start: String,
    pub initializer: String,
    pub terminator: String,
    pub closing: String,
    /// Scratch object the body assigns into (`newState`).
    pub assignee: String,
    /// Prior-state parameter (`state`).
    pub prior: String,
    /// Builder-style update method (`copyWith`).
    pub builder: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            start: "ref.read(onboardingProvider.notifier).update((state) {".to_string(),
            initializer: "final newState = OnboardingData();".to_string(),
            terminator: "return newState;".to_string(),
            closing: "});".to_string(),
            assignee: "newState".to_string(),
            prior: "state".to_string(),
            builder: "copyWith".to_string(),
        }
    }
}

impl Markers {
    pub fn from_json_str(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("start", &self.start),
            ("initializer", &self.initializer),
            ("terminator", &self.terminator),
            ("closing", &self.closing),
        ] {
            if value.trim().is_empty() {
                return Err(Error::InvalidMarkers(format!("`{}` marker is empty", key)));
            }
        }
        for (key, value) in [
            ("assignee", &self.assignee),
            ("prior", &self.prior),
            ("builder", &self.builder),
        ] {
            if !is_identifier(value) {
                return Err(Error::InvalidMarkers(format!(
                    "`{}` must be an identifier, got {:?}",
                    key, value
                )));
            }
        }
        Ok(())
    }

    pub fn is_start(&self, line: &str) -> bool {
        line.contains(self.start.as_str())
    }

    pub fn is_initializer(&self, line: &str) -> bool {
        line.contains(self.initializer.as_str())
    }

    pub fn is_terminator(&self, line: &str) -> bool {
        line.contains(self.terminator.as_str())
    }

    pub fn is_closing(&self, line: &str) -> bool {
        line.contains(self.closing.as_str())
    }

    /// `state.name`, the expression that copies a field through unchanged.
    pub fn prior_field(&self, name: &str) -> String {
        format!("{}.{}", self.prior, name)
    }

    /// `state.copyWith(`
    pub fn builder_call(&self) -> String {
        format!("{}.{}(", self.prior, self.builder)
    }
}

/// Dart-style identifier: letters, digits, `_` and `$`, not starting with a digit.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
