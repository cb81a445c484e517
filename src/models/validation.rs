//! Validation results surfaced to the configuration UI.
//!
//! Provider tests and settings checks do not fail with an error; they return
//! a list of failures the caller can render inline next to the settings form.

use serde::{Deserialize, Serialize};

/// A single user-facing validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFailure {
    /// Settings field the failure relates to, if any
    pub property_name: Option<String>,
    /// Short summary shown to the user
    pub summary: String,
    /// Longer explanation, typically the underlying error text
    pub detail: Option<String>,
}

impl ValidationFailure {
    /// Failure not tied to a specific settings field
    pub fn new(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            property_name: None,
            summary: summary.into(),
            detail: Some(detail.into()),
        }
    }

    /// Failure for a specific settings field
    pub fn for_property(property_name: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            property_name: Some(property_name.into()),
            summary: summary.into(),
            detail: None,
        }
    }
}

impl std::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(property) = &self.property_name {
            write!(f, "{}: ", property)?;
        }
        write!(f, "{}", self.summary)?;
        if let Some(detail) = &self.detail {
            write!(f, " ({})", detail)?;
        }
        Ok(())
    }
}

/// Ordered collection of validation failures; empty means valid
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    failures: Vec<ValidationFailure>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }

    pub fn push(&mut self, failure: ValidationFailure) {
        self.failures.push(failure);
    }

    /// Appends the failure when one is present
    pub fn push_if_some(&mut self, failure: Option<ValidationFailure>) {
        if let Some(failure) = failure {
            self.failures.push(failure);
        }
    }
}

impl From<validator::ValidationErrors> for ValidationResult {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut failures: Vec<ValidationFailure> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    let summary = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value ({})", error.code));
                    ValidationFailure::for_property(field.to_string(), summary)
                })
            })
            .collect();

        // field_errors() is backed by a HashMap
        failures.sort_by(|a, b| a.property_name.cmp(&b.property_name));

        Self { failures }
    }
}
