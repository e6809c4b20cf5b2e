//! Per-session survey input.

use serde::{Deserialize, Serialize};

use crate::enums::{Affiliation, Theme};
use crate::errors::CoreError;

/// Maximum number of interests a visitor may select.
pub const MAX_INTERESTS: usize = 3;

/// Transient per-visit input collected by the survey views. Lives only in
/// memory for the duration of one visit; discarded on reset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    pub name: String,
    pub affiliation: Option<Affiliation>,
    /// Selected interests, set semantics, at most [`MAX_INTERESTS`].
    pub interests: Vec<String>,
    pub theme: Option<Theme>,
    pub title: String,
    pub content: String,
}

impl UserData {
    /// Toggle an interest: remove it if selected, otherwise add it.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when adding a fourth interest;
    /// the existing selection is left unchanged.
    pub fn toggle_interest(&mut self, interest: &str) -> Result<(), CoreError> {
        if let Some(pos) = self.interests.iter().position(|i| i == interest) {
            self.interests.remove(pos);
            return Ok(());
        }
        if self.interests.len() >= MAX_INTERESTS {
            return Err(CoreError::Validation(format!(
                "at most {MAX_INTERESTS} interests may be selected"
            )));
        }
        self.interests.push(interest.to_string());
        Ok(())
    }

    /// Validate the common survey page (name, affiliation, interests, theme).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming the first missing field.
    pub fn validate_common(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation("name is required".into()));
        }
        if self.affiliation.is_none() {
            return Err(CoreError::Validation("affiliation is required".into()));
        }
        if self.interests.is_empty() {
            return Err(CoreError::Validation(
                "at least one interest is required".into(),
            ));
        }
        if self.theme.is_none() {
            return Err(CoreError::Validation("theme is required".into()));
        }
        Ok(())
    }

    /// Validate the card page (title and content).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming the first missing field.
    pub fn validate_card(&self) -> Result<(), CoreError> {
        if self.title.trim().is_empty() {
            return Err(CoreError::Validation("title is required".into()));
        }
        if self.content.trim().is_empty() {
            return Err(CoreError::Validation("content is required".into()));
        }
        Ok(())
    }
}
