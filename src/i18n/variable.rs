//! Language variables.
//!
//! A language variable is a custom translation string, stored per language in
//! the translations mapping. A [`LanguageVariable`] is a stateless view over
//! its language's mapping at one key: every read and write passes through to
//! the mapping, and persistence is delegated to the language's store.
//!
//! New variables are always created on the default language first and can
//! then be translated in other languages.

use super::language::{Language, Languages};
use super::slug::slug;
use super::translation::CoreTranslations;
use anyhow::Result;
use thiserror::Error;
use tracing::info;

/// Rejections raised when creating a language variable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VariableError {
    /// The key is already a custom variable on the default language.
    #[error("The variable already exists")]
    AlreadyExists,

    /// The key belongs to the application's core translation set. Core
    /// strings cannot be shadowed; callers must pick a different key.
    #[error("The variable is part of the core translation and cannot be overwritten")]
    CoreProtected,
}

/// View over one translation key in one language.
pub struct LanguageVariable {
    language: Language,
    key: String,
}

impl std::fmt::Debug for LanguageVariable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageVariable")
            .field("language", &self.language.code())
            .field("key", &self.key)
            .finish()
    }
}

impl LanguageVariable {
    pub(crate) fn new(language: Language, key: &str) -> Self {
        Self {
            language,
            key: key.to_string(),
        }
    }

    /// Creates a new language variable. This will be added to the default
    /// language first and can then be translated in other languages.
    ///
    /// The key is normalized to a slug and the value trimmed (empty when
    /// `None`). Creation is strictly exclusive: an existing custom variable
    /// or a core translation with the same key is rejected, and callers must
    /// delete-then-create to replace one.
    pub fn create(
        languages: &Languages,
        core: &CoreTranslations,
        key: &str,
        value: Option<&str>,
    ) -> Result<LanguageVariable> {
        let key = slug(key);
        let value = value.map(str::trim).unwrap_or("").to_string();

        let language = languages.default_language();
        let mut translations = language.translations();

        if translations.contains_key(&key) {
            return Err(VariableError::AlreadyExists.into());
        }
        if core.get(&key).is_some() {
            return Err(VariableError::CoreProtected.into());
        }

        translations.insert(key.clone(), value);
        let language = language.update(translations)?;

        info!("created language variable '{}'", key);
        Ok(language.variable(&key))
    }

    /// Checks if the variable exists in the default language.
    pub fn exists(&self) -> bool {
        self.language
            .set()
            .default_language()
            .translations()
            .contains_key(&self.key)
    }

    /// Returns the unique key for the variable.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The language this view is scoped to.
    pub fn language(&self) -> &Language {
        &self.language
    }

    /// Sets a new value for the variable in this view's language and returns
    /// a fresh view.
    pub fn update(&self, value: &str) -> Result<LanguageVariable> {
        let mut translations = self.language.translations();
        translations.insert(self.key.clone(), value.to_string());

        let language = self.language.update(translations)?;
        Ok(language.variable(&self.key))
    }

    /// Deletes the variable from the translations mapping of every language,
    /// so a removed variable never lingers as an orphaned translation in any
    /// locale. Idempotent: deleting a key that exists nowhere is a no-op.
    pub fn delete(&self) -> Result<()> {
        for language in self.language.set().all() {
            let mut translations = language.translations();
            if translations.remove(&self.key).is_some() {
                language.update(translations)?;
            }
        }

        info!("deleted language variable '{}'", self.key);
        Ok(())
    }

    /// Returns the value if the variable has been translated in this view's
    /// language.
    pub fn value(&self) -> Option<String> {
        self.language.translations().get(&self.key).cloned()
    }
}
