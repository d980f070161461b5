//! The application's language set.
//!
//! Every language carries a code, a default flag, and its custom translations
//! mapping. The set is shared, mutable state: handles hand out snapshots and
//! every write replaces a language's full mapping before delegating to the
//! configured [`TranslationStore`].

use super::store::{TranslationStore, Translations};
use super::variable::LanguageVariable;
use anyhow::{bail, Result};
use std::sync::{Arc, Mutex};
use tracing::info;

/// Definition of one language, used to construct [`Languages`].
#[derive(Debug, Clone)]
pub struct LanguageDef {
    /// ISO 639-1 language code (e.g., "en", "de")
    pub code: String,

    /// Human-readable name (e.g., "English", "Deutsch")
    pub name: String,

    /// Whether this is the default language (exactly one must be)
    pub default: bool,

    /// Seed translations, overridden by the store if it has a mapping
    pub translations: Translations,
}

impl LanguageDef {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            default: false,
            translations: Translations::new(),
        }
    }

    /// Mark this language as the default language.
    pub fn default_language(mut self) -> Self {
        self.default = true;
        self
    }

    /// Seed the language with translations.
    pub fn with_translations(mut self, translations: Translations) -> Self {
        self.translations = translations;
        self
    }
}

#[derive(Debug)]
struct LanguageData {
    code: String,
    name: String,
    default: bool,
    translations: Translations,
}

/// The set of languages known to the application.
///
/// Cheap to clone; all clones share the same underlying state and store.
#[derive(Clone)]
pub struct Languages {
    inner: Arc<Mutex<Vec<LanguageData>>>,
    store: Arc<dyn TranslationStore>,
    default_code: String,
}

impl Languages {
    /// Build the language set from definitions, hydrating each language's
    /// translations from the store where a persisted mapping exists.
    ///
    /// # Errors
    /// Fails if the set is empty, a code appears twice, or the number of
    /// default languages is not exactly one.
    pub fn new(defs: Vec<LanguageDef>, store: Arc<dyn TranslationStore>) -> Result<Self> {
        if defs.is_empty() {
            bail!("At least one language is required");
        }

        let defaults: Vec<_> = defs.iter().filter(|def| def.default).collect();
        if defaults.len() != 1 {
            bail!(
                "Exactly one default language is required, found {}",
                defaults.len()
            );
        }
        let default_code = defaults[0].code.clone();

        let mut languages: Vec<LanguageData> = Vec::with_capacity(defs.len());
        for def in defs {
            if languages.iter().any(|lang| lang.code == def.code) {
                bail!("Duplicate language code: '{}'", def.code);
            }

            let translations = store.load(&def.code)?.unwrap_or(def.translations);
            languages.push(LanguageData {
                code: def.code,
                name: def.name,
                default: def.default,
                translations,
            });
        }

        info!(
            "loaded {} languages (default: '{}')",
            languages.len(),
            default_code
        );

        Ok(Self {
            inner: Arc::new(Mutex::new(languages)),
            store,
            default_code,
        })
    }

    /// Handles to every known language, default language included.
    pub fn all(&self) -> Vec<Language> {
        self.inner
            .lock()
            .unwrap()
            .iter()
            .map(|lang| Language {
                set: self.clone(),
                code: lang.code.clone(),
            })
            .collect()
    }

    /// Handle to the language with the given code.
    pub fn get(&self, code: &str) -> Option<Language> {
        self.inner
            .lock()
            .unwrap()
            .iter()
            .find(|lang| lang.code == code)
            .map(|lang| Language {
                set: self.clone(),
                code: lang.code.clone(),
            })
    }

    /// Handle to the default language.
    pub fn default_language(&self) -> Language {
        Language {
            set: self.clone(),
            code: self.default_code.clone(),
        }
    }
}

/// Handle to one language in the set.
#[derive(Clone)]
pub struct Language {
    set: Languages,
    code: String,
}

impl Language {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> String {
        self.with_data(|lang| lang.name.clone())
    }

    pub fn is_default(&self) -> bool {
        self.with_data(|lang| lang.default)
    }

    /// Snapshot of this language's custom translations mapping.
    pub fn translations(&self) -> Translations {
        self.with_data(|lang| lang.translations.clone())
    }

    /// Replace this language's full translations mapping and persist it.
    ///
    /// Persists before mutating, so a store failure leaves the in-memory
    /// mapping matching what is on disk.
    pub fn update(&self, translations: Translations) -> Result<Language> {
        self.set.store.persist(&self.code, &translations)?;

        let mut languages = self.set.inner.lock().unwrap();
        let lang = languages
            .iter_mut()
            .find(|lang| lang.code == self.code)
            .expect("language handle should match a known language");
        lang.translations = translations;
        drop(languages);

        Ok(self.clone())
    }

    /// View over one translation key in this language.
    pub fn variable(&self, key: &str) -> LanguageVariable {
        LanguageVariable::new(self.clone(), key)
    }

    pub(crate) fn set(&self) -> &Languages {
        &self.set
    }

    fn with_data<T>(&self, read: impl FnOnce(&LanguageData) -> T) -> T {
        let languages = self.set.inner.lock().unwrap();
        let lang = languages
            .iter()
            .find(|lang| lang.code == self.code)
            .expect("language handle should match a known language");
        read(lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::store::MemoryStore;

    fn two_languages() -> Languages {
        Languages::new(
            vec![
                LanguageDef::new("en", "English").default_language(),
                LanguageDef::new("de", "Deutsch"),
            ],
            Arc::new(MemoryStore::new()),
        )
        .expect("languages")
    }

    // ==================== Construction Tests ====================

    #[test]
    fn test_new_requires_a_language() {
        let result = Languages::new(vec![], Arc::new(MemoryStore::new()));
        assert!(result.is_err());
    }

    #[test]
    fn test_new_requires_exactly_one_default() {
        let none = Languages::new(
            vec![LanguageDef::new("en", "English")],
            Arc::new(MemoryStore::new()),
        );
        assert!(none.is_err());

        let two = Languages::new(
            vec![
                LanguageDef::new("en", "English").default_language(),
                LanguageDef::new("de", "Deutsch").default_language(),
            ],
            Arc::new(MemoryStore::new()),
        );
        assert!(two.is_err());
    }

    #[test]
    fn test_new_rejects_duplicate_codes() {
        let result = Languages::new(
            vec![
                LanguageDef::new("en", "English").default_language(),
                LanguageDef::new("en", "English again"),
            ],
            Arc::new(MemoryStore::new()),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_new_hydrates_from_store() {
        let store = Arc::new(MemoryStore::new());
        store
            .persist(
                "en",
                &Translations::from([("stored".to_string(), "value".to_string())]),
            )
            .expect("persist");

        let languages = Languages::new(
            vec![LanguageDef::new("en", "English").default_language()],
            store,
        )
        .expect("languages");

        let translations = languages.default_language().translations();
        assert_eq!(translations.get("stored").map(String::as_str), Some("value"));
    }

    #[test]
    fn test_seed_translations_used_without_store_entry() {
        let languages = Languages::new(
            vec![LanguageDef::new("en", "English")
                .default_language()
                .with_translations(Translations::from([(
                    "seed".to_string(),
                    "value".to_string(),
                )]))],
            Arc::new(MemoryStore::new()),
        )
        .expect("languages");

        let translations = languages.default_language().translations();
        assert_eq!(translations.get("seed").map(String::as_str), Some("value"));
    }

    // ==================== Accessor Tests ====================

    #[test]
    fn test_all_and_get() {
        let languages = two_languages();

        let all = languages.all();
        assert_eq!(all.len(), 2);

        let de = languages.get("de").expect("de");
        assert_eq!(de.code(), "de");
        assert_eq!(de.name(), "Deutsch");
        assert!(!de.is_default());

        assert!(languages.get("fr").is_none());
    }

    #[test]
    fn test_default_language() {
        let languages = two_languages();
        let default = languages.default_language();
        assert_eq!(default.code(), "en");
        assert!(default.is_default());
    }

    // ==================== Update Tests ====================

    #[test]
    fn test_update_replaces_mapping_and_persists() {
        let store = Arc::new(MemoryStore::new());
        let languages = Languages::new(
            vec![LanguageDef::new("en", "English").default_language()],
            store.clone(),
        )
        .expect("languages");

        let language = languages.default_language();
        language
            .update(Translations::from([("a".to_string(), "1".to_string())]))
            .expect("update");
        language
            .update(Translations::from([("b".to_string(), "2".to_string())]))
            .expect("update");

        // full replace, not merge
        let translations = language.translations();
        assert_eq!(translations.len(), 1);
        assert!(translations.contains_key("b"));

        // persisted through the store on every update
        assert_eq!(store.write_count(), 2);
        let stored = store.load("en").expect("load").expect("mapping");
        assert_eq!(stored, translations);
    }

    #[test]
    fn test_failed_persist_leaves_mapping_untouched() {
        struct FailingStore;

        impl TranslationStore for FailingStore {
            fn load(&self, _code: &str) -> Result<Option<Translations>> {
                Ok(None)
            }

            fn persist(&self, _code: &str, _translations: &Translations) -> Result<()> {
                bail!("disk full")
            }
        }

        let languages = Languages::new(
            vec![LanguageDef::new("en", "English")
                .default_language()
                .with_translations(Translations::from([(
                    "kept".to_string(),
                    "value".to_string(),
                )]))],
            Arc::new(FailingStore),
        )
        .expect("languages");

        let language = languages.default_language();
        let result = language.update(Translations::from([("new".to_string(), "v".to_string())]));
        assert!(result.is_err());

        // memory still matches what the store last held
        let translations = language.translations();
        assert!(translations.contains_key("kept"));
        assert!(!translations.contains_key("new"));
    }

    #[test]
    fn test_update_is_visible_through_other_handles() {
        let languages = two_languages();
        let handle_a = languages.get("de").expect("de");
        let handle_b = languages.get("de").expect("de");

        handle_a
            .update(Translations::from([("k".to_string(), "v".to_string())]))
            .expect("update");

        assert_eq!(
            handle_b.translations().get("k").map(String::as_str),
            Some("v")
        );
    }
}
