//! Internationalization (i18n) module for multi-language support.
//!
//! This module manages the application's languages and their custom
//! translation strings ("language variables"). Core translation strings ship
//! with the application and are read-only; language variables are created by
//! editors, stored per language, and must never shadow a core string.
//!
//! # Architecture
//!
//! - `language`: the language set and per-language translation mappings
//! - `variable`: `LanguageVariable`, the CRUD view over one translation key
//! - `translation`: lookup for the built-in (core) translation strings
//! - `store`: persistence seam for translation mappings
//! - `slug`: key normalization
//!
//! # Example
//!
//! ```rust,ignore
//! use cms_panel::i18n::{CoreTranslations, LanguageVariable, Languages};
//!
//! let variable = LanguageVariable::create(&languages, &core, "Hello World", Some("Hi!"))?;
//! assert_eq!(variable.key(), "hello-world");
//! ```

mod language;
mod slug;
mod store;
mod translation;
mod variable;

pub use language::{Language, LanguageDef, Languages};
pub use slug::slug;
pub use store::{JsonFileStore, MemoryStore, TranslationStore, Translations};
pub use translation::CoreTranslations;
pub use variable::{LanguageVariable, VariableError};
