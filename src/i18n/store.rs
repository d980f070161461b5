//! Persistence seam for translation mappings.
//!
//! Each language's custom translations live in their own file, one file per
//! language code. The store only sees whole mappings: every write replaces
//! the full mapping for a language, mirroring how updates flow through
//! [`Language::update`](super::Language::update).

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::debug;

pub type Translations = BTreeMap<String, String>;

/// Storage backend for per-language translation mappings.
pub trait TranslationStore: Send + Sync {
    /// Read the stored mapping for a language, `None` if never persisted.
    fn load(&self, code: &str) -> Result<Option<Translations>>;

    /// Replace the stored mapping for a language.
    fn persist(&self, code: &str, translations: &Translations) -> Result<()>;
}

/// File-backed store keeping one `{code}.json` per language.
#[derive(Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, code: &str) -> PathBuf {
        self.dir.join(format!("{code}.json"))
    }
}

impl TranslationStore for JsonFileStore {
    fn load(&self, code: &str) -> Result<Option<Translations>> {
        let path = self.path_for(code);
        if !path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&path)
            .context(format!("Failed to read translations at {}", path.display()))?;
        let translations = serde_json::from_str(&raw)
            .context(format!("Failed to parse translations at {}", path.display()))?;

        Ok(Some(translations))
    }

    fn persist(&self, code: &str, translations: &Translations) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .context(format!("Failed to create {}", self.dir.display()))?;

        let path = self.path_for(code);
        let raw = serde_json::to_string_pretty(translations)
            .context("Failed to serialize translations")?;
        fs::write(&path, raw)
            .context(format!("Failed to write translations at {}", path.display()))?;

        debug!("persisted {} translations for '{}'", translations.len(), code);
        Ok(())
    }
}

/// In-memory store for tests and embedded use.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, Translations>>,
    writes: Mutex<u32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of persist calls so far.
    pub fn write_count(&self) -> u32 {
        *self.writes.lock().unwrap()
    }
}

impl TranslationStore for MemoryStore {
    fn load(&self, code: &str) -> Result<Option<Translations>> {
        Ok(self.entries.lock().unwrap().get(code).cloned())
    }

    fn persist(&self, code: &str, translations: &Translations) -> Result<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(code.to_string(), translations.clone());
        *self.writes.lock().unwrap() += 1;
        Ok(())
    }
}
