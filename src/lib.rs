//! Panel-side building blocks for a content-management system.
//!
//! Two independent components live here:
//!
//! - [`dropdown`]: asynchronously loads dropdown option lists for the admin
//!   panel, wires up dialog-opening click behavior, and reports failures to
//!   a notification sink instead of propagating them.
//! - [`i18n`]: language variables — custom translation strings stored per
//!   language and edited through a small CRUD surface, with persistence
//!   delegated to a pluggable store.
//!
//! There is no data or control flow between the two; they are consumed
//! separately by the surrounding application.

pub mod config;
pub mod dropdown;
pub mod i18n;

pub use config::Config;
pub use dropdown::{DialogOpener, DropdownError, DropdownLoader, NotificationSink};
pub use i18n::{CoreTranslations, Language, LanguageVariable, Languages, VariableError};
