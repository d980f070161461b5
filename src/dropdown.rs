//! Dropdown loading for the admin panel.
//!
//! Option lists for panel dropdowns are served by the backend under
//! `dropdowns/{path}`. The loader fetches one list, validates the payload,
//! attaches dialog-opening click behavior to options that ask for it, and
//! hands the result to a caller-supplied callback. Failures never propagate
//! out of [`DropdownLoader::load`]: they are logged and reported once to the
//! injected [`NotificationSink`].

use serde::Deserialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error};

/// Errors raised while loading a dropdown.
#[derive(Debug, Error)]
pub enum DropdownError {
    /// The request itself failed (transport error or non-2xx status).
    #[error("dropdown request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The payload had no `$dropdown` envelope or no `options` list.
    #[error("The dropdown could not be loaded")]
    Load,

    /// The backend reported a domain-level error (e.g. permission denied).
    /// Surfaced to the user verbatim.
    #[error("{0}")]
    Backend(String),
}

/// Capability to open a modal dialog in the panel UI.
pub trait DialogOpener: Send + Sync {
    fn open_dialog(&self, url: &str, options: &Map<String, Value>);
}

/// Capability to surface an error notification to the user.
pub trait NotificationSink: Send + Sync {
    fn error(&self, message: &str);
}

/// Request options passed through to the dropdown fetch.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// HTTP method; `GET` when unset
    pub method: Option<reqwest::Method>,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

/// A dialog descriptor attached to a dropdown option.
///
/// The wire format is polymorphic: either a bare URL string or an object
/// carrying a `url` field plus dialog options.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DialogRef {
    Url(String),
    Config(DialogConfig),
}

#[derive(Debug, Clone, Deserialize)]
pub struct DialogConfig {
    pub url: String,
    #[serde(flatten)]
    pub options: Map<String, Value>,
}

impl DialogRef {
    pub fn url(&self) -> &str {
        match self {
            DialogRef::Url(url) => url,
            DialogRef::Config(config) => &config.url,
        }
    }

    /// Dialog options: the object form's extra fields, empty for the string form.
    pub fn options(&self) -> Map<String, Value> {
        match self {
            DialogRef::Url(_) => Map::new(),
            DialogRef::Config(config) => config.options.clone(),
        }
    }
}

/// One option as served by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct DropdownOption {
    pub text: Option<String>,
    pub icon: Option<String>,
    pub link: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    pub dialog: Option<DialogRef>,
    /// Anything else the backend sent along; passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct DropdownResponse {
    #[serde(rename = "$dropdown")]
    dropdown: Option<DropdownPayload>,
}

#[derive(Debug, Deserialize)]
struct DropdownPayload {
    options: Option<Vec<DropdownOption>>,
    error: Option<String>,
}

/// A dropdown option after loading, with its click behavior attached.
#[derive(Clone)]
pub struct LoadedOption {
    option: DropdownOption,
    click: Option<ClickAction>,
}

impl LoadedOption {
    pub fn option(&self) -> &DropdownOption {
        &self.option
    }

    /// Whether this option opens a dialog when clicked.
    pub fn has_click(&self) -> bool {
        self.click.is_some()
    }

    /// Invoke the click behavior, opening the configured dialog.
    ///
    /// Returns `false` for options without a dialog.
    pub fn click(&self) -> bool {
        match &self.click {
            Some(action) => {
                action.opener.open_dialog(&action.url, &action.options);
                true
            }
            None => false,
        }
    }
}

#[derive(Clone)]
struct ClickAction {
    opener: Arc<dyn DialogOpener>,
    url: String,
    options: Map<String, Value>,
}

/// Loads dropdown option lists from the panel API.
pub struct DropdownLoader {
    client: reqwest::Client,
    base_url: String,
    dialogs: Arc<dyn DialogOpener>,
    notifications: Arc<dyn NotificationSink>,
}

impl DropdownLoader {
    pub fn new(
        base_url: impl Into<String>,
        dialogs: Arc<dyn DialogOpener>,
        notifications: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            dialogs,
            notifications,
        }
    }

    /// Load the dropdown at `dropdowns/{path}` and hand the decorated option
    /// list to `deliver`.
    ///
    /// On any failure `deliver` is not called; the error is logged and
    /// reported exactly once through the notification sink. No retries.
    pub async fn load<F>(&self, path: &str, options: RequestOptions, deliver: F)
    where
        F: FnOnce(Vec<LoadedOption>),
    {
        match self.fetch(path, &options).await {
            Ok(loaded) => {
                debug!("loaded dropdown '{}' with {} options", path, loaded.len());
                deliver(loaded);
            }
            Err(err) => {
                error!("failed to load dropdown '{}': {}", path, err);
                self.notifications.error(&err.to_string());
            }
        }
    }

    async fn fetch(
        &self,
        path: &str,
        options: &RequestOptions,
    ) -> Result<Vec<LoadedOption>, DropdownError> {
        let url = format!("{}/dropdowns/{}", self.base_url.trim_end_matches('/'), path);
        let method = options.method.clone().unwrap_or(reqwest::Method::GET);

        let mut request = self.client.request(method, url).query(&options.query);
        for (name, value) in &options.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await?.error_for_status()?;

        // Any shape mismatch means the resource is malformed or unreachable
        let data: DropdownResponse = response.json().await.map_err(|_| DropdownError::Load)?;
        let payload = data.dropdown.ok_or(DropdownError::Load)?;
        let raw_options = payload.options.ok_or(DropdownError::Load)?;

        // The backend sends a domain error alongside the (empty) options list
        if let Some(message) = payload.error {
            return Err(DropdownError::Backend(message));
        }

        let loaded = raw_options
            .into_iter()
            .map(|option| {
                let click = option.dialog.as_ref().map(|dialog| ClickAction {
                    opener: Arc::clone(&self.dialogs),
                    url: dialog.url().to_string(),
                    options: dialog.options(),
                });
                LoadedOption { option, click }
            })
            .collect();

        Ok(loaded)
    }
}
