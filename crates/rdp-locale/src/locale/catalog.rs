//! TOML translation catalogs for keyboard layout names.
//!
//! A catalog maps untranslated layout names to display strings:
//!
//! ```toml
//! language = "fr"
//!
//! [translations]
//! "German" = "Allemand"
//! "United Kingdom" = "Royaume-Uni"
//! ```
//!
//! Names without a translation are shown untranslated.  Where catalog files
//! live is up to the caller; this module only reads the path it is given.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use super::Localizer;
use crate::keyboard::layout_code_from_name;

/// Error type for translation catalog operations.
#[derive(Debug, Error)]
pub enum LocaleError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing translation catalog at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse translation catalog TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// A layout name was mapped to an empty display string.
    #[error("empty translation for {msgid:?}")]
    EmptyTranslation { msgid: String },
}

/// Translations of catalog names for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleCatalog {
    /// Language tag the catalog was written for, e.g. `"fr"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Untranslated layout name → display string.
    #[serde(default)]
    pub translations: BTreeMap<String, String>,
}

impl LocaleCatalog {
    /// Parses and validates a catalog from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::Parse`] for malformed TOML and
    /// [`LocaleError::EmptyTranslation`] if any translation is empty.
    pub fn from_toml_str(content: &str) -> Result<Self, LocaleError> {
        let catalog: LocaleCatalog = toml::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Reads a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::Io`] if the file cannot be read, otherwise the
    /// errors of [`LocaleCatalog::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LocaleError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| LocaleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml_str(&content)?;
        info!(
            "loaded {} keyboard layout translations from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Number of translated names.
    pub fn len(&self) -> usize {
        self.translations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }

    fn validate(&self) -> Result<(), LocaleError> {
        for (msgid, text) in &self.translations {
            if text.is_empty() {
                return Err(LocaleError::EmptyTranslation {
                    msgid: msgid.clone(),
                });
            }
            if layout_code_from_name(msgid) == 0 {
                warn!("translation catalog names unknown keyboard layout {msgid:?}");
            }
        }
        Ok(())
    }
}

impl Localizer for LocaleCatalog {
    fn translate<'a>(&'a self, msgid: &'static str) -> Cow<'a, str> {
        match self.translations.get(msgid) {
            Some(text) => Cow::Borrowed(text.as_str()),
            None => Cow::Borrowed(msgid),
        }
    }
}
