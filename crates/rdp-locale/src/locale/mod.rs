//! Translation of catalog display names.
//!
//! Every layout name in the catalogs doubles as its own translation key.  A
//! [`Localizer`] maps that key to the string shown to the user; the registry
//! stores whatever it returns.
//!
//! Two implementations ship with the crate:
//!
//! - [`Untranslated`] returns the key unchanged.
//! - [`LocaleCatalog`] reads translations from a TOML file.

pub mod catalog;

use std::borrow::Cow;

pub use catalog::{LocaleCatalog, LocaleError};

/// Source of translated display names.
///
/// Implementations should borrow where they can: the registry copies the
/// returned string into fallibly reserved storage itself.
pub trait Localizer {
    /// Returns the display string for `msgid`, the untranslated catalog name.
    fn translate<'a>(&'a self, msgid: &'static str) -> Cow<'a, str>;
}

impl<L: Localizer + ?Sized> Localizer for &L {
    fn translate<'a>(&'a self, msgid: &'static str) -> Cow<'a, str> {
        (**self).translate(msgid)
    }
}

/// Localizer that reports every name untranslated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Untranslated;

impl Localizer for Untranslated {
    fn translate<'a>(&'a self, msgid: &'static str) -> Cow<'a, str> {
        Cow::Borrowed(msgid)
    }
}
