//! # rdp-locale
//!
//! Keyboard layout reference data for RDP clients and servers.
//!
//! The client core data of an RDP connection identifies the keyboard by a
//! numeric layout identifier (KLID).  This crate maps those identifiers to
//! display names and back, and enumerates every layout it knows so a UI can
//! offer a picker.
//!
//! - **`keyboard`** – the compiled-in catalogs (standard layouts, layout
//!   variants, input method editors) and the registry operations over them.
//! - **`locale`** – the [`Localizer`] seam through which display names are
//!   translated, plus TOML-backed translation catalogs.
//!
//! ```
//! use rdp_locale::keyboard::layout_ids::KBD_GERMAN;
//! use rdp_locale::{get_keyboard_layouts, layout_code_from_name, layout_name_from_code, LayoutTypes};
//!
//! assert_eq!(layout_name_from_code(KBD_GERMAN), "German");
//! assert_eq!(layout_code_from_name("German"), KBD_GERMAN);
//!
//! let layouts = get_keyboard_layouts(LayoutTypes::STANDARD | LayoutTypes::VARIANT).unwrap();
//! assert_eq!(layouts.entries()[0].name, "Arabic (101)");
//! ```
//!
//! The crate performs no I/O except when a translation catalog is loaded.

pub mod keyboard;
pub mod locale;

pub use keyboard::{
    get_keyboard_layouts, layout_code_from_name, layout_name_from_code, release_keyboard_layouts,
    KeyboardLayoutError, KeyboardLayouts, LayoutEntry, LayoutList, LayoutTypes, UNKNOWN_LAYOUT_NAME,
};
pub use locale::{LocaleCatalog, LocaleError, Localizer, Untranslated};
