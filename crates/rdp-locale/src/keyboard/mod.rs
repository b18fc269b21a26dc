//! Keyboard layout catalogs and the registry that enumerates and searches them.
//!
//! Three compiled-in tables are exposed:
//!
//! - [`standard::STANDARD_LAYOUTS`] – one layout per base input language.
//! - [`variant::LAYOUT_VARIANTS`] – alternate arrangements (Dvorak, QWERTY, …).
//! - [`ime::INPUT_METHOD_EDITORS`] – global input method editors.
//!
//! Lookups walk the tables in that order and stop at the first match.  The
//! tables are small and lookups are rare, so a linear scan is used throughout.

pub mod ime;
pub mod layout_ids;
pub mod registry;
pub mod standard;
pub mod variant;

use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

pub use registry::{
    get_keyboard_layouts, ime_file_from_code, input_method_editors, layout_code_from_name,
    layout_name_from_code, layout_variants, release_keyboard_layouts, standard_layouts,
    variant_id_from_code, KeyboardLayoutError, KeyboardLayouts, LayoutEntry, LayoutList,
    UNKNOWN_LAYOUT_NAME,
};

/// Bit flags selecting which catalogs [`get_keyboard_layouts`] includes.
///
/// Values match the RDP keyboard layout type constants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayoutTypes(pub u32);

impl LayoutTypes {
    pub const STANDARD: LayoutTypes = LayoutTypes(1 << 0);
    pub const VARIANT: LayoutTypes = LayoutTypes(1 << 1);
    pub const IME: LayoutTypes = LayoutTypes(1 << 2);
    pub const ALL: LayoutTypes = LayoutTypes(Self::STANDARD.0 | Self::VARIANT.0 | Self::IME.0);

    /// Returns `true` if every bit of `other` is set in `self`.
    ///
    /// An empty `other` is never contained.
    pub fn contains(self, other: LayoutTypes) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    /// Returns `true` if no catalog is selected.
    pub fn is_empty(self) -> bool {
        self.0 & Self::ALL.0 == 0
    }
}

impl BitOr for LayoutTypes {
    type Output = LayoutTypes;

    fn bitor(self, rhs: LayoutTypes) -> LayoutTypes {
        LayoutTypes(self.0 | rhs.0)
    }
}

impl BitOrAssign for LayoutTypes {
    fn bitor_assign(&mut self, rhs: LayoutTypes) {
        self.0 |= rhs.0;
    }
}

/// A standard keyboard layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct KeyboardLayout {
    /// Keyboard layout identifier (KLID).
    pub code: u32,
    /// Untranslated display name.
    pub name: &'static str,
}

impl KeyboardLayout {
    pub const fn new(code: u32, name: &'static str) -> Self {
        Self { code, name }
    }
}

/// A variant of a standard keyboard layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LayoutVariant {
    /// Keyboard layout identifier (KLID) including the variant selector.
    pub code: u32,
    /// Windows `Layout Id` of the variant.
    pub variant_id: u32,
    /// Untranslated display name.
    pub name: &'static str,
}

impl LayoutVariant {
    pub const fn new(code: u32, variant_id: u32, name: &'static str) -> Self {
        Self {
            code,
            variant_id,
            name,
        }
    }
}

/// A global input method editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct InputMethodEditor {
    /// IME layout identifier.
    pub code: u32,
    /// IME module file name, e.g. `"imjp81.ime"`.
    pub file: &'static str,
    /// Untranslated display name.
    pub name: &'static str,
}

impl InputMethodEditor {
    pub const fn new(code: u32, file: &'static str, name: &'static str) -> Self {
        Self { code, file, name }
    }
}

/// Common view over the three catalog entry types.
pub trait CatalogEntry {
    /// The layout identifier.
    fn code(&self) -> u32;
    /// The untranslated display name, also used as the translation key.
    fn name(&self) -> &'static str;
}

impl CatalogEntry for KeyboardLayout {
    fn code(&self) -> u32 {
        self.code
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

impl CatalogEntry for LayoutVariant {
    fn code(&self) -> u32 {
        self.code
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

impl CatalogEntry for InputMethodEditor {
    fn code(&self) -> u32 {
        self.code
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_type_flag_values() {
        assert_eq!(LayoutTypes::STANDARD.0, 1);
        assert_eq!(LayoutTypes::VARIANT.0, 2);
        assert_eq!(LayoutTypes::IME.0, 4);
        assert_eq!(LayoutTypes::ALL.0, 7);
    }

    #[test]
    fn test_layout_types_bitor_combines_flags() {
        let mut types = LayoutTypes::STANDARD | LayoutTypes::IME;
        assert!(types.contains(LayoutTypes::STANDARD));
        assert!(types.contains(LayoutTypes::IME));
        assert!(!types.contains(LayoutTypes::VARIANT));

        types |= LayoutTypes::VARIANT;
        assert_eq!(types, LayoutTypes::ALL);
    }

    #[test]
    fn test_empty_layout_types() {
        assert!(LayoutTypes::default().is_empty());
        assert!(LayoutTypes(0x80).is_empty(), "unknown bits select nothing");
        assert!(!LayoutTypes::ALL.contains(LayoutTypes::default()));
    }

    #[test]
    fn test_catalog_entry_trait_exposes_code_and_name() {
        let ime = InputMethodEditor::new(0xE001_0411, "imjp81.ime", "Japanese");
        assert_eq!(CatalogEntry::code(&ime), 0xE001_0411);
        assert_eq!(CatalogEntry::name(&ime), "Japanese");
    }
}
