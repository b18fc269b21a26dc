//! Enumeration and lookup over the keyboard layout catalogs.
//!
//! # Ownership of enumerated layouts
//!
//! [`get_keyboard_layouts`] copies the selected catalogs into a freshly
//! allocated [`LayoutList`].  Every name is duplicated into owned storage, so
//! the list outlives any translation catalog used to build it.  Dropping the
//! list releases every name together with the backing storage; there is no
//! separate free step to forget or to run twice.
//!
//! Enumeration reserves memory fallibly.  If any reservation fails the partly
//! built list is dropped and [`KeyboardLayoutError::Allocation`] is returned,
//! so callers never observe a list without its terminator.

use std::borrow::Cow;
use std::collections::TryReserveError;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

use super::ime::INPUT_METHOD_EDITORS;
use super::standard::STANDARD_LAYOUTS;
use super::variant::LAYOUT_VARIANTS;
use super::{CatalogEntry, InputMethodEditor, KeyboardLayout, LayoutTypes, LayoutVariant};
use crate::locale::{Localizer, Untranslated};

/// Name reported for a layout code that no catalog contains.
pub const UNKNOWN_LAYOUT_NAME: &str = "unknown";

/// Errors produced while enumerating keyboard layouts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyboardLayoutError {
    /// Memory for the list or one of its names could not be reserved.
    #[error("failed to allocate keyboard layout list: {0}")]
    Allocation(#[from] TryReserveError),
}

/// One enumerated layout: its code and an owned copy of its display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayoutEntry {
    pub code: u32,
    pub name: String,
}

impl LayoutEntry {
    /// The entry that terminates every [`LayoutList`].
    pub fn terminator() -> Self {
        Self {
            code: 0,
            name: String::new(),
        }
    }

    /// Returns `true` for the zero-code terminator.
    pub fn is_terminator(&self) -> bool {
        self.code == 0 && self.name.is_empty()
    }
}

/// Owned result of [`get_keyboard_layouts`].
///
/// Always ends with a [`LayoutEntry::terminator`].  [`LayoutList::entries`]
/// hides it; [`LayoutList::with_terminator`] exposes it for consumers that
/// walk the list until the zero code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutList {
    entries: Vec<LayoutEntry>,
}

impl LayoutList {
    /// Number of layouts, not counting the terminator.
    pub fn len(&self) -> usize {
        self.entries.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The enumerated layouts without the terminator.
    pub fn entries(&self) -> &[LayoutEntry] {
        &self.entries[..self.len()]
    }

    /// The enumerated layouts followed by the zero-code terminator.
    pub fn with_terminator(&self) -> &[LayoutEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LayoutEntry> {
        self.entries().iter()
    }

    /// Consumes the list, returning the layouts without the terminator.
    pub fn into_entries(mut self) -> Vec<LayoutEntry> {
        self.entries.pop();
        self.entries
    }
}

impl<'a> IntoIterator for &'a LayoutList {
    type Item = &'a LayoutEntry;
    type IntoIter = std::slice::Iter<'a, LayoutEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ── Catalog set ───────────────────────────────────────────────────────────────

/// The three catalogs in search order.
#[derive(Clone, Copy)]
struct Catalogs<'a> {
    standard: &'a [KeyboardLayout],
    variants: &'a [LayoutVariant],
    imes: &'a [InputMethodEditor],
}

static BUILTIN: Catalogs<'static> = Catalogs {
    standard: &STANDARD_LAYOUTS,
    variants: &LAYOUT_VARIANTS,
    imes: &INPUT_METHOD_EDITORS,
};

impl Catalogs<'_> {
    fn collect<L: Localizer + ?Sized>(
        &self,
        types: LayoutTypes,
        localizer: &L,
    ) -> Result<LayoutList, KeyboardLayoutError> {
        let mut entries: Vec<LayoutEntry> = Vec::new();
        entries.try_reserve_exact(1)?;

        if types.contains(LayoutTypes::STANDARD) {
            append_entries(&mut entries, self.standard, localizer)?;
        }
        if types.contains(LayoutTypes::VARIANT) {
            append_entries(&mut entries, self.variants, localizer)?;
        }
        if types.contains(LayoutTypes::IME) {
            append_entries(&mut entries, self.imes, localizer)?;
        }

        // Capacity for the terminator was reserved by the last append.
        entries.push(LayoutEntry::terminator());

        debug!(
            "enumerated {} keyboard layouts for type mask 0x{:X}",
            entries.len() - 1,
            types.0
        );
        Ok(LayoutList { entries })
    }

    fn name_of(&self, code: u32) -> Option<&'static str> {
        first_name(self.standard, code)
            .or_else(|| first_name(self.variants, code))
            .or_else(|| first_name(self.imes, code))
    }

    fn code_of<L: Localizer + ?Sized>(&self, name: &str, localizer: &L) -> Option<u32> {
        first_code(self.standard, name, localizer)
            .or_else(|| first_code(self.variants, name, localizer))
            .or_else(|| first_code(self.imes, name, localizer))
    }
}

fn append_entries<E: CatalogEntry, L: Localizer + ?Sized>(
    entries: &mut Vec<LayoutEntry>,
    table: &[E],
    localizer: &L,
) -> Result<(), TryReserveError> {
    // One extra slot keeps room for the terminator.
    entries.try_reserve_exact(table.len() + 1)?;
    for entry in table {
        let name = duplicate_name(&localizer.translate(entry.name()))?;
        entries.push(LayoutEntry {
            code: entry.code(),
            name,
        });
    }
    Ok(())
}

fn duplicate_name(name: &str) -> Result<String, TryReserveError> {
    let mut owned = String::new();
    owned.try_reserve_exact(name.len())?;
    owned.push_str(name);
    Ok(owned)
}

fn first_name<E: CatalogEntry>(table: &[E], code: u32) -> Option<&'static str> {
    table.iter().find(|entry| entry.code() == code).map(E::name)
}

fn first_code<E: CatalogEntry, L: Localizer + ?Sized>(
    table: &[E],
    name: &str,
    localizer: &L,
) -> Option<u32> {
    table
        .iter()
        .find(|entry| localizer.translate(entry.name()) == name)
        .map(E::code)
}

// ── Registry with a localizer ─────────────────────────────────────────────────

/// Keyboard layout registry that reports names through a [`Localizer`].
///
/// `KeyboardLayouts::new()` uses [`Untranslated`] and behaves exactly like the
/// free functions of this module.
#[derive(Debug, Clone, Default)]
pub struct KeyboardLayouts<L = Untranslated> {
    localizer: L,
}

impl KeyboardLayouts<Untranslated> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<L: Localizer> KeyboardLayouts<L> {
    pub fn with_localizer(localizer: L) -> Self {
        Self { localizer }
    }

    /// Enumerates the catalogs selected by `types` with translated names.
    pub fn layouts(&self, types: LayoutTypes) -> Result<LayoutList, KeyboardLayoutError> {
        BUILTIN.collect(types, &self.localizer)
    }

    /// Returns the translated name of `code`, or [`UNKNOWN_LAYOUT_NAME`].
    pub fn name_from_code(&self, code: u32) -> Cow<'_, str> {
        match BUILTIN.name_of(code) {
            Some(name) => self.localizer.translate(name),
            None => {
                trace!("no keyboard layout with code 0x{code:08X}");
                Cow::Borrowed(UNKNOWN_LAYOUT_NAME)
            }
        }
    }

    /// Returns the code of the layout whose translated name equals `name`, or 0.
    pub fn code_from_name(&self, name: &str) -> u32 {
        BUILTIN.code_of(name, &self.localizer).unwrap_or_else(|| {
            trace!("no keyboard layout named {name:?}");
            0
        })
    }
}

// ── Free functions over the untranslated catalogs ─────────────────────────────

/// Copies every layout of the selected catalogs into a new [`LayoutList`].
///
/// Catalogs are concatenated standard → variant → IME, each in table order.
/// An empty mask yields a list holding only the terminator.
pub fn get_keyboard_layouts(types: LayoutTypes) -> Result<LayoutList, KeyboardLayoutError> {
    BUILTIN.collect(types, &Untranslated)
}

/// Releases a list returned by [`get_keyboard_layouts`].  `None` is a no-op.
pub fn release_keyboard_layouts(layouts: Option<LayoutList>) {
    if let Some(layouts) = layouts {
        trace!("releasing {} keyboard layouts", layouts.len());
        drop(layouts);
    }
}

/// Returns the name of the first layout with `code`, or [`UNKNOWN_LAYOUT_NAME`].
pub fn layout_name_from_code(code: u32) -> &'static str {
    BUILTIN.name_of(code).unwrap_or_else(|| {
        trace!("no keyboard layout with code 0x{code:08X}");
        UNKNOWN_LAYOUT_NAME
    })
}

/// Returns the code of the first layout named exactly `name`, or 0.
///
/// The comparison is byte-exact and case-sensitive.
pub fn layout_code_from_name(name: &str) -> u32 {
    BUILTIN.code_of(name, &Untranslated).unwrap_or_else(|| {
        trace!("no keyboard layout named {name:?}");
        0
    })
}

/// Returns the Windows `Layout Id` of the variant with `code`.
pub fn variant_id_from_code(code: u32) -> Option<u32> {
    LAYOUT_VARIANTS
        .iter()
        .find(|variant| variant.code == code)
        .map(|variant| variant.variant_id)
}

/// Returns the IME module file of the input method editor with `code`.
pub fn ime_file_from_code(code: u32) -> Option<&'static str> {
    INPUT_METHOD_EDITORS
        .iter()
        .find(|ime| ime.code == code)
        .map(|ime| ime.file)
}

pub fn standard_layouts() -> &'static [KeyboardLayout] {
    &STANDARD_LAYOUTS
}

pub fn layout_variants() -> &'static [LayoutVariant] {
    &LAYOUT_VARIANTS
}

pub fn input_method_editors() -> &'static [InputMethodEditor] {
    &INPUT_METHOD_EDITORS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::ime::INPUT_METHOD_EDITOR_COUNT;
    use crate::keyboard::layout_ids::*;
    use crate::keyboard::standard::STANDARD_LAYOUT_COUNT;
    use crate::keyboard::variant::LAYOUT_VARIANT_COUNT;
    use crate::locale::mock::MockLocalizer;

    /// Catalogs where one code and one name appear in more than one table.
    const SHADOWED_STANDARD: &[KeyboardLayout] = &[KeyboardLayout::new(0x0000_0409, "US")];
    const SHADOWED_VARIANTS: &[LayoutVariant] = &[
        LayoutVariant::new(0x0000_0409, 0x0002, "US Dvorak"),
        LayoutVariant::new(0x0001_0409, 0x0003, "US"),
    ];
    const SHADOWED_IMES: &[InputMethodEditor] =
        &[InputMethodEditor::new(0x0001_0409, "x.ime", "US IME")];

    fn shadowed() -> Catalogs<'static> {
        Catalogs {
            standard: SHADOWED_STANDARD,
            variants: SHADOWED_VARIANTS,
            imes: SHADOWED_IMES,
        }
    }

    #[test]
    fn test_enumerate_each_catalog_alone() {
        let cases = [
            (LayoutTypes::STANDARD, STANDARD_LAYOUT_COUNT),
            (LayoutTypes::VARIANT, LAYOUT_VARIANT_COUNT),
            (LayoutTypes::IME, INPUT_METHOD_EDITOR_COUNT),
        ];
        for (types, expected) in cases {
            let list = get_keyboard_layouts(types).expect("enumeration must succeed");
            assert_eq!(list.len(), expected, "wrong count for mask {types:?}");
            assert_eq!(list.with_terminator().len(), expected + 1);
        }
    }

    #[test]
    fn test_enumerate_all_catalogs_counts_every_entry() {
        let list = get_keyboard_layouts(LayoutTypes::ALL).expect("enumeration must succeed");
        assert_eq!(
            list.len(),
            STANDARD_LAYOUT_COUNT + LAYOUT_VARIANT_COUNT + INPUT_METHOD_EDITOR_COUNT
        );
    }

    #[test]
    fn test_enumerate_concatenates_in_fixed_order() {
        // IME | STANDARD still yields standard layouts first.
        let list = get_keyboard_layouts(LayoutTypes::IME | LayoutTypes::STANDARD)
            .expect("enumeration must succeed");
        let entries = list.entries();

        assert_eq!(entries[0].code, KBD_ARABIC_101);
        assert_eq!(entries[STANDARD_LAYOUT_COUNT - 1].code, KBD_BOSNIAN_CYRILLIC);
        assert_eq!(entries[STANDARD_LAYOUT_COUNT].code, KBD_CHINESE_TRADITIONAL_PHONETIC);
        assert_eq!(entries.last().map(|e| e.code), Some(KBD_CHINESE_TRADITIONAL_ALPHANUMERIC));
    }

    #[test]
    fn test_enumerate_empty_mask_yields_only_terminator() {
        let list = get_keyboard_layouts(LayoutTypes::default()).expect("enumeration must succeed");
        assert!(list.is_empty());
        assert_eq!(list.with_terminator(), &[LayoutEntry::terminator()]);
    }

    #[test]
    fn test_list_is_always_terminated() {
        for mask in 0..=7 {
            let list = get_keyboard_layouts(LayoutTypes(mask)).expect("enumeration must succeed");
            let last = list.with_terminator().last().expect("terminator must be present");
            assert!(last.is_terminator(), "mask {mask} list must end with the terminator");
            assert!(list.iter().all(|e| !e.is_terminator()));
        }
    }

    #[test]
    fn test_into_entries_drops_terminator() {
        let entries = get_keyboard_layouts(LayoutTypes::VARIANT)
            .expect("enumeration must succeed")
            .into_entries();
        assert_eq!(entries.len(), LAYOUT_VARIANT_COUNT);
        assert_eq!(entries[0].name, "Arabic (102)");
    }

    #[test]
    fn test_release_none_is_noop() {
        release_keyboard_layouts(None);
        release_keyboard_layouts(get_keyboard_layouts(LayoutTypes::ALL).ok());
    }

    #[test]
    fn test_name_from_code_unknown() {
        assert_eq!(layout_name_from_code(0xFFFF_FFFF), UNKNOWN_LAYOUT_NAME);
        assert_eq!(layout_name_from_code(0), "unknown");
    }

    #[test]
    fn test_code_from_name_unknown() {
        assert_eq!(layout_code_from_name("Klingon"), 0);
        assert_eq!(layout_code_from_name(""), 0);
    }

    #[test]
    fn test_code_from_name_is_case_sensitive() {
        assert_eq!(layout_code_from_name("German"), KBD_GERMAN);
        assert_eq!(layout_code_from_name("german"), 0);
        assert_eq!(layout_code_from_name("German "), 0);
    }

    #[test]
    fn test_lookups_search_standard_before_variants_before_imes() {
        let catalogs = shadowed();
        assert_eq!(catalogs.name_of(0x0000_0409), Some("US"));
        assert_eq!(catalogs.name_of(0x0001_0409), Some("US"));
        assert_eq!(catalogs.code_of("US", &Untranslated), Some(0x0000_0409));
        assert_eq!(catalogs.code_of("US IME", &Untranslated), Some(0x0001_0409));
    }

    #[test]
    fn test_canadian_english_is_shadowed_by_canadian_french() {
        assert_eq!(layout_name_from_code(KBD_CANADIAN_ENGLISH), "Canadian French");
        assert_eq!(layout_code_from_name("Canadian English"), KBD_CANADIAN_FRENCH);
    }

    #[test]
    fn test_variant_and_ime_lookups() {
        assert_eq!(layout_name_from_code(KBD_UNITED_STATES_DVORAK), "United States-Dvorak");
        assert_eq!(variant_id_from_code(KBD_UNITED_STATES_DVORAK), Some(0x0002));
        assert_eq!(variant_id_from_code(KBD_US), None);

        assert_eq!(
            layout_name_from_code(KBD_JAPANESE_INPUT_SYSTEM_MS_IME2002),
            "Japanese Input System (MS-IME2002)"
        );
        assert_eq!(ime_file_from_code(KBD_JAPANESE_INPUT_SYSTEM_MS_IME2002), Some("imjp81.ime"));
        assert_eq!(ime_file_from_code(KBD_JAPANESE), None);
    }

    #[test]
    fn test_registry_translates_enumerated_names() {
        let registry = KeyboardLayouts::with_localizer(MockLocalizer::new());

        let list = registry.layouts(LayoutTypes::STANDARD).expect("enumeration must succeed");
        assert_eq!(list.entries()[0].name, "ARABIC (101)");
        assert_eq!(registry.name_from_code(KBD_GERMAN), "GERMAN");
        assert_eq!(registry.code_from_name("GERMAN"), KBD_GERMAN);
        assert_eq!(registry.code_from_name("German"), 0);
    }

    #[test]
    fn test_registry_unknown_name_is_not_translated() {
        let localizer = MockLocalizer::new();
        let registry = KeyboardLayouts::with_localizer(&localizer);

        assert_eq!(registry.name_from_code(0xFFFF_FFFF), UNKNOWN_LAYOUT_NAME);
        assert!(localizer.calls().is_empty(), "the miss sentinel must not be translated");
    }

    #[test]
    fn test_registry_translates_only_the_matching_name() {
        let localizer = MockLocalizer::new();
        let registry = KeyboardLayouts::with_localizer(&localizer);

        assert_eq!(registry.name_from_code(KBD_ITALIAN), "ITALIAN");
        assert_eq!(localizer.calls(), vec!["Italian"]);
    }

    #[test]
    fn test_catalog_registry_lends_translated_names() {
        let catalog = crate::locale::LocaleCatalog::from_toml_str(
            "[translations]\n\"Italian\" = \"Italien\"\n",
        )
        .expect("valid catalog");
        let registry = KeyboardLayouts::with_localizer(catalog);

        assert!(matches!(registry.name_from_code(KBD_ITALIAN), Cow::Borrowed("Italien")));
        assert!(matches!(registry.name_from_code(KBD_IRISH), Cow::Borrowed("Irish")));
    }

    #[test]
    fn test_default_registry_matches_free_functions() {
        let registry = KeyboardLayouts::new();
        let list = registry.layouts(LayoutTypes::ALL).expect("enumeration must succeed");
        assert_eq!(list, get_keyboard_layouts(LayoutTypes::ALL).expect("enumeration must succeed"));
        assert_eq!(registry.name_from_code(KBD_IRISH), layout_name_from_code(KBD_IRISH));
        assert_eq!(registry.code_from_name("Irish"), KBD_IRISH);
    }

    #[test]
    fn test_allocation_error_message() {
        let err = Vec::<u8>::new()
            .try_reserve(usize::MAX)
            .expect_err("reserving usize::MAX bytes must fail");
        let err = KeyboardLayoutError::from(err);
        assert!(err.to_string().starts_with("failed to allocate keyboard layout list"));
    }
}
