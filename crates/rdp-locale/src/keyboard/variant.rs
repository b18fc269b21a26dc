//! Alternate key arrangements of the standard layouts.
//!
//! Each entry carries the full layout identifier (variant selector in the high
//! word) plus the `Layout Id` value Windows stores for the variant.

use super::layout_ids::*;
use super::LayoutVariant;

/// Number of entries in [`LAYOUT_VARIANTS`].
pub const LAYOUT_VARIANT_COUNT: usize = 45;

/// Compiled-in catalog of keyboard layout variants.
///
/// French Bépo and German Neo both report variant id `0x00C0`.  They are kept
/// as shipped; nothing in this crate keys on the variant id alone.
pub static LAYOUT_VARIANTS: [LayoutVariant; LAYOUT_VARIANT_COUNT] = [
    LayoutVariant::new(KBD_ARABIC_102, 0x0028, "Arabic (102)"),
    LayoutVariant::new(KBD_BULGARIAN_LATIN, 0x0004, "Bulgarian (Latin)"),
    LayoutVariant::new(KBD_CZECH_QWERTY, 0x0005, "Czech (QWERTY)"),
    LayoutVariant::new(KBD_GERMAN_IBM, 0x0012, "German (IBM)"),
    LayoutVariant::new(KBD_GREEK_220, 0x0016, "Greek (220)"),
    LayoutVariant::new(KBD_UNITED_STATES_DVORAK, 0x0002, "United States-Dvorak"),
    LayoutVariant::new(KBD_SPANISH_VARIATION, 0x0086, "Spanish Variation"),
    LayoutVariant::new(KBD_HUNGARIAN_101_KEY, 0x0006, "Hungarian 101-key"),
    LayoutVariant::new(KBD_ITALIAN_142, 0x0003, "Italian (142)"),
    LayoutVariant::new(KBD_POLISH_214, 0x0007, "Polish (214)"),
    LayoutVariant::new(KBD_PORTUGUESE_BRAZILIAN_ABNT2, 0x001D, "Portuguese (Brazilian ABNT2)"),
    LayoutVariant::new(KBD_RUSSIAN_TYPEWRITER, 0x0008, "Russian (Typewriter)"),
    LayoutVariant::new(KBD_SLOVAK_QWERTY, 0x0013, "Slovak (QWERTY)"),
    LayoutVariant::new(KBD_THAI_PATTACHOTE, 0x0021, "Thai Pattachote"),
    LayoutVariant::new(KBD_TURKISH_F, 0x0014, "Turkish F"),
    LayoutVariant::new(KBD_LATVIAN_QWERTY, 0x0015, "Latvian (QWERTY)"),
    LayoutVariant::new(KBD_LITHUANIAN, 0x0027, "Lithuanian"),
    LayoutVariant::new(KBD_ARMENIAN_WESTERN, 0x0025, "Armenian Western"),
    LayoutVariant::new(KBD_HINDI_TRADITIONAL, 0x000C, "Hindi Traditional"),
    LayoutVariant::new(KBD_MALTESE_48_KEY, 0x002B, "Maltese 48-key"),
    LayoutVariant::new(KBD_SAMI_EXTENDED_NORWAY, 0x002C, "Sami Extended Norway"),
    LayoutVariant::new(KBD_BENGALI_INSCRIPT, 0x002A, "Bengali (Inscript)"),
    LayoutVariant::new(KBD_SYRIAC_PHONETIC, 0x000E, "Syriac Phonetic"),
    LayoutVariant::new(KBD_DIVEHI_TYPEWRITER, 0x000D, "Divehi Typewriter"),
    LayoutVariant::new(KBD_BELGIAN_COMMA, 0x001E, "Belgian (Comma)"),
    LayoutVariant::new(KBD_FINNISH_WITH_SAMI, 0x002D, "Finnish with Sami"),
    LayoutVariant::new(KBD_CANADIAN_MULTILINGUAL_STANDARD, 0x0020, "Canadian Multilingual Standard"),
    LayoutVariant::new(KBD_GAELIC, 0x0026, "Gaelic"),
    LayoutVariant::new(KBD_ARABIC_102_AZERTY, 0x0029, "Arabic (102) AZERTY"),
    LayoutVariant::new(KBD_CZECH_PROGRAMMERS, 0x000A, "Czech Programmers"),
    LayoutVariant::new(KBD_GREEK_319, 0x0018, "Greek (319)"),
    LayoutVariant::new(KBD_UNITED_STATES_INTERNATIONAL, 0x0001, "United States-International"),
    LayoutVariant::new(KBD_THAI_KEDMANEE_NON_SHIFTLOCK, 0x0022, "Thai Kedmanee (non-ShiftLock)"),
    LayoutVariant::new(KBD_SAMI_EXTENDED_FINLAND_SWEDEN, 0x002E, "Sami Extended Finland-Sweden"),
    LayoutVariant::new(KBD_GREEK_220_LATIN, 0x0017, "Greek (220) Latin"),
    LayoutVariant::new(KBD_UNITED_STATES_DVORAK_FOR_LEFT_HAND, 0x001A, "United States-Dvorak for left hand"),
    LayoutVariant::new(KBD_THAI_PATTACHOTE_NON_SHIFTLOCK, 0x0023, "Thai Pattachote (non-ShiftLock)"),
    LayoutVariant::new(KBD_GREEK_319_LATIN, 0x0011, "Greek (319) Latin"),
    LayoutVariant::new(KBD_UNITED_STATES_DVORAK_FOR_RIGHT_HAND, 0x001B, "United States-Dvorak for right hand"),
    LayoutVariant::new(KBD_UNITED_STATES_DVORAK_PROGRAMMER, 0x001C, "United States-Programmer Dvorak"),
    LayoutVariant::new(KBD_GREEK_LATIN, 0x0019, "Greek Latin"),
    LayoutVariant::new(KBD_US_ENGLISH_TABLE_FOR_IBM_ARABIC_238_L, 0x000B, "US English Table for IBM Arabic 238_L"),
    LayoutVariant::new(KBD_GREEK_POLYTONIC, 0x001F, "Greek Polytonic"),
    // Name bytes match what existing clients send, double-encoded accent included.
    LayoutVariant::new(KBD_FRENCH_BEPO, 0x00C0, "French BÃ©po"),
    LayoutVariant::new(KBD_GERMAN_NEO, 0x00C0, "German Neo"),
];
