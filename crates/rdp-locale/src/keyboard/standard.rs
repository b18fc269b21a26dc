//! Standard keyboard layouts, one per base input language.
//!
//! Mirrors the `Keyboard Layouts` registry key of Windows XP.  Order matters:
//! enumeration returns entries in table order and lookups stop at the first
//! match, so [`KBD_CANADIAN_FRENCH`] shadows its [`KBD_CANADIAN_ENGLISH`] alias.

use super::layout_ids::*;
use super::KeyboardLayout;

/// Number of entries in [`STANDARD_LAYOUTS`].
pub const STANDARD_LAYOUT_COUNT: usize = 85;

/// Compiled-in catalog of standard keyboard layouts.
pub static STANDARD_LAYOUTS: [KeyboardLayout; STANDARD_LAYOUT_COUNT] = [
    KeyboardLayout::new(KBD_ARABIC_101, "Arabic (101)"),
    KeyboardLayout::new(KBD_BULGARIAN, "Bulgarian"),
    KeyboardLayout::new(KBD_CHINESE_TRADITIONAL_US, "Chinese (Traditional) - US Keyboard"),
    KeyboardLayout::new(KBD_CZECH, "Czech"),
    KeyboardLayout::new(KBD_DANISH, "Danish"),
    KeyboardLayout::new(KBD_GERMAN, "German"),
    KeyboardLayout::new(KBD_GREEK, "Greek"),
    KeyboardLayout::new(KBD_US, "US"),
    KeyboardLayout::new(KBD_SPANISH, "Spanish"),
    KeyboardLayout::new(KBD_FINNISH, "Finnish"),
    KeyboardLayout::new(KBD_FRENCH, "French"),
    KeyboardLayout::new(KBD_HEBREW, "Hebrew"),
    KeyboardLayout::new(KBD_HUNGARIAN, "Hungarian"),
    KeyboardLayout::new(KBD_ICELANDIC, "Icelandic"),
    KeyboardLayout::new(KBD_ITALIAN, "Italian"),
    KeyboardLayout::new(KBD_JAPANESE, "Japanese"),
    KeyboardLayout::new(KBD_KOREAN, "Korean"),
    KeyboardLayout::new(KBD_DUTCH, "Dutch"),
    KeyboardLayout::new(KBD_NORWEGIAN, "Norwegian"),
    KeyboardLayout::new(KBD_POLISH_PROGRAMMERS, "Polish (Programmers)"),
    KeyboardLayout::new(KBD_PORTUGUESE_BRAZILIAN_ABNT, "Portuguese (Brazilian ABNT)"),
    KeyboardLayout::new(KBD_ROMANIAN, "Romanian"),
    KeyboardLayout::new(KBD_RUSSIAN, "Russian"),
    KeyboardLayout::new(KBD_CROATIAN, "Croatian"),
    KeyboardLayout::new(KBD_SLOVAK, "Slovak"),
    KeyboardLayout::new(KBD_ALBANIAN, "Albanian"),
    KeyboardLayout::new(KBD_SWEDISH, "Swedish"),
    KeyboardLayout::new(KBD_THAI_KEDMANEE, "Thai Kedmanee"),
    KeyboardLayout::new(KBD_TURKISH_Q, "Turkish Q"),
    KeyboardLayout::new(KBD_URDU, "Urdu"),
    KeyboardLayout::new(KBD_UKRAINIAN, "Ukrainian"),
    KeyboardLayout::new(KBD_BELARUSIAN, "Belarusian"),
    KeyboardLayout::new(KBD_SLOVENIAN, "Slovenian"),
    KeyboardLayout::new(KBD_ESTONIAN, "Estonian"),
    KeyboardLayout::new(KBD_LATVIAN, "Latvian"),
    KeyboardLayout::new(KBD_LITHUANIAN_IBM, "Lithuanian IBM"),
    KeyboardLayout::new(KBD_FARSI, "Farsi"),
    KeyboardLayout::new(KBD_VIETNAMESE, "Vietnamese"),
    KeyboardLayout::new(KBD_ARMENIAN_EASTERN, "Armenian Eastern"),
    KeyboardLayout::new(KBD_AZERI_LATIN, "Azeri Latin"),
    KeyboardLayout::new(KBD_FYRO_MACEDONIAN, "FYRO Macedonian"),
    KeyboardLayout::new(KBD_GEORGIAN, "Georgian"),
    KeyboardLayout::new(KBD_FAEROESE, "Faeroese"),
    KeyboardLayout::new(KBD_DEVANAGARI_INSCRIPT, "Devanagari - INSCRIPT"),
    KeyboardLayout::new(KBD_MALTESE_47_KEY, "Maltese 47-key"),
    KeyboardLayout::new(KBD_NORWEGIAN_WITH_SAMI, "Norwegian with Sami"),
    KeyboardLayout::new(KBD_KAZAKH, "Kazakh"),
    KeyboardLayout::new(KBD_KYRGYZ_CYRILLIC, "Kyrgyz Cyrillic"),
    KeyboardLayout::new(KBD_TATAR, "Tatar"),
    KeyboardLayout::new(KBD_BENGALI, "Bengali"),
    KeyboardLayout::new(KBD_PUNJABI, "Punjabi"),
    KeyboardLayout::new(KBD_GUJARATI, "Gujarati"),
    KeyboardLayout::new(KBD_TAMIL, "Tamil"),
    KeyboardLayout::new(KBD_TELUGU, "Telugu"),
    KeyboardLayout::new(KBD_KANNADA, "Kannada"),
    KeyboardLayout::new(KBD_MALAYALAM, "Malayalam"),
    KeyboardLayout::new(KBD_MARATHI, "Marathi"),
    KeyboardLayout::new(KBD_MONGOLIAN_CYRILLIC, "Mongolian Cyrillic"),
    KeyboardLayout::new(KBD_UNITED_KINGDOM_EXTENDED, "United Kingdom Extended"),
    KeyboardLayout::new(KBD_SYRIAC, "Syriac"),
    KeyboardLayout::new(KBD_NEPALI, "Nepali"),
    KeyboardLayout::new(KBD_PASHTO, "Pashto"),
    KeyboardLayout::new(KBD_DIVEHI_PHONETIC, "Divehi Phonetic"),
    KeyboardLayout::new(KBD_LUXEMBOURGISH, "Luxembourgish"),
    KeyboardLayout::new(KBD_MAORI, "Maori"),
    KeyboardLayout::new(KBD_CHINESE_SIMPLIFIED_US, "Chinese (Simplified) - US Keyboard"),
    KeyboardLayout::new(KBD_SWISS_GERMAN, "Swiss German"),
    KeyboardLayout::new(KBD_UNITED_KINGDOM, "United Kingdom"),
    KeyboardLayout::new(KBD_LATIN_AMERICAN, "Latin American"),
    KeyboardLayout::new(KBD_BELGIAN_FRENCH, "Belgian French"),
    KeyboardLayout::new(KBD_BELGIAN_PERIOD, "Belgian (Period)"),
    KeyboardLayout::new(KBD_PORTUGUESE, "Portuguese"),
    KeyboardLayout::new(KBD_SERBIAN_LATIN, "Serbian (Latin)"),
    KeyboardLayout::new(KBD_AZERI_CYRILLIC, "Azeri Cyrillic"),
    KeyboardLayout::new(KBD_SWEDISH_WITH_SAMI, "Swedish with Sami"),
    KeyboardLayout::new(KBD_UZBEK_CYRILLIC, "Uzbek Cyrillic"),
    KeyboardLayout::new(KBD_INUKTITUT_LATIN, "Inuktitut Latin"),
    KeyboardLayout::new(KBD_CANADIAN_FRENCH_LEGACY, "Canadian French (legacy)"),
    KeyboardLayout::new(KBD_SERBIAN_CYRILLIC, "Serbian (Cyrillic)"),
    KeyboardLayout::new(KBD_CANADIAN_FRENCH, "Canadian French"),
    KeyboardLayout::new(KBD_CANADIAN_ENGLISH, "Canadian English"),
    KeyboardLayout::new(KBD_SWISS_FRENCH, "Swiss French"),
    KeyboardLayout::new(KBD_BOSNIAN, "Bosnian"),
    KeyboardLayout::new(KBD_IRISH, "Irish"),
    KeyboardLayout::new(KBD_BOSNIAN_CYRILLIC, "Bosnian Cyrillic"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_and_last_standard_entries() {
        assert_eq!(STANDARD_LAYOUTS[0], KeyboardLayout::new(0x0000_0401, "Arabic (101)"));
        assert_eq!(
            STANDARD_LAYOUTS[STANDARD_LAYOUT_COUNT - 1],
            KeyboardLayout::new(0x0000_201A, "Bosnian Cyrillic")
        );
    }

    #[test]
    fn test_standard_codes_are_base_language_ids() {
        // Standard layouts never select a variant: the high word is always zero.
        for layout in &STANDARD_LAYOUTS {
            assert_ne!(layout.code, 0, "{} must have a non-zero code", layout.name);
            assert_eq!(
                layout.code >> 16,
                0,
                "{} (0x{:08X}) must not carry a variant selector",
                layout.name,
                layout.code
            );
        }
    }

    #[test]
    fn test_only_canadian_english_reuses_a_standard_code() {
        let mut duplicates = Vec::new();
        for (i, layout) in STANDARD_LAYOUTS.iter().enumerate() {
            if STANDARD_LAYOUTS[..i].iter().any(|earlier| earlier.code == layout.code) {
                duplicates.push(layout.name);
            }
        }
        assert_eq!(duplicates, vec!["Canadian English"]);
    }

    #[test]
    fn test_standard_names_are_unique_and_non_empty() {
        for (i, layout) in STANDARD_LAYOUTS.iter().enumerate() {
            assert!(!layout.name.is_empty());
            assert!(
                STANDARD_LAYOUTS[..i].iter().all(|earlier| earlier.name != layout.name),
                "duplicate standard layout name {:?}",
                layout.name
            );
        }
    }
}
