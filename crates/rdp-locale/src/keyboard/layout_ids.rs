//! Numeric keyboard layout identifiers (KLIDs) as sent in the RDP client core data.
//!
//! The low word of a layout identifier is the Windows language identifier
//! (e.g. `0x0409` = English (United States)).  The high word selects a
//! variant of that base layout: `0x0001_0409` is United States-Dvorak,
//! `0x0002_0409` United States-International, and so on.  IME identifiers
//! carry `0xE0` in the top byte.
//!
//! Reference: `HKLM\SYSTEM\CurrentControlSet\Control\Keyboard Layouts`.

// ── Standard layouts ──────────────────────────────────────────────────────────

pub const KBD_US: u32 = 0x0000_0409;
pub const KBD_ARABIC_101: u32 = 0x0000_0401;
pub const KBD_BULGARIAN: u32 = 0x0000_0402;
pub const KBD_CHINESE_TRADITIONAL_US: u32 = 0x0000_0404;
pub const KBD_CZECH: u32 = 0x0000_0405;
pub const KBD_DANISH: u32 = 0x0000_0406;
pub const KBD_GERMAN: u32 = 0x0000_0407;
pub const KBD_GREEK: u32 = 0x0000_0408;
pub const KBD_SPANISH: u32 = 0x0000_040A;
pub const KBD_FINNISH: u32 = 0x0000_040B;
pub const KBD_FRENCH: u32 = 0x0000_040C;
pub const KBD_HEBREW: u32 = 0x0000_040D;
pub const KBD_HUNGARIAN: u32 = 0x0000_040E;
pub const KBD_ICELANDIC: u32 = 0x0000_040F;
pub const KBD_ITALIAN: u32 = 0x0000_0410;
pub const KBD_JAPANESE: u32 = 0x0000_0411;
pub const KBD_KOREAN: u32 = 0x0000_0412;
pub const KBD_DUTCH: u32 = 0x0000_0413;
pub const KBD_NORWEGIAN: u32 = 0x0000_0414;
pub const KBD_POLISH_PROGRAMMERS: u32 = 0x0000_0415;
pub const KBD_PORTUGUESE_BRAZILIAN_ABNT: u32 = 0x0000_0416;
pub const KBD_ROMANIAN: u32 = 0x0000_0418;
pub const KBD_RUSSIAN: u32 = 0x0000_0419;
pub const KBD_CROATIAN: u32 = 0x0000_041A;
pub const KBD_SLOVAK: u32 = 0x0000_041B;
pub const KBD_ALBANIAN: u32 = 0x0000_041C;
pub const KBD_SWEDISH: u32 = 0x0000_041D;
pub const KBD_THAI_KEDMANEE: u32 = 0x0000_041E;
pub const KBD_TURKISH_Q: u32 = 0x0000_041F;
pub const KBD_URDU: u32 = 0x0000_0420;
pub const KBD_UKRAINIAN: u32 = 0x0000_0422;
pub const KBD_BELARUSIAN: u32 = 0x0000_0423;
pub const KBD_SLOVENIAN: u32 = 0x0000_0424;
pub const KBD_ESTONIAN: u32 = 0x0000_0425;
pub const KBD_LATVIAN: u32 = 0x0000_0426;
pub const KBD_LITHUANIAN_IBM: u32 = 0x0000_0427;
pub const KBD_FARSI: u32 = 0x0000_0429;
pub const KBD_VIETNAMESE: u32 = 0x0000_042A;
pub const KBD_ARMENIAN_EASTERN: u32 = 0x0000_042B;
pub const KBD_AZERI_LATIN: u32 = 0x0000_042C;
pub const KBD_FYRO_MACEDONIAN: u32 = 0x0000_042F;
pub const KBD_GEORGIAN: u32 = 0x0000_0437;
pub const KBD_FAEROESE: u32 = 0x0000_0438;
pub const KBD_DEVANAGARI_INSCRIPT: u32 = 0x0000_0439;
pub const KBD_MALTESE_47_KEY: u32 = 0x0000_043A;
pub const KBD_NORWEGIAN_WITH_SAMI: u32 = 0x0000_043B;
pub const KBD_KAZAKH: u32 = 0x0000_043F;
pub const KBD_KYRGYZ_CYRILLIC: u32 = 0x0000_0440;
pub const KBD_TATAR: u32 = 0x0000_0444;
pub const KBD_BENGALI: u32 = 0x0000_0445;
pub const KBD_PUNJABI: u32 = 0x0000_0446;
pub const KBD_GUJARATI: u32 = 0x0000_0447;
pub const KBD_TAMIL: u32 = 0x0000_0449;
pub const KBD_TELUGU: u32 = 0x0000_044A;
pub const KBD_KANNADA: u32 = 0x0000_044B;
pub const KBD_MALAYALAM: u32 = 0x0000_044C;
pub const KBD_MARATHI: u32 = 0x0000_044E;
pub const KBD_MONGOLIAN_CYRILLIC: u32 = 0x0000_0450;
pub const KBD_UNITED_KINGDOM_EXTENDED: u32 = 0x0000_0452;
pub const KBD_SYRIAC: u32 = 0x0000_045A;
pub const KBD_NEPALI: u32 = 0x0000_0461;
pub const KBD_PASHTO: u32 = 0x0000_0463;
pub const KBD_DIVEHI_PHONETIC: u32 = 0x0000_0465;
pub const KBD_LUXEMBOURGISH: u32 = 0x0000_046E;
pub const KBD_MAORI: u32 = 0x0000_0481;
pub const KBD_CHINESE_SIMPLIFIED_US: u32 = 0x0000_0804;
pub const KBD_SWISS_GERMAN: u32 = 0x0000_0807;
pub const KBD_UNITED_KINGDOM: u32 = 0x0000_0809;
pub const KBD_LATIN_AMERICAN: u32 = 0x0000_080A;
pub const KBD_BELGIAN_FRENCH: u32 = 0x0000_080C;
pub const KBD_BELGIAN_PERIOD: u32 = 0x0000_0813;
pub const KBD_PORTUGUESE: u32 = 0x0000_0816;
pub const KBD_SERBIAN_LATIN: u32 = 0x0000_081A;
pub const KBD_AZERI_CYRILLIC: u32 = 0x0000_082C;
pub const KBD_SWEDISH_WITH_SAMI: u32 = 0x0000_083B;
pub const KBD_UZBEK_CYRILLIC: u32 = 0x0000_0843;
pub const KBD_INUKTITUT_LATIN: u32 = 0x0000_085D;
pub const KBD_CANADIAN_FRENCH_LEGACY: u32 = 0x0000_0C0C;
pub const KBD_SERBIAN_CYRILLIC: u32 = 0x0000_0C1A;
pub const KBD_CANADIAN_FRENCH: u32 = 0x0000_1009;
/// Windows has no separate Canadian English layout; it shares the Canadian French KLID.
pub const KBD_CANADIAN_ENGLISH: u32 = KBD_CANADIAN_FRENCH;
pub const KBD_SWISS_FRENCH: u32 = 0x0000_100C;
pub const KBD_BOSNIAN: u32 = 0x0000_141A;
pub const KBD_IRISH: u32 = 0x0000_1809;
pub const KBD_BOSNIAN_CYRILLIC: u32 = 0x0000_201A;

// ── Layout variants ───────────────────────────────────────────────────────────

pub const KBD_ARABIC_102: u32 = 0x0001_0401;
pub const KBD_BULGARIAN_LATIN: u32 = 0x0001_0402;
pub const KBD_CZECH_QWERTY: u32 = 0x0001_0405;
pub const KBD_GERMAN_IBM: u32 = 0x0001_0407;
pub const KBD_GREEK_220: u32 = 0x0001_0408;
pub const KBD_UNITED_STATES_DVORAK: u32 = 0x0001_0409;
pub const KBD_SPANISH_VARIATION: u32 = 0x0001_040A;
pub const KBD_HUNGARIAN_101_KEY: u32 = 0x0001_040E;
pub const KBD_ITALIAN_142: u32 = 0x0001_0410;
pub const KBD_POLISH_214: u32 = 0x0001_0415;
pub const KBD_PORTUGUESE_BRAZILIAN_ABNT2: u32 = 0x0001_0416;
pub const KBD_RUSSIAN_TYPEWRITER: u32 = 0x0001_0419;
pub const KBD_SLOVAK_QWERTY: u32 = 0x0001_041B;
pub const KBD_THAI_PATTACHOTE: u32 = 0x0001_041E;
pub const KBD_TURKISH_F: u32 = 0x0001_041F;
pub const KBD_LATVIAN_QWERTY: u32 = 0x0001_0426;
pub const KBD_LITHUANIAN: u32 = 0x0001_0427;
pub const KBD_ARMENIAN_WESTERN: u32 = 0x0001_042B;
pub const KBD_HINDI_TRADITIONAL: u32 = 0x0001_0439;
pub const KBD_MALTESE_48_KEY: u32 = 0x0001_043A;
pub const KBD_SAMI_EXTENDED_NORWAY: u32 = 0x0001_043B;
pub const KBD_BENGALI_INSCRIPT: u32 = 0x0001_0445;
pub const KBD_SYRIAC_PHONETIC: u32 = 0x0001_045A;
pub const KBD_DIVEHI_TYPEWRITER: u32 = 0x0001_0465;
pub const KBD_BELGIAN_COMMA: u32 = 0x0001_080C;
pub const KBD_FINNISH_WITH_SAMI: u32 = 0x0001_083B;
pub const KBD_CANADIAN_MULTILINGUAL_STANDARD: u32 = 0x0001_1009;
pub const KBD_GAELIC: u32 = 0x0001_1809;
pub const KBD_ARABIC_102_AZERTY: u32 = 0x0002_0401;
pub const KBD_CZECH_PROGRAMMERS: u32 = 0x0002_0405;
pub const KBD_GREEK_319: u32 = 0x0002_0408;
pub const KBD_UNITED_STATES_INTERNATIONAL: u32 = 0x0002_0409;
pub const KBD_THAI_KEDMANEE_NON_SHIFTLOCK: u32 = 0x0002_041E;
pub const KBD_SAMI_EXTENDED_FINLAND_SWEDEN: u32 = 0x0002_083B;
pub const KBD_GREEK_220_LATIN: u32 = 0x0003_0408;
pub const KBD_UNITED_STATES_DVORAK_FOR_LEFT_HAND: u32 = 0x0003_0409;
pub const KBD_THAI_PATTACHOTE_NON_SHIFTLOCK: u32 = 0x0003_041E;
pub const KBD_GREEK_319_LATIN: u32 = 0x0004_0408;
pub const KBD_UNITED_STATES_DVORAK_FOR_RIGHT_HAND: u32 = 0x0004_0409;
pub const KBD_UNITED_STATES_DVORAK_PROGRAMMER: u32 = 0x1936_0409;
pub const KBD_GREEK_LATIN: u32 = 0x0005_0408;
pub const KBD_US_ENGLISH_TABLE_FOR_IBM_ARABIC_238_L: u32 = 0x0005_0409;
pub const KBD_GREEK_POLYTONIC: u32 = 0x0006_0408;
pub const KBD_FRENCH_BEPO: u32 = 0xA000_040C;
pub const KBD_GERMAN_NEO: u32 = 0xB000_0407;

// ── Input method editors ──────────────────────────────────────────────────────

pub const KBD_CHINESE_TRADITIONAL_PHONETIC: u32 = 0xE001_0404;
pub const KBD_JAPANESE_INPUT_SYSTEM_MS_IME2002: u32 = 0xE001_0411;
pub const KBD_KOREAN_INPUT_SYSTEM_IME_2000: u32 = 0xE001_0412;
pub const KBD_CHINESE_SIMPLIFIED_QUANPIN: u32 = 0xE001_0804;
pub const KBD_CHINESE_TRADITIONAL_CHANGJIE: u32 = 0xE002_0404;
pub const KBD_CHINESE_SIMPLIFIED_SHUANGPIN: u32 = 0xE002_0804;
pub const KBD_CHINESE_TRADITIONAL_QUICK: u32 = 0xE003_0404;
pub const KBD_CHINESE_SIMPLIFIED_ZHENGMA: u32 = 0xE003_0804;
pub const KBD_CHINESE_TRADITIONAL_BIG5_CODE: u32 = 0xE004_0404;
pub const KBD_CHINESE_TRADITIONAL_ARRAY: u32 = 0xE005_0404;
pub const KBD_CHINESE_SIMPLIFIED_NEIMA: u32 = 0xE005_0804;
pub const KBD_CHINESE_TRADITIONAL_DAYI: u32 = 0xE006_0404;
pub const KBD_CHINESE_TRADITIONAL_UNICODE: u32 = 0xE007_0404;
pub const KBD_CHINESE_TRADITIONAL_NEW_PHONETIC: u32 = 0xE008_0404;
pub const KBD_CHINESE_TRADITIONAL_NEW_CHANGJIE: u32 = 0xE009_0404;
pub const KBD_CHINESE_TRADITIONAL_MICROSOFT_PINYIN_IME_3: u32 = 0xE00E_0804;
pub const KBD_CHINESE_TRADITIONAL_ALPHANUMERIC: u32 = 0xE00F_0404;
