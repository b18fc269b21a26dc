//! Global input method editors (IMEs).
//!
//! The `file` field names the IME module Windows loads for the layout.  It is
//! reported as-is and never resolved here.

use super::layout_ids::*;
use super::InputMethodEditor;

/// Number of entries in [`INPUT_METHOD_EDITORS`].
pub const INPUT_METHOD_EDITOR_COUNT: usize = 17;

/// Compiled-in catalog of input method editors.
pub static INPUT_METHOD_EDITORS: [InputMethodEditor; INPUT_METHOD_EDITOR_COUNT] = [
    InputMethodEditor::new(
        KBD_CHINESE_TRADITIONAL_PHONETIC,
        "phon.ime",
        "Chinese (Traditional) - Phonetic",
    ),
    InputMethodEditor::new(
        KBD_JAPANESE_INPUT_SYSTEM_MS_IME2002,
        "imjp81.ime",
        "Japanese Input System (MS-IME2002)",
    ),
    InputMethodEditor::new(
        KBD_KOREAN_INPUT_SYSTEM_IME_2000,
        "imekr61.ime",
        "Korean Input System (IME 2000)",
    ),
    InputMethodEditor::new(
        KBD_CHINESE_SIMPLIFIED_QUANPIN,
        "winpy.ime",
        "Chinese (Simplified) - QuanPin",
    ),
    InputMethodEditor::new(
        KBD_CHINESE_TRADITIONAL_CHANGJIE,
        "chajei.ime",
        "Chinese (Traditional) - ChangJie",
    ),
    InputMethodEditor::new(
        KBD_CHINESE_SIMPLIFIED_SHUANGPIN,
        "winsp.ime",
        "Chinese (Simplified) - ShuangPin",
    ),
    InputMethodEditor::new(
        KBD_CHINESE_TRADITIONAL_QUICK,
        "quick.ime",
        "Chinese (Traditional) - Quick",
    ),
    InputMethodEditor::new(
        KBD_CHINESE_SIMPLIFIED_ZHENGMA,
        "winzm.ime",
        "Chinese (Simplified) - ZhengMa",
    ),
    InputMethodEditor::new(
        KBD_CHINESE_TRADITIONAL_BIG5_CODE,
        "winime.ime",
        "Chinese (Traditional) - Big5 Code",
    ),
    InputMethodEditor::new(
        KBD_CHINESE_TRADITIONAL_ARRAY,
        "winar30.ime",
        "Chinese (Traditional) - Array",
    ),
    InputMethodEditor::new(
        KBD_CHINESE_SIMPLIFIED_NEIMA,
        "wingb.ime",
        "Chinese (Simplified) - NeiMa",
    ),
    InputMethodEditor::new(
        KBD_CHINESE_TRADITIONAL_DAYI,
        "dayi.ime",
        "Chinese (Traditional) - DaYi",
    ),
    InputMethodEditor::new(
        KBD_CHINESE_TRADITIONAL_UNICODE,
        "unicdime.ime",
        "Chinese (Traditional) - Unicode",
    ),
    InputMethodEditor::new(
        KBD_CHINESE_TRADITIONAL_NEW_PHONETIC,
        "TINTLGNT.IME",
        "Chinese (Traditional) - New Phonetic",
    ),
    InputMethodEditor::new(
        KBD_CHINESE_TRADITIONAL_NEW_CHANGJIE,
        "CINTLGNT.IME",
        "Chinese (Traditional) - New ChangJie",
    ),
    InputMethodEditor::new(
        KBD_CHINESE_TRADITIONAL_MICROSOFT_PINYIN_IME_3,
        "pintlgnt.ime",
        "Chinese (Traditional) - Microsoft Pinyin IME 3.0",
    ),
    InputMethodEditor::new(
        KBD_CHINESE_TRADITIONAL_ALPHANUMERIC,
        "romanime.ime",
        "Chinese (Traditional) - Alphanumeric",
    ),
];
