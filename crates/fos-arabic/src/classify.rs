//! Codepoint Classification
//!
//! Predicates used by the shaper and the run reorderer to decide which
//! codepoints belong to Arabic text.

use std::ops::RangeInclusive;

/// Arabic block (U+0600 - U+06FF)
pub const ARABIC: RangeInclusive<u32> = 0x0600..=0x06FF;

/// Arabic Presentation Forms-A (U+FB50 - U+FDFF)
pub const PRESENTATION_FORMS_A: RangeInclusive<u32> = 0xFB50..=0xFDFF;

/// Arabic Presentation Forms-B (U+FE70 - U+FEFF)
pub const PRESENTATION_FORMS_B: RangeInclusive<u32> = 0xFE70..=0xFEFF;

/// Combining tashkil marks (Fathatan through Hamza Below, 21 marks)
pub const TASHKIL: RangeInclusive<u32> = 0x064B..=0x065F;

/// Punctuation and brackets that may opt in to right-to-left runs
pub const RTL_SYMBOLS: &[char] = &[
    '<', '>', '(', ')', '{', '}', '[', ']', '~', '`', '!', '@',
    '#', '$', '%', '^', '&', '*', '?', '"', '\'', ':', ';',
];

/// Check whether `c` counts as Arabic for shaping and run detection.
///
/// Any codepoint in the Arabic block or either presentation-form block
/// qualifies. A plain space qualifies only with `include_space`, and the
/// [`RTL_SYMBOLS`] set only with `include_symbols`.
pub fn is_arabic_letter(c: char, include_space: bool, include_symbols: bool) -> bool {
    let code = c as u32;

    ARABIC.contains(&code)
        || PRESENTATION_FORMS_A.contains(&code)
        || PRESENTATION_FORMS_B.contains(&code)
        || (include_space && c == ' ')
        || (include_symbols && is_rtl_symbol(c))
}

/// Check whether `c` is a combining vowel mark
pub fn is_arabic_vowel(c: char) -> bool {
    TASHKIL.contains(&(c as u32))
}

/// Check whether `c` is in the opt-in symbol set
pub fn is_rtl_symbol(c: char) -> bool {
    RTL_SYMBOLS.contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arabic_block() {
        assert!(is_arabic_letter('\u{0628}', false, false));
        assert!(is_arabic_letter('\u{0600}', false, false));
        assert!(is_arabic_letter('\u{06FF}', false, false));
        assert!(!is_arabic_letter('\u{0700}', false, false)); // Syriac
    }

    #[test]
    fn test_presentation_forms() {
        assert!(is_arabic_letter('\u{FB50}', false, false));
        assert!(is_arabic_letter('\u{FDFF}', false, false));
        assert!(is_arabic_letter('\u{FEFB}', false, false));
        assert!(!is_arabic_letter('\u{FE00}', false, false)); // Variation selector
    }

    #[test]
    fn test_space_opt_in() {
        assert!(!is_arabic_letter(' ', false, false));
        assert!(is_arabic_letter(' ', true, false));
        assert!(!is_arabic_letter('\t', true, true));
    }

    #[test]
    fn test_symbols_opt_in() {
        for &c in RTL_SYMBOLS {
            assert!(!is_arabic_letter(c, false, false), "{c:?} without opt-in");
            assert!(is_arabic_letter(c, false, true), "{c:?} with opt-in");
        }
        assert!(!is_arabic_letter('.', true, true));
        assert!(!is_arabic_letter(',', true, true));
    }

    #[test]
    fn test_latin_and_digits() {
        for c in ['A', 'z', '0', '9', '-'] {
            assert!(!is_arabic_letter(c, true, true));
        }
    }

    #[test]
    fn test_vowel_range() {
        let vowels: Vec<char> = ('\u{0600}'..='\u{06FF}')
            .filter(|&c| is_arabic_vowel(c))
            .collect();
        assert_eq!(vowels.len(), 21);
        assert_eq!(vowels.first(), Some(&'\u{064B}'));
        assert_eq!(vowels.last(), Some(&'\u{065F}'));
    }

    #[test]
    fn test_vowels_are_arabic_letters() {
        assert!(is_arabic_vowel('\u{064E}')); // Fatha
        assert!(is_arabic_letter('\u{064E}', false, false));
        assert!(!is_arabic_vowel('\u{0628}'));
        assert!(!is_arabic_vowel('\u{0670}')); // Superscript alef
    }
}
