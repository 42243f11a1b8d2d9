//! Contextual Shaper
//!
//! Replaces each base letter with the presentation form its neighbors
//! call for. Vowel marks are lifted out first so they never break a
//! join, and put back at their logical offsets afterwards.
//!
//! Joining behavior is read off the glyph table itself: a letter with an
//! initial or medial form joins forward, one with a medial or final form
//! joins backward.

use crate::classify::is_arabic_vowel;
use crate::glyph_table::{GlyphForms, GlyphTable};

/// A vowel mark removed before shaping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VowelRecord {
    /// Index of the mark in the buffer before removal
    pub index: usize,
    /// The mark itself
    pub mark: char,
}

/// Remove all vowel marks from `buf`, recording where each one was.
///
/// Records are returned in increasing index order.
pub fn extract_vowels(buf: &mut Vec<char>) -> Vec<VowelRecord> {
    let vowels: Vec<VowelRecord> = buf
        .iter()
        .enumerate()
        .filter(|&(_, &c)| is_arabic_vowel(c))
        .map(|(index, &mark)| VowelRecord { index, mark })
        .collect();

    if !vowels.is_empty() {
        buf.retain(|&c| !is_arabic_vowel(c));
    }
    vowels
}

/// Put vowel marks back at their recorded offsets.
///
/// `vowels` must be in increasing index order, as [`extract_vowels`]
/// produces them. Offsets past the end are clamped to the end.
pub fn reinsert_vowels(buf: &mut Vec<char>, vowels: &[VowelRecord]) {
    for vowel in vowels {
        let at = vowel.index.min(buf.len());
        buf.insert(at, vowel.mark);
    }
}

/// Write the positional form of every letter in `snapshot` into `out`.
///
/// Neighbors are always read from `snapshot`, never from `out`, so an
/// earlier substitution cannot change the context of a later one. `out`
/// should start as a copy of `snapshot`; positions with no applicable
/// form are left as they are.
pub fn shape_positions(table: &GlyphTable, snapshot: &[char], out: &mut [char]) {
    debug_assert_eq!(snapshot.len(), out.len());

    for (i, slot) in out.iter_mut().enumerate().take(snapshot.len()) {
        if let Some(form) = positional_form(table, snapshot, i) {
            *slot = form;
        }
    }
}

/// Presentation form for `snapshot[i]`, or `None` to keep the base letter
fn positional_form(table: &GlyphTable, snapshot: &[char], i: usize) -> Option<char> {
    let g = table.lookup(snapshot[i]);
    if g.is_absent() {
        return None;
    }

    let prev = match i.checked_sub(1) {
        Some(p) => table.lookup_opt(snapshot.get(p)),
        None => GlyphForms::ABSENT,
    };
    let next = table.lookup_opt(snapshot.get(i + 1));

    if i == 0 {
        if g.has_initial() && next.has_medial_or_final() {
            return g.init;
        }
        return None;
    }

    if i + 1 == snapshot.len() {
        if g.has_final() && prev.has_initial_or_medial() {
            return g.fina;
        }
        return None;
    }

    if g.has_medial() && prev.has_initial_or_medial() {
        if next.has_medial_or_final() {
            g.medi
        } else {
            g.fina
        }
    } else if g.has_medial() && next.has_final() {
        if prev.has_initial_or_medial() {
            g.medi
        } else {
            g.init
        }
    } else if g.has_final() && prev.has_initial_or_medial() {
        g.fina
    } else if g.has_initial() && next.has_medial_or_final() {
        g.init
    } else {
        None
    }
}

/// Contextual shaper bound to a glyph table
#[derive(Debug, Clone, Copy)]
pub struct ContextualShaper<'t> {
    table: &'t GlyphTable,
}

impl<'t> ContextualShaper<'t> {
    /// Create a shaper over `table`
    pub fn new(table: &'t GlyphTable) -> Self {
        Self { table }
    }

    /// Shape `buf` in place.
    ///
    /// With `keep_vowels` the marks are reinserted after their shaped
    /// base letters and the length is unchanged; otherwise they are
    /// dropped. Returns the number of marks found.
    pub fn shape(&self, buf: &mut Vec<char>, keep_vowels: bool) -> usize {
        let vowels = extract_vowels(buf);

        let snapshot = buf.clone();
        shape_positions(self.table, &snapshot, buf);

        if keep_vowels {
            reinsert_vowels(buf, &vowels);
        }
        vowels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(s: &str) -> Vec<char> {
        let table = GlyphTable::new();
        let mut buf: Vec<char> = s.chars().collect();
        ContextualShaper::new(&table).shape(&mut buf, true);
        buf
    }

    #[test]
    fn test_three_letter_word() {
        // Kaf Teh Beh
        assert_eq!(shape("\u{0643}\u{062A}\u{0628}"), ['\u{FEDB}', '\u{FE98}', '\u{FE90}']);
    }

    #[test]
    fn test_single_letter_unchanged() {
        assert_eq!(shape("\u{0628}"), ['\u{0628}']);
        assert_eq!(shape("\u{FEFB}"), ['\u{FEFB}']);
    }

    #[test]
    fn test_two_dual_letters() {
        // Beh Beh: initial + final
        assert_eq!(shape("\u{0628}\u{0628}"), ['\u{FE91}', '\u{FE90}']);
    }

    #[test]
    fn test_right_joining_breaks_word() {
        // Beh Alef Beh: Alef joins back but not forward
        assert_eq!(
            shape("\u{0628}\u{0627}\u{0628}"),
            ['\u{FE91}', '\u{FE8E}', '\u{0628}']
        );
    }

    #[test]
    fn test_right_joining_first() {
        // Dal Beh: Dal cannot join forward, Beh stays isolated
        assert_eq!(shape("\u{062F}\u{0628}"), ['\u{062F}', '\u{0628}']);
    }

    #[test]
    fn test_medial_run() {
        // Beh Seen Meem Lam
        assert_eq!(
            shape("\u{0628}\u{0633}\u{0645}\u{0644}"),
            ['\u{FE91}', '\u{FEB4}', '\u{FEE4}', '\u{FEDE}']
        );
    }

    #[test]
    fn test_ligature_joins_back() {
        // Seen Lam-Alef Meem
        assert_eq!(
            shape("\u{0633}\u{FEFB}\u{0645}"),
            ['\u{FEB3}', '\u{FEFC}', '\u{0645}']
        );
    }

    #[test]
    fn test_space_separates_words() {
        assert_eq!(
            shape("\u{0628}\u{0628} \u{0628}\u{0628}"),
            ['\u{FE91}', '\u{FE90}', ' ', '\u{FE91}', '\u{FE90}']
        );
    }

    #[test]
    fn test_non_arabic_untouched() {
        assert_eq!(shape("abc 123"), "abc 123".chars().collect::<Vec<_>>());
    }

    #[test]
    fn test_vowel_does_not_break_join() {
        // Beh Fatha Beh: letters join across the mark
        assert_eq!(
            shape("\u{0628}\u{064E}\u{0628}"),
            ['\u{FE91}', '\u{064E}', '\u{FE90}']
        );
    }

    #[test]
    fn test_vowels_roundtrip_positions() {
        let vocalized = "\u{0643}\u{064E}\u{062A}\u{064E}\u{0628}\u{064E}";
        let mut buf: Vec<char> = vocalized.chars().collect();
        let vowels = extract_vowels(&mut buf);
        assert_eq!(buf, ['\u{0643}', '\u{062A}', '\u{0628}']);
        assert_eq!(
            vowels.iter().map(|v| v.index).collect::<Vec<_>>(),
            [1, 3, 5]
        );

        reinsert_vowels(&mut buf, &vowels);
        assert_eq!(buf, vocalized.chars().collect::<Vec<_>>());
    }

    #[test]
    fn test_stacked_vowels() {
        // Beh Shadda Fatha
        assert_eq!(shape("\u{0628}\u{0651}\u{064E}"), ['\u{0628}', '\u{0651}', '\u{064E}']);
    }

    #[test]
    fn test_only_vowels() {
        assert_eq!(shape("\u{064E}\u{064F}"), ['\u{064E}', '\u{064F}']);
    }

    #[test]
    fn test_drop_vowels() {
        let table = GlyphTable::new();
        let mut buf: Vec<char> = "\u{0628}\u{064E}\u{0628}".chars().collect();
        let found = ContextualShaper::new(&table).shape(&mut buf, false);
        assert_eq!(found, 1);
        assert_eq!(buf, ['\u{FE91}', '\u{FE90}']);
    }

    #[test]
    fn test_reinsert_clamps() {
        let mut buf = vec!['a'];
        reinsert_vowels(&mut buf, &[VowelRecord { index: 5, mark: '\u{064E}' }]);
        assert_eq!(buf, ['a', '\u{064E}']);
    }

    #[test]
    fn test_snapshot_is_not_read_back() {
        let table = GlyphTable::new();
        let snapshot = ['\u{0628}', '\u{0628}', '\u{0628}'];
        // Garbage in the output buffer must not influence the result
        let mut out = ['x', 'y', 'z'];
        shape_positions(&table, &snapshot, &mut out);
        assert_eq!(out, ['\u{FE91}', '\u{FE92}', '\u{FE90}']);
    }
}
