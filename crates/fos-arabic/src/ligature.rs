//! Lam-Alef Ligatures
//!
//! Lam followed by any Alef variant is written as a single mandatory
//! ligature. The pairs are collapsed before shaping so the ligature
//! takes part in joining like any other letter.

/// Lam (U+0644)
pub const LAM: char = '\u{0644}';

/// Alef variant -> Lam-Alef ligature (isolated form)
pub const LAM_ALEF_LIGATURES: &[(char, char)] = &[
    ('\u{0627}', '\u{FEFB}'), // Alef
    ('\u{0623}', '\u{FEF7}'), // Alef with hamza above
    ('\u{0625}', '\u{FEF9}'), // Alef with hamza below
    ('\u{0622}', '\u{FEF5}'), // Alef with madda
];

/// Ligature for Lam followed by `second`, if any
pub fn lam_alef_ligature(first: char, second: char) -> Option<char> {
    if first != LAM {
        return None;
    }
    LAM_ALEF_LIGATURES
        .iter()
        .find(|&&(alef, _)| alef == second)
        .map(|&(_, lig)| lig)
}

/// Collapse every Lam-Alef pair in `buf`, left to right.
///
/// Returns the number of pairs merged; the buffer shrinks by that many
/// codepoints.
pub fn normalize_ligatures(buf: &mut Vec<char>) -> usize {
    let mut read = 0;
    let mut write = 0;
    let mut merged = 0;

    while read < buf.len() {
        let c = buf[read];
        let lig = buf.get(read + 1).and_then(|&next| lam_alef_ligature(c, next));

        match lig {
            Some(lig) => {
                buf[write] = lig;
                read += 2;
                merged += 1;
            }
            None => {
                buf[write] = c;
                read += 1;
            }
        }
        write += 1;
    }

    buf.truncate(write);
    merged
}
