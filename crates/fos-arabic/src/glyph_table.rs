//! Glyph Table
//!
//! Maps base Arabic letters to their positional presentation forms
//! (Arabic Presentation Forms-B). Letters that only join on one side
//! lack the forms they can never take.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Positional presentation forms of one base letter
///
/// `None` marks a form the letter does not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlyphForms {
    /// Initial form (joins the following letter only)
    pub init: Option<char>,
    /// Medial form (joins both neighbors)
    pub medi: Option<char>,
    /// Final form (joins the preceding letter only)
    pub fina: Option<char>,
}

impl GlyphForms {
    /// Forms of an unmapped codepoint
    pub const ABSENT: GlyphForms = GlyphForms { init: None, medi: None, fina: None };

    /// Create a forms triple
    pub const fn new(init: Option<char>, medi: Option<char>, fina: Option<char>) -> Self {
        Self { init, medi, fina }
    }

    /// Letter that joins on both sides
    const fn dual(init: char, medi: char, fina: char) -> Self {
        Self::new(Some(init), Some(medi), Some(fina))
    }

    /// Letter that only joins the preceding letter
    const fn right(fina: char) -> Self {
        Self::new(None, None, Some(fina))
    }

    pub fn has_initial(&self) -> bool {
        self.init.is_some()
    }

    pub fn has_medial(&self) -> bool {
        self.medi.is_some()
    }

    pub fn has_final(&self) -> bool {
        self.fina.is_some()
    }

    /// Whether this letter can connect to the letter after it
    pub fn has_initial_or_medial(&self) -> bool {
        self.has_initial() || self.has_medial()
    }

    /// Whether this letter can connect to the letter before it
    pub fn has_medial_or_final(&self) -> bool {
        self.has_medial() || self.has_final()
    }

    /// True when no form exists (the codepoint passes through unshaped)
    pub fn is_absent(&self) -> bool {
        *self == Self::ABSENT
    }
}

/// Presentation forms for every supported base letter and Lam-Alef ligature
static GLYPH_FORMS: &[(char, GlyphForms)] = &[
    ('\u{0640}', GlyphForms::new(Some('\u{0640}'), None, Some('\u{0640}'))), // Tatweel
    ('\u{0627}', GlyphForms::right('\u{FE8E}')), // Alef
    ('\u{0623}', GlyphForms::right('\u{FE84}')), // Alef with hamza above
    ('\u{0625}', GlyphForms::right('\u{FE88}')), // Alef with hamza below
    ('\u{0622}', GlyphForms::right('\u{FE82}')), // Alef with madda
    ('\u{0628}', GlyphForms::dual('\u{FE91}', '\u{FE92}', '\u{FE90}')), // Beh
    ('\u{062A}', GlyphForms::dual('\u{FE97}', '\u{FE98}', '\u{FE96}')), // Teh
    ('\u{062B}', GlyphForms::dual('\u{FE9B}', '\u{FE9C}', '\u{FE9A}')), // Theh
    ('\u{062C}', GlyphForms::dual('\u{FE9F}', '\u{FEA0}', '\u{FE9E}')), // Jeem
    ('\u{062D}', GlyphForms::dual('\u{FEA3}', '\u{FEA4}', '\u{FEA2}')), // Hah
    ('\u{062E}', GlyphForms::dual('\u{FEA7}', '\u{FEA8}', '\u{FEA6}')), // Khah
    ('\u{062F}', GlyphForms::right('\u{FEAA}')), // Dal
    ('\u{0630}', GlyphForms::right('\u{FEAC}')), // Thal
    ('\u{0631}', GlyphForms::right('\u{FEAE}')), // Reh
    ('\u{0632}', GlyphForms::right('\u{FEB0}')), // Zain
    ('\u{0633}', GlyphForms::dual('\u{FEB3}', '\u{FEB4}', '\u{FEB2}')), // Seen
    ('\u{0634}', GlyphForms::dual('\u{FEB7}', '\u{FEB8}', '\u{FEB6}')), // Sheen
    ('\u{0635}', GlyphForms::dual('\u{FEBB}', '\u{FEBC}', '\u{FEBA}')), // Sad
    ('\u{0636}', GlyphForms::dual('\u{FEBF}', '\u{FEC0}', '\u{FEBE}')), // Dad
    ('\u{0637}', GlyphForms::dual('\u{FEC3}', '\u{FEC4}', '\u{FEC2}')), // Tah
    ('\u{0638}', GlyphForms::dual('\u{FEC7}', '\u{FEC8}', '\u{FEC6}')), // Zah
    ('\u{0639}', GlyphForms::dual('\u{FECB}', '\u{FECC}', '\u{FECA}')), // Ain
    ('\u{063A}', GlyphForms::dual('\u{FECF}', '\u{FED0}', '\u{FECE}')), // Ghain
    ('\u{0641}', GlyphForms::dual('\u{FED3}', '\u{FED4}', '\u{FED2}')), // Feh
    ('\u{0642}', GlyphForms::dual('\u{FED7}', '\u{FED8}', '\u{FED6}')), // Qaf
    ('\u{0643}', GlyphForms::dual('\u{FEDB}', '\u{FEDC}', '\u{FEDA}')), // Kaf
    ('\u{0644}', GlyphForms::dual('\u{FEDF}', '\u{FEE0}', '\u{FEDE}')), // Lam
    ('\u{0645}', GlyphForms::dual('\u{FEE3}', '\u{FEE4}', '\u{FEE2}')), // Meem
    ('\u{0646}', GlyphForms::dual('\u{FEE7}', '\u{FEE8}', '\u{FEE6}')), // Noon
    ('\u{0647}', GlyphForms::dual('\u{FEEB}', '\u{FEEC}', '\u{FEEA}')), // Heh
    ('\u{0648}', GlyphForms::right('\u{FEEE}')), // Waw
    ('\u{064A}', GlyphForms::dual('\u{FEF3}', '\u{FEF4}', '\u{FEF2}')), // Yeh
    ('\u{0626}', GlyphForms::dual('\u{FE8B}', '\u{FE8C}', '\u{FE8A}')), // Yeh with hamza
    ('\u{0649}', GlyphForms::dual('\u{0649}', '\u{0649}', '\u{FEF0}')), // Alef maksura
    ('\u{0624}', GlyphForms::right('\u{FE86}')), // Waw with hamza
    ('\u{0629}', GlyphForms::right('\u{FE94}')), // Teh marbuta
    ('\u{FEFB}', GlyphForms::right('\u{FEFC}')), // Lam-Alef
    ('\u{FEF7}', GlyphForms::right('\u{FEF8}')), // Lam-Alef with hamza above
    ('\u{FEF9}', GlyphForms::right('\u{FEFA}')), // Lam-Alef with hamza below
    ('\u{FEF5}', GlyphForms::right('\u{FEF6}')), // Lam-Alef with madda
];

/// Immutable letter -> presentation forms mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphTable {
    forms: HashMap<char, GlyphForms>,
}

impl GlyphTable {
    /// Build a table from the built-in data
    pub fn new() -> Self {
        let mut forms = HashMap::with_capacity(GLYPH_FORMS.len());
        for &(letter, glyph) in GLYPH_FORMS {
            forms.insert(letter, glyph);
        }
        Self { forms }
    }

    /// Process-wide table, built on first use
    pub fn shared() -> &'static GlyphTable {
        static TABLE: OnceLock<GlyphTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            let table = GlyphTable::new();
            tracing::debug!("Glyph table initialized with {} letters", table.len());
            table
        })
    }

    /// Forms for `c`, or [`GlyphForms::ABSENT`] if `c` is not a shapeable letter
    pub fn lookup(&self, c: char) -> GlyphForms {
        self.forms.get(&c).copied().unwrap_or(GlyphForms::ABSENT)
    }

    /// Forms for an optional neighbor; a missing neighbor has no forms
    pub(crate) fn lookup_opt(&self, c: Option<&char>) -> GlyphForms {
        c.map_or(GlyphForms::ABSENT, |&c| self.lookup(c))
    }

    pub fn contains(&self, c: char) -> bool {
        self.forms.contains_key(&c)
    }

    /// Number of letters in the table
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// Iterate over all letters and their forms
    pub fn iter(&self) -> impl Iterator<Item = (char, GlyphForms)> + '_ {
        self.forms.iter().map(|(&c, &g)| (c, g))
    }
}

impl Default for GlyphTable {
    fn default() -> Self {
        Self::new()
    }
}
