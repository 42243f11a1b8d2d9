//! fOS Arabic - Presentation-Form Shaping
//!
//! Converts logical-order Arabic text into presentation-form codepoints in
//! visual order, for renderers that draw one glyph per codepoint from left
//! to right (terminal grids, bitmap-font text widgets):
//! - Lam-Alef ligature normalization
//! - Contextual shaping into initial/medial/final forms
//! - Vowel mark (tashkil) preservation
//! - Reversal of Arabic runs into visual order
//!
//! ```
//! // Kaf Teh Beh ("wrote")
//! let visual = fos_arabic::render("\u{0643}\u{062A}\u{0628}", false);
//! assert_eq!(visual, "\u{FE90}\u{FE98}\u{FEDB}");
//! ```

pub mod cache;
pub mod classify;
pub mod glyph_table;
pub mod ligature;
pub mod render;
pub mod reorder;
pub mod shaper;

pub use cache::{RenderCache, RenderCacheStats, RenderKey};
pub use classify::{is_arabic_letter, is_arabic_vowel};
pub use glyph_table::{GlyphForms, GlyphTable};
pub use render::{RenderConfig, RenderStats, Renderer};
pub use reorder::ArabicRun;
pub use shaper::{ContextualShaper, VowelRecord};

/// Boundary encoding errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    #[error("Invalid UTF-8 input: bad sequence after {valid_up_to} bytes")]
    InvalidUtf8 { valid_up_to: usize },

    #[error("Invalid UTF-16 input: unpaired surrogate at code unit {index}")]
    InvalidUtf16 { index: usize },
}

impl From<std::str::Utf8Error> for EncodingError {
    fn from(e: std::str::Utf8Error) -> Self {
        EncodingError::InvalidUtf8 {
            valid_up_to: e.valid_up_to(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EncodingError>;

/// Render `text` into visual-order presentation forms using the shared
/// glyph table
///
/// With `include_symbols` the bracket/punctuation set reads right-to-left
/// along with the Arabic text around it.
pub fn render(text: &str, include_symbols: bool) -> String {
    Renderer::new().include_symbols(include_symbols).render(text)
}

/// Render UTF-8 bytes, failing on malformed input
pub fn render_bytes(bytes: &[u8], include_symbols: bool) -> Result<Vec<u8>> {
    Renderer::new().include_symbols(include_symbols).render_bytes(bytes)
}

/// Render UTF-16 code units, failing on unpaired surrogates
pub fn render_utf16(units: &[u16], include_symbols: bool) -> Result<Vec<u16>> {
    Renderer::new().include_symbols(include_symbols).render_utf16(units)
}
