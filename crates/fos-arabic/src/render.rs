//! Render Pipeline
//!
//! Runs ligature normalization, contextual shaping and visual reordering
//! over one text buffer, and converts between the buffer and UTF-8 or
//! UTF-16 at the edges.

use crate::glyph_table::GlyphTable;
use crate::ligature::normalize_ligatures;
use crate::reorder::reorder;
use crate::shaper::ContextualShaper;
use crate::{EncodingError, Result};

/// Render configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RenderConfig {
    /// Treat the bracket/punctuation set as part of Arabic runs
    pub include_symbols: bool,
    /// Leave Lam-Alef pairs as two letters
    pub no_ligatures: bool,
    /// Drop vowel marks instead of reinserting them
    pub strip_vowels: bool,
}

/// What one render call did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStats {
    /// Lam-Alef pairs merged into ligatures
    pub ligatures: usize,
    /// Vowel marks found (reinserted unless stripping)
    pub vowels: usize,
    /// Runs reversed into visual order
    pub runs: usize,
}

/// Arabic text renderer
///
/// Holds a glyph table and a configuration; cheap to copy and safe to
/// share between threads.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'t> {
    table: &'t GlyphTable,
    config: RenderConfig,
}

impl Renderer<'static> {
    /// Create a renderer over the process-wide glyph table
    pub fn new() -> Self {
        Self::with_table(GlyphTable::shared())
    }
}

impl Default for Renderer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> Renderer<'t> {
    /// Create a renderer over a caller-owned glyph table
    pub fn with_table(table: &'t GlyphTable) -> Self {
        Self {
            table,
            config: RenderConfig::default(),
        }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Let the symbol set take part in right-to-left runs
    pub fn include_symbols(mut self, include: bool) -> Self {
        self.config.include_symbols = include;
        self
    }

    /// Disable Lam-Alef ligatures
    pub fn no_ligatures(mut self, disable: bool) -> Self {
        self.config.no_ligatures = disable;
        self
    }

    /// Drop vowel marks from the output
    pub fn strip_vowels(mut self, strip: bool) -> Self {
        self.config.strip_vowels = strip;
        self
    }

    pub fn config(&self) -> RenderConfig {
        self.config
    }

    pub fn table(&self) -> &'t GlyphTable {
        self.table
    }

    /// Run the full pipeline over `buf` in place
    pub fn render_chars(&self, buf: &mut Vec<char>) -> RenderStats {
        let mut stats = RenderStats::default();

        if !self.config.no_ligatures {
            stats.ligatures = normalize_ligatures(buf);
        }

        stats.vowels = ContextualShaper::new(self.table).shape(buf, !self.config.strip_vowels);
        stats.runs = reorder(buf, self.config.include_symbols).len();

        tracing::debug!(
            "Rendered {} codepoints ({} ligatures, {} vowels, {} runs)",
            buf.len(),
            stats.ligatures,
            stats.vowels,
            stats.runs
        );
        stats
    }

    /// Render `text` into visual-order presentation forms
    pub fn render(&self, text: &str) -> String {
        self.render_with_stats(text).0
    }

    /// Render `text`, also reporting what the pipeline did
    pub fn render_with_stats(&self, text: &str) -> (String, RenderStats) {
        let mut buf: Vec<char> = text.chars().collect();
        let stats = self.render_chars(&mut buf);
        (buf.into_iter().collect(), stats)
    }

    /// Render UTF-8 bytes into UTF-8 bytes
    pub fn render_bytes(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        let text = std::str::from_utf8(bytes).map_err(|e| {
            let err = EncodingError::from(e);
            tracing::warn!("Rejected render input: {}", err);
            err
        })?;
        Ok(self.render(text).into_bytes())
    }

    /// Render UTF-16 code units into UTF-16 code units.
    ///
    /// Surrogate pairs decode to full scalar values; an unpaired
    /// surrogate is an error.
    pub fn render_utf16(&self, units: &[u16]) -> Result<Vec<u16>> {
        let mut buf = decode_utf16(units).inspect_err(|err| {
            tracing::warn!("Rejected render input: {}", err);
        })?;
        self.render_chars(&mut buf);

        let mut out = Vec::with_capacity(units.len());
        let mut scratch = [0u16; 2];
        for c in buf {
            out.extend_from_slice(c.encode_utf16(&mut scratch));
        }
        Ok(out)
    }
}

/// Decode UTF-16, reporting the code unit offset of the first bad surrogate
fn decode_utf16(units: &[u16]) -> Result<Vec<char>> {
    let mut buf = Vec::with_capacity(units.len());
    let mut index = 0;

    for decoded in char::decode_utf16(units.iter().copied()) {
        match decoded {
            Ok(c) => {
                index += c.len_utf16();
                buf.push(c);
            }
            Err(_) => return Err(EncodingError::InvalidUtf16 { index }),
        }
    }
    Ok(buf)
}
