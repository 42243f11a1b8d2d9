//! Visual Reordering
//!
//! Turns shaped text into visual order by reversing every maximal run of
//! Arabic codepoints. Spaces keep an open run going (multi-word phrases
//! reverse as one unit) but are never the outermost element of a
//! reversed span.

use crate::classify::is_arabic_letter;

/// A span `[start, end)` of the shaped buffer that reads right-to-left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArabicRun {
    pub start: usize,
    pub end: usize,
}

impl ArabicRun {
    /// Number of codepoints in the span; zero for an inverted span
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Find the reversal spans of `buf`.
///
/// A run opens on an Arabic codepoint (space excluded) and closes on the
/// first codepoint that is not Arabic even with space allowed. Leading
/// and trailing spaces are trimmed from each span.
pub fn find_runs(buf: &[char], include_symbols: bool) -> Vec<ArabicRun> {
    let mut runs = Vec::new();
    let mut run_start: Option<usize> = None;

    for (i, &c) in buf.iter().enumerate() {
        match run_start {
            None if is_arabic_letter(c, false, include_symbols) => {
                run_start = Some(i);
            }
            Some(start) if !is_arabic_letter(c, true, include_symbols) => {
                runs.extend(trim_spaces(buf, start, i));
                run_start = None;
            }
            _ => {}
        }
    }

    if let Some(start) = run_start {
        runs.extend(trim_spaces(buf, start, buf.len()));
    }

    runs
}

/// Shrink `[start, end)` past boundary spaces; `None` if nothing remains
fn trim_spaces(buf: &[char], mut start: usize, mut end: usize) -> Option<ArabicRun> {
    end = end.min(buf.len());
    while start < end && buf[start] == ' ' {
        start += 1;
    }
    while end > start && buf[end - 1] == ' ' {
        end -= 1;
    }
    (start < end).then_some(ArabicRun { start, end })
}

/// Reverse every Arabic run of `buf` in place. Returns the runs reversed.
pub fn reorder(buf: &mut [char], include_symbols: bool) -> Vec<ArabicRun> {
    let runs = find_runs(buf, include_symbols);
    for run in &runs {
        tracing::trace!("Reversing run {}..{} ({} codepoints)", run.start, run.end, run.len());
        buf[run.start..run.end].reverse();
    }
    runs
}
