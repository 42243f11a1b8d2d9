//! Edge case tests for fos-arabic
//!
//! Degenerate buffers, malformed encodings and concurrent use.

use std::thread;

use fos_arabic::{EncodingError, RenderCache, Renderer, render, render_bytes, render_utf16};

// ============================================================================
// EMPTY AND MINIMAL INPUT
// ============================================================================

#[test]
fn test_empty() {
    assert_eq!(render("", false), "");
    assert_eq!(render("", true), "");
}

#[test]
fn test_only_spaces() {
    for include_symbols in [false, true] {
        assert_eq!(render(" ", include_symbols), " ");
        assert_eq!(render("     ", include_symbols), "     ");
    }
}

#[test]
fn test_only_vowels() {
    // Marks alone still form a run
    assert_eq!(render("\u{064E}\u{0650}", false), "\u{0650}\u{064E}");
}

#[test]
fn test_single_lam() {
    assert_eq!(render("\u{0644}", false), "\u{0644}");
}

#[test]
fn test_all_arabic_with_trailing_spaces() {
    // Run reaches the end of the buffer; trailing spaces stay in place
    assert_eq!(render("\u{0628}\u{0628}   ", false), "\u{FE90}\u{FE91}   ");
}

#[test]
fn test_leading_spaces() {
    assert_eq!(render("   \u{0628}\u{0628}", false), "   \u{FE90}\u{FE91}");
}

#[test]
fn test_already_shaped_input() {
    // Presentation forms are not re-shaped but still reverse
    assert_eq!(render("\u{FE91}\u{FE90}", false), "\u{FE90}\u{FE91}");
}

#[test]
fn test_unmapped_arabic_letter() {
    // Hamza has no positional forms: passes through, breaks joining
    assert_eq!(
        render("\u{0628}\u{0621}\u{0628}", false),
        "\u{0628}\u{0621}\u{0628}"
    );
}

#[test]
fn test_tatweel() {
    // Beh Tatweel Beh
    assert_eq!(
        render("\u{0628}\u{0640}\u{0628}", false),
        "\u{FE90}\u{0640}\u{FE91}"
    );
}

// ============================================================================
// MALFORMED ENCODINGS
// ============================================================================

#[test]
fn test_invalid_utf8() {
    let err = render_bytes(b"\xD8", false).unwrap_err();
    assert_eq!(err, EncodingError::InvalidUtf8 { valid_up_to: 0 });
    assert!(err.to_string().contains("UTF-8"));
}

#[test]
fn test_truncated_utf8_after_arabic() {
    let mut bytes = "\u{0628}".as_bytes().to_vec();
    bytes.push(0xD8);
    let err = render_bytes(&bytes, false).unwrap_err();
    assert_eq!(err, EncodingError::InvalidUtf8 { valid_up_to: 2 });
}

#[test]
fn test_lone_low_surrogate() {
    let err = render_utf16(&[0xDC00, 0x0628], false).unwrap_err();
    assert_eq!(err, EncodingError::InvalidUtf16 { index: 0 });
}

#[test]
fn test_utf16_matches_utf8() {
    let text = "x \u{0633}\u{0644}\u{0627}\u{0645} \u{1F600}";
    let units: Vec<u16> = text.encode_utf16().collect();
    let out = render_utf16(&units, false).unwrap();
    assert_eq!(String::from_utf16(&out).unwrap(), render(text, false));
}

// ============================================================================
// CONCURRENCY
// ============================================================================

#[test]
fn test_concurrent_first_use() {
    let text = "\u{0643}\u{062A}\u{0628} \u{0644}\u{0627}";
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(move || render(text, false)))
        .collect();

    let outputs: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(outputs.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(outputs[0], render(text, false));
}

#[test]
fn test_cache_agrees_with_renderer() {
    let renderer = Renderer::new().include_symbols(true);
    let mut cache = RenderCache::new(8);
    let text = "[\u{0628}\u{064E}\u{0633}]";

    for _ in 0..3 {
        assert_eq!(cache.get_or_render(&renderer, text), renderer.render(text));
    }
    assert_eq!(cache.stats().hits, 2);
}
