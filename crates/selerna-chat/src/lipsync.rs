//! Heuristic lip-sync timeline.
//!
//! Produces a word-by-word mouth-cue sequence from reply text alone. This is
//! a placeholder approximation, not phoneme analysis: every word gets an
//! equal time slice and one viseme picked from its vowels.

use crate::types::{LipSync, MouthCue, Viseme};

/// Shortest slice a single word may occupy.
pub const MIN_SLICE_MS: u64 = 80;

/// Floor for the estimated speech duration of a reply.
pub const MIN_DURATION_MS: u64 = 1200;

/// Estimated speaking time per character.
pub const MS_PER_CHAR: u64 = 45;

/// Estimated speech duration for `text`: `max(1200, chars * 45)` ms.
pub fn target_duration_ms(text: &str) -> u64 {
    let chars = text.chars().count() as u64;
    MIN_DURATION_MS.max(chars.saturating_mul(MS_PER_CHAR))
}

/// Pick a viseme for one word.
///
/// Precedence: `a`/`o` → D, `e`/`i` → C, `u` → F, `o` → E, otherwise A.
/// The `o` → E branch can never fire because the first branch already
/// claims every word containing `o`; it is kept as-is.
pub fn pick_viseme(word: &str) -> Viseme {
    let w = word.to_lowercase();
    if w.contains(['a', 'o']) {
        return Viseme::D;
    }
    if w.contains(['e', 'i']) {
        return Viseme::C;
    }
    if w.contains('u') {
        return Viseme::F;
    }
    if w.contains('o') {
        return Viseme::E;
    }
    Viseme::A
}

/// Build contiguous mouth cues spreading `total_ms` evenly over the words of
/// `text`. Each slice is at least [`MIN_SLICE_MS`], so the timeline may run
/// past `total_ms` for long texts.
pub fn synthesize_cues(text: &str, total_ms: u64) -> Vec<MouthCue> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return Vec::new();
    }

    let slice_ms = MIN_SLICE_MS.max(total_ms / words.len() as u64);
    words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let i = i as u64;
            MouthCue {
                start: (i * slice_ms) as f64 / 1000.0,
                end: ((i + 1) * slice_ms) as f64 / 1000.0,
                value: pick_viseme(word),
            }
        })
        .collect()
}

/// Lip-sync payload for a reply, timed by [`target_duration_ms`].
pub fn lipsync_for(text: &str) -> LipSync {
    LipSync {
        mouth_cues: synthesize_cues(text, target_duration_ms(text)),
    }
}
