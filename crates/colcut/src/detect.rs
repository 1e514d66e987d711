//! Alignment-based boundary detection.
//!
//! Detectors scan a reference row (typically a header line) once, left to
//! right, by code point, classifying each character as part of a word run
//! (anything but a space) or a gap run (spaces). Where those runs meet
//! determines the column boundaries: left-aligned columns start at the
//! first word character after a gap, right-aligned columns end where the
//! gap after a word begins.
//!
//! Multi-word mode permits a single interior space inside a column name
//! ("Last Seen") by holding the first space after a word in a provisional
//! state: a following word character cancels it, a second consecutive
//! space commits the gap.

/// Scanner state for the left-aligned detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LeftState {
    /// Inside a word run. Also the start state, so a boundary is never
    /// recorded at offset 0.
    InWord,
    /// One space seen after a word in multi-word mode; may still be an
    /// interior space.
    ProvisionalGap,
    /// Inside a committed separating gap.
    InGap,
}

/// Detects column boundaries in a left-aligned reference row.
///
/// A boundary is recorded at the offset where a gap run transitions back
/// into a word run. In single-word mode every space separates; in
/// multi-word mode a gap only commits on the second consecutive space.
pub(crate) fn left_aligned(reference_row: &str, multi_word: bool) -> Vec<usize> {
    let mut offsets = Vec::new();
    let mut state = LeftState::InWord;
    for (i, c) in reference_row.chars().enumerate() {
        state = match (state, c == ' ') {
            (LeftState::InWord, true) if multi_word => LeftState::ProvisionalGap,
            (_, true) => LeftState::InGap,
            (LeftState::InGap, false) => {
                offsets.push(i);
                LeftState::InWord
            }
            (_, false) => LeftState::InWord,
        };
    }
    offsets
}

/// Scanner state for the right-aligned detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RightState {
    /// Inside a gap run. Also the start state.
    InGap,
    /// Inside a word run.
    InWord,
    /// One space seen after a word in multi-word mode; carries the offset
    /// of that space until a second space confirms the separator.
    ProvisionalGap(usize),
}

/// Detects column boundaries in a right-aligned reference row.
///
/// A boundary is recorded at the offset where the gap after a word
/// begins. In multi-word mode the first space after a word is
/// provisional: a word character cancels it (an interior space, as in
/// "Last Seen"), while a second consecutive space confirms the separator
/// and commits the boundary at the provisional space's offset. A
/// provisional space still pending at end of row is never committed; a
/// trailing single space stays inside the final field.
pub(crate) fn right_aligned(reference_row: &str, multi_word: bool) -> Vec<usize> {
    let mut offsets = Vec::new();
    let mut state = RightState::InGap;
    for (i, c) in reference_row.chars().enumerate() {
        state = match (state, c == ' ') {
            (RightState::InWord, true) if multi_word => RightState::ProvisionalGap(i),
            (RightState::InWord, true) => {
                offsets.push(i);
                RightState::InGap
            }
            (RightState::ProvisionalGap(gap_start), true) => {
                offsets.push(gap_start);
                RightState::InGap
            }
            (RightState::InGap, true) => RightState::InGap,
            (_, false) => RightState::InWord,
        };
    }
    offsets
}
