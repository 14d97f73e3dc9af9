//! Fixed context and edge-snap policy.

/// Words of context kept before the leftmost match.
pub const CONTEXT_WORDS_BEFORE: usize = 3;

/// Words of context kept after the rightmost match.
pub const CONTEXT_WORDS_AFTER: usize = 10;

/// A boundary closer than this many characters to a document edge snaps onto it.
pub const EDGE_SNAP_CHARS: usize = 20;

/// How far a selected window is widened around its matches.
///
/// The default is the fixed policy used by [`crate::select_window`] callers that do
/// not override it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowPolicy {
    /// Words of context before the leftmost match.
    pub context_before: usize,
    /// Words after the rightmost match; the excerpt ends where this word starts.
    pub context_after: usize,
    /// Snap the start to offset 0 when fewer characters than this precede it.
    pub snap_start: usize,
    /// Snap the end to the document end when fewer characters than this follow it.
    pub snap_end: usize,
}

impl Default for WindowPolicy {
    fn default() -> Self {
        Self {
            context_before: CONTEXT_WORDS_BEFORE,
            context_after: CONTEXT_WORDS_AFTER,
            snap_start: EDGE_SNAP_CHARS,
            snap_end: EDGE_SNAP_CHARS,
        }
    }
}
