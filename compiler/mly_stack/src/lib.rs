//! Stack growth for recursive recognizers.
//!
//! Nested comments, nested code blocks and nested attribute groups are
//! recognized by plain function recursion, one frame per nesting level.
//! Input such as ten thousand `(*` in a row would otherwise exhaust the
//! thread stack, so every recursive entry point goes through
//! [`ensure_sufficient_stack`].
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker` allocates a fresh stack segment on demand.
//! - **WASM targets**: pass-through (the engine manages its own stack).
//!
//! # Configuration
//!
//! - **Red zone**: 64 KiB. Recognizer frames are small, a nesting level
//!   costs well under a kilobyte.
//! - **Growth size**: 1 MiB per new segment.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 64 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn scan_comment<C: Cursor>(cursor: &mut C) -> bool {
///     ensure_sufficient_stack(|| {
///         // ... may call scan_comment again for a nested comment ...
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM version: call `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
