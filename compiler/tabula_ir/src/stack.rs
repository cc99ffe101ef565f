//! Stack growth for recursive tree algorithms.
//!
//! Parsing, rendering, traversal and evaluation all recurse once per level
//! of nesting, so an input like `!!!!...x` or `((((...))))` is bounded only by
//! its length. Each recursive step goes through [`ensure_sufficient_stack`],
//! which switches to a freshly allocated segment when the current one is
//! nearly exhausted.
//!
//! On WASM targets this is a passthrough.

/// Grow the stack when less than this remains (64KB).
const RED_ZONE: usize = 64 * 1024;

/// Size of each newly allocated stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if the remaining space is below the red zone.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
