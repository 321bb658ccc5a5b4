//! Arena allocation for syntax trees.
//!
//! Expression nodes are allocated from a bump arena and refer to each other
//! by `&'a` references. The whole tree is released at once when the arena
//! is dropped.

use bumpalo::Bump;

/// A bump arena that owns every node of one or more syntax trees.
///
/// Values placed in the arena are never dropped individually, so only types
/// without meaningful `Drop` glue (tokens borrowing the source, references,
/// numbers) should be allocated here.
pub struct Arena {
    bump: Bump,
}

impl Arena {
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Move a value into the arena and return a shared reference to it.
    #[inline]
    pub fn alloc<T>(&self, val: T) -> &T {
        self.bump.alloc(val)
    }

    /// Copy a slice into the arena.
    #[inline]
    pub fn alloc_slice_copy<T: Copy>(&self, src: &[T]) -> &[T] {
        self.bump.alloc_slice_copy(src)
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}
