//! lox_core: Core utilities shared by the Lox front end.
//!
//! Provides source spans and the bump arena that syntax trees are
//! allocated from.

pub mod arena;
pub mod text;

pub use arena::Arena;
pub use text::{text_pos, TextPos, TextSpan, MAX_SOURCE_LEN};
