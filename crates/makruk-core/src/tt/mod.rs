//! Transposition table
//!
//! Keyed by the Zobrist hash of a search node. When the table reaches its
//! capacity it is flushed completely; there is no replacement policy.

mod entry;
mod table;

pub use entry::{NodeType, TTEntry};
pub use table::{DEFAULT_TT_CAPACITY, TranspositionTable};
