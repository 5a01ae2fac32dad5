//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Pattern and legal move generation
//! - `threats.rs` - Attack detection, check and raw board edits
//! - `proptest.rs` - Property-based tests over random games

mod movegen;

use crate::board::Square;

pub(super) fn sq(name: &str) -> Square {
    name.parse().unwrap()
}
