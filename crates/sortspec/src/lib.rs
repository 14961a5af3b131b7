//! Core resolution pipeline for client-supplied sort requests: a syntactic
//! parser for JSON:API sort strings, per-resource sort configuration, and a
//! resolver that turns both into executor-facing order instructions.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod capability;
pub mod config;
pub mod direction;
pub mod error;
pub mod parse;
pub mod resolve;
pub mod spec;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        capability::SortCapabilities,
        config::{ResourceSortConfig, SortOverride},
        direction::Direction,
        resolve::{OrderInstruction, ResolvedOrder, SortTarget},
        spec::{SortField, SortSpec},
    };
}
