//! Rules: legality, transitions and the engine trait.
//!
//! - `legality`: the play predicate and legal-move enumeration
//! - `transition`: plays, passes, round clearing and turn advancement
//! - `engine`: `RulesEngine`, the interface the search drivers consume
//!
//! Rule methods are inherent methods on [`crate::core::GameState`], split
//! across these files by concern.

pub mod engine;
pub mod legality;
pub mod transition;

pub use engine::RulesEngine;
