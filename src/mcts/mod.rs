//! Monte Carlo Tree Search for rust-dalmuti.
//!
//! ## Overview
//!
//! Two drivers share one arena tree and one search loop:
//!
//! - **`MCTSSearch`**: perfect information. Rollouts run on each node's
//!   state as-is.
//! - **`DeterminizingSearch`**: before each rollout the opponents' hands are
//!   redrawn from the cards the root player cannot see.
//!
//! Both are generic over [`RulesEngine`](crate::rules::RulesEngine), score a
//! rollout 1 when the root player wins and 0 otherwise, and return the most
//! visited root move.
//!
//! ## Usage
//!
//! ```rust
//! use rust_dalmuti::core::{GameState, Style};
//! use rust_dalmuti::mcts::{DeterminizingSearch, MCTSConfig, MCTSSearch};
//!
//! let state = GameState::new(&[Style::Mcts, Style::Balanced, Style::Balanced], 42).unwrap();
//!
//! let mut search = MCTSSearch::new(MCTSConfig::default());
//! let mv = search.find_best_move(&state, 200);
//! assert!(state.is_legal(mv));
//!
//! let mut hidden = DeterminizingSearch::new(MCTSConfig::determinizing());
//! let mv = hidden.find_best_move(&state, 200);
//! assert!(state.is_legal(mv));
//!
//! // Visit shares for training data
//! for (mv, prob) in hidden.move_probabilities() {
//!     println!("{mv}: {:.2}%", prob * 100.0);
//! }
//! ```
//!
//! ## Custom Policies
//!
//! ```rust,ignore
//! let search = MCTSSearch::new(config).with_selection(MySelection);
//! ```

pub mod config;
pub mod determinize;
pub mod ismcts;
pub mod node;
pub mod policy;
pub mod search;
pub mod stats;
pub mod tree;

// Re-export main types
pub use config::MCTSConfig;
pub use determinize::{unseen_pool, Determinize};
pub use ismcts::DeterminizingSearch;
pub use node::{MCTSNode, NodeId};
pub use policy::{RandomSimulation, Rollout, SelectionPolicy, SimulationPolicy, UCB1};
pub use search::MCTSSearch;
pub use stats::SearchStats;
pub use tree::{MCTSTree, TreeStats};
