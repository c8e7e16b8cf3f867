//! Per-search counters.
//!
//! A [`SearchStats`] is reset at the start of every `find_best_move` call, so
//! it always describes the most recent search only.

use serde::{Deserialize, Serialize};

/// Counters filled in by one search.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    pub iterations: u32,

    /// Nodes added to the tree. One per iteration until the tree bottoms out
    /// on finished games.
    pub nodes_expanded: u32,

    pub simulations: u32,

    /// Plies played across all rollouts.
    pub rollout_plies: u64,

    /// Rollouts stopped by `max_rollout_plies` before anyone went out.
    pub truncated_rollouts: u32,

    /// Deepest node added, counted from the root.
    pub max_depth: u16,

    /// Wall-clock time of the search in microseconds.
    pub time_us: u64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record one finished rollout.
    pub fn record_rollout(&mut self, plies: u32, truncated: bool) {
        self.simulations += 1;
        self.rollout_plies += u64::from(plies);
        if truncated {
            self.truncated_rollouts += 1;
        }
    }

    #[must_use]
    pub fn iterations_per_second(&self) -> f64 {
        per_second(u64::from(self.iterations), self.time_us)
    }

    /// Average rollout length in plies.
    #[must_use]
    pub fn avg_rollout_plies(&self) -> f64 {
        if self.simulations == 0 {
            0.0
        } else {
            self.rollout_plies as f64 / f64::from(self.simulations)
        }
    }

    /// Share of rollouts that hit the ply cap.
    #[must_use]
    pub fn truncation_rate(&self) -> f64 {
        if self.simulations == 0 {
            0.0
        } else {
            f64::from(self.truncated_rollouts) / f64::from(self.simulations)
        }
    }

    /// Average nodes added per iteration.
    #[must_use]
    pub fn avg_nodes_per_iteration(&self) -> f64 {
        if self.iterations == 0 {
            0.0
        } else {
            f64::from(self.nodes_expanded) / f64::from(self.iterations)
        }
    }
}

fn per_second(count: u64, time_us: u64) -> f64 {
    if time_us == 0 {
        0.0
    } else {
        count as f64 / (time_us as f64 / 1_000_000.0)
    }
}
