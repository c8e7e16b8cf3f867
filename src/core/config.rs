//! Table rules that vary between house conventions.

use serde::{Deserialize, Serialize};

/// Whether a player opening a fresh round may pass instead of playing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpeningPass {
    /// The opener must play. Anyone holding a card has an opening play, so
    /// every round removes at least one card and games always finish.
    #[default]
    Forbidden,
    /// `pass` is offered to the opener as well.
    Allowed,
}

/// Rule switches carried by every `GameState`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RulesConfig {
    #[serde(default)]
    pub opening_pass: OpeningPass,
}

impl RulesConfig {
    #[must_use]
    pub fn with_opening_pass(mut self, rule: OpeningPass) -> Self {
        self.opening_pass = rule;
        self
    }
}
