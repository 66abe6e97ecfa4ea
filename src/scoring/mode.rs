use serde::{Deserialize, Serialize};
use std::fmt;

/// How a round's winners are paid.
///
/// Example YAML:
/// ```yaml
/// scoring_mode: standard
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMode {
    /// Ties pay too: 2 points each for a 2-way tie, 1 each for a 3-way tie.
    /// An outright winner takes the bounty, but never less than 3.
    Standard,
    /// Only outright winners are paid. Any tie rolls the bounty over.
    #[default]
    Skins,
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringMode::Standard => f.write_str("standard"),
            ScoringMode::Skins => f.write_str("skins"),
        }
    }
}
