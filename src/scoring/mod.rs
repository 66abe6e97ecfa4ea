pub mod engine;
pub mod mode;
pub mod progression;

pub use engine::{score_rounds, OutcomeKind, RoundOutcome, ScoreOutcome, STARTING_BOUNTY};
pub use mode::ScoringMode;
pub use progression::{score_progression, PlayerSeries, ScoreProgression};
