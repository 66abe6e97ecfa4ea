pub mod results;
pub mod storage;
pub mod types;

pub use results::DailyResults;
pub use storage::{active_standings, load_players, reset_players, save_players, standings};
pub use types::{Attempts, GuessDistribution, PlayerRecord, Players, RoundId};
