use super::types::{Attempts, RoundId};
use std::collections::BTreeMap;

/// One round's submissions: player name -> attempts
pub type RoundResults = BTreeMap<String, Attempts>;

/// Every recorded result, grouped by round.
///
/// Rounds iterate in `RoundId` order. A player has at most one result per
/// round; recording again replaces the earlier one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyResults {
    pub(crate) rounds: BTreeMap<RoundId, RoundResults>,
}

impl DailyResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a result and return the one it replaced, if any.
    pub fn record(&mut self, round: RoundId, player: &str, attempts: Attempts) -> Option<Attempts> {
        self.rounds
            .entry(round)
            .or_default()
            .insert(player.to_string(), attempts)
    }

    pub fn get(&self, round: &RoundId) -> Option<&RoundResults> {
        self.rounds.get(round)
    }

    /// Rounds in ascending round-id order
    pub fn rounds(&self) -> impl Iterator<Item = (&RoundId, &RoundResults)> {
        self.rounds.iter()
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
}
