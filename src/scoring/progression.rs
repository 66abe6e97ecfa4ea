use super::engine::ScoreOutcome;
use crate::league::{DailyResults, RoundId};
use std::collections::BTreeMap;

/// One player's running total across the scored rounds of a pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerSeries {
    pub cumulative: Vec<i64>,
    /// Whether the player posted a result for that round
    pub submitted: Vec<bool>,
}

impl PlayerSeries {
    pub fn final_score(&self) -> i64 {
        self.cumulative.last().copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreProgression {
    pub rounds: Vec<RoundId>,
    pub series: BTreeMap<String, PlayerSeries>,
}

impl ScoreProgression {
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Highest running total reached by any player
    pub fn max_score(&self) -> i64 {
        self.series
            .values()
            .flat_map(|s| s.cumulative.iter().copied())
            .max()
            .unwrap_or(0)
    }
}

/// Running totals for `players`, starting from zero, one point per scored round.
///
/// Only points earned in this pass are counted, so the last value is what the
/// pass added to each player's score.
pub fn score_progression<S: AsRef<str>>(
    results: &DailyResults,
    outcome: &ScoreOutcome,
    players: &[S],
) -> ScoreProgression {
    let mut progression = ScoreProgression {
        rounds: Vec::with_capacity(outcome.rounds.len()),
        series: players
            .iter()
            .map(|name| (name.as_ref().to_string(), PlayerSeries::default()))
            .collect(),
    };
    let mut totals: BTreeMap<&str, i64> = players.iter().map(|name| (name.as_ref(), 0)).collect();

    for round in &outcome.rounds {
        for winner in &round.winners {
            if let Some(total) = totals.get_mut(winner.as_str()) {
                *total += i64::from(round.points);
            }
        }

        let posted = results.get(&round.round);
        for (name, series) in progression.series.iter_mut() {
            series.cumulative.push(totals.get(name.as_str()).copied().unwrap_or(0));
            series
                .submitted
                .push(posted.is_some_and(|r| r.contains_key(name)));
        }
        progression.rounds.push(round.round.clone());
    }

    progression
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::{Attempts, PlayerRecord, Players};
    use crate::scoring::{score_rounds, ScoringMode};

    fn attempts(n: u8) -> Attempts {
        Attempts::new(n).unwrap()
    }

    #[test]
    fn test_progression_tracks_running_totals() {
        let mut players: Players = ["A", "B"]
            .iter()
            .map(|n| (n.to_string(), PlayerRecord::default()))
            .collect();
        players.get_mut("A").unwrap().score = 50;

        let mut results = DailyResults::new();
        results.record("1".into(), "A", attempts(3));
        results.record("1".into(), "B", attempts(4));
        results.record("2".into(), "A", attempts(3));
        results.record("2".into(), "B", attempts(3));
        results.record("3".into(), "B", attempts(2));

        let outcome = score_rounds(&results, &mut players, ScoringMode::Skins);
        let progression = score_progression(&results, &outcome, &["A", "B"]);

        assert_eq!(progression.rounds.len(), 3);
        let a = &progression.series["A"];
        let b = &progression.series["B"];
        assert_eq!(a.cumulative, vec![1, 1, 1]);
        assert_eq!(b.cumulative, vec![0, 0, 2]);
        assert_eq!(a.submitted, vec![true, true, false]);
        assert_eq!(b.submitted, vec![true, true, true]);
        assert_eq!(a.final_score(), 1);
        assert_eq!(progression.max_score(), 2);
    }

    #[test]
    fn test_progression_ignores_untracked_winners() {
        let mut players: Players = ["A", "B"]
            .iter()
            .map(|n| (n.to_string(), PlayerRecord::default()))
            .collect();
        let mut results = DailyResults::new();
        results.record("1".into(), "B", attempts(1));

        let outcome = score_rounds(&results, &mut players, ScoringMode::Standard);
        let progression = score_progression(&results, &outcome, &["A"]);

        assert_eq!(progression.series.len(), 1);
        assert_eq!(progression.series["A"].cumulative, vec![0]);
        assert_eq!(progression.series["A"].submitted, vec![false]);
    }

    #[test]
    fn test_empty_progression() {
        let outcome = ScoreOutcome {
            bounty: 1,
            rounds: Vec::new(),
        };
        let progression = score_progression(&DailyResults::new(), &outcome, &["A"]);
        assert!(progression.is_empty());
        assert_eq!(progression.max_score(), 0);
    }
}
