use super::mode::ScoringMode;
use crate::league::results::RoundResults;
use crate::league::{Attempts, DailyResults, Players, RoundId};

/// Bounty at the start of a pass and after every outright win
pub const STARTING_BOUNTY: u32 = 1;

/// Floor on an outright win under standard scoring
pub const STANDARD_MIN_OUTRIGHT: u32 = 3;

const TWO_WAY_TIE_POINTS: u32 = 2;
const THREE_WAY_TIE_POINTS: u32 = 1;

/// Shape of a round's result, decided by how many players shared the best score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Outright,
    TwoWayTie,
    ThreeWayTie,
    NoAward,
}

impl OutcomeKind {
    fn from_winner_count(count: usize) -> Self {
        match count {
            1 => OutcomeKind::Outright,
            2 => OutcomeKind::TwoWayTie,
            3 => OutcomeKind::ThreeWayTie,
            _ => OutcomeKind::NoAward,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub round: RoundId,
    /// Best attempts posted this round
    pub best: Attempts,
    pub winners: Vec<String>,
    pub kind: OutcomeKind,
    /// Points paid to each winner (0 when nobody is paid)
    pub points: u32,
    pub bounty_after: u32,
}

impl RoundOutcome {
    /// Sum of everything paid out this round
    pub fn total_awarded(&self) -> u64 {
        u64::from(self.points) * self.winners.len() as u64
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreOutcome {
    /// Bounty left on the table after the last round
    pub bounty: u32,
    pub rounds: Vec<RoundOutcome>,
}

/// Best attempts in a round and everyone who posted it.
/// None for a round with no results.
fn round_winners(results: &RoundResults) -> Option<(Attempts, Vec<String>)> {
    let best = results.values().copied().min()?;
    let winners = results
        .iter()
        .filter(|(_, attempts)| **attempts == best)
        .map(|(player, _)| player.clone())
        .collect();
    Some((best, winners))
}

/// Points each winner receives for a round
fn points_for(mode: ScoringMode, kind: OutcomeKind, bounty: u32) -> u32 {
    match (mode, kind) {
        (ScoringMode::Skins, OutcomeKind::Outright) => bounty,
        (ScoringMode::Standard, OutcomeKind::Outright) => bounty.max(STANDARD_MIN_OUTRIGHT),
        (ScoringMode::Standard, OutcomeKind::TwoWayTie) => TWO_WAY_TIE_POINTS,
        (ScoringMode::Standard, OutcomeKind::ThreeWayTie) => THREE_WAY_TIE_POINTS,
        _ => 0,
    }
}

/// Score every round in round-id order, updating `players` in place.
///
/// The bounty starts at 1. An outright win pays out and resets it; every
/// other outcome adds 1 to it. Rounds with no results are skipped and leave
/// the bounty alone. Ties are decided only by equal attempts.
///
/// A round where every result is a failure still has winners: they share the
/// best (failed) attempts like any other tie.
pub fn score_rounds(results: &DailyResults, players: &mut Players, mode: ScoringMode) -> ScoreOutcome {
    let mut bounty = STARTING_BOUNTY;
    let mut rounds = Vec::with_capacity(results.len());

    for (round, round_results) in results.rounds() {
        let Some((best, winners)) = round_winners(round_results) else {
            continue;
        };

        let kind = OutcomeKind::from_winner_count(winners.len());
        let points = points_for(mode, kind, bounty);

        for winner in &winners {
            if let Some(record) = players.get_mut(winner) {
                record.score += i64::from(points);
                if kind == OutcomeKind::Outright {
                    record.wins += 1;
                }
            }
        }

        bounty = if kind == OutcomeKind::Outright {
            STARTING_BOUNTY
        } else {
            bounty + 1
        };

        rounds.push(RoundOutcome {
            round: round.clone(),
            best,
            winners,
            kind,
            points,
            bounty_after: bounty,
        });
    }

    ScoreOutcome { bounty, rounds }
}
