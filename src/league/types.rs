use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Highest attempt-count that still counts as a solve.
pub const MAX_GUESSES: u8 = 6;

/// All player records keyed by display name, exactly as they appear in the chat.
pub type Players = BTreeMap<String, PlayerRecord>;

/// Number of guesses a player needed for one round.
///
/// Values 1-6 are solves. 7 is the failure sentinel (an `X/6` result), which
/// sorts after every solve so it only wins a round nobody solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Attempts(u8);

impl Attempts {
    pub const FAILED: Attempts = Attempts(MAX_GUESSES + 1);

    /// Returns None for anything outside 1..=7
    pub fn new(value: u8) -> Option<Self> {
        if (1..=MAX_GUESSES + 1).contains(&value) {
            Some(Self(value))
        } else {
            None
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn is_solved(self) -> bool {
        self.0 <= MAX_GUESSES
    }
}

impl fmt::Display for Attempts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_solved() {
            write!(f, "{}/6", self.0)
        } else {
            write!(f, "X/6")
        }
    }
}

/// Puzzle number exactly as written in the share line, separators included ("1,569").
///
/// Ordering is plain string ordering of that literal token.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoundId(String);

impl RoundId {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoundId {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

/// Histogram of solves by guess count.
///
/// Serialized as `{"1": n, ..., "6": n}`. Missing buckets read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, u32>", into = "BTreeMap<String, u32>")]
pub struct GuessDistribution {
    counts: [u32; MAX_GUESSES as usize],
}

impl GuessDistribution {
    /// Count for a guess bucket (1-6). Out of range buckets are always zero.
    pub fn count(&self, guesses: u8) -> u32 {
        Self::index(guesses).map_or(0, |i| self.counts[i])
    }

    /// Add a result. Failures are not part of the histogram.
    pub fn record(&mut self, attempts: Attempts) {
        if let Some(i) = Self::index(attempts.get()) {
            self.counts[i] += 1;
        }
    }

    /// Reverse an earlier `record` for the same attempts.
    pub fn unrecord(&mut self, attempts: Attempts) {
        if let Some(i) = Self::index(attempts.get()) {
            self.counts[i] = self.counts[i].saturating_sub(1);
        }
    }

    /// Total solved rounds
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn max_count(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// `(guesses, count)` pairs for buckets 1 through 6
    pub fn iter(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, count)| (i as u8 + 1, *count))
    }

    pub fn clear(&mut self) {
        self.counts = [0; MAX_GUESSES as usize];
    }

    fn index(guesses: u8) -> Option<usize> {
        if (1..=MAX_GUESSES).contains(&guesses) {
            Some(guesses as usize - 1)
        } else {
            None
        }
    }
}

impl TryFrom<BTreeMap<String, u32>> for GuessDistribution {
    type Error = String;

    fn try_from(map: BTreeMap<String, u32>) -> Result<Self, Self::Error> {
        let mut dist = GuessDistribution::default();
        for (key, count) in map {
            let index = key
                .parse::<u8>()
                .ok()
                .and_then(Self::index)
                .ok_or_else(|| format!("invalid guess bucket '{}', expected 1-6", key))?;
            dist.counts[index] = count;
        }
        Ok(dist)
    }
}

impl From<GuessDistribution> for BTreeMap<String, u32> {
    fn from(dist: GuessDistribution) -> Self {
        dist.iter().map(|(guesses, count)| (guesses.to_string(), count)).collect()
    }
}

/// Persisted per-player accumulator.
///
/// Fields this tool doesn't know about are kept in `extra` and written back untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(default)]
    pub score: i64,

    #[serde(default)]
    pub wins: u32,

    #[serde(default)]
    pub guess_distribution: GuessDistribution,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl PlayerRecord {
    /// Zero score, wins and histogram. Extra fields are left alone.
    pub fn reset(&mut self) {
        self.score = 0;
        self.wins = 0;
        self.guess_distribution.clear();
    }

    /// A player is active once they have at least one solve on record
    pub fn is_active(&self) -> bool {
        self.guess_distribution.total() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attempts_range() {
        assert!(Attempts::new(0).is_none());
        assert!(Attempts::new(8).is_none());
        assert_eq!(Attempts::new(7), Some(Attempts::FAILED));
        assert!(Attempts::new(6).unwrap().is_solved());
        assert!(!Attempts::FAILED.is_solved());
    }

    #[test]
    fn test_failed_sorts_after_every_solve() {
        assert!(Attempts::new(6).unwrap() < Attempts::FAILED);
    }

    #[test]
    fn test_attempts_display() {
        assert_eq!(Attempts::new(3).unwrap().to_string(), "3/6");
        assert_eq!(Attempts::FAILED.to_string(), "X/6");
    }

    #[test]
    fn test_round_id_literal_ordering() {
        assert!(RoundId::from("1,569") < RoundId::from("1,570"));
        assert!(RoundId::from("1,599") < RoundId::from("1,600"));
        // Literal comparison: a shorter number with a larger leading digit sorts later
        assert!(RoundId::from("999") > RoundId::from("1,000"));
    }

    #[test]
    fn test_distribution_ignores_failures() {
        let mut dist = GuessDistribution::default();
        dist.record(Attempts::FAILED);
        assert_eq!(dist.total(), 0);

        dist.record(Attempts::new(4).unwrap());
        dist.record(Attempts::new(4).unwrap());
        assert_eq!(dist.count(4), 2);
        assert_eq!(dist.max_count(), 2);

        dist.unrecord(Attempts::new(4).unwrap());
        assert_eq!(dist.count(4), 1);
        dist.unrecord(Attempts::FAILED);
        assert_eq!(dist.total(), 1);
    }

    #[test]
    fn test_unrecord_does_not_underflow() {
        let mut dist = GuessDistribution::default();
        dist.unrecord(Attempts::new(2).unwrap());
        assert_eq!(dist.count(2), 0);
    }

    #[test]
    fn test_player_record_json_shape() {
        let json = r#"{
            "score": 12,
            "wins": 3,
            "guess_distribution": {"1": 0, "2": 1, "3": 4, "4": 2, "5": 0, "6": 1},
            "best_scores": 5
        }"#;
        let record: PlayerRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.score, 12);
        assert_eq!(record.wins, 3);
        assert_eq!(record.guess_distribution.count(3), 4);
        assert_eq!(record.guess_distribution.total(), 8);
        assert_eq!(record.extra.get("best_scores"), Some(&serde_json::json!(5)));

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["guess_distribution"]["6"], 1);
        assert_eq!(value["best_scores"], 5);
    }

    #[test]
    fn test_player_record_missing_fields_default() {
        let record: PlayerRecord = serde_json::from_str(r#"{"score": 4}"#).unwrap();
        assert_eq!(record.wins, 0);
        assert_eq!(record.guess_distribution.total(), 0);
        assert!(!record.is_active());
    }

    #[test]
    fn test_invalid_bucket_rejected() {
        let json = r#"{"score": 0, "wins": 0, "guess_distribution": {"7": 1}}"#;
        assert!(serde_json::from_str::<PlayerRecord>(json).is_err());
    }

    #[test]
    fn test_reset_keeps_extra_fields() {
        let mut record: PlayerRecord = serde_json::from_str(
            r#"{"score": 9, "wins": 2, "guess_distribution": {"3": 2}, "nickname": "Q"}"#,
        )
        .unwrap();
        record.reset();
        assert_eq!(record.score, 0);
        assert_eq!(record.wins, 0);
        assert_eq!(record.guess_distribution.total(), 0);
        assert!(record.extra.contains_key("nickname"));
    }
}
