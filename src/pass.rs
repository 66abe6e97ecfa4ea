use crate::league::{reset_players, Players};
use crate::scoring::{score_rounds, ScoreOutcome, ScoringMode};
use crate::transcript::{scan_transcript, TranscriptScan};
use anyhow::Result;
use std::io::BufRead;
use std::time::Instant;

/// Settings for one scoring pass
#[derive(Debug, Clone)]
pub struct PassOptions<'a> {
    pub label: &'a str,
    pub mode: ScoringMode,
    /// Zero every player before scanning
    pub clean: bool,
    pub verbose: bool,
}

/// Everything a pass produced besides the updated players
#[derive(Debug, Clone)]
pub struct LeaguePass {
    pub scan: TranscriptScan,
    pub outcome: ScoreOutcome,
}

/// Scan a transcript and score it into `players`.
///
/// This is the whole pipeline short of persistence: callers save `players`
/// only after this returns Ok, so a failed read never leaves a half-scored file.
pub fn scan_and_score<R: BufRead>(
    reader: R,
    players: &mut Players,
    options: &PassOptions<'_>,
) -> Result<LeaguePass> {
    let start = Instant::now();

    if options.clean {
        reset_players(players);
        if options.verbose {
            eprintln!("Reset {} players before scoring", players.len());
        }
    }

    let scan = scan_transcript(reader, players, options.label, options.verbose)?;

    if options.verbose {
        eprintln!(
            "Scanned {} lines: {} results in {} rounds ({} reposts, {} names without a result)",
            scan.stats.lines,
            scan.stats.recorded,
            scan.results.len(),
            scan.stats.overwritten,
            scan.stats.dropped
        );
    }

    let outcome = score_rounds(&scan.results, players, options.mode);

    if options.verbose {
        eprintln!(
            "Scored {} rounds ({}) in {:?}",
            outcome.rounds.len(),
            options.mode,
            start.elapsed()
        );
    }

    Ok(LeaguePass { scan, outcome })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::PlayerRecord;
    use std::io::Cursor;

    const TRANSCRIPT: &str = "\
Ana
Wordle 1,569 3/6
⬛🟨⬛⬛⬛
Ben
Wordle 1,569 4/6
Cal
Wordle 1,569 X/6
Ana
Wordle 1,570 4/6
Ben
Wordle 1,570 4/6
Ben
Wordle 1,571 2/6
Cal
Wordle 1,571 5/6
Cal
Wordle 1,571 2/6
";

    fn roster() -> Players {
        ["Ana", "Ben", "Cal"]
            .iter()
            .map(|n| (n.to_string(), PlayerRecord::default()))
            .collect()
    }

    fn options(mode: ScoringMode, clean: bool) -> PassOptions<'static> {
        PassOptions {
            label: "Wordle",
            mode,
            clean,
            verbose: false,
        }
    }

    #[test]
    fn test_full_pass_skins() {
        let mut players = roster();
        let pass = scan_and_score(Cursor::new(TRANSCRIPT), &mut players, &options(ScoringMode::Skins, false))
            .unwrap();

        // 1,569: Ana outright (1). 1,570: Ana/Ben tie. 1,571: Ben/Cal tie after Cal's repost.
        assert_eq!(players["Ana"].score, 1);
        assert_eq!(players["Ana"].wins, 1);
        assert_eq!(players["Ben"].score, 0);
        assert_eq!(players["Cal"].score, 0);
        assert_eq!(pass.outcome.bounty, 3);

        assert_eq!(players["Cal"].guess_distribution.count(5), 0);
        assert_eq!(players["Cal"].guess_distribution.count(2), 1);
        assert_eq!(players["Cal"].guess_distribution.total(), 1);
        assert_eq!(pass.scan.stats.overwritten, 1);
    }

    #[test]
    fn test_full_pass_standard() {
        let mut players = roster();
        scan_and_score(Cursor::new(TRANSCRIPT), &mut players, &options(ScoringMode::Standard, false))
            .unwrap();

        assert_eq!(players["Ana"].score, 3 + 2);
        assert_eq!(players["Ben"].score, 2 + 2);
        assert_eq!(players["Cal"].score, 2);
    }

    #[test]
    fn test_rescoring_clean_is_idempotent() {
        let mut players = roster();
        let opts = options(ScoringMode::Standard, true);

        scan_and_score(Cursor::new(TRANSCRIPT), &mut players, &opts).unwrap();
        let first = players.clone();
        scan_and_score(Cursor::new(TRANSCRIPT), &mut players, &opts).unwrap();

        assert_eq!(players, first);
    }

    #[test]
    fn test_rescoring_without_clean_accumulates() {
        let mut players = roster();
        let opts = options(ScoringMode::Skins, false);

        scan_and_score(Cursor::new(TRANSCRIPT), &mut players, &opts).unwrap();
        scan_and_score(Cursor::new(TRANSCRIPT), &mut players, &opts).unwrap();

        assert_eq!(players["Ana"].score, 2);
        assert_eq!(players["Ana"].guess_distribution.total(), 4);
    }
}
