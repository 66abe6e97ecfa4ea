use super::parser::parse_result_line;
use crate::league::{Attempts, DailyResults, Players, RoundId};
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// A result attributed to a player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub player: String,
    pub round: RoundId,
    pub attempts: Attempts,
}

/// What a single transcript line did to the scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    /// Line is a known player name; the next line should be their result
    Name(String),
    /// Result line following a name
    Result(Submission),
    /// A name line was not followed by a result; nothing was recorded for it
    Dropped { player: String },
    /// Anything else
    Ignored,
}

/// Line-at-a-time transcript scanner.
///
/// The chat export puts the sender's name on its own line and the message
/// body on the next, so the only state is the name waiting for its result.
pub struct Scanner {
    names: HashSet<String>,
    label: String,
    pending: Option<String>,
}

impl Scanner {
    pub fn new<I, S>(names: I, label: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            label: label.into(),
            pending: None,
        }
    }

    pub fn feed_line(&mut self, line: &str) -> LineEvent {
        let line = line.trim();

        if let Some(player) = self.pending.take() {
            if let Some(result) = parse_result_line(line, &self.label) {
                return LineEvent::Result(Submission {
                    player,
                    round: result.round,
                    attempts: result.attempts,
                });
            }

            // A name right after a name: the first one is dropped, the second
            // still gets its chance at the following line.
            if self.names.contains(line) {
                self.pending = Some(line.to_string());
            }
            return LineEvent::Dropped { player };
        }

        if self.names.contains(line) {
            self.pending = Some(line.to_string());
            return LineEvent::Name(line.to_string());
        }

        LineEvent::Ignored
    }

    /// Name waiting for its result line, if any
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub lines: usize,
    pub recorded: usize,
    pub overwritten: usize,
    pub dropped: usize,
}

#[derive(Debug, Clone, Default)]
pub struct TranscriptScan {
    pub results: DailyResults,
    pub stats: ScanStats,
}

/// Open a transcript file, or stdin when the path is `-`.
pub fn open_transcript(path: &Path) -> Result<Box<dyn BufRead>> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open transcript at {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}

/// Scan a transcript into a results table, keeping each player's guess
/// distribution in step with it.
///
/// Only names already in `players` are recognized. When a player posts twice
/// for the same round the later result wins, and the earlier one is taken back
/// out of their distribution before the new one goes in.
pub fn scan_transcript<R: BufRead>(
    reader: R,
    players: &mut Players,
    label: &str,
    verbose: bool,
) -> Result<TranscriptScan> {
    let mut scanner = Scanner::new(players.keys().cloned(), label);
    let mut scan = TranscriptScan::default();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read transcript line {}", line_no + 1))?;
        scan.stats.lines += 1;

        match scanner.feed_line(&line) {
            LineEvent::Result(submission) => {
                let previous =
                    scan.results
                        .record(submission.round.clone(), &submission.player, submission.attempts);

                if let Some(record) = players.get_mut(&submission.player) {
                    if let Some(old) = previous {
                        record.guess_distribution.unrecord(old);
                    }
                    record.guess_distribution.record(submission.attempts);
                }

                if let Some(old) = previous {
                    scan.stats.overwritten += 1;
                    if verbose {
                        eprintln!(
                            "  line {}: {} reposted Wordle {} ({} -> {})",
                            line_no + 1,
                            submission.player,
                            submission.round,
                            old,
                            submission.attempts
                        );
                    }
                }
                scan.stats.recorded += 1;
            }
            LineEvent::Dropped { player } => {
                scan.stats.dropped += 1;
                if verbose {
                    eprintln!("  line {}: no result after {}, skipped", line_no + 1, player);
                }
            }
            LineEvent::Name(_) | LineEvent::Ignored => {}
        }
    }

    if let Some(player) = scanner.pending() {
        scan.stats.dropped += 1;
        if verbose {
            eprintln!("  transcript ended before a result for {}", player);
        }
    }

    Ok(scan)
}
