use std::io::IsTerminal;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::league::{standings, PlayerRecord, Players};
use crate::scoring::{OutcomeKind, RoundOutcome, ScoringMode};

/// Widest a distribution bar gets, even on very wide terminals
const MAX_BAR_WIDTH: usize = 40;

/// Bar width used when output is piped
const DEFAULT_BAR_WIDTH: usize = 20;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Bar width that leaves room for the "  N: " prefix and the count label
fn bar_width() -> usize {
    match get_terminal_width() {
        Some(width) => width.saturating_sub(24).clamp(5, MAX_BAR_WIDTH),
        None => DEFAULT_BAR_WIDTH,
    }
}

/// Format a count as a share of the total, one decimal ("42.9%")
pub fn format_percentage(count: u32, total: u32) -> String {
    let percentage = if total > 0 {
        f64::from(count) / f64::from(total) * 100.0
    } else {
        0.0
    };
    format!("{:.1}%", percentage)
}

/// Proportional bar of `width` cells, scaled against `max`
pub fn distribution_bar(count: u32, max: u32, width: usize) -> String {
    let ratio = if max > 0 {
        (f64::from(count) / f64::from(max)).min(1.0)
    } else {
        0.0
    };
    let filled = (ratio * width as f64).round() as usize;
    // Nonzero counts always get at least one cell
    let filled = if count > 0 { filled.max(1) } else { filled };
    "█".repeat(filled)
}

/// One standings line: "Ana: 12 points, 3 W's"
fn format_standing(name: &str, record: &PlayerRecord, use_colors: bool) -> String {
    if use_colors {
        format!(
            "{}: {} points, {} W's",
            name.bold(),
            record.score.yellow(),
            record.wins.cyan()
        )
    } else {
        format!("{}: {} points, {} W's", name, record.score, record.wins)
    }
}

/// Standings, highest score first
pub fn format_standings(players: &Players, use_colors: bool) -> String {
    if players.is_empty() {
        return "No players found.".to_string();
    }

    standings(players)
        .iter()
        .map(|(name, record)| format_standing(name, record, use_colors))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A player's guess distribution, one line per guess count
pub fn format_distribution(
    name: &str,
    record: &PlayerRecord,
    width: usize,
    use_colors: bool,
) -> String {
    let dist = &record.guess_distribution;
    let total = dist.total();
    let max = dist.max_count();

    let mut lines = vec![format!("{}:", name)];
    for (guesses, count) in dist.iter() {
        let bar = distribution_bar(count, max, width);
        let label = if count > 0 {
            format!("{} ({})", count, format_percentage(count, total))
        } else {
            count.to_string()
        };

        let line = if use_colors {
            format!("  {}: {} {}", guesses, bar.green(), label)
        } else if bar.is_empty() {
            format!("  {}: {}", guesses, label)
        } else {
            format!("  {}: {} {}", guesses, bar, label)
        };
        lines.push(line);
    }
    lines.join("\n")
}

/// Full run summary: final bounty (when scored), standings, distributions
pub fn format_summary(
    players: &Players,
    bounty: Option<u32>,
    mode: ScoringMode,
    use_colors: bool,
) -> String {
    let title = "=== Wordle League Summary ===";
    let mut sections = vec![if use_colors {
        title.bold().to_string()
    } else {
        title.to_string()
    }];

    if let Some(bounty) = bounty {
        sections.push(format!("Scoring: {}\nFinal Bounty: {}", mode, bounty));
    }

    sections.push(format!("Player Scores:\n{}", format_standings(players, use_colors)));

    let width = bar_width();
    let distributions = players
        .iter()
        .map(|(name, record)| format_distribution(name, record, width, use_colors))
        .collect::<Vec<_>>()
        .join("\n\n");
    sections.push(format!("Guess Distributions:\n\n{}", distributions));

    sections.join("\n\n")
}

/// Format a scored round for verbose output
/// "1,569  Ana (3/6)  +3  bounty 1"
pub fn format_round_outcome(round: &RoundOutcome) -> String {
    let winners = round.winners.join(", ");
    let result = match round.kind {
        OutcomeKind::Outright => format!("+{}", round.points),
        _ if round.points > 0 => format!("+{} each", round.points),
        _ => "no award".to_string(),
    };
    format!(
        "{}  {} ({})  {}  bounty {}",
        round.round, winners, round.best, result, round.bounty_after
    )
}

/// Format standings as tab-separated values for scripting
/// Columns: name, score, wins, then counts for 1-6 guesses (no headers, no colors)
pub fn format_tsv(players: &Players) -> String {
    standings(players)
        .iter()
        .map(|(name, record)| {
            let mut fields = vec![
                name.to_string(),
                record.score.to_string(),
                record.wins.to_string(),
            ];
            fields.extend(record.guess_distribution.iter().map(|(_, count)| count.to_string()));
            fields.join("\t")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
