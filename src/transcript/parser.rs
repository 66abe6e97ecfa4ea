use crate::league::{Attempts, RoundId};

/// Word that starts every share line ("Wordle 1,569 3/6")
pub const DEFAULT_RESULT_LABEL: &str = "Wordle";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLine {
    pub round: RoundId,
    pub attempts: Attempts,
}

/// Parse a share line of the form `<label> <round> <score>/6`.
///
/// The round is digits with optional `,` separators and is kept verbatim.
/// The score is a single character: `1`-`6`, or `X`/`0` for a failed puzzle.
/// Only the start of the line has to match, so the hard-mode `*` and anything
/// pasted after the score are ignored.
pub fn parse_result_line(line: &str, label: &str) -> Option<ResultLine> {
    let rest = line.strip_prefix(label)?.strip_prefix(' ')?;
    let (round, rest) = rest.split_once(' ')?;

    if round.is_empty() || !round.chars().all(|c| c.is_ascii_digit() || c == ',') {
        return None;
    }

    let mut chars = rest.chars();
    let token = chars.next()?;
    chars.as_str().strip_prefix("/6")?;

    let attempts = match token {
        'X' | '0' => Attempts::FAILED,
        '1'..='6' => Attempts::new(token as u8 - b'0')?,
        _ => return None,
    };

    Some(ResultLine {
        round: RoundId::new(round),
        attempts,
    })
}
