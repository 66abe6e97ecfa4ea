pub mod parser;
pub mod scanner;

pub use parser::{parse_result_line, ResultLine, DEFAULT_RESULT_LABEL};
pub use scanner::{open_transcript, scan_transcript, LineEvent, ScanStats, Scanner, Submission, TranscriptScan};
