pub mod formatter;

pub use formatter::{
    distribution_bar, format_distribution, format_percentage, format_round_outcome,
    format_standings, format_summary, format_tsv, should_use_colors,
};
