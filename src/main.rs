use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;

use wordle_league::config::Config;
use wordle_league::league::Players;
use wordle_league::pass::{LeaguePass, PassOptions};
use wordle_league::scoring::ScoringMode;

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Scan the transcript, score it and save players (default if no subcommand)
    Score,
    /// Print stored standings and guess distributions without scanning
    Summary,
    /// Print stored standings as tab-separated values
    Export,
    /// Scan and score in memory, then browse the results as charts
    Charts,
    /// Zero every player's score, wins and guess distribution
    Reset,
}

#[derive(Parser, Debug)]
#[command(name = "wordle-league")]
#[command(about = "Score a Wordle league from a group chat transcript", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/wordle-league/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Chat transcript to scan ("-" for stdin)
    #[arg(long, global = true)]
    transcript: Option<PathBuf>,

    /// Player records JSON file
    #[arg(long, global = true)]
    players: Option<PathBuf>,

    /// Scoring mode, overriding the config file
    #[arg(long, global = true, value_enum)]
    mode: Option<ScoringMode>,

    /// Zero every player before scanning
    #[arg(long, global = true)]
    clean: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Score);
    let start_time = Instant::now();

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let mut config = match wordle_league::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // CLI flags win over config values
    if let Some(mode) = cli.mode {
        config.scoring_mode = mode;
    }
    if cli.clean {
        config.clean_before_scoring = true;
    }
    if let Some(path) = cli.transcript {
        config.transcript = Some(path);
    }
    if let Some(path) = cli.players {
        config.players = Some(path);
    }

    if let Err(errors) = wordle_league::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    if cli.verbose {
        eprintln!("Scoring mode: {}", config.scoring_mode);
        eprintln!("Transcript: {}", config.transcript_path().display());
        eprintln!("Players: {}", config.players_path().display());
        if config.clean_before_scoring {
            eprintln!("Players will be reset before scoring");
        }
    }

    // Players load before any scoring work so a bad file fails fast
    let players_path = config.players_path();
    let mut players = match wordle_league::league::load_players(&players_path) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Input error: {:#}", e);
            std::process::exit(EXIT_INPUT);
        }
    };

    if cli.verbose {
        eprintln!("Loaded {} players", players.len());
    }

    let use_colors = wordle_league::output::should_use_colors();

    // Route based on subcommand
    match command {
        Commands::Score => {
            let pass = run_pass(&config, &mut players, cli.verbose);
            save_or_exit(&players_path, &players);

            println!(
                "{}",
                wordle_league::output::format_summary(
                    &players,
                    Some(pass.outcome.bounty),
                    config.scoring_mode,
                    use_colors,
                )
            );
        }
        Commands::Summary => {
            println!(
                "{}",
                wordle_league::output::format_summary(
                    &players,
                    None,
                    config.scoring_mode,
                    use_colors,
                )
            );
        }
        Commands::Export => {
            let tsv = wordle_league::output::format_tsv(&players);
            if !tsv.is_empty() {
                println!("{}", tsv);
            }
        }
        Commands::Charts => {
            let pass = run_pass(&config, &mut players, cli.verbose);

            let names: Vec<String> = wordle_league::league::active_standings(&players)
                .into_iter()
                .map(|(name, _)| name.to_string())
                .collect();
            if names.is_empty() {
                println!("No active players found. Nothing to chart.");
                std::process::exit(EXIT_SUCCESS);
            }

            let progression = wordle_league::scoring::score_progression(
                &pass.scan.results,
                &pass.outcome,
                &names,
            );
            let colors = wordle_league::tui::resolve_theme(config.theme);
            let app = wordle_league::tui::App::new(
                &players,
                progression,
                config.scoring_mode,
                pass.outcome.bounty,
                colors,
            );

            if let Err(e) = wordle_league::tui::run_tui(app) {
                eprintln!("TUI error: {:#}", e);
                std::process::exit(EXIT_INPUT);
            }
        }
        Commands::Reset => {
            wordle_league::league::reset_players(&mut players);
            save_or_exit(&players_path, &players);
            println!("Reset {} players.", players.len());
        }
    }

    if cli.verbose {
        eprintln!("Done in {:?}", start_time.elapsed());
    }

    std::process::exit(EXIT_SUCCESS);
}

/// Open the configured transcript and score it into `players`, exiting on failure
fn run_pass(config: &Config, players: &mut Players, verbose: bool) -> LeaguePass {
    let transcript_path = config.transcript_path();
    let reader = match wordle_league::transcript::open_transcript(&transcript_path) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Input error: {:#}", e);
            std::process::exit(EXIT_INPUT);
        }
    };

    let options = PassOptions {
        label: config.result_label(),
        mode: config.scoring_mode,
        clean: config.clean_before_scoring,
        verbose,
    };

    let pass = match wordle_league::pass::scan_and_score(reader, players, &options) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Input error: {:#}", e);
            std::process::exit(EXIT_INPUT);
        }
    };

    if verbose {
        for round in &pass.outcome.rounds {
            eprintln!("  {}", wordle_league::output::format_round_outcome(round));
        }
    }

    pass
}

fn save_or_exit(path: &Path, players: &Players) {
    if let Err(e) = wordle_league::league::save_players(path, players) {
        eprintln!("Input error: {:#}", e);
        std::process::exit(EXIT_INPUT);
    }
}
