use crate::scoring::ScoringMode;
use crate::transcript::DEFAULT_RESULT_LABEL;
use crate::tui::Theme;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_TRANSCRIPT: &str = "convo.txt";
pub const DEFAULT_PLAYERS: &str = "players.json";

/// League configuration.
///
/// Every key is optional. Relative paths resolve against the working directory.
///
/// Example YAML:
/// ```yaml
/// scoring_mode: standard
/// clean_before_scoring: true
/// transcript: chats/wordle.txt
/// players: players.json
/// result_label: Wordle
/// theme: auto
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scoring_mode: ScoringMode,

    /// Zero every player before scanning, so the whole transcript is rescored
    #[serde(default)]
    pub clean_before_scoring: bool,

    /// Chat transcript to scan (default: convo.txt)
    #[serde(default)]
    pub transcript: Option<PathBuf>,

    /// Player records JSON (default: players.json)
    #[serde(default)]
    pub players: Option<PathBuf>,

    /// First word of a share line (default: Wordle)
    #[serde(default)]
    pub result_label: Option<String>,

    #[serde(default)]
    pub theme: Theme,
}

impl Config {
    pub fn transcript_path(&self) -> PathBuf {
        self.transcript
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TRANSCRIPT))
    }

    pub fn players_path(&self) -> PathBuf {
        self.players
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PLAYERS))
    }

    pub fn result_label(&self) -> &str {
        self.result_label.as_deref().unwrap_or(DEFAULT_RESULT_LABEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.scoring_mode, ScoringMode::Skins);
        assert!(!config.clean_before_scoring);
        assert_eq!(config.transcript_path(), PathBuf::from("convo.txt"));
        assert_eq!(config.players_path(), PathBuf::from("players.json"));
        assert_eq!(config.result_label(), "Wordle");
        assert_eq!(config.theme, Theme::Auto);
    }

    #[test]
    fn test_empty_config_parse() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
scoring_mode: standard
clean_before_scoring: true
transcript: chats/wordle.txt
players: league/players.json
result_label: Wordle
theme: light
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.scoring_mode, ScoringMode::Standard);
        assert!(config.clean_before_scoring);
        assert_eq!(config.transcript_path(), PathBuf::from("chats/wordle.txt"));
        assert_eq!(config.players_path(), PathBuf::from("league/players.json"));
        assert_eq!(config.theme, Theme::Light);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let yaml = "scoring: skins\n";
        assert!(serde_saphyr::from_str::<Config>(yaml).is_err());
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config {
            scoring_mode: ScoringMode::Standard,
            clean_before_scoring: true,
            transcript: Some(PathBuf::from("convo.txt")),
            players: None,
            result_label: Some("Wordle".to_string()),
            theme: Theme::Dark,
        };
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }
}
