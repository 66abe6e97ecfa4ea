use crate::league::{active_standings, PlayerRecord, Players};
use crate::scoring::{ScoreProgression, ScoringMode};
use crate::tui::theme::ThemeColors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Players,
    Combined,
    Timeline,
}

impl View {
    pub const ALL: [View; 3] = [View::Players, View::Combined, View::Timeline];

    pub fn title(self) -> &'static str {
        match self {
            View::Players => "Players",
            View::Combined => "Combined",
            View::Timeline => "Score Over Time",
        }
    }

    fn index(self) -> usize {
        match self {
            View::Players => 0,
            View::Combined => 1,
            View::Timeline => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Help,
}

pub struct App {
    /// Active players, highest score first
    pub players: Vec<(String, PlayerRecord)>,
    pub progression: ScoreProgression,
    pub mode: ScoringMode,
    pub bounty: u32,
    pub current_view: View,
    pub selected: usize,
    pub input_mode: InputMode,
    pub should_quit: bool,
    pub colors: ThemeColors,
}

impl App {
    pub fn new(
        players: &Players,
        progression: ScoreProgression,
        mode: ScoringMode,
        bounty: u32,
        colors: ThemeColors,
    ) -> Self {
        let players = active_standings(players)
            .into_iter()
            .map(|(name, record)| (name.to_string(), record.clone()))
            .collect();

        Self {
            players,
            progression,
            mode,
            bounty,
            current_view: View::Players,
            selected: 0,
            input_mode: InputMode::Normal,
            should_quit: false,
            colors,
        }
    }

    pub fn selected_player(&self) -> Option<&(String, PlayerRecord)> {
        self.players.get(self.selected)
    }

    /// Largest single bucket across all players, so every chart shares one scale
    pub fn max_count(&self) -> u32 {
        self.players
            .iter()
            .map(|(_, record)| record.guess_distribution.max_count())
            .max()
            .unwrap_or(0)
    }

    /// Color for a player, stable across views
    pub fn player_color(&self, name: &str) -> ratatui::style::Color {
        let index = self
            .players
            .iter()
            .position(|(n, _)| n == name)
            .unwrap_or(0);
        self.colors.player_color(index)
    }

    pub fn next_player(&mut self) {
        if self.players.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.players.len();
    }

    pub fn previous_player(&mut self) {
        if self.players.is_empty() {
            return;
        }
        self.selected = if self.selected == 0 {
            self.players.len() - 1
        } else {
            self.selected - 1
        };
    }

    pub fn next_view(&mut self) {
        let next = (self.current_view.index() + 1) % View::ALL.len();
        self.current_view = View::ALL[next];
    }

    pub fn previous_view(&mut self) {
        let len = View::ALL.len();
        let previous = (self.current_view.index() + len - 1) % len;
        self.current_view = View::ALL[previous];
    }

    pub fn tab_index(&self) -> usize {
        self.current_view.index()
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn dismiss_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }
}
