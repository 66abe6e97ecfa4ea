pub mod config;
pub mod league;
pub mod output;
pub mod pass;
pub mod scoring;
pub mod transcript;
pub mod tui;
