pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;
pub use theme::{resolve_theme, Theme, ThemeColors};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use event::{Event, EventHandler};

use app::InputMode;

/// Run the chart viewer until the user quits.
///
/// The terminal is restored even when drawing or reading input fails.
pub fn run_tui(mut app: App) -> anyhow::Result<()> {
    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();
    let mut events = EventHandler::new(250);

    let result = (|| -> anyhow::Result<()> {
        while !app.should_quit {
            terminal.draw(|frame| ui::draw(frame, &app))?;

            match events.next()? {
                Event::Key(key) => handle_key_event(&mut app, key),
                Event::Tick => {}
            }
        }
        Ok(())
    })();

    ratatui::restore();
    result
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    match app.input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.should_quit = true;
            }
            KeyCode::Tab | KeyCode::Char('l') | KeyCode::Right => app.next_view(),
            KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Left => app.previous_view(),
            KeyCode::Char('j') | KeyCode::Down => app.next_player(),
            KeyCode::Char('k') | KeyCode::Up => app.previous_player(),
            KeyCode::Char('?') => app.show_help(),
            _ => {}
        },
        // Any key dismisses help
        InputMode::Help => app.dismiss_help(),
    }
}
