use ratatui::prelude::*;
use ratatui::symbols;
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, Chart, Clear, Dataset, GraphType, LegendPosition,
    Paragraph, Tabs,
};
use crate::league::PlayerRecord;
use crate::output::format_percentage;
use crate::tui::app::{App, InputMode, View};
use crate::tui::theme::ThemeColors;

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 10 || area.width < 30 {
        let msg = Paragraph::new("Terminal too small")
            .alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    // Layout: Title(1) + Tabs(1) + Charts(fill) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1),  // Title bar
        Constraint::Length(1),  // Tab bar
        Constraint::Fill(1),    // Chart area
        Constraint::Length(1),  // Status bar
    ])
    .split(area);

    render_title(frame, chunks[0], app);
    render_tabs(frame, chunks[1], app);

    if app.players.is_empty() {
        let empty_msg = Paragraph::new("No active players yet")
            .alignment(Alignment::Center)
            .style(Style::default().fg(app.colors.muted));
        frame.render_widget(empty_msg, chunks[2]);
    } else {
        match app.current_view {
            View::Players => render_selected_player(frame, chunks[2], app),
            View::Combined => render_combined(frame, chunks[2], app),
            View::Timeline => render_timeline(frame, chunks[2], app),
        }
    }

    render_status_bar(frame, chunks[3], app);

    if app.input_mode == InputMode::Help {
        render_help_popup(frame, &app.colors);
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let title = "Wordle League";
    let info = format!("{} scoring, bounty {}", app.mode, app.bounty);
    let padding_len = (area.width as usize).saturating_sub(title.len() + info.len());

    let line = Line::from(vec![
        Span::styled(title, Style::default().fg(app.colors.title_color).bold()),
        Span::raw(" ".repeat(padding_len)),
        Span::styled(info, Style::default().fg(app.colors.muted)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<&str> = View::ALL.iter().map(|view| view.title()).collect();

    let tabs = Tabs::new(titles)
        .select(app.tab_index())
        .style(app.colors.tab_inactive_style)
        .highlight_style(app.colors.tab_active_style.reversed())
        .divider(" | ");

    frame.render_widget(tabs, area);
}

/// Horizontal guess-distribution chart for one player.
///
/// `max_count` is shared by every chart on screen so bar lengths compare.
fn distribution_chart<'a>(
    name: &str,
    record: &'a PlayerRecord,
    max_count: u32,
    area: Rect,
    colors: &ThemeColors,
) -> BarChart<'a> {
    let dist = &record.guess_distribution;
    let total = dist.total();

    let bars: Vec<Bar> = dist
        .iter()
        .map(|(guesses, count)| {
            let text = if count > 0 {
                format!("{} ({})", count, format_percentage(count, total))
            } else {
                String::new()
            };
            Bar::default()
                .value(u64::from(count))
                .label(Line::from(guesses.to_string()))
                .text_value(text)
                .style(Style::default().fg(colors.bar))
                .value_style(colors.bar_value)
        })
        .collect();

    // Six bars separated by one-row gaps, inside a bordered block
    let inner_height = area.height.saturating_sub(2);
    let bar_width = (inner_height.saturating_sub(5) / 6).max(1);

    let title = format!(" {} (Score: {}, {} W's) ", name, record.score, record.wins);

    BarChart::default()
        .block(Block::bordered().title(title).title_style(colors.title_style))
        .direction(Direction::Horizontal)
        .bar_width(bar_width)
        .bar_gap(1)
        .label_style(colors.bar_label)
        .max(u64::from(max_count.max(1)))
        .data(BarGroup::default().bars(&bars))
}

fn render_selected_player(frame: &mut Frame, area: Rect, app: &App) {
    if let Some((name, record)) = app.selected_player() {
        let chart = distribution_chart(name, record, app.max_count(), area, &app.colors);
        frame.render_widget(chart, area);
    }
}

/// All players at once: top row gets floor(n/2) charts, bottom row the rest
fn render_combined(frame: &mut Frame, area: Rect, app: &App) {
    let max_count = app.max_count();
    let count = app.players.len();

    if count == 1 {
        let (name, record) = &app.players[0];
        let chart = distribution_chart(name, record, max_count, area, &app.colors);
        frame.render_widget(chart, area);
        return;
    }

    let top_count = count / 2;
    let rows = Layout::vertical([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).split(area);
    let (top, bottom) = app.players.split_at(top_count);

    for (row_area, players) in [(rows[0], top), (rows[1], bottom)] {
        let cells = Layout::horizontal(
            players
                .iter()
                .map(|_| Constraint::Ratio(1, players.len() as u32)),
        )
        .split(row_area);

        for ((name, record), cell) in players.iter().zip(cells.iter()) {
            let chart = distribution_chart(name, record, max_count, *cell, &app.colors);
            frame.render_widget(chart, *cell);
        }
    }
}

/// Pick at most `max` evenly spaced indexes out of `len`, always keeping the last
fn axis_ticks(len: usize, max: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    if len <= max {
        return (0..len).collect();
    }
    let step = (len - 1).div_ceil(max - 1);
    let mut ticks: Vec<usize> = (0..len).step_by(step).collect();
    if ticks.last() != Some(&(len - 1)) {
        ticks.push(len - 1);
    }
    ticks
}

/// Cumulative points per player across the pass, one line each.
/// Rounds a player sat out are marked with a dot on their line.
fn render_timeline(frame: &mut Frame, area: Rect, app: &App) {
    let progression = &app.progression;

    if progression.is_empty() {
        let msg = Paragraph::new("No scored rounds in this transcript")
            .alignment(Alignment::Center)
            .style(Style::default().fg(app.colors.muted));
        frame.render_widget(msg, area);
        return;
    }

    // Point data must outlive the datasets that borrow it
    let mut lines: Vec<(&str, Color, Vec<(f64, f64)>, Vec<(f64, f64)>)> = Vec::new();
    for (name, _) in &app.players {
        let Some(series) = progression.series.get(name) else {
            continue;
        };
        let points: Vec<(f64, f64)> = series
            .cumulative
            .iter()
            .enumerate()
            .map(|(x, y)| (x as f64, *y as f64))
            .collect();
        let missed: Vec<(f64, f64)> = points
            .iter()
            .zip(&series.submitted)
            .filter(|(_, submitted)| !**submitted)
            .map(|(point, _)| *point)
            .collect();
        lines.push((name.as_str(), app.player_color(name), points, missed));
    }

    let mut datasets = Vec::new();
    for (name, color, points, missed) in &lines {
        datasets.push(
            Dataset::default()
                .name(name.to_string())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(*color))
                .data(points),
        );
        if !missed.is_empty() {
            datasets.push(
                Dataset::default()
                    .marker(symbols::Marker::Dot)
                    .graph_type(GraphType::Scatter)
                    .style(Style::default().fg(*color))
                    .data(missed),
            );
        }
    }

    let round_count = progression.rounds.len();
    let x_max = (round_count.saturating_sub(1)).max(1) as f64;
    let y_max = progression.max_score().max(1) as f64;

    let x_labels: Vec<String> = axis_ticks(round_count, 5)
        .into_iter()
        .map(|i| progression.rounds[i].to_string())
        .collect();
    let y_labels: Vec<String> = vec![
        "0".to_string(),
        format!("{}", (y_max / 2.0).round()),
        format!("{}", y_max),
    ];

    let axis_style = Style::default().fg(app.colors.axis);
    let chart = Chart::new(datasets)
        .block(
            Block::bordered()
                .title(" Score Progression Over Time ")
                .title_style(app.colors.title_style),
        )
        .x_axis(
            Axis::default()
                .title("Wordle Number")
                .style(axis_style)
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Points")
                .style(axis_style)
                .bounds([0.0, y_max])
                .labels(y_labels),
        )
        .legend_position(Some(LegendPosition::TopLeft))
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));

    frame.render_widget(chart, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let colors = &app.colors;
    let count = format!("{} players", app.players.len());

    let position = match (app.current_view, app.selected_player()) {
        (View::Players, Some((name, _))) => {
            format!("{} ({}/{})", name, app.selected + 1, app.players.len())
        }
        _ => String::new(),
    };

    let hints = [
        ("Tab", ":view "),
        ("j/k", ":player "),
        ("?", ":help "),
        ("q", ":quit"),
    ];
    let mut spans = vec![
        Span::styled(count, Style::default().fg(colors.muted)),
        Span::raw(" "),
        Span::styled(position, Style::default().fg(colors.muted)),
        Span::raw("  "),
    ];
    for (key, label) in hints {
        spans.push(Span::styled(key, Style::default().fg(colors.status_key_color)));
        spans.push(Span::raw(label));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(colors.status_bar_bg)),
        area,
    );
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    // Clamp dimensions to area bounds
    let width = width.min(area.width);
    let height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Render the help overlay popup
fn render_help_popup(frame: &mut Frame, colors: &ThemeColors) {
    let popup_area = centered_rect_fixed(44, 10, frame.area());

    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(" Keyboard Shortcuts ")
        .title_style(colors.popup_title)
        .border_style(Style::default().fg(colors.popup_border))
        .style(Style::default().bg(colors.popup_bg));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let key_style = Style::default().fg(colors.status_key_color).bold();
    let help_lines = vec![
        Line::from(vec![Span::styled("Tab / l       ", key_style), Span::raw("Next view")]),
        Line::from(vec![Span::styled("Shift-Tab / h ", key_style), Span::raw("Previous view")]),
        Line::from(vec![Span::styled("j / Down      ", key_style), Span::raw("Next player")]),
        Line::from(vec![Span::styled("k / Up        ", key_style), Span::raw("Previous player")]),
        Line::from(vec![Span::styled("?             ", key_style), Span::raw("Toggle this help")]),
        Line::from(vec![Span::styled("q / Esc       ", key_style), Span::raw("Quit")]),
        Line::from(""),
        Line::from(Span::styled("Press any key to close", Style::default().fg(colors.muted))),
    ];

    frame.render_widget(Paragraph::new(help_lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::{Attempts, DailyResults, Players};
    use crate::scoring::{score_progression, score_rounds, ScoringMode};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn sample_app() -> App {
        let mut players: Players = ["Ana", "Ben", "Cal"]
            .iter()
            .map(|n| (n.to_string(), PlayerRecord::default()))
            .collect();

        let mut results = DailyResults::new();
        for (round, player, attempts) in [
            ("1,569", "Ana", 3),
            ("1,569", "Ben", 4),
            ("1,570", "Ben", 2),
            ("1,570", "Cal", 5),
            ("1,571", "Ana", 4),
            ("1,571", "Cal", 4),
        ] {
            let attempts = Attempts::new(attempts).unwrap();
            results.record(round.into(), player, attempts);
            players.get_mut(player).unwrap().guess_distribution.record(attempts);
        }

        let outcome = score_rounds(&results, &mut players, ScoringMode::Skins);
        let names: Vec<String> = players.keys().cloned().collect();
        let progression = score_progression(&results, &outcome, &names);
        App::new(&players, progression, ScoringMode::Skins, outcome.bounty, ThemeColors::dark())
    }

    fn render(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_axis_ticks() {
        assert_eq!(axis_ticks(0, 5), Vec::<usize>::new());
        assert_eq!(axis_ticks(3, 5), vec![0, 1, 2]);
        assert_eq!(axis_ticks(9, 5), vec![0, 2, 4, 6, 8]);
        assert_eq!(axis_ticks(10, 5), vec![0, 3, 6, 9]);
    }

    #[test]
    fn test_centered_rect_clamps() {
        let area = Rect::new(0, 0, 20, 5);
        let rect = centered_rect_fixed(44, 10, area);
        assert_eq!(rect, Rect::new(0, 0, 20, 5));

        let rect = centered_rect_fixed(10, 2, area);
        assert_eq!(rect, Rect::new(5, 1, 10, 2));
    }

    #[test]
    fn test_draw_player_view() {
        let app = sample_app();
        let screen = render(&app, 100, 30);
        assert!(screen.contains("Wordle League"));
        assert!(screen.contains("skins scoring, bounty 2"));
        // Ana and Ben are tied on score; name order breaks the tie
        assert!(screen.contains("Ana (Score: 1, 1 W's)"));
    }

    #[test]
    fn test_draw_combined_view() {
        let mut app = sample_app();
        app.next_view();
        let screen = render(&app, 120, 40);
        assert!(screen.contains("Ana (Score"));
        assert!(screen.contains("Ben (Score"));
        assert!(screen.contains("Cal (Score"));
    }

    #[test]
    fn test_draw_timeline_view() {
        let mut app = sample_app();
        app.previous_view();
        let screen = render(&app, 120, 30);
        assert!(screen.contains("Score Progression Over Time"));
        assert!(screen.contains("1,569"));
        assert!(screen.contains("1,571"));
    }

    #[test]
    fn test_draw_help_popup() {
        let mut app = sample_app();
        app.show_help();
        let screen = render(&app, 100, 30);
        assert!(screen.contains("Keyboard Shortcuts"));
    }

    #[test]
    fn test_draw_tiny_terminal() {
        let app = sample_app();
        let screen = render(&app, 20, 5);
        assert!(screen.contains("Terminal too small"));
    }

    #[test]
    fn test_draw_no_active_players() {
        let app = App::new(
            &Players::new(),
            Default::default(),
            ScoringMode::Standard,
            1,
            ThemeColors::dark(),
        );
        let screen = render(&app, 80, 20);
        assert!(screen.contains("No active players yet"));
    }
}
