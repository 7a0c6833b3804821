//! TUI rendering with ratatui
//!
//! Board, keyboard, live constraint payload and statistics.

use super::app::{App, MessageStyle};
use crate::core::{KeyState, LetterState, Verdict, WORD_LENGTH};
use crate::output::formatters::keyboard_rows;
use crate::session::GameStatus;
use crate::stats::StatsStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: StatsStore>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Constraints and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn tile_style(state: LetterState) -> Style {
    let base = Style::new().add_modifier(Modifier::BOLD);
    match state {
        LetterState::Correct => base.fg(Color::Black).bg(Color::Green),
        LetterState::Present => base.fg(Color::Black).bg(Color::Yellow),
        LetterState::Absent => base.fg(Color::White).bg(Color::DarkGray),
        LetterState::Empty => base.fg(Color::White),
    }
}

fn key_style(state: KeyState) -> Style {
    match state {
        KeyState::Correct => Style::new().fg(Color::Black).bg(Color::Green),
        KeyState::Present => Style::new().fg(Color::Black).bg(Color::Yellow),
        KeyState::Absent => Style::new().fg(Color::DarkGray),
        KeyState::Unknown => Style::new().fg(Color::White),
    }
}

fn render_header<S: StatsStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let header = Paragraph::new(format!("🎯 WORDLE ({})", app.language))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn verdict_line(verdict: &Verdict) -> Line<'static> {
    let spans: Vec<Span> = verdict
        .cells()
        .map(|(_, letter, state)| {
            Span::styled(
                format!(" {} ", char::from(letter).to_ascii_uppercase()),
                tile_style(state),
            )
        })
        .collect();
    Line::from(spans)
}

fn input_line(input: &str) -> Line<'static> {
    let spans: Vec<Span> = (0..WORD_LENGTH)
        .map(|i| {
            let letter = input
                .chars()
                .nth(i)
                .map_or('_', |c| c.to_ascii_uppercase());
            Span::styled(format!(" {letter} "), tile_style(LetterState::Empty))
        })
        .collect();
    Line::from(spans)
}

fn render_board<S: StatsStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let session = &app.session;
    let mut lines: Vec<Line> = session.history().iter().map(verdict_line).collect();

    if !session.status().is_over() {
        lines.push(input_line(&app.input_buffer));
    }
    while lines.len() < session.max_attempts() {
        lines.push(Line::from(" ·  ·  ·  ·  · "));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(
                " Board {}/{} ",
                session.attempts(),
                session.max_attempts()
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel<S: StatsStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Constraint payload
            Constraint::Percentage(50), // Messages
        ])
        .split(area);

    render_constraints(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_constraints<S: StatsStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let constraints = app.session.constraints();

    let green: String = constraints
        .green
        .iter()
        .map(|(position, letter)| format!("{}={letter} ", position + 1))
        .collect();
    let yellow: String = constraints
        .yellow
        .iter()
        .map(|(position, letters)| {
            format!("{}!={} ", position + 1, letters.iter().collect::<String>())
        })
        .collect();
    let grey: String = constraints.grey.iter().collect();
    let json = constraints.to_json().unwrap_or_default();

    let content = vec![
        Line::from(vec![
            Span::styled("green  ", Style::default().fg(Color::Green)),
            Span::raw(green),
        ]),
        Line::from(vec![
            Span::styled("yellow ", Style::default().fg(Color::Yellow)),
            Span::raw(yellow),
        ]),
        Line::from(vec![
            Span::styled("grey   ", Style::default().fg(Color::DarkGray)),
            Span::raw(grey),
        ]),
        Line::from(""),
        Line::from(Span::styled(json, Style::default().fg(Color::Cyan))),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Constraints ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_messages<S: StatsStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_keyboard<S: StatsStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let knowledge = app.session.knowledge();
    let lines: Vec<Line> = keyboard_rows(app.language)
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .map(|b| {
                    Span::styled(
                        format!(" {} ", char::from(b).to_ascii_uppercase()),
                        key_style(knowledge.state(b)),
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_status<S: StatsStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let status_text = match app.session.status() {
        GameStatus::InProgress => format!("Guesses left: {}", app.session.remaining()),
        GameStatus::Won => "Solved!".to_string(),
        GameStatus::Lost => "Game over".to_string(),
    };
    let status = Paragraph::new(status_text).alignment(Alignment::Center);
    f.render_widget(status, chunks[0]);

    let summary = &app.summary;
    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        summary.played,
        summary.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let streak_text = format!(
        "Streak: {} (best {})",
        summary.current_streak, summary.best_streak
    );
    let streak = Paragraph::new(streak_text).alignment(Alignment::Center);
    f.render_widget(streak, chunks[2]);

    let help = Paragraph::new("Esc: Quit | ^U: Undo | ^N: New")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Language;
    use crate::core::Word;
    use crate::session::GameSession;
    use crate::solver::LocalSolver;
    use crate::stats::MemoryStore;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_board_keyboard_and_payload() {
        let words = vec![Word::new("robot").unwrap(), Word::new("roomy").unwrap()];
        let mut app = App::new(LocalSolver::new(words), MemoryStore::new(), Language::En, 6);
        app.session = GameSession::new(6).with_secret(Word::new("robot").unwrap());
        app.input_buffer = "roomy".to_string();
        app.submit_guess();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("Board 1/6"));
        assert!(text.contains("Constraints"));
        assert!(text.contains("1=r 2=o"));
        assert!(text.contains("Keyboard"));
        assert!(text.contains("Guesses left: 5"));
    }
}
