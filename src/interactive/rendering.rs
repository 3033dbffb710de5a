//! TUI rendering with ratatui
//!
//! Board of colored letter cells plus message log and status bar.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Feedback;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Rows shown when attempts are unlimited and no guess has been made
const MIN_BOARD_ROWS: usize = 1;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Board and side panel
            Constraint::Length(3), // Input hint
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
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

fn feedback_style(feedback: Feedback) -> Style {
    let bg = match feedback {
        Feedback::Exact => Color::Green,
        Feedback::Present => Color::Yellow,
        Feedback::Absent => Color::Gray,
    };
    Style::new().fg(Color::Black).bg(bg).add_modifier(Modifier::BOLD)
}

fn cell(letter: Option<char>, style: Style) -> Span<'static> {
    let text = letter.map_or_else(
        || "   ".to_string(),
        |c| format!(" {} ", c.to_uppercase()),
    );
    Span::styled(text, style)
}

/// One line per board row: submitted guesses, the row being typed, then
/// empty rows up to the attempt limit
#[must_use]
pub fn board_lines(app: &App) -> Vec<Line<'static>> {
    let width = app.session.word_len();
    let empty_style = Style::new().bg(Color::DarkGray);
    let typing_style = Style::new()
        .fg(Color::White)
        .bg(Color::DarkGray)
        .add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();

    for entry in app.session.record() {
        let mut spans = Vec::with_capacity(width * 2);
        for (letter, &feedback) in entry.word.chars().zip(entry.evaluation.symbols()) {
            spans.push(cell(Some(letter), feedback_style(feedback)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    if app.input_mode == InputMode::Typing {
        let typed: Vec<char> = app.buffer.as_str().chars().collect();
        let mut spans = Vec::with_capacity(width * 2);
        for i in 0..width {
            spans.push(cell(typed.get(i).copied(), typing_style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    let total_rows = app
        .session
        .rules()
        .max_attempts
        .unwrap_or(MIN_BOARD_ROWS)
        .max(lines.len());

    while lines.len() < total_rows {
        let mut spans = Vec::with_capacity(width * 2);
        for _ in 0..width {
            spans.push(cell(None, empty_style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    lines
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();
    for row in board_lines(app) {
        lines.push(row);
        lines.push(Line::default());
    }

    // Keep the newest rows visible when the board outgrows the panel
    let visible = usize::from(area.height.saturating_sub(2));
    let scroll = lines.len().saturating_sub(visible);
    let lines = lines.split_off(scroll.min(lines.len()));

    let title = match app.session.remaining_attempts() {
        Some(left) => format!(" Board ({left} left) "),
        None => format!(" Board ({} guesses) ", app.session.attempts()),
    };

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::GameOver => (" Game over | 'n' new game, 'q' quit ", Color::Green),
        InputMode::Typing => (
            " Type a word | Enter submit, Tab answer, Ctrl-N new game, Esc quit ",
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(app.buffer.as_str().to_uppercase())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let stats_text = format!(
        "Games: {} | Won: {} | Win Rate: {:.0}% | Attempts: {}",
        app.stats.total_games,
        app.stats.games_won,
        app.stats.win_rate(),
        app.session.attempts()
    );
    let stats = Paragraph::new(stats_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(stats, area);
}
