//! TUI rendering with ratatui
//!
//! Layout: root word header, input field, found words, messages, status bar,
//! and a popup for rejection alerts.

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::{letter_badge, plural};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<D>(f: &mut Frame, app: &App<D>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Input area
            Constraint::Min(6),    // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_input(f, app, chunks[1]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Found words
            Constraint::Percentage(40), // Messages
        ])
        .split(chunks[2]);

    render_words(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);

    render_status(f, app, chunks[3]);

    if app.input_mode == InputMode::Alert {
        render_alert(f, app);
    }
}

fn render_header<D>(f: &mut Frame, app: &App<D>, area: Rect) {
    let root = app.session.root_word().text().to_uppercase();
    let header = Paragraph::new(Line::from(vec![
        Span::raw("WORD SCRAMBLE  "),
        Span::styled(
            root,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
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

fn render_input<D>(f: &mut Frame, app: &App<D>, area: Rect) {
    let color = match app.input_mode {
        InputMode::Typing => Color::Yellow,
        InputMode::Alert => Color::DarkGray,
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(" Enter your word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_words<D>(f: &mut Frame, app: &App<D>, area: Rect) {
    let items: Vec<ListItem> = app
        .session
        .accepted_words()
        .iter()
        .map(|word| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    letter_badge(word.chars().count()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(" "),
                Span::raw(word.clone()),
            ]))
        })
        .collect();

    let title = format!(" Found ({}) ", app.session.len());
    let words = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(words, area);
}

fn render_messages<D>(f: &mut Frame, app: &App<D>, area: Rect) {
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

fn render_status<D>(f: &mut Frame, app: &App<D>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let round_text = format!(
        "{} | {}",
        plural(app.session.len(), "word"),
        plural(app.session.letter_count(), "letter")
    );
    f.render_widget(
        Paragraph::new(round_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Rounds: {} | Total found: {}",
        app.stats.rounds_played, app.stats.words_found
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = match app.input_mode {
        InputMode::Typing => "Enter: Submit | Ctrl-N: New Word | Esc: Quit",
        InputMode::Alert => "Enter: OK",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_alert<D>(f: &mut Frame, app: &App<D>) {
    let Some(alert) = &app.alert else {
        return;
    };

    let area = centered_rect(50, 7, f.area());
    let content = vec![
        Line::from(alert.message.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            "[ OK ]",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let popup = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", alert.title))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Red)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// Rectangle of `percent_x` width and `height` rows centered in `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
