//! TUI rendering with ratatui
//!
//! Number picker, closure games and conference panels.

use super::app::{App, GRID_WIDTH, InputMode, MessageStyle};
use crate::core::NumberSet;
use crate::core::constants::{GAME_SIZE, MAX_NUMBER, MIN_PRIZE_HITS, POOL_SIZE};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Highest prize level
const MAX_HITS: u8 = GAME_SIZE as u8;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Main content
            Constraint::Length(7), // Messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Picker
            Constraint::Percentage(60), // Games and conference
        ])
        .split(chunks[1]);

    render_picker_panel(f, app, main_chunks[0]);
    render_results_panel(f, app, main_chunks[1]);

    render_messages(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let title = "🎱 LOTOFÁCIL CLOSURE - 21 numbers, 8 games, 11 points guaranteed";
    let header = Paragraph::new(title)
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

fn render_picker_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Grid
            Constraint::Min(3),    // Selection gauge
        ])
        .split(area);

    render_grid(f, app, chunks[0]);
    render_selection_gauge(f, app, chunks[1]);
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let drawing = app.input_mode == InputMode::DrawSelection;
    let selected = if drawing { app.draw } else { app.pool };

    let lines: Vec<Line> = (0..MAX_NUMBER / GRID_WIDTH)
        .map(|row| {
            let cells: Vec<Span> = (1..=GRID_WIDTH)
                .map(|col| {
                    let number = row * GRID_WIDTH + col;
                    cell(app, number, selected, drawing)
                })
                .collect();
            Line::from(cells)
        })
        .collect();

    let (title, color) = if drawing {
        (" Draw ", Color::Green)
    } else {
        (" Pool ", Color::Yellow)
    };

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(color)),
    );
    f.render_widget(grid, area);
}

fn cell(app: &App, number: u8, selected: NumberSet, drawing: bool) -> Span<'static> {
    let mut style = if selected.contains(number) {
        let bg = if drawing { Color::Green } else { Color::Yellow };
        Style::default().fg(Color::Black).bg(bg).add_modifier(Modifier::BOLD)
    } else if drawing && !app.pool.contains(number) {
        // Outside the pool: a draw here voids the guarantee
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Gray)
    };
    if number == app.cursor_number() && app.input_mode != InputMode::Searching {
        style = style.add_modifier(Modifier::REVERSED | Modifier::UNDERLINED);
    }
    Span::styled(format!(" {number:02} "), style)
}

fn render_selection_gauge(f: &mut Frame, app: &App, area: Rect) {
    let (title, chosen, target) = if app.input_mode == InputMode::DrawSelection {
        (" Drawn Numbers ", app.draw.len(), GAME_SIZE)
    } else {
        (" Pool Numbers ", app.pool.len(), POOL_SIZE)
    };
    let percent = (chosen * 100 / target).min(100) as u16;
    let color = if chosen == target {
        Color::Green
    } else {
        Color::Cyan
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{chosen} / {target}"));

    f.render_widget(gauge, area);
}

fn render_results_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10), // Games
            Constraint::Min(8),     // Conference
        ])
        .split(area);

    render_games(f, app, chunks[0]);
    render_conference(f, app, chunks[1]);
}

fn render_games(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Closure Games ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    if let Some(elapsed) = app.search_elapsed() {
        let text = vec![
            Line::from(Span::styled(
                "Searching for an 11-point closure...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("Elapsed: {:.1}s", elapsed.as_secs_f64())),
            Line::from("Press ESC to cancel"),
        ];
        f.render_widget(Paragraph::new(text).block(block), area);
        return;
    }

    if app.games().is_empty() {
        f.render_widget(Paragraph::new("No games yet").block(block), area);
        return;
    }

    let draw = app.draw;
    let items: Vec<ListItem> = app
        .games()
        .iter()
        .map(|game| {
            let mut spans = vec![Span::styled(
                format!("#{} ", game.id()),
                Style::default().fg(Color::Cyan),
            )];
            for number in game.mask().iter() {
                let style = if draw.contains(number) {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Green)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                spans.push(Span::styled(format!("{number:02}"), style));
                spans.push(Span::raw(" "));
            }
            if !draw.is_empty() {
                let hits = game.hits(draw);
                let style = if hits >= MIN_PRIZE_HITS {
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                spans.push(Span::styled(format!("{hits:2} pts"), style));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

fn render_conference(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Conference ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(conference) = &app.conference else {
        let mut lines = Vec::new();
        if let Some(result) = &app.result {
            lines.push(Line::from(format!(
                "Minimum points: {} | attempts: {} | {}ms",
                result.min_points,
                result.attempts,
                result.time_ms()
            )));
        }
        if let Some(seed) = app.last_seed {
            lines.push(Line::from(format!("Seed: {seed}")));
        }
        if !app.games().is_empty() {
            lines.push(Line::from(format!(
                "Enter a draw of 15 numbers to score the games ({}/15)",
                app.draw.len()
            )));
        }
        f.render_widget(Paragraph::new(lines).block(block), area);
        return;
    };

    let mut lines: Vec<Line> = (MIN_PRIZE_HITS..=MAX_HITS)
        .rev()
        .map(|level| {
            let count = conference.games_with(level);
            let style = if count > 0 {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(Span::styled(
                format!("{level} points: {count} game(s)"),
                style,
            ))
        })
        .collect();

    lines.push(Line::from(format!("Total cost:   {}", conference.cost)));
    lines.push(Line::from(vec![
        Span::raw("Total prizes: "),
        Span::styled(
            conference.prize.to_string(),
            Style::default().fg(Color::Green),
        ),
    ]));
    let balance_style = if conference.balance.is_negative() {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    };
    lines.push(Line::from(vec![
        Span::raw("Balance:      "),
        Span::styled(conference.balance.to_string(), balance_style),
    ]));

    f.render_widget(Paragraph::new(lines).block(block), area);
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
        .split(area);

    let mode_text = match app.input_mode {
        InputMode::PoolSelection => "Mode: Pool",
        InputMode::DrawSelection => "Mode: Draw",
        InputMode::Searching => "Mode: Searching",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let help_text = match app.input_mode {
        InputMode::PoolSelection => {
            "q: Quit | space: Toggle | r: Random | c: Clear | g: Generate | x: Export | TAB: Draw"
        }
        InputMode::DrawSelection => {
            "q: Quit | space: Toggle | r: Random draw | c: Clear | x: Export | TAB: Pool"
        }
        InputMode::Searching => "ESC: Cancel search | q: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
