//! # Dashboard Screen
//!
//! Terminal setup, the event loop, key dispatch and drawing.
//!
//! ## Screen Layout
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │ 🐪 Camel Meat Business Dashboard                                     │
//! ├───────────────────────────┬──────────────────────────────────────────┤
//! │ New Sale                  │ Daily Records                            │
//! │ ▶ Date        2025-03-14  │ Date  Item  Quantity  ...  Total Exp.    │
//! │   Item        Camel Meat  │ ...                                      │
//! │   ...                     ├──────────────────────────────────────────┤
//! │                           │ Daily Summary                            │
//! │                           │ Total Revenue: 5,000 KES                 │
//! ├───────────────────────────┴──────────────────────────────────────────┤
//! │ Record added successfully! Profit: 1,650 KES                         │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, TableState},
    Frame, Terminal,
};
use tracing::info;

use super::app::{App, Field, Status};
use crate::commands::view::{metric_lines, table_rows, TABLE_HEADERS};
use crate::error::AppResult;

/// Rows moved by PageUp/PageDown in the records table.
const RECORDS_PAGE: usize = 10;

/// Runs the dashboard until the user quits. The terminal is restored even
/// when the loop fails or panics.
pub fn run_tui(mut app: App) -> AppResult<()> {
    install_panic_hook();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(records = app.ledger.records().len(), "Dashboard closed");
    result
}

/// Leaves raw mode and the alternate screen before the panic message prints.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> AppResult<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if app.should_quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                handle_key_event(app, key);
            }
        }
    }
}

/// Dispatches one key press.
pub(crate) fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('c') if ctrl => app.should_quit = true,
        KeyCode::Char('e') if ctrl => {
            app.export();
        }

        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Enter => app.submit(),

        KeyCode::Up => app.nudge(true),
        KeyCode::Down => app.nudge(false),
        KeyCode::Right => app.cycle(true),
        KeyCode::Left => app.cycle(false),

        KeyCode::PageUp => app.scroll_records_up(RECORDS_PAGE),
        KeyCode::PageDown => app.scroll_records_down(RECORDS_PAGE),
        KeyCode::Home => app.scroll_records_to_top(),
        KeyCode::End => app.scroll_records_to_bottom(),

        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(c) if !ctrl => app.type_char(c),

        _ => {}
    }
}

// =============================================================================
// Drawing
// =============================================================================

/// Top-level UI layout: header, form + records, status.
fn ui(f: &mut Frame<'_>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(0),    // main
            Constraint::Length(3), // status
        ])
        .split(f.area());

    let header = Paragraph::new("🐪 Camel Meat Business Dashboard")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(42), Constraint::Min(0)])
        .split(chunks[1]);

    draw_form(f, main[0], app);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(7)])
        .split(main[1]);

    draw_records(f, right[0], app);
    draw_metrics(f, right[1], app);
    draw_status(f, chunks[2], app);
}

fn draw_form(f: &mut Frame<'_>, area: Rect, app: &App) {
    let lines: Vec<Line> = Field::ALL
        .iter()
        .map(|field| {
            let focused = *field == app.focus;
            let marker = if focused { "▶ " } else { "  " };
            let value = if field.is_choice() {
                format!("◀ {} ▶", app.input.display(*field))
            } else {
                app.input.display(*field)
            };

            let mut style = Style::default();
            if !app.is_enabled(*field) {
                style = style.fg(Color::DarkGray);
            }
            if focused {
                style = style.add_modifier(Modifier::REVERSED);
            }

            Line::from(vec![
                Span::raw(marker),
                Span::raw(format!("{:<21}", field.label())),
                Span::styled(value, style),
            ])
        })
        .collect();

    let block = Block::default().title("New Sale").borders(Borders::ALL);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_records(f: &mut Frame<'_>, area: Rect, app: &App) {
    let rows = table_rows(app.ledger.records());

    // Borders and header take three lines.
    let visible = area.height.saturating_sub(3) as usize;
    let mut state = TableState::default().with_offset(app.records_offset(visible));
    let rows = rows.into_iter().map(Row::new);

    let widths = [
        Constraint::Length(10),
        Constraint::Length(12),
        Constraint::Length(8),
        Constraint::Length(12),
        Constraint::Length(13),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(14),
        Constraint::Length(8),
        Constraint::Length(9),
        Constraint::Length(8),
        Constraint::Length(9),
        Constraint::Length(14),
        Constraint::Length(14),
    ];

    let title = format!("Daily Records ({})", app.ledger.records().len());
    let table = Table::new(rows, widths)
        .header(Row::new(TABLE_HEADERS).style(Style::default().add_modifier(Modifier::BOLD)))
        .block(Block::default().title(title).borders(Borders::ALL));

    f.render_stateful_widget(table, area, &mut state);
}

fn draw_metrics(f: &mut Frame<'_>, area: Rect, app: &App) {
    let lines: Vec<Line> = match metric_lines(app.ledger.records(), &app.config.currency_label) {
        Ok(Some(metrics)) => metrics
            .into_iter()
            .map(|(name, value)| {
                Line::from(vec![
                    Span::raw(format!("{:<16}", name)),
                    Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
                ])
            })
            .collect(),
        Ok(None) => vec![Line::from("No records yet.")],
        Err(e) => vec![Line::styled(e.to_string(), Style::default().fg(Color::Red))],
    };

    let block = Block::default().title("Daily Summary").borders(Borders::ALL);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_status(f: &mut Frame<'_>, area: Rect, app: &App) {
    let help = "Tab/Shift+Tab: field  |  ↑/↓: step  |  ←/→: choose  |  Enter: add record  |  PgUp/PgDn/Home/End: records  |  Ctrl+E: export PDF  |  Esc: quit";
    let (text, style) = match &app.status {
        Some(status @ Status::Success(_)) => (status.text(), Style::default().fg(Color::Green)),
        Some(status @ Status::Error(_)) => (status.text(), Style::default().fg(Color::Red)),
        None => (help, Style::default()),
    };

    let p = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(p, area);
}
