// UI rendering logic
//
// All rendering for the terminal form. In ratatui the layout and widgets
// are rebuilt in a render function called on every frame; the caret is
// placed with the terminal's own cursor so it blinks natively.

use super::app::App;
use crate::logging::{LogEntry, LogLevel};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &App) {
    // Split the terminal into five vertical sections:
    // - Title bar (3 lines fixed)
    // - Amount field (3 lines fixed)
    // - Words preview (fills remaining space)
    // - System logs (6 lines fixed)
    // - Status bar (3 lines fixed)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(3), // Amount field
            Constraint::Min(4),    // Words preview
            Constraint::Length(6), // System logs
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_title(f, chunks[0]);
    render_amount_field(f, chunks[1], app);
    render_preview(f, chunks[2], app);
    render_logs_panel(f, chunks[3], app);
    render_status(f, chunks[4], app);
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled("recibo", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" - valor do recibo"),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, area);
}

/// Render the amount input with the symbol prefix and place the caret
fn render_amount_field(f: &mut Frame, area: Rect, app: &App) {
    let text = app.editor.text();
    let prefix = format!("{} ", app.symbol);

    let content = if text.is_empty() {
        Line::from(vec![
            Span::styled(prefix.clone(), Style::default().fg(Color::DarkGray)),
            Span::styled(
                app.placeholder.clone(),
                Style::default().fg(Color::DarkGray),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled(prefix.clone(), Style::default().fg(Color::DarkGray)),
            Span::raw(text.to_string()),
        ])
    };

    let field = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Valor (Enter confirma)"),
    );
    f.render_widget(field, area);

    // Caret: border + prefix + display width of the text left of the caret
    let before_caret: String = text.chars().take(app.editor.cursor()).collect();
    let x = area.x + 1 + prefix.width() as u16 + before_caret.width() as u16;
    let y = area.y + 1;
    if x < area.x + area.width.saturating_sub(1) {
        f.set_cursor_position((x, y));
    }
}

/// Render the read-only "valor por extenso" preview
fn render_preview(f: &mut Frame, area: Rect, app: &App) {
    let clause = app.editor.verbalized();
    let amount = app.editor.amount();

    let lines = vec![
        Line::from(Span::styled(
            clause,
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("valor: ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("{}.{:02}", amount.units(), amount.cents_part())),
        ]),
    ];

    let preview = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Valor por extenso"),
        );
    f.render_widget(preview, area);
}

/// Render the tail of the captured log buffer
fn render_logs_panel(f: &mut Frame, area: Rect, app: &App) {
    let visible = area.height.saturating_sub(2) as usize;
    let entries = app.log_buffer.tail(visible);

    let lines: Vec<Line> = entries.iter().map(log_line).collect();
    let logs = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Logs"));
    f.render_widget(logs, area);
}

fn log_line(entry: &LogEntry) -> Line<'static> {
    let level_style = match entry.level {
        LogLevel::Error => Style::default().fg(Color::Red),
        LogLevel::Warn => Style::default().fg(Color::Yellow),
        LogLevel::Info => Style::default().fg(Color::Green),
        LogLevel::Debug => Style::default().fg(Color::Blue),
        LogLevel::Trace => Style::default().fg(Color::DarkGray),
    };

    Line::from(vec![
        Span::raw(entry.timestamp.format("%H:%M:%S ").to_string()),
        Span::styled(format!("{:5} ", entry.level.as_str()), level_style),
        Span::raw(entry.message.clone()),
    ])
}

/// Render the status bar with keys and the last committed amount
fn render_status(f: &mut Frame, area: Rect, app: &App) {
    let committed = match app.committed {
        Some(amount) => format!(
            " | confirmado: {} {}",
            app.symbol,
            crate::money::formatter::from_number(amount)
        ),
        None => String::new(),
    };

    let status = Paragraph::new(format!(
        " digite o valor | Enter confirma | Esc sai{committed}"
    ))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}
