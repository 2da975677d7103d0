//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::{GuessRow, LetterCell, Status, Word};
use crate::engine::EngineState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLE HINTS - Interactive Mode")
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

const fn status_color(status: Status) -> Color {
    match status {
        Status::Green => Color::Green,
        Status::Yellow => Color::Yellow,
        Status::Gray => Color::DarkGray,
    }
}

fn tile(cell: &LetterCell, selected: bool) -> Span<'static> {
    let letter = cell.letter().map_or('·', |c| c.to_ascii_uppercase());
    let mut style = Style::default()
        .fg(Color::Black)
        .bg(status_color(cell.status()))
        .add_modifier(Modifier::BOLD);
    if cell.letter().is_none() {
        style = Style::default().fg(Color::Gray);
    }
    if selected {
        style = style.add_modifier(Modifier::REVERSED | Modifier::UNDERLINED);
    }
    Span::styled(format!(" {letter} "), style)
}

fn row_line(row: &GuessRow) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for cell in row.cells() {
        spans.push(tile(&cell, false));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = app.session.history().rows().iter().map(row_line).collect();

    if app.session.state() == EngineState::Collecting {
        let mut spans = vec![Span::raw("▶ ")];
        for cell in app.draft.cells() {
            spans.push(tile(cell, cell.position() == app.cursor));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("Known: "),
        Span::styled(
            app.session.partial_solution().to_string().to_uppercase(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    let title = format!(" Board ({}) ", app.session.state());
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Candidate gauge
            Constraint::Percentage(35), // Best guesses
            Constraint::Percentage(35), // Probe words
            Constraint::Min(4),         // Messages
        ])
        .split(area);

    render_candidate_gauge(f, app, chunks[0]);

    let limit = app.visible_suggestions();
    let best = app.session.best_suggestions();
    render_word_list(f, " Best guesses ", &best, limit, Color::Green, chunks[1]);
    let probes = app.session.elimination_suggestions();
    render_word_list(f, " Probe words ", &probes, limit, Color::Yellow, chunks[2]);

    render_messages(f, app, chunks[3]);
}

fn render_candidate_gauge(f: &mut Frame, app: &App, area: Rect) {
    let total = app.session.dictionary().len().max(1);
    let remaining = app.session.candidates().len();
    let eliminated_pct = ((total - remaining.min(total)) * 100 / total) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Eliminated ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(eliminated_pct)
        .label(format!("{remaining} of {total} words remain"));

    f.render_widget(gauge, area);
}

fn render_word_list(
    f: &mut Frame,
    title: &str,
    words: &[&Word],
    limit: usize,
    color: Color,
    area: Rect,
) {
    let mut items: Vec<ListItem> = words
        .iter()
        .take(limit)
        .enumerate()
        .map(|(i, w)| {
            ListItem::new(format!("{:>2}. {}", i + 1, w.text().to_uppercase()))
                .style(Style::default().fg(color))
        })
        .collect();

    if words.len() > limit {
        items.push(
            ListItem::new(format!("    +{} more (Tab)", words.len() - limit))
                .style(Style::default().fg(Color::DarkGray)),
        );
    }

    let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(list, area);
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
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let stats_text = format!(
        "Solved: {} | Row {}",
        app.stats.games_solved,
        app.session.history().len() + 1
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help_text = if app.session.state().is_terminal() {
        "Esc: Quit | Ctrl-N: New Game | Ctrl-Z: Undo"
    } else {
        "a-z: Type | Space/↑: Colour | ←/→: Move | Enter: Submit | Tab: More | Ctrl-Z: Undo | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Dictionary;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn draws_board_and_suggestions() {
        let dict = Dictionary::from_strs(&["crane", "slate", "plate", "grate"]);
        let app = App::new(&dict, 3);

        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Best guesses"));
        assert!(text.contains("4 of 4 words remain"));
    }
}
