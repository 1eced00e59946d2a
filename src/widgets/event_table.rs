use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::app::App;
use crate::format::DisplayRow;
use crate::theme;

pub fn render(app: &mut App, frame: &mut Frame, area: Rect) {
    if app.events.data().is_none() {
        let loading = Paragraph::new(if app.events.is_loading() {
            " Loading events..."
        } else {
            " No events loaded"
        })
        .style(Style::default().fg(theme::TEXT_MUTED));
        frame.render_widget(loading, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from(" Author"),
        Cell::from("Action"),
        Cell::from("Explanation"),
        Cell::from("When"),
    ])
    .style(
        Style::default()
            .fg(theme::ACCENT)
            .add_modifier(Modifier::BOLD),
    )
    .height(1);

    let rows: Vec<Row> = app
        .rows
        .iter()
        .map(|row| {
            let [author, action, explanation, when] = table_cells(row);
            Row::new(vec![
                Cell::from(format!(" {}", author)),
                Cell::from(action),
                Cell::from(explanation),
                Cell::from(when),
            ])
            .style(Style::default().fg(theme::TEXT))
        })
        .collect();

    let widths = [
        Constraint::Length(18),
        Constraint::Percentage(35),
        Constraint::Percentage(35),
        Constraint::Length(31),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::NONE))
        .row_highlight_style(
            Style::default()
                .bg(theme::BG_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");

    frame.render_stateful_widget(table, area, &mut app.table_state);
}

/// Cell text for one row: author, action summary, explanation, timestamp.
/// The explanation column deliberately mirrors the action column.
pub fn table_cells(row: &DisplayRow) -> [String; 4] {
    [
        row.author.clone(),
        row.summary.clone(),
        row.summary.clone(),
        row.time_text.clone(),
    ]
}
