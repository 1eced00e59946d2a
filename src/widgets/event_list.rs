use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{List, ListItem, Paragraph};
use ratatui::Frame;

use crate::app::App;
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

    let items: Vec<ListItem> = app
        .rows
        .iter()
        .map(|row| {
            ListItem::new(format!(" {}", row.sentence())).style(
                Style::default()
                    .fg(theme::TEXT)
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(theme::BG_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}
