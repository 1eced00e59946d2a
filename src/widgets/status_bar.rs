use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, ConnectionStatus};
use crate::theme;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let connection_indicator = match &app.connection_status {
        ConnectionStatus::Connected => {
            Span::styled(" ● Connected", Style::default().fg(theme::GREEN))
        }
        ConnectionStatus::Connecting => {
            Span::styled(" ◌ Connecting...", Style::default().fg(theme::YELLOW))
        }
        ConnectionStatus::Error(msg) => Span::styled(
            format!(" ✗ {}", msg),
            Style::default().fg(theme::RED),
        ),
    };

    let endpoint = Span::styled(
        format!("  {}", app.endpoint),
        Style::default().fg(theme::ACCENT),
    );

    let layout = Span::styled(
        format!("  [{}]", app.layout.label()),
        Style::default().fg(theme::PURPLE),
    );

    let polling = if app.polling_enabled {
        Span::styled(
            format!("  ↻ every {}s", app.polling_interval.as_secs()),
            Style::default().fg(theme::TEXT_DIM),
        )
    } else {
        Span::styled("  ⏸ paused", Style::default().fg(theme::YELLOW))
    };

    let count = if let Some(events) = app.events.data() {
        Span::styled(
            format!("  [{} events]", events.len()),
            Style::default().fg(theme::TEXT_DIM),
        )
    } else {
        Span::raw("")
    };

    let line = Line::from(vec![connection_indicator, endpoint, layout, polling, count]);
    let widget = Paragraph::new(line).style(Style::default().bg(theme::BG_BAR));
    frame.render_widget(widget, area);
}
