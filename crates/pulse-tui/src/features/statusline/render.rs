use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::state::AppState;

/// Spinner frames for status line animation.
pub const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Renders the status line: notice, loading state or key hints on the left,
/// pagination on the right for feed sections.
pub fn render_status_line(app: &AppState, frame: &mut Frame, area: Rect) {
    let theme = app.theme();
    let spinner = SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()];
    let active = app.active_feed().map(|kind| app.feeds.get(kind));

    let left: Vec<Span> = if let Some(notice) = &app.notice {
        vec![
            Span::styled("● ", Style::default().fg(theme.accent)),
            Span::styled(notice.text.clone(), Style::default().fg(theme.fg)),
        ]
    } else if let Some(view) = active
        && view.feed.is_loading()
    {
        vec![
            Span::styled(spinner, Style::default().fg(theme.loading)),
            Span::raw(" "),
            Span::styled(
                format!("Loading page {}...", view.feed.page()),
                Style::default().fg(theme.loading),
            ),
        ]
    } else {
        vec![
            Span::styled("1-4", theme.muted()),
            Span::raw(" sections  "),
            Span::styled("Tab", theme.muted()),
            Span::raw(" next  "),
            Span::styled("r", theme.muted()),
            Span::raw(" load more  "),
            Span::styled("q", theme.muted()),
            Span::raw(" quit"),
        ]
    };

    let right = active.map(|view| {
        let feed = &view.feed;
        format!("page {} · {} posts", feed.page(), feed.len())
    });

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(24)])
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(left))
            .style(theme.base())
            .alignment(Alignment::Left),
        chunks[0],
    );
    if let Some(right) = right {
        frame.render_widget(
            Paragraph::new(Span::styled(right, theme.muted()))
                .style(theme.base())
                .alignment(Alignment::Right),
            chunks[1],
        );
    }
}
