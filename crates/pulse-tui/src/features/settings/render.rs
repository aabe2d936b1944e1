use pulse_core::preferences::Preference;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use crate::state::{AppState, Focus};

pub fn render_settings(app: &AppState, frame: &mut Frame, area: Rect) {
    let theme = app.theme();
    let focused = app.focus == Focus::Detail;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border(focused))
        .title(Span::styled(" Settings ", theme.accent_bold()));
    let inner = block.inner(area);
    frame.render_widget(block.style(theme.base()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(Preference::ALL.len() as u16 * 2),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled("Preferences", theme.accent_bold())),
        chunks[0],
    );

    let items: Vec<ListItem> = Preference::ALL
        .iter()
        .map(|pref| {
            let checkbox = if app.preferences.get(*pref) {
                "[x]"
            } else {
                "[ ]"
            };
            ListItem::new(vec![
                Line::from(format!("{checkbox} {}", pref.label())),
                Line::from(Span::styled(
                    format!("    {}", pref.description()),
                    theme.muted(),
                )),
            ])
        })
        .collect();

    let mut list = List::new(items).style(theme.base());
    if focused {
        list = list.highlight_style(theme.selected());
    }
    let mut list_state = ListState::default();
    list_state.select(Some(app.settings.cursor));
    frame.render_stateful_widget(list, chunks[1], &mut list_state);

    let about = vec![
        Line::from(Span::styled("About", theme.accent_bold())),
        Line::from(format!("Pulse {}", env!("CARGO_PKG_VERSION"))),
        Line::from(Span::styled(
            "Sample data only. Nothing you do here is saved.",
            theme.muted(),
        )),
    ];
    frame.render_widget(
        Paragraph::new(about)
            .style(theme.base())
            .wrap(Wrap { trim: true }),
        chunks[3],
    );
}
