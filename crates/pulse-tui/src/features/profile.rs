//! Profile placeholder screen.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::common::text::{avatar_glyph, compact_count};
use crate::state::{AppState, Focus};

pub fn render_profile(app: &AppState, frame: &mut Frame, area: Rect) {
    let theme = app.theme();
    let profile = &app.profile;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border(app.focus == Focus::Detail))
        .title(Span::styled(" Profile ", theme.accent_bold()));

    let stat = |value: u32, label: &'static str| {
        [
            Span::styled(
                compact_count(value),
                Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {label}   "), theme.muted()),
        ]
    };

    let mut stats = Vec::new();
    stats.extend(stat(profile.posts, "Posts"));
    stats.extend(stat(profile.followers, "Followers"));
    stats.extend(stat(profile.following, "Following"));

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            avatar_glyph(profile.avatar),
            Style::default().fg(theme.accent),
        )),
        Line::default(),
        Line::from(Span::styled(
            profile.display_name,
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(profile.handle, theme.muted())),
        Line::default(),
        Line::from(profile.bio),
        Line::default(),
        Line::from(stats),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .style(theme.base())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}
