use std::ops::Range;

use chrono::{DateTime, Utc};
use pulse_core::feed::FeedKind;
use pulse_core::post::Post;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::FeedView;
use crate::common::text::{avatar_glyph, compact_count, truncate_with_ellipsis, wrap_text};
use crate::common::{Scrollbar, Theme};
use crate::state::{AppState, Focus};
use crate::statusline::SPINNER_FRAMES;

/// Columns used by the selection gutter in front of every post line.
const GUTTER_WIDTH: usize = 2;
/// Width reserved for the scrollbar on the right side.
const SCROLLBAR_WIDTH: u16 = 1;

/// Pre-rendered feed content.
pub struct FeedLines {
    pub lines: Vec<Line<'static>>,
    /// Line range of the post under the cursor, if any.
    pub selected: Option<Range<usize>>,
}

/// Renders a feed section into the detail pane.
pub fn render_feed(app: &AppState, kind: FeedKind, frame: &mut Frame, area: Rect) {
    let theme = app.theme();
    let view = app.feeds.get(kind);
    let focused = app.focus == Focus::Detail;
    let title = app.selected().map_or("Feed", |section| section.title());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border(focused))
        .title(Span::styled(format!(" {title} "), theme.accent_bold()));
    let inner = block.inner(area);
    frame.render_widget(block.style(theme.base()), area);

    let content_area = Rect {
        width: inner.width.saturating_sub(SCROLLBAR_WIDTH),
        ..inner
    };
    let spinner = SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()];
    let rendered = feed_lines(
        view,
        &theme,
        content_area.width as usize,
        Utc::now(),
        spinner,
        focused,
    );

    let height = content_area.height as usize;
    let total = rendered.lines.len();
    let offset = scroll_offset(total, height, rendered.selected.as_ref());
    let visible: Vec<Line<'static>> =
        rendered.lines.into_iter().skip(offset).take(height).collect();

    frame.render_widget(Paragraph::new(visible).style(theme.base()), content_area);
    frame.render_widget(
        Scrollbar::new(total, height, offset).style(theme.muted()),
        inner,
    );
}

/// Builds every line of the feed, including loading/error/empty rows.
pub fn feed_lines(
    view: &FeedView,
    theme: &Theme,
    width: usize,
    now: DateTime<Utc>,
    spinner: &str,
    highlight_cursor: bool,
) -> FeedLines {
    let text_width = width.saturating_sub(GUTTER_WIDTH).max(1);
    let mut lines = Vec::new();
    let mut selected = None;

    for (idx, post) in view.feed.posts().iter().enumerate() {
        let start = lines.len();
        let is_selected = highlight_cursor && idx == view.cursor;
        let gutter = if is_selected {
            Span::styled("▌ ", Style::default().fg(theme.accent))
        } else {
            Span::raw("  ")
        };

        for line in post_lines(post, theme, text_width, now) {
            let mut spans = vec![gutter.clone()];
            spans.extend(line.spans);
            lines.push(Line::from(spans));
        }
        if idx == view.cursor {
            selected = Some(start..lines.len());
        }
        lines.push(Line::default());
    }

    if view.feed.is_loading() {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(spinner.to_string(), Style::default().fg(theme.loading)),
            Span::styled(
                format!(" Loading page {}...", view.feed.page()),
                Style::default().fg(theme.loading),
            ),
        ]));
    } else if let Some(err) = view.feed.last_error() {
        let text = truncate_with_ellipsis(&format!("Couldn't load more: {err}"), text_width);
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(text, Style::default().fg(theme.error)),
        ]));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled("Press r to retry", theme.muted()),
        ]));
    } else if view.feed.is_empty() {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled("No posts yet. Press r to load some.", theme.muted()),
        ]));
    }

    FeedLines { lines, selected }
}

fn post_lines(post: &Post, theme: &Theme, width: usize, now: DateTime<Utc>) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let age = post.age_label(now);
    // Glyph, separators and age take the rest of the header row.
    let header_budget = width.saturating_sub(age.width() + 5);
    let name = truncate_with_ellipsis(&post.author.name, header_budget);
    let handle_budget = header_budget.saturating_sub(name.width() + 1);
    let handle = truncate_with_ellipsis(&post.author.handle, handle_budget);
    lines.push(Line::from(vec![
        Span::styled(
            format!("{} ", avatar_glyph(&post.author.avatar)),
            Style::default().fg(theme.accent),
        ),
        Span::styled(
            name,
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(handle, theme.muted()),
        Span::styled(format!(" · {age}"), theme.muted()),
    ]));

    for body_line in wrap_text(&post.body, width) {
        lines.push(Line::from(Span::styled(body_line, Style::default().fg(theme.fg))));
    }

    lines.push(Line::from(vec![
        Span::styled("♥ ", Style::default().fg(theme.like)),
        Span::styled(compact_count(post.likes), theme.muted()),
        Span::raw("   "),
        Span::styled("↩ ", Style::default().fg(theme.accent)),
        Span::styled(compact_count(post.comments), theme.muted()),
    ]));

    lines
}

/// First visible line so that the selected post is fully on screen.
///
/// Without a selection the view stays pinned to the top. When the selected
/// post is taller than the viewport its first line wins.
pub fn scroll_offset(total: usize, height: usize, selected: Option<&Range<usize>>) -> usize {
    let max_offset = total.saturating_sub(height);
    let Some(selected) = selected else {
        return 0;
    };
    selected
        .end
        .saturating_sub(height)
        .min(selected.start)
        .min(max_offset)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pulse_core::feed::LoadError;
    use pulse_core::post::{Author, Post};

    use super::*;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn view_with_posts(count: usize) -> FeedView {
        let mut view = FeedView::default();
        for _ in 0..count {
            let request = view.feed.request_more().unwrap();
            view.feed.complete(request, Ok(vec![Post::sample(Utc::now())]));
        }
        view
    }

    #[test]
    fn test_empty_feed_shows_hint() {
        let view = FeedView::default();
        let out = feed_lines(&view, &Theme::DARK, 60, Utc::now(), "◐", false);
        assert_eq!(out.lines.len(), 1);
        assert!(line_text(&out.lines[0]).contains("No posts yet"));
        assert!(out.selected.is_none());
    }

    #[test]
    fn test_post_lines_include_counts() {
        let view = view_with_posts(1);
        let out = feed_lines(&view, &Theme::DARK, 80, Utc::now(), "◐", true);
        let text: Vec<String> = out.lines.iter().map(line_text).collect();
        assert!(text[0].contains("Alex Rivera"));
        assert!(text[0].contains("@alexrivera"));
        assert!(text.iter().any(|l| l.contains("♥ 42") && l.contains("↩ 5")));
        assert_eq!(out.selected, Some(0..3));
    }

    #[test]
    fn test_header_budget_uses_display_width() {
        let now = Utc::now();
        let post = Post::new(
            Author::new("Zoë Ångström", "@zoe", "person.circle"),
            "hej",
            now,
        );
        // "○ " + name(12) + " " + handle(4) + " · " + "now"
        let lines = post_lines(&post, &Theme::DARK, 25, now);
        let header = line_text(&lines[0]);
        assert!(header.contains("Zoë Ångström @zoe"), "{header}");
        assert_eq!(header.width(), 25);
    }

    #[test]
    fn test_loading_row_shown_while_loading() {
        let mut view = view_with_posts(1);
        view.feed.request_more();
        let out = feed_lines(&view, &Theme::DARK, 80, Utc::now(), "◐", false);
        let last = line_text(out.lines.last().unwrap());
        assert!(last.contains("Loading page 2"));
    }

    #[test]
    fn test_error_row_shown_after_failure() {
        let mut view = FeedView::default();
        let request = view.feed.request_more().unwrap();
        view.feed.complete(request, Err(LoadError::Transport("offline".to_string())));
        let out = feed_lines(&view, &Theme::DARK, 80, Utc::now(), "◐", false);
        let text: Vec<String> = out.lines.iter().map(line_text).collect();
        assert!(text[0].contains("transport error: offline"));
        assert!(text[1].contains("retry"));
    }

    #[test]
    fn test_scroll_offset_keeps_selection_visible() {
        assert_eq!(scroll_offset(100, 20, None), 0);
        assert_eq!(scroll_offset(100, 20, Some(&(0..4))), 0);
        assert_eq!(scroll_offset(100, 20, Some(&(40..44))), 24);
        // Taller than the viewport: show its top.
        assert_eq!(scroll_offset(100, 5, Some(&(10..30))), 10);
        assert_eq!(scroll_offset(10, 20, Some(&(5..9))), 0);
    }
}
