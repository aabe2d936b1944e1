//! Cosmetic slide played when the active section changes.
//!
//! The transition carries no state of its own beyond direction and start
//! time; the detail pane is drawn into a rect that grows back to full height.

use std::time::{Duration, Instant};

use pulse_core::navigation::SlideDirection;
use ratatui::layout::Rect;

pub const SLIDE_DURATION: Duration = Duration::from_millis(250);

pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideTransition {
    pub direction: SlideDirection,
    started: Instant,
}

impl SlideTransition {
    pub fn start(direction: SlideDirection) -> Self {
        Self::start_at(direction, Instant::now())
    }

    pub fn start_at(direction: SlideDirection, started: Instant) -> Self {
        Self { direction, started }
    }

    pub fn started(&self) -> Instant {
        self.started
    }

    /// Eased progress in `0.0..=1.0`.
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        ease_out_cubic(elapsed.as_secs_f32() / SLIDE_DURATION.as_secs_f32())
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= SLIDE_DURATION
    }

    /// Rows of `height` still hidden at `now`.
    pub fn hidden_rows(&self, height: u16, now: Instant) -> u16 {
        let remaining = 1.0 - self.progress(now);
        (f32::from(height) * remaining).round() as u16
    }

    /// Shrinks `area` from the side the pane is entering from.
    pub fn apply(&self, area: Rect, now: Instant) -> Rect {
        let hidden = self.hidden_rows(area.height, now).min(area.height);
        match self.direction {
            SlideDirection::Down => Rect {
                y: area.y + hidden,
                height: area.height - hidden,
                ..area
            },
            SlideDirection::Up => Rect {
                height: area.height - hidden,
                ..area
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        assert!(ease_out_cubic(0.0).abs() < f32::EPSILON);
        assert!((ease_out_cubic(1.0) - 1.0).abs() < f32::EPSILON);
        assert!(ease_out_cubic(0.5) > 0.5);
        assert!((ease_out_cubic(3.0) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_apply_down_enters_from_below() {
        let start = Instant::now();
        let slide = SlideTransition::start_at(SlideDirection::Down, start);
        let area = Rect::new(0, 0, 40, 20);

        let first = slide.apply(area, start);
        assert_eq!(first.y, 20);
        assert_eq!(first.height, 0);

        let done = slide.apply(area, start + SLIDE_DURATION);
        assert_eq!(done, area);
        assert!(slide.is_finished(start + SLIDE_DURATION));
    }

    #[test]
    fn test_apply_up_keeps_top_edge() {
        let start = Instant::now();
        let slide = SlideTransition::start_at(SlideDirection::Up, start);
        let area = Rect::new(5, 2, 40, 20);

        let mid = slide.apply(area, start + SLIDE_DURATION / 2);
        assert_eq!(mid.y, 2);
        assert!(mid.height > 0 && mid.height < 20);
    }
}
