use pulse_core::feed::{Feed, FeedKind};

/// A feed plus the post the cursor is on.
#[derive(Debug, Default)]
pub struct FeedView {
    pub feed: Feed,
    pub cursor: usize,
}

impl FeedView {
    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves down one post and reports whether the cursor is now at the end.
    pub fn move_down(&mut self) -> bool {
        if self.cursor + 1 < self.feed.len() {
            self.cursor += 1;
        }
        self.is_at_end()
    }

    pub fn jump_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.cursor = self.feed.len().saturating_sub(1);
    }

    /// True on the last post, or when there are no posts at all.
    pub fn is_at_end(&self) -> bool {
        self.cursor + 1 >= self.feed.len()
    }
}

#[derive(Debug, Default)]
pub struct Feeds {
    pub for_you: FeedView,
    pub following: FeedView,
}

impl Feeds {
    pub fn get(&self, kind: FeedKind) -> &FeedView {
        match kind {
            FeedKind::ForYou => &self.for_you,
            FeedKind::Following => &self.following,
        }
    }

    pub fn get_mut(&mut self, kind: FeedKind) -> &mut FeedView {
        match kind {
            FeedKind::ForYou => &mut self.for_you,
            FeedKind::Following => &mut self.following,
        }
    }
}
