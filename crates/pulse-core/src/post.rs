//! Post records shown in the feed.
//!
//! Posts are immutable once appended to a feed. Author handles, avatar keys and
//! body text are opaque strings and are never validated.

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Opaque unique post identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostId(Uuid);

impl PostId {
    /// Generates a fresh identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Author metadata attached to a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub handle: String,
    /// Icon key (not a resolvable URL).
    pub avatar: String,
}

impl Author {
    pub fn new(
        name: impl Into<String>,
        handle: impl Into<String>,
        avatar: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            handle: handle.into(),
            avatar: avatar.into(),
        }
    }
}

/// A single feed entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub author: Author,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub likes: u32,
    pub comments: u32,
}

/// Fixed content of the built-in sample post.
pub const SAMPLE_AUTHOR_NAME: &str = "Alex Rivera";
pub const SAMPLE_AUTHOR_HANDLE: &str = "@alexrivera";
pub const SAMPLE_AVATAR: &str = "person.circle.fill";
pub const SAMPLE_BODY: &str = "Just loaded a fresh post. Infinite scroll is working!";
pub const SAMPLE_LIKES: u32 = 42;
pub const SAMPLE_COMMENTS: u32 = 5;

impl Post {
    /// Creates a post with zero engagement.
    pub fn new(author: Author, body: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: PostId::new(),
            author,
            body: body.into(),
            created_at,
            likes: 0,
            comments: 0,
        }
    }

    /// Sets the engagement counters. Only meaningful before the post is appended.
    #[must_use]
    pub fn with_engagement(mut self, likes: u32, comments: u32) -> Self {
        self.likes = likes;
        self.comments = comments;
        self
    }

    /// The hardcoded record produced by the sample feed source.
    pub fn sample(created_at: DateTime<Utc>) -> Self {
        Self::new(
            Author::new(SAMPLE_AUTHOR_NAME, SAMPLE_AUTHOR_HANDLE, SAMPLE_AVATAR),
            SAMPLE_BODY,
            created_at,
        )
        .with_engagement(SAMPLE_LIKES, SAMPLE_COMMENTS)
    }

    /// Short relative age label ("now", "5m", "3h", "2d").
    ///
    /// Timestamps in the future (clock skew) render as "now".
    pub fn age_label(&self, now: DateTime<Utc>) -> String {
        let secs = (now - self.created_at).num_seconds();
        if secs < 60 {
            "now".to_string()
        } else if secs < 3600 {
            format!("{}m", secs / 60)
        } else if secs < 86_400 {
            format!("{}h", secs / 3600)
        } else {
            format!("{}d", secs / 86_400)
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_sample_post_content() {
        let post = Post::sample(at(0));
        assert_eq!(post.author.name, SAMPLE_AUTHOR_NAME);
        assert_eq!(post.author.handle, "@alexrivera");
        assert_eq!(post.likes, 42);
        assert_eq!(post.comments, 5);
        assert_eq!(post.created_at, at(0));
    }

    #[test]
    fn test_sample_posts_get_distinct_ids() {
        let a = Post::sample(at(0));
        let b = Post::sample(at(0));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_age_label_buckets() {
        let post = Post::sample(at(0));
        assert_eq!(post.age_label(at(30)), "now");
        assert_eq!(post.age_label(at(0) + Duration::minutes(5)), "5m");
        assert_eq!(post.age_label(at(0) + Duration::hours(3)), "3h");
        assert_eq!(post.age_label(at(0) + Duration::days(2)), "2d");
    }

    #[test]
    fn test_age_label_future_timestamp_is_now() {
        let post = Post::sample(at(100));
        assert_eq!(post.age_label(at(0)), "now");
    }
}
