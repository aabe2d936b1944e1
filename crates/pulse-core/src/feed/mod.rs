//! Feed contents and pagination bookkeeping.
//!
//! A [`Feed`] is a small state machine:
//!
//! ```text
//! Idle --request_more--> Loading --complete/cancel--> Idle
//! ```
//!
//! `request_more` while loading is a guarded no-op, so at most one page load
//! is in flight per feed. Every request carries a generation; results for any
//! generation but the current one are dropped. The actual fetch lives in
//! [`source`] and is driven by whoever owns the feed (the TUI runtime spawns it
//! as a cancellable task).

mod source;

use std::collections::HashSet;

pub use source::{
    FeedSource, LoadError, PageOutcome, PageResult, SampleSource, fetch_page_cancellable,
};

use crate::post::{Post, PostId};

/// Which feed a section shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedKind {
    ForYou,
    Following,
}

impl FeedKind {
    pub const ALL: [FeedKind; 2] = [FeedKind::ForYou, FeedKind::Following];

    pub fn label(self) -> &'static str {
        match self {
            FeedKind::ForYou => "for-you",
            FeedKind::Following => "following",
        }
    }
}

/// Page counter and loading flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Starts at 1, incremented once per successful load.
    pub page: u32,
    pub loading: bool,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            loading: false,
        }
    }
}

/// A page load handed out by [`Feed::request_more`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    /// Bumped on every request and cancel, so a cancelled load never matches
    /// a later request for the same page.
    pub generation: u64,
}

/// What [`Feed::complete`] did with a load result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Posts were appended (count may be zero if the page was empty).
    Appended(usize),
    /// The load failed; the error is kept in `last_error`.
    Failed,
    /// The result did not match the in-flight request and was dropped.
    Stale,
}

/// Ordered, append-only post sequence plus its pagination state.
#[derive(Debug, Default)]
pub struct Feed {
    posts: Vec<Post>,
    seen: HashSet<PostId>,
    pagination: Pagination,
    generation: u64,
    last_error: Option<LoadError>,
}

impl Feed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn page(&self) -> u32 {
        self.pagination.page
    }

    pub fn is_loading(&self) -> bool {
        self.pagination.loading
    }

    pub fn last_error(&self) -> Option<&LoadError> {
        self.last_error.as_ref()
    }

    /// Starts a page load unless one is already in flight.
    ///
    /// Returns `None` when loading (the request is dropped).
    pub fn request_more(&mut self) -> Option<PageRequest> {
        if self.pagination.loading {
            return None;
        }
        self.pagination.loading = true;
        self.generation = self.generation.wrapping_add(1);
        Some(PageRequest {
            page: self.pagination.page,
            generation: self.generation,
        })
    }

    /// Applies the result of `request`, returning the feed to idle.
    pub fn complete(&mut self, request: PageRequest, result: PageResult) -> Completion {
        if !self.pagination.loading
            || request.generation != self.generation
            || request.page != self.pagination.page
        {
            return Completion::Stale;
        }
        self.pagination.loading = false;

        match result {
            Ok(posts) => {
                let mut appended = 0;
                for post in posts {
                    if self.seen.insert(post.id) {
                        self.posts.push(post);
                        appended += 1;
                    }
                }
                self.pagination.page = self.pagination.page.saturating_add(1);
                self.last_error = None;
                Completion::Appended(appended)
            }
            Err(err) => {
                self.last_error = Some(err);
                Completion::Failed
            }
        }
    }

    /// Abandons the in-flight load, if any. Returns whether one was in flight.
    pub fn cancel(&mut self) -> bool {
        self.generation = self.generation.wrapping_add(1);
        std::mem::replace(&mut self.pagination.loading, false)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use chrono::Utc;
    use tokio_util::sync::CancellationToken;

    use super::*;
    use crate::post::{SAMPLE_COMMENTS, SAMPLE_LIKES};

    fn sample_page() -> PageResult {
        Ok(vec![Post::sample(Utc::now())])
    }

    #[test]
    fn test_initial_state() {
        let feed = Feed::new();
        assert!(feed.is_empty());
        assert_eq!(
            feed.pagination(),
            Pagination {
                page: 1,
                loading: false
            }
        );
        assert!(feed.last_error().is_none());
    }

    #[test]
    fn test_request_more_sets_loading() {
        let mut feed = Feed::new();
        let request = feed.request_more();
        assert_eq!(request.map(|r| r.page), Some(1));
        assert!(feed.is_loading());
        assert!(feed.is_empty());
    }

    #[test]
    fn test_request_more_while_loading_is_dropped() {
        let mut feed = Feed::new();
        let request = feed.request_more().unwrap();
        for _ in 0..10 {
            assert!(feed.request_more().is_none());
        }

        assert_eq!(feed.complete(request, sample_page()), Completion::Appended(1));
        assert_eq!(feed.len(), 1);
        assert_eq!(feed.page(), 2);
        assert!(!feed.is_loading());
    }

    #[test]
    fn test_page_tracks_completed_loads() {
        let mut feed = Feed::new();
        for completed in 1..=5u32 {
            let request = feed.request_more().unwrap();
            feed.complete(request, sample_page());
            assert_eq!(feed.page(), 1 + completed);
            assert_eq!(feed.len(), completed as usize);
        }
    }

    #[test]
    fn test_failed_load_keeps_page_and_records_error() {
        let mut feed = Feed::new();
        let request = feed.request_more().unwrap();
        let completion = feed.complete(
            request,
            Err(LoadError::Transport("connection reset".to_string())),
        );

        assert_eq!(completion, Completion::Failed);
        assert_eq!(feed.page(), 1);
        assert!(!feed.is_loading());
        assert!(matches!(feed.last_error(), Some(LoadError::Transport(_))));

        // A later success clears the error.
        let request = feed.request_more().unwrap();
        feed.complete(request, sample_page());
        assert!(feed.last_error().is_none());
    }

    #[test]
    fn test_complete_without_request_is_stale() {
        let mut feed = Feed::new();
        let completion = feed.complete(
            PageRequest {
                page: 1,
                generation: 0,
            },
            sample_page(),
        );
        assert_eq!(completion, Completion::Stale);
        assert!(feed.is_empty());
        assert_eq!(feed.page(), 1);
    }

    #[test]
    fn test_complete_with_wrong_page_is_stale() {
        let mut feed = Feed::new();
        let request = feed.request_more().unwrap();
        let completion = feed.complete(PageRequest { page: 7, ..request }, sample_page());
        assert_eq!(completion, Completion::Stale);
        assert!(feed.is_loading());
    }

    #[test]
    fn test_cancel_clears_loading() {
        let mut feed = Feed::new();
        assert!(!feed.cancel());
        let request = feed.request_more().unwrap();
        assert!(feed.cancel());
        assert!(!feed.is_loading());
        assert_eq!(feed.complete(request, sample_page()), Completion::Stale);
        assert!(feed.is_empty());
    }

    #[test]
    fn test_cancelled_result_ignored_after_rerequest() {
        let mut feed = Feed::new();
        let old = feed.request_more().unwrap();
        feed.cancel();
        let new = feed.request_more().unwrap();
        assert_eq!(old.page, new.page);

        assert_eq!(feed.complete(old, sample_page()), Completion::Stale);
        assert!(feed.is_empty());
        assert_eq!(feed.page(), 1);
        assert!(feed.is_loading());
        assert!(feed.request_more().is_none());

        assert_eq!(feed.complete(new, sample_page()), Completion::Appended(1));
        assert_eq!(feed.page(), 2);
        assert!(!feed.is_loading());
    }

    #[test]
    fn test_duplicate_ids_are_not_appended() {
        let mut feed = Feed::new();
        let post = Post::sample(Utc::now());
        let request = feed.request_more().unwrap();
        let completion = feed.complete(request, Ok(vec![post.clone(), post]));
        assert_eq!(completion, Completion::Appended(1));
        assert_eq!(feed.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sample_load_lands_after_delay() {
        let source: Arc<dyn FeedSource> = Arc::new(SampleSource::new(Duration::from_secs(1)));
        let mut feed = Feed::new();

        let request = feed.request_more().unwrap();
        assert!(feed.is_loading());
        assert!(feed.is_empty());
        // Second request inside the loading window.
        assert!(feed.request_more().is_none());

        let started = tokio::time::Instant::now();
        let outcome = fetch_page_cancellable(
            source,
            request.page,
            Duration::from_secs(5),
            CancellationToken::new(),
        )
        .await;
        assert!(started.elapsed() >= Duration::from_secs(1));
        assert!(started.elapsed() < Duration::from_secs(5));

        let PageOutcome::Loaded(posts) = outcome else {
            panic!("expected loaded outcome, got {outcome:?}");
        };
        feed.complete(request, Ok(posts));

        assert_eq!(feed.len(), 1);
        assert_eq!(feed.posts()[0].likes, SAMPLE_LIKES);
        assert_eq!(feed.posts()[0].comments, SAMPLE_COMMENTS);
        assert_eq!(feed.page(), 2);
        assert!(!feed.is_loading());
    }
}
