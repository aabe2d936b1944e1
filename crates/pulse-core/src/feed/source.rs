//! Feed sources and the cancellable page fetch.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use futures_util::future::BoxFuture;
use tokio_util::sync::CancellationToken;

use crate::post::Post;

/// Reasons a page load can fail.
///
/// The sample source only ever produces `Timeout` (when its delay exceeds the
/// configured load timeout); the other variants exist for real sources.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
    #[error("malformed payload: {0}")]
    Malformed(String),
}

pub type PageResult = Result<Vec<Post>, LoadError>;

/// Something that can produce a page of posts.
pub trait FeedSource: Send + Sync {
    fn fetch_page(&self, page: u32) -> BoxFuture<'static, PageResult>;
}

/// Produces one hardcoded post per page after a fixed delay.
#[derive(Debug, Clone)]
pub struct SampleSource {
    delay: Duration,
}

impl SampleSource {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl FeedSource for SampleSource {
    fn fetch_page(&self, page: u32) -> BoxFuture<'static, PageResult> {
        let delay = self.delay;
        Box::pin(async move {
            tokio::time::sleep(delay).await;
            tracing::debug!(page, "sample page ready");
            Ok(vec![Post::sample(Utc::now())])
        })
    }
}

/// Result of a cancellable page fetch.
#[derive(Debug)]
pub enum PageOutcome {
    Loaded(Vec<Post>),
    Failed(LoadError),
    /// The owning view went away before the page arrived.
    Cancelled,
}

impl PageOutcome {
    /// Converts to a page result; `None` for a cancelled load.
    pub fn into_result(self) -> Option<PageResult> {
        match self {
            PageOutcome::Loaded(posts) => Some(Ok(posts)),
            PageOutcome::Failed(err) => Some(Err(err)),
            PageOutcome::Cancelled => None,
        }
    }
}

/// Fetches `page` from `source`, bounded by `timeout` and abandoned when
/// `cancel` fires. Cancellation wins over a result that is ready at the same time.
pub async fn fetch_page_cancellable(
    source: Arc<dyn FeedSource>,
    page: u32,
    timeout: Duration,
    cancel: CancellationToken,
) -> PageOutcome {
    tokio::select! {
        biased;
        () = cancel.cancelled() => PageOutcome::Cancelled,
        res = tokio::time::timeout(timeout, source.fetch_page(page)) => match res {
            Ok(Ok(posts)) => PageOutcome::Loaded(posts),
            Ok(Err(err)) => PageOutcome::Failed(err),
            Err(_elapsed) => PageOutcome::Failed(LoadError::Timeout(timeout)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenSource;

    impl FeedSource for BrokenSource {
        fn fetch_page(&self, _page: u32) -> BoxFuture<'static, PageResult> {
            Box::pin(async { Err(LoadError::Malformed("missing posts".to_string())) })
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_when_delay_exceeds_limit() {
        let source: Arc<dyn FeedSource> = Arc::new(SampleSource::new(Duration::from_secs(10)));
        let outcome = fetch_page_cancellable(
            source,
            1,
            Duration::from_secs(2),
            CancellationToken::new(),
        )
        .await;
        assert!(matches!(
            outcome,
            PageOutcome::Failed(LoadError::Timeout(d)) if d == Duration::from_secs(2)
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_before_start() {
        let source: Arc<dyn FeedSource> = Arc::new(SampleSource::new(Duration::from_secs(1)));
        let cancel = CancellationToken::new();
        cancel.cancel();
        let outcome = fetch_page_cancellable(source, 1, Duration::from_secs(5), cancel).await;
        assert!(matches!(outcome, PageOutcome::Cancelled));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_mid_flight() {
        let source: Arc<dyn FeedSource> = Arc::new(SampleSource::new(Duration::from_secs(1)));
        let cancel = CancellationToken::new();
        let task = tokio::spawn(fetch_page_cancellable(
            source,
            1,
            Duration::from_secs(5),
            cancel.clone(),
        ));

        tokio::time::sleep(Duration::from_millis(500)).await;
        cancel.cancel();

        let outcome = task.await.unwrap();
        assert!(matches!(outcome, PageOutcome::Cancelled));
    }

    #[tokio::test]
    async fn test_source_error_is_passed_through() {
        let source: Arc<dyn FeedSource> = Arc::new(BrokenSource);
        let outcome =
            fetch_page_cancellable(source, 3, Duration::from_secs(1), CancellationToken::new())
                .await;
        assert_eq!(
            outcome.into_result(),
            Some(Err(LoadError::Malformed("missing posts".to_string())))
        );
    }

    #[test]
    fn test_load_error_display() {
        assert_eq!(
            LoadError::Timeout(Duration::from_millis(1500)).to_string(),
            "timed out after 1500ms"
        );
        assert_eq!(
            LoadError::Transport("reset".to_string()).to_string(),
            "transport error: reset"
        );
    }
}
