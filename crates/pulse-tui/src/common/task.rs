//! Async task bookkeeping.
//!
//! Every page load is tracked by a [`TaskId`] plus the [`CancellationToken`]
//! that aborts it. The reducer owns this state; the runtime only spawns work
//! and cancels tokens it is handed.

use pulse_core::feed::FeedKind;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[derive(Debug)]
pub struct TaskCompleted<E> {
    pub id: TaskId,
    pub result: E,
}

/// Task lifecycle state (stored in AppState, mutated only by reducer).
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
    pub cancel: Option<CancellationToken>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn start(&mut self, id: TaskId, cancel: CancellationToken) {
        self.active = Some(id);
        self.cancel = Some(cancel);
    }

    /// Clears the slot if `id` is the active task. Returns false for stale ids.
    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.clear();
        }
        ok
    }

    /// Clears the slot and hands back the token so the caller can cancel it.
    pub fn take_cancel(&mut self) -> Option<CancellationToken> {
        self.active = None;
        self.cancel.take()
    }

    pub fn clear(&mut self) {
        self.active = None;
        self.cancel = None;
    }
}

/// One load slot per feed.
#[derive(Debug, Default, Clone)]
pub struct Tasks {
    pub for_you: TaskState,
    pub following: TaskState,
}

impl Tasks {
    pub fn state(&self, feed: FeedKind) -> &TaskState {
        match feed {
            FeedKind::ForYou => &self.for_you,
            FeedKind::Following => &self.following,
        }
    }

    pub fn state_mut(&mut self, feed: FeedKind) -> &mut TaskState {
        match feed {
            FeedKind::ForYou => &mut self.for_you,
            FeedKind::Following => &mut self.following,
        }
    }

    pub fn is_any_running(&self) -> bool {
        self.for_you.is_running() || self.following.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_seq_is_monotonic() {
        let mut seq = TaskSeq::default();
        assert_eq!(seq.next_id(), TaskId(0));
        assert_eq!(seq.next_id(), TaskId(1));
    }

    #[test]
    fn test_finish_ignores_stale_id() {
        let mut state = TaskState::default();
        state.start(TaskId(3), CancellationToken::new());
        assert!(!state.finish_if_active(TaskId(2)));
        assert!(state.is_running());
        assert!(state.finish_if_active(TaskId(3)));
        assert!(!state.is_running());
    }

    #[test]
    fn test_take_cancel_clears_slot() {
        let mut tasks = Tasks::default();
        let token = CancellationToken::new();
        tasks.state_mut(FeedKind::Following).start(TaskId(1), token.clone());
        assert!(tasks.is_any_running());

        let taken = tasks.state_mut(FeedKind::Following).take_cancel();
        assert!(taken.is_some());
        assert!(!tasks.is_any_running());
        assert!(!tasks.state_mut(FeedKind::Following).finish_if_active(TaskId(1)));
    }
}
