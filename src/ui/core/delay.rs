//! Artificial UX delays
//!
//! Components never sleep. They emit a [`DelayRequest`] and wait for the
//! matching [`Action::DelayElapsed`](super::Action::DelayElapsed); the parent
//! decides whether that happens after a real timer or immediately.

use crate::task::TaskId;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

static NEXT_TOKEN: AtomicU64 = AtomicU64::new(1);

/// Ties a pending delay to the component state that requested it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DelayToken(u64);

impl DelayToken {
    /// Allocate a token never handed out before in this process
    pub fn fresh() -> Self {
        Self(NEXT_TOKEN.fetch_add(1, Ordering::Relaxed))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

/// Which component is waiting
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DelayTarget {
    EntryForm,
    Item(TaskId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelayRequest {
    pub target: DelayTarget,
    pub token: DelayToken,
    pub duration: Duration,
}

impl DelayRequest {
    pub fn new(target: DelayTarget, duration: Duration) -> Self {
        Self {
            target,
            token: DelayToken::fresh(),
            duration,
        }
    }

    pub fn is_immediate(&self) -> bool {
        self.duration.is_zero()
    }
}
