//! Time source abstraction
//!
//! Every "now" read in the UI goes through a [`Clock`] so rendering and
//! classification can be pinned to a fixed instant.

use chrono::{DateTime, Duration, Local};
use std::fmt;
use std::sync::{Arc, Mutex};

pub trait Clock: Send + Sync + fmt::Debug {
    fn now(&self) -> DateTime<Local>;

    fn now_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }
}

/// Shared handle passed to components
pub type SharedClock = Arc<dyn Clock>;

/// Wall clock in the local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn shared() -> SharedClock {
        Arc::new(Self)
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock frozen at a settable instant
#[derive(Debug)]
pub struct FixedClock {
    instant: Mutex<DateTime<Local>>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Local>) -> Self {
        Self {
            instant: Mutex::new(instant),
        }
    }

    pub fn shared(instant: DateTime<Local>) -> Arc<Self> {
        Arc::new(Self::new(instant))
    }

    pub fn set(&self, instant: DateTime<Local>) {
        if let Ok(mut current) = self.instant.lock() {
            *current = instant;
        }
    }

    pub fn advance(&self, by: Duration) {
        if let Ok(mut current) = self.instant.lock() {
            *current += by;
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        match self.instant.lock() {
            Ok(instant) => *instant,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}
