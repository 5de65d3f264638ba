use super::actions::Action;
use super::delay::{DelayRequest, DelayTarget};
use std::collections::HashMap;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// A running timer and what it was scheduled for
#[derive(Debug)]
struct BackgroundTask {
    request: DelayRequest,
    handle: JoinHandle<()>,
    started_at: std::time::Instant,
}

/// Owns every pending delay timer. Each target has at most one timer in
/// flight and dropping the manager aborts them all.
pub struct TaskManager {
    tasks: HashMap<DelayTarget, BackgroundTask>,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                action_sender: tx,
            },
            rx,
        )
    }

    /// Post `DelayElapsed` back to the app once the request's duration passes
    pub fn spawn_delay(&mut self, request: DelayRequest) {
        // A newer request for the same component supersedes the old one
        self.cancel(&request.target);

        let action_sender = self.action_sender.clone();
        let target = request.target.clone();
        let token = request.token;
        let duration = request.duration;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let _ = action_sender.send(Action::DelayElapsed { target, token });
        });

        log::debug!(
            "Scheduled delay {} for {:?} ({}ms)",
            request.token.value(),
            request.target,
            request.duration.as_millis()
        );

        self.tasks.insert(
            request.target.clone(),
            BackgroundTask {
                request,
                handle,
                started_at: std::time::Instant::now(),
            },
        );
    }

    /// Abort the pending delay for `target`, if any
    pub fn cancel(&mut self, target: &DelayTarget) -> bool {
        match self.tasks.remove(target) {
            Some(task) => {
                task.handle.abort();
                log::debug!(
                    "Cancelled delay {} for {:?} after {}ms",
                    task.request.token.value(),
                    target,
                    task.started_at.elapsed().as_millis()
                );
                true
            }
            None => false,
        }
    }

    /// Forget timers whose completion has already been delivered
    pub fn cleanup_finished_tasks(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|target, task| {
            if !task.handle.is_finished() {
                return true;
            }
            log::debug!(
                "Delay {} for {:?} finished after {}ms",
                task.request.token.value(),
                target,
                task.started_at.elapsed().as_millis()
            );
            false
        });
        before - self.tasks.len()
    }

    pub fn is_pending(&self, target: &DelayTarget) -> bool {
        self.tasks.get(target).is_some_and(|task| !task.handle.is_finished())
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of tracked timers
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Nothing may fire into a torn-down UI
        self.cancel_all_tasks();
    }
}
