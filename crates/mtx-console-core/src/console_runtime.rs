//! Shared async handle over [`ConsoleState`] that drives the reply timer.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{sleep_until, Instant};
use tracing::debug;

use crate::console_state::{CommandDispatch, ConsoleState, LoginError};

#[derive(Debug, Clone)]
/// Cloneable handle; every clone sees the same view state.
pub struct ConsoleRuntime {
    state: Arc<Mutex<ConsoleState>>,
    epoch: Instant,
}

impl ConsoleRuntime {
    /// Wraps `state`; the logical clock starts now.
    pub fn new(state: ConsoleState) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
            epoch: Instant::now(),
        }
    }

    /// Milliseconds since the handle was created, on the tokio clock.
    pub fn now_ms(&self) -> u64 {
        self.epoch
            .elapsed()
            .as_millis()
            .try_into()
            .unwrap_or(u64::MAX)
    }

    fn deadline(&self, due_at_ms: u64) -> Instant {
        self.epoch + Duration::from_millis(due_at_ms)
    }

    /// Clone of the current view state.
    pub async fn snapshot(&self) -> ConsoleState {
        self.state.lock().await.clone()
    }

    /// Runs `apply` under the state lock.
    pub async fn update<R>(&self, apply: impl FnOnce(&mut ConsoleState) -> R) -> R {
        let mut state = self.state.lock().await;
        apply(&mut state)
    }

    /// Types the credentials into the gate and submits it.
    pub async fn login(
        &self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<(), LoginError> {
        let (username, password) = (username.into(), password.into());
        self.update(|state| {
            state.set_username(username);
            state.set_password(password);
            state.submit_login()
        })
        .await
    }

    /// Sends `input` through the interpreter and arms a fire-and-forget timer
    /// for any scheduled response.
    pub async fn send_command(&self, input: impl Into<String>) -> CommandDispatch {
        let input = input.into();
        let now_ms = self.now_ms();
        let dispatch = self
            .update(|state| {
                state.set_command_input(input);
                state.send_command(now_ms)
            })
            .await;
        if let CommandDispatch::Scheduled { due_at_ms } = dispatch {
            self.spawn_delivery(due_at_ms);
        }
        dispatch
    }

    fn spawn_delivery(&self, due_at_ms: u64) {
        let runtime = self.clone();
        let deadline = self.deadline(due_at_ms);
        tokio::spawn(async move {
            sleep_until(deadline).await;
            let delivered = runtime.deliver_due().await;
            debug!(due_at_ms, delivered, "reply timer fired");
        });
    }

    /// Appends every reply due at the current tokio time.
    pub async fn deliver_due(&self) -> usize {
        let now_ms = self.now_ms();
        self.update(|state| state.deliver_due(now_ms)).await
    }

    /// Waits until every scheduled response has been delivered.
    pub async fn settle(&self) {
        loop {
            let next_due = self.update(|state| state.next_due_at_ms()).await;
            let Some(due_at_ms) = next_due else {
                return;
            };
            sleep_until(self.deadline(due_at_ms)).await;
            self.deliver_due().await;
        }
    }
}
