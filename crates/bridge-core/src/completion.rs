use std::fmt;
use std::pin::pin;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Notify;

/// Terminal answer for one bridge event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Allow,
    Deny,
}

impl Outcome {
    pub fn is_allowed(self) -> bool {
        matches!(self, Outcome::Allow)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CompletionError {
    #[error("completion already resolved with {first:?}")]
    AlreadyResolved { first: Outcome },
}

type Observer = Box<dyn FnOnce(Outcome) + Send>;

enum State {
    Pending(Vec<Observer>),
    Resolved(Outcome),
}

/// One-shot allow/deny signal shared between a bridge event and the engine
/// that raised it.
///
/// Resolution happens at most once; the first outcome is authoritative and
/// a second attempt is rejected without changing what observers see.
/// Observers fire exactly once each, immediately when attached after
/// resolution. The engine side awaits [`Completion::resolved`].
#[derive(Clone)]
pub struct Completion {
    inner: Arc<Inner>,
}

struct Inner {
    state: Mutex<State>,
    notify: Notify,
}

impl Completion {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(State::Pending(Vec::new())),
                notify: Notify::new(),
            }),
        }
    }

    /// Resolve with the final outcome. A second resolution is a programmer
    /// error: it is rejected, logged, and the first outcome stands.
    pub fn resolve(&self, outcome: Outcome) -> Result<(), CompletionError> {
        self.try_resolve(outcome).inspect_err(|err| {
            let CompletionError::AlreadyResolved { first } = err;
            tracing::warn!(attempted = ?outcome, ?first, "bridge event completion resolved twice");
        })
    }

    /// Quiet variant of [`Completion::resolve`] for callers that race by
    /// design, such as a deadline fallback losing to a late handler.
    pub fn try_resolve(&self, outcome: Outcome) -> Result<(), CompletionError> {
        let observers = {
            let mut state = self.inner.state.lock();
            match &mut *state {
                State::Resolved(first) => {
                    return Err(CompletionError::AlreadyResolved { first: *first });
                }
                State::Pending(observers) => {
                    let observers = std::mem::take(observers);
                    *state = State::Resolved(outcome);
                    observers
                }
            }
        };
        for observer in observers {
            observer(outcome);
        }
        self.inner.notify.notify_waiters();
        Ok(())
    }

    /// Attach an observer. It is invoked exactly once with the final
    /// outcome, synchronously here if resolution already happened.
    pub fn on_complete<F>(&self, observer: F)
    where
        F: FnOnce(Outcome) + Send + 'static,
    {
        let mut state = self.inner.state.lock();
        match &mut *state {
            State::Pending(observers) => observers.push(Box::new(observer)),
            State::Resolved(outcome) => {
                let outcome = *outcome;
                drop(state);
                observer(outcome);
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        self.outcome().is_some()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match &*self.inner.state.lock() {
            State::Resolved(outcome) => Some(*outcome),
            State::Pending(_) => None,
        }
    }

    /// Wait until the completion is resolved.
    pub async fn resolved(&self) -> Outcome {
        loop {
            let mut notified = pin!(self.inner.notify.notified());
            notified.as_mut().enable();
            if let Some(outcome) = self.outcome() {
                return outcome;
            }
            notified.await;
        }
    }
}

impl Default for Completion {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completion")
            .field("outcome", &self.outcome())
            .finish()
    }
}
