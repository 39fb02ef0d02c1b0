use std::sync::Arc;
use std::sync::atomic::Ordering;

use bridge_core::{
    BridgeEvent, CompletionError, EventError, EventKind, Outcome, TransportSocket,
};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::GateConfig;
use crate::hook::BridgeHook;
use crate::metrics::{GateMetrics, GateMetricsSnapshot};
use crate::order::SocketOrdering;

/// Terminal answer for one raised event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub outcome: Outcome,
    /// True when the outcome came from the deadline fallback rather than
    /// the hook.
    pub timed_out: bool,
}

impl Verdict {
    pub fn is_allowed(self) -> bool {
        self.outcome.is_allowed()
    }

    fn resolved(outcome: Outcome) -> Self {
        Self {
            outcome,
            timed_out: false,
        }
    }

    fn fallback(outcome: Outcome) -> Self {
        Self {
            outcome,
            timed_out: true,
        }
    }
}

/// Engine-facing raise/deliver/await choreography.
///
/// One gate serves one bridge. For every occurrence the embedding engine
/// raises, the gate builds the event, takes the per-socket ordering
/// permit, hands the event to the hook, and awaits the completion under
/// the configured deadline. The verdict it returns is what the engine
/// acts on before letting the underlying bus operation proceed.
pub struct EventGate {
    hook: Arc<dyn BridgeHook>,
    config: GateConfig,
    metrics: Arc<GateMetrics>,
    ordering: SocketOrdering,
}

impl EventGate {
    pub fn new(hook: Arc<dyn BridgeHook>) -> Self {
        Self::with_config(hook, GateConfig::default())
    }

    pub fn with_config(hook: Arc<dyn BridgeHook>, config: GateConfig) -> Self {
        Self {
            hook,
            config,
            metrics: Arc::new(GateMetrics::default()),
            ordering: SocketOrdering::new(),
        }
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    pub fn metrics(&self) -> GateMetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Raise a socket lifecycle occurrence.
    pub async fn raise_lifecycle(
        &self,
        kind: EventKind,
        socket: Arc<dyn TransportSocket>,
    ) -> Result<Verdict, EventError> {
        let event = BridgeEvent::lifecycle(kind, socket).inspect_err(|_| {
            self.metrics.invalid.fetch_add(1, Ordering::Relaxed);
        })?;
        Ok(self.dispatch(event).await)
    }

    /// Raise a message-bearing occurrence with the raw frame.
    pub async fn raise_message(
        &self,
        kind: EventKind,
        payload: Value,
        socket: Arc<dyn TransportSocket>,
    ) -> Result<Verdict, EventError> {
        let event = BridgeEvent::with_message(kind, payload, socket).inspect_err(|_| {
            self.metrics.invalid.fetch_add(1, Ordering::Relaxed);
        })?;
        Ok(self.dispatch(event).await)
    }

    async fn dispatch(&self, event: BridgeEvent) -> Verdict {
        self.metrics.raised.fetch_add(1, Ordering::Relaxed);
        let event = Arc::new(event);
        let handle = event.socket();
        let socket_id = handle.id().to_string();

        let _permit = self.ordering.acquire(&socket_id).await;
        debug!(kind = %event.kind(), socket = %socket_id, "bridge event raised");
        self.hook.on_event(Arc::clone(&event)).await;

        let verdict = match self.config.resolve_timeout {
            Some(deadline) => {
                match tokio::time::timeout(deadline, event.completion().resolved()).await {
                    Ok(outcome) => Verdict::resolved(outcome),
                    Err(_) => self.expire(&event, &socket_id),
                }
            }
            None => Verdict::resolved(event.completion().resolved().await),
        };

        match verdict.outcome {
            Outcome::Allow => self.metrics.allowed.fetch_add(1, Ordering::Relaxed),
            Outcome::Deny => self.metrics.denied.fetch_add(1, Ordering::Relaxed),
        };
        debug!(
            kind = %event.kind(),
            socket = %socket_id,
            outcome = ?verdict.outcome,
            timed_out = verdict.timed_out,
            "bridge event settled"
        );
        verdict
    }

    fn expire(&self, event: &BridgeEvent, socket_id: &str) -> Verdict {
        let fallback = if self.config.allow_on_timeout {
            Outcome::Allow
        } else {
            Outcome::Deny
        };
        match event.completion().try_resolve(fallback) {
            Ok(()) => {
                self.metrics.timed_out.fetch_add(1, Ordering::Relaxed);
                warn!(
                    kind = %event.kind(),
                    socket = %socket_id,
                    ?fallback,
                    "bridge event unresolved past deadline"
                );
                Verdict::fallback(fallback)
            }
            // The hook resolved inside the race window; its answer stands.
            Err(CompletionError::AlreadyResolved { first }) => Verdict::resolved(first),
        }
    }
}
