use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use bridge_core::BridgeEvent;

/// Policy seam for bridge traffic.
///
/// The gate delivers each event to exactly one hook. The hook typically
/// performs asynchronous work (a permission lookup, an audit write) and
/// then resolves the event's completion; leaving it unresolved hands the
/// decision to the gate's timeout policy.
#[async_trait]
pub trait BridgeHook: Send + Sync {
    async fn on_event(&self, event: Arc<BridgeEvent>);
}

/// Adapts a plain async closure into a [`BridgeHook`].
pub struct FnHook<F>(F);

impl<F> FnHook<F> {
    pub fn new(hook: F) -> Self {
        Self(hook)
    }
}

#[async_trait]
impl<F, Fut> BridgeHook for FnHook<F>
where
    F: Fn(Arc<BridgeEvent>) -> Fut + Send + Sync,
    Fut: Future<Output = ()> + Send + 'static,
{
    async fn on_event(&self, event: Arc<BridgeEvent>) {
        (self.0)(event).await
    }
}
