use std::sync::{Arc, Mutex};
use std::time::Duration;

use bridge_core::testkit::StubSocket;
use bridge_core::{BridgeEvent, EventKind, Outcome};
use serde_json::json;
use sockbridge_gate::{BridgeHook, EventGate, FnHook, GateConfig};
use tokio::sync::Notify;

fn config() -> GateConfig {
    GateConfig {
        resolve_timeout: Some(Duration::from_secs(5)),
        allow_on_timeout: false,
    }
}

/// Hook that stashes deliveries for the test to resolve manually and
/// pings `notify` on each one.
fn stashing_hook(
    stash: Arc<Mutex<Vec<Arc<BridgeEvent>>>>,
    notify: Arc<Notify>,
) -> Arc<dyn BridgeHook> {
    Arc::new(FnHook::new(move |event: Arc<BridgeEvent>| {
        let stash = Arc::clone(&stash);
        let notify = Arc::clone(&notify);
        async move {
            stash.lock().unwrap().push(event);
            notify.notify_one();
        }
    }))
}

#[tokio::test]
async fn same_socket_events_resolve_in_delivery_order() {
    let stash: Arc<Mutex<Vec<Arc<BridgeEvent>>>> = Arc::new(Mutex::new(Vec::new()));
    let notify = Arc::new(Notify::new());
    let gate = Arc::new(EventGate::with_config(
        stashing_hook(Arc::clone(&stash), Arc::clone(&notify)),
        config(),
    ));

    let socket = StubSocket::named("ordered");

    let first = {
        let gate = Arc::clone(&gate);
        let socket = socket.clone();
        tokio::spawn(async move {
            gate.raise_message(EventKind::Send, json!({ "address": "a" }), socket)
                .await
        })
    };
    notify.notified().await;

    let second = {
        let gate = Arc::clone(&gate);
        let socket = socket.clone();
        tokio::spawn(async move {
            gate.raise_message(EventKind::Send, json!({ "address": "b" }), socket)
                .await
        })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(
        stash.lock().unwrap().len(),
        1,
        "second event must wait for the first to settle"
    );

    stash.lock().unwrap()[0]
        .resolve(Outcome::Allow)
        .expect("resolve first");

    notify.notified().await;
    {
        let events = stash.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].raw_message().and_then(|m| m.address()), Some("b"));
        events[1].resolve(Outcome::Deny).expect("resolve second");
    }

    let first = first.await.expect("join").expect("raise");
    let second = second.await.expect("join").expect("raise");
    assert!(first.is_allowed());
    assert_eq!(second.outcome, Outcome::Deny);
}

#[tokio::test]
async fn distinct_sockets_are_not_serialized() {
    let stash: Arc<Mutex<Vec<Arc<BridgeEvent>>>> = Arc::new(Mutex::new(Vec::new()));
    let notify = Arc::new(Notify::new());
    let gate = Arc::new(EventGate::with_config(
        stashing_hook(Arc::clone(&stash), Arc::clone(&notify)),
        config(),
    ));

    let blocked = {
        let gate = Arc::clone(&gate);
        tokio::spawn(async move {
            gate.raise_message(
                EventKind::Publish,
                json!({ "address": "slow" }),
                StubSocket::named("busy"),
            )
            .await
        })
    };
    notify.notified().await;

    // A second socket's event is delivered while the first is pending.
    let other = {
        let gate = Arc::clone(&gate);
        tokio::spawn(async move {
            gate.raise_message(
                EventKind::Publish,
                json!({ "address": "fast" }),
                StubSocket::named("idle"),
            )
            .await
        })
    };
    notify.notified().await;

    {
        let events = stash.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert!(!events[0].is_complete());
        events[1].resolve(Outcome::Allow).expect("resolve other");
    }
    assert!(other.await.expect("join").expect("raise").is_allowed());

    stash.lock().unwrap()[0]
        .resolve(Outcome::Deny)
        .expect("resolve blocked");
    assert_eq!(
        blocked.await.expect("join").expect("raise").outcome,
        Outcome::Deny
    );
}
