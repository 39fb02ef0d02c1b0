//! Delivery gate for the sockbridge event bridge.
//!
//! The gate is the seam an embedding bridge engine calls when traffic or
//! lifecycle activity crosses the bridge: it wraps the occurrence in a
//! [`bridge_core::BridgeEvent`], hands it to the registered policy hook,
//! and awaits the completion signal under the configured deadline before
//! reporting a [`Verdict`]. Events for one socket resolve in the order
//! they were raised; distinct sockets proceed independently. Message
//! routing, permission rules, and the transport itself stay with the
//! embedder.

pub mod boot;
pub mod config;
pub mod gate;
pub mod hook;
pub mod metrics;
mod order;

pub use config::GateConfig;
pub use gate::{EventGate, Verdict};
pub use hook::{BridgeHook, FnHook};
pub use metrics::{GateMetrics, GateMetricsSnapshot};
