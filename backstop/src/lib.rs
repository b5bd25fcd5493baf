//! Backstop — panic interception at a host boundary.
//! Runs a caller-supplied unit of work under `catch_unwind` and hands back a
//! structured error value instead of letting the unwind escape the call.

pub mod bridge;
pub mod errors;
pub mod trace;

pub use bridge::{raise, run, run_with, BridgeResult};
pub use errors::ErrorInfo;
pub use trace::init_tracing;
