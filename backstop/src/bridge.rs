//! Bridge — synchronous panic interception around a unit of work.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tracing::warn;

use crate::errors::{error_code, ErrorInfo};

/// Result of a bridged call.
/// `Err` if and only if the work item panicked; the bridge itself never panics.
pub type BridgeResult<T = ()> = Result<T, ErrorInfo>;

/// Run `work` under panic interception.
///
/// Invokes `work` exactly once, synchronously, on the calling thread. A panic
/// raised by `work` ends at this call: its payload is converted to an
/// [`ErrorInfo`] and returned as `Err`, never re-raised. The bridge holds no
/// state, so nested and concurrent invocations need no coordination.
///
/// Only unwinding panics are intercepted. Signals, aborts, and builds with
/// `panic = "abort"` are outside the guarantee.
pub fn run<F: FnOnce()>(work: F) -> BridgeResult {
    run_with(work)
}

/// Run `work` under panic interception, passing its return value through.
pub fn run_with<T, F: FnOnce() -> T>(work: F) -> BridgeResult<T> {
    // AssertUnwindSafe: visibility of the work item's partial side effects
    // after an intercepted panic is the caller's concern.
    match panic::catch_unwind(AssertUnwindSafe(work)) {
        Ok(value) => Ok(value),
        Err(payload) => {
            let info = payload_to_error(payload);
            warn!(
                domain = %info.domain,
                code = info.code,
                description = %info.message,
                "intercepted panic at bridge boundary"
            );
            Err(info)
        }
    }
}

/// Raise a structured failure from inside a work item.
///
/// A bridge call around this yields exactly `info`, domain and code included.
/// Plain `panic!` works equally well for message-only failures.
pub fn raise(info: ErrorInfo) -> ! {
    panic::panic_any(info)
}

/// Convert an intercepted panic payload to an [`ErrorInfo`].
/// The result always carries a non-empty message.
fn payload_to_error(payload: Box<dyn Any + Send>) -> ErrorInfo {
    match payload.downcast::<ErrorInfo>() {
        Ok(info) => *info,
        Err(payload) => match payload.downcast::<String>() {
            Ok(message) => ErrorInfo::from_message(*message),
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(message) => ErrorInfo::from_message(*message),
                Err(_) => ErrorInfo::from_message(error_code::MESSAGE_OPAQUE),
            },
        },
    }
}
