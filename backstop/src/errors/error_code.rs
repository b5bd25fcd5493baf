//! Default diagnostic constants for intercepted panics.

/// Domain reported when a panic payload carries no domain of its own.
pub const DOMAIN_PANIC: &str = "panic";

/// Code reported when a panic payload carries no code of its own.
pub const CODE_GENERIC: i64 = 0;

/// Message substituted when a panic payload carries no usable description.
pub const MESSAGE_OPAQUE: &str = "panic payload carried no message";
