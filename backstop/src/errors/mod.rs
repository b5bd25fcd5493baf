//! Error handling for Backstop.
//! `thiserror` only, zero `anyhow`.

pub mod error_code;
pub mod error_info;

pub use error_info::ErrorInfo;
