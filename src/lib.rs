//! Run the `claude` CLI headlessly inside a pseudo-terminal.
//!
//! claude hangs when launched without a terminal. This crate maps a fixed
//! set of flags onto claude's argv, runs it under `script` so a pty is
//! allocated, and forwards claude's exit code.

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod pty;
pub mod request;

pub use command::build_command;
pub use error::{HeadlessError, Result};
pub use pty::PtyLauncher;
pub use request::{InvocationRequest, OutputFormat, PermissionMode};
