//! # System Interaction Layer
//!
//! Process-wide setup that sits outside the matrix logic.
//!
//! ## Modules
//!
//! - **`logging`**: turns the `-v`/`-q` flags into a [`logging::LogConfig`] and installs
//!   the `env_logger` backend once at startup.

pub mod logging;
