//! Rebind Shield Infrastructure Layer
//!
//! hickory-proto adapters for the rebinding filter and logging setup.
pub mod dns;
pub mod logging;
