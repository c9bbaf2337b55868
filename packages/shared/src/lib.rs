//! Utilities shared by the Netmingle binaries.

pub mod logger;
pub mod time;
