//! WebSocket chat connection: one session per socket, and the reconnect loop around it.

mod runner;
mod session;
mod state;

pub use runner::run_client;
pub use session::{SessionEnd, run_session};
pub use state::{ConnectionState, SessionEvent};
