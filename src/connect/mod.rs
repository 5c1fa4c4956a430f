//! Bounded-retry connection initialization.

mod flow;

pub use flow::{ConnectFlow, ConnectState, HostResponse, Step, MAX_RETRIES, RETRY_DELAY};
