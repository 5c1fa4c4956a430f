use std::time::Duration;

/// Fixed delay between connection attempts.
pub const RETRY_DELAY: Duration = Duration::from_millis(3000);

/// Maximum number of retries after the initial attempt.
pub const MAX_RETRIES: u32 = 5;

/// What the host reported for one initialization attempt.
///
/// A failed or timed-out host call surfaces as `Disconnected`; connection
/// errors become ordinary state, not a separate error channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostResponse {
    /// The external authorization round-trip has not completed yet.
    AuthPending,
    Connected,
    Disconnected,
}

/// Where the flow currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectState {
    Uninitialized,
    /// Waiting out the retry delay; `remaining` retries are left.
    PendingRetry { remaining: u32 },
    Initialized { connected: bool },
}

/// What the caller should do after feeding in a response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Repeat the same initialization request after this delay.
    Retry(Duration),
    /// The flow settled; no further attempts.
    Settled { connected: bool },
}

/// Bounded flat-interval retry for connection initialization.
///
/// When the UI has just sent the user through an external authorization
/// round-trip, the host may briefly keep reporting "auth pending" before
/// the authorization lands. In that window the same initialization request
/// is retried at a fixed interval, at most [`MAX_RETRIES`] times. The
/// budget is not refilled per initialization; it re-arms only when
/// [`expect_fresh_auth`](ConnectFlow::expect_fresh_auth) is called again.
/// Once the flow settles, the expectation flag is cleared so unrelated
/// later initializations resolve on their first response.
///
/// # Examples
///
/// ```
/// use mural::connect::{ConnectFlow, HostResponse};
///
/// let mut flow = ConnectFlow::new();
/// flow.expect_fresh_auth();
///
/// let mut responses = [HostResponse::AuthPending, HostResponse::Connected].into_iter();
/// let connected = flow.run_with(|| responses.next().unwrap(), |_delay| {});
/// assert!(connected);
/// ```
#[derive(Clone, Debug)]
pub struct ConnectFlow {
    state: ConnectState,
    expecting_fresh_auth: bool,
    retries_left: u32,
}

impl ConnectFlow {
    pub fn new() -> Self {
        Self {
            state: ConnectState::Uninitialized,
            expecting_fresh_auth: false,
            retries_left: MAX_RETRIES,
        }
    }

    /// Mark that the next initialization follows a freshly-completed
    /// external authorization, re-arming the retry budget.
    pub fn expect_fresh_auth(&mut self) {
        self.expecting_fresh_auth = true;
        self.retries_left = MAX_RETRIES;
    }

    pub fn state(&self) -> ConnectState {
        self.state
    }

    /// Feed one host response into the state machine.
    ///
    /// The only non-settling transition is "auth pending while expecting
    /// fresh auth with retries left"; everything else settles the flow and
    /// clears the expectation flag.
    pub fn on_response(&mut self, response: HostResponse) -> Step {
        match response {
            HostResponse::AuthPending if self.expecting_fresh_auth && self.retries_left > 0 => {
                self.retries_left -= 1;
                self.state = ConnectState::PendingRetry {
                    remaining: self.retries_left,
                };
                tracing::debug!(
                    remaining = self.retries_left,
                    delay_ms = RETRY_DELAY.as_millis() as u64,
                    "authorization still pending, scheduling retry"
                );
                Step::Retry(RETRY_DELAY)
            }
            HostResponse::AuthPending | HostResponse::Disconnected => self.settle(false),
            HostResponse::Connected => self.settle(true),
        }
    }

    fn settle(&mut self, connected: bool) -> Step {
        self.expecting_fresh_auth = false;
        self.state = ConnectState::Initialized { connected };
        Step::Settled { connected }
    }

    /// Drive the flow to completion against an injected attempt function
    /// and sleep function. Returns the settled connection status.
    pub fn run_with<A, S>(&mut self, mut attempt: A, mut sleep: S) -> bool
    where
        A: FnMut() -> HostResponse,
        S: FnMut(Duration),
    {
        loop {
            match self.on_response(attempt()) {
                Step::Retry(delay) => sleep(delay),
                Step::Settled { connected } => return connected,
            }
        }
    }

    /// Drive the flow to completion, sleeping on the current thread
    /// between attempts.
    pub fn run<A>(&mut self, attempt: A) -> bool
    where
        A: FnMut() -> HostResponse,
    {
        self.run_with(attempt, std::thread::sleep)
    }
}

impl Default for ConnectFlow {
    fn default() -> Self {
        Self::new()
    }
}
