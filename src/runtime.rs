use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent};

use crate::clock::Clock;
use crate::engine::{AdvanceOutcome, WordFlow};

/// Host tick interval. Tempos move in 0.1 s steps, so this keeps word
/// changes within a quarter step of their deadline.
pub const TICK_RATE_MS: u64 = 25;

/// Unified event type consumed by the app runner
#[derive(Clone, Debug)]
pub enum FlowEvent {
    Key(KeyEvent),
    Resize,
    Tick,
}

/// Source of terminal events (keyboard, resize, etc.)
pub trait FlowEventSource: Send + 'static {
    /// Block for up to `timeout` waiting for an event.
    fn recv_timeout(&self, timeout: Duration) -> Result<FlowEvent, RecvTimeoutError>;
}

/// Production event source reading crossterm events on a background thread
pub struct CrosstermEventSource {
    rx: Receiver<FlowEvent>,
}

impl CrosstermEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || loop {
            let forwarded = match event::read() {
                Ok(CtEvent::Key(key)) => tx.send(FlowEvent::Key(key)),
                Ok(CtEvent::Resize(_, _)) => tx.send(FlowEvent::Resize),
                Ok(_) => Ok(()),
                Err(err) => {
                    tracing::warn!(%err, "terminal event stream closed");
                    break;
                }
            };
            if forwarded.is_err() {
                break;
            }
        });

        Self { rx }
    }
}

impl Default for CrosstermEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowEventSource for CrosstermEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<FlowEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

pub trait Ticker: Send + Sync + 'static {
    fn interval(&self) -> Duration;
}

#[derive(Clone, Copy, Debug)]
pub struct FixedTicker {
    interval: Duration,
}

impl FixedTicker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Default for FixedTicker {
    fn default() -> Self {
        Self::new(Duration::from_millis(TICK_RATE_MS))
    }
}

impl Ticker for FixedTicker {
    fn interval(&self) -> Duration {
        self.interval
    }
}

/// Channel-backed event source for tests
pub struct TestEventSource {
    rx: Receiver<FlowEvent>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<FlowEvent>) -> Self {
        Self { rx }
    }
}

impl FlowEventSource for TestEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<FlowEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// One turn of the host loop.
#[derive(Clone, Debug)]
pub struct Step {
    pub event: FlowEvent,
    /// What the advance timer did this turn, if it was due.
    pub advanced: Option<AdvanceOutcome>,
}

/// Yields one event per call, or a Tick when the interval passes quietly
pub struct Runner<E: FlowEventSource, T: Ticker> {
    event_source: E,
    ticker: T,
}

impl<E: FlowEventSource, T: Ticker> Runner<E, T> {
    pub fn new(event_source: E, ticker: T) -> Self {
        Self {
            event_source,
            ticker,
        }
    }

    pub fn step(&self) -> FlowEvent {
        match self.event_source.recv_timeout(self.ticker.interval()) {
            Ok(ev) => ev,
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => FlowEvent::Tick,
        }
    }

    /// Wait for the next event, then poll the engine's advance timer.
    ///
    /// The timer is polled on every turn, not only on Tick, so a burst of
    /// key presses or resizes cannot hold a word on screen past its deadline.
    pub fn pump<C: Clock>(&self, flow: &mut WordFlow<C>) -> Step {
        let event = self.step();
        let advanced = flow.poll();
        Step { event, advanced }
    }
}
