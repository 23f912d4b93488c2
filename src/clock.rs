use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant, SystemTime};

/// Source of "now" for the playback engine.
///
/// `now` is wall time for session timestamps; advance deadlines are
/// measured on the monotonic `instant`.
pub trait Clock {
    fn now(&self) -> SystemTime;
    fn instant(&self) -> Instant;
}

/// Wall clock used in production.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }

    fn instant(&self) -> Instant {
        Instant::now()
    }
}

/// Hand-driven clock for tests and replays.
///
/// Clones share the same instant, so a test can keep one handle while the
/// engine owns another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<SystemTime>>,
    elapsed: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub fn new(start: SystemTime) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
            elapsed: Rc::new(Cell::new(Instant::now())),
        }
    }

    /// Let time pass on both the wall and the monotonic reading.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
        self.elapsed.set(self.elapsed.get() + by);
    }

    /// Set the wall clock back, as an NTP correction would. Monotonic time
    /// is untouched.
    pub fn rewind(&self, by: Duration) {
        self.now.set(self.now.get() - by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000))
    }
}

impl Clock for ManualClock {
    fn now(&self) -> SystemTime {
        self.now.get()
    }

    fn instant(&self) -> Instant {
        self.elapsed.get()
    }
}
