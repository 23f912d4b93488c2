use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::metrics::Tempo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum_macros::Display)]
pub enum Phase {
    #[default]
    Idle,
    Playing,
    Paused,
    Finished,
}

/// Order in which the words of a list are shown.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OrderMode {
    #[default]
    Sequential,
    Random,
}

/// Working state for one playthrough of a word list.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// The list as handed over by the host, kept for value comparison and reshuffles.
    pub source: Vec<String>,
    pub order_mode: OrderMode,
    /// `source`, permuted when `order_mode` is random. Its length never changes.
    pub working: Vec<String>,
    pub cursor: usize,
    pub phase: Phase,
    pub started_at: Option<SystemTime>,
    pub ended_at: Option<SystemTime>,
    /// Tempo in force when playback started; the target for this session's metrics.
    pub tempo: Option<Tempo>,
}

impl Session {
    pub fn new(source: Vec<String>, order_mode: OrderMode, working: Vec<String>) -> Self {
        debug_assert_eq!(source.len(), working.len());
        Self {
            source,
            order_mode,
            working,
            ..Self::default()
        }
    }

    /// True when `words` and `order_mode` match what this session was built from.
    pub fn matches<S: AsRef<str>>(&self, words: &[S], order_mode: OrderMode) -> bool {
        self.order_mode == order_mode
            && self
                .source
                .iter()
                .map(String::as_str)
                .eq(words.iter().map(AsRef::as_ref))
    }

    /// Back to the first word with no timestamps; the working order is kept.
    pub fn rewind(&mut self) {
        self.cursor = 0;
        self.phase = Phase::Idle;
        self.started_at = None;
        self.ended_at = None;
        self.tempo = None;
    }

    pub fn total_words(&self) -> usize {
        self.working.len()
    }

    pub fn current_word(&self) -> &str {
        self.working.get(self.cursor).map_or("", String::as_str)
    }

    pub fn progress_percent(&self) -> u8 {
        if self.phase == Phase::Finished {
            return 100;
        }
        match self.working.len() {
            0 => 0,
            len => (self.cursor as f64 / len as f64 * 100.0).round() as u8,
        }
    }
}
