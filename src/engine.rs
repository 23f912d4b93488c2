//! Timer-driven word playback.
//!
//! [`WordFlow`] owns one [`Session`] and at most one pending advance timer.
//! The host drives it with commands (`play`, `pause`, `stop`, `shuffle`) and
//! calls [`WordFlow::poll`] on every tick; the engine never spawns threads or
//! sleeps.

use std::time::{Instant, SystemTime};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::clock::{Clock, SystemClock};
use crate::metrics::{compute_metrics_with, Metrics, Tempo, Thresholds};
use crate::session::{OrderMode, Phase, Session};
use crate::shuffle::shuffle_with_rng;

/// Identifies one armed advance timer. A firing carrying any other token is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingAdvance {
    token: TimerToken,
    due: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrepareOutcome {
    Prepared,
    /// Same words and order mode as the current session; nothing was reset.
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Started,
    Resumed,
    Restarted,
    AlreadyPlaying,
    NothingToPlay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShuffleOutcome {
    Shuffled,
    /// Shuffling only applies to random order.
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Advanced { cursor: usize },
    Finished,
    /// Stale or out-of-phase firing; state untouched.
    Ignored,
}

/// Read-only view of the engine for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub phase: Phase,
    pub current_word: String,
    pub cursor: usize,
    pub total_words: usize,
    pub progress_percent: u8,
    pub metrics: Option<Metrics>,
}

pub struct WordFlow<C: Clock = SystemClock> {
    clock: C,
    tempo: Tempo,
    thresholds: Thresholds,
    rng: StdRng,
    session: Session,
    pending: Option<PendingAdvance>,
    next_token: u64,
    timers_armed: u64,
}

impl WordFlow<SystemClock> {
    pub fn with_system_clock(tempo: Tempo) -> Self {
        Self::new(SystemClock, tempo)
    }
}

impl<C: Clock> WordFlow<C> {
    pub fn new(clock: C, tempo: Tempo) -> Self {
        Self {
            clock,
            tempo,
            thresholds: Thresholds::default(),
            rng: StdRng::from_entropy(),
            session: Session::default(),
            pending: None,
            next_token: 0,
            timers_armed: 0,
        }
    }

    /// Seed the shuffle source so random-order sessions are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Load a word list.
    ///
    /// Calling again with an equal list and the same order mode is a no-op,
    /// so a host may call this on every refresh without disturbing playback.
    pub fn prepare<S: AsRef<str>>(&mut self, words: &[S], order_mode: OrderMode) -> PrepareOutcome {
        if self.session.matches(words, order_mode) {
            return PrepareOutcome::Unchanged;
        }

        self.disarm();
        let source: Vec<String> = words.iter().map(|w| w.as_ref().to_string()).collect();
        let working = self.order(&source, order_mode);
        self.session = Session::new(source, order_mode, working);

        tracing::debug!(
            words = self.session.total_words(),
            %order_mode,
            "prepared word list"
        );
        PrepareOutcome::Prepared
    }

    pub fn play(&mut self) -> PlayOutcome {
        if self.session.working.is_empty() {
            tracing::warn!("play requested with an empty word list");
            return PlayOutcome::NothingToPlay;
        }

        let outcome = match self.session.phase {
            Phase::Playing => return PlayOutcome::AlreadyPlaying,
            Phase::Idle => {
                self.session.started_at = Some(self.clock.now());
                self.session.tempo = Some(self.tempo);
                PlayOutcome::Started
            }
            Phase::Paused => PlayOutcome::Resumed,
            Phase::Finished => {
                self.session.rewind();
                self.session.started_at = Some(self.clock.now());
                self.session.tempo = Some(self.tempo);
                PlayOutcome::Restarted
            }
        };

        self.session.phase = Phase::Playing;
        self.arm();
        tracing::debug!(?outcome, cursor = self.session.cursor, "playback running");
        outcome
    }

    /// Returns false when there was nothing playing to pause.
    pub fn pause(&mut self) -> bool {
        if self.session.phase != Phase::Playing {
            return false;
        }
        self.disarm();
        self.session.phase = Phase::Paused;
        tracing::debug!(cursor = self.session.cursor, "paused");
        true
    }

    pub fn stop(&mut self) {
        self.disarm();
        self.session.rewind();
        tracing::debug!("stopped");
    }

    /// Space-bar semantics: pause while playing, otherwise play.
    /// A finished session is left on its results until an explicit `play`.
    pub fn toggle_play_pause(&mut self) -> Option<PlayOutcome> {
        match self.session.phase {
            Phase::Playing => {
                self.pause();
                None
            }
            Phase::Idle | Phase::Paused => Some(self.play()),
            Phase::Finished => None,
        }
    }

    /// Draw a new order from the original list and go back to idle.
    pub fn shuffle(&mut self) -> ShuffleOutcome {
        if self.session.order_mode != OrderMode::Random {
            tracing::debug!("shuffle ignored in sequential order");
            return ShuffleOutcome::Rejected;
        }

        self.stop();
        self.session.working = shuffle_with_rng(&self.session.source, &mut self.rng);
        ShuffleOutcome::Shuffled
    }

    /// Timer callback. Only the currently pending timer may move the cursor,
    /// and only while playing.
    pub fn advance(&mut self, token: TimerToken) -> AdvanceOutcome {
        if self.session.phase != Phase::Playing {
            tracing::debug!(?token, phase = %self.session.phase, "advance outside playback ignored");
            return AdvanceOutcome::Ignored;
        }
        match self.pending {
            Some(pending) if pending.token == token => self.pending = None,
            _ => {
                tracing::debug!(?token, "stale advance ignored");
                return AdvanceOutcome::Ignored;
            }
        }

        let next = self.session.cursor + 1;
        if next >= self.session.total_words() {
            self.session.phase = Phase::Finished;
            self.session.ended_at = Some(self.clock.now());
            tracing::info!(words = self.session.total_words(), "session finished");
            return AdvanceOutcome::Finished;
        }

        self.session.cursor = next;
        self.arm();
        AdvanceOutcome::Advanced { cursor: next }
    }

    /// Fire the pending timer if it is due. Called from the host's tick.
    pub fn poll(&mut self) -> Option<AdvanceOutcome> {
        let pending = self.pending?;
        if self.clock.instant() < pending.due {
            return None;
        }
        Some(self.advance(pending.token))
    }

    /// Takes effect the next time the advance timer is armed. A session
    /// already under way is still scored against the tempo it started with.
    pub fn set_tempo(&mut self, tempo: Tempo) {
        self.tempo = tempo;
    }

    pub fn tempo(&self) -> Tempo {
        self.tempo
    }

    pub fn phase(&self) -> Phase {
        self.session.phase
    }

    pub fn current_word(&self) -> &str {
        self.session.current_word()
    }

    pub fn cursor(&self) -> usize {
        self.session.cursor
    }

    pub fn total_words(&self) -> usize {
        self.session.total_words()
    }

    pub fn progress_percent(&self) -> u8 {
        self.session.progress_percent()
    }

    pub fn order_mode(&self) -> OrderMode {
        self.session.order_mode
    }

    pub fn can_shuffle(&self) -> bool {
        self.session.order_mode == OrderMode::Random
    }

    pub fn working_sequence(&self) -> &[String] {
        &self.session.working
    }

    pub fn started_at(&self) -> Option<SystemTime> {
        self.session.started_at
    }

    pub fn ended_at(&self) -> Option<SystemTime> {
        self.session.ended_at
    }

    pub fn pending_timer(&self) -> Option<TimerToken> {
        self.pending.map(|p| p.token)
    }

    /// How many advance timers have been armed over the engine's lifetime.
    pub fn timers_armed(&self) -> u64 {
        self.timers_armed
    }

    /// Session summary, available once the list has played through.
    pub fn metrics(&self) -> Option<Metrics> {
        if self.session.phase != Phase::Finished {
            return None;
        }
        match compute_metrics_with(
            self.session.started_at,
            self.session.ended_at,
            self.session.total_words(),
            self.session.tempo.unwrap_or(self.tempo).secs(),
            &self.thresholds,
        ) {
            Ok(metrics) => metrics,
            Err(err) => {
                tracing::warn!(%err, "discarding session metrics");
                None
            }
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase(),
            current_word: self.current_word().to_string(),
            cursor: self.cursor(),
            total_words: self.total_words(),
            progress_percent: self.progress_percent(),
            metrics: self.metrics(),
        }
    }

    fn order(&mut self, source: &[String], order_mode: OrderMode) -> Vec<String> {
        match order_mode {
            OrderMode::Sequential => source.to_vec(),
            OrderMode::Random => shuffle_with_rng(source, &mut self.rng),
        }
    }

    fn arm(&mut self) {
        debug_assert!(self.pending.is_none(), "advance timer already armed");
        self.next_token += 1;
        self.timers_armed += 1;
        self.pending = Some(PendingAdvance {
            token: TimerToken(self.next_token),
            due: self.clock.instant() + self.tempo.as_duration(),
        });
    }

    fn disarm(&mut self) {
        if let Some(pending) = self.pending.take() {
            tracing::trace!(token = ?pending.token, "advance timer cancelled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use assert_matches::assert_matches;
    use std::time::Duration;

    fn engine(secs: f64) -> (WordFlow<ManualClock>, ManualClock) {
        let clock = ManualClock::default();
        let flow = WordFlow::new(clock.clone(), Tempo::new(secs).unwrap()).with_seed(7);
        (flow, clock)
    }

    fn tick(flow: &mut WordFlow<ManualClock>, clock: &ManualClock, ms: u64) -> Option<AdvanceOutcome> {
        clock.advance(Duration::from_millis(ms));
        flow.poll()
    }

    #[test]
    fn plays_sequential_list_to_the_end() {
        let (mut flow, clock) = engine(1.0);
        flow.prepare(&["a", "b", "c"], OrderMode::Sequential);

        assert_eq!(flow.play(), PlayOutcome::Started);
        assert_eq!(flow.cursor(), 0);
        assert_eq!(flow.current_word(), "a");

        assert_eq!(tick(&mut flow, &clock, 1000), Some(AdvanceOutcome::Advanced { cursor: 1 }));
        assert_eq!(flow.current_word(), "b");
        assert_eq!(flow.progress_percent(), 33);

        assert_eq!(tick(&mut flow, &clock, 1000), Some(AdvanceOutcome::Advanced { cursor: 2 }));
        assert_eq!(flow.progress_percent(), 67);

        assert_eq!(tick(&mut flow, &clock, 1000), Some(AdvanceOutcome::Finished));
        assert_eq!(flow.phase(), Phase::Finished);
        assert_eq!(flow.progress_percent(), 100);
        assert_eq!(flow.cursor(), 2);
        assert!(flow.ended_at().is_some());
        assert_eq!(flow.pending_timer(), None);

        let metrics = flow.metrics().unwrap();
        assert_eq!(metrics.total_words, 3);
        assert_eq!(metrics.actual_wpm, 60);
        assert_eq!(metrics.efficiency_percent, 100);
    }

    #[test]
    fn poll_before_deadline_does_nothing() {
        let (mut flow, clock) = engine(1.5);
        flow.prepare(&["a", "b"], OrderMode::Sequential);
        flow.play();

        assert_eq!(tick(&mut flow, &clock, 1499), None);
        assert_eq!(flow.cursor(), 0);
        assert_matches!(tick(&mut flow, &clock, 1), Some(AdvanceOutcome::Advanced { cursor: 1 }));
    }

    #[test]
    fn play_while_playing_never_double_arms() {
        let (mut flow, _clock) = engine(1.0);
        flow.prepare(&["a", "b", "c"], OrderMode::Sequential);

        assert_eq!(flow.play(), PlayOutcome::Started);
        let token = flow.pending_timer();
        for _ in 0..5 {
            assert_eq!(flow.play(), PlayOutcome::AlreadyPlaying);
        }

        assert_eq!(flow.timers_armed(), 1);
        assert_eq!(flow.pending_timer(), token);
    }

    #[test]
    fn empty_list_has_nothing_to_play() {
        let (mut flow, _clock) = engine(1.0);
        let empty: [&str; 0] = [];
        flow.prepare(&empty, OrderMode::Sequential);

        assert_eq!(flow.play(), PlayOutcome::NothingToPlay);
        assert_eq!(flow.phase(), Phase::Idle);
        assert_eq!(flow.current_word(), "");
        assert_eq!(flow.timers_armed(), 0);
    }

    #[test]
    fn pause_freezes_and_resume_continues() {
        let (mut flow, clock) = engine(1.0);
        flow.prepare(&["a", "b", "c", "d"], OrderMode::Sequential);
        flow.play();
        tick(&mut flow, &clock, 1000);
        assert_eq!(flow.cursor(), 1);

        assert!(flow.pause());
        assert_eq!(flow.pending_timer(), None);
        let started = flow.started_at();

        assert_eq!(tick(&mut flow, &clock, 5000), None);
        assert_eq!(flow.cursor(), 1);
        assert_eq!(flow.progress_percent(), 25);

        assert_eq!(flow.play(), PlayOutcome::Resumed);
        assert_eq!(flow.started_at(), started);
        assert_eq!(flow.current_word(), "b");
        assert_eq!(tick(&mut flow, &clock, 1000), Some(AdvanceOutcome::Advanced { cursor: 2 }));
    }

    #[test]
    fn pause_outside_playback_is_a_no_op() {
        let (mut flow, _clock) = engine(1.0);
        flow.prepare(&["a"], OrderMode::Sequential);
        assert!(!flow.pause());
        assert_eq!(flow.phase(), Phase::Idle);
    }

    #[test]
    fn stop_resets_from_every_phase() {
        let (mut flow, clock) = engine(1.0);
        flow.prepare(&["a", "b"], OrderMode::Sequential);

        flow.stop();
        assert_eq!(flow.phase(), Phase::Idle);

        flow.play();
        tick(&mut flow, &clock, 1000);
        flow.stop();
        assert_eq!((flow.cursor(), flow.progress_percent(), flow.phase()), (0, 0, Phase::Idle));
        assert_eq!(flow.pending_timer(), None);

        flow.play();
        flow.pause();
        flow.stop();
        assert_eq!(flow.started_at(), None);

        flow.play();
        tick(&mut flow, &clock, 1000);
        tick(&mut flow, &clock, 1000);
        assert_eq!(flow.phase(), Phase::Finished);
        flow.stop();
        assert_eq!((flow.cursor(), flow.progress_percent(), flow.phase()), (0, 0, Phase::Idle));
        assert_eq!(flow.ended_at(), None);
        assert_eq!(flow.metrics(), None);
    }

    #[test]
    fn stale_token_is_ignored() {
        let (mut flow, _clock) = engine(1.0);
        flow.prepare(&["a", "b", "c"], OrderMode::Sequential);
        flow.play();
        let first = flow.pending_timer().unwrap();

        flow.pause();
        assert_eq!(flow.advance(first), AdvanceOutcome::Ignored);

        flow.play();
        assert_eq!(flow.advance(first), AdvanceOutcome::Ignored);
        assert_eq!(flow.cursor(), 0);

        let current = flow.pending_timer().unwrap();
        assert_eq!(flow.advance(current), AdvanceOutcome::Advanced { cursor: 1 });
    }

    #[test]
    fn advance_after_stop_is_ignored() {
        let (mut flow, _clock) = engine(1.0);
        flow.prepare(&["a", "b"], OrderMode::Sequential);
        flow.play();
        let token = flow.pending_timer().unwrap();
        flow.stop();

        assert_eq!(flow.advance(token), AdvanceOutcome::Ignored);
        assert_eq!(flow.cursor(), 0);
        assert_eq!(flow.phase(), Phase::Idle);
    }

    #[test]
    fn play_after_finish_restarts_same_order() {
        let (mut flow, clock) = engine(0.5);
        flow.prepare(&["un", "deux", "trois"], OrderMode::Random);
        let order = flow.working_sequence().to_vec();

        flow.play();
        for _ in 0..3 {
            tick(&mut flow, &clock, 500);
        }
        assert_eq!(flow.phase(), Phase::Finished);
        let first_start = flow.started_at();

        clock.advance(Duration::from_secs(10));
        assert_eq!(flow.play(), PlayOutcome::Restarted);
        assert_eq!(flow.working_sequence(), order.as_slice());
        assert_eq!(flow.cursor(), 0);
        assert_eq!(flow.ended_at(), None);
        assert_ne!(flow.started_at(), first_start);
    }

    #[test]
    fn toggle_follows_space_bar_rules() {
        let (mut flow, clock) = engine(1.0);
        flow.prepare(&["a"], OrderMode::Sequential);

        assert_eq!(flow.toggle_play_pause(), Some(PlayOutcome::Started));
        assert_eq!(flow.toggle_play_pause(), None);
        assert_eq!(flow.phase(), Phase::Paused);
        assert_eq!(flow.toggle_play_pause(), Some(PlayOutcome::Resumed));

        tick(&mut flow, &clock, 1000);
        assert_eq!(flow.phase(), Phase::Finished);
        assert_eq!(flow.toggle_play_pause(), None);
        assert_eq!(flow.phase(), Phase::Finished);
    }

    #[test]
    fn shuffle_rejected_in_sequential_order() {
        let (mut flow, clock) = engine(1.0);
        flow.prepare(&["a", "b", "c"], OrderMode::Sequential);
        flow.play();
        tick(&mut flow, &clock, 1000);

        assert!(!flow.can_shuffle());
        assert_eq!(flow.shuffle(), ShuffleOutcome::Rejected);
        assert_eq!(flow.phase(), Phase::Playing);
        assert_eq!(flow.cursor(), 1);
        assert_eq!(flow.working_sequence(), ["a", "b", "c"]);
    }

    #[test]
    fn shuffle_resets_and_keeps_the_multiset() {
        let words: Vec<String> = (0..30).map(|i| format!("mot{i}")).collect();
        let (mut flow, clock) = engine(1.0);
        flow.prepare(&words, OrderMode::Random);
        flow.play();
        tick(&mut flow, &clock, 1000);
        let before = flow.working_sequence().to_vec();

        assert_eq!(flow.shuffle(), ShuffleOutcome::Shuffled);
        assert_eq!(flow.phase(), Phase::Idle);
        assert_eq!(flow.cursor(), 0);
        assert_eq!(flow.pending_timer(), None);
        assert_eq!(flow.started_at(), None);

        let after = flow.working_sequence().to_vec();
        assert_ne!(before, after);
        let mut sorted = after.clone();
        sorted.sort();
        let mut expected = words.clone();
        expected.sort();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn stop_keeps_the_working_order() {
        let words: Vec<String> = (0..10).map(|i| i.to_string()).collect();
        let (mut flow, _clock) = engine(1.0);
        flow.prepare(&words, OrderMode::Random);
        let order = flow.working_sequence().to_vec();

        flow.play();
        flow.stop();
        assert_eq!(flow.working_sequence(), order.as_slice());
    }

    #[test]
    fn repeated_prepare_with_equal_input_keeps_session() {
        let (mut flow, clock) = engine(1.0);
        assert_eq!(flow.prepare(&["a", "b", "c"], OrderMode::Random), PrepareOutcome::Prepared);
        flow.play();
        tick(&mut flow, &clock, 1000);
        let token = flow.pending_timer();
        let order = flow.working_sequence().to_vec();

        // a fresh allocation with equal contents, as a host re-render would produce
        let again: Vec<String> = vec!["a".into(), "b".into(), "c".into()];
        assert_eq!(flow.prepare(&again, OrderMode::Random), PrepareOutcome::Unchanged);

        assert_eq!(flow.phase(), Phase::Playing);
        assert_eq!(flow.cursor(), 1);
        assert_eq!(flow.pending_timer(), token);
        assert_eq!(flow.working_sequence(), order.as_slice());
    }

    #[test]
    fn prepare_with_new_input_resets() {
        let (mut flow, clock) = engine(1.0);
        flow.prepare(&["a", "b", "c"], OrderMode::Sequential);
        flow.play();
        tick(&mut flow, &clock, 1000);

        assert_eq!(flow.prepare(&["a", "b", "c"], OrderMode::Random), PrepareOutcome::Prepared);
        assert_eq!(flow.phase(), Phase::Idle);
        assert_eq!(flow.cursor(), 0);
        assert_eq!(flow.pending_timer(), None);
        assert_eq!(flow.started_at(), None);

        assert_eq!(flow.prepare(&["x", "y"], OrderMode::Random), PrepareOutcome::Prepared);
        assert_eq!(flow.total_words(), 2);
    }

    #[test]
    fn tempo_change_applies_to_next_arm() {
        let (mut flow, clock) = engine(1.0);
        flow.prepare(&["a", "b", "c"], OrderMode::Sequential);
        flow.play();
        flow.set_tempo(Tempo::new(2.0).unwrap());

        assert_matches!(tick(&mut flow, &clock, 1000), Some(AdvanceOutcome::Advanced { cursor: 1 }));
        assert_eq!(tick(&mut flow, &clock, 1000), None);
        assert_matches!(tick(&mut flow, &clock, 1000), Some(AdvanceOutcome::Advanced { cursor: 2 }));
    }

    #[test]
    fn wall_clock_step_back_keeps_tempo() {
        let (mut flow, clock) = engine(1.0);
        flow.prepare(&["a", "b", "c"], OrderMode::Sequential);
        flow.play();
        clock.rewind(Duration::from_secs(3600));

        let mut fired = Vec::new();
        for _ in 0..120 {
            if let Some(outcome) = tick(&mut flow, &clock, 25) {
                fired.push(outcome);
            }
        }

        assert_eq!(
            fired,
            vec![
                AdvanceOutcome::Advanced { cursor: 1 },
                AdvanceOutcome::Advanced { cursor: 2 },
                AdvanceOutcome::Finished,
            ]
        );
        // wall timestamps now run backwards, so the session cannot be scored
        assert_eq!(flow.metrics(), None);
    }

    #[test]
    fn finished_session_keeps_its_target_tempo() {
        let (mut flow, clock) = engine(1.0);
        flow.prepare(&["a", "b"], OrderMode::Sequential);
        flow.play();
        flow.set_tempo(Tempo::new(2.0).unwrap());
        tick(&mut flow, &clock, 1000);
        tick(&mut flow, &clock, 2000);
        assert_eq!(flow.phase(), Phase::Finished);

        let metrics = flow.metrics().unwrap();
        assert_eq!(metrics.target_wpm, 60);
        assert_eq!(metrics.target_tempo_secs, 1.0);

        flow.set_tempo(Tempo::new(0.5).unwrap());
        assert_eq!(flow.metrics(), Some(metrics));

        // a restart picks up the new tempo
        flow.play();
        tick(&mut flow, &clock, 500);
        tick(&mut flow, &clock, 500);
        assert_eq!(flow.metrics().unwrap().target_wpm, 120);
    }

    #[test]
    fn clock_anomaly_yields_no_metrics() {
        let (mut flow, clock) = engine(1.0);
        flow.prepare(&["a"], OrderMode::Sequential);
        flow.play();
        clock.advance(Duration::from_secs(1));
        flow.poll();
        assert_eq!(flow.phase(), Phase::Finished);
        assert!(flow.metrics().is_some());

        flow.stop();
        flow.play();
        let token = flow.pending_timer().unwrap();
        clock.rewind(Duration::from_secs(30));
        assert_eq!(flow.advance(token), AdvanceOutcome::Finished);
        assert_eq!(flow.metrics(), None);
    }

    #[test]
    fn snapshot_reflects_state() {
        let (mut flow, clock) = engine(1.0);
        flow.prepare(&["le", "de"], OrderMode::Sequential);
        flow.play();
        tick(&mut flow, &clock, 1000);

        let snap = flow.snapshot();
        assert_eq!(
            snap,
            Snapshot {
                phase: Phase::Playing,
                current_word: "de".to_string(),
                cursor: 1,
                total_words: 2,
                progress_percent: 50,
                metrics: None,
            }
        );
    }
}
