//! Post-session reading metrics and tempo arithmetic.
//!
//! Everything here is pure: the same inputs always give the same
//! [`Metrics`], and nothing reads the clock.

use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::util::round_to;

pub const TEMPO_MIN: f64 = 0.5;
pub const TEMPO_MAX: f64 = 10.0;
pub const TEMPO_STEP: f64 = 0.1;
pub const TEMPO_DEFAULT: f64 = 1.2;

/// Display duration per word, in seconds, within `TEMPO_MIN..=TEMPO_MAX`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Tempo(f64);

impl Tempo {
    /// Strict constructor: rejects values outside the supported range.
    pub fn new(secs: f64) -> crate::Result<Self> {
        if secs.is_finite() && (TEMPO_MIN..=TEMPO_MAX).contains(&secs) {
            Ok(Self(secs))
        } else {
            Err(crate::Error::InvalidTempo(secs))
        }
    }

    /// Lenient constructor for values read from disk or the command line:
    /// clamps into range and snaps to the 0.1 s step.
    pub fn clamped(secs: f64) -> Self {
        if !secs.is_finite() {
            return Self::default();
        }
        let snapped = round_to(secs / TEMPO_STEP, 0) * TEMPO_STEP;
        Self(round_to(snapped.clamp(TEMPO_MIN, TEMPO_MAX), 1))
    }

    pub fn secs(self) -> f64 {
        self.0
    }

    pub fn as_duration(self) -> Duration {
        Duration::from_secs_f64(self.0)
    }

    pub fn words_per_minute(self) -> u32 {
        tempo_to_wpm(self.0)
    }
}

impl Default for Tempo {
    fn default() -> Self {
        Self(TEMPO_DEFAULT)
    }
}

impl From<f64> for Tempo {
    fn from(secs: f64) -> Self {
        Self::clamped(secs)
    }
}

impl From<Tempo> for f64 {
    fn from(tempo: Tempo) -> Self {
        tempo.0
    }
}

/// Words per minute implied by a tempo; 0 for non-positive tempos.
pub fn tempo_to_wpm(tempo_secs: f64) -> u32 {
    if tempo_secs <= 0.0 {
        return 0;
    }
    (60.0 / tempo_secs).round() as u32
}

/// Tempo (seconds per word, 2 decimals) for a words-per-minute rate.
/// Non-positive rates map to the slowest tempo.
pub fn wpm_to_tempo(wpm: f64) -> f64 {
    if wpm <= 0.0 {
        return TEMPO_MAX;
    }
    round_to(60.0 / wpm, 2)
}

/// `"m:ss"` from one minute up, `"Ns"` below.
pub fn format_duration(ms: u64) -> String {
    let total_secs = ms / 1000;
    let minutes = total_secs / 60;
    let secs = total_secs % 60;

    if minutes > 0 {
        format!("{minutes}:{secs:02}")
    } else {
        format!("{secs}s")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EstimatedTime {
    pub seconds: u64,
    pub formatted: String,
}

/// How long a list takes to play through at `tempo_secs` per word.
pub fn estimated_time(word_count: usize, tempo_secs: f64) -> EstimatedTime {
    if word_count == 0 || tempo_secs <= 0.0 {
        return EstimatedTime {
            seconds: 0,
            formatted: "0s".to_string(),
        };
    }

    let total_secs = word_count as f64 * tempo_secs;
    EstimatedTime {
        seconds: total_secs.round() as u64,
        formatted: format_duration((total_secs * 1000.0) as u64),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
pub enum ReadingLevel {
    Expert,
    Advanced,
    OnLevel,
    Approaching,
    Developing,
    Beginning,
}

impl ReadingLevel {
    pub fn description(self) -> &'static str {
        match self {
            ReadingLevel::Expert => "very fluent reading",
            ReadingLevel::Advanced => "fluent reading",
            ReadingLevel::OnLevel => "grade level reached",
            ReadingLevel::Approaching => "good progress",
            ReadingLevel::Developing => "still learning",
            ReadingLevel::Beginning => "just getting started",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
pub enum PerformanceRating {
    Excellent,
    VeryGood,
    Good,
    NeedsWork,
    Beginning,
}

impl PerformanceRating {
    pub fn description(self) -> &'static str {
        match self {
            PerformanceRating::Excellent => "target met or beaten",
            PerformanceRating::VeryGood => "close to the target",
            PerformanceRating::Good => "solid progress",
            PerformanceRating::NeedsWork => "keep practising",
            PerformanceRating::Beginning => "keep at it",
        }
    }
}

/// Minimum words per minute for each reading level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelThresholds {
    pub expert: u32,
    pub advanced: u32,
    pub on_level: u32,
    pub approaching: u32,
    pub developing: u32,
}

impl Default for LevelThresholds {
    fn default() -> Self {
        Self {
            expert: 120,
            advanced: 75,
            on_level: 50,
            approaching: 40,
            developing: 30,
        }
    }
}

impl LevelThresholds {
    pub fn classify(&self, wpm: u32) -> ReadingLevel {
        if wpm >= self.expert {
            ReadingLevel::Expert
        } else if wpm >= self.advanced {
            ReadingLevel::Advanced
        } else if wpm >= self.on_level {
            ReadingLevel::OnLevel
        } else if wpm >= self.approaching {
            ReadingLevel::Approaching
        } else if wpm >= self.developing {
            ReadingLevel::Developing
        } else {
            ReadingLevel::Beginning
        }
    }
}

/// Minimum efficiency percentage for each rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingThresholds {
    pub excellent: u32,
    pub very_good: u32,
    pub good: u32,
    pub needs_work: u32,
}

impl Default for RatingThresholds {
    fn default() -> Self {
        Self {
            excellent: 100,
            very_good: 80,
            good: 60,
            needs_work: 40,
        }
    }
}

impl RatingThresholds {
    pub fn classify(&self, efficiency_percent: u32) -> PerformanceRating {
        if efficiency_percent >= self.excellent {
            PerformanceRating::Excellent
        } else if efficiency_percent >= self.very_good {
            PerformanceRating::VeryGood
        } else if efficiency_percent >= self.good {
            PerformanceRating::Good
        } else if efficiency_percent >= self.needs_work {
            PerformanceRating::NeedsWork
        } else {
            PerformanceRating::Beginning
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub reading_level: LevelThresholds,
    pub rating: RatingThresholds,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    pub duration_ms: u64,
    pub duration_secs: u64,
    pub duration_minutes: f64,
    pub formatted_duration: String,
    pub actual_wpm: u32,
    pub target_wpm: u32,
    pub efficiency_percent: u32,
    pub average_secs_per_word: f64,
    pub tempo_variance_secs: f64,
    pub total_words: usize,
    pub target_tempo_secs: f64,
    pub reading_level: ReadingLevel,
    pub rating: PerformanceRating,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricsError {
    /// The end timestamp precedes the start, e.g. after the wall clock was set back.
    #[error("session ended {skew_ms} ms before it started")]
    ClockAnomaly { skew_ms: u128 },
}

/// Metrics with the default level and rating thresholds.
pub fn compute_metrics(
    started_at: Option<SystemTime>,
    ended_at: Option<SystemTime>,
    word_count: usize,
    target_tempo_secs: f64,
) -> Result<Option<Metrics>, MetricsError> {
    compute_metrics_with(
        started_at,
        ended_at,
        word_count,
        target_tempo_secs,
        &Thresholds::default(),
    )
}

/// Summarise a finished session.
///
/// `Ok(None)` when either timestamp is missing or there were no words.
pub fn compute_metrics_with(
    started_at: Option<SystemTime>,
    ended_at: Option<SystemTime>,
    word_count: usize,
    target_tempo_secs: f64,
    thresholds: &Thresholds,
) -> Result<Option<Metrics>, MetricsError> {
    let (Some(started_at), Some(ended_at)) = (started_at, ended_at) else {
        return Ok(None);
    };
    if word_count == 0 {
        return Ok(None);
    }

    let duration = ended_at
        .duration_since(started_at)
        .map_err(|e| MetricsError::ClockAnomaly {
            skew_ms: e.duration().as_millis(),
        })?;

    let duration_ms = duration.as_millis() as u64;
    let duration_secs_f = duration_ms as f64 / 1000.0;
    let duration_minutes = duration_secs_f / 60.0;

    let actual_wpm = if duration_ms == 0 {
        0
    } else {
        (word_count as f64 / duration_minutes).round() as u32
    };
    let target_wpm = tempo_to_wpm(target_tempo_secs);
    let efficiency_percent = if target_wpm == 0 {
        0
    } else {
        (actual_wpm as f64 / target_wpm as f64 * 100.0).round() as u32
    };

    let average_secs_per_word = duration_secs_f / word_count as f64;
    let tempo_variance_secs = (average_secs_per_word - target_tempo_secs).abs();

    Ok(Some(Metrics {
        duration_ms,
        duration_secs: duration_secs_f.round() as u64,
        duration_minutes: round_to(duration_minutes, 2),
        formatted_duration: format_duration(duration_ms),
        actual_wpm,
        target_wpm,
        efficiency_percent,
        average_secs_per_word: round_to(average_secs_per_word, 2),
        tempo_variance_secs: round_to(tempo_variance_secs, 2),
        total_words: word_count,
        target_tempo_secs,
        reading_level: thresholds.reading_level.classify(actual_wpm),
        rating: thresholds.rating.classify(efficiency_percent),
    }))
}
