//! Finished-session log and progress statistics across sessions.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use rusqlite::types::Type;
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};

use crate::app_dirs::AppDirs;
use crate::error::Result;
use crate::metrics::Metrics;
use crate::session::OrderMode;
use crate::util::{mean, round_to, std_dev};

/// How many of the latest sessions make up the "recent" average.
const RECENT_WINDOW: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct SessionRecord {
    pub finished_at: DateTime<Utc>,
    pub list_id: String,
    pub order_mode: OrderMode,
    pub word_count: usize,
    pub tempo_secs: f64,
    pub duration_ms: u64,
    pub actual_wpm: u32,
    pub efficiency_percent: u32,
}

impl SessionRecord {
    pub fn from_metrics(
        finished_at: DateTime<Utc>,
        list_id: &str,
        order_mode: OrderMode,
        metrics: &Metrics,
    ) -> Self {
        Self {
            finished_at,
            list_id: list_id.to_string(),
            order_mode,
            word_count: metrics.total_words,
            tempo_secs: metrics.target_tempo_secs,
            duration_ms: metrics.duration_ms,
            actual_wpm: metrics.actual_wpm,
            efficiency_percent: metrics.efficiency_percent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Trend {
    Improving,
    Declining,
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum ConsistencyLabel {
    VeryRegular,
    FairlyRegular,
    Irregular,
    VeryIrregular,
    InsufficientData,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Consistency {
    pub score: u32,
    pub label: ConsistencyLabel,
    pub std_dev: f64,
    pub coefficient_of_variation: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressStats {
    pub total_sessions: usize,
    pub average_wpm: u32,
    pub best_wpm: u32,
    pub recent_average: u32,
    pub trend: Trend,
    pub improvement: i64,
    pub consistency: Consistency,
}

/// Score reading-rate regularity: 100 minus the coefficient of variation.
pub fn consistency(values: &[f64]) -> Consistency {
    if values.len() < 2 {
        return Consistency {
            score: 100,
            label: ConsistencyLabel::InsufficientData,
            std_dev: 0.0,
            coefficient_of_variation: 0.0,
        };
    }

    let avg = mean(values).unwrap_or_default();
    let sd = std_dev(values).unwrap_or_default();
    let cv = if avg == 0.0 { 0.0 } else { sd / avg * 100.0 };
    let score = (100.0 - cv).round().max(0.0) as u32;

    let label = if score >= 80 {
        ConsistencyLabel::VeryRegular
    } else if score >= 60 {
        ConsistencyLabel::FairlyRegular
    } else if score >= 40 {
        ConsistencyLabel::Irregular
    } else {
        ConsistencyLabel::VeryIrregular
    };

    Consistency {
        score,
        label,
        std_dev: round_to(sd, 1),
        coefficient_of_variation: round_to(cv, 1),
    }
}

/// Summarise reading rates given oldest first. `None` for an empty history.
pub fn progress_stats(wpm_history: &[u32]) -> Option<ProgressStats> {
    let values: Vec<f64> = wpm_history.iter().map(|&w| w as f64).collect();
    let average = mean(&values)?.round() as u32;
    let recent = &values[values.len().saturating_sub(RECENT_WINDOW)..];
    let recent_average = mean(recent)?.round() as u32;

    let trend = match recent_average.cmp(&average) {
        std::cmp::Ordering::Greater => Trend::Improving,
        std::cmp::Ordering::Less => Trend::Declining,
        std::cmp::Ordering::Equal => Trend::Stable,
    };

    Some(ProgressStats {
        total_sessions: values.len(),
        average_wpm: average,
        best_wpm: wpm_history.iter().copied().max().unwrap_or_default(),
        recent_average,
        trend,
        improvement: recent_average as i64 - average as i64,
        consistency: consistency(&values),
    })
}

/// SQLite-backed log of finished sessions
#[derive(Debug)]
pub struct SessionDb {
    conn: Connection,
}

impl SessionDb {
    /// Open the default database under the state directory.
    pub fn new() -> Result<Self> {
        let path = AppDirs::db_path().unwrap_or_else(|| PathBuf::from("wordflow_history.db"));
        Self::open(path)
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        Self::init(conn)
    }

    pub fn in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS sessions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                finished_at TEXT NOT NULL,
                list_id TEXT NOT NULL,
                order_mode TEXT NOT NULL,
                word_count INTEGER NOT NULL,
                tempo_secs REAL NOT NULL,
                duration_ms INTEGER NOT NULL,
                actual_wpm INTEGER NOT NULL,
                efficiency_percent INTEGER NOT NULL
            )
            "#,
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_sessions_finished_at ON sessions(finished_at)",
            [],
        )?;

        Ok(Self { conn })
    }

    pub fn record(&self, session: &SessionRecord) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO sessions
            (finished_at, list_id, order_mode, word_count, tempo_secs, duration_ms, actual_wpm, efficiency_percent)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            params![
                session.finished_at.to_rfc3339(),
                session.list_id,
                session.order_mode.to_string(),
                session.word_count as i64,
                session.tempo_secs,
                session.duration_ms as i64,
                session.actual_wpm,
                session.efficiency_percent,
            ],
        )?;
        tracing::debug!(list = %session.list_id, wpm = session.actual_wpm, "session recorded");
        Ok(())
    }

    /// All sessions, oldest first.
    pub fn sessions(&self) -> Result<Vec<SessionRecord>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT finished_at, list_id, order_mode, word_count, tempo_secs, duration_ms, actual_wpm, efficiency_percent
            FROM sessions
            ORDER BY finished_at ASC, id ASC
            "#,
        )?;

        let rows = stmt.query_map([], |row| {
            let finished_at: String = row.get(0)?;
            let finished_at = DateTime::parse_from_rfc3339(&finished_at)
                .map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e)))?
                .with_timezone(&Utc);
            let order_mode: String = row.get(2)?;
            let order_mode = OrderMode::from_str(&order_mode, true)
                .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, e.into()))?;

            Ok(SessionRecord {
                finished_at,
                list_id: row.get(1)?,
                order_mode,
                word_count: row.get::<_, i64>(3)? as usize,
                tempo_secs: row.get(4)?,
                duration_ms: row.get::<_, i64>(5)? as u64,
                actual_wpm: row.get(6)?,
                efficiency_percent: row.get(7)?,
            })
        })?;

        let mut sessions = Vec::new();
        for row in rows {
            sessions.push(row?);
        }
        Ok(sessions)
    }

    pub fn last_session(&self) -> Result<Option<SessionRecord>> {
        Ok(self.sessions()?.pop())
    }

    pub fn progress(&self) -> Result<Option<ProgressStats>> {
        let wpm: Vec<u32> = self.sessions()?.iter().map(|s| s.actual_wpm).collect();
        Ok(progress_stats(&wpm))
    }

    pub fn clear(&self) -> Result<()> {
        self.conn.execute("DELETE FROM sessions", [])?;
        Ok(())
    }
}
