use std::time::Duration;

use chrono::{TimeZone, Utc};
use tempfile::TempDir;
use wordflow::clock::ManualClock;
use wordflow::config::{CustomListStore, FileConfigStore, FontSize, Settings, SettingsStore};
use wordflow::history::{SessionDb, SessionRecord, Trend};
use wordflow::metrics::Tempo;
use wordflow::session::OrderMode;
use wordflow::word_lists::{self, WordList};
use wordflow::WordFlow;

/// Play `list` to the end at `tempo_secs`, taking `secs_per_word` per word.
fn finished_record(list: &WordList, tempo_secs: f64, secs_per_word: f64, day: u32) -> SessionRecord {
    let clock = ManualClock::default();
    let mut flow = WordFlow::new(clock.clone(), Tempo::new(tempo_secs).unwrap());
    flow.prepare(&list.words, OrderMode::Sequential);
    flow.play();

    // the engine fires at its own tempo; extra wall time simulates a slow host
    let extra = Duration::from_secs_f64(secs_per_word - tempo_secs);
    while flow.metrics().is_none() {
        clock.advance(Duration::from_secs_f64(tempo_secs) + extra);
        flow.poll();
    }

    let metrics = flow.metrics().unwrap();
    SessionRecord::from_metrics(
        Utc.with_ymd_and_hms(2024, 9, day, 8, 30, 0).unwrap(),
        &list.id,
        flow.order_mode(),
        &metrics,
    )
}

#[test]
fn settings_and_custom_lists_survive_a_restart() {
    let dir = TempDir::new().unwrap();
    let store = FileConfigStore::with_dir(dir.path());

    // nothing on disk yet
    assert_eq!(store.load(), Settings::default());
    assert!(store.load_lists().is_empty());

    let list = WordList::custom(
        "animaux",
        "chat, chien;\nlapin\n\n",
        Utc.with_ymd_and_hms(2024, 9, 1, 0, 0, 0).unwrap(),
    )
    .unwrap();
    store.add_list(list.clone()).unwrap();

    let settings = Settings {
        tempo: Tempo::new(2.5).unwrap(),
        display_mode: OrderMode::Random,
        font_size: FontSize::Xl,
        selected_list: list.id.clone(),
        ..Settings::default()
    };
    store.save(&settings).unwrap();

    let reopened = FileConfigStore::with_dir(dir.path());
    assert_eq!(reopened.load(), settings);

    let custom = reopened.load_lists();
    let resolved = word_lists::resolve(&reopened.load().selected_list, &custom).unwrap();
    assert_eq!(resolved.words, vec!["chat", "chien", "lapin"]);
    assert!(resolved.is_custom);

    assert!(reopened.delete_list(&list.id).unwrap());
    assert!(reopened.load_lists().is_empty());
    assert!(word_lists::resolve(&list.id, &reopened.load_lists()).is_err());
}

#[test]
fn finished_sessions_build_up_progress() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("state").join("history.db");
    let list = word_lists::resolve("mi_cp", &[]).unwrap();

    {
        let db = SessionDb::open(&db_path).unwrap();
        // 2 s, then 1.5 s, then 1 s per word: 30, 40, 60 wpm
        db.record(&finished_record(&list, 1.0, 2.0, 1)).unwrap();
        db.record(&finished_record(&list, 1.0, 1.5, 2)).unwrap();
        db.record(&finished_record(&list, 1.0, 1.0, 3)).unwrap();
    }

    let db = SessionDb::open(&db_path).unwrap();
    let sessions = db.sessions().unwrap();
    assert_eq!(sessions.len(), 3);
    assert!(sessions.iter().all(|s| s.list_id == "mi_cp"));
    assert_eq!(
        sessions.iter().map(|s| s.actual_wpm).collect::<Vec<_>>(),
        vec![30, 40, 60]
    );

    let last = db.last_session().unwrap().unwrap();
    assert_eq!(last.efficiency_percent, 100);
    assert_eq!(last.word_count, list.words.len());

    let progress = db.progress().unwrap().unwrap();
    assert_eq!(progress.total_sessions, 3);
    assert_eq!(progress.best_wpm, 60);
    assert_eq!(progress.average_wpm, 43);
    assert_eq!(progress.trend, Trend::Stable);
}
