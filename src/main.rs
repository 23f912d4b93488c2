mod ui;

use chrono::Utc;
use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    fs::OpenOptions,
    io::{self, stdin},
};
use tracing_subscriber::EnvFilter;
use wordflow::{
    app_dirs::AppDirs,
    config::{CustomListStore, FileConfigStore, FontSize, Settings, SettingsStore},
    controls::{self, Dispatch},
    engine::AdvanceOutcome,
    history::{ProgressStats, SessionDb, SessionRecord},
    metrics::{estimated_time, Tempo},
    runtime::{CrosstermEventSource, FixedTicker, FlowEvent, Runner},
    session::OrderMode,
    word_lists::{self, WordList, DEFAULT_LIST_ID},
    WordFlow,
};

/// reading fluency trainer: flashes words at a steady tempo and scores the session
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Shows a word list one word at a time at a fixed tempo to build automatic word recognition, then reports reading rate, efficiency against the target tempo, and a reading level."
)]
pub struct Cli {
    /// seconds each word stays on screen (0.5 - 10, step 0.1)
    #[clap(short = 't', long)]
    tempo: Option<f64>,

    /// order in which words are shown
    #[clap(short = 'm', long, value_enum)]
    mode: Option<OrderMode>,

    /// id of the word list to read (see --lists)
    #[clap(short = 'l', long)]
    list: Option<String>,

    /// read these words instead of a saved list (separated by commas, semicolons or newlines)
    #[clap(short = 'w', long)]
    words: Option<String>,

    /// save the --words list as a custom list under this name
    #[clap(long, requires = "words")]
    save_as: Option<String>,

    /// how widely the word is spread across the screen
    #[clap(long, value_enum)]
    font_size: Option<FontSize>,

    /// print the available word lists and exit
    #[clap(long)]
    lists: bool,

    /// print reading progress across past sessions and exit
    #[clap(long)]
    stats: bool,
}

impl Cli {
    /// Fold command line overrides into the persisted settings.
    fn apply_to(&self, settings: &mut Settings) {
        if let Some(tempo) = self.tempo {
            settings.tempo = Tempo::clamped(tempo);
        }
        if let Some(mode) = self.mode {
            settings.display_mode = mode;
        }
        if let Some(ref list) = self.list {
            settings.selected_list = list.clone();
        }
        if let Some(font_size) = self.font_size {
            settings.font_size = font_size;
        }
    }
}

pub struct App {
    pub flow: WordFlow,
    pub settings: Settings,
    pub list: WordList,
    pub history: Option<SessionDb>,
    pub progress: Option<ProgressStats>,
}

impl App {
    pub fn new(settings: Settings, list: WordList) -> Self {
        let mut flow =
            WordFlow::with_system_clock(settings.tempo).with_thresholds(settings.thresholds);
        flow.prepare(&list.words, settings.display_mode);

        let history = match SessionDb::new() {
            Ok(db) => Some(db),
            Err(err) => {
                tracing::warn!(%err, "session history unavailable");
                None
            }
        };
        let progress = history.as_ref().and_then(|db| db.progress().ok().flatten());

        Self {
            flow,
            settings,
            list,
            history,
            progress,
        }
    }

    /// React to the advance timer; true when the screen needs a redraw.
    pub fn on_advance(&mut self, advanced: Option<AdvanceOutcome>) -> bool {
        match advanced {
            Some(AdvanceOutcome::Finished) => {
                self.record_session();
                true
            }
            Some(AdvanceOutcome::Advanced { .. }) => true,
            Some(AdvanceOutcome::Ignored) | None => false,
        }
    }

    fn record_session(&mut self) {
        let (Some(db), Some(metrics)) = (self.history.as_ref(), self.flow.metrics()) else {
            return;
        };
        let record = SessionRecord::from_metrics(
            Utc::now(),
            &self.list.id,
            self.settings.display_mode,
            &metrics,
        );
        if let Err(err) = db.record(&record) {
            tracing::warn!(%err, "could not record session");
        }
        self.progress = db.progress().ok().flatten();
    }
}

fn init_tracing() {
    let Some(path) = AppDirs::log_path() else {
        return;
    };
    if let Some(parent) = path.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("WORDFLOW_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
}

fn print_lists(settings: &Settings, custom: &[WordList]) {
    let lists = word_lists::builtin_lists();
    for list in lists.iter().chain(custom) {
        let marker = if list.id == settings.selected_list { "*" } else { " " };
        let estimate = estimated_time(list.words.len(), settings.tempo.secs());
        println!(
            "{marker} {:<20} {:<32} {:>3} words  ~{}",
            list.id,
            list.name,
            list.words.len(),
            estimate.formatted
        );
    }
}

fn print_stats() -> Result<(), Box<dyn Error>> {
    let db = SessionDb::new()?;
    match db.progress()? {
        None => println!("no finished sessions yet"),
        Some(stats) => {
            println!("sessions:     {}", stats.total_sessions);
            println!("average wpm:  {}", stats.average_wpm);
            println!("best wpm:     {}", stats.best_wpm);
            println!(
                "recent wpm:   {} ({}, {:+})",
                stats.recent_average, stats.trend, stats.improvement
            );
            println!(
                "consistency:  {} ({}, sd {:.1})",
                stats.consistency.score, stats.consistency.label, stats.consistency.std_dev
            );
        }
    }
    Ok(())
}

/// Pick the word list for this run, saving ad-hoc words when asked to.
fn resolve_list(
    cli: &Cli,
    settings: &mut Settings,
    store: &FileConfigStore,
    custom: &[WordList],
) -> Result<WordList, Box<dyn Error>> {
    if let Some(ref text) = cli.words {
        return match cli.save_as {
            Some(ref name) => {
                let list = WordList::custom(name, text, Utc::now())?;
                store.add_list(list.clone())?;
                settings.selected_list = list.id.clone();
                Ok(list)
            }
            None => Ok(WordList {
                id: "adhoc".to_string(),
                name: "command line".to_string(),
                description: String::new(),
                level: String::new(),
                target_tempo: None,
                words: word_lists::parse_words(text)?,
                is_custom: true,
                created: None,
            }),
        };
    }

    match word_lists::resolve(&settings.selected_list, custom) {
        Ok(list) => Ok(list),
        Err(err) if cli.list.is_some() => Err(err.into()),
        Err(err) => {
            tracing::warn!(%err, "falling back to the default list");
            settings.selected_list = DEFAULT_LIST_ID.to_string();
            Ok(word_lists::resolve(DEFAULT_LIST_ID, custom)?)
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing();

    let store = FileConfigStore::new();
    let mut settings = store.load();
    let custom = store.load_lists();
    cli.apply_to(&mut settings);

    if cli.lists {
        print_lists(&settings, &custom);
        return Ok(());
    }
    if cli.stats {
        return print_stats();
    }

    let list = resolve_list(&cli, &mut settings, &store, &custom)?;
    if let Err(err) = store.save(&settings) {
        tracing::warn!(%err, "could not save settings");
    }

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(settings, list);
    let result = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(CrosstermEventSource::new(), FixedTicker::default());

    terminal.draw(|f| ui::draw(app, f))?;

    loop {
        let step = runner.pump(&mut app.flow);
        let advanced = app.on_advance(step.advanced);

        let redraw = match step.event {
            FlowEvent::Tick => false,
            FlowEvent::Resize => true,
            FlowEvent::Key(key) => match controls::command_for(key) {
                Some(command) => {
                    if controls::dispatch(&mut app.flow, command) == Dispatch::Quit {
                        break;
                    }
                    true
                }
                None => false,
            },
        };

        if redraw || advanced {
            terminal.draw(|f| ui::draw(app, f))?;
        }
    }

    Ok(())
}
