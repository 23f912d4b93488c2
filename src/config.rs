use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app_dirs::AppDirs;
use crate::error::Result;
use crate::metrics::{Tempo, Thresholds};
use crate::session::OrderMode;
use crate::word_lists::{WordList, DEFAULT_LIST_ID};

const SETTINGS_FILE: &str = "settings.json";
const CUSTOM_LISTS_FILE: &str = "custom_lists.json";

/// Word size on screen. The terminal cannot scale glyphs, so larger sizes
/// spread the letters out instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Xs,
    Sm,
    Md,
    #[default]
    Lg,
    Xl,
    Xxl,
}

impl FontSize {
    pub fn letter_spacing(self) -> usize {
        match self {
            FontSize::Xs | FontSize::Sm => 0,
            FontSize::Md | FontSize::Lg => 1,
            FontSize::Xl => 2,
            FontSize::Xxl => 3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub tempo: Tempo,
    pub display_mode: OrderMode,
    pub font_size: FontSize,
    pub selected_list: String,
    pub show_progress: bool,
    pub thresholds: Thresholds,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tempo: Tempo::default(),
            display_mode: OrderMode::Sequential,
            font_size: FontSize::default(),
            selected_list: DEFAULT_LIST_ID.to_string(),
            show_progress: true,
            thresholds: Thresholds::default(),
        }
    }
}

pub trait SettingsStore {
    fn load(&self) -> Settings;
    fn save(&self, settings: &Settings) -> Result<()>;
}

pub trait CustomListStore {
    fn load_lists(&self) -> Vec<WordList>;
    fn save_lists(&self, lists: &[WordList]) -> Result<()>;

    /// Append a list, replacing any existing list with the same id.
    fn add_list(&self, list: WordList) -> Result<()> {
        let mut lists = self.load_lists();
        lists.retain(|l| l.id != list.id);
        lists.push(list);
        self.save_lists(&lists)
    }

    fn delete_list(&self, id: &str) -> Result<bool> {
        let mut lists = self.load_lists();
        let before = lists.len();
        lists.retain(|l| l.id != id);
        if lists.len() == before {
            return Ok(false);
        }
        self.save_lists(&lists)?;
        Ok(true)
    }
}

/// JSON files in one directory: the settings blob and the custom list array.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    dir: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Self {
        Self {
            dir: AppDirs::config_dir(),
        }
    }

    pub fn with_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn read_json<T: for<'de> Deserialize<'de>>(&self, file: &str) -> Option<T> {
        let path = self.dir.join(file);
        let bytes = fs::read(&path).ok()?;
        match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(%err, path = %path.display(), "ignoring unreadable config file");
                None
            }
        }
    }

    fn write_json<T: Serialize + ?Sized>(&self, file: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let data = serde_json::to_vec_pretty(value)?;
        fs::write(self.dir.join(file), data)?;
        Ok(())
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore for FileConfigStore {
    fn load(&self) -> Settings {
        self.read_json(SETTINGS_FILE).unwrap_or_default()
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        self.write_json(SETTINGS_FILE, settings)
    }
}

impl CustomListStore for FileConfigStore {
    fn load_lists(&self) -> Vec<WordList> {
        self.read_json(CUSTOM_LISTS_FILE).unwrap_or_default()
    }

    fn save_lists(&self, lists: &[WordList]) -> Result<()> {
        self.write_json(CUSTOM_LISTS_FILE, lists)
    }
}
