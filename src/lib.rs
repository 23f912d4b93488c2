// Library surface for headless/integration tests and reuse.
// Terminal rendering and argument parsing stay in main.rs.
pub mod app_dirs;
pub mod clock;
pub mod config;
pub mod controls;
pub mod engine;
pub mod error;
pub mod history;
pub mod metrics;
pub mod runtime;
pub mod session;
pub mod shuffle;
pub mod util;
pub mod word_lists;

pub use engine::WordFlow;
pub use error::{Error, Result};
