use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::clock::Clock;
use crate::engine::{ShuffleOutcome, WordFlow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    PlayPause,
    Stop,
    Shuffle,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Continue,
    Quit,
}

/// Key legend shown under the word, in display order.
pub const LEGEND: &[(&str, &str)] = &[
    ("space", "play/pause"),
    ("esc", "stop"),
    ("s", "shuffle"),
    ("q", "quit"),
];

/// Map a terminal key press to an engine command.
pub fn command_for(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Char(' ') => Some(Command::PlayPause),
        KeyCode::Esc => Some(Command::Stop),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::Shuffle),
        KeyCode::Char('q') => Some(Command::Quit),
        _ => None,
    }
}

pub fn dispatch<C: Clock>(flow: &mut WordFlow<C>, command: Command) -> Dispatch {
    match command {
        Command::PlayPause => {
            flow.toggle_play_pause();
        }
        Command::Stop => flow.stop(),
        Command::Shuffle => {
            if flow.shuffle() == ShuffleOutcome::Rejected {
                tracing::debug!("shuffle key pressed in sequential order");
            }
        }
        Command::Quit => return Dispatch::Quit,
    }
    Dispatch::Continue
}
