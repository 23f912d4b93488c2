use ratatui::Frame;
use wordflow::session::Phase;

use crate::{
    ui::{ReadingView, ResultsView},
    App,
};

/// A UI Screen boundary: responsible for rendering one phase of the session
pub trait Screen {
    fn render(&self, app: &App, f: &mut Frame);
}

/// Word display while idle, playing or paused
pub struct ReadingScreen;

impl Screen for ReadingScreen {
    fn render(&self, app: &App, f: &mut Frame) {
        f.render_widget(ReadingView(app), f.area());
    }
}

/// Session summary once the list has played through
pub struct ResultsScreen;

impl Screen for ResultsScreen {
    fn render(&self, app: &App, f: &mut Frame) {
        f.render_widget(ResultsView(app), f.area());
    }
}

pub fn current_screen(phase: Phase) -> Box<dyn Screen> {
    match phase {
        Phase::Idle | Phase::Playing | Phase::Paused => Box::new(ReadingScreen),
        Phase::Finished => Box::new(ResultsScreen),
    }
}
