pub mod screen;

use itertools::Itertools;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;
use wordflow::{controls::LEGEND, metrics::Metrics, session::Phase};

use crate::App;

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 2;

pub fn draw(app: &App, f: &mut Frame) {
    screen::current_screen(app.flow.phase()).render(app, f);
}

/// Put `spacing` blanks between letters, unless that no longer fits in `width`.
fn spread(word: &str, spacing: usize, width: u16) -> String {
    let gap = " ".repeat(spacing);
    let spread = word.chars().map(String::from).join(&gap);
    if spread.width() <= width as usize {
        spread
    } else {
        word.to_string()
    }
}

fn legend(app: &App) -> Line<'static> {
    let text = LEGEND
        .iter()
        .filter(|(key, _)| *key != "s" || app.flow.can_shuffle())
        .map(|(key, action)| format!("{key} {action}"))
        .join("  ·  ");
    Line::from(Span::styled(text, Style::default().add_modifier(Modifier::DIM)))
}

pub struct ReadingView<'a>(pub &'a App);

impl Widget for ReadingView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let app = self.0;
        let flow = &app.flow;
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let dim_style = Style::default().add_modifier(Modifier::DIM);

        let progress_lines = if app.settings.show_progress { 1 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints([
                Constraint::Min(1),                 // spacer
                Constraint::Length(1),              // word
                Constraint::Min(1),                 // spacer
                Constraint::Length(progress_lines), // gauge
                Constraint::Length(1),              // status
                Constraint::Length(1),              // legend
            ])
            .split(area);

        let word_style = match flow.phase() {
            Phase::Playing => bold_style.fg(Color::White),
            Phase::Paused => bold_style.fg(Color::Yellow),
            Phase::Idle | Phase::Finished => bold_style.add_modifier(Modifier::DIM),
        };
        let word = spread(
            flow.current_word(),
            app.settings.font_size.letter_spacing(),
            chunks[1].width,
        );
        Paragraph::new(Span::styled(word, word_style))
            .alignment(Alignment::Center)
            .render(chunks[1], buf);

        if app.settings.show_progress {
            Gauge::default()
                .gauge_style(Style::default().fg(Color::Magenta))
                .percent(flow.progress_percent() as u16)
                .render(chunks[3], buf);
        }

        let position = if flow.total_words() == 0 {
            0
        } else {
            flow.cursor() + 1
        };
        let status = format!(
            "{}  ·  {}/{}  ·  {:.1}s ({} wpm)  ·  {}  ·  {}",
            flow.phase(),
            position,
            flow.total_words(),
            flow.tempo().secs(),
            flow.tempo().words_per_minute(),
            flow.order_mode(),
            app.list.name,
        );
        Paragraph::new(Span::styled(status, dim_style))
            .alignment(Alignment::Center)
            .render(chunks[4], buf);

        Paragraph::new(legend(app))
            .alignment(Alignment::Center)
            .render(chunks[5], buf);
    }
}

fn metric_lines(metrics: &Metrics) -> Vec<Line<'static>> {
    let label = Style::default().add_modifier(Modifier::DIM);
    let value = Style::default().add_modifier(Modifier::BOLD);
    let row = |name: &str, text: String| {
        Line::from(vec![
            Span::styled(format!("{name:>18}  "), label),
            Span::styled(text, value),
        ])
    };

    vec![
        row("duration", metrics.formatted_duration.clone()),
        row(
            "words per minute",
            format!("{} (target {})", metrics.actual_wpm, metrics.target_wpm),
        ),
        row("efficiency", format!("{}%", metrics.efficiency_percent)),
        row(
            "seconds per word",
            format!(
                "{:.2} (±{:.2})",
                metrics.average_secs_per_word, metrics.tempo_variance_secs
            ),
        ),
        row(
            "reading level",
            format!(
                "{} - {}",
                metrics.reading_level,
                metrics.reading_level.description()
            ),
        ),
        row(
            "rating",
            format!("{} - {}", metrics.rating, metrics.rating.description()),
        ),
    ]
}

pub struct ResultsView<'a>(pub &'a App);

impl Widget for ResultsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let app = self.0;
        let title_style = Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD);

        let mut lines = vec![
            Line::from(Span::styled(
                format!("{} - {} words", app.list.name, app.flow.total_words()),
                title_style,
            )),
            Line::default(),
        ];

        match app.flow.metrics() {
            Some(metrics) => lines.extend(metric_lines(&metrics)),
            None => lines.push(Line::from(Span::styled(
                "no metrics for this session (the system clock moved)",
                Style::default().fg(Color::Yellow),
            ))),
        }

        if let Some(ref progress) = app.progress {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!(
                    "{} sessions · average {} wpm · best {} · {}",
                    progress.total_sessions,
                    progress.average_wpm,
                    progress.best_wpm,
                    progress.trend
                ),
                Style::default().add_modifier(Modifier::ITALIC),
            )));
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(chunks[0], buf);

        Paragraph::new(Line::from(Span::styled(
            "esc back to start  ·  q quit",
            Style::default().add_modifier(Modifier::DIM),
        )))
        .alignment(Alignment::Center)
        .render(chunks[1], buf);
    }
}
