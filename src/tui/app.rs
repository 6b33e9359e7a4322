//! Main TUI application state and logic

use chrono::Datelike;
use crossterm::event::KeyCode;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use tokio::sync::oneshot::{self, error::TryRecvError};

use crate::config::Settings;
use crate::finder::{FindError, FindOutcome, SearchState, TripFinder, SERVICE_UNREACHABLE_MESSAGE};
use crate::trip::ParameterField;
use crate::tui::screens::{FormScreen, ResultsScreen};
use crate::tui::widgets::HelpPopup;

/// Focused form element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Slider(ParameterField),
    Notes,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Slider(ParameterField::Distance),
        Focus::Slider(ParameterField::Terrain),
        Focus::Slider(ParameterField::BigMacIndex),
        Focus::Slider(ParameterField::SunnyWeatherChance),
        Focus::Notes,
    ];

    fn index(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

type PendingSearch = oneshot::Receiver<Result<FindOutcome, FindError>>;

/// Main application state
pub struct App {
    settings: Settings,
    focus: Focus,
    show_help: bool,

    // Screen states
    form: FormScreen,
    results: ResultsScreen,

    // Search state
    state: SearchState,
    pending: Option<PendingSearch>,
    tick: usize,
}

impl App {
    /// Create a new app instance
    pub fn new(settings: Settings) -> Self {
        let params = settings.form.initial_parameters();

        Self {
            settings,
            focus: Focus::Slider(ParameterField::Distance),
            show_help: false,
            form: FormScreen::new(params),
            results: ResultsScreen::new(),
            state: SearchState::Idle,
            pending: None,
            tick: 0,
        }
    }

    /// Draw the whole screen
    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header
                Constraint::Min(10),   // Form + results
                Constraint::Length(1), // Help
                Constraint::Length(1), // Footer
            ])
            .split(area);

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                "RCdeRC TRIP LOCATION FINDER",
                Style::default().fg(Color::Magenta).bold(),
            )),
            Line::from(Span::styled(
                "Official RCdeRC Trip Navigator",
                Style::default().fg(Color::Cyan).italic(),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        );
        frame.render_widget(header, chunks[0]);

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(chunks[1]);

        self.form
            .draw(frame, panes[0], self.focus, self.state.is_loading());
        self.results
            .draw(frame, panes[1], &self.state, &self.settings, self.tick);

        let help = Paragraph::new(Line::from(vec![
            Span::styled(" ↑/↓ ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Field  "),
            Span::styled(" ←/→ ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Adjust  "),
            Span::styled(" Enter ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Find  "),
            Span::styled(" ? ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Help  "),
            Span::styled(" Esc ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Quit"),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(help, chunks[2]);

        let footer = Paragraph::new(format!(
            "Ride the light • RCdeRC • {} • Est. Rotterdam",
            chrono::Local::now().year()
        ))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[3]);

        if self.show_help {
            HelpPopup::draw(frame, area);
        }
    }

    /// Handle key input
    pub fn handle_key(&mut self, key: KeyCode) {
        if self.show_help {
            self.show_help = false;
            return;
        }

        match key {
            KeyCode::Enter => self.submit(),
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.previous(),
            KeyCode::PageUp => self.results.page_up(),
            KeyCode::PageDown => self.results.page_down(),
            code => match self.focus {
                Focus::Slider(field) => match code {
                    KeyCode::Left | KeyCode::Char('h') => self.form.adjust(field, -1),
                    KeyCode::Right | KeyCode::Char('l') => self.form.adjust(field, 1),
                    KeyCode::Home => self.form.adjust(field, i64::MIN / 2),
                    KeyCode::End => self.form.adjust(field, i64::MAX / 2),
                    _ => {}
                },
                Focus::Notes => self.form.edit_notes(code),
            },
        }
    }

    /// Start a search with the current form values.
    ///
    /// Ignored while a search is in flight.
    pub fn submit(&mut self) {
        if !self.state.submit() {
            tracing::debug!("Search already running, ignoring submit");
            return;
        }

        let params = self.form.snapshot();

        let finder = match TripFinder::from_settings(&self.settings, None) {
            Ok(finder) => finder,
            Err(e) => {
                tracing::error!("Could not set up the destination search: {:#}", e);
                self.state.fail(SERVICE_UNREACHABLE_MESSAGE);
                return;
            }
        };

        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let outcome = finder.find(params).await;
            let _ = tx.send(outcome);
        });
        self.pending = Some(rx);
        self.results.scroll_to_top();
    }

    /// Update app state
    pub fn update(&mut self) {
        self.tick = self.tick.wrapping_add(1);

        let Some(rx) = self.pending.as_mut() else {
            return;
        };

        match rx.try_recv() {
            Ok(outcome) => {
                self.pending = None;
                self.state.settle(outcome);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Closed) => {
                tracing::error!("Search task ended without a result");
                self.pending = None;
                self.state.fail(SERVICE_UNREACHABLE_MESSAGE);
            }
        }
    }

    pub fn is_editing_notes(&self) -> bool {
        self.focus == Focus::Notes && !self.show_help
    }

    pub fn is_help_visible(&self) -> bool {
        self.show_help
    }

    /// Toggle help popup
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn form(&self) -> &FormScreen {
        &self.form
    }
}
