//! Form screen - trip parameter sliders and the free-text field

use crossterm::event::KeyCode;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::trip::{ParameterField, TripParameters};
use crate::tui::Focus;

const BAR_WIDTH: usize = 24;

/// Form screen state
pub struct FormScreen {
    params: TripParameters,
}

impl FormScreen {
    pub fn new(params: TripParameters) -> Self {
        Self { params }
    }

    /// Copy of the current values, taken at submit time.
    pub fn snapshot(&self) -> TripParameters {
        self.params.clone()
    }

    /// Step a slider, clamped to its range.
    pub fn adjust(&mut self, field: ParameterField, steps: i64) {
        let value = field.range().adjust(self.params.get(field), steps);
        self.params = self.params.clone().with(field, value);
    }

    pub fn edit_notes(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char(c) => self.params.additional_input.push(c),
            KeyCode::Backspace => {
                self.params.additional_input.pop();
            }
            _ => {}
        }
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect, focus: Focus, loading: bool) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Distance
                Constraint::Length(3), // Terrain
                Constraint::Length(3), // Big Mac
                Constraint::Length(3), // Sun
                Constraint::Min(4),    // Notes
                Constraint::Length(3), // Submit
            ])
            .split(area.inner(Margin {
                horizontal: 1,
                vertical: 1,
            }));

        let outer = Block::default()
            .title(" Parameters ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta));
        frame.render_widget(outer, area);

        for (i, field) in ParameterField::ALL.iter().enumerate() {
            self.draw_slider(frame, chunks[i], *field, focus == Focus::Slider(*field));
        }

        // Notes
        let editing = focus == Focus::Notes;
        let notes_text = if editing {
            format!("{}█", self.params.additional_input)
        } else if self.params.additional_input.is_empty() {
            "Ex: Good craft beer, paved only, no wind...".to_string()
        } else {
            self.params.additional_input.clone()
        };
        let notes_style = if editing {
            Style::default().fg(Color::LightMagenta)
        } else if self.params.additional_input.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };
        let notes = Paragraph::new(notes_text)
            .style(notes_style)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(" Extra Vibes (Gravel, Beer, etc.) ")
                    .borders(Borders::ALL)
                    .border_style(border_style(editing)),
            );
        frame.render_widget(notes, chunks[4]);

        // Submit button
        let (label, style) = if loading {
            (
                "Calculating Path...",
                Style::default().fg(Color::DarkGray).bg(Color::Black),
            )
        } else {
            (
                "Find the Destination [Enter]",
                Style::default().fg(Color::White).bg(Color::Magenta).bold(),
            )
        };
        let submit = Paragraph::new(label)
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(submit, chunks[5]);
    }

    fn draw_slider(&self, frame: &mut Frame, area: Rect, field: ParameterField, focused: bool) {
        let value = self.params.get(field);
        let range = field.range();

        let line = Line::from(vec![
            Span::styled(
                create_slider_bar(range.ratio(value)),
                Style::default().fg(if focused { Color::Magenta } else { Color::Cyan }),
            ),
            Span::raw(" "),
            Span::styled(
                field.display(value),
                Style::default().fg(Color::LightMagenta).bold(),
            ),
        ]);

        let slider = Paragraph::new(line).block(
            Block::default()
                .title(format!(" {} ", field.label()))
                .borders(Borders::ALL)
                .border_style(border_style(focused)),
        );
        frame.render_widget(slider, area);
    }
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn create_slider_bar(ratio: f64) -> String {
    let filled = ((ratio * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    let empty = BAR_WIDTH - filled;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}
