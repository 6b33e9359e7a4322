//! Help popup widget

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const SHORTCUTS: [(&str, &str); 9] = [
    ("↑/↓ Tab", "Move between fields"),
    ("←/→ h/l", "Adjust the focused slider"),
    ("Home/End", "Slider to minimum / maximum"),
    ("type", "Edit extra vibes (when focused)"),
    ("Enter", "Find the destination"),
    ("PgUp/PgDn", "Scroll the result"),
    ("?", "Show this help"),
    ("q", "Quit (outside the text field)"),
    ("Esc", "Quit"),
];

/// Help popup that shows keyboard shortcuts
pub struct HelpPopup;

impl HelpPopup {
    pub fn draw(frame: &mut Frame, area: Rect) {
        // Calculate popup area (centered, 60% width, 70% height)
        let popup_width = (area.width as f32 * 0.6) as u16;
        let popup_height = (area.height as f32 * 0.7) as u16;
        let popup_area = Rect {
            x: (area.width - popup_width) / 2,
            y: (area.height - popup_height) / 2,
            width: popup_width,
            height: popup_height,
        };

        // Clear the area behind the popup
        frame.render_widget(Clear, popup_area);

        let mut help_text = vec![
            Line::from(Span::styled(
                "Trip Finder Shortcuts",
                Style::default().fg(Color::Cyan).bold(),
            )),
            Line::from(""),
        ];

        for (keys, action) in SHORTCUTS {
            help_text.push(Line::from(vec![
                Span::styled(format!("{:<11}", keys), Style::default().fg(Color::Yellow)),
                Span::raw(action),
            ]));
        }

        help_text.push(Line::from(""));
        help_text.push(Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )));

        let help = Paragraph::new(help_text).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        );

        frame.render_widget(help, popup_area);
    }
}
