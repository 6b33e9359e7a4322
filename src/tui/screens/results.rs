//! Results screen - the four display states of a search

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
};

use crate::config::Settings;
use crate::finder::{intelligence_note, SearchResult, SearchState};
use crate::render::RenderedLine;

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Results screen state
pub struct ResultsScreen {
    scroll_offset: usize,
    content_height: usize,
}

impl Default for ResultsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsScreen {
    pub fn new() -> Self {
        Self {
            scroll_offset: 0,
            content_height: 0,
        }
    }

    pub fn draw(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &SearchState,
        settings: &Settings,
        tick: usize,
    ) {
        let block = Block::default()
            .title(" Expedition Intel ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        match state {
            SearchState::Idle => {
                let idle = Paragraph::new(vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        "Awaiting input parameters to plot coordinates.",
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block);
                frame.render_widget(idle, area);
            }
            SearchState::Loading => {
                let spinner = SPINNER[tick / 2 % SPINNER.len()];
                let loading = Paragraph::new(vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        spinner,
                        Style::default().fg(Color::Magenta).bold(),
                    )),
                    Line::from(""),
                    Line::from(Span::styled(
                        "SCANNING THE CONTINENT FOR OPTIMAL RIDES...",
                        Style::default().fg(Color::LightMagenta),
                    )),
                ])
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block);
                frame.render_widget(loading, area);
            }
            SearchState::Error(message) => {
                let error = Paragraph::new(vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        message.to_uppercase(),
                        Style::default().fg(Color::Red).bold(),
                    )),
                ])
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block.border_style(Style::default().fg(Color::Red)));
                frame.render_widget(error, area);
            }
            SearchState::Result(result) => {
                self.draw_result(frame, area, block, result, settings);
            }
        }
    }

    fn draw_result(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        block: Block,
        result: &SearchResult,
        settings: &Settings,
    ) {
        let mut lines: Vec<Line> = result.blocks.iter().map(styled_line).collect();

        if settings.tui.show_links && !result.links.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Map links",
                Style::default().fg(Color::Cyan).bold(),
            )));
            for link in &result.links {
                lines.push(Line::from(vec![
                    Span::styled("  ↗ ", Style::default().fg(Color::Magenta)),
                    Span::styled(link.title.clone(), Style::default().fg(Color::White)),
                    Span::raw(" "),
                    Span::styled(
                        link.uri.clone(),
                        Style::default()
                            .fg(Color::Blue)
                            .add_modifier(Modifier::UNDERLINED),
                    ),
                ]));
            }
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            intelligence_note(settings),
            Style::default().fg(Color::DarkGray).italic(),
        )));

        self.content_height = lines.len();
        let visible_height = area.height.saturating_sub(2) as usize;
        self.scroll_offset = self
            .scroll_offset
            .min(self.content_height.saturating_sub(1));

        let answer = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset as u16, 0))
            .block(block);
        frame.render_widget(answer, area);

        if self.content_height > visible_height {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"));

            let mut scrollbar_state = ScrollbarState::new(self.content_height)
                .position(self.scroll_offset)
                .viewport_content_length(visible_height);

            frame.render_stateful_widget(
                scrollbar,
                area.inner(Margin {
                    horizontal: 0,
                    vertical: 1,
                }),
                &mut scrollbar_state,
            );
        }
    }

    pub fn page_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(10);
    }

    pub fn page_down(&mut self) {
        self.scroll_offset = (self.scroll_offset + 10).min(self.content_height.saturating_sub(1));
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }
}

/// Fixed visual weight per block kind.
pub fn styled_line(block: &RenderedLine) -> Line<'static> {
    match block {
        RenderedLine::Heading1(text) => Line::from(Span::styled(
            text.clone(),
            Style::default().fg(Color::Magenta).bold(),
        )),
        RenderedLine::Heading2(text) => Line::from(Span::styled(
            text.to_uppercase(),
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )),
        RenderedLine::Heading3(text) => Line::from(Span::styled(
            text.clone(),
            Style::default().fg(Color::Cyan).bold(),
        )),
        RenderedLine::BulletItem(text) => Line::from(vec![
            Span::styled("  • ", Style::default().fg(Color::Magenta)),
            Span::styled(text.clone(), Style::default().fg(Color::LightCyan)),
        ]),
        RenderedLine::Paragraph(text) => Line::from(Span::styled(
            text.clone(),
            Style::default().fg(Color::Gray),
        )),
    }
}
